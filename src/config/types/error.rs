//! Configuration error types.

use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Site data loading errors. All of them abort the run.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("data.json not found (searched: {})", join_paths(.candidates))]
    NotFound { candidates: Vec<PathBuf> },

    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    // NOTE: reason is not a #[source] - it is already part of the message
    #[error("failed to parse `{}`: {reason}", .path.display())]
    Parse { path: PathBuf, reason: ParseFailure },
}

/// Why a data file could not be turned into site data.
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// An HTML page (typically a dev-server 404) served in place of JSON.
    #[error("not JSON (content looks like HTML)")]
    HtmlLike,

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn parse(path: &Path, reason: ParseFailure) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            reason,
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
