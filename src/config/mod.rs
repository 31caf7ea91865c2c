//! Site data loading for `data.json`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Typed views of the data.json sections
//! │   ├── blog       # blog.posts / blog.items
//! │   ├── personal   # personal
//! │   ├── sections   # about / projects / portfolio / contact
//! │   └── seo        # seo
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError
//! │   ├── paths      # ProjectPaths
//! │   └── value      # Scalar, NonEmpty, serde helpers
//! └── mod.rs         # SiteData (this file)
//! ```
//!
//! The same document drives the client-side app, so most of its keys (hero,
//! resume, tech, ...) are ignored here.

pub mod section;
pub mod types;
mod util;

pub use section::{
    BlogConfig, BlogPost, OrganizationConfig, PersonalConfig, SectionFlags, SectionToggle,
    SeoConfig,
};
pub use types::{ConfigError, NonEmpty, ParseFailure, ProjectPaths, Scalar, string_values};

use crate::debug;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use types::null_default;
use util::find_first_existing;
pub use util::parse_json;

/// Where `data.json` is looked for, relative to the project root, in order.
pub const DATA_CANDIDATES: [&str; 4] = [
    "public/data/data.json",
    "src/data/data.json",
    "data/data.json",
    "dist/data/data.json",
];

// ============================================================================
// root document
// ============================================================================

/// The parts of `data.json` the metadata generator consumes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteData {
    /// File the data was loaded from (internal use only)
    #[serde(skip)]
    pub source: PathBuf,

    #[serde(deserialize_with = "null_default")]
    pub seo: SeoConfig,

    #[serde(deserialize_with = "null_default")]
    pub personal: PersonalConfig,

    #[serde(deserialize_with = "null_default")]
    pub blog: BlogConfig,

    pub about: Option<SectionToggle>,
    pub projects: Option<serde_json::Value>,
    pub portfolio: Option<SectionToggle>,
    pub contact: Option<serde_json::Value>,
}

impl SiteData {
    /// Locate and load `data.json`.
    ///
    /// An explicit path bypasses the candidate search but must exist.
    pub fn load(paths: &ProjectPaths, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => {
                let path = paths.root_join(path);
                if !path.is_file() {
                    return Err(ConfigError::NotFound {
                        candidates: vec![path],
                    });
                }
                path
            }
            None => find_first_existing(paths.root(), &DATA_CANDIDATES).ok_or_else(|| {
                ConfigError::NotFound {
                    candidates: DATA_CANDIDATES.iter().map(|c| paths.root_join(c)).collect(),
                }
            })?,
        };

        debug!("config"; "loading {}", path.display());
        Self::from_path(&path)
    }

    /// Read and parse a data file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let mut data = Self::parse(&content).map_err(|reason| ConfigError::parse(path, reason))?;
        data.source = path.to_path_buf();
        Ok(data)
    }

    /// Parse file content: BOM stripped, HTML rejected, schema checked.
    pub fn parse(content: &str) -> Result<Self, ParseFailure> {
        parse_json(content)
    }

    /// Which sections get a breadcrumb entry.
    pub fn section_flags(&self) -> SectionFlags {
        SectionFlags {
            about: self.about.is_some_and(|s| s.enabled),
            projects: self.projects.is_some(),
            portfolio: self.portfolio.is_some_and(|s| s.enabled),
            contact: self.contact.is_some(),
        }
    }
}

// ============================================================================
// tests
// ============================================================================
