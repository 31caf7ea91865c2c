//! Static-asset existence probe.
//!
//! Icons referenced from generated files should point at something that was
//! actually shipped. Candidates are web paths; each is checked in the build
//! output first, then in the public source directory (which the bundler
//! copies into the output).

use crate::config::ProjectPaths;
use std::path::{Component, Path};

/// First candidate that exists on disk, as a `/`-rooted web path.
///
/// ```text
/// /assets/images/icon-512.png
///   dist/assets/images/icon-512.png     ← checked first
///   public/assets/images/icon-512.png   ← then here
/// ```
pub fn find_static_web_path<'a, I>(candidates: I, paths: &ProjectPaths) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates.into_iter().find_map(|candidate| {
        let rel = candidate.trim_start_matches('/');
        if rel.is_empty() {
            return None;
        }
        [paths.output_dir(), paths.public_dir()]
            .into_iter()
            .any(|dir| dir.join(rel).is_file())
            .then(|| to_web_path(Path::new(rel)))
    })
}

/// Relative filesystem path -> `/`-joined web path.
pub fn to_web_path(rel: &Path) -> String {
    let mut web = String::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            web.push('/');
            web.push_str(&part.to_string_lossy());
        }
    }
    if web.is_empty() {
        web.push('/');
    }
    web
}
