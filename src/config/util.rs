//! Configuration utility functions.

use super::types::ParseFailure;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Return the first candidate (joined onto `root`) that exists.
///
/// # Example
/// ```text
/// root/public/data/data.json   ← missing
/// root/src/data/data.json      ← found!
/// ```
pub fn find_first_existing(root: &Path, candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|rel| root.join(rel))
        .find(|path| path.is_file())
}

/// Strip a leading UTF-8 byte-order mark.
pub fn strip_bom(s: &str) -> &str {
    s.strip_prefix('\u{FEFF}').unwrap_or(s)
}

/// Heuristic for an HTML page (e.g. a dev-server 404) where JSON was expected.
pub fn looks_like_html(trimmed: &str) -> bool {
    trimmed.starts_with('<')
}

/// Parse a JSON document: BOM stripped, trimmed, HTML rejected.
pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, ParseFailure> {
    let trimmed = strip_bom(content).trim();
    if looks_like_html(trimmed) {
        return Err(ParseFailure::HtmlLike);
    }
    Ok(serde_json::from_str(trimmed)?)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_first_existing_order() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("b/data.json"), "{}").unwrap();

        let found = find_first_existing(dir.path(), &["a/data.json", "b/data.json"]);
        assert_eq!(found, Some(dir.path().join("b/data.json")));

        fs::write(dir.path().join("a/data.json"), "{}").unwrap();
        let found = find_first_existing(dir.path(), &["a/data.json", "b/data.json"]);
        assert_eq!(found, Some(dir.path().join("a/data.json")));
    }

    #[test]
    fn test_find_first_existing_skips_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("data.json")).unwrap();
        assert_eq!(find_first_existing(dir.path(), &["data.json"]), None);
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{FEFF}{}"), "{}");
        assert_eq!(strip_bom("{}"), "{}");
    }

    #[test]
    fn test_parse_json() {
        let value: serde_json::Value = parse_json("\u{FEFF} {\"a\": 1}\n").unwrap();
        assert_eq!(value["a"], 1);
        assert!(matches!(
            parse_json::<serde_json::Value>("<html>"),
            Err(ParseFailure::HtmlLike)
        ));
        assert!(matches!(
            parse_json::<serde_json::Value>("{"),
            Err(ParseFailure::Json(_))
        ));
    }

    #[test]
    fn test_looks_like_html() {
        assert!(looks_like_html("<!doctype html>"));
        assert!(!looks_like_html("{\"a\":1}"));
    }
}
