//! Project directory layout.

use std::path::{Path, PathBuf};

/// Root, build output and static source directories of the site project.
///
/// Relative `output` / `public` are taken relative to `root`.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
    output: PathBuf,
    public: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>, output: &Path, public: &Path) -> Self {
        let root = root.into();
        Self {
            output: root.join(output),
            public: root.join(public),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output_dir(&self) -> &Path {
        &self.output
    }

    pub fn public_dir(&self) -> &Path {
        &self.public
    }

    pub fn root_join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.join(rel)
    }

    /// Join a web path (`/site.webmanifest`) onto the output directory.
    pub fn output_join(&self, web_path: &str) -> PathBuf {
        self.output.join(web_path.trim_start_matches('/'))
    }

    /// Join a web path onto the public (static source) directory.
    pub fn public_join(&self, web_path: &str) -> PathBuf {
        self.public.join(web_path.trim_start_matches('/'))
    }
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self::new(".", Path::new("dist"), Path::new("public"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_relative_to_root() {
        let paths = ProjectPaths::new("/site", Path::new("dist"), Path::new("public"));
        assert_eq!(paths.output_dir(), Path::new("/site/dist"));
        assert_eq!(paths.public_dir(), Path::new("/site/public"));
        assert_eq!(
            paths.output_join("/site.webmanifest"),
            Path::new("/site/dist/site.webmanifest")
        );
        assert_eq!(
            paths.public_join("//assets/icon.png"),
            Path::new("/site/public/assets/icon.png")
        );
    }

    #[test]
    fn test_absolute_output_wins() {
        let paths = ProjectPaths::new("/site", Path::new("/tmp/out"), Path::new("public"));
        assert_eq!(paths.output_dir(), Path::new("/tmp/out"));
    }
}
