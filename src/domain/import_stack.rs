//! Per-branch record of open imports for cycle detection.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Files open on one branch of the import tree, outermost first.
///
/// Descending into an import produces a new stack; siblings never see each
/// other's entries, so the same file imported twice side by side is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportStack {
    paths: Vec<PathBuf>,
}

impl ImportStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack for a top-level document that lives on disk.
    pub fn rooted_at(path: impl Into<PathBuf>) -> Self {
        Self { paths: vec![path.into()] }
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// Copy of this stack with `path` pushed, or `CircularImport` if it is already open.
    pub fn descend(&self, path: &Path) -> Result<ImportStack, AppError> {
        if self.contains(path) {
            let mut chain = self.paths.clone();
            chain.push(path.to_path_buf());
            return Err(AppError::CircularImport { chain });
        }
        let mut paths = self.paths.clone();
        paths.push(path.to_path_buf());
        Ok(Self { paths })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descend_leaves_parent_untouched() {
        let root = ImportStack::rooted_at("/docs/main.md");
        let child = root.descend(Path::new("/docs/a.md")).unwrap();
        assert_eq!(root, ImportStack::rooted_at("/docs/main.md"));
        assert!(child.contains(Path::new("/docs/main.md")));
        assert!(child.contains(Path::new("/docs/a.md")));
        assert!(!root.contains(Path::new("/docs/a.md")));
    }

    #[test]
    fn siblings_can_open_the_same_file() {
        let root = ImportStack::rooted_at("/docs/main.md");
        assert!(root.descend(Path::new("/docs/a.md")).is_ok());
        assert!(root.descend(Path::new("/docs/a.md")).is_ok());
    }

    #[test]
    fn reentering_an_open_file_reports_the_chain() {
        let stack = ImportStack::rooted_at("/docs/a.md").descend(Path::new("/docs/b.md")).unwrap();
        match stack.descend(Path::new("/docs/a.md")) {
            Err(AppError::CircularImport { chain }) => {
                assert_eq!(
                    chain,
                    vec![
                        PathBuf::from("/docs/a.md"),
                        PathBuf::from("/docs/b.md"),
                        PathBuf::from("/docs/a.md")
                    ]
                );
            }
            other => panic!("expected circular import, got {:?}", other),
        }
    }
}
