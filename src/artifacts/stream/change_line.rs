use crate::artifacts::marks::Mark;
use crate::artifacts::stream::FILE_MODE;

/// One line of a commit directive's change list: either a deletion or a
/// modification referencing an earlier blob. Paths are relative to the
/// exported subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeLine {
    Delete { path: String },
    Modify { mark: Mark, path: String },
}

impl ChangeLine {
    pub fn delete(path: impl Into<String>) -> Self {
        ChangeLine::Delete { path: path.into() }
    }

    pub fn modify(mark: Mark, path: impl Into<String>) -> Self {
        ChangeLine::Modify {
            mark,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ChangeLine::Delete { path } => path,
            ChangeLine::Modify { path, .. } => path,
        }
    }
}

impl std::fmt::Display for ChangeLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeLine::Delete { path } => write!(f, "D {path}"),
            ChangeLine::Modify { mark, path } => write!(f, "M {FILE_MODE} {mark} {path}"),
        }
    }
}
