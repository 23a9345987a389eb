//! Changed-path records
//!
//! A revision's change-set is a list of `PathChange` records, one per path,
//! as reported by the revision source. Paths are absolute within the
//! repository filesystem (leading slash); directories carry their own flag
//! because they are never exported.

pub mod scope;

use derive_new::new;

/// Revision numbers are dense positive integers starting at 1.
pub type RevisionNumber = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
}

/// One changed path within a revision.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PathChange {
    /// Absolute path within the repository filesystem
    pub path: String,
    pub kind: ChangeKind,
    pub is_dir: bool,
}
