//! fast-import stream directives
//!
//! The output protocol has two directive shapes:
//!
//! ```text
//! blob                          commit <branch-ref>
//! mark :<N>                     D <path>        (one line per change)
//! data <L>                      M 644 :<N> <path>
//! <L raw content bytes>
//!                               (blank line terminator)
//! ```
//!
//! Blob directives must precede the commit directive that references their
//! marks; the downstream importer only resolves backward references.

pub mod change_line;
pub mod sink;

/// File mode emitted for every exported file (regular, non-executable).
pub const FILE_MODE: &str = "644";
