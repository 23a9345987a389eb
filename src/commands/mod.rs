//! Command implementations
//!
//! The binary exposes a single operation: `export`, which crawls every
//! revision of the source repository in order and writes the fast-import
//! stream for the exported subtree.

pub mod export;
