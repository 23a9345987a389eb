//! Subversion to git-fast-import stream converter
//!
//! Walks every revision of a local Subversion repository in order and writes
//! the file-level changes under `/trunk/` to an output channel as a stream
//! that `git fast-import` can replay.
//!
//! The crate is organized in three layers:
//!
//! - `areas`: handles to external resources (the source repository and the
//!   output/diagnostic channels)
//! - `artifacts`: the domain types and algorithms (changed paths, scope
//!   filtering, mark allocation, stream directives)
//! - `commands`: the operations exposed through the binary

pub mod areas;
pub mod artifacts;
pub mod commands;
