//! External resource handles
//!
//! This module contains the seams between the export pipeline and the
//! outside world:
//!
//! - `source`: read access to the Subversion repository being exported
//! - `repository`: the aggregate handle tying the source to the output and
//!   diagnostic channels

pub mod repository;
pub mod source;
