//! Shared utilities for the password change helper
//!
//! Currently this is the logging stack: subscriber initialization and the
//! tagged line format every message is written in.

pub mod tracing;

pub use self::tracing::{init, level_tag, TaggedFormatter};
