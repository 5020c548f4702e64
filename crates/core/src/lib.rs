//! Core domain types, errors, and constants for the Ranger admin password
//! change helper.
//!
//! Everything in this crate is free of terminal and process side effects so
//! the whole decision path of a password change can be exercised in tests.
//!
//! ## Key Components
//!
//! - **`errors`**: The `Error` enum and `Result` alias. Every failure of the
//!   tool maps to one variant and to exit status 1.
//! - **`types`**: Credentials with zeroizing password storage, the platform
//!   family, and the immutable runtime configuration.
//! - **`validation`**: The old/new password checks.
//! - **`classpath`** and **`command`**: Pure construction of the Java
//!   classpath and of the child process argument vector.

pub mod classpath;
pub mod command;
pub mod constants;
pub mod errors;
pub mod types;
pub mod validation;

pub use self::{
    classpath::build_classpath,
    command::CommandInvocation,
    constants::*,
    errors::{Error, Result},
    types::*,
    validation::{validate_new_password, validate_password_change},
};
