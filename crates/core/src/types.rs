//! Domain types for a single password change run

mod config;
mod credentials;
mod platform;

pub use config::{EnvSnapshot, RuntimeConfig};
pub use credentials::{CredentialDraft, Credentials, SecretString};
pub use platform::PlatformFamily;
