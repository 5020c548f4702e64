//! Credential triple handling with zeroizing password storage

use crate::errors::{Error, Result};
use crate::validation::{validate_new_password, validate_password_change};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secure string type that zeroizes on drop and never prints its contents
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap a secret value
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the secret value (be careful where it ends up)
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Credential triple as supplied on the command line, possibly with empty
/// fields that still have to be prompted for
#[derive(Debug, Clone, Default)]
pub struct CredentialDraft {
    username: String,
    old_password: SecretString,
    new_password: SecretString,
}

impl CredentialDraft {
    /// Create a draft from the three positional values
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        old_password: impl Into<String>,
        new_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            old_password: SecretString::new(old_password),
            new_password: SecretString::new(new_password),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn old_password(&self) -> &SecretString {
        &self.old_password
    }

    #[must_use]
    pub fn new_password(&self) -> &SecretString {
        &self.new_password
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_old_password(&mut self, password: SecretString) {
        self.old_password = password;
    }

    pub fn set_new_password(&mut self, password: SecretString) {
        self.new_password = password;
    }

    /// Run the password checks that are already decidable from the supplied
    /// values, so a bad command line fails before anything else is looked at.
    pub fn precheck(&self) -> Result<()> {
        match (self.old_password.is_empty(), self.new_password.is_empty()) {
            (false, false) => {
                validate_password_change(self.old_password.expose(), self.new_password.expose())
            }
            (true, false) => validate_new_password(self.new_password.expose()),
            _ => Ok(()),
        }
    }

    /// Turn a fully populated draft into validated credentials
    pub fn finish(self) -> Result<Credentials> {
        ensure_present(&self.username, "user name")?;
        ensure_present(self.old_password.expose(), "current password")?;
        ensure_present(self.new_password.expose(), "new password")?;
        validate_password_change(self.old_password.expose(), self.new_password.expose())?;

        Ok(Credentials {
            username: self.username,
            old_password: self.old_password,
            new_password: self.new_password,
        })
    }
}

fn ensure_present(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::validation(format!(
            "Input Error: {field} must not be empty"
        )));
    }
    Ok(())
}

/// Validated credential triple: all fields non-empty, old and new password
/// differ, and the new password passed the character check
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    old_password: SecretString,
    new_password: SecretString,
}

impl Credentials {
    /// Build and validate credentials in one step
    pub fn new(
        username: impl Into<String>,
        old_password: impl Into<String>,
        new_password: impl Into<String>,
    ) -> Result<Self> {
        CredentialDraft::new(username, old_password, new_password).finish()
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn old_password(&self) -> &SecretString {
        &self.old_password
    }

    #[must_use]
    pub fn new_password(&self) -> &SecretString {
        &self.new_password
    }
}
