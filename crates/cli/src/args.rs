use crate::prompt::PromptPolicy;
use clap::Parser;
use ranger_passwd_core::{CredentialDraft, Error, Result};

/// Change the password of a Ranger admin user.
///
/// Takes exactly three positional values: loginID, currentPassword and
/// newPassword. Empty values ("") are asked for interactively; passwords are
/// read without echo. Values are taken verbatim, even when they start with `-`.
#[derive(Parser)]
#[command(name = "changepasswordutil")]
#[command(about = "Change the password of a Ranger admin user", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// loginID, currentPassword and newPassword
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    values: Vec<String>,

    /// Give up after this many unusable answers to a prompt (default: keep asking)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    max_attempts: Option<u32>,

    /// Log debug messages
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn prompt_policy(&self) -> PromptPolicy {
        PromptPolicy::from(self.max_attempts)
    }

    /// Move the positional values into a credential draft
    pub fn into_draft(self) -> Result<CredentialDraft> {
        let [login_id, current_password, new_password]: [String; 3] = self
            .values
            .try_into()
            .map_err(|values: Vec<String>| {
                tracing::debug!(count = values.len(), "expected three positional values");
                Error::usage("Invalid argument list.")
            })?;
        Ok(CredentialDraft::new(login_id, current_password, new_password))
    }
}
