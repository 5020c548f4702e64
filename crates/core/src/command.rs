//! Command line for the external password change utility.
//!
//! The child is always launched from an explicit argument vector. On the
//! Linux family each element reaches `execve` unchanged; on the Windows family
//! the standard library quotes every element when it assembles the command
//! line, so a credential always arrives as exactly one argument.

use crate::classpath::build_classpath;
use crate::constants::{CHANGE_PASSWORD_MAIN_CLASS, LOGBACK_CONFIGURATION_FILE, MASKED_SECRET};
use crate::types::{Credentials, RuntimeConfig, SecretString};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum Argument {
    Plain(String),
    Secret(SecretString),
}

impl Argument {
    fn value(&self) -> &str {
        match self {
            Self::Plain(value) => value,
            Self::Secret(secret) => secret.expose(),
        }
    }

    fn masked(&self) -> &str {
        match self {
            Self::Plain(value) => value,
            Self::Secret(_) => MASKED_SECRET,
        }
    }
}

/// Executable plus argument vector, built once and executed once
#[derive(Debug, Clone)]
pub struct CommandInvocation {
    program: PathBuf,
    args: Vec<Argument>,
}

impl CommandInvocation {
    /// Assemble the Java invocation of the change password utility:
    /// `java [JAVA_OPTS...] -Dlogdir=<logs> -Dlogback.configurationFile=<file>
    /// -cp <classpath> <main class> <user> <old password> <new password>`
    pub fn change_password(config: &RuntimeConfig, credentials: &Credentials) -> Self {
        let classpath = build_classpath(config.app_home(), config.ews_lib(), config.platform());

        let mut args: Vec<Argument> = config
            .java_opts()
            .iter()
            .cloned()
            .map(Argument::Plain)
            .collect();
        args.extend([
            Argument::Plain(format!("-Dlogdir={}", config.log_dir())),
            Argument::Plain(format!(
                "-Dlogback.configurationFile={LOGBACK_CONFIGURATION_FILE}"
            )),
            Argument::Plain("-cp".to_string()),
            Argument::Plain(classpath),
            Argument::Plain(CHANGE_PASSWORD_MAIN_CLASS.to_string()),
            Argument::Plain(credentials.username().to_string()),
            Argument::Secret(credentials.old_password().clone()),
            Argument::Secret(credentials.new_password().clone()),
        ]);

        Self {
            program: config.java_bin().to_path_buf(),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Short program name for error messages
    pub fn program_name(&self) -> String {
        self.program
            .file_name()
            .unwrap_or(self.program.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

    /// The real arguments, secrets included
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(Argument::value)
    }

    /// The arguments with every secret replaced by a mask
    pub fn masked_args(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(Argument::masked)
    }

    /// Shell-quoted rendering of the masked command, safe for logs
    pub fn display_line(&self) -> String {
        let program = self.program.to_string_lossy();
        shell_words::join(std::iter::once(&*program).chain(self.masked_args()))
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_line())
    }
}
