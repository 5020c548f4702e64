//! Runtime configuration resolved once from the process environment

use crate::constants::{
    EWS_DIR, EWS_LIB_DIR, EWS_LOGS_DIR, EWS_WEBAPP_DIR, JAVA_BIN_DIR, JAVA_EXECUTABLE,
    JAVA_HOME_VAR, JAVA_OPTS_VAR, RANGER_ADMIN_HOME_VAR,
};
use crate::errors::{Error, Result};
use crate::types::PlatformFamily;
use std::env::VarError;
use std::path::{Path, PathBuf};

/// The environment variables the tool reads, captured in one place
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    pub ranger_admin_home: Option<String>,
    pub java_home: Option<String>,
    pub java_opts: Option<String>,
}

impl EnvSnapshot {
    /// Read the relevant variables from the current process environment.
    ///
    /// A value that is present but not valid unicode is a configuration error.
    pub fn capture() -> Result<Self> {
        Ok(Self {
            ranger_admin_home: read_var(RANGER_ADMIN_HOME_VAR)?,
            java_home: read_var(JAVA_HOME_VAR)?,
            java_opts: read_var(JAVA_OPTS_VAR)?,
        })
    }
}

fn read_var(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(value)) => Err(Error::configuration(format!(
            "{name} is not valid unicode: {}",
            value.to_string_lossy()
        ))),
    }
}

/// Split `JAVA_OPTS` into arguments the way the platform family's launcher
/// would: POSIX shell words on Linux, whitespace and double quotes on Windows
fn split_java_opts(opts: &str, platform: PlatformFamily) -> Option<Vec<String>> {
    match platform {
        PlatformFamily::Linux => shlex::split(opts),
        PlatformFamily::Windows => split_windows_words(opts),
    }
}

// Backslashes are path separators here and stay as they are.
fn split_windows_words(opts: &str) -> Option<Vec<String>> {
    let mut words = Vec::new();
    let mut current: Option<String> = None;
    let mut quoted = false;

    for c in opts.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                current.get_or_insert_with(String::new);
            }
            c if c.is_whitespace() && !quoted => {
                if let Some(word) = current.take() {
                    words.push(word);
                }
            }
            c => current.get_or_insert_with(String::new).push(c),
        }
    }

    if quoted {
        return None;
    }
    words.extend(current);
    Some(words)
}

/// Immutable configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    platform: PlatformFamily,
    java_bin: PathBuf,
    java_opts: Vec<String>,
    ews_lib: String,
    app_home: String,
    log_dir: String,
}

impl RuntimeConfig {
    /// Resolve the configuration from an environment snapshot.
    ///
    /// `RANGER_ADMIN_HOME` falls back to `cwd` when unset or empty. A missing or
    /// empty `JAVA_HOME` is fatal, as is `JAVA_OPTS` with unbalanced quoting.
    pub fn resolve(env: &EnvSnapshot, cwd: &Path, platform: PlatformFamily) -> Result<Self> {
        let java_home = env
            .java_home
            .as_deref()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                Error::configuration(format!(
                    "---------- {JAVA_HOME_VAR} environment property not defined, aborting installation. ----------"
                ))
            })?;

        let admin_home = env
            .ranger_admin_home
            .as_deref()
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| cwd.to_string_lossy().into_owned());

        let java_opts = match env.java_opts.as_deref() {
            Some(opts) => split_java_opts(opts, platform).ok_or_else(|| {
                Error::configuration(format!(
                    "{JAVA_OPTS_VAR} could not be split into arguments: {opts}"
                ))
            })?,
            None => Vec::new(),
        };

        let java_bin = format!(
            "{}{}",
            platform.join_path(java_home, &[JAVA_BIN_DIR, JAVA_EXECUTABLE]),
            platform.executable_suffix()
        );

        Ok(Self {
            platform,
            ews_lib: platform.join_path(&admin_home, &[EWS_DIR, EWS_LIB_DIR]),
            app_home: platform.join_path(&admin_home, &[EWS_DIR, EWS_WEBAPP_DIR]),
            log_dir: platform.join_path(&admin_home, &[EWS_DIR, EWS_LOGS_DIR]),
            java_bin: PathBuf::from(java_bin),
            java_opts,
        })
    }

    /// Replace the Java executable, e.g. with one the operator pointed at
    #[must_use]
    pub fn with_java_bin(self, java_bin: impl Into<PathBuf>) -> Self {
        Self {
            java_bin: java_bin.into(),
            ..self
        }
    }

    pub fn platform(&self) -> PlatformFamily {
        self.platform
    }

    pub fn java_bin(&self) -> &Path {
        &self.java_bin
    }

    pub fn java_opts(&self) -> &[String] {
        &self.java_opts
    }

    pub fn ews_lib(&self) -> &str {
        &self.ews_lib
    }

    pub fn app_home(&self) -> &str {
        &self.app_home
    }

    pub fn log_dir(&self) -> &str {
        &self.log_dir
    }
}
