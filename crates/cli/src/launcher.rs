//! Child process execution

use ranger_passwd_core::{CommandInvocation, Error, Result};
use std::process::{Command, Stdio};

/// Runs a prepared invocation to completion
pub trait ProcessLauncher {
    /// Launch the command, wait for it, and return its exit code; `None` when
    /// the child did not exit normally (e.g. it was killed by a signal)
    fn launch(&self, invocation: &CommandInvocation) -> Result<Option<i32>>;
}

impl<L: ProcessLauncher + ?Sized> ProcessLauncher for &L {
    fn launch(&self, invocation: &CommandInvocation) -> Result<Option<i32>> {
        (**self).launch(invocation)
    }
}

/// Production launcher; the child shares this process's stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn launch(&self, invocation: &CommandInvocation) -> Result<Option<i32>> {
        let status = Command::new(invocation.program())
            .args(invocation.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                Error::command_execution(
                    invocation.program_name(),
                    format!("failed to spawn command: {e}"),
                    None,
                )
            })?;

        Ok(status.code())
    }
}
