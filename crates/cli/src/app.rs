//! The password change run, start to finish.
//!
//! The flow is linear: pre-check the supplied passwords, resolve the runtime
//! configuration, locate Java, prompt for missing credentials, validate,
//! build the command, run it, and judge its exit code.

use crate::launcher::ProcessLauncher;
use crate::locator::locate_java;
use crate::prompt::{prompt_non_empty, prompt_secret, PromptPolicy, Prompter};
use ranger_passwd_core::{
    CommandInvocation, CredentialDraft, EnvSnapshot, Error, PlatformFamily, Result,
    RuntimeConfig, SecretString,
};
use std::path::PathBuf;
use tracing::{debug, info};

pub const USERNAME_PROMPT: &str = "Enter user name:";
pub const CURRENT_PASSWORD_PROMPT: &str = "Enter current password:";
pub const NEW_PASSWORD_PROMPT: &str = "Enter new password:";

/// Everything one run needs, gathered up front so the run itself performs no
/// ambient lookups
pub struct PasswordChangeInvoker<P, L> {
    env: EnvSnapshot,
    cwd: PathBuf,
    platform: PlatformFamily,
    policy: PromptPolicy,
    prompter: P,
    launcher: L,
}

impl<P: Prompter, L: ProcessLauncher> PasswordChangeInvoker<P, L> {
    pub fn new(
        env: EnvSnapshot,
        cwd: impl Into<PathBuf>,
        platform: PlatformFamily,
        prompter: P,
        launcher: L,
    ) -> Self {
        Self {
            env,
            cwd: cwd.into(),
            platform,
            policy: PromptPolicy::unbounded(),
            prompter,
            launcher,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: PromptPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Change the password described by `draft`
    pub fn run(mut self, mut draft: CredentialDraft) -> Result<()> {
        draft.precheck()?;

        let config = RuntimeConfig::resolve(&self.env, &self.cwd, self.platform)?;
        let java_bin = locate_java(config.java_bin(), &mut self.prompter, self.policy)?;
        info!("Using Java:{}", java_bin.display());
        let config = config.with_java_bin(java_bin);

        self.collect_missing(&mut draft)?;
        let credentials = draft.finish()?;

        let invocation = CommandInvocation::change_password(&config, &credentials);
        debug!("Running {invocation}");

        match self.launcher.launch(&invocation)? {
            Some(0) => {
                info!("Password updated successfully");
                Ok(())
            }
            exit_code => Err(Error::command_execution(
                invocation.program_name(),
                format!("Unable to update password of user:{}", credentials.username()),
                exit_code,
            )),
        }
    }

    fn collect_missing(&mut self, draft: &mut CredentialDraft) -> Result<()> {
        if draft.username().is_empty() {
            let username =
                prompt_non_empty(&mut self.prompter, self.policy, "user name", USERNAME_PROMPT)?;
            draft.set_username(username);
        }
        if draft.old_password().is_empty() {
            let password = prompt_secret(
                &mut self.prompter,
                self.policy,
                "current password",
                CURRENT_PASSWORD_PROMPT,
            )?;
            draft.set_old_password(SecretString::from(password));
        }
        if draft.new_password().is_empty() {
            let password = prompt_secret(
                &mut self.prompter,
                self.policy,
                "new password",
                NEW_PASSWORD_PROMPT,
            )?;
            draft.set_new_password(SecretString::from(password));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::tests::ScriptedPrompter;
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct RecordingLauncher {
        exit_code: Option<i32>,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl RecordingLauncher {
        fn exiting(exit_code: Option<i32>) -> Self {
            Self {
                exit_code,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn launched(&self) -> bool {
            !self.calls.borrow().is_empty()
        }

        fn last_args(&self) -> Vec<String> {
            self.calls.borrow().last().cloned().unwrap_or_default()
        }
    }

    impl ProcessLauncher for RecordingLauncher {
        fn launch(&self, invocation: &CommandInvocation) -> Result<Option<i32>> {
            let mut call = vec![invocation.program().display().to_string()];
            call.extend(invocation.args().map(str::to_string));
            self.calls.borrow_mut().push(call);
            Ok(self.exit_code)
        }
    }

    /// Fake installation with `<root>/jdk/bin/java` present
    struct Install {
        root: TempDir,
    }

    impl Install {
        fn new() -> Self {
            let root = TempDir::new().unwrap();
            fs::create_dir_all(root.path().join("jdk/bin")).unwrap();
            fs::write(root.path().join("jdk/bin/java"), "").unwrap();
            Self { root }
        }

        fn java_home(&self) -> String {
            self.root.path().join("jdk").display().to_string()
        }

        fn env(&self) -> EnvSnapshot {
            EnvSnapshot {
                ranger_admin_home: Some(self.root.path().join("admin").display().to_string()),
                java_home: Some(self.java_home()),
                java_opts: None,
            }
        }
    }

    fn invoker<'a>(
        env: EnvSnapshot,
        prompter: &'a mut ScriptedPrompter,
        launcher: &'a RecordingLauncher,
    ) -> PasswordChangeInvoker<&'a mut ScriptedPrompter, &'a RecordingLauncher> {
        PasswordChangeInvoker::new(env, "/", PlatformFamily::Linux, prompter, launcher)
    }

    #[test]
    fn test_equal_passwords_fail_before_java_lookup() {
        let mut prompter = ScriptedPrompter::new();
        let launcher = RecordingLauncher::exiting(Some(0));

        let err = invoker(EnvSnapshot::default(), &mut prompter, &launcher)
            .run(CredentialDraft::new("alice", "oldPw1", "oldPw1"))
            .unwrap_err();

        assert!(err
            .to_string()
            .contains("Old Password and New Password argument are same"));
        assert!(prompter.prompts.is_empty());
        assert!(!launcher.launched());
    }

    #[test]
    fn test_forbidden_character_fails() {
        let install = Install::new();
        let mut prompter = ScriptedPrompter::new();
        let launcher = RecordingLauncher::exiting(Some(0));

        let err = invoker(install.env(), &mut prompter, &launcher)
            .run(CredentialDraft::new("alice", "oldPw1", "new`Pw2"))
            .unwrap_err();

        assert!(matches!(err, Error::Validation { .. }));
        assert!(err.to_string().contains("unsupported special characters"));
        assert!(!launcher.launched());
    }

    #[test]
    fn test_missing_java_home_fails_without_prompting() {
        let mut prompter = ScriptedPrompter::new().secret("oldPw1");
        let launcher = RecordingLauncher::exiting(Some(0));

        let err = invoker(EnvSnapshot::default(), &mut prompter, &launcher)
            .run(CredentialDraft::new("alice", "", "newPw2"))
            .unwrap_err();

        assert!(matches!(err, Error::Configuration { .. }));
        assert!(prompter.prompts.is_empty());
        assert!(!launcher.launched());
    }

    #[test]
    fn test_successful_change() {
        let install = Install::new();
        let mut prompter = ScriptedPrompter::new();
        let launcher = RecordingLauncher::exiting(Some(0));

        invoker(install.env(), &mut prompter, &launcher)
            .run(CredentialDraft::new("alice", "oldPw1", "newPw2"))
            .unwrap();

        let args = launcher.last_args();
        assert_eq!(
            Path::new(&args[0]),
            install.root.path().join("jdk/bin/java")
        );
        assert_eq!(&args[args.len() - 4..], [
            "org.apache.ranger.patch.cliutil.ChangePasswordUtil",
            "alice",
            "oldPw1",
            "newPw2"
        ]);
        assert!(prompter.prompts.is_empty());
    }

    #[test]
    fn test_nonzero_exit_is_failure() {
        let install = Install::new();
        let mut prompter = ScriptedPrompter::new();
        let launcher = RecordingLauncher::exiting(Some(2));

        let err = invoker(install.env(), &mut prompter, &launcher)
            .run(CredentialDraft::new("alice", "oldPw1", "newPw2"))
            .unwrap_err();

        assert!(matches!(
            err,
            Error::CommandExecution {
                exit_code: Some(2),
                ..
            }
        ));
        assert!(err
            .to_string()
            .contains("Unable to update password of user:alice"));
    }

    #[test]
    fn test_killed_child_is_failure() {
        let install = Install::new();
        let mut prompter = ScriptedPrompter::new();
        let launcher = RecordingLauncher::exiting(None);

        let err = invoker(install.env(), &mut prompter, &launcher)
            .run(CredentialDraft::new("alice", "oldPw1", "newPw2"))
            .unwrap_err();
        assert!(matches!(err, Error::CommandExecution { exit_code: None, .. }));
    }

    #[test]
    fn test_missing_fields_are_prompted() {
        let install = Install::new();
        let mut prompter = ScriptedPrompter::new()
            .line("")
            .line("bob")
            .secret("")
            .secret("before")
            .secret("after");
        let launcher = RecordingLauncher::exiting(Some(0));

        invoker(install.env(), &mut prompter, &launcher)
            .run(CredentialDraft::new("", "", ""))
            .unwrap();

        assert_eq!(
            prompter.prompts,
            [
                USERNAME_PROMPT,
                USERNAME_PROMPT,
                CURRENT_PASSWORD_PROMPT,
                CURRENT_PASSWORD_PROMPT,
                NEW_PASSWORD_PROMPT
            ]
        );
        let args = launcher.last_args();
        assert_eq!(&args[args.len() - 3..], ["bob", "before", "after"]);
    }

    #[test]
    fn test_prompted_equal_passwords_rejected() {
        let install = Install::new();
        let mut prompter = ScriptedPrompter::new().secret("same");
        let launcher = RecordingLauncher::exiting(Some(0));

        let err = invoker(install.env(), &mut prompter, &launcher)
            .run(CredentialDraft::new("alice", "", "same"))
            .unwrap_err();

        assert!(matches!(err, Error::Validation { .. }));
        assert!(!launcher.launched());
    }

    #[test]
    fn test_java_path_prompted_when_missing() {
        let install = Install::new();
        let env = EnvSnapshot {
            java_home: Some(install.root.path().join("no-jdk").display().to_string()),
            ..install.env()
        };
        let real_java = install.root.path().join("jdk/bin/java");
        let mut prompter = ScriptedPrompter::new().line(&real_java.display().to_string());
        let launcher = RecordingLauncher::exiting(Some(0));

        invoker(env, &mut prompter, &launcher)
            .run(CredentialDraft::new("alice", "oldPw1", "newPw2"))
            .unwrap();

        assert_eq!(Path::new(&launcher.last_args()[0]), real_java);
    }

    #[test]
    fn test_bounded_prompts_give_up() {
        let install = Install::new();
        let mut prompter = ScriptedPrompter::new().line("").line("");
        let launcher = RecordingLauncher::exiting(Some(0));

        let err = invoker(install.env(), &mut prompter, &launcher)
            .with_policy(PromptPolicy::bounded(2))
            .run(CredentialDraft::new("", "oldPw1", "newPw2"))
            .unwrap_err();

        assert!(err.is_usage());
        assert!(!launcher.launched());
    }
}
