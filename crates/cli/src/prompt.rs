//! Interactive input.
//!
//! Every prompt loop runs until it gets an acceptable answer. It ends early
//! only when the input stream closes (EOF, e.g. Ctrl-D), when the optional
//! attempt limit is reached, or when SIGINT terminates the process.

use ranger_passwd_core::{Error, Result};
use std::io::{self, BufRead, Write};

/// Source of operator input
pub trait Prompter {
    /// Read one line with echo. `None` means the input stream is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Read one line with echo suppressed. `None` means the input stream is
    /// closed.
    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_line(prompt)
    }

    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_secret(prompt)
    }
}

/// Prompter backed by the process stdin/stdout and the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{prompt}").map_err(|e| Error::terminal("write", e))?;
        stdout.flush().map_err(|e| Error::terminal("flush", e))?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::terminal("read", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn read_secret(&mut self, prompt: &str) -> Result<Option<String>> {
        match rpassword::prompt_password(prompt) {
            Ok(secret) => Ok(Some(secret)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(Error::terminal("hidden read", e)),
        }
    }
}

/// How often a prompt may be repeated before giving up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptPolicy {
    max_attempts: Option<u32>,
}

impl PromptPolicy {
    /// Ask until an acceptable answer arrives
    pub const fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Ask at most `attempts` times
    pub const fn bounded(attempts: u32) -> Self {
        Self {
            max_attempts: Some(attempts),
        }
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    fn allows(&self, attempts_made: u32) -> bool {
        self.max_attempts.map_or(true, |limit| attempts_made < limit)
    }
}

impl From<Option<u32>> for PromptPolicy {
    fn from(max_attempts: Option<u32>) -> Self {
        Self { max_attempts }
    }
}

/// Repeat `ask` until it yields a value `accept` agrees with
pub fn prompt_until<A, F>(policy: PromptPolicy, what: &str, mut ask: A, accept: F) -> Result<String>
where
    A: FnMut() -> Result<Option<String>>,
    F: Fn(&str) -> bool,
{
    let mut attempts = 0;
    while policy.allows(attempts) {
        attempts += 1;
        match ask()? {
            None => {
                return Err(Error::usage(format!(
                    "input cancelled while waiting for {what}"
                )))
            }
            Some(value) if accept(value.as_str()) => return Ok(value),
            Some(_) => tracing::debug!(attempt = attempts, "no usable {what} entered"),
        }
    }

    Err(Error::usage(format!(
        "no usable {what} entered after {attempts} attempts"
    )))
}

/// Ask with echo until a non-empty line is entered
pub fn prompt_non_empty<P: Prompter + ?Sized>(
    prompter: &mut P,
    policy: PromptPolicy,
    what: &str,
    prompt: &str,
) -> Result<String> {
    prompt_until(policy, what, || prompter.read_line(prompt), |v| !v.is_empty())
}

/// Ask without echo until a non-empty secret is entered
pub fn prompt_secret<P: Prompter + ?Sized>(
    prompter: &mut P,
    policy: PromptPolicy,
    what: &str,
    prompt: &str,
) -> Result<String> {
    prompt_until(policy, what, || prompter.read_secret(prompt), |v| !v.is_empty())
}
