//! Java executable lookup

use crate::prompt::{prompt_until, PromptPolicy, Prompter};
use ranger_passwd_core::Result;
use std::path::{Path, PathBuf};

pub const JAVA_PATH_PROMPT: &str = "Enter java executable path:";

/// Return `candidate` if it is an existing file, otherwise keep asking the
/// operator for a path until one names an existing file.
pub fn locate_java<P: Prompter + ?Sized>(
    candidate: &Path,
    prompter: &mut P,
    policy: PromptPolicy,
) -> Result<PathBuf> {
    if candidate.is_file() {
        return Ok(candidate.to_path_buf());
    }

    tracing::warn!("Java executable not found at {}", candidate.display());
    let entered = prompt_until(
        policy,
        "java executable path",
        || {
            prompter
                .read_line(JAVA_PATH_PROMPT)
                .map(|line| line.map(|path| path.trim().to_string()))
        },
        |path| !path.is_empty() && Path::new(path).is_file(),
    )?;
    Ok(PathBuf::from(entered))
}
