// Re-export the modules the binary is assembled from
pub mod app;
pub mod args;
pub mod launcher;
pub mod locator;
pub mod prompt;

// Re-export commonly used types
pub use app::PasswordChangeInvoker;
pub use args::Cli;
pub use launcher::{ProcessLauncher, SystemLauncher};
pub use prompt::{PromptPolicy, Prompter, TerminalPrompter};
