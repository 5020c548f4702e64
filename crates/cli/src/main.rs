use clap::Parser;
use ranger_passwd::{Cli, PasswordChangeInvoker, SystemLauncher, TerminalPrompter};
use ranger_passwd_core::{EnvSnapshot, Error, PlatformFamily, Result, USAGE};
use std::process::ExitCode;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let parsed = Cli::try_parse();

    let verbose = parsed.as_ref().map(|cli| cli.verbose).unwrap_or(false);
    if let Err(e) = ranger_passwd_utils::init(verbose) {
        eprintln!("failed to initialize logging: {e}");
    }

    let cli = match parsed {
        Ok(cli) => cli,
        Err(err) => {
            debug!("argument parsing failed: {}", err.kind());
            return report(&Error::usage("Invalid argument list."));
        }
    };

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn execute(cli: Cli) -> Result<()> {
    let policy = cli.prompt_policy();
    let draft = cli.into_draft()?;

    let platform = PlatformFamily::current()?;
    let cwd = std::env::current_dir().map_err(|e| {
        Error::configuration(format!("unable to determine the working directory: {e}"))
    })?;

    PasswordChangeInvoker::new(
        EnvSnapshot::capture()?,
        cwd,
        platform,
        TerminalPrompter::new(),
        SystemLauncher,
    )
    .with_policy(policy)
    .run(draft)
}

fn report(err: &Error) -> ExitCode {
    error!("{err}");
    if err.is_usage() {
        info!("Usage : {USAGE}");
    }
    ExitCode::from(err.exit_code())
}
