use ranger_passwd_core::LOG_FILTER_VAR;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod formatter;

pub use formatter::{level_tag, TaggedFormatter, TIMESTAMP_FORMAT};

/// Initialize the tracing system
///
/// Every event becomes one `<timestamp> [<tag>] <message>` line on stderr.
/// The level defaults to `info` (`debug` when `verbose`) and can be replaced
/// entirely by a filter directive in `RANGER_PASSWD_LOG`.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR)
        .or_else(|_| EnvFilter::try_new(default_level))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .event_format(TaggedFormatter::new());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
