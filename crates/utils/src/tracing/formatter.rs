//! Log line format: local timestamp, single-letter level tag, message.
//!
//! ```text
//! 2026-10-16 09:41:07,512 [I] Password updated successfully
//! ```

use chrono::Local;
use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Tag written in front of every message of the given level
pub fn level_tag(level: &Level) -> &'static str {
    if *level == Level::ERROR {
        "[E]"
    } else if *level == Level::WARN {
        "[W]"
    } else if *level == Level::INFO {
        "[I]"
    } else if *level == Level::DEBUG {
        "[D]"
    } else {
        "[T]"
    }
}

/// Event formatter producing tagged, timestamped lines
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedFormatter;

impl TaggedFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl<S, N> FormatEvent<S, N> for TaggedFormatter
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} {} ",
            Local::now().format(TIMESTAMP_FORMAT),
            level_tag(event.metadata().level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
