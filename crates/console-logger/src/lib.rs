//! Console Logger
//!
//! `log` backend for the browser: every record goes to the devtools console
//! at the matching severity, prefixed with the local wall-clock time and the
//! record target.

use std::str::FromStr;
use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

struct ConsoleLogger {
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(
            Clock::now(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        let line = js_sys::JsString::from(line.as_str());
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Calling this more than once keeps the first logger and returns `Ok`.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = LOGGER.get_or_init(|| ConsoleLogger { level });
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name (`"debug"`, `"WARN"`, ...), falling back to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    LevelFilter::from_str(name.trim()).unwrap_or(LevelFilter::Info)
}

/// Local time of day, split out so formatting stays testable off-browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clock {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
}

impl Clock {
    fn now() -> Self {
        let date = js_sys::Date::new_0();
        Self {
            hours: date.get_hours(),
            minutes: date.get_minutes(),
            seconds: date.get_seconds(),
            millis: date.get_milliseconds(),
        }
    }
}

/// `[HH:MM:SS.mmm LEVEL target] message`
pub fn format_line(clock: Clock, level: Level, target: &str, message: &str) -> String {
    format!(
        "[{:02}:{:02}:{:02}.{:03} {:<5} {}] {}",
        clock.hours, clock.minutes, clock.seconds, clock.millis, level, target, message
    )
}
