#![cfg(feature = "std")]

use log::{LevelFilter, Metadata, Record};
use std::env;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger at the level named by `BROADSIDE_LOG`
/// (`info` when unset or unparsable). Later calls are no-ops.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}
