#![cfg(feature = "std")]
//! Stderr logger for the `solitaire` binary.
//!
//! Records are written as `LEVEL - message`, one per line. Stdout is left to
//! the rendered board or the JSON report.

use log::{LevelFilter, Metadata, Record};
use std::env;

/// Environment variable holding the log level (`off`, `error` .. `trace`).
pub const LOG_ENV: &str = "SOLITAIRE_LOG";

/// Level used when `SOLITAIRE_LOG` is unset or unparsable. Run start and end
/// are logged at `info`; per-step detail sits at `debug` and `trace`.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn level_from(value: Option<String>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the stderr logger. Repeated calls keep the first logger.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
