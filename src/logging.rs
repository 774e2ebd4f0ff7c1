#![cfg(feature = "std")]

use std::env;
use std::sync::OnceLock;
use std::time::Instant;

use log::{self, LevelFilter, Metadata, Record};

const LOG_ENV: &str = "COINFLIP_LOG";

/// Writes `+<seconds> LEVEL [target] message` lines to stderr, so logs never
/// mix with the simulator's JSON on stdout.
struct StderrLogger {
    started: OnceLock<Instant>,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let elapsed = self.started.get_or_init(Instant::now).elapsed();
            eprintln!(
                "+{:>7.3}s {:<5} [{}] {}",
                elapsed.as_secs_f64(),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger {
    started: OnceLock::new(),
};

/// Initialize logging with a level taken from the `COINFLIP_LOG` environment
/// variable, falling back to `fallback` when it is unset or invalid. Calling
/// this more than once is a no-op.
pub fn init_logging(fallback: LevelFilter) {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(fallback);
    let _ = log::set_logger(&LOGGER).map(|()| {
        LOGGER.started.get_or_init(Instant::now);
        log::set_max_level(level)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_first_initialization_sets_the_level() {
        init_logging(LevelFilter::Warn);
        let level = log::max_level();
        init_logging(LevelFilter::Trace);
        assert_eq!(log::max_level(), level);
    }
}
