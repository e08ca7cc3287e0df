use std::env;

use log::{LevelFilter, Metadata, Record};

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

/// Installs the stderr logger.
///
/// `SAPPER_LOG` takes precedence over `default_level` when it holds a valid level name.
pub fn init_logging(default_level: LevelFilter) {
    let level = level_from_env(env::var("SAPPER_LOG").ok().as_deref()).unwrap_or(default_level);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

fn level_from_env(value: Option<&str>) -> Option<LevelFilter> {
    value.and_then(|lvl| lvl.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_level_parses_names() {
        assert_eq!(level_from_env(Some("debug")), Some(LevelFilter::Debug));
        assert_eq!(level_from_env(Some("OFF")), Some(LevelFilter::Off));
        assert_eq!(level_from_env(Some("loud")), None);
        assert_eq!(level_from_env(None), None);
    }
}
