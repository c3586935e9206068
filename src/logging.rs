use std::{
    io::{self, Write as _},
    sync::{OnceLock, RwLock},
};

use log::{Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    // default configuration
    const DEFAULT_LEVEL: log::Level = log::Level::Warn;

    LOGGER.get_or_init(|| AppLogger::new(DEFAULT_LEVEL))
}

/// Installs the stderr logger. Calling it again only changes the level.
pub fn init(level: log::Level) {
    let logger = get_logger();
    logger.set_min_level(level);

    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

/// Writes `[LEVEL source] message` lines to stderr.
pub struct AppLogger {
    min_level: RwLock<log::Level>,
}

impl AppLogger {
    fn new(min_level: log::Level) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> log::Level {
        *self
            .min_level
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_min_level(&self, level: log::Level) {
        *self
            .min_level
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = level;
    }

    fn format(record: &Record) -> String {
        format!(
            "[{:<5} {}] {}",
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // nowhere to report a failing stderr
            let _ = writeln!(io::stderr().lock(), "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
