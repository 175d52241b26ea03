use std::collections::HashMap;

use colored::Colorize;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

lazy_static::lazy_static! {
    pub static ref LOGGER_COLORS: HashMap<Level, String> = HashMap::from([
        (Level::Trace, "magenta".to_string()),
        (Level::Debug, "green".to_string()),
        (Level::Info, "blue".to_string()),
        (Level::Warn, "yellow".to_string()),
        (Level::Error, "red".to_string()),
    ]);
}

pub static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;
pub struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("ip_format")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = format!("{:>5}", record.level());
        eprintln!(
            "{}: {}",
            match LOGGER_COLORS.get(&record.level()) {
                Some(c) => level.color(&**c).to_string(),
                None => level,
            },
            record.args()
        )
    }

    fn flush(&self) {}
}

pub fn init(filter: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&CONSOLE_LOGGER)?;
    log::set_max_level(filter);
    Ok(())
}
