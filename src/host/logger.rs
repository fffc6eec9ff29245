//! Logging setup
//!
//! Routes `log` records into the host's log window when the host exports
//! log functions, and falls back to `env_logger` otherwise.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use super::api::HostApi;

/// `log` backend that writes through the host's log functions
pub struct HostLogger {
    host: HostApi,
    level: LevelFilter,
}

impl HostLogger {
    pub fn new(host: HostApi, level: LevelFilter) -> Self {
        Self { host, level }
    }
}

impl Log for HostLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", env!("CARGO_PKG_NAME"), record.args());
        self.host.log(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Setup logging for the plugin
pub fn setup_logging(host: Option<HostApi>, level: LevelFilter) -> Result<(), SetLoggerError> {
    match host.filter(HostApi::has_logging) {
        Some(host) => {
            log::set_boxed_logger(Box::new(HostLogger::new(host, level)))?;
            log::set_max_level(level);
            Ok(())
        }
        None => env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .try_init(),
    }
}
