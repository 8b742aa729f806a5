use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};
use std::io::Write;

/// Writes log records to stderr, keeping stdout for the booklet summaries
pub struct CliLogger {
    level: LevelFilter,
}

impl CliLogger {
    /// Logger for `-v` repeated `verbosity` times
    pub fn new(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Self { level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let timestamp = Local::now().format("%H:%M:%S%.3f");
            let mut stderr = std::io::stderr().lock();
            let _ = match record.level() {
                Level::Error | Level::Warn => writeln!(
                    stderr,
                    "{} {:<5} {}",
                    timestamp,
                    record.level(),
                    record.args()
                ),
                _ => writeln!(
                    stderr,
                    "{} {:<5} [{}] {}",
                    timestamp,
                    record.level(),
                    record.target(),
                    record.args()
                ),
            };
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
