use log::{Level, LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;

use crate::Result;

/// Appends `[LEVEL target] message` lines to a file, reopening it per record.
struct FileLogger {
    file_path: String,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{} {}] {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Installs the file logger for `path`.
///
/// Fails if the file cannot be opened for appending or if a logger is
/// already installed in this process.
pub fn init_logger(path: &str) -> Result<()> {
    // Surface an unwritable path here rather than silently dropping records.
    OpenOptions::new().create(true).append(true).open(path)?;

    let logger = FileLogger {
        file_path: path.to_string(),
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TesseraError;

    #[test]
    fn test_file_logger_appends_records() {
        let path = std::env::temp_dir().join(format!("tessera-log-{}.log", std::process::id()));
        let logger = FileLogger {
            file_path: path.to_string_lossy().into_owned(),
        };

        log::Log::log(
            &logger,
            &Record::builder()
                .level(Level::Warn)
                .target("tilecss::generate")
                .args(format_args!("first"))
                .build(),
        );
        log::Log::log(
            &logger,
            &Record::builder()
                .level(Level::Trace)
                .args(format_args!("filtered"))
                .build(),
        );

        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(contents, "[WARN tilecss::generate] first\n");
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = std::env::temp_dir();
        let err = init_logger(dir.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, TesseraError::Io(_)));
    }
}
