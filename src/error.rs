use thiserror::Error;
use tilecss::PatternError;

#[derive(Error, Debug)]
pub enum TesseraError {
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    #[error("No preset named \"{0}\"")]
    UnknownPreset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, TesseraError>;
