use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
