use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("No word supplier has been set")]
    WordSupplierNotSet,

    #[error("Gave up after {attempts} draws")]
    DrawsExhausted { attempts: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        GeneratorError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
