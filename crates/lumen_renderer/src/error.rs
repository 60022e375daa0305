use lumen_core::ConfigError;
use thiserror::Error;

/// Errors that abort a render before any pixel is computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Bucket size must be positive")]
    InvalidBucketSize,
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
