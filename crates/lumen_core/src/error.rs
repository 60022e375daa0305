//! Errors raised while loading and validating a scene.
//!
//! Every numerical degeneracy that would otherwise turn into NaN or infinity
//! inside per-pixel math is reported here, once, before rendering starts.

use thiserror::Error;

/// A scene or camera configuration that cannot be rendered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Image resolution must be positive, got {width}x{height}")]
    ZeroResolution { width: u32, height: u32 },

    #[error("Image resolution {width}x{height} does not fit in memory")]
    ResolutionTooLarge { width: u32, height: u32 },

    #[error("Background color must be finite")]
    InvalidBackground,

    #[error("Camera eye and target coincide, view direction is undefined")]
    DegenerateView,

    #[error("Camera up vector is parallel to the view direction")]
    DegenerateUp,

    #[error("Field of view must be within (0, 180) degrees, got {0} degrees")]
    InvalidFieldOfView(f32),

    #[error("Light {index}: {reason}")]
    InvalidLight { index: usize, reason: &'static str },

    #[error("Object {index} material: {reason}")]
    InvalidMaterial { index: usize, reason: &'static str },

    #[error("Object {index} pygment: {reason}")]
    InvalidPygment { index: usize, reason: &'static str },

    #[error("Object {index} shape: {reason}")]
    InvalidShape { index: usize, reason: &'static str },
}

/// Errors that can occur during scene file loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;
