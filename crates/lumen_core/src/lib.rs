//! Lumen Core - Scene description types for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Camera`, `Material`, `Pygment`, `Light`
//! - **Scene files**: JSON scene description parsing and validation
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let description = load_scene("scene.json")?;
//! println!("Loaded {} objects, {} lights",
//!     description.objects.len(),
//!     description.lights.len());
//! ```

pub mod camera;
pub mod description;
pub mod error;
pub mod light;
pub mod material;

// Re-export commonly used types
pub use camera::{Camera, CameraBasis};
pub use description::{
    check_resolution, load_scene, load_scene_from_str, CameraDescription, ObjectDescription,
    SceneDescription, Shape,
};
pub use error::{ConfigError, LoadError, LoadResult};
pub use light::{Attenuation, Light};
pub use material::{Material, Pygment};
