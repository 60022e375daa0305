//! Lumen Renderer - CPU Phong ray tracing.
//!
//! Casts one primary ray per pixel through a pinhole camera, finds the
//! nearest surface by exhaustive search and shades it with a local Phong
//! model including hard shadows.

mod bucket;
mod camera;
mod error;
mod object;
mod plane;
mod renderer;
mod scene;
mod shading;
mod sphere;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::primary_ray;
pub use error::{RenderError, RenderResult};
pub use object::{Intersect, RayResponse, SceneObject};
pub use plane::Plane;
pub use renderer::{cast_ray, color_to_rgb, render, render_pixel, ImageBuffer, RenderConfig};
pub use scene::{Hit, Scene};
pub use shading::{shade, ShadowTest, SHADOW_EPSILON};
pub use sphere::Sphere;

/// Re-export the scene description types the renderer consumes
pub use lumen_core::{Attenuation, Camera, CameraBasis, ConfigError, Light, Material, Pygment};

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Color, Interval, Ray, Vec3};
