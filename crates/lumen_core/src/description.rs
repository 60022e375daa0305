//! JSON scene files.
//!
//! A scene file describes the camera, lights and objects of one image. It is
//! renderer-agnostic: shapes are plain data here and become intersectable
//! objects in `lumen_renderer`.
//!
//! ```json
//! {
//!   "camera": { "eye": [0, 0, 5], "target": [0, 0, 0], "up": [0, 1, 0], "fovy": 60 },
//!   "width": 640,
//!   "height": 480,
//!   "lights": [ { "position": [10, 10, 10], "color": [1, 1, 1] } ],
//!   "objects": [
//!     {
//!       "shape": { "type": "sphere", "center": [0, 0, 0], "radius": 1 },
//!       "material": { "ambient": 0.1, "diffuse": 0.7, "specular": 0.3, "specular_exponent": 50 },
//!       "pygment": { "color": [1, 0.2, 0.2] }
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use lumen_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::error::{ConfigError, LoadResult};
use crate::light::Light;
use crate::material::{Material, Pygment};

/// Camera block of a scene file. The field of view is given in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    pub eye: Vec3,
    pub target: Vec3,
    #[serde(default = "default_up")]
    pub up: Vec3,
    #[serde(default = "default_fovy")]
    pub fovy: f32,
}

fn default_up() -> Vec3 {
    Vec3::Y
}

fn default_fovy() -> f32 {
    60.0
}

impl CameraDescription {
    /// Build the camera, converting the field of view to radians.
    pub fn to_camera(&self) -> Camera {
        Camera::new(self.eye, self.target, self.up).with_fovy_degrees(self.fovy)
    }
}

/// Geometry of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Sphere { center: Vec3, radius: f32 },
    Plane { point: Vec3, normal: Vec3 },
}

impl Shape {
    /// Check that the shape has a well-defined surface.
    pub fn check(&self) -> Result<(), &'static str> {
        match self {
            Shape::Sphere { center, radius } => {
                if !center.is_finite() || !radius.is_finite() {
                    return Err("sphere must be finite");
                }
                if *radius <= 0.0 {
                    return Err("sphere radius must be positive");
                }
            }
            Shape::Plane { point, normal } => {
                if !point.is_finite() {
                    return Err("plane point must be finite");
                }
                if normal.try_normalize().is_none() {
                    return Err("plane normal must be a non-zero finite vector");
                }
            }
        }
        Ok(())
    }
}

/// One object of a scene file: geometry plus surface description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectDescription {
    pub shape: Shape,
    #[serde(default)]
    pub material: Material,
    #[serde(default)]
    pub pygment: Pygment,
}

/// A complete scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub camera: CameraDescription,

    /// Output width in pixels (may be overridden by the caller)
    #[serde(default)]
    pub width: Option<u32>,

    /// Output height in pixels (may be overridden by the caller)
    #[serde(default)]
    pub height: Option<u32>,

    /// Color of rays that hit nothing
    #[serde(default)]
    pub background: Option<Color>,

    #[serde(default)]
    pub lights: Vec<Light>,

    #[serde(default)]
    pub objects: Vec<ObjectDescription>,
}

impl SceneDescription {
    /// Validate every part of the scene that per-pixel math depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.camera.to_camera().basis()?;

        if let (Some(width), Some(height)) = (self.width, self.height) {
            check_resolution(width, height)?;
        }

        if self.background.is_some_and(|color| !color.is_finite()) {
            return Err(ConfigError::InvalidBackground);
        }

        for (index, light) in self.lights.iter().enumerate() {
            light
                .check()
                .map_err(|reason| ConfigError::InvalidLight { index, reason })?;
        }

        for (index, object) in self.objects.iter().enumerate() {
            object
                .shape
                .check()
                .map_err(|reason| ConfigError::InvalidShape { index, reason })?;
            object
                .material
                .check()
                .map_err(|reason| ConfigError::InvalidMaterial { index, reason })?;
            object
                .pygment
                .check()
                .map_err(|reason| ConfigError::InvalidPygment { index, reason })?;
        }

        Ok(())
    }
}

/// Check that a `width` x `height` color buffer can be allocated.
///
/// Zero sizes are rejected, as are sizes whose byte count overflows the
/// address space.
pub fn check_resolution(width: u32, height: u32) -> Result<(), ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::ZeroResolution { width, height });
    }

    let bytes = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(std::mem::size_of::<Color>()));
    match bytes {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(()),
        _ => Err(ConfigError::ResolutionTooLarge { width, height }),
    }
}

/// Load and validate a JSON scene file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    log::debug!("Read scene file {} ({} bytes)", path.display(), contents.len());
    load_scene_from_str(&contents)
}

/// Parse and validate a JSON scene from a string.
pub fn load_scene_from_str(contents: &str) -> LoadResult<SceneDescription> {
    let description: SceneDescription = serde_json::from_str(contents)?;
    description.validate()?;

    if description.lights.is_empty() {
        log::warn!("Scene has no lights, only ambient terms will be visible");
    }
    log::debug!(
        "Parsed scene: {} objects, {} lights",
        description.objects.len(),
        description.lights.len()
    );

    Ok(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;

    const SCENE: &str = r#"{
        "camera": { "eye": [0, 0, 5], "target": [0, 0, 0], "up": [0, 1, 0], "fovy": 60 },
        "width": 4,
        "height": 2,
        "lights": [
            { "position": [10, 10, 10], "attenuation": { "constant": 1, "linear": 0, "quadratic": 0 } }
        ],
        "objects": [
            { "shape": { "type": "sphere", "center": [0, 0, 0], "radius": 1 } },
            {
                "shape": { "type": "plane", "point": [0, -1, 0], "normal": [0, 1, 0] },
                "material": { "ambient": 0.2, "diffuse": 0.5, "specular": 0.0, "specular_exponent": 1 },
                "pygment": { "color": [0.2, 0.8, 0.2] }
            }
        ]
    }"#;

    #[test]
    fn test_load_scene_from_str() {
        let description = load_scene_from_str(SCENE).unwrap();

        assert_eq!(description.width, Some(4));
        assert_eq!(description.height, Some(2));
        assert_eq!(description.lights.len(), 1);
        assert_eq!(description.objects.len(), 2);
        assert_eq!(
            description.objects[0].shape,
            Shape::Sphere {
                center: Vec3::ZERO,
                radius: 1.0
            }
        );
        assert_eq!(description.objects[0].material, Material::default());
        assert_eq!(description.objects[1].pygment.color, Color::new(0.2, 0.8, 0.2));
    }

    #[test]
    fn test_camera_description_converts_degrees() {
        let description = load_scene_from_str(SCENE).unwrap();
        let camera = description.camera.to_camera();
        assert!((camera.fovy() - 60.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_minimal_scene_defaults() {
        let description =
            load_scene_from_str(r#"{ "camera": { "eye": [0, 0, 5], "target": [0, 0, 0] } }"#)
                .unwrap();

        assert_eq!(description.camera.up, Vec3::Y);
        assert_eq!(description.camera.fovy, 60.0);
        assert!(description.objects.is_empty());
        assert!(description.lights.is_empty());
        assert_eq!(description.background, None);
    }

    #[test]
    fn test_rejects_degenerate_camera() {
        let result = load_scene_from_str(
            r#"{ "camera": { "eye": [0, 5, 0], "target": [0, 0, 0], "up": [0, 1, 0] } }"#,
        );
        assert!(matches!(
            result,
            Err(LoadError::Config(ConfigError::DegenerateUp))
        ));
    }

    #[test]
    fn test_rejects_zero_attenuation() {
        let result = load_scene_from_str(
            r#"{
                "camera": { "eye": [0, 0, 5], "target": [0, 0, 0] },
                "lights": [ { "position": [1, 1, 1],
                              "attenuation": { "constant": 0, "linear": 0, "quadratic": 0 } } ]
            }"#,
        );
        assert!(matches!(
            result,
            Err(LoadError::Config(ConfigError::InvalidLight { index: 0, .. }))
        ));
    }

    #[test]
    fn test_rejects_zero_resolution() {
        let result = load_scene_from_str(
            r#"{ "camera": { "eye": [0, 0, 5], "target": [0, 0, 0] }, "width": 0, "height": 10 }"#,
        );
        assert!(matches!(
            result,
            Err(LoadError::Config(ConfigError::ZeroResolution { width: 0, height: 10 }))
        ));
    }

    #[test]
    fn test_rejects_infinite_pygment() {
        // 1e39 overflows f32 and deserializes as infinity
        let result = load_scene_from_str(
            r#"{
                "camera": { "eye": [0, 0, 5], "target": [0, 0, 0] },
                "lights": [ { "position": [10, 10, 10] } ],
                "objects": [
                    {
                        "shape": { "type": "sphere", "center": [0, 0, 0], "radius": 1 },
                        "material": { "ambient": 0.0 },
                        "pygment": { "color": [1e39, 0.5, 0.5] }
                    }
                ]
            }"#,
        );
        assert!(matches!(
            result,
            Err(LoadError::Config(ConfigError::InvalidPygment { index: 0, .. }))
        ));
    }

    #[test]
    fn test_rejects_infinite_background() {
        let result = load_scene_from_str(
            r#"{ "camera": { "eye": [0, 0, 5], "target": [0, 0, 0] }, "background": [0, 1e39, 0] }"#,
        );
        assert!(matches!(
            result,
            Err(LoadError::Config(ConfigError::InvalidBackground))
        ));
    }

    #[test]
    fn test_check_resolution() {
        assert_eq!(check_resolution(640, 480), Ok(()));
        assert_eq!(
            check_resolution(0, 480),
            Err(ConfigError::ZeroResolution { width: 0, height: 480 })
        );
        assert_eq!(
            check_resolution(u32::MAX, u32::MAX),
            Err(ConfigError::ResolutionTooLarge {
                width: u32::MAX,
                height: u32::MAX
            })
        );
    }

    #[test]
    fn test_rejects_bad_shapes() {
        let sphere = Shape::Sphere {
            center: Vec3::ZERO,
            radius: 0.0,
        };
        assert!(sphere.check().is_err());

        let plane = Shape::Plane {
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
        };
        assert!(plane.check().is_err());
    }

    #[test]
    fn test_rejects_unknown_shape_type() {
        let result = load_scene_from_str(
            r#"{
                "camera": { "eye": [0, 0, 5], "target": [0, 0, 0] },
                "objects": [ { "shape": { "type": "torus" } } ]
            }"#,
        );
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_load_scene_missing_file() {
        let result = load_scene("/nonexistent/scene.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
