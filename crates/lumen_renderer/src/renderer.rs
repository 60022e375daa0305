//! Core Phong renderer.
//!
//! Implements the per-pixel pipeline:
//! - Primary ray generation through a pinhole camera
//! - Nearest-hit search over all scene objects
//! - Phong shading with hard shadows and per-channel clamping

use std::time::Instant;

use lumen_core::{check_resolution, CameraBasis, ConfigError};
use lumen_math::{clamp_color, Color, Interval, Ray};

use crate::camera::primary_ray;
use crate::error::RenderResult;
use crate::scene::Scene;
use crate::shading::{shade, ShadowTest};
use crate::DEFAULT_BUCKET_SIZE;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Color of rays that hit nothing
    pub background: Color,
    /// How shadow rays decide whether a light is blocked
    pub shadow_test: ShadowTest,
    /// Edge length of the square tiles used by the parallel renderer
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Color::ZERO,
            shadow_test: ShadowTest::default(),
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Compute the color seen by a ray.
pub fn cast_ray(scene: &Scene, ray: &Ray, config: &RenderConfig) -> Color {
    match scene.nearest_hit(ray) {
        Some(hit) => shade(scene, ray, &hit, config.shadow_test),
        None => clamp_color(config.background),
    }
}

/// Render a single pixel.
#[inline]
pub fn render_pixel(
    scene: &Scene,
    basis: &CameraBasis,
    row: u32,
    column: u32,
    height: u32,
    width: u32,
    config: &RenderConfig,
) -> Color {
    let ray = primary_ray(basis, row, column, height, width);
    cast_ray(scene, &ray, config)
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let channel = |c: f32| (255.0 * Interval::UNIT.clamp(c)).round() as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Row-major buffer of clamped pixel colors.
///
/// Row 0 corresponds to the bottom of the camera's image plane.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, row: u32, column: u32) -> usize {
        row as usize * self.width as usize + column as usize
    }

    /// Get the pixel at (row, column).
    pub fn get(&self, row: u32, column: u32) -> Color {
        self.pixels[self.index(row, column)]
    }

    /// Set the pixel at (row, column).
    pub fn set(&mut self, row: u32, column: u32, color: Color) {
        let index = self.index(row, column);
        self.pixels[index] = color;
    }

    /// Iterate over rows, starting at row 0.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// Convert to an 8-bit RGB image with the top of the view on the first line.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(color_to_rgb(self.get(self.height - 1 - y, x)))
        })
    }
}

/// Validate the scene and settings for a `height` x `width` render and derive
/// the camera basis.
pub(crate) fn prepare(
    scene: &Scene,
    height: u32,
    width: u32,
    config: &RenderConfig,
) -> RenderResult<CameraBasis> {
    check_resolution(width, height)?;
    if !config.background.is_finite() {
        return Err(ConfigError::InvalidBackground.into());
    }

    let basis = scene.validate()?;
    log::debug!(
        "Rendering {}x{}: {} objects, {} lights",
        width,
        height,
        scene.objects.len(),
        scene.lights.len()
    );
    Ok(basis)
}

/// Render the entire scene to an image buffer, one pixel at a time.
///
/// Fails before computing any pixel if the resolution is zero or the scene
/// configuration is degenerate.
pub fn render(
    scene: &Scene,
    height: u32,
    width: u32,
    config: &RenderConfig,
) -> RenderResult<ImageBuffer> {
    let basis = prepare(scene, height, width, config)?;
    let start = Instant::now();

    let mut image = ImageBuffer::new(width, height);
    for row in 0..height {
        for column in 0..width {
            let color = render_pixel(scene, &basis, row, column, height, width, config);
            image.set(row, column, color);
        }
    }

    log::info!("Rendered {}x{} in {:?}", width, height, start.elapsed());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::object::SceneObject;
    use crate::sphere::Sphere;
    use lumen_core::{Camera, Light, Material, Pygment};
    use lumen_math::Vec3;

    fn sphere_scene() -> Scene {
        let mut scene = Scene::new(Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y));
        scene.add_object(SceneObject::new(
            Sphere::unit(),
            Material::default(),
            Pygment::solid(Color::new(1.0, 0.2, 0.2)),
        ));
        scene.add_light(Light::new(Vec3::splat(10.0)));
        scene
    }

    #[test]
    fn test_cast_ray_miss_returns_background() {
        let scene = sphere_scene();
        let config = RenderConfig {
            background: Color::new(0.2, 0.4, 0.6),
            ..Default::default()
        };

        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Y);
        assert_eq!(cast_ray(&scene, &ray, &config), Color::new(0.2, 0.4, 0.6));
    }

    #[test]
    fn test_render_center_hits_sphere() {
        let scene = sphere_scene();
        let image = render(&scene, 10, 10, &RenderConfig::default()).unwrap();

        assert_eq!(image.pixels.len(), 100);
        let center = image.get(5, 5);
        assert!(center.length() > 0.0);
        // Corner rays miss the unit sphere at 60 degrees
        assert_eq!(image.get(0, 0), Color::ZERO);
    }

    #[test]
    fn test_render_zero_resolution() {
        let scene = sphere_scene();
        let result = render(&scene, 0, 10, &RenderConfig::default());

        assert_eq!(
            result,
            Err(RenderError::Config(ConfigError::ZeroResolution {
                width: 10,
                height: 0
            }))
        );
    }

    #[test]
    fn test_render_oversized_resolution() {
        let scene = sphere_scene();
        let result = render(&scene, u32::MAX, u32::MAX, &RenderConfig::default());

        assert_eq!(
            result,
            Err(RenderError::Config(ConfigError::ResolutionTooLarge {
                width: u32::MAX,
                height: u32::MAX
            }))
        );
    }

    #[test]
    fn test_render_rejects_nan_background() {
        let scene = sphere_scene();
        let config = RenderConfig {
            background: Color::new(f32::NAN, 0.0, 0.0),
            ..Default::default()
        };

        assert_eq!(
            render(&scene, 4, 4, &config),
            Err(RenderError::Config(ConfigError::InvalidBackground))
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_pixel_index_is_computed_in_usize() {
        let image = ImageBuffer {
            width: 70_000,
            height: 0,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(69_999, 69_999), 69_999 * 70_000 + 69_999);
    }

    #[test]
    fn test_render_degenerate_camera() {
        let mut scene = sphere_scene();
        scene.camera.up = Vec3::Z;

        let result = render(&scene, 4, 4, &RenderConfig::default());
        assert_eq!(result, Err(RenderError::Config(ConfigError::DegenerateUp)));
    }

    #[test]
    fn test_color_to_rgb() {
        assert_eq!(color_to_rgb(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb(Color::new(0.5, 2.0, -1.0)), [128, 255, 0]);
    }

    #[test]
    fn test_rgb_image_puts_top_row_first() {
        let mut image = ImageBuffer::new(1, 2);
        image.set(0, 0, Color::X);
        image.set(1, 0, Color::Y);

        let rgb = image.to_rgb_image();
        assert_eq!(rgb.get_pixel(0, 0).0, [0, 255, 0]);
        assert_eq!(rgb.get_pixel(0, 1).0, [255, 0, 0]);
    }

    #[test]
    fn test_rows() {
        let image = ImageBuffer::new(3, 2);
        let rows: Vec<_> = image.rows().collect();

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 3));
    }
}
