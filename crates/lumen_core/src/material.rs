//! Surface description read by the Phong shading model.

use lumen_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

/// Phong reflection coefficients of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Fraction of the pygment color reflected under (white) ambient light
    pub ambient: f32,

    /// Lambertian reflection coefficient
    pub diffuse: f32,

    /// Specular highlight coefficient
    pub specular: f32,

    /// Specular exponent (shininess), typically >= 1
    pub specular_exponent: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            specular_exponent: 200.0,
        }
    }
}

impl Material {
    /// Create a material from its four coefficients.
    pub fn new(ambient: f32, diffuse: f32, specular: f32, specular_exponent: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            specular_exponent,
        }
    }

    /// A material that only shows its ambient term.
    pub fn ambient_only(ambient: f32) -> Self {
        Self::new(ambient, 0.0, 0.0, 1.0)
    }

    /// Check that every coefficient is finite and non-negative.
    pub fn check(&self) -> Result<(), &'static str> {
        let coefficients = [self.ambient, self.diffuse, self.specular, self.specular_exponent];
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err("coefficients must be finite");
        }
        if coefficients.iter().any(|c| *c < 0.0) {
            return Err("coefficients must be non-negative");
        }
        Ok(())
    }
}

/// The base color source of a surface, independent of lighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pygment {
    pub color: Color,
}

impl Default for Pygment {
    fn default() -> Self {
        Self {
            color: Color::new(0.5, 0.5, 0.5),
        }
    }
}

impl Pygment {
    /// A pygment with a constant color.
    pub fn solid(color: Color) -> Self {
        Self { color }
    }

    /// Check that the color is finite.
    pub fn check(&self) -> Result<(), &'static str> {
        if !self.color.is_finite() {
            return Err("color must be finite");
        }
        Ok(())
    }

    /// Base surface color at a world-space point.
    #[inline]
    pub fn color_at(&self, _point: Vec3) -> Color {
        self.color
    }
}
