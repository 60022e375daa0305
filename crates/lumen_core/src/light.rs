//! Point lights with polynomial distance attenuation.

use lumen_math::{Color, Vec3};
use serde::{Deserialize, Serialize};

/// Attenuation coefficients: intensity falls off as `1 / (c + l*d + q*d^2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for Attenuation {
    /// No falloff.
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.0,
            quadratic: 0.0,
        }
    }
}

impl Attenuation {
    pub fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    /// Attenuation factor at `distance`.
    ///
    /// Returns `None` when the denominator is not positive, which for a
    /// validated light only happens at distance zero with `constant == 0`.
    #[inline]
    pub fn factor(&self, distance: f32) -> Option<f32> {
        let denominator =
            self.constant + distance * self.linear + distance * distance * self.quadratic;
        (denominator > 0.0).then(|| 1.0 / denominator)
    }

    /// Check that the coefficients are finite, non-negative and not all zero.
    pub fn check(&self) -> Result<(), &'static str> {
        let coefficients = [self.constant, self.linear, self.quadratic];
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err("attenuation coefficients must be finite");
        }
        if coefficients.iter().any(|c| *c < 0.0) {
            return Err("attenuation coefficients must be non-negative");
        }
        if coefficients.iter().all(|c| *c == 0.0) {
            return Err("attenuation coefficients must not all be zero");
        }
        Ok(())
    }
}

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,

    /// RGB intensity, channels may exceed 1.0
    #[serde(default = "default_light_color")]
    pub color: Color,

    #[serde(default)]
    pub attenuation: Attenuation,
}

fn default_light_color() -> Color {
    Color::ONE
}

impl Light {
    /// Create a white light with no falloff.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            color: Color::ONE,
            attenuation: Attenuation::default(),
        }
    }

    /// Set the light color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the attenuation coefficients.
    pub fn with_attenuation(mut self, attenuation: Attenuation) -> Self {
        self.attenuation = attenuation;
        self
    }

    /// Check that the light can be evaluated without producing NaN.
    pub fn check(&self) -> Result<(), &'static str> {
        if !self.position.is_finite() {
            return Err("position must be finite");
        }
        if !self.color.is_finite() {
            return Err("color must be finite");
        }
        self.attenuation.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attenuation_factor() {
        let attenuation = Attenuation::new(1.0, 0.5, 0.25);
        // 1 / (1 + 0.5*2 + 0.25*4) = 1/3
        let factor = attenuation.factor(2.0).unwrap();
        assert!((factor - 1.0 / 3.0).abs() < 1e-6);

        assert_eq!(Attenuation::default().factor(100.0), Some(1.0));
    }

    #[test]
    fn test_attenuation_zero_denominator() {
        let attenuation = Attenuation::new(0.0, 0.0, 1.0);
        assert_eq!(attenuation.factor(0.0), None);
        assert!(attenuation.check().is_ok());
    }

    #[test]
    fn test_attenuation_check() {
        assert!(Attenuation::new(0.0, 0.0, 0.0).check().is_err());
        assert!(Attenuation::new(1.0, -1.0, 0.0).check().is_err());
        assert!(Attenuation::new(f32::INFINITY, 0.0, 0.0).check().is_err());
    }

    #[test]
    fn test_light_json_defaults() {
        let light: Light = serde_json::from_str(r#"{ "position": [10.0, 10.0, 10.0] }"#).unwrap();
        assert_eq!(light.position, Vec3::splat(10.0));
        assert_eq!(light.color, Color::ONE);
        assert_eq!(light.attenuation, Attenuation::default());
    }
}
