//! Pinhole camera settings and the orthonormal view basis derived from them.

use std::f32::consts::PI;

use lumen_math::Vec3;

use crate::error::ConfigError;

/// Smallest `|up x backward|` accepted before the up hint counts as parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A pinhole camera.
///
/// The camera only stores what a scene author sets. The view basis is derived
/// explicitly with [`Camera::basis`] whenever rays are about to be generated,
/// so it can never go stale after `eye`, `target` or `up` change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians
    fovy: f32,
}

impl Camera {
    /// Create a camera looking from `eye` at `target` with a 60 degree field of view.
    pub fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            eye,
            target,
            up,
            fovy: 60.0_f32.to_radians(),
        }
    }

    /// Set the vertical field of view, in degrees.
    pub fn with_fovy_degrees(mut self, degrees: f32) -> Self {
        self.set_fovy_degrees(degrees);
        self
    }

    /// Set the vertical field of view, in degrees.
    ///
    /// The value is converted to radians here, once.
    pub fn set_fovy_degrees(&mut self, degrees: f32) {
        self.fovy = degrees.to_radians();
    }

    /// Vertical field of view in radians.
    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    /// Derive the camera's orthonormal basis.
    ///
    /// `z` points backward (from target toward eye), `x = normalize(up x z)`
    /// and `y = z x x`. Fails when the view direction is undefined or the up
    /// hint is parallel to it; no fallback up vector is substituted.
    pub fn basis(&self) -> Result<CameraBasis, ConfigError> {
        if !(self.fovy > 0.0 && self.fovy < PI) {
            return Err(ConfigError::InvalidFieldOfView(self.fovy.to_degrees()));
        }

        let z = (self.eye - self.target)
            .try_normalize()
            .ok_or(ConfigError::DegenerateView)?;

        let side = self.up.cross(z);
        if !(side.length() > PARALLEL_EPSILON * self.up.length()) {
            return Err(ConfigError::DegenerateUp);
        }
        let x = side.try_normalize().ok_or(ConfigError::DegenerateUp)?;

        // Already unit length: z and x are unit and orthogonal
        let y = z.cross(x);

        Ok(CameraBasis {
            eye: self.eye,
            x,
            y,
            z,
            fovy: self.fovy,
        })
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
    }
}

/// The right-handed orthonormal frame of a camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    /// Camera position
    pub eye: Vec3,
    /// Right
    pub x: Vec3,
    /// Up
    pub y: Vec3,
    /// Backward (from target toward eye)
    pub z: Vec3,
    /// Vertical field of view in radians
    pub fovy: f32,
}
