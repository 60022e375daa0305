//! Infinite plane primitive.

use crate::object::{Intersect, RayResponse};
use lumen_math::{Interval, Ray, Vec3};

/// Rays closer to parallel than this never hit a plane.
const PARALLEL_EPSILON: f32 = 1e-8;

/// An infinite plane through `point` with unit normal `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Create a new plane. The normal is normalized; a zero or non-finite
    /// normal is stored as zero and rejected by [`Intersect::check`].
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
        }
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Intersect for Plane {
    fn intersect(&self, ray: &Ray) -> RayResponse {
        let denominator = self.normal.dot(ray.direction());
        if denominator.abs() < PARALLEL_EPSILON {
            return RayResponse::MISS;
        }

        let t = self.normal.dot(self.point - ray.origin()) / denominator;
        if !Interval::POSITIVE.surrounds(t) {
            return RayResponse::MISS;
        }

        let normal = if denominator < 0.0 {
            self.normal
        } else {
            -self.normal
        };

        RayResponse::hit(t, ray.at(t), normal)
    }

    fn check(&self) -> Result<(), &'static str> {
        if !self.point.is_finite() {
            return Err("plane point must be finite");
        }
        if self.normal == Vec3::ZERO {
            return Err("plane normal must be a non-zero finite vector");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_hit_from_above() {
        let plane = Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Y);

        let response = plane.intersect(&ray);
        assert!(response.intersected);
        assert!((response.t - 1.0).abs() < 1e-6);
        assert_eq!(response.normal, Vec3::Y);
    }

    #[test]
    fn test_plane_hit_from_below_flips_normal() {
        let plane = Plane::new(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0));
        let ray = Ray::new(Vec3::new(0.0, -3.0, 0.0), Vec3::Y);

        let response = plane.intersect(&ray);
        assert!(response.intersected);
        assert!((response.t - 3.0).abs() < 1e-6);
        assert_eq!(response.normal, Vec3::NEG_Y);
    }

    #[test]
    fn test_plane_check() {
        assert!(Plane::new(Vec3::ZERO, Vec3::Y).check().is_ok());
        assert!(Plane::new(Vec3::ZERO, Vec3::ZERO).check().is_err());
        assert!(Plane::new(Vec3::ZERO, Vec3::splat(f32::INFINITY)).check().is_err());
        assert!(Plane::new(Vec3::splat(f32::NAN), Vec3::Y).check().is_err());
    }

    #[test]
    fn test_plane_parallel_ray() {
        let plane = Plane::new(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::Y, Vec3::X);

        assert_eq!(plane.intersect(&ray), RayResponse::MISS);
    }

    #[test]
    fn test_plane_behind_ray() {
        let plane = Plane::new(Vec3::ZERO, Vec3::Y);
        let ray = Ray::new(Vec3::Y, Vec3::Y);

        assert!(!plane.intersect(&ray).intersected);
    }
}
