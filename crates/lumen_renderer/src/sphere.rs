//! Sphere primitive.

use crate::object::{Intersect, RayResponse};
use lumen_math::{Interval, Ray, Vec3};

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Non-positive radii are kept as given and rejected by [`Intersect::check`].
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Radius 1 around the origin.
    pub fn unit() -> Self {
        Self::new(Vec3::ZERO, 1.0)
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Intersect for Sphere {
    fn intersect(&self, ray: &Ray) -> RayResponse {
        // |o + t*d - c|^2 = r^2, written with the half coefficient b = -2h
        let to_center = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(to_center);
        let c = to_center.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if a == 0.0 || discriminant < 0.0 {
            return RayResponse::MISS;
        }

        let root = discriminant.sqrt();
        let nearest = [(h - root) / a, (h + root) / a]
            .into_iter()
            .find(|t| Interval::POSITIVE.surrounds(*t));
        let Some(t) = nearest else {
            return RayResponse::MISS;
        };

        let point = ray.at(t);
        let outward = (point - self.center) / self.radius;
        // Seen from inside, the normal is flipped toward the ray origin
        let normal = if outward.dot(ray.direction()) > 0.0 {
            -outward
        } else {
            outward
        };

        RayResponse::hit(t, point, normal)
    }

    fn check(&self) -> Result<(), &'static str> {
        if !self.center.is_finite() || !self.radius.is_finite() {
            return Err("sphere must be finite");
        }
        if self.radius <= 0.0 {
            return Err("sphere radius must be positive");
        }
        Ok(())
    }
}
