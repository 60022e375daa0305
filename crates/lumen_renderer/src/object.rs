//! Geometry query trait and the intersection result contract.

use lumen_core::{Material, Pygment};
use lumen_math::{Ray, Vec3};

/// Result of intersecting a ray with a single object.
///
/// A miss carries `t = +inf`, so the nearest hit can be found by plain
/// minimization over `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayResponse {
    /// Whether the ray hit the object
    pub intersected: bool,
    /// Distance along the ray to the hit (meaningful only if intersected)
    pub t: f32,
    /// World-space hit point
    pub point: Vec3,
    /// Unit surface normal at the hit point
    pub normal: Vec3,
}

impl RayResponse {
    /// The "no intersection" response.
    pub const MISS: RayResponse = RayResponse {
        intersected: false,
        t: f32::INFINITY,
        point: Vec3::ZERO,
        normal: Vec3::ZERO,
    };

    /// An intersection at parameter `t`.
    #[inline]
    pub fn hit(t: f32, point: Vec3, normal: Vec3) -> Self {
        Self {
            intersected: true,
            t,
            point,
            normal,
        }
    }
}

impl Default for RayResponse {
    fn default() -> Self {
        Self::MISS
    }
}

/// Trait for geometry that can be intersected by rays.
///
/// Implementations must be free of side effects: the renderer calls them
/// repeatedly and from many threads at once. They always return a response,
/// using [`RayResponse::MISS`] when the ray does not hit.
pub trait Intersect: Send + Sync {
    /// Intersect `ray` with this geometry, returning the nearest hit with `t > 0`.
    fn intersect(&self, ray: &Ray) -> RayResponse;

    /// Check that the geometry has a well-defined surface.
    fn check(&self) -> Result<(), &'static str> {
        Ok(())
    }
}

/// A renderable object: geometry plus the surface description used to shade it.
pub struct SceneObject {
    geometry: Box<dyn Intersect>,
    material: Material,
    pygment: Pygment,
}

impl SceneObject {
    /// Create a new object.
    pub fn new(geometry: impl Intersect + 'static, material: Material, pygment: Pygment) -> Self {
        Self::from_boxed(Box::new(geometry), material, pygment)
    }

    /// Create a new object from boxed geometry.
    pub fn from_boxed(geometry: Box<dyn Intersect>, material: Material, pygment: Pygment) -> Self {
        Self {
            geometry,
            material,
            pygment,
        }
    }

    /// Intersect a ray with this object's geometry.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> RayResponse {
        self.geometry.intersect(ray)
    }

    /// Check the geometry, see [`Intersect::check`].
    pub fn check_geometry(&self) -> Result<(), &'static str> {
        self.geometry.check()
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn pygment(&self) -> &Pygment {
        &self.pygment
    }
}

impl std::fmt::Debug for SceneObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneObject")
            .field("material", &self.material)
            .field("pygment", &self.pygment)
            .finish_non_exhaustive()
    }
}
