//! Renderable scene and the nearest-hit query.

use lumen_core::{Camera, CameraBasis, ConfigError, Light, SceneDescription, Shape};
use lumen_math::Ray;

use crate::object::{RayResponse, SceneObject};
use crate::plane::Plane;
use crate::sphere::Sphere;

/// The nearest intersection of a ray with a scene.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// The object that was hit
    pub object: &'a SceneObject,
    /// Where and how it was hit
    pub response: RayResponse,
}

/// A camera, an ordered list of lights and an ordered list of objects.
///
/// A scene is read-only while it is being rendered.
#[derive(Debug, Default)]
pub struct Scene {
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub objects: Vec<SceneObject>,
}

impl Scene {
    /// Create an empty scene viewed through `camera`.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            lights: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Build a scene from a validated scene description.
    pub fn from_description(description: &SceneDescription) -> Self {
        let mut scene = Self::new(description.camera.to_camera());
        scene.lights = description.lights.clone();
        scene.objects = description
            .objects
            .iter()
            .map(|object| match object.shape {
                Shape::Sphere { center, radius } => {
                    SceneObject::new(Sphere::new(center, radius), object.material, object.pygment)
                }
                Shape::Plane { point, normal } => {
                    SceneObject::new(Plane::new(point, normal), object.material, object.pygment)
                }
            })
            .collect();

        log::debug!(
            "Built scene: {} objects, {} lights",
            scene.objects.len(),
            scene.lights.len()
        );
        scene
    }

    /// Add a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Add an object.
    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Check the camera, lights and objects, returning the derived camera basis.
    pub fn validate(&self) -> Result<CameraBasis, ConfigError> {
        let basis = self.camera.basis()?;

        for (index, light) in self.lights.iter().enumerate() {
            light
                .check()
                .map_err(|reason| ConfigError::InvalidLight { index, reason })?;
        }

        for (index, object) in self.objects.iter().enumerate() {
            object
                .check_geometry()
                .map_err(|reason| ConfigError::InvalidShape { index, reason })?;
            object
                .material()
                .check()
                .map_err(|reason| ConfigError::InvalidMaterial { index, reason })?;
            object
                .pygment()
                .check()
                .map_err(|reason| ConfigError::InvalidPygment { index, reason })?;
        }

        Ok(basis)
    }

    /// Find the closest object hit by `ray`.
    ///
    /// Scans every object in order. A candidate replaces the current best only
    /// when its `t` is strictly smaller, so on equal distances the object that
    /// comes first in the scene wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut closest = RayResponse::MISS;
        let mut closest_object = None;

        for object in &self.objects {
            let response = object.intersect(ray);
            if response.intersected && response.t < closest.t {
                closest = response;
                closest_object = Some(object);
            }
        }

        closest_object.map(|object| Hit {
            object,
            response: closest,
        })
    }
}
