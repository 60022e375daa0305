//! Phong shading with hard shadows.
//!
//! The color of a hit is the ambient term (pygment color scaled by the
//! material's ambient coefficient, under white ambient light) plus, for every
//! light that reaches the point, an attenuated Lambertian diffuse term and a
//! Blinn half-vector specular term. The sum is clipped per channel into [0, 1].

use lumen_core::{Light, Material};
use lumen_math::{clamp_color, Color, Ray, Vec3};

use crate::scene::{Hit, Scene};

/// Offset applied to shadow rays so a surface does not shadow itself.
pub const SHADOW_EPSILON: f32 = 0.001;

/// How a light's visibility from a surface point is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowTest {
    /// Occluded only by a hit strictly between the point and the light.
    ///
    /// The shadow ray starts `SHADOW_EPSILON` off the surface toward the
    /// light and hits at or beyond the light are ignored.
    #[default]
    Bounded,

    /// Occluded by any hit of a ray cast from the point along the
    /// light-to-point direction, at any distance and with no surface offset.
    ///
    /// Geometry behind the point, and beyond the light, still casts shadows.
    AnyHit,
}

impl Scene {
    /// Whether `light` is blocked as seen from `point`.
    pub fn is_occluded(&self, point: Vec3, light: &Light, shadow_test: ShadowTest) -> bool {
        match shadow_test {
            ShadowTest::Bounded => {
                let offset = light.position - point;
                let distance = offset.length();
                let Some(to_light) = offset.try_normalize() else {
                    return false;
                };

                let ray = Ray::new(point + to_light * SHADOW_EPSILON, to_light);
                let reach = distance - SHADOW_EPSILON;
                self.nearest_hit(&ray)
                    .map_or(false, |hit| hit.response.t < reach)
            }
            ShadowTest::AnyHit => {
                let Some(from_light) = (point - light.position).try_normalize() else {
                    return false;
                };
                self.nearest_hit(&Ray::new(point, from_light)).is_some()
            }
        }
    }
}

/// Compute the clamped color of a ray that hit `hit`.
pub fn shade(scene: &Scene, ray: &Ray, hit: &Hit, shadow_test: ShadowTest) -> Color {
    let material = hit.object.material();
    let point = hit.response.point;
    let normal = hit.response.normal;
    let base_color = hit.object.pygment().color_at(point);
    let to_eye = -ray.direction();

    let ambient = base_color * material.ambient;

    let color = scene
        .lights
        .iter()
        .filter(|light| !scene.is_occluded(point, light, shadow_test))
        .fold(ambient, |color, light| {
            color + light_contribution(light, material, base_color, point, normal, to_eye)
        });

    clamp_color(color)
}

/// Diffuse plus specular contribution of one unoccluded light.
fn light_contribution(
    light: &Light,
    material: &Material,
    base_color: Color,
    point: Vec3,
    normal: Vec3,
    to_eye: Vec3,
) -> Color {
    let offset = light.position - point;
    let distance = offset.length();
    let Some(to_light) = offset.try_normalize() else {
        return Color::ZERO;
    };
    let Some(attenuation) = light.attenuation.factor(distance) else {
        return Color::ZERO;
    };

    let light_color = light.color * attenuation;

    let lambert = normal.dot(to_light).max(0.0);
    let diffuse = base_color * (material.diffuse * lambert) * light_color;

    let specular = match (to_light + to_eye).try_normalize() {
        Some(half_vector) => {
            let alignment = normal.dot(half_vector).max(0.0);
            light_color * (material.specular * alignment.powf(material.specular_exponent))
        }
        // Light exactly behind the eye direction
        None => Color::ZERO,
    };

    diffuse + specular
}
