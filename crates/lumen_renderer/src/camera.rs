//! Primary ray generation.

use lumen_core::CameraBasis;
use lumen_math::Ray;

/// Generate the primary ray from the camera eye through pixel (`row`, `column`).
///
/// The virtual image plane sits one unit in front of the eye (along `-z`)
/// and spans `2 * tan(fovy / 2)` vertically, scaled by the aspect ratio
/// horizontally. Pixel coordinates map onto `[-extent/2, extent/2)` from the
/// plane's lower-left corner: row 0 is the bottom of the plane, column 0 its
/// left edge.
///
/// `height` and `width` must be positive.
pub fn primary_ray(basis: &CameraBasis, row: u32, column: u32, height: u32, width: u32) -> Ray {
    let aspect_ratio = width as f32 / height as f32;
    let plane_height = 2.0 * (basis.fovy / 2.0).tan();
    let plane_width = plane_height * aspect_ratio;

    let ur = plane_height * (row as f32 / height as f32) - plane_height / 2.0;
    let uc = plane_width * (column as f32 / width as f32) - plane_width / 2.0;

    let grid_point = basis.eye + basis.x * uc + basis.y * ur - basis.z;
    let direction = (grid_point - basis.eye).normalize();

    Ray::new(basis.eye, direction)
}
