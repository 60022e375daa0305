use crate::{Interval, Vec3};

/// Color type alias (RGB, channels may exceed 1.0 before clamping)
pub type Color = Vec3;

/// Hard-clip each channel of a color into [0, 1].
#[inline]
pub fn clamp_color(color: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}
