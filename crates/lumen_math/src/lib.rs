// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod color;
mod interval;
mod ray;

pub use color::{clamp_color, Color};
pub use interval::Interval;
pub use ray::Ray;
