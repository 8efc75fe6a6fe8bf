//! Lumen Renderer - distance-shaded ray casting.
//!
//! Casts one ray per pixel from a configurable camera into a scene of
//! analytic primitives and shades each pixel by nearest-intersection
//! distance. No lighting model, no bounces, no acceleration structures.

mod camera;
mod image;
mod renderer;

pub use camera::{Camera, Projection};
pub use renderer::{render, render_pixel};
pub use self::image::{Image, ImageError, DEFAULT_GAMMA};

/// Re-export common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
