//! Lumen Core - scene primitives for the ray caster.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere`, `Plane`, and the closed `Shape` enum over them
//! - **Scene**: an append-only, iteration-ordered shape container
//!
//! # Example
//!
//! ```
//! use lumen_core::{Scene, Sphere};
//! use lumen_math::Vec3;
//!
//! let mut scene = Scene::new();
//! scene.add_shape(Sphere::new(Vec3::new(0.0, 10.0, 50.0), 20.0));
//! assert_eq!(scene.len(), 1);
//! ```

mod plane;
mod scene;
mod shape;
mod sphere;

pub use plane::Plane;
pub use scene::Scene;
pub use shape::Shape;
pub use sphere::Sphere;
