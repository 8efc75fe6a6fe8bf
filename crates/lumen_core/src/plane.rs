//! Infinite plane primitive for ray casting.

use lumen_math::{Ray, Vec3};

/// An infinite plane defined by a normal vector and a point on the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub point: Vec3,
    /// Flat base color, 0-255 per channel.
    pub diffuse_color: Vec3,
}

impl Plane {
    /// Create a new white plane.
    pub fn new(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal,
            point,
            diffuse_color: Vec3::splat(255.0),
        }
    }

    /// Set the diffuse color (0-255 per channel).
    pub fn with_diffuse_color(mut self, color: Vec3) -> Self {
        self.diffuse_color = color;
        self
    }

    /// Intersection distance from the ray origin, or `f32::INFINITY`
    /// when the ray is parallel to the plane.
    ///
    /// The result may be negative when the plane lies behind the ray
    /// origin; the render loop discards non-forward hits.
    pub fn hit(&self, ray: &Ray) -> f32 {
        let denominator = ray.direction().dot(self.normal);
        if denominator == 0.0 {
            return f32::INFINITY;
        }

        (self.point - ray.origin()).dot(self.normal) / denominator
    }

    /// Surface normal, constant across the whole plane.
    pub fn normal(&self, _p: Vec3) -> Vec3 {
        self.normal
    }
}

impl Default for Plane {
    /// A white ground plane through the origin, normal pointing up +Y.
    fn default() -> Self {
        Self::new(Vec3::Y, Vec3::ZERO)
    }
}
