use crate::Vec3;

/// A ray in 3D space: the half-line `origin + t * direction` for `t >= 0`.
///
/// The direction is normalized on construction, so the hit parameter `t`
/// is a distance in world units. Unit length is an invariant of the type,
/// not caller discipline, which is why the fields are private.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Create a new ray with the direction normalized.
    ///
    /// A zero direction is left as zero rather than treated as an error;
    /// callers that need a defined ray must not pass one.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the unit direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    /// A ray at the world origin pointing down +Z.
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z)
    }
}
