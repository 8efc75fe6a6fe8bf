//! Sphere primitive for ray casting.

use lumen_math::{Ray, Vec3};

/// A sphere defined by a center point and a radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    /// Flat base color, 0-255 per channel.
    pub diffuse_color: Vec3,
}

impl Sphere {
    /// Create a new white sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            diffuse_color: Vec3::splat(255.0),
        }
    }

    /// Set the diffuse color (0-255 per channel).
    pub fn with_diffuse_color(mut self, color: Vec3) -> Self {
        self.diffuse_color = color;
        self
    }

    /// Intersection distance from the ray origin, or `f32::INFINITY`
    /// when the ray misses.
    ///
    /// Solves the quadratic `a*t^2 + 2b*t + c = 0` with `a = d.d`,
    /// `b = d.(o - center)`, `c = |o - center|^2 - r^2`. When neither
    /// root is positive the sphere is entirely behind the origin (or the
    /// origin sits on the backward half of it), which counts as a miss.
    pub fn hit(&self, ray: &Ray) -> f32 {
        let oc = ray.origin() - self.center;
        let d = ray.direction();

        let a = d.dot(d);
        let b = d.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            return f32::INFINITY;
        }

        let sqrtd = discriminant.sqrt();
        let t_minus = (-b - sqrtd) / a;
        let t_plus = (-b + sqrtd) / a;

        if t_minus > 0.0 {
            t_minus.min(t_plus)
        } else if t_plus > 0.0 {
            t_plus
        } else {
            f32::INFINITY
        }
    }

    /// Surface normal at a point on the sphere, pointing outward.
    pub fn normal(&self, p: Vec3) -> Vec3 {
        (p - self.center).normalize_or_zero()
    }
}

impl Default for Sphere {
    /// A white unit sphere centered at the origin.
    fn default() -> Self {
        Self::new(Vec3::ZERO, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_hit_head_on() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        // Near intersection: 5 units away minus the unit radius
        assert!((sphere.hit(&ray) - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_miss_is_infinity() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(5.0, 5.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        assert_eq!(sphere.hit(&ray), f32::INFINITY);
    }

    #[test]
    fn test_sphere_behind_origin_is_a_miss() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        // Looking directly away from the sphere
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));

        assert_eq!(sphere.hit(&ray), f32::INFINITY);
    }

    #[test]
    fn test_origin_inside_sphere_hits_far_wall() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        // Entry root is behind the origin, exit root is ahead
        assert!((sphere.hit(&ray) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_tangent_ray() {
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        let ray = Ray::new(Vec3::new(1.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        // Grazing hit: both roots coincide at t = 5
        assert!((sphere.hit(&ray) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_normal_points_outward() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 1.0), 1.0);
        let n = sphere.normal(Vec3::ZERO);

        assert!((n - Vec3::new(0.0, 0.0, -1.0)).length() < EPSILON);
        assert!((n.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_default_is_unit_sphere() {
        let sphere = Sphere::default();
        assert_eq!(sphere.center, Vec3::ZERO);
        assert_eq!(sphere.radius, 1.0);
        assert_eq!(sphere.diffuse_color, Vec3::splat(255.0));
    }
}
