//! The closed set of renderable primitives.

use crate::{Plane, Sphere};
use lumen_math::{Ray, Vec3};

/// A scene primitive.
///
/// The primitive set is small and fixed, so shapes are a closed enum with
/// exhaustive-match dispatch rather than trait objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Shape {
    /// Intersection distance from the ray origin.
    ///
    /// Returns `f32::INFINITY` when the ray misses or runs parallel to
    /// the surface, never a NaN for a valid miss.
    pub fn hit(&self, ray: &Ray) -> f32 {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray),
            Shape::Plane(plane) => plane.hit(ray),
        }
    }

    /// Surface normal at a point on the shape.
    pub fn normal(&self, p: Vec3) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.normal(p),
            Shape::Plane(plane) => plane.normal(p),
        }
    }

    /// Flat base color, 0-255 per channel.
    pub fn diffuse_color(&self) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.diffuse_color,
            Shape::Plane(plane) => plane.diffuse_color,
        }
    }

    /// Reference point of the shape. A plane reports its anchor point,
    /// which is not geometrically a center; it exists for uniform access.
    pub fn center(&self) -> Vec3 {
        match self {
            Shape::Sphere(sphere) => sphere.center,
            Shape::Plane(plane) => plane.point,
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}
