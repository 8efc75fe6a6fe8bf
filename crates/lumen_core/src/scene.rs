//! Scene container for the ray caster.

use crate::Shape;

/// An ordered collection of shapes.
///
/// A scene is built up by appending shapes during setup, iterated
/// read-only while rendering, and discarded after the frame. It owns the
/// shapes outright; insertion order has no effect on the rendered result
/// because every shape is tested per pixel.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Add a shape to the scene, taking ownership of it.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Iterate the shapes in insertion order.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Get the number of shapes in the scene.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
