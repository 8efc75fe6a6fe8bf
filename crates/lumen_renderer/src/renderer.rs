//! Distance-shaded render loop.
//!
//! One ray per pixel, nearest-hit search over every shape in the scene,
//! and a linear distance falloff toward the far plane in place of a
//! lighting model.

use crate::{Camera, Image};
use lumen_core::{Scene, Shape};
use lumen_math::{Interval, Ray, Vec3};
use rayon::prelude::*;

/// Find the nearest shape along the ray within the forward hit window.
///
/// A shape qualifies only when its hit distance is forward of the ray
/// origin, nearer than anything found so far, and no farther than the
/// far plane.
fn nearest_hit<'a>(scene: &'a Scene, ray: &Ray, window: Interval) -> Option<(&'a Shape, f32)> {
    let mut closest_t = f32::INFINITY;
    let mut closest_shape = None;

    for shape in scene.shapes() {
        let t = shape.hit(ray);
        if window.admits(t) && t < closest_t {
            closest_t = t;
            closest_shape = Some(shape);
        }
    }

    closest_shape.map(|shape| (shape, closest_t))
}

/// Compute the linear color of pixel (i, j).
///
/// The nearest hit is shaded as `diffuse_color * (far - t) / far`: full
/// color at the eye fading to black at the far plane. Misses are black.
/// Channels come out normalized to [0, 1].
pub fn render_pixel(camera: &Camera, scene: &Scene, i: u32, j: u32) -> Vec3 {
    let ray = camera.get_ray(i, j);
    let window = Interval::new(0.0, camera.far());

    match nearest_hit(scene, &ray, window) {
        Some((shape, t)) => {
            let falloff = (camera.far() - t) / camera.far();
            let color = shape.diffuse_color() * falloff / 255.0;
            Vec3::new(
                Interval::UNIT.clamp(color.x),
                Interval::UNIT.clamp(color.y),
                Interval::UNIT.clamp(color.z),
            )
        }
        None => Vec3::ZERO,
    }
}

/// Render the scene into a fresh image buffer.
///
/// Pixel rows carry no cross-pixel dependency, so they are rendered in
/// parallel; each pixel is written exactly once and the result is
/// identical to the sequential nested loop for the same inputs.
pub fn render(camera: &Camera, scene: &Scene) -> Image {
    log::debug!(
        "rendering {}x{} pixels over {} shapes",
        camera.width(),
        camera.height(),
        scene.len()
    );

    let rows: Vec<Vec<Vec3>> = (0..camera.height())
        .into_par_iter()
        .map(|j| {
            (0..camera.width())
                .map(|i| render_pixel(camera, scene, i, j))
                .collect()
        })
        .collect();

    let mut image = Image::new(camera.width(), camera.height());
    for (j, row) in rows.iter().enumerate() {
        for (i, color) in row.iter().enumerate() {
            image.paint(i as u32, j as u32, *color, u8::MAX);
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Projection;
    use lumen_core::{Plane, Sphere};

    const EPSILON: f32 = 1e-4;

    fn head_on_camera() -> Camera {
        Camera::new()
            .with_projection(Projection::Perspective)
            .with_position(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
            .with_clip(0.1, 10.0)
            .with_resolution(3, 3)
    }

    #[test]
    fn test_empty_scene_renders_black() {
        let camera = Camera::new().with_resolution(4, 4);
        let image = render(&camera, &Scene::new());

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(image.get(x, y), Vec3::ZERO);
                assert_eq!(image.get_alpha(x, y), 255);
            }
        }
    }

    #[test]
    fn test_distance_falloff_shading() {
        let mut scene = Scene::new();
        scene.add_shape(Sphere::new(Vec3::ZERO, 1.0));

        // Center ray hits the unit sphere at t = 4 with far = 10, so the
        // white sphere shades to (10 - 4) / 10 of full brightness.
        let color = render_pixel(&head_on_camera(), &scene, 1, 1);
        assert!((color - Vec3::splat(0.6)).length() < EPSILON);
    }

    #[test]
    fn test_nearest_shape_wins() {
        let mut scene = Scene::new();
        scene.add_shape(
            Sphere::new(Vec3::new(0.0, 0.0, 2.0), 0.5)
                .with_diffuse_color(Vec3::new(255.0, 0.0, 0.0)),
        );
        scene.add_shape(Sphere::new(Vec3::ZERO, 1.0));

        // The small red sphere sits in front (t = 2.5); only red survives
        let color = render_pixel(&head_on_camera(), &scene, 1, 1);
        assert!(color.x > 0.0);
        assert_eq!(color.y, 0.0);
        assert_eq!(color.z, 0.0);
    }

    #[test]
    fn test_hits_beyond_far_plane_are_discarded() {
        let mut scene = Scene::new();
        scene.add_shape(Sphere::new(Vec3::new(0.0, 0.0, -50.0), 1.0));

        // far = 10, sphere at t = 54: out of range, background black
        let color = render_pixel(&head_on_camera(), &scene, 1, 1);
        assert_eq!(color, Vec3::ZERO);
    }

    #[test]
    fn test_shapes_behind_camera_are_invisible() {
        let mut scene = Scene::new();
        scene.add_shape(Sphere::new(Vec3::new(0.0, 0.0, 20.0), 1.0));

        let color = render_pixel(&head_on_camera(), &scene, 1, 1);
        assert_eq!(color, Vec3::ZERO);
    }

    #[test]
    fn test_plane_shades_like_any_shape() {
        let mut scene = Scene::new();
        scene.add_shape(
            Plane::new(Vec3::Z, Vec3::ZERO).with_diffuse_color(Vec3::new(0.0, 0.0, 255.0)),
        );

        // Plane face-on at t = 5, falloff (10 - 5) / 10
        let color = render_pixel(&head_on_camera(), &scene, 1, 1);
        assert!((color.z - 0.5).abs() < EPSILON);
        assert_eq!(color.x, 0.0);
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut scene = Scene::new();
        scene.add_shape(Sphere::new(Vec3::ZERO, 1.0));
        scene.add_shape(Plane::new(Vec3::Y, Vec3::new(0.0, -2.0, 0.0)));
        let camera = head_on_camera().with_resolution(8, 8);

        let first = render(&camera, &scene);
        let second = render(&camera, &scene);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_render_matches_sequential_pixels() {
        let mut scene = Scene::new();
        scene.add_shape(Sphere::new(Vec3::new(0.5, -0.5, 0.0), 1.5));
        let camera = head_on_camera().with_resolution(6, 5);

        let image = render(&camera, &scene);
        for j in 0..camera.height() {
            for i in 0..camera.width() {
                assert_eq!(image.get(i, j), render_pixel(&camera, &scene, i, j));
            }
        }
    }
}
