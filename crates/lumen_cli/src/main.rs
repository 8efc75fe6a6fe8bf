//! Lumen CLI - renders the built-in demo scene to an image file.
//!
//! Usage: `lumen_cli [output-path]` (defaults to `render.png`).

use anyhow::Result;
use lumen_core::{Plane, Scene, Sphere};
use lumen_math::Vec3;
use lumen_renderer::{render, Camera, Projection};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "render.png".to_string());

    let camera = Camera::new()
        .with_projection(Projection::Perspective)
        .with_position(Vec3::new(0.0, 20.0, 100.0), Vec3::ZERO, Vec3::Y)
        .with_clip(0.1, 150.0)
        .with_resolution(512, 512)
        .with_frustum(-10.0, 10.0, -10.0, 10.0);

    let scene = demo_scene();
    log::info!(
        "rendering {} shapes at {}x{}",
        scene.len(),
        camera.width(),
        camera.height()
    );

    let start = Instant::now();
    let image = render(&camera, &scene);
    log::info!("rendered in {:?}", start.elapsed());

    image.save(&output)?;

    Ok(())
}

/// Demo scene: a blue ground plane and three colored spheres at mixed
/// depths, so the distance falloff is visible across the frame.
fn demo_scene() -> Scene {
    let mut scene = Scene::new();

    scene.add_shape(Plane::default().with_diffuse_color(Vec3::new(0.0, 0.0, 255.0)));
    scene.add_shape(
        Sphere::new(Vec3::new(-60.0, 30.0, -10.0), 60.0)
            .with_diffuse_color(Vec3::new(0.0, 255.0, 0.0)),
    );
    scene.add_shape(
        Sphere::new(Vec3::new(50.0, 15.0, 10.0), 30.0)
            .with_diffuse_color(Vec3::new(200.0, 0.0, 255.0)),
    );
    scene.add_shape(
        Sphere::new(Vec3::new(0.0, 10.0, 50.0), 20.0)
            .with_diffuse_color(Vec3::new(255.0, 0.0, 0.0)),
    );

    scene
}
