//! Built-in demo scene.

use std::sync::Arc;

use lumen_math::DVec3;
use lumen_renderer::{
    color_from_rgb8, focal_distance_from_fov, Camera, Light, Material, Phong, Scene, Sphere,
};

/// Three red spheres sharing one material, lit by a single white light.
///
/// Useful as a self-contained scene for integration tests and for trying the
/// renderer without an OBJ file.
pub fn demo_scene(aspect_ratio: f64) -> Scene {
    let width = 10.0;
    let camera = Camera {
        center: DVec3::ZERO,
        forward: DVec3::Y,
        up: DVec3::Z,
        width,
        height: width / aspect_ratio,
        focal_distance: focal_distance_from_fov(width, 80.0),
    };
    let light = Light::new(
        DVec3::new(0.0, 1.0, -2.0),
        color_from_rgb8(255, 255, 255),
        5.0,
    );
    let mut scene = Scene::new(camera, light);

    let red: Arc<dyn Material> = Arc::new(Phong::new(color_from_rgb8(191, 32, 32)));
    scene.add_object(Box::new(Sphere::new(
        DVec3::new(0.0, 10.0, 0.0),
        4.0,
        red.clone(),
    )));
    scene.add_object(Box::new(Sphere::new(
        DVec3::new(-7.0, 10.0, 0.0),
        3.0,
        red.clone(),
    )));
    scene.add_object(Box::new(Sphere::new(DVec3::new(0.0, 7.0, 6.0), 3.0, red)));

    scene
}
