//! Material trait and shading models.

use lumen_math::{reflect, DVec3, Ray};

use crate::{Hit, Scene};

/// Color type alias (linear RGB, each channel typically 0-1)
pub type Color = DVec3;

/// Convert 8-bit RGB values into linear light.
pub fn color_from_rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::new(f64::from(r), f64::from(g), f64::from(b)) / 255.0
}

/// Trait for shading models evaluated at a surface hit.
///
/// Materials are shared between objects through `Arc<dyn Material>` and are
/// never mutated once the scene is built, so concurrent readers are safe.
pub trait Material: Send + Sync {
    /// Compute the color of `hit` as seen along `ray`.
    fn shade(&self, hit: &Hit, scene: &Scene, ray: &Ray) -> Color;
}

/// Empirical Phong-lit surface: ambient + diffuse + specular with shadow
/// occlusion against the scene's directional light.
#[derive(Debug, Clone)]
pub struct Phong {
    pub surface_color: Color,
    pub diffuse_k: f64,
    pub specular_k: f64,
    pub specular_n: f64,
    pub ambient_intensity: f64,
}

impl Default for Phong {
    fn default() -> Self {
        Self {
            surface_color: Color::splat(0.75),
            diffuse_k: 0.2,
            specular_k: 0.2,
            specular_n: 10.0,
            ambient_intensity: 0.1,
        }
    }
}

impl Phong {
    /// A Phong material with the default coefficients and the given color.
    pub fn new(surface_color: Color) -> Self {
        Self {
            surface_color,
            ..Default::default()
        }
    }
}

impl Material for Phong {
    fn shade(&self, hit: &Hit, scene: &Scene, ray: &Ray) -> Color {
        let ambient = self.ambient_intensity * self.surface_color;

        // Anything between the surface and the light leaves only ambient
        let shadow_ray = Ray::new(hit.point, -scene.light.direction);
        if scene.intersect(&shadow_ray).is_some() {
            return ambient;
        }

        let light = &scene.light;

        let diffuse_intensity = hit.normal.dot(-light.direction).max(0.0);
        let diffuse =
            diffuse_intensity * self.diffuse_k * light.intensity * self.surface_color * light.color;

        let specular_intensity = reflect(light.direction, hit.normal)
            .dot(-ray.direction)
            .max(0.0)
            .powf(self.specular_n);
        let specular = specular_intensity * self.specular_k * light.intensity * light.color;

        ambient + diffuse + specular
    }
}

/// Debug material that maps the surface normal to a color.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalColor;

impl Material for NormalColor {
    fn shade(&self, hit: &Hit, _scene: &Scene, _ray: &Ray) -> Color {
        // Remap each component from [-1, 1] into the displayable [0, 1]
        (hit.normal + Color::ONE) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera, Light, Sphere};
    use std::sync::Arc;

    fn test_scene(light_direction: DVec3) -> Scene {
        let camera = Camera {
            center: DVec3::ZERO,
            forward: DVec3::Z,
            up: DVec3::Y,
            width: 2.0,
            height: 2.0,
            focal_distance: 1.0,
        };
        Scene::new(camera, Light::new(light_direction, Color::ONE, 1.0))
    }

    fn head_on_hit() -> Hit {
        Hit {
            distance: 4.0,
            point: DVec3::new(0.0, 0.0, 4.0),
            normal: -DVec3::Z,
        }
    }

    #[test]
    fn test_phong_lit_exceeds_ambient() {
        // Light shining straight at the surface
        let scene = test_scene(DVec3::Z);
        let material = Phong::new(Color::new(1.0, 0.5, 0.25));

        let ray = Ray::new(DVec3::ZERO, DVec3::Z);
        let shaded = material.shade(&head_on_hit(), &scene, &ray);
        let ambient = material.ambient_intensity * material.surface_color;

        assert!(shaded.x > ambient.x);
        assert!(shaded.y > ambient.y);
        assert!(shaded.z > ambient.z);
    }

    #[test]
    fn test_phong_shadowed_is_ambient_only() {
        let mut scene = test_scene(DVec3::Z);

        // A blocker sits between the hit point and the light
        let material: Arc<dyn Material> = Arc::new(Phong::default());
        scene.add_object(Box::new(Sphere::new(
            DVec3::new(0.0, 0.0, 2.0),
            0.5,
            material,
        )));

        let phong = Phong::new(Color::ONE);
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);
        let shaded = phong.shade(&head_on_hit(), &scene, &ray);

        assert_eq!(shaded, phong.ambient_intensity * phong.surface_color);
    }

    #[test]
    fn test_normal_color_remap() {
        let scene = test_scene(DVec3::Z);
        let hit = Hit {
            distance: 1.0,
            point: DVec3::ZERO,
            normal: DVec3::Z,
        };
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        assert_eq!(
            NormalColor.shade(&hit, &scene, &ray),
            Color::new(0.5, 0.5, 1.0)
        );
    }

    #[test]
    fn test_color_from_rgb8() {
        assert_eq!(color_from_rgb8(255, 255, 255), Color::ONE);
        assert_eq!(color_from_rgb8(0, 0, 0), Color::ZERO);
        assert!((color_from_rgb8(191, 32, 32).x - 191.0 / 255.0).abs() < 1e-12);
    }
}
