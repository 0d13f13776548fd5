//! Scene ownership and the nearest-hit query.

use lumen_math::Ray;

use crate::{Camera, Intersection, Light, Object};

/// A renderable scene: the object collection, one directional light, and the
/// camera.
///
/// Built once before rendering, then read-only while the workers run.
pub struct Scene {
    objects: Vec<Box<dyn Object>>,
    pub light: Light,
    pub camera: Camera,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(camera: Camera, light: Light) -> Self {
        Self {
            objects: Vec::new(),
            light,
            camera,
        }
    }

    /// Add an object to the scene.
    pub fn add_object(&mut self, object: Box<dyn Object>) {
        self.objects.push(object);
    }

    /// Add every object from an iterator.
    pub fn extend_objects(&mut self, objects: impl IntoIterator<Item = Box<dyn Object>>) {
        self.objects.extend(objects);
    }

    /// Number of objects in the scene.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Find the closest object hit by `ray`.
    ///
    /// Linear scan over every object. A hit replaces the running best only
    /// when strictly closer, so the first-inserted object wins exact ties.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let mut closest: Option<Intersection> = None;

        for object in &self.objects {
            if let Some(hit) = object.intersect(ray) {
                if closest.map_or(true, |best| hit.distance < best.hit.distance) {
                    closest = Some(Intersection {
                        hit,
                        material: object.material().as_ref(),
                    });
                }
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, DVec3, Material, NormalColor, Phong, Sphere};
    use std::sync::Arc;

    fn test_camera() -> Camera {
        Camera {
            center: DVec3::ZERO,
            forward: DVec3::Z,
            up: DVec3::Y,
            width: 2.0,
            height: 2.0,
            focal_distance: 1.0,
        }
    }

    fn empty_scene() -> Scene {
        Scene::new(test_camera(), Light::new(DVec3::Z, Color::ONE, 1.0))
    }

    fn sphere(z: f64, material: Arc<dyn Material>) -> Box<Sphere> {
        Box::new(Sphere::new(DVec3::new(0.0, 0.0, z), 1.0, material))
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = empty_scene();
        assert!(scene.intersect(&Ray::new(DVec3::ZERO, DVec3::Z)).is_none());
    }

    #[test]
    fn test_nearest_hit_wins_regardless_of_order() {
        let near: Arc<dyn Material> = Arc::new(NormalColor);
        let far: Arc<dyn Material> = Arc::new(Phong::default());
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        // The two spheres overlap along the ray; insertion order must not
        // change which one is reported
        for flipped in [false, true] {
            let mut scene = empty_scene();
            if flipped {
                scene.add_object(sphere(10.0, far.clone()));
                scene.add_object(sphere(5.0, near.clone()));
            } else {
                scene.add_object(sphere(5.0, near.clone()));
                scene.add_object(sphere(10.0, far.clone()));
            }

            let intersection = scene.intersect(&ray).unwrap();
            assert!((intersection.hit.distance - 4.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_hit_carries_object_material() {
        let mut scene = empty_scene();
        let material: Arc<dyn Material> = Arc::new(Phong::new(Color::new(1.0, 0.0, 0.0)));
        scene.add_object(sphere(5.0, material.clone()));

        let ray = Ray::new(DVec3::ZERO, DVec3::Z);
        let intersection = scene.intersect(&ray).unwrap();

        // The borrowed material is the same allocation the sphere owns
        assert!(std::ptr::eq(
            intersection.material as *const _ as *const u8,
            material.as_ref() as *const _ as *const u8,
        ));
    }
}
