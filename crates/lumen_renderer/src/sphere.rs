//! Sphere primitive.

use std::sync::Arc;

use lumen_math::{DVec3, Ray};

use crate::{Hit, Material, Object, MIN_HIT_DISTANCE};

/// A sphere primitive.
pub struct Sphere {
    center: DVec3,
    radius: f64,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: DVec3, radius: f64, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Object for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Prefer the nearer root, fall back to the farther one when the
        // ray starts inside the sphere
        let mut root = (h - sqrtd) / a;
        if root <= MIN_HIT_DISTANCE {
            root = (h + sqrtd) / a;
            if root <= MIN_HIT_DISTANCE {
                return None;
            }
        }

        let point = ray.at(root);
        Some(Hit {
            distance: root,
            point,
            normal: (point - self.center) / self.radius,
        })
    }

    fn material(&self) -> &Arc<dyn Material> {
        &self.material
    }
}
