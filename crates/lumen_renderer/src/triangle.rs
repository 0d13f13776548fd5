//! Triangle primitive.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use std::sync::Arc;

use lumen_math::{DVec3, Ray};

use crate::{Hit, Material, Object, MIN_HIT_DISTANCE};

/// A triangle primitive with counter-clockwise vertex winding.
pub struct Triangle {
    v0: DVec3,
    v1: DVec3,
    v2: DVec3,
    /// Pre-computed plane normal (unit length, from the winding order)
    normal: DVec3,
    material: Arc<dyn Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices listed counter-clockwise.
    pub fn new(vertices: [DVec3; 3], material: Arc<dyn Material>) -> Self {
        let [v0, v1, v2] = vertices;
        let normal = (v1 - v0).cross(v2 - v0).normalize();

        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }

    /// The precomputed plane normal.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }
}

impl Object for Triangle {
    /// Möller-Trumbore ray-triangle intersection.
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction.cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to the triangle plane
        if a.abs() < 1e-12 {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin - self.v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        if t <= MIN_HIT_DISTANCE {
            return None;
        }

        Some(Hit {
            distance: t,
            point: ray.at(t),
            normal: self.normal,
        })
    }

    fn material(&self) -> &Arc<dyn Material> {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NormalColor;

    fn test_material() -> Arc<dyn Material> {
        Arc::new(NormalColor)
    }

    fn xy_triangle(z: f64) -> Triangle {
        Triangle::new(
            [
                DVec3::new(-1.0, -1.0, z),
                DVec3::new(1.0, -1.0, z),
                DVec3::new(0.0, 1.0, z),
            ],
            test_material(),
        )
    }

    #[test]
    fn test_triangle_hit() {
        let tri = xy_triangle(2.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        let hit = tri.intersect(&ray).unwrap();
        assert!((hit.distance - 2.0).abs() < 1e-12);
        assert!((hit.point - DVec3::new(0.0, 0.0, 2.0)).length() < 1e-12);
    }

    #[test]
    fn test_winding_normal() {
        // Counter-clockwise winding of these vertices yields a +Z normal
        let tri = xy_triangle(2.0);
        assert!((tri.normal() - DVec3::Z).length() < 1e-12);

        // Swapping two vertices flips the winding and the normal
        let flipped = Triangle::new(
            [
                DVec3::new(1.0, -1.0, 2.0),
                DVec3::new(-1.0, -1.0, 2.0),
                DVec3::new(0.0, 1.0, 2.0),
            ],
            test_material(),
        );
        assert!((flipped.normal() + DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_hit_reports_plane_normal() {
        let tri = xy_triangle(2.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::Z);

        let hit = tri.intersect(&ray).unwrap();
        assert_eq!(hit.normal, tri.normal());
    }

    #[test]
    fn test_miss_outside_edges() {
        let tri = xy_triangle(2.0);

        // Passes through the plane well outside the triangle
        let ray = Ray::new(DVec3::new(5.0, 5.0, 0.0), DVec3::Z);
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_parallel_ray_misses() {
        let tri = xy_triangle(2.0);

        let ray = Ray::new(DVec3::ZERO, DVec3::X);
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_hit_behind_origin() {
        let tri = xy_triangle(-2.0);

        let ray = Ray::new(DVec3::ZERO, DVec3::Z);
        assert!(tri.intersect(&ray).is_none());
    }
}
