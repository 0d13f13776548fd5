//! Object trait and intersection records.

use std::sync::Arc;

use lumen_math::{DVec3, Ray};

use crate::Material;

/// Hits closer than this are discarded, so secondary rays starting on a
/// surface do not immediately re-hit it.
pub const MIN_HIT_DISTANCE: f64 = 1e-6;

/// Geometric record of a ray-surface intersection.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Distance along the ray, always positive
    pub distance: f64,
    /// World-space intersection point
    pub point: DVec3,
    /// Unit surface normal at the point
    pub normal: DVec3,
}

/// A hit paired with the material of the object that produced it.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    pub hit: Hit,
    pub material: &'a dyn Material,
}

/// Trait for geometry that rays can intersect.
///
/// Objects share their material; the `Arc` is cloned into every object that
/// uses it and released when the object is dropped.
pub trait Object: Send + Sync {
    /// Intersect with `ray`.
    ///
    /// Returns the closest hit beyond [`MIN_HIT_DISTANCE`], or `None` when
    /// the ray misses.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;

    /// The material this object is shaded with.
    fn material(&self) -> &Arc<dyn Material>;
}
