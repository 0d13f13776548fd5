// Re-export the f64 glam types the renderer is built on
pub use glam::{dvec3, DVec3};

mod ray;
pub use ray::Ray;

/// Reflect a vector about a normal.
///
/// `n` must be unit length for the result to be the mirror image of `v`.
#[inline]
pub fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - 2.0 * v.dot(n) * n
}
