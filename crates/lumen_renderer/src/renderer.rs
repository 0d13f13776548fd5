//! Render modes and the anti-aliasing sampler.
//!
//! Three mutually exclusive modes share the nearest-hit query: material
//! shading with recursive mirror reflection, normal visualization, and a
//! grayscale hit-distance map.

use rand::RngCore;

use lumen_math::{reflect, Ray};

use crate::{Color, Material, NormalColor, Scene};

/// Fraction of the mirror-reflected color mixed into each shaded hit.
const REFLECTION_WEIGHT: f64 = 0.2;

/// How a ray's color is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Material shading with recursive mirror reflection
    Shaded,
    /// Surface normals remapped to colors, ignoring materials
    Normals,
    /// Hit distances as grayscale, closer is brighter
    Distances,
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing; must be a perfect square
    pub samples_per_pixel: u32,
    /// Maximum reflection recursion depth
    pub max_depth: u32,
    pub mode: RenderMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 4,
            max_depth: 10,
            mode: RenderMode::Shaded,
        }
    }
}

/// Compute the color seen by a ray in the given mode.
pub fn ray_color(scene: &Scene, mode: RenderMode, ray: &Ray, depth: u32) -> Color {
    match mode {
        RenderMode::Shaded => shaded(scene, ray, depth),
        RenderMode::Normals => normals(scene, ray),
        RenderMode::Distances => distances(scene, ray),
    }
}

fn shaded(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    // Out of reflection budget, contribute no more light
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(intersection) = scene.intersect(ray) else {
        return Color::ZERO;
    };

    let local = intersection.material.shade(&intersection.hit, scene, ray);

    // One perfect-mirror bounce per level, attenuated by a fixed weight
    let reflected_ray = Ray::new(
        intersection.hit.point,
        reflect(ray.direction, intersection.hit.normal),
    );
    let reflected = shaded(scene, &reflected_ray, depth - 1);

    local + REFLECTION_WEIGHT * reflected
}

fn normals(scene: &Scene, ray: &Ray) -> Color {
    match scene.intersect(ray) {
        // This mode overrides whatever material the object carries
        Some(intersection) => NormalColor.shade(&intersection.hit, scene, ray),
        None => Color::ZERO,
    }
}

fn distances(scene: &Scene, ray: &Ray) -> Color {
    match scene.intersect(ray) {
        Some(intersection) => {
            debug_assert!(intersection.hit.distance > 0.0);
            // Map (0, +inf) onto (0, 1], closer is brighter
            Color::splat(1.0 / (intersection.hit.distance + 1.0))
        }
        None => Color::ZERO,
    }
}

/// Uniform f64 in [0, 1) from a type-erased generator.
fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    // 53 random mantissa bits
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Stratified sample offsets within a pixel footprint.
///
/// The pixel is split into a sqrt(samples) x sqrt(samples) grid and one
/// uniformly jittered sample is drawn per sub-cell, which cuts variance
/// compared to sampling the whole pixel at random. Offsets are relative to
/// the pixel center, each component in [-0.5, 0.5).
pub fn sample_offsets(samples: u32, rng: &mut dyn RngCore) -> Vec<(f64, f64)> {
    let rank = (samples as f64).sqrt() as u32;
    debug_assert_eq!(rank * rank, samples, "sample count must be a perfect square");

    let cell = 1.0 / f64::from(rank);
    let mut offsets = Vec::with_capacity(samples as usize);
    for sy in 0..rank {
        for sx in 0..rank {
            let du = (f64::from(sx) + gen_f64(rng)) * cell - 0.5;
            let dv = (f64::from(sy) + gen_f64(rng)) * cell - 0.5;
            offsets.push((du, dv));
        }
    }
    offsets
}

/// Render one pixel from explicit sample offsets.
///
/// Offsets are relative to the pixel center, so all-zero offsets collapse
/// to a single centered, non-antialiased sample.
pub fn render_pixel_with_offsets(
    scene: &Scene,
    config: &RenderConfig,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    offsets: &[(f64, f64)],
) -> Color {
    let mut pixel_color = Color::ZERO;

    for &(du, dv) in offsets {
        let u = (f64::from(x) + 0.5 + du) / f64::from(width) - 0.5;
        let v = (f64::from(y) + 0.5 + dv) / f64::from(height) - 0.5;
        let ray = scene.camera.cast_ray(u, v);
        pixel_color += ray_color(scene, config.mode, &ray, config.max_depth);
    }

    // Average the samples
    pixel_color / offsets.len() as f64
}

/// Render one pixel with stratified anti-aliasing.
pub fn render_pixel(
    scene: &Scene,
    config: &RenderConfig,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let offsets = sample_offsets(config.samples_per_pixel, rng);
    render_pixel_with_offsets(scene, config, x, y, width, height, &offsets)
}
