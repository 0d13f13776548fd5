//! lumen_renderer - CPU ray tracing
//!
//! The rendering engine: a pinhole camera, sphere and triangle primitives
//! behind an object trait, Phong shading with recursive mirror reflection,
//! a stratified anti-aliasing sampler, and a row-banded thread scheduler.

mod camera;
mod object;
mod sphere;
mod triangle;
mod material;
mod light;
mod scene;
mod renderer;
mod framebuffer;
mod scheduler;

pub use camera::{focal_distance_from_fov, Camera};
pub use object::{Hit, Intersection, Object, MIN_HIT_DISTANCE};
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use material::{color_from_rgb8, Color, Material, NormalColor, Phong};
pub use light::Light;
pub use scene::Scene;
pub use renderer::{
    ray_color, render_pixel, render_pixel_with_offsets, sample_offsets, RenderConfig, RenderMode,
};
pub use framebuffer::{color_to_rgb8, ImageBuffer};
pub use scheduler::{render, row_bands, worker_count, RenderError, DEFAULT_WORKERS};

/// Re-export the math foundation
pub use lumen_math::{reflect, DVec3, Ray};
