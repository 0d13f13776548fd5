//! lumen_core - scene population
//!
//! Everything that puts geometry into a [`lumen_renderer::Scene`]: the
//! Wavefront OBJ loader and the built-in demo scene.

mod demo;
mod loader;

pub use demo::demo_scene;
pub use loader::{load_obj, load_obj_reader, LoadError};
