//! Directional scene lighting.

use lumen_math::DVec3;

use crate::Color;

/// A single directional light.
#[derive(Debug, Clone)]
pub struct Light {
    /// Unit vector pointing from the light toward the scene
    pub direction: DVec3,
    pub color: Color,
    pub intensity: f64,
}

impl Light {
    /// Create a light shining along `direction` (normalized here).
    pub fn new(direction: DVec3, color: Color, intensity: f64) -> Self {
        Self {
            direction: direction.normalize(),
            color,
            intensity,
        }
    }
}
