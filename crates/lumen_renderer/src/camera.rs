//! Pinhole camera for primary ray generation.

use lumen_math::{DVec3, Ray};

/// Convert a horizontal field of view into a pinhole focal distance.
///
/// A sensor of `sensor_width` placed that far behind the pinhole subtends
/// `fov_degrees` horizontally.
pub fn focal_distance_from_fov(sensor_width: f64, fov_degrees: f64) -> f64 {
    sensor_width / (2.0 * (fov_degrees.to_radians() / 2.0).tan())
}

/// A pinhole camera.
///
/// `forward` and `up` must be unit length and non-parallel before any ray is
/// cast; `focal_distance` must be positive.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Focal point all rays pass through
    pub center: DVec3,
    /// Viewing direction (unit length)
    pub forward: DVec3,
    /// Sensor vertical axis (unit length)
    pub up: DVec3,
    /// Sensor extents in world units
    pub width: f64,
    pub height: f64,
    /// Distance from the pinhole to the sensor plane
    pub focal_distance: f64,
}

impl Camera {
    /// Generate the ray through normalized image-plane coordinates.
    ///
    /// `u` and `v` range over [-0.5, 0.5], with (0, 0) at the image center.
    /// The ray starts at the camera center and passes through the sensor
    /// point `center + u*width*right + v*height*up + focal_distance*forward`.
    pub fn cast_ray(&self, u: f64, v: f64) -> Ray {
        let right = self.forward.cross(self.up);
        let target = self.center
            + u * self.width * right
            + v * self.height * self.up
            + self.focal_distance * self.forward;

        Ray::new(self.center, (target - self.center).normalize())
    }
}
