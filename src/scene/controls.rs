use std::f64::consts::TAU;

use nalgebra::Rotation3;

use crate::math::Vector3;

use super::PerspectiveCamera;

/// Passive orbit around the camera target.
///
/// When `auto_rotate` is set, each update turns the camera about the
/// target's vertical axis at `auto_rotate_speed` orbits per minute,
/// keeping its distance and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitControls {
    pub auto_rotate: bool,
    /// Orbits per minute; `2.0` completes one orbit every 30 seconds.
    pub auto_rotate_speed: f64,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            auto_rotate: false,
            auto_rotate_speed: 2.0,
        }
    }
}

impl OrbitControls {
    /// Creates controls with the given auto-rotation state and default speed.
    #[must_use]
    pub fn new(auto_rotate: bool) -> Self {
        Self {
            auto_rotate,
            ..Self::default()
        }
    }

    /// Rotation applied for `delta` seconds, in radians.
    #[must_use]
    pub fn angle_for(&self, delta: f64) -> f64 {
        if !self.auto_rotate || !delta.is_finite() || delta <= 0.0 {
            return 0.0;
        }
        TAU / 60.0 * self.auto_rotate_speed * delta
    }

    /// Advances the orbit by `delta` seconds and returns the angle applied.
    pub fn update(&self, delta: f64, camera: &mut PerspectiveCamera) -> f64 {
        let angle = self.angle_for(delta);
        if angle.abs() > 0.0 {
            // Clockwise seen from above, as the azimuth decreases.
            let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), -angle);
            let offset = camera.position - camera.target;
            camera.position = camera.target + rotation * offset;
        }
        angle
    }
}
