use nalgebra::{Isometry3, Perspective3};

use crate::error::SceneError;
use crate::math::{Matrix4, Point3, Vector3};

/// Construction parameters for a [`PerspectiveCamera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParams {
    /// Vertical field of view, in degrees.
    pub fov_y_degrees: f64,
    /// Viewport width over height.
    pub aspect: f64,
    /// Distance to the near clipping plane.
    pub near: f64,
    /// Distance to the far clipping plane.
    pub far: f64,
    /// Eye position.
    pub position: Point3,
    /// Point the camera looks at.
    pub target: Point3,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            position: Point3::new(0.0, 0.0, 125.0),
            target: Point3::origin(),
        }
    }
}

/// A right-handed perspective camera with a fixed `+y` up vector.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_y_degrees: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position: Point3,
    pub target: Point3,
}

impl PerspectiveCamera {
    /// Creates a camera from its parameters.
    #[must_use]
    pub fn new(params: &CameraParams) -> Self {
        Self {
            fov_y_degrees: params.fov_y_degrees,
            aspect: params.aspect,
            near: params.near,
            far: params.far,
            position: params.position,
            target: params.target,
        }
    }

    /// Up direction used for the view matrix.
    #[must_use]
    pub fn up() -> Vector3 {
        Vector3::y()
    }

    /// Updates the aspect ratio after the viewport changed size.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidViewport { width, height });
        }
        self.aspect = f64::from(width) / f64::from(height);
        Ok(())
    }

    /// World-to-camera transform.
    #[must_use]
    pub fn view_matrix(&self) -> Matrix4 {
        Isometry3::look_at_rh(&self.position, &self.target, &Self::up()).to_homogeneous()
    }

    /// Camera-to-clip transform.
    #[must_use]
    pub fn projection_matrix(&self) -> Matrix4 {
        Perspective3::new(
            self.aspect,
            self.fov_y_degrees.to_radians(),
            self.near,
            self.far,
        )
        .to_homogeneous()
    }

    /// Distance from the eye to the target.
    #[must_use]
    pub fn distance(&self) -> f64 {
        (self.position - self.target).norm()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_frame_the_origin() {
        let cam = PerspectiveCamera::new(&CameraParams::default());
        assert_relative_eq!(cam.distance(), 125.0);
        assert_relative_eq!(cam.fov_y_degrees, 45.0);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut cam = PerspectiveCamera::new(&CameraParams::default());
        cam.resize(800, 400).unwrap();
        assert_relative_eq!(cam.aspect, 2.0);
    }

    #[test]
    fn resize_rejects_empty_viewport() {
        let mut cam = PerspectiveCamera::new(&CameraParams::default());
        assert!(matches!(
            cam.resize(0, 600),
            Err(SceneError::InvalidViewport {
                width: 0,
                height: 600
            })
        ));
        assert_relative_eq!(cam.aspect, 16.0 / 9.0);
    }

    #[test]
    fn view_moves_target_onto_the_negative_z_axis() {
        let cam = PerspectiveCamera::new(&CameraParams::default());
        let target = cam.view_matrix().transform_point(&Point3::origin());
        assert_relative_eq!(target, Point3::new(0.0, 0.0, -125.0), epsilon = 1e-9);
    }

    #[test]
    fn projection_maps_near_plane_to_minus_one() {
        let cam = PerspectiveCamera::new(&CameraParams::default());
        let clip = cam
            .projection_matrix()
            .transform_point(&Point3::new(0.0, 0.0, -cam.near));
        assert_relative_eq!(clip.z, -1.0, epsilon = 1e-9);
    }
}
