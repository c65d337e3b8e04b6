use crate::math::{Point3, Vector3};
use crate::model::Color;

/// A light with parallel rays, shining from `position` toward `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f64,
    pub position: Point3,
    pub target: Point3,
    pub cast_shadow: bool,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Color::from_hex(0xFF_FFFF),
            intensity: 0.5,
            position: Point3::new(0.0, 1.0, 0.0),
            target: Point3::origin(),
            cast_shadow: true,
        }
    }
}

impl DirectionalLight {
    /// A default white light at `position`, aimed at the origin.
    #[must_use]
    pub fn at(position: Point3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Unit vector along which the light travels.
    ///
    /// Returns `None` if position and target coincide.
    #[must_use]
    pub fn direction(&self) -> Option<Vector3> {
        (self.target - self.position).try_normalize(f64::EPSILON)
    }

    /// The three-light rig used by every stage: two lights above the front
    /// and one off to the right.
    #[must_use]
    pub fn default_rig() -> Vec<Self> {
        vec![
            Self::at(Point3::new(20.0, 40.0, 80.0)),
            Self::at(Point3::new(20.0, 80.0, 40.0)),
            Self::at(Point3::new(80.0, 40.0, 60.0)),
        ]
    }
}
