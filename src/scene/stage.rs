use tracing::debug;

use crate::error::Result;
use crate::model::{Color, Polyhedron};
use crate::operations::creation::{MakeCuboctahedron, MakeTruncatedCuboctahedron};
use crate::operations::query::IsValid;

use super::{
    AxesHelper, CameraParams, Clock, DirectionalLight, DrawPolyhedron, DrawnPolyhedron,
    MarkerStyle, OrbitControls, PerspectiveCamera, Scene, SceneNode,
};

/// Parameters for [`Stage::set_up`].
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub camera: CameraParams,
    /// Background color of every frame.
    pub clear_color: Color,
    /// Length of the axes helper, or `None` to leave it out.
    pub axes_length: Option<f64>,
    pub lights: Vec<DirectionalLight>,
    pub auto_rotate: bool,
    /// Orbits per minute.
    pub auto_rotate_speed: f64,
    /// Uniform scale applied to model coordinates.
    pub scale: f64,
    pub marker: MarkerStyle,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraParams::default(),
            clear_color: Color::from_hex(0xDD_FFCC),
            axes_length: Some(24.0),
            lights: DirectionalLight::default_rig(),
            auto_rotate: true,
            auto_rotate_speed: 2.0,
            scale: 20.0,
            marker: MarkerStyle::default(),
        }
    }
}

/// Everything a frame needs: camera, scene contents, controls and clock.
#[derive(Debug)]
pub struct Stage {
    pub camera: PerspectiveCamera,
    pub scene: Scene,
    pub controls: OrbitControls,
    pub clock: Clock,
    pub clear_color: Color,
    /// Nodes of the drawn model, if any.
    pub drawn: Option<DrawnPolyhedron>,
}

impl Stage {
    /// Builds an empty stage: camera, lights and axes, but no model.
    #[must_use]
    pub fn set_up(config: &SceneConfig) -> Self {
        let mut scene = Scene::new();
        if let Some(length) = config.axes_length {
            scene.add(SceneNode::Axes(AxesHelper { length }));
        }
        for light in &config.lights {
            scene.add(SceneNode::Light(*light));
        }

        Self {
            camera: PerspectiveCamera::new(&config.camera),
            scene,
            controls: OrbitControls {
                auto_rotate: config.auto_rotate,
                auto_rotate_speed: config.auto_rotate_speed,
            },
            clock: Clock::new(),
            clear_color: config.clear_color,
            drawn: None,
        }
    }

    /// Builds a stage and draws `model` into it.
    ///
    /// # Errors
    ///
    /// Returns an error if the model fails validation or the configured
    /// scale is not a positive finite number.
    pub fn with_model(config: &SceneConfig, model: &Polyhedron) -> Result<Self> {
        IsValid::new().execute(model)?;

        let mut stage = Self::set_up(config);
        let drawn = DrawPolyhedron::new(config.scale)
            .with_marker_style(config.marker)
            .execute(model, &mut stage.scene)?;
        debug!(
            model = model.name(),
            nodes = stage.scene.len(),
            "stage ready"
        );
        stage.drawn = Some(drawn);
        Ok(stage)
    }

    /// The cuboctahedron on a default stage.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in tables are defective.
    pub fn cuboctahedron() -> Result<Self> {
        let model = MakeCuboctahedron::new().execute()?;
        Self::with_model(&SceneConfig::default(), &model)
    }

    /// The truncated cuboctahedron on a default stage.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in tables are defective.
    pub fn truncated_cuboctahedron() -> Result<Self> {
        let model = MakeTruncatedCuboctahedron::new().execute()?;
        Self::with_model(&SceneConfig::default(), &model)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ModelError, PolyviewError};
    use crate::math::Point3;
    use crate::model::PolyhedronBuilder;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn empty_stage_has_axes_and_lights() {
        let stage = Stage::set_up(&SceneConfig::default());
        assert_eq!(stage.scene.len(), 4);
        assert_eq!(stage.scene.lights().count(), 3);
        assert!(stage.drawn.is_none());
        assert!(stage.controls.auto_rotate);
        assert_eq!(stage.clear_color.hex(), 0xDD_FFCC);
        assert_relative_eq!(stage.camera.position, p(0.0, 0.0, 125.0));
    }

    #[test]
    fn axes_can_be_left_out() {
        let config = SceneConfig {
            axes_length: None,
            lights: Vec::new(),
            ..SceneConfig::default()
        };
        assert!(Stage::set_up(&config).scene.is_empty());
    }

    #[test]
    fn cuboctahedron_stage() {
        let stage = Stage::cuboctahedron().unwrap();
        let drawn = stage.drawn.as_ref().unwrap();
        assert_eq!(drawn.markers.len(), 12);
        // axes + 3 lights + mesh + markers
        assert_eq!(stage.scene.len(), 4 + 1 + 12);
        assert_eq!(stage.scene.meshes().count(), 1);
    }

    #[test]
    fn truncated_cuboctahedron_stage() {
        let stage = Stage::truncated_cuboctahedron().unwrap();
        assert_eq!(stage.drawn.as_ref().unwrap().markers.len(), 48);
        let mesh = stage.scene.meshes().next().unwrap();
        assert_eq!(mesh.triangle_count(), 104);
    }

    #[test]
    fn invalid_model_is_rejected() {
        let mut b = PolyhedronBuilder::new("loose");
        let red = Color::from_hex(0xFF_0000);
        let v0 = b.vertex(p(0.0, 0.0, 0.0));
        let v1 = b.vertex(p(1.0, 0.0, 0.0));
        let v2 = b.vertex(p(0.0, 1.0, 0.0));
        let v3 = b.vertex(p(0.0, 0.0, 1.0));
        b.vertex(p(0.2, 0.2, 0.2));
        b.triangle([v0, v2, v1], red)
            .triangle([v0, v1, v3], red)
            .triangle([v0, v3, v2], red)
            .triangle([v1, v2, v3], red);
        let model = b.build().unwrap();

        let err = Stage::with_model(&SceneConfig::default(), &model).unwrap_err();
        assert!(matches!(
            err,
            PolyviewError::Model(ModelError::OrphanVertex { vertex: 4 })
        ));
    }

    #[test]
    fn bad_scale_is_rejected() {
        let config = SceneConfig {
            scale: 0.0,
            ..SceneConfig::default()
        };
        let model = MakeCuboctahedron::new().execute().unwrap();
        assert!(matches!(
            Stage::with_model(&config, &model),
            Err(PolyviewError::Scene(_))
        ));
    }
}
