use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, trace, warn};

use crate::error::{RenderError, Result};
use crate::math::{Matrix4, Point3};
use crate::model::Color;
use crate::scene::{Scene, Stage};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Zero-based frame counter.
    pub index: u64,
    pub clear_color: Color,
    pub camera_position: Point3,
    pub view: Matrix4,
    pub projection: Matrix4,
    pub scene: &'a Scene,
}

/// Consumer of frames, typically a display that blocks until its next refresh.
pub trait FrameSink {
    /// Draws or records one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame could not be presented; the loop stops.
    fn submit(&mut self, frame: &Frame<'_>) -> std::result::Result<(), RenderError>;
}

impl<F> FrameSink for F
where
    F: FnMut(&Frame<'_>) -> std::result::Result<(), RenderError>,
{
    fn submit(&mut self, frame: &Frame<'_>) -> std::result::Result<(), RenderError> {
        self(frame)
    }
}

/// Shared flag that ends [`RenderLoop::run`] before its next tick.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag. Every clone observes it.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Drives a [`Stage`]: advance the orbit, then hand a frame to the sink.
#[derive(Debug)]
pub struct RenderLoop {
    stage: Stage,
    frames: u64,
}

impl RenderLoop {
    #[must_use]
    pub fn new(stage: Stage) -> Self {
        Self { stage, frames: 0 }
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Mutable access for resizing the camera or editing the scene between ticks.
    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    /// Frames submitted so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances the controls by `delta` seconds and submits one frame.
    ///
    /// # Errors
    ///
    /// Returns the sink's error. The frame is not counted.
    pub fn tick<S: FrameSink + ?Sized>(&mut self, delta: f64, sink: &mut S) -> Result<()> {
        let Stage {
            camera,
            scene,
            controls,
            clear_color,
            ..
        } = &mut self.stage;
        let angle = controls.update(delta, camera);

        let frame = Frame {
            index: self.frames,
            clear_color: *clear_color,
            camera_position: camera.position,
            view: camera.view_matrix(),
            projection: camera.projection_matrix(),
            scene: &*scene,
        };
        trace!(frame = frame.index, delta, angle, "submitting frame");
        if let Err(err) = sink.submit(&frame) {
            warn!(frame = frame.index, %err, "frame sink failed");
            return Err(err.into());
        }

        self.frames += 1;
        Ok(())
    }

    /// Ticks with wall-clock deltas until `stop` is raised.
    ///
    /// The sink sets the pace; this loop never sleeps.
    ///
    /// # Errors
    ///
    /// Returns the first sink error.
    pub fn run<S: FrameSink + ?Sized>(&mut self, sink: &mut S, stop: &StopSignal) -> Result<u64> {
        let start = self.frames;
        info!(nodes = self.stage.scene.len(), "render loop started");
        while !stop.is_stopped() {
            let delta = self.stage.clock.get_delta();
            self.tick(delta, sink)?;
        }
        let submitted = self.frames - start;
        info!(
            frames = submitted,
            elapsed = self.stage.clock.elapsed(),
            "render loop stopped"
        );
        Ok(submitted)
    }
}
