//! Polyview spin demo: runs both solids through a headless render loop.
//!
//! Usage:
//! ```text
//! cargo run --example spin                  # 120 frames per solid
//! cargo run --example spin -- 600           # 600 frames per solid
//! RUST_LOG=polyview=trace cargo run --example spin
//! ```

use std::time::Duration;

use polyview::error::RenderError;
use polyview::render::{Frame, RenderLoop, StopSignal};
use polyview::scene::Stage;
use polyview::PolyviewError;

/// Stand-in for a 60 Hz display refresh.
const FRAME_TIME: Duration = Duration::from_micros(16_667);

fn spin(stage: Stage, solid: &str, frames: u64) -> Result<(), PolyviewError> {
    let stop = StopSignal::new();
    let remote = stop.clone();
    let mut sink = |frame: &Frame<'_>| {
        std::thread::sleep(FRAME_TIME);
        if frame.index % 30 == 0 {
            let p = frame.camera_position;
            tracing::info!(
                solid,
                frame = frame.index,
                camera = %format!("({:.1}, {:.1}, {:.1})", p.x, p.y, p.z),
                meshes = frame.scene.meshes().count(),
                markers = frame.scene.markers().count(),
                "frame"
            );
        }
        if frame.index + 1 >= frames {
            remote.stop();
        }
        Ok::<_, RenderError>(())
    };

    let mut render = RenderLoop::new(stage);
    let submitted = render.run(&mut sink, &stop)?;
    tracing::info!(solid, submitted, "done");
    Ok(())
}

fn main() -> Result<(), PolyviewError> {
    // Default: WARN for everything, INFO for polyview and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polyview=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("spin=info".parse().unwrap_or_default())
        .add_directive("polyview=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let frames = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(120);

    spin(Stage::cuboctahedron()?, "cuboctahedron", frames)?;
    spin(
        Stage::truncated_cuboctahedron()?,
        "truncated cuboctahedron",
        frames,
    )?;
    Ok(())
}
