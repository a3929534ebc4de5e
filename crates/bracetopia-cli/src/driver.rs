//! The batch and interactive run loops.

use std::time::Duration;

use bracetopia_render::{RenderResult, Renderer};
use bracetopia_sim::{RelocationPolicy, Simulation};
use tracing::debug;

/// Render snapshots for cycles `0..=cycles`, stepping once after each frame,
/// the final one included.
pub fn run_batch<P, R>(sim: &mut Simulation<P>, cycles: u64, renderer: &mut R) -> RenderResult<()>
where
    P: RelocationPolicy,
    R: Renderer,
{
    for _ in 0..=cycles {
        renderer.render(&sim.frame())?;
        let moved = sim.step();
        debug!(cycle = sim.cycle(), moved, "cycle complete");
    }
    Ok(())
}

/// Render, pause for `delay`, step, repeat; ends when the renderer's pause
/// reports a quit request.
pub fn run_interactive<P, R>(
    sim: &mut Simulation<P>,
    delay: Duration,
    renderer: &mut R,
) -> RenderResult<()>
where
    P: RelocationPolicy,
    R: Renderer,
{
    loop {
        renderer.render(&sim.frame())?;
        if renderer.pause(delay)? {
            debug!(cycle = sim.cycle(), "quit requested");
            return Ok(());
        }
        let moved = sim.step();
        debug!(cycle = sim.cycle(), moved, "cycle complete");
    }
}
