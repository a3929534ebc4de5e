//! The `Renderer` trait implemented by both display backends.

use std::thread;
use std::time::Duration;

use bracetopia_sim::CycleFrame;

use crate::RenderResult;

/// Trait implemented by the batch and screen renderers.
///
/// The driver loop calls [`render`][Self::render] once per cycle and, in
/// interactive mode, [`pause`][Self::pause] between frames.  A pause that
/// returns `true` is a quit request and ends the run.
pub trait Renderer {
    /// Draw one frame.
    fn render(&mut self, frame: &CycleFrame<'_>) -> RenderResult<()>;

    /// Wait out the inter-frame delay.
    ///
    /// The default just sleeps; backends with an input source override this
    /// to watch for a quit request while waiting.
    fn pause(&mut self, delay: Duration) -> RenderResult<bool> {
        thread::sleep(delay);
        Ok(false)
    }
}
