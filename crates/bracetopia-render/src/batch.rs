//! Frame-appending renderer for fixed-cycle runs.

use std::io::{self, Write};

use bracetopia_sim::CycleFrame;

use crate::RenderResult;
use crate::renderer::Renderer;
use crate::text::snapshot_lines;

/// Writes every frame to a `Write` sink, one after another with no
/// separator.  Each frame is flushed as soon as it is complete, so partial
/// output survives an interrupted run.
pub struct BatchRenderer<W: Write> {
    out: W,
}

impl BatchRenderer<io::Stdout> {
    /// A renderer over standard output.
    pub fn stdout() -> Self {
        BatchRenderer::new(io::stdout())
    }
}

impl<W: Write> BatchRenderer<W> {
    pub fn new(out: W) -> Self {
        BatchRenderer { out }
    }

    /// Give back the sink; tests use this to inspect what was written.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for BatchRenderer<W> {
    fn render(&mut self, frame: &CycleFrame<'_>) -> RenderResult<()> {
        for line in snapshot_lines(frame) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
