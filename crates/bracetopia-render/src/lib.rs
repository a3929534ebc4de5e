//! `bracetopia-render` — snapshot formatting and renderers for the bracetopia
//! segregation simulator.
//!
//! Two backends implement [`Renderer`]:
//!
//! | Renderer          | Destination                  | Used by             |
//! |-------------------|------------------------------|---------------------|
//! | [`BatchRenderer`] | any `Write` sink (`stdout`)  | fixed-cycle runs    |
//! | [`ScreenRenderer`]| the terminal's alt screen    | interactive runs    |
//!
//! Both produce the same snapshot text, built by [`snapshot_lines`]: the
//! board's glyph rows followed by the cycle, move-count, happiness, and
//! configuration lines.  The screen backend repaints in place and watches for
//! Ctrl-C during the inter-frame pause; the batch backend just appends frames
//! to its sink.

pub mod batch;
pub mod error;
pub mod renderer;
pub mod screen;
pub mod text;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use batch::BatchRenderer;
pub use error::{RenderError, RenderResult};
pub use renderer::Renderer;
pub use screen::ScreenRenderer;
pub use text::snapshot_lines;
