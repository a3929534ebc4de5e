//! In-place terminal renderer for interactive runs.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use bracetopia_sim::CycleFrame;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::RenderResult;
use crate::renderer::Renderer;
use crate::text::snapshot_lines;

/// Repaints each frame at the top-left of the alternate screen.
///
/// Construction switches the terminal into raw mode and onto the alternate
/// screen; dropping the renderer restores both, so the primary screen comes
/// back intact however the run ends.  Raw mode also turns Ctrl-C into an
/// ordinary key event, which [`pause`][Renderer::pause] watches for while it
/// waits out the inter-frame delay.
pub struct ScreenRenderer {
    out: Stdout,
}

impl ScreenRenderer {
    pub fn new() -> RenderResult<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide, cursor::MoveTo(0, 0))?;
        Ok(ScreenRenderer { out })
    }
}

impl Drop for ScreenRenderer {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Renderer for ScreenRenderer {
    fn render(&mut self, frame: &CycleFrame<'_>) -> RenderResult<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;
        for line in snapshot_lines(frame) {
            // Clear to end of line so a shrinking number never leaves stale
            // digits behind.
            queue!(
                self.out,
                Print(line),
                Clear(ClearType::UntilNewLine),
                cursor::MoveToNextLine(1)
            )?;
        }
        queue!(
            self.out,
            Print("Use Control-C to quit."),
            Clear(ClearType::UntilNewLine)
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn pause(&mut self, delay: Duration) -> RenderResult<bool> {
        let deadline = Instant::now() + delay;
        loop {
            let now = Instant::now();
            if now >= deadline {
                return Ok(false);
            }
            if event::poll(deadline - now)? {
                if let Event::Key(key) = event::read()? {
                    if is_quit(&key) {
                        return Ok(true);
                    }
                }
            }
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && matches!(
            (key.code, key.modifiers),
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
        )
}
