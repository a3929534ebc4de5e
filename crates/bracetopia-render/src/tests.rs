//! Unit tests for the snapshot formatters.

use std::time::Duration;

use bracetopia_core::{BoardConfig, Cell, Grid};
use bracetopia_sim::{CycleFrame, CycleStats};

use crate::{BatchRenderer, RenderResult, Renderer, snapshot_lines};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn board(rows: &[&str]) -> Grid {
    let dim = rows.len();
    let mut grid = Grid::new(dim);
    for (row, line) in rows.iter().enumerate() {
        for (col, glyph) in line.chars().enumerate() {
            grid.set(row, col, Cell::from_glyph(glyph).expect("unknown glyph"));
        }
    }
    grid
}

fn config(dim: usize, vacancy_pct: u8, endline_pct: u8, strength_pct: u8) -> BoardConfig {
    BoardConfig {
        dim,
        vacancy_pct,
        endline_pct,
        strength_pct,
    }
}

// ── Snapshot text ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod text_tests {
    use super::*;

    #[test]
    fn formats_the_full_snapshot() {
        let grid = board(&[
            "eenn.",
            "n.e.n",
            ".neen",
            "nn.ee",
            "e.n.e",
        ]);
        let cfg = config(5, 20, 60, 50);
        let frame = CycleFrame {
            grid: &grid,
            config: &cfg,
            stats: CycleStats {
                cycle: 3,
                moves: 7,
                mean_happiness: 0.8125,
            },
        };

        assert_eq!(
            snapshot_lines(&frame),
            vec![
                "eenn.",
                "n.e.n",
                ".neen",
                "nn.ee",
                "e.n.e",
                "cycle: 3",
                "moves this cycle: 7",
                "teams' \"happiness\": 0.812500",
                "dim: 5, %strength of preference:  50%, %vacancy:  20%, %end:  60%",
            ]
        );
    }

    #[test]
    fn happiness_always_shows_six_decimals() {
        let grid = board(&["e"]);
        let cfg = config(5, 20, 60, 50);
        let frame = CycleFrame {
            grid: &grid,
            config: &cfg,
            stats: CycleStats {
                cycle: 0,
                moves: 0,
                mean_happiness: 1.0,
            },
        };
        let lines = snapshot_lines(&frame);
        assert_eq!(lines[lines.len() - 2], "teams' \"happiness\": 1.000000");
    }

    #[test]
    fn percentages_are_right_aligned_in_three_columns() {
        let grid = board(&["e"]);
        let cfg = config(5, 1, 99, 5);
        let frame = CycleFrame {
            grid: &grid,
            config: &cfg,
            stats: CycleStats {
                cycle: 0,
                moves: 0,
                mean_happiness: 1.0,
            },
        };
        let lines = snapshot_lines(&frame);
        assert_eq!(
            lines[lines.len() - 1],
            "dim: 5, %strength of preference:   5%, %vacancy:   1%, %end:  99%"
        );
    }
}

// ── Batch renderer ────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch_tests {
    use super::*;

    #[test]
    fn appends_frames_without_a_separator() {
        let grid = board(&["en", ".."]);
        let cfg = config(5, 20, 60, 50);

        let mut renderer = BatchRenderer::new(Vec::new());
        for cycle in 0..2 {
            let frame = CycleFrame {
                grid: &grid,
                config: &cfg,
                stats: CycleStats {
                    cycle,
                    moves: 0,
                    mean_happiness: 0.0,
                },
            };
            renderer.render(&frame).unwrap();
        }

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let frame_tail = "..\n\
                          cycle: 0\n\
                          moves this cycle: 0\n\
                          teams' \"happiness\": 0.000000\n\
                          dim: 5, %strength of preference:  50%, %vacancy:  20%, %end:  60%\n\
                          en\n";
        assert!(out.starts_with("en\n"));
        assert!(out.contains(frame_tail), "frames must abut directly");
        assert!(out.ends_with("%end:  60%\n"));
    }
}

// ── Default pause ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod pause_tests {
    use super::*;

    struct NullRenderer;

    impl Renderer for NullRenderer {
        fn render(&mut self, _frame: &CycleFrame<'_>) -> RenderResult<()> {
            Ok(())
        }
    }

    #[test]
    fn default_pause_never_requests_quit() {
        let mut renderer = NullRenderer;
        assert!(!renderer.pause(Duration::ZERO).unwrap());
    }
}
