//! Per-agent and board-level happiness scores.

use bracetopia_core::Grid;

/// Moore neighbourhood offsets, row by row.
const MOORE: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Happiness of the agent at `(row, col)` as a percentage in `[0, 100]`.
///
/// Counts the non-vacant cells among the in-bounds Moore neighbours; the
/// score is the share of them matching the agent's own kind.  An agent with
/// no non-vacant neighbours is completely happy (100).
///
/// The cell must hold an agent; happiness of a vacancy is meaningless.
pub fn cell_happiness(grid: &Grid, row: usize, col: usize) -> f64 {
    let kind = grid.get(row, col);
    debug_assert!(kind.is_agent(), "happiness queried for a vacant cell");

    let dim = grid.dim() as isize;
    let mut same = 0u32;
    let mut neighbours = 0u32;

    for (dr, dc) in MOORE {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if r < 0 || r >= dim || c < 0 || c >= dim {
            continue;
        }
        let other = grid.get(r as usize, c as usize);
        if other.is_agent() {
            neighbours += 1;
            if other == kind {
                same += 1;
            }
        }
    }

    if neighbours == 0 {
        100.0
    } else {
        f64::from(same) / f64::from(neighbours) * 100.0
    }
}

/// Mean agent happiness across the whole board, scaled to `[0, 1]`.
///
/// Returns NaN for a board with no agents; validated configurations always
/// leave at least one agent, so callers never see that in practice.
pub fn board_happiness(grid: &Grid) -> f64 {
    let mut total = 0.0;
    let mut agents = 0u32;

    for row in 0..grid.dim() {
        for col in 0..grid.dim() {
            if grid.get(row, col).is_agent() {
                total += cell_happiness(grid, row, col);
                agents += 1;
            }
        }
    }

    total / f64::from(agents) / 100.0
}
