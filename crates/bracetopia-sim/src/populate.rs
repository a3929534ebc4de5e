//! Initial board population.

use bracetopia_core::{BoardConfig, Cell, Grid};

/// Fill `grid` with the configured census in row-major order: first the
/// vacant cells, then the endline agents, then the newline agents.
///
/// The layout is deterministic; all randomness belongs to the shuffle pass.
pub fn populate(grid: &mut Grid, config: &BoardConfig) {
    debug_assert_eq!(grid.dim(), config.dim);

    let vacant = config.vacant_cells();
    let endline = config.endline_cells();

    for i in 0..grid.total() {
        let cell = if i < vacant {
            Cell::Vacant
        } else if i < vacant + endline {
            Cell::Endline
        } else {
            Cell::Newline
        };
        grid.set_linear(i, cell);
    }
}
