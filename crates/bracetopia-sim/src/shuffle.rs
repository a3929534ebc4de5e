//! Board randomisation.

use bracetopia_core::{BoardRng, Grid};

/// Permute the board in place with a Fisher-Yates pass over its linear
/// (row-major) index space.
///
/// The pivot runs over `[0, total - 2)`, stopping two short of the last cell,
/// and each pivot swaps with a partner drawn uniformly from `[i, total)`.
/// Seeded layouts depend on this exact variant.
pub fn shuffle(grid: &mut Grid, rng: &mut BoardRng) {
    let total = grid.total();
    for i in 0..total.saturating_sub(2) {
        let j = rng.gen_range(i..total);
        grid.swap_linear(i, j);
    }
}
