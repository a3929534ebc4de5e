//! Relocation policies — how unhappy agents claim a vacancy.

use bracetopia_core::{Cell, Grid};

use crate::happiness::cell_happiness;

/// One planned move: the agent at `from` relocates to the vacancy at `to`.
/// Coordinates are `(row, col)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Relocation {
    pub from: (usize, usize),
    pub to: (usize, usize),
}

/// Pluggable relocation discipline.
///
/// Implementations receive the frozen pre-cycle board and produce an ordered
/// move list; [`Simulation::step`][crate::Simulation::step] applies the list
/// to the live board.  All happiness decisions must read `snapshot`, never
/// the evolving state, so earlier moves in a cycle cannot change later
/// agents' scores.
pub trait RelocationPolicy {
    /// Plan every move for one cycle.
    fn plan_cycle(&mut self, snapshot: &Grid, threshold: u8) -> Vec<Relocation>;
}

// ── AlternatingScan ───────────────────────────────────────────────────────────

/// The standard policy: visit agents in row-major order and park each unhappy
/// one in the first qualifying vacancy, scanning alternately from the board's
/// end and from its start.
///
/// A destination qualifies only while it is vacant in **both** the snapshot
/// and the working board: snapshot-vacant excludes cells agents freed earlier
/// this cycle, and working-vacant excludes cells already claimed by an
/// earlier mover.  The scan direction starts from the board's end and flips
/// only after a successful move.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlternatingScan;

impl RelocationPolicy for AlternatingScan {
    fn plan_cycle(&mut self, snapshot: &Grid, threshold: u8) -> Vec<Relocation> {
        let dim = snapshot.dim();
        let mut working = snapshot.clone();
        let mut moves = Vec::new();
        let mut from_end = true;

        for row in 0..dim {
            for col in 0..dim {
                let kind = snapshot.get(row, col);
                if !kind.is_agent() || working.get(row, col) != kind {
                    continue;
                }
                if cell_happiness(snapshot, row, col) >= f64::from(threshold) {
                    continue;
                }
                if let Some(to) = find_vacancy(snapshot, &working, from_end) {
                    working.set(to.0, to.1, kind);
                    working.set(row, col, Cell::Vacant);
                    moves.push(Relocation { from: (row, col), to });
                    from_end = !from_end;
                }
            }
        }

        moves
    }
}

/// First cell vacant in both boards, scanning the linear index space from the
/// end when `from_end` is set and from the start otherwise.
fn find_vacancy(snapshot: &Grid, working: &Grid, from_end: bool) -> Option<(usize, usize)> {
    let total = snapshot.total();
    let open = |i: &usize| snapshot.get_linear(*i).is_vacant() && working.get_linear(*i).is_vacant();

    let found = if from_end {
        (0..total).rev().find(open)
    } else {
        (0..total).find(open)
    };

    found.map(|i| (i / snapshot.dim(), i % snapshot.dim()))
}
