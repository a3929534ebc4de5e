//! The simulation engine: one board, one policy, stepped cycle by cycle.

use bracetopia_core::{BoardConfig, Cell, Grid};

use crate::happiness::board_happiness;
use crate::policy::{AlternatingScan, RelocationPolicy};

// ── CycleStats ────────────────────────────────────────────────────────────────

/// Summary numbers for the current cycle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CycleStats {
    /// Cycles completed so far; 0 before the first [`Simulation::step`].
    pub cycle: u64,
    /// Relocations applied by the most recent step; 0 before the first.
    pub moves: usize,
    /// Mean agent happiness over the current board, in `[0, 1]`.
    pub mean_happiness: f64,
}

// ── CycleFrame ────────────────────────────────────────────────────────────────

/// Borrowed view of one displayable moment: the board, the configuration it
/// was built from, and the cycle's summary numbers.  Renderers consume these.
#[derive(Copy, Clone, Debug)]
pub struct CycleFrame<'a> {
    pub grid: &'a Grid,
    pub config: &'a BoardConfig,
    pub stats: CycleStats,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// A running simulation.
///
/// Owns the live board and a relocation policy; [`step`][Simulation::step]
/// advances the board one cycle at a time.  Construct through
/// [`SimulationBuilder`][crate::SimulationBuilder].
pub struct Simulation<P: RelocationPolicy = AlternatingScan> {
    config: BoardConfig,
    grid: Grid,
    policy: P,
    cycle: u64,
    moves: usize,
}

impl<P: RelocationPolicy> Simulation<P> {
    pub(crate) fn new(config: BoardConfig, grid: Grid, policy: P) -> Self {
        Simulation {
            config,
            grid,
            policy,
            cycle: 0,
            moves: 0,
        }
    }

    /// Run one cycle: snapshot the board, let the policy plan against the
    /// snapshot, then apply the moves in plan order.  Returns the number of
    /// agents that relocated.
    pub fn step(&mut self) -> usize {
        let snapshot = self.grid.clone();
        let moves = self
            .policy
            .plan_cycle(&snapshot, self.config.strength_pct);

        for relocation in &moves {
            let kind = snapshot.get(relocation.from.0, relocation.from.1);
            self.grid.set(relocation.to.0, relocation.to.1, kind);
            self.grid.set(relocation.from.0, relocation.from.1, Cell::Vacant);
        }

        self.cycle += 1;
        self.moves = moves.len();
        self.moves
    }

    /// Summary numbers for the board as it stands.
    pub fn stats(&self) -> CycleStats {
        CycleStats {
            cycle: self.cycle,
            moves: self.moves,
            mean_happiness: board_happiness(&self.grid),
        }
    }

    /// Borrowed view of the current board and stats, ready to render.
    pub fn frame(&self) -> CycleFrame<'_> {
        CycleFrame {
            grid: &self.grid,
            config: &self.config,
            stats: self.stats(),
        }
    }

    /// The live board.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The configuration the simulation was built from.
    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Cycles completed so far.
    #[inline]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}
