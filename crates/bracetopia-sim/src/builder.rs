//! Fluent construction of a [`Simulation`].

use bracetopia_core::{BoardConfig, BoardRng, Grid};

use crate::error::{SimError, SimResult};
use crate::policy::{AlternatingScan, RelocationPolicy};
use crate::populate::populate;
use crate::shuffle::shuffle;
use crate::sim::Simulation;

/// Builder for [`Simulation`].
///
/// The default path populates a fresh board from the configuration and
/// shuffles it, seeding from the wall clock unless [`seed`][Self::seed] is
/// given.  A pre-built board can be supplied with [`grid`][Self::grid], which
/// skips population and shuffling entirely — useful for replaying a known
/// layout.
pub struct SimulationBuilder<P: RelocationPolicy = AlternatingScan> {
    config: BoardConfig,
    seed: Option<u64>,
    grid: Option<Grid>,
    policy: P,
}

impl SimulationBuilder<AlternatingScan> {
    pub fn new(config: BoardConfig) -> Self {
        SimulationBuilder {
            config,
            seed: None,
            grid: None,
            policy: AlternatingScan,
        }
    }
}

impl<P: RelocationPolicy> SimulationBuilder<P> {
    /// Fix the shuffle seed for a reproducible board.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start from `grid` instead of populating and shuffling a fresh board.
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Swap in a different relocation policy.
    pub fn policy<Q: RelocationPolicy>(self, policy: Q) -> SimulationBuilder<Q> {
        SimulationBuilder {
            config: self.config,
            seed: self.seed,
            grid: self.grid,
            policy,
        }
    }

    /// Validate the configuration and assemble the simulation.
    pub fn build(self) -> SimResult<Simulation<P>> {
        self.config.validate()?;

        let grid = match self.grid {
            Some(grid) => {
                if grid.dim() != self.config.dim {
                    return Err(SimError::GridSizeMismatch {
                        expected: self.config.dim,
                        got: grid.dim(),
                    });
                }
                grid
            }
            None => {
                let mut grid = Grid::new(self.config.dim);
                populate(&mut grid, &self.config);
                let mut rng = match self.seed {
                    Some(seed) => BoardRng::new(seed),
                    None => BoardRng::from_clock(),
                };
                shuffle(&mut grid, &mut rng);
                grid
            }
        };

        Ok(Simulation::new(self.config, grid, self.policy))
    }
}
