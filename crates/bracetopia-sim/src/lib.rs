//! `bracetopia-sim` — board setup and the relocation cycle for the bracetopia
//! segregation simulator.
//!
//! # Cycle anatomy
//!
//! ```text
//! step():
//!   ① Snapshot — freeze the live board; every decision this cycle reads it.
//!   ② Plan     — the RelocationPolicy walks agents row-major, scores each
//!                against the snapshot, and claims one vacancy per unhappy
//!                agent (AlternatingScan: from the end, then the start, …).
//!   ③ Apply    — planned moves land on the live board in plan order.
//! ```
//!
//! The snapshot discipline means an agent that relocates mid-cycle is never
//! scored or disturbed again within the same cycle, and two movers can never
//! claim the same destination.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bracetopia_core::BoardConfig;
//! use bracetopia_sim::SimulationBuilder;
//!
//! let mut sim = SimulationBuilder::new(BoardConfig::default()).seed(42).build()?;
//! let moved = sim.step();
//! println!("{moved} agents moved, mean happiness {:.6}", sim.stats().mean_happiness);
//! ```

pub mod builder;
pub mod error;
pub mod happiness;
pub mod policy;
pub mod populate;
pub mod shuffle;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimulationBuilder;
pub use error::{SimError, SimResult};
pub use happiness::{board_happiness, cell_happiness};
pub use policy::{AlternatingScan, Relocation, RelocationPolicy};
pub use populate::populate;
pub use shuffle::shuffle;
pub use sim::{CycleFrame, CycleStats, Simulation};
