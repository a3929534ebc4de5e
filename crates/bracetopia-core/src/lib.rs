//! `bracetopia-core` — board and configuration primitives for the bracetopia
//! segregation simulator.
//!
//! This crate is a dependency of every other `bracetopia-*` crate.  It
//! intentionally has no `bracetopia-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`cell`]   | `Cell` — vacant / endline / newline, glyph mapping   |
//! | [`grid`]   | `Grid` (square board), `CellCounts`                  |
//! | [`config`] | `BoardConfig` and its derived population counts      |
//! | [`rng`]    | `BoardRng` (seeded `SmallRng` wrapper)               |
//! | [`error`]  | `ConfigError`, `CoreResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use config::{BoardConfig, DIM_MAX, DIM_MIN, PCT_MAX, PCT_MIN};
pub use error::{ConfigError, CoreResult};
pub use grid::{CellCounts, Grid};
pub use rng::BoardRng;
