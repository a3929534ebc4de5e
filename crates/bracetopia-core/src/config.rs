//! Run configuration and the derived population counts.
//!
//! The three percentages describe the board indirectly: `vacancy_pct` carves
//! vacancies out of the whole board, then `endline_pct` splits what is left
//! between the two populations.  Derived counts use truncating integer
//! division, and the exact floors are observable in the initial layout.

use crate::{ConfigError, CoreResult};

/// Inclusive board side-length bounds.
pub const DIM_MIN: usize = 5;
pub const DIM_MAX: usize = 39;

/// Inclusive bounds shared by the three percentage fields.
pub const PCT_MIN: u8 = 1;
pub const PCT_MAX: u8 = 99;

/// Immutable inputs for one simulation run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    /// Board side length, in `[5, 39]`.
    pub dim: usize,
    /// Percentage of cells that start vacant, in `[1, 99]`.
    pub vacancy_pct: u8,
    /// Percentage of non-vacant cells that are endline agents, in `[1, 99]`.
    pub endline_pct: u8,
    /// Minimum happiness (percent) for an agent to stay put, in `[1, 99]`.
    pub strength_pct: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            dim: 15,
            vacancy_pct: 20,
            endline_pct: 60,
            strength_pct: 50,
        }
    }
}

impl BoardConfig {
    /// Check every field against its documented range.
    pub fn validate(&self) -> CoreResult<()> {
        if !(DIM_MIN..=DIM_MAX).contains(&self.dim) {
            return Err(ConfigError::Dimension(self.dim as i64));
        }
        if !(PCT_MIN..=PCT_MAX).contains(&self.strength_pct) {
            return Err(ConfigError::Strength(i64::from(self.strength_pct)));
        }
        if !(PCT_MIN..=PCT_MAX).contains(&self.vacancy_pct) {
            return Err(ConfigError::Vacancy(i64::from(self.vacancy_pct)));
        }
        if !(PCT_MIN..=PCT_MAX).contains(&self.endline_pct) {
            return Err(ConfigError::Endline(i64::from(self.endline_pct)));
        }
        Ok(())
    }

    /// Total cell count (`dim²`).
    #[inline]
    pub fn total(&self) -> usize {
        self.dim * self.dim
    }

    /// Number of initially vacant cells.
    #[inline]
    pub fn vacant_cells(&self) -> usize {
        self.total() * self.vacancy_pct as usize / 100
    }

    /// Number of endline agents, carved out of the non-vacant cells.
    #[inline]
    pub fn endline_cells(&self) -> usize {
        (self.total() - self.vacant_cells()) * self.endline_pct as usize / 100
    }

    /// Number of newline agents: whatever the other two kinds leave over.
    #[inline]
    pub fn newline_cells(&self) -> usize {
        self.total() - self.vacant_cells() - self.endline_cells()
    }
}
