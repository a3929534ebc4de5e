//! The square board of cells.
//!
//! Cells are stored row-major in a flat `Vec`, so `(row, col)` maps to the
//! linear index `row * dim + col`.  The shuffler works directly on linear
//! indices; everything else addresses cells by coordinate pair.

use crate::Cell;

// ── CellCounts ────────────────────────────────────────────────────────────────

/// Per-kind cell census, as returned by [`Grid::counts`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCounts {
    pub vacant: usize,
    pub endline: usize,
    pub newline: usize,
}

impl CellCounts {
    /// Number of agents across both populations.
    #[inline]
    pub fn agents(self) -> usize {
        self.endline + self.newline
    }

    /// Total cells counted.
    #[inline]
    pub fn total(self) -> usize {
        self.vacant + self.endline + self.newline
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// A `dim × dim` board of cells.
///
/// Indexing panics when an index is out of range; the simulation only ever
/// generates in-range coordinates, so no fallible accessors are exposed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dim: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A board of `dim × dim` vacant cells.
    pub fn new(dim: usize) -> Self {
        Grid {
            dim,
            cells: vec![Cell::Vacant; dim * dim],
        }
    }

    /// Side length.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Total cell count (`dim²`).
    #[inline]
    pub fn total(&self) -> usize {
        self.cells.len()
    }

    /// Cell at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.dim + col]
    }

    /// Overwrite the cell at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.dim + col] = cell;
    }

    /// Cell at linear (row-major) index `i`.
    #[inline]
    pub fn get_linear(&self, i: usize) -> Cell {
        self.cells[i]
    }

    /// Overwrite the cell at linear index `i`.
    #[inline]
    pub fn set_linear(&mut self, i: usize, cell: Cell) {
        self.cells[i] = cell;
    }

    /// Swap the cells at linear indices `i` and `j`.
    #[inline]
    pub fn swap_linear(&mut self, i: usize, j: usize) {
        self.cells.swap(i, j);
    }

    /// Iterate over rows as cell slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.dim)
    }

    /// Count every kind of cell in one pass.
    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &cell in &self.cells {
            match cell {
                Cell::Vacant => counts.vacant += 1,
                Cell::Endline => counts.endline += 1,
                Cell::Newline => counts.newline += 1,
            }
        }
        counts
    }
}
