//! Cell kinds and their display glyphs.

use std::fmt;

/// The contents of one board cell.
///
/// Two agent populations share the board with a pool of vacancies.  The
/// variant names follow the on-screen glyphs: endline agents print as `e`,
/// newline agents as `n`, vacant cells as `.`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// An unoccupied cell that an unhappy agent may claim.
    #[default]
    Vacant,
    /// An agent of the endline population.
    Endline,
    /// An agent of the newline population.
    Newline,
}

impl Cell {
    /// The character used for this cell in board printouts.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Cell::Vacant => '.',
            Cell::Endline => 'e',
            Cell::Newline => 'n',
        }
    }

    /// Inverse of [`glyph`](Self::glyph); `None` for any other character.
    pub fn from_glyph(ch: char) -> Option<Cell> {
        match ch {
            '.' => Some(Cell::Vacant),
            'e' => Some(Cell::Endline),
            'n' => Some(Cell::Newline),
            _ => None,
        }
    }

    /// `true` for either agent population.
    #[inline]
    pub fn is_agent(self) -> bool {
        !matches!(self, Cell::Vacant)
    }

    /// `true` for a vacant cell.
    #[inline]
    pub fn is_vacant(self) -> bool {
        matches!(self, Cell::Vacant)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
