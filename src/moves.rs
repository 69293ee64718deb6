//! Candidate moves exchanged between the board and a search.

use core::fmt;

/// A move: dropping a chip into a column.
#[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Move {
    pub column: usize,
}

impl Move {
    #[must_use]
    pub const fn new(column: usize) -> Self {
        Self { column }
    }
}

impl From<usize> for Move {
    fn from(column: usize) -> Self {
        Self::new(column)
    }
}

impl From<Move> for usize {
    fn from(mv: Move) -> Self {
        mv.column
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {}", self.column)
    }
}
