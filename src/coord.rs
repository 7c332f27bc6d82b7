use core::fmt;

/// A (row, column) position on a board. Equality and hashing are structural,
/// so hash sets give cheap membership tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position shifted by a signed offset, or `None` if it would leave the
    /// non-negative quadrant. Upper bounds are the board's concern.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Coord> {
        Some(Coord::new(
            self.row.checked_add_signed(dr)?,
            self.col.checked_add_signed(dc)?,
        ))
    }
}

impl fmt::Display for Coord {
    /// User-facing form: 1-based `row col`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}
