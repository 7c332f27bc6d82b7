//! Straight-line ships and their cell geometry.

use crate::coord::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship occupying `length` cells in a straight run from `origin`.
/// Horizontal ships step along rows, vertical ships along columns. The cell
/// list is derived once at construction and never changes; only the hit
/// counter is mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    origin: Coord,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
    cells: Vec<Coord>,
}

impl Ship {
    /// Build a ship from its head cell, length and orientation. Geometry is
    /// not validated here; the board rejects placements that do not fit.
    pub fn new(origin: Coord, length: usize, orientation: Orientation) -> Self {
        debug_assert!(length >= 1);
        let cells = (0..length)
            .map(|i| match orientation {
                Orientation::Horizontal => Coord::new(origin.row + i, origin.col),
                Orientation::Vertical => Coord::new(origin.row, origin.col + i),
            })
            .collect();
        Ship {
            origin,
            length,
            orientation,
            remaining_hits: length,
            cells,
        }
    }

    /// Cells occupied by the ship, in order from the head.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Whether the ship occupies `target`.
    pub fn contains(&self, target: Coord) -> bool {
        self.cells.contains(&target)
    }

    /// Record one hit against the ship.
    pub fn register_hit(&mut self) {
        self.remaining_hits = self.remaining_hits.saturating_sub(1);
    }

    /// Segments still afloat.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
