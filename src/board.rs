//! Game board state: cell matrix, placed ships, resolved cells and the
//! placement/shot rules.

use std::collections::HashSet;

use crate::common::{BoardError, ShotOutcome};
use crate::coord::Coord;
use crate::ship::Ship;

/// Mark held by one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Miss,
    Hit,
    /// Water sealed around a sunk ship.
    Buffer,
}

/// Whether ship positions may be shown when the board is rendered. This is
/// purely presentational; the rules are identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Revealed,
    Concealed,
}

/// One side's playing field.
///
/// `excluded` holds every cell that is no longer a legal target: during
/// placement it doubles as the adjacency bookkeeping (ship cells plus their
/// one-cell contour), and during play it records shots and kill buffers.
/// [`Board::reset_targeting`] separates the two phases.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    visibility: Visibility,
    cells: Vec<Vec<Cell>>,
    ships: Vec<Ship>,
    excluded: HashSet<Coord>,
    destroyed: usize,
}

impl Board {
    pub fn new(size: usize, visibility: Visibility) -> Self {
        Board {
            size,
            visibility,
            cells: vec![vec![Cell::Empty; size]; size],
            ships: Vec::new(),
            excluded: HashSet::new(),
            destroyed: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Mark at an in-bounds coordinate.
    pub fn cell(&self, c: Coord) -> Cell {
        self.cells[c.row][c.col]
    }

    /// Read-only view of the full cell matrix, row-major.
    pub fn grid(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    pub fn is_excluded(&self, c: Coord) -> bool {
        self.excluded.contains(&c)
    }

    /// True when either index falls outside `[0, size)`.
    pub fn is_outside(&self, c: Coord) -> bool {
        c.row >= self.size || c.col >= self.size
    }

    /// Seal the one-cell contour around `cells` (the 8 neighbours plus the
    /// cells themselves). Already-excluded coordinates keep their mark, so a
    /// painted kill buffer never overwrites hits or prior shots.
    fn seal_buffer(&mut self, cells: &[Coord], mark: bool) {
        for &cell in cells {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    let Some(cur) = cell.offset(dr, dc) else {
                        continue;
                    };
                    if self.is_outside(cur) || self.excluded.contains(&cur) {
                        continue;
                    }
                    self.excluded.insert(cur);
                    if mark {
                        self.cells[cur.row][cur.col] = Cell::Buffer;
                    }
                }
            }
        }
    }

    /// Place a ship, validating every cell before committing anything, so a
    /// failed placement leaves the board untouched. A successful placement
    /// seals the ship's contour without painting it.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        for &c in ship.cells() {
            if self.is_outside(c) {
                return Err(BoardError::ShipOutOfBounds);
            }
            if self.excluded.contains(&c) {
                return Err(BoardError::ShipBlocked);
            }
        }
        for &c in ship.cells() {
            self.cells[c.row][c.col] = Cell::Ship;
            self.excluded.insert(c);
        }
        let cells = ship.cells().to_vec();
        self.ships.push(ship);
        self.seal_buffer(&cells, false);
        Ok(())
    }

    /// Resolve a shot at `target`. Rejects targets outside the board or
    /// already resolved; otherwise classifies the shot, records it and, on a
    /// sink, seals and paints the surrounding water.
    pub fn resolve_shot(&mut self, target: Coord) -> Result<ShotOutcome, BoardError> {
        if self.is_outside(target) {
            return Err(BoardError::ShotOutOfBounds);
        }
        if self.excluded.contains(&target) {
            return Err(BoardError::AlreadyTargeted);
        }
        self.excluded.insert(target);

        if let Some(idx) = self.ships.iter().position(|s| s.contains(target)) {
            self.ships[idx].register_hit();
            self.cells[target.row][target.col] = Cell::Hit;
            if self.ships[idx].is_sunk() {
                self.destroyed += 1;
                let cells = self.ships[idx].cells().to_vec();
                self.seal_buffer(&cells, true);
                return Ok(ShotOutcome::Sunk);
            }
            return Ok(ShotOutcome::Hit);
        }

        self.cells[target.row][target.col] = Cell::Miss;
        Ok(ShotOutcome::Miss)
    }

    /// True once every ship on the board has been destroyed.
    pub fn is_defeated(&self) -> bool {
        !self.ships.is_empty() && self.destroyed == self.ships.len()
    }

    /// Clear the resolved-cell set. Called once after fleet placement so the
    /// placement contours do not register as shots already fired.
    pub fn reset_targeting(&mut self) {
        self.excluded.clear();
    }
}
