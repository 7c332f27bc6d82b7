//! Common vocabulary: shot outcomes and board errors.

use core::fmt;

/// Result of resolving a legal shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot hit a ship segment without sinking the ship.
    Hit,
    /// Shot took the ship's last segment.
    Sunk,
    /// Shot landed in open water.
    Miss,
}

impl ShotOutcome {
    /// Whether the shooter keeps the turn. A plain hit always grants another
    /// shot; a sink only does when `continue_on_hit` is set; a miss passes.
    pub fn continues_turn(self, continue_on_hit: bool) -> bool {
        match self {
            ShotOutcome::Hit => true,
            ShotOutcome::Sunk => continue_on_hit,
            ShotOutcome::Miss => false,
        }
    }
}

/// Errors returned by board operations. All of these are recoverable:
/// placement errors are retried by the fleet generator, shot errors by the
/// player's turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship placement extends outside the board.
    ShipOutOfBounds,
    /// Ship placement overlaps or touches an existing ship.
    ShipBlocked,
    /// Shot target lies outside the board.
    ShotOutOfBounds,
    /// Shot target was already resolved (shot at or buffer-sealed).
    AlreadyTargeted,
    /// Fleet generation ran out of placement attempts for this board.
    FleetExhausted,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipBlocked => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            BoardError::ShotOutOfBounds => write!(f, "Shot is outside the board!"),
            BoardError::AlreadyTargeted => write!(f, "That cell was already targeted!"),
            BoardError::FleetExhausted => {
                write!(f, "Unable to place the fleet within the attempt limit")
            }
        }
    }
}

impl std::error::Error for BoardError {}
