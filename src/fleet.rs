//! Randomized fleet placement with a bounded retry budget.

use rand::Rng;

use crate::board::{Board, Visibility};
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FLEET_LENGTHS, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::ship::{Orientation, Ship};

/// Attempt to place the full fleet onto a fresh board. Each ship is retried
/// at random positions until it fits; the attempt budget is shared across the
/// whole fleet, and exceeding it abandons the board with
/// [`BoardError::FleetExhausted`]. On success the resolved-cell set is
/// cleared so placement contours do not count as fired shots.
pub fn try_generate<R: Rng>(rng: &mut R, visibility: Visibility) -> Result<Board, BoardError> {
    let mut board = Board::new(BOARD_SIZE, visibility);
    let mut attempts = 0u32;
    for &len in FLEET_LENGTHS.iter() {
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                return Err(BoardError::FleetExhausted);
            }
            let origin = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            let orientation = if rng.random() {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            if board.place_ship(Ship::new(origin, len, orientation)).is_ok() {
                break;
            }
        }
    }
    board.reset_targeting();
    Ok(board)
}

/// Generate a board, discarding and restarting whenever the attempt budget
/// runs out. Placement of this fleet on the default board succeeds often
/// enough that the outer loop is unbounded.
pub fn generate<R: Rng>(rng: &mut R, visibility: Visibility) -> Board {
    loop {
        match try_generate(rng, visibility) {
            Ok(board) => return board,
            Err(e) => log::debug!("fleet generation restarted: {}", e),
        }
    }
}
