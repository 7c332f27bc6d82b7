//! Turn coordinator: alternates the two sides, honoring the repeat-on-hit
//! rule, until one side's fleet is destroyed.

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::player::{take_turn, Player};

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// State of the coordinator. `Decided` is terminal; no further shots are
/// accepted once a side has lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Awaiting(Side),
    Decided { loser: Side },
}

/// A player together with its own board and turn-continuation policy.
/// `continue_on_hit` gates whether a sink extends the streak; it is meant to
/// be set before play starts.
pub struct Seat {
    pub player: Box<dyn Player>,
    pub board: Board,
    pub continue_on_hit: bool,
}

impl Seat {
    pub fn new(player: Box<dyn Player>, board: Board) -> Self {
        Seat {
            player,
            board,
            continue_on_hit: false,
        }
    }
}

/// A full game session. Side A moves first.
pub struct Game {
    seats: [Seat; 2],
    state: GameState,
}

impl Game {
    pub fn new(a: Seat, b: Seat) -> Self {
        Game {
            seats: [a, b],
            state: GameState::Awaiting(Side::A),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_decided(&self) -> bool {
        matches!(self.state, GameState::Decided { .. })
    }

    pub fn loser(&self) -> Option<Side> {
        match self.state {
            GameState::Decided { loser } => Some(loser),
            GameState::Awaiting(_) => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        self.loser().map(Side::opponent)
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.seats[side.index()].board
    }

    /// Run one turn for the side to move. The mover keeps the turn while its
    /// shots warrant a repeat; after every turn both boards are checked for
    /// defeat before control can change hands. A no-op once decided.
    pub fn step(&mut self, rng: &mut SmallRng) -> GameState {
        let GameState::Awaiting(side) = self.state else {
            return self.state;
        };

        let [a, b] = &mut self.seats;
        let repeat = match side {
            Side::A => take_turn(a.player.as_mut(), rng, &mut b.board, a.continue_on_hit),
            Side::B => take_turn(b.player.as_mut(), rng, &mut a.board, b.continue_on_hit),
        };

        self.state = if self.seats[Side::A.index()].board.is_defeated() {
            GameState::Decided { loser: Side::A }
        } else if self.seats[Side::B.index()].board.is_defeated() {
            GameState::Decided { loser: Side::B }
        } else if repeat {
            GameState::Awaiting(side)
        } else {
            GameState::Awaiting(side.opponent())
        };
        self.state
    }
}
