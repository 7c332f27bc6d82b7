use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{BoardError, ShotOutcome};
use crate::coord::Coord;
use crate::player::Player;
use crate::ui;

/// Automated player that fires at uniformly random coordinates. It keeps no
/// memory of previous shots; resampled cells are simply rejected by the board
/// and retried.
pub struct RandomPlayer {
    verbose: bool,
}

impl RandomPlayer {
    /// Player that announces its moves on stdout.
    pub fn new() -> Self {
        Self { verbose: true }
    }

    /// Player that produces no console output, for headless simulation.
    pub fn silent() -> Self {
        Self { verbose: false }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn produce_target(&mut self, rng: &mut SmallRng, size: usize) -> Coord {
        let target = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
        if self.verbose {
            println!("Computer's move: {}", target);
        }
        target
    }

    fn announce_result(&mut self, _target: Coord, outcome: ShotOutcome) {
        if self.verbose {
            ui::announce_outcome(outcome);
        }
    }

    fn report_rejected(&mut self, _target: Coord, err: BoardError) {
        if self.verbose {
            println!("{}", err);
        }
    }
}
