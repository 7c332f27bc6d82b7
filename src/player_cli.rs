use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::common::{BoardError, ShotOutcome};
use crate::coord::Coord;
use crate::player::Player;
use crate::ui;

/// Interactive player reading targets from stdin. Input is two 1-based
/// numbers, row then column; malformed lines are re-prompted. Targets beyond
/// the board parse fine here and are rejected by the board instead.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn produce_target(&mut self, _rng: &mut SmallRng, _size: usize) -> Coord {
        loop {
            print!("Your move. Enter 2 coordinates (row col): ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            let bytes = io::stdin().read_line(&mut line).unwrap();
            if bytes == 0 {
                panic!("input stream closed");
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 2 {
                println!("Enter 2 coordinates.");
                continue;
            }
            let (Ok(row), Ok(col)) = (tokens[0].parse::<usize>(), tokens[1].parse::<usize>())
            else {
                println!("Enter numbers!");
                continue;
            };
            if row == 0 || col == 0 {
                println!("Coordinates start at 1.");
                continue;
            }
            return Coord::new(row - 1, col - 1);
        }
    }

    fn announce_result(&mut self, _target: Coord, outcome: ShotOutcome) {
        ui::announce_outcome(outcome);
    }

    fn report_rejected(&mut self, _target: Coord, err: BoardError) {
        println!("{}", err);
    }
}
