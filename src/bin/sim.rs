use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use sea_battle::{fleet, Game, RandomPlayer, Seat, Side, Visibility};

#[derive(Serialize)]
struct SimReport {
    winner: &'static str,
    turns: usize,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut board_rng = SmallRng::seed_from_u64(seed1);
    let mut rng = SmallRng::seed_from_u64(seed2);

    let board_a = fleet::generate(&mut board_rng, Visibility::Concealed);
    let board_b = fleet::generate(&mut board_rng, Visibility::Concealed);

    let mut game = Game::new(
        Seat::new(Box::new(RandomPlayer::silent()), board_a),
        Seat::new(Box::new(RandomPlayer::silent()), board_b),
    );

    let mut turns = 0usize;
    while !game.is_decided() {
        game.step(&mut rng);
        turns += 1;
    }

    let winner = if game.winner() == Some(Side::A) {
        "player1"
    } else {
        "player2"
    };
    println!("{}", serde_json::to_string(&SimReport { winner, turns })?);
    Ok(())
}
