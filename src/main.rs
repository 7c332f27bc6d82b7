use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::thread;
use std::time::Duration;

use sea_battle::{
    fleet, init_logging, ui, CliPlayer, Game, GameState, RandomPlayer, Seat, Side, Visibility,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the console.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0, help = "Pause between turns in milliseconds")]
        delay_ms: u64,
        #[arg(long, help = "Keep the turn after destroying a ship")]
        continue_on_sink: bool,
    },
    /// Watch the computer play against itself.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0, help = "Pause between turns in milliseconds")]
        delay_ms: u64,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            delay_ms,
            continue_on_sink,
        } => {
            let mut rng = make_rng(seed);
            ui::greeting();
            let your_board = fleet::generate(&mut rng, Visibility::Revealed);
            let computer_board = fleet::generate(&mut rng, Visibility::Concealed);

            let mut you = Seat::new(Box::new(CliPlayer::new()), your_board);
            let mut computer = Seat::new(Box::new(RandomPlayer::new()), computer_board);
            you.continue_on_hit = continue_on_sink;
            computer.continue_on_hit = continue_on_sink;

            run(Game::new(you, computer), rng, delay_ms, ["You", "Computer"])
        }
        Commands::Auto { seed, delay_ms } => {
            let mut rng = make_rng(seed);
            let board_a = fleet::generate(&mut rng, Visibility::Revealed);
            let board_b = fleet::generate(&mut rng, Visibility::Revealed);

            let a = Seat::new(Box::new(RandomPlayer::new()), board_a);
            let b = Seat::new(Box::new(RandomPlayer::new()), board_b);

            run(
                Game::new(a, b),
                rng,
                delay_ms,
                ["Computer 1", "Computer 2"],
            )
        }
    }
}

/// Presentation loop: print state, announce the mover, advance one step and
/// optionally pause, until the game is decided.
fn run(mut game: Game, mut rng: SmallRng, delay_ms: u64, names: [&str; 2]) -> anyhow::Result<()> {
    loop {
        ui::print_boards(game.board(Side::A), game.board(Side::B));
        let GameState::Awaiting(side) = game.state() else {
            break;
        };
        println!("{} to move!", names[side.index()]);
        game.step(&mut rng);
        if delay_ms > 0 {
            thread::sleep(Duration::from_millis(delay_ms));
        }
        if game.is_decided() {
            break;
        }
    }

    ui::print_boards(game.board(Side::A), game.board(Side::B));
    println!("{}", "-".repeat(20));
    if let Some(winner) = game.winner() {
        println!("{} won!", names[winner.index()]);
    }
    Ok(())
}
