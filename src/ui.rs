//! Console rendering of boards and game messages.

use crate::board::{Board, Cell, Visibility};
use crate::common::ShotOutcome;
use crate::coord::Coord;

fn cell_mark(board: &Board, c: Coord) -> char {
    match board.cell(c) {
        Cell::Empty => '0',
        Cell::Ship => {
            if board.visibility() == Visibility::Concealed {
                '0'
            } else {
                '■'
            }
        }
        Cell::Miss | Cell::Buffer => '.',
        Cell::Hit => 'X',
    }
}

/// Render a board as a 1-based grid with a column header, e.g.
///
/// ```text
///   | 1 | 2 | 3 |
/// 1 | 0 | 0 | 0 |
/// 2 | 0 | ■ | 0 |
/// 3 | 0 | 0 | 0 |
/// ```
///
/// Concealed boards render ship cells as open water.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::from("  |");
    for c in 0..size {
        out.push_str(&format!(" {} |", c + 1));
    }
    for r in 0..size {
        out.push_str(&format!("\n{} |", r + 1));
        for c in 0..size {
            out.push_str(&format!(" {} |", cell_mark(board, Coord::new(r, c))));
        }
    }
    out
}

/// Print both boards with separators, the player's first.
pub fn print_boards(player: &Board, computer: &Board) {
    println!("{}", "-".repeat(20));
    println!("Your board:");
    println!("{}", render_board(player));
    println!("{}", "-".repeat(20));
    println!("Computer's board:");
    println!("{}", render_board(computer));
    println!("{}", "-".repeat(20));
}

pub fn announce_outcome(outcome: ShotOutcome) {
    match outcome {
        ShotOutcome::Hit => println!("Ship wounded!"),
        ShotOutcome::Sunk => println!("Ship destroyed!"),
        ShotOutcome::Miss => println!("Miss!"),
    }
}

pub fn greeting() {
    println!("---------------------");
    println!("     Sea  Battle     ");
    println!("---------------------");
    println!(" input format: x y");
    println!(" x - row number");
    println!(" y - column number");
}
