//! Tower of Hanoi
//!
//! A visual Tower of Hanoi puzzle: three towers, 1 to 8 rings, manual
//! placement with legality checks, and an automatic solver that animates
//! the canonical solution one move at a time in an interactive 3D viewer.

mod visualization;

use clap::{Parser, Subcommand};

use hanoi::solver;
use hanoi::Session;

/// Plays and solves the Tower of Hanoi puzzle.
#[derive(Parser)]
#[command(name = "hanoi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of rings on the starting tower.
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=8))]
    rings: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive 3D viewer.
    Play,
    /// Print the automatic solution as a move transcript.
    Solve,
    /// Show the number of moves the solution needs.
    Count,
}

fn main() {
    let cli = Cli::parse();
    let rings = cli.rings as usize;

    match cli.command {
        Some(Command::Play) | None => run_play(rings),
        Some(Command::Solve) => run_solve(rings),
        Some(Command::Count) => run_count(rings),
    }
}

/// Opens the viewer on a fresh game.
fn run_play(rings: usize) {
    visualization::display(Session::new(rings));
}

/// Plays the automatic solution without animation, printing each move and
/// the final board.
fn run_solve(rings: usize) {
    let mut session = Session::new(rings);
    if !session.start_solve() {
        eprintln!("Cannot solve from this layout");
        return;
    }

    while let Some(step) = session.advance_solve() {
        println!("{:3}. tower {} -> tower {}", session.moves(), step.from + 1, step.to + 1);
    }

    println!();
    print!("{}", session.render());
    println!("{}", session.status());
    println!("{} rings solved in {} moves", rings, session.moves());
}

/// Prints the number of moves the solution needs.
fn run_count(rings: usize) {
    println!("{} moves", solver::required_moves(rings));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_transcript_snapshot() {
        let mut session = Session::new(3);
        assert!(session.start_solve());

        let mut output = String::new();
        while let Some(step) = session.advance_solve() {
            output.push_str(&format!("{} -> {}\n", step.from + 1, step.to + 1));
        }
        output.push_str(&format!("solved in {} moves\n", session.moves()));

        insta::assert_snapshot!(output, @r"
        1 -> 3
        1 -> 2
        3 -> 2
        1 -> 3
        2 -> 1
        2 -> 3
        1 -> 3
        solved in 7 moves
        ");
    }

    #[test]
    fn test_full_playback_move_count() {
        let mut session = Session::new(8);
        assert!(session.start_solve());

        let mut applied = 0;
        while session.advance_solve().is_some() {
            applied += 1;
        }

        assert_eq!(applied, 255);
        assert_eq!(session.moves(), 255);
        assert!(session.is_won());
    }
}
