//! Analyze command - inspect a position and the engine's reply for X

use anyhow::{Result, bail};
use clap::Parser;

use crate::cli::output::{print_kv, print_section};
use crate::engine::{Board, Outcome, best_move_alpha_beta, best_move_with_score};

#[derive(Parser, Debug)]
#[command(about = "Analyze a board position")]
pub struct AnalyzeArgs {
    /// Board as 9 cells in row-major order ('.', 'X', 'O'), e.g. "XX.OO...."
    pub board: String,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    if !board.is_valid() {
        bail!("board '{}' is not reachable by legal play", args.board);
    }

    print_section("Position");
    println!("{board}");

    if let Some(outcome) = board.outcome() {
        match outcome {
            Outcome::Win { winner, line } => {
                let cells: Vec<String> = line.iter().map(|mv| mv.to_string()).collect();
                print_kv("Outcome", &format!("{winner} wins on {}", cells.join(" ")));
            }
            Outcome::Draw => print_kv("Outcome", "draw"),
        }
        return Ok(());
    }

    match board.to_move() {
        Ok(player) => print_kv("To move", &player.to_string()),
        // X ahead happens in X-first games; the engine still answers for X
        Err(_) => print_kv("To move", "not an O-first game"),
    }

    let (mv, score) = best_move_with_score(&board)
        .expect("a live board always has at least one move");
    let assessment = match score {
        1 => "X wins with perfect play",
        -1 => "O wins with perfect play",
        _ => "draw with perfect play",
    };
    print_kv("Best move for X", &mv.to_string());
    print_kv("Value", assessment);

    let pruned = best_move_alpha_beta(&board);
    print_kv(
        "Alpha-beta agrees",
        if pruned == Some(mv) { "yes" } else { "NO" },
    );

    Ok(())
}
