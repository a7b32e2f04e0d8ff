//! Verify command - exhaustively check that both searchers agree

use anyhow::{Result, bail};
use clap::Parser;

use crate::cli::output::{create_sweep_progress, format_number};
use crate::engine::explore::x_to_move_positions;
use crate::engine::{best_move, best_move_alpha_beta};

#[derive(Parser, Debug)]
#[command(about = "Check minimax and alpha-beta agree on every reachable position")]
pub struct VerifyArgs {
    /// Hide the progress bar
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let positions = x_to_move_positions();
    let progress = (!args.quiet).then(|| create_sweep_progress(positions.len() as u64));

    let mut mismatches = Vec::new();
    for board in &positions {
        let plain = best_move(board);
        let pruned = best_move_alpha_beta(board);
        if plain != pruned {
            mismatches.push((board.encode(), plain, pruned));
        }
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    if !mismatches.is_empty() {
        for (encoding, plain, pruned) in &mismatches {
            eprintln!("mismatch on {encoding}: minimax {plain:?}, alpha-beta {pruned:?}");
        }
        bail!(
            "{} of {} positions disagree",
            mismatches.len(),
            positions.len()
        );
    }

    println!(
        "checked {} positions: the searchers agree everywhere",
        format_number(positions.len())
    );
    Ok(())
}
