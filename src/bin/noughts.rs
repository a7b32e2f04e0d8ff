//! noughts CLI - analysis tools for the Tic-Tac-Toe engine
//!
//! This CLI provides a unified interface for:
//! - Analyzing positions and the engine's reply
//! - Running engine-vs-engine games at selectable difficulties
//! - Verifying that the two searchers choose identical moves

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-Tac-Toe engine tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a board position and the engine's reply
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),

    /// Play engine-vs-engine games and tally outcomes
    Selfplay(noughts::cli::commands::selfplay::SelfplayArgs),

    /// Exhaustively check that both searchers agree
    Verify(noughts::cli::commands::verify::VerifyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args),
        Commands::Selfplay(args) => noughts::cli::commands::selfplay::execute(args),
        Commands::Verify(args) => noughts::cli::commands::verify::execute(args),
    }
}
