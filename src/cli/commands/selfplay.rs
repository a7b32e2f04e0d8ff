//! Selfplay command - run engine-vs-engine games and tally outcomes

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::cli::output::{print_kv, print_section};
use crate::coordinator::Difficulty;
use crate::engine::{
    Board, Match, Move, Outcome, Player, best_move, best_move_alpha_beta, random_move,
};

#[derive(Parser, Debug)]
#[command(about = "Play engine-vs-engine games and tally the outcomes")]
pub struct SelfplayArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Strategy for X (the second mover)
    #[arg(long, short = 'd', value_enum, default_value_t = Difficulty::Expert)]
    pub difficulty: Difficulty,

    /// Strategy for O (the first mover)
    #[arg(long, short = 'o', value_enum, default_value_t = Difficulty::Easy)]
    pub opponent: Difficulty,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut x_wins = 0usize;
    let mut o_wins = 0usize;
    let mut draws = 0usize;

    for _ in 0..args.games {
        match play_one(args.difficulty, args.opponent, &mut rng)? {
            Outcome::Win {
                winner: Player::X, ..
            } => x_wins += 1,
            Outcome::Win {
                winner: Player::O, ..
            } => o_wins += 1,
            Outcome::Draw => draws += 1,
        }
    }

    print_section("Self-play results");
    print_kv("Games", &args.games.to_string());
    print_kv("X strategy", &args.difficulty.to_string());
    print_kv("O strategy", &args.opponent.to_string());
    print_kv("X wins", &x_wins.to_string());
    print_kv("O wins", &o_wins.to_string());
    print_kv("Draws", &draws.to_string());

    Ok(())
}

fn play_one(x_strategy: Difficulty, o_strategy: Difficulty, rng: &mut StdRng) -> Result<Outcome> {
    let mut game = Match::new();

    while !game.is_over() {
        let board = *game.board();
        let mover = board.to_move()?;
        let strategy = match mover {
            Player::X => x_strategy,
            Player::O => o_strategy,
        };
        let mv = select_for(mover, strategy, &board, rng)
            .context("no move available on a live board")?;
        game.play(mv)?;
    }

    Ok(game
        .outcome()
        .expect("the loop only exits on a terminal board"))
}

/// Pick a move for either side; the searchers answer for X, so O's position
/// is evaluated through a player swap.
fn select_for(
    player: Player,
    difficulty: Difficulty,
    board: &Board,
    rng: &mut StdRng,
) -> Option<Move> {
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Hard => match player {
            Player::X => best_move(board),
            Player::O => best_move(&board.swap_players()),
        },
        Difficulty::Expert => match player {
            Player::X => best_move_alpha_beta(board),
            Player::O => best_move_alpha_beta(&board.swap_players()),
        },
    }
}
