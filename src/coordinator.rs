//! Turn coordination between the UI shell and the rules engine
//!
//! The coordinator owns the pieces the excluded presentation layer needs:
//! the difficulty setting, the seeded random source for the baseline
//! strategy, and count-based turn inference. It replies synchronously; any
//! perceptibility delay before the computer's move is the shell's concern.

use std::fmt;

use clap::ValueEnum;
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::engine::board::{Board, Move, Player};
use crate::engine::search::{best_move, best_move_alpha_beta, random_move};

/// Which move-selection strategy the computer opponent uses.
///
/// Selecting a difficulty has no effect on engine behavior beyond choosing
/// the strategy function.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random replies
    Easy = 0,
    /// Exhaustive minimax
    Hard = 1,
    /// Alpha-beta-pruned minimax
    Expert = 2,
}

impl Difficulty {
    /// Map the menu's numeric selection (0/1/2) to a difficulty
    pub fn from_index(index: usize) -> Option<Difficulty> {
        match index {
            0 => Some(Difficulty::Easy),
            1 => Some(Difficulty::Hard),
            2 => Some(Difficulty::Expert),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        })
    }
}

/// Configuration for creating a [`TurnCoordinator`].
///
/// # Examples
///
/// ```
/// use noughts::{CoordinatorConfig, Difficulty};
///
/// let config = CoordinatorConfig::new(Difficulty::Expert).with_seed(42);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CoordinatorConfig {
    /// Strategy the computer uses
    pub difficulty: Difficulty,
    /// Random seed for reproducibility of the random strategy
    pub seed: Option<u64>,
}

impl CoordinatorConfig {
    /// Create a configuration with the given difficulty and no seed
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            seed: None,
        }
    }

    /// Set the random seed for deterministic behavior
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self::new(Difficulty::Easy)
    }
}

/// Decides whose turn it is and invokes the engine for the computer's reply.
///
/// The computer always plays X; the human plays O and moves first.
#[derive(Debug)]
pub struct TurnCoordinator {
    difficulty: Difficulty,
    rng: StdRng,
}

impl TurnCoordinator {
    pub fn new(config: CoordinatorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            difficulty: config.difficulty,
            rng,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The computer's reply when it is X's turn on a live board.
    ///
    /// Returns `Ok(None)` when the game is over or it is the human's turn.
    ///
    /// # Errors
    ///
    /// Returns error if the piece counts do not correspond to an alternating
    /// O-first game.
    pub fn reply(&mut self, board: &Board) -> Result<Option<Move>, crate::Error> {
        if board.is_terminal() {
            return Ok(None);
        }
        if board.to_move()? != Player::X {
            return Ok(None);
        }
        Ok(self.select(board))
    }

    /// Select a move for X with the configured strategy, ignoring whose turn
    /// it is. `None` when no moves remain.
    pub fn select(&mut self, board: &Board) -> Option<Move> {
        match self.difficulty {
            Difficulty::Easy => random_move(board, &mut self.rng),
            Difficulty::Hard => best_move(board),
            Difficulty::Expert => best_move_alpha_beta(board),
        }
    }
}
