//! Tic-Tac-Toe engine with a selectable-difficulty computer opponent
//!
//! This crate provides:
//! - Complete 3x3 board rules: legal-move enumeration, win and draw detection
//! - Three computer strategies: random, exhaustive minimax, alpha-beta minimax
//! - A turn coordinator that infers the side to move from piece counts
//! - A CLI for position analysis, self-play evaluation, and search verification

pub mod cli;
pub mod coordinator;
pub mod engine;
pub mod error;

pub use coordinator::{CoordinatorConfig, Difficulty, TurnCoordinator};
pub use engine::{
    Board, Cell, Match, Move, Outcome, Player, RecordedMove, best_move, best_move_alpha_beta,
    random_move,
};
pub use error::{Error, Result};
