//! Match bookkeeping on top of the rules engine

use serde::{Deserialize, Serialize};

use super::board::{Board, Move, Outcome, Player};

/// A move together with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMove {
    pub mv: Move,
    pub player: Player,
}

/// A single game with in-memory history.
///
/// Turns strictly alternate with O moving first (the side to move is inferred
/// from piece counts, see [`Board::to_move`]). A win or draw is terminal: no
/// further moves are accepted until [`reset`](Self::reset).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    board: Board,
    moves: Vec<RecordedMove>,
    outcome: Option<Outcome>,
}

impl Match {
    /// Create a new match on an empty board
    pub fn new() -> Self {
        Match {
            board: Board::new(),
            moves: Vec::new(),
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[RecordedMove] {
        &self.moves
    }

    /// Terminal result, if the game is over
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play a move for the side whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns error if the game is already over or the cell is occupied
    /// or out of bounds.
    pub fn play(&mut self, mv: Move) -> Result<Player, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.board.to_move()?;
        self.board = self.board.make_move(mv, player)?;
        self.moves.push(RecordedMove { mv, player });
        self.outcome = self.board.outcome();
        Ok(player)
    }

    /// Play a move for a specific player, rejecting out-of-turn moves.
    ///
    /// # Errors
    ///
    /// As [`play`](Self::play), plus an error when it is not `player`'s turn.
    pub fn play_as(&mut self, mv: Move, player: Player) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let expected = self.board.to_move()?;
        if player != expected {
            return Err(crate::Error::WrongTurn {
                expected,
                got: player,
            });
        }

        self.play(mv).map(|_| ())
    }

    /// Clear the board and history for a fresh game
    pub fn reset(&mut self) {
        *self = Match::new();
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
