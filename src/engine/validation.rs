//! Board state validation logic

use super::board::{Board, Player};
use super::lines::{self, WINNING_LINES};

impl Board {
    /// Check if the board could have arisen from legal alternating play.
    ///
    /// Accepts both X-first and O-first move orders. Malformed boards beyond
    /// what this rejects (and what parsing rejects) are a documented
    /// precondition violation for the engine, not something it corrects.
    pub fn is_valid(&self) -> bool {
        let count = self.count_pieces();

        // Piece counts must differ by at most 1 in either direction
        if count.x.abs_diff(count.o) > 1 {
            return false;
        }

        let x_wins = lines::has_won(&self.cells, Player::X);
        let o_wins = lines::has_won(&self.cells, Player::O);

        if x_wins && o_wins {
            return false; // Both can't win
        }

        // The winner must have moved last
        if x_wins && count.o > count.x {
            return false;
        }
        if o_wins && count.x > count.o {
            return false;
        }

        // Multiple winning lines are only possible when one move completed
        // them all, i.e. when they share a cell
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell
    fn winning_lines_share_cell(&self, player: Player) -> bool {
        let target = player.to_cell();
        let winning: Vec<&[usize; 3]> = WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| self.cells[idx] == target))
            .collect();

        if winning.len() < 2 {
            return true;
        }

        (0..9).any(|pos| winning.iter().all(|line| line.contains(&pos)))
    }
}
