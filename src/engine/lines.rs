//! Winning line scan for Tic-Tac-Toe

use super::board::{Cell, Player};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Find the first complete line in scan order, with its owner.
///
/// Boards produced by alternating play have at most one winner, but a
/// hand-built board can complete several lines; only the first is reported.
pub fn first_winning_line(cells: &[Cell; 9]) -> Option<(Player, [usize; 3])> {
    for &line in &WINNING_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            let winner = first.to_player().expect("non-empty cell maps to a player");
            return Some((winner, line));
        }
    }
    None
}

/// Check if a player has won by having three in a row
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(has_won(&cells, Player::X));
        assert!(!has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(has_won(&cells, Player::O));
        assert!(!has_won(&cells, Player::X));
    }

    #[test]
    fn test_has_won_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::X;
        cells[8] = Cell::X;

        assert!(has_won(&cells, Player::X));
    }

    #[test]
    fn test_first_winning_line_prefers_rows() {
        // Top row and left column both complete; the row comes first in scan order
        let mut cells = [Cell::Empty; 9];
        for idx in [0, 1, 2, 3, 6] {
            cells[idx] = Cell::X;
        }

        let (winner, line) = first_winning_line(&cells).unwrap();
        assert_eq!(winner, Player::X);
        assert_eq!(line, [0, 1, 2]);
    }

    #[test]
    fn test_no_winning_line() {
        let cells = [Cell::Empty; 9];
        assert!(first_winning_line(&cells).is_none());
    }
}
