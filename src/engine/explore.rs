//! Reachable-state enumeration for exhaustive checks

use std::collections::HashSet;

use super::board::{Board, Player};

/// Every board reachable from an empty board under O-first alternating play.
///
/// Terminal boards are included; their children are not explored.
pub fn reachable_boards() -> Vec<Board> {
    let mut boards = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = vec![Board::new()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board.encode()) {
            continue;
        }
        boards.push(board);

        if board.is_terminal() {
            continue;
        }

        let player = board
            .to_move()
            .expect("reachable boards have consistent piece counts");
        for mv in board.available_moves() {
            let next = board
                .make_move(mv, player)
                .expect("moves from available_moves are legal");
            stack.push(next);
        }
    }

    boards
}

/// Reachable non-terminal positions where it is X's turn: exactly the
/// boards the shell hands to the search strategies.
pub fn x_to_move_positions() -> Vec<Board> {
    reachable_boards()
        .into_iter()
        .filter(|board| !board.is_terminal() && matches!(board.to_move(), Ok(Player::X)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::board::Cell;

    #[test]
    fn test_empty_board_is_reachable() {
        let boards = reachable_boards();
        assert!(boards.contains(&Board::new()));
    }

    #[test]
    fn test_all_reachable_boards_are_valid() {
        for board in reachable_boards() {
            assert!(board.is_valid(), "unreachable board enumerated: {board}");
        }
    }

    #[test]
    fn test_x_to_move_positions_have_o_one_ahead() {
        let positions = x_to_move_positions();
        assert!(!positions.is_empty());
        for board in positions {
            assert_eq!(board.count(Cell::O), board.count(Cell::X) + 1);
            assert!(!board.is_terminal());
        }
    }
}
