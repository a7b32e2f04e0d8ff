//! Move-selection strategies: random baseline, minimax, alpha-beta minimax
//!
//! Both searchers score terminal states from X's fixed perspective (+1 X wins,
//! -1 O wins, 0 draw) and place X at the root: they compute the best move
//! *for X* regardless of which symbol the computer controls on screen. Use
//! [`Board::swap_players`] to evaluate a position for O. They also assume the
//! board is not already won; the turn coordinator never calls them on a
//! terminal board.

use rand::{Rng, prelude::IndexedRandom};

use super::board::{Board, Move, Player};

const X_WINS: i32 = 1;
const O_WINS: i32 = -1;
const DRAW: i32 = 0;

/// Select uniformly at random among the available moves.
///
/// Returns `None` when no moves remain. The random source is an explicit
/// parameter so callers can seed it for reproducible games.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    board.available_moves().choose(rng).copied()
}

/// Best move for X by exhaustive minimax.
///
/// Every available move is tried in row-major order and scored by perfect
/// alternating play down to a terminal state; the first move with the
/// strictly greatest score wins ties. Returns `None` when no moves remain.
pub fn best_move(board: &Board) -> Option<Move> {
    best_move_with_score(board).map(|(mv, _)| mv)
}

/// Like [`best_move`], but also returns the chosen move's minimax value
pub fn best_move_with_score(board: &Board) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;

    for mv in board.available_moves() {
        let next = board
            .make_move(mv, Player::X)
            .expect("moves from available_moves are legal");
        let score = minimax(&next, false);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    best
}

/// Best move for X by alpha-beta-pruned minimax.
///
/// Chooses the same move as [`best_move`] on every position, tie-break
/// included: each root child is searched with the full window, so its
/// returned score is the exact minimax value and the pruning inside the
/// subtree cannot change the decision.
pub fn best_move_alpha_beta(board: &Board) -> Option<Move> {
    let mut best: Option<(Move, i32)> = None;

    for mv in board.available_moves() {
        let next = board
            .make_move(mv, Player::X)
            .expect("moves from available_moves are legal");
        let score = alpha_beta(&next, i32::MIN, i32::MAX, false);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    best.map(|(mv, _)| mv)
}

fn score_terminal(board: &Board) -> Option<i32> {
    board.outcome().map(|outcome| match outcome.winner() {
        Some(Player::X) => X_WINS,
        Some(Player::O) => O_WINS,
        None => DRAW,
    })
}

/// Exact value of a position under perfect alternating play.
///
/// Recursion depth is bounded by the 9 cells, so no depth limit is needed.
fn minimax(board: &Board, maximizing: bool) -> i32 {
    if let Some(score) = score_terminal(board) {
        return score;
    }

    let mover = if maximizing { Player::X } else { Player::O };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in board.available_moves() {
        let next = board
            .make_move(mv, mover)
            .expect("moves from available_moves are legal");
        let score = minimax(&next, !maximizing);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Minimax with alpha-beta bounds.
///
/// `alpha` is the best score the maximizer can already guarantee, `beta` the
/// minimizer's counterpart; both are passed by value down each branch and a
/// branch is abandoned as soon as `beta <= alpha`. With a window that
/// brackets the true value this returns exactly the minimax value.
fn alpha_beta(board: &Board, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
    if let Some(score) = score_terminal(board) {
        return score;
    }

    if maximizing {
        let mut value = i32::MIN;
        for mv in board.available_moves() {
            let next = board
                .make_move(mv, Player::X)
                .expect("moves from available_moves are legal");
            let score = alpha_beta(&next, alpha, beta, false);
            value = value.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        value
    } else {
        let mut value = i32::MAX;
        for mv in board.available_moves() {
            let next = board
                .make_move(mv, Player::O)
                .expect("moves from available_moves are legal");
            let score = alpha_beta(&next, alpha, beta, true);
            value = value.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_random_move_none_on_full_board() {
        let board = Board::from_string("XXOOOXXXO").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_random_move_is_available() {
        let board = Board::from_string("XO.......").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mv = random_move(&board, &mut rng).unwrap();
        assert!(board.is_empty(mv));
    }

    #[test]
    fn test_random_move_deterministic_with_seed() {
        let board = Board::new();
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        assert_eq!(random_move(&board, &mut rng1), random_move(&board, &mut rng2));
    }

    #[test]
    fn test_best_move_takes_immediate_win() {
        // X X .
        // O O .
        // . . .
        let board = Board::from_string("XX.OO....").unwrap();
        assert_eq!(best_move(&board), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_best_move_blocks_losing_cell() {
        // O holds two opposite corners, X the center; corner replies lose to a
        // double attack, so the engine must pick an edge. Row-major tie-break
        // makes that edge (0, 1).
        let board = Board::from_string("O...X...O").unwrap();
        assert_eq!(best_move(&board), Some(Move::new(0, 1)));
    }

    #[test]
    fn test_best_move_none_on_full_board() {
        let board = Board::from_string("XXOOOXXXO").unwrap();
        assert_eq!(best_move(&board), None);
        assert_eq!(best_move_alpha_beta(&board), None);
    }

    #[test]
    fn test_best_move_score_is_win_when_winning() {
        let board = Board::from_string("XX.OO....").unwrap();
        let (mv, score) = best_move_with_score(&board).unwrap();
        assert_eq!(mv, Move::new(0, 2));
        assert_eq!(score, X_WINS);
    }

    #[test]
    fn test_alpha_beta_matches_minimax_on_sampled_positions() {
        for encoding in [
            "XX.OO....",
            "O...X...O",
            "X...O....",
            ".X..O..X.",
            "XO.OX....",
            "XOXOO.X..",
        ] {
            let board = Board::from_string(encoding).unwrap();
            assert_eq!(
                best_move(&board),
                best_move_alpha_beta(&board),
                "searchers disagree on {encoding}"
            );
        }
    }
}
