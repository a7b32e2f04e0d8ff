//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

/// A 0-indexed (row, column) coordinate into the board.
///
/// Moves order row-major: (0,0), (0,1), (0,2), (1,0), ... (2,2).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Flat index into the 9-cell array (`row * 3 + col`)
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Inverse of [`index`](Self::index); `index` must be in 0..9
    pub fn from_index(index: usize) -> Self {
        Move {
            row: index / 3,
            col: index % 3,
        }
    }

    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Terminal result of a board: a win with its completed line, or a draw.
///
/// An in-progress game has no outcome; see [`Board::outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win { winner: Player, line: [Move; 3] },
    Draw,
}

impl Outcome {
    /// The winning player, or `None` for a draw
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            Outcome::Draw => None,
        }
    }
}

/// Count of each player's pieces on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub x: usize,
    pub o: usize,
}

/// The 3x3 board, stored as a flat row-major array.
///
/// This type implements `Copy` since it is only 9 bytes; search explores
/// hypothetical moves on stack copies, so a caller's board is never left
/// in a mid-exploration state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters in row-major order
    /// (whitespace is filtered out), e.g. `"XX.OO...."`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 non-whitespace characters are present
    /// - Any character is not a valid cell representation
    /// - The piece counts differ by more than 1
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        let count = board.count_pieces();
        if count.x.abs_diff(count.o) > 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(board)
    }

    /// Get cell at a coordinate; `mv` must be in bounds
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// Check if a coordinate holds no symbol; `mv` must be in bounds
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// Check if every cell holds a symbol
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Count the cells holding the given symbol
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Coordinates of every empty cell, in row-major order.
    ///
    /// A full board yields an empty vector; this never fails.
    pub fn available_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::from_index(i))
            .collect()
    }

    /// Place `player`'s symbol at `mv` and return the new board state
    ///
    /// # Errors
    ///
    /// Returns error if the coordinate is out of bounds or already occupied.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, mv: Move, player: Player) -> Result<Board, crate::Error> {
        if !mv.in_bounds() {
            return Err(crate::Error::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }

        if !self.is_empty(mv) {
            return Err(crate::Error::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.cells[mv.index()] = player.to_cell();
        Ok(next)
    }

    /// Infer the side to move from piece counts.
    ///
    /// This system's convention is that **O moves first**: O is to move when
    /// the counts are equal, X when O is one ahead.
    ///
    /// # Errors
    ///
    /// Returns error if the counts do not correspond to an alternating
    /// O-first game (X ahead, or either side ahead by more than one).
    pub fn to_move(&self) -> Result<Player, crate::Error> {
        let count = self.count_pieces();
        if count.o == count.x {
            Ok(Player::O)
        } else if count.o == count.x + 1 {
            Ok(Player::X)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Terminal result of this board, computed fresh from the cells.
    ///
    /// Checks the 8 winning lines in a fixed order (rows top-to-bottom,
    /// columns left-to-right, then the two diagonals) and reports the first
    /// complete line. If no line is complete and no empty cell remains the
    /// game is a draw; otherwise the game is still in progress (`None`).
    ///
    /// On hand-built boards more than one line can be complete; only the
    /// first in scan order is reported.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some((winner, line)) = lines::first_winning_line(&self.cells) {
            return Some(Outcome::Win {
                winner,
                line: line.map(Move::from_index),
            });
        }

        if self.is_full() { Some(Outcome::Draw) } else { None }
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        self.outcome().and_then(|outcome| outcome.winner())
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Swap X and O pieces on the board.
    ///
    /// The search functions always compute the best move *for X*; swapping
    /// perspectives is the supported way to ask for O's best reply:
    /// `best_move(&board.swap_players())` (coordinates carry over unchanged).
    #[must_use = "swap_players returns a new board state; the original is unchanged"]
    pub fn swap_players(&self) -> Self {
        let mut swapped = *self;
        for cell in &mut swapped.cells {
            *cell = match cell {
                Cell::X => Cell::O,
                Cell::O => Cell::X,
                Cell::Empty => Cell::Empty,
            };
        }
        swapped
    }

    /// Row-major 9-character encoding, usable as a key and re-parseable
    /// by [`from_string`](Self::from_string)
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for i in 0..9 {
            assert_eq!(board.cells[i], Cell::Empty);
        }
        assert_eq!(board.to_move().unwrap(), Player::O);
    }

    #[test]
    fn test_move_roundtrips_through_index() {
        for index in 0..9 {
            assert_eq!(Move::from_index(index).index(), index);
        }
        assert_eq!(Move::new(1, 2).index(), 5);
    }

    #[test]
    fn test_make_move() {
        let board = Board::new();

        let next = board.make_move(Move::new(1, 1), Player::O).unwrap();
        assert_eq!(next.get(Move::new(1, 1)), Cell::O);
        assert_eq!(next.to_move().unwrap(), Player::X);

        // Move on occupied cell
        let result = next.make_move(Move::new(1, 1), Player::X);
        assert!(result.unwrap_err().to_string().contains("occupied"));

        // Out-of-bounds coordinate
        let result = board.make_move(Move::new(3, 0), Player::O);
        assert!(result.is_err());
    }

    #[test]
    fn test_available_moves_row_major() {
        let board = Board::new();
        let moves = board.available_moves();
        assert_eq!(moves.len(), 9);
        let expected: Vec<Move> = (0..9).map(Move::from_index).collect();
        assert_eq!(moves, expected);

        let board = board.make_move(Move::new(0, 1), Player::O).unwrap();
        let moves = board.available_moves();
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Move::new(0, 1)));
    }

    #[test]
    fn test_win_detection_horizontal() {
        let board = Board::from_string("XXXOO....").unwrap();
        let outcome = board.outcome().unwrap();
        assert_eq!(outcome.winner(), Some(Player::X));
        match outcome {
            Outcome::Win { line, .. } => {
                assert_eq!(line, [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)]);
            }
            Outcome::Draw => panic!("expected a win"),
        }
    }

    #[test]
    fn test_win_detection_vertical() {
        let board = Board::from_string("OX.OX.O..").unwrap();
        assert_eq!(board.winner(), Some(Player::O));
    }

    #[test]
    fn test_win_detection_diagonal() {
        let board = Board::from_string("XO.OX...X").unwrap();
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        // Full board, no three-in-a-row
        let board = Board::from_string("XXOOOXXXO").unwrap();
        assert_eq!(board.outcome(), Some(Outcome::Draw));
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_in_progress_has_no_outcome() {
        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(board.outcome(), None);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_first_line_wins_scan_order_on_hand_built_board() {
        // Both the top row and the left column are complete for X; the scan
        // reports the row because rows are checked first.
        let board = Board {
            cells: [
                Cell::X,
                Cell::X,
                Cell::X,
                Cell::X,
                Cell::O,
                Cell::O,
                Cell::X,
                Cell::O,
                Cell::O,
            ],
        };
        match board.outcome().unwrap() {
            Outcome::Win { line, .. } => {
                assert_eq!(line, [Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)]);
            }
            Outcome::Draw => panic!("expected a win"),
        }
    }

    #[test]
    fn test_to_move_alternates_o_first() {
        let mut board = Board::new();
        assert_eq!(board.to_move().unwrap(), Player::O);

        board = board.make_move(Move::new(0, 0), Player::O).unwrap();
        assert_eq!(board.to_move().unwrap(), Player::X);

        board = board.make_move(Move::new(1, 1), Player::X).unwrap();
        assert_eq!(board.to_move().unwrap(), Player::O);
    }

    #[test]
    fn test_to_move_rejects_skewed_counts() {
        let board = Board {
            cells: [
                Cell::X,
                Cell::X,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
                Cell::Empty,
            ],
        };
        assert!(board.to_move().is_err());
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[2], Cell::X);

        // Whitespace is filtered
        let board = Board::from_string("XOX\n...\n...").unwrap();
        assert_eq!(board.count(Cell::X), 2);

        // Too short
        assert!(Board::from_string("XO").is_err());

        // Invalid character
        assert!(Board::from_string("XOZ......").is_err());

        // Counts may not differ by more than 1
        assert!(Board::from_string("XXX......").is_err());
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(board.encode(), "XO.......");
        let parsed = Board::from_string(&board.encode()).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_swap_players() {
        let board = Board::from_string("XO.......").unwrap();
        let swapped = board.swap_players();
        assert_eq!(swapped.cells[0], Cell::O);
        assert_eq!(swapped.cells[1], Cell::X);
        assert_eq!(swapped.cells[2], Cell::Empty);
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert!(display.contains("XOX"));
        assert!(display.contains(".O."));
        assert!(display.contains("X.."));
    }
}
