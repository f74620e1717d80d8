//! Array-based checkers board.
//! Boards are small values; every hypothetical line of play works on its own copy.
use crate::types::*;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// Indexed [row][col], row 0 at the top.
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates the standard opening position: black on rows 0-2, white on rows 5-7.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for square in Square::all() {
            let piece = match square.row() {
                0..=2 => Some(Piece::man(Side::Black)),
                5..=7 => Some(Piece::man(Side::White)),
                _ => None,
            };
            board.set_piece(square, piece);
        }
        board
    }

    /// Gets the piece at the given square.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let (row, col) = square.grid();
        self.cells[row as usize][col as usize]
    }

    /// Sets the piece at the given square.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        let (row, col) = square.grid();
        self.cells[row as usize][col as usize] = piece;
    }

    /// Gets the content of any grid cell; None when off the board.
    pub fn cell(&self, row: i8, col: i8) -> Option<Piece> {
        if in_bounds(row, col) {
            self.cells[row as usize][col as usize]
        } else {
            None
        }
    }

    /// Sets the content of a grid cell. Used when loading full 8x8 snapshots.
    pub(crate) fn set_cell(&mut self, row: usize, col: usize, piece: Option<Piece>) {
        self.cells[row][col] = piece;
    }

    /// Returns true if the cell holds a piece of the given side.
    pub fn is_side(&self, row: i8, col: i8, side: Side) -> bool {
        color_of(self.cell(row, col)) == Some(side)
    }

    /// Iterates over the occupied playable squares in serial order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Counts the pieces belonging to `side`.
    pub fn count(&self, side: Side) -> usize {
        self.pieces().filter(|(_, p)| p.side == side).count()
    }

    /// Checks whether the piece on (r1, c1) may go to (r2, c2), either by a
    /// one-row step or by jumping an opposing piece.
    ///
    /// Every piece, crowned or not, only travels toward its opponent's back
    /// rank. Any violation, including coordinates off the board, is `false`.
    pub fn can_step(&self, r1: i8, c1: i8, r2: i8, c2: i8) -> bool {
        if !in_bounds(r1, c1) || !in_bounds(r2, c2) {
            return false;
        }

        let Some(piece) = self.cell(r1, c1) else {
            return false;
        };
        if self.cell(r2, c2).is_some() {
            return false;
        }

        let dr = (r2 - r1).abs();
        let dc = (c2 - c1).abs();
        if (dr != 1 && dr != 2) || dr != dc {
            return false;
        }

        if (r2 - r1).signum() != piece.side.forward() {
            return false;
        }

        if dr == 2 {
            let mid = self.cell((r1 + r2) / 2, (c1 + c2) / 2);
            if color_of(mid) != Some(piece.side.opponent()) {
                return false;
            }
        }

        true
    }

    /// Returns true if the piece on (row, col) has at least one capture.
    pub fn can_jump_from(&self, row: i8, col: i8) -> bool {
        JUMPS
            .iter()
            .any(|&(dr, dc)| self.can_step(row, col, row + dr, col + dc))
    }

    /// Moves a piece one leg without checking legality, removing the jumped
    /// piece for a capture and crowning on either end row.
    /// Returns true if the leg was a capture.
    pub fn apply_leg(&mut self, r1: i8, c1: i8, r2: i8, c2: i8) -> bool {
        let piece = self.cells[r1 as usize][c1 as usize].take();
        let captured = (r1 - r2).abs() == 2;
        if captured {
            self.cells[((r1 + r2) / 2) as usize][((c1 + c2) / 2) as usize] = None;
        }
        let landed = if r2 == 0 || r2 == 7 {
            piece.map(Piece::crowned)
        } else {
            piece
        };
        self.cells[r2 as usize][c2 as usize] = landed;
        captured
    }

    /// Plays every leg of a move in order, without checking legality.
    pub fn apply_move(&mut self, mv: &Move) {
        for leg in mv.legs() {
            let (r1, c1) = leg.from.grid();
            let (r2, c2) = leg.to.grid();
            self.apply_leg(r1, c1, r2, c2);
        }
    }

    /// Returns a copy of the board with the move played.
    pub fn with_move(&self, mv: &Move) -> Self {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }

    /// Returns true if any diagonal neighbour of `square` holds a piece of `side`.
    pub fn has_neighbor(&self, square: Square, side: Side) -> bool {
        let (row, col) = square.grid();
        STEPS
            .iter()
            .any(|&(dr, dc)| self.is_side(row + dr, col + dc, side))
    }
}

/// Single-step offsets, in generation order.
pub(crate) const STEPS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// Capture offsets, in generation order.
pub(crate) const JUMPS: [(i8, i8); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];

pub(crate) const fn in_bounds(row: i8, col: i8) -> bool {
    row >= 0 && row < 8 && col >= 0 && col < 8
}

impl fmt::Display for Board {
    /// Writes the eight rows of the board, `.` for an empty cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let c = cell.map_or('.', Piece::to_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(serial: u8) -> Square {
        Square::new(serial).unwrap()
    }

    #[test]
    fn test_starting_position() {
        let board = Board::starting_position();
        assert_eq!(board.count(Side::Black), 12);
        assert_eq!(board.count(Side::White), 12);
        assert_eq!(board.piece_at(sq(1)), Some(Piece::man(Side::Black)));
        assert_eq!(board.piece_at(sq(32)), Some(Piece::man(Side::White)));
        assert!(board.piece_at(sq(16)).is_none());
    }

    #[test]
    fn test_can_step_direction() {
        let mut board = Board::empty();
        board.set_piece(sq(14), Some(Piece::man(Side::Black))); // (3, 2)

        assert!(board.can_step(3, 2, 4, 1));
        assert!(board.can_step(3, 2, 4, 3));
        assert!(!board.can_step(3, 2, 2, 1), "men cannot retreat");
        assert!(!board.can_step(3, 2, 3, 3), "not diagonal");
        assert!(!board.can_step(3, 2, 6, 5), "too far");
        assert!(!board.can_step(4, 1, 5, 0), "empty origin");
    }

    #[test]
    fn test_kings_keep_direction() {
        let mut board = Board::empty();
        board.set_piece(sq(14), Some(Piece::king(Side::White))); // (3, 2)
        assert!(board.can_step(3, 2, 2, 1));
        assert!(!board.can_step(3, 2, 4, 1));
    }

    #[test]
    fn test_can_step_off_board() {
        let mut board = Board::empty();
        board.set_piece(sq(5), Some(Piece::man(Side::Black))); // (1, 0)
        assert!(!board.can_step(1, 0, 2, -1));
        assert!(!board.can_step(1, 0, -1, 2));
        assert!(!board.can_step(-3, 0, 1, 0));
    }

    #[test]
    fn test_capture_requires_opponent() {
        let mut board = Board::empty();
        board.set_piece(sq(14), Some(Piece::man(Side::Black))); // (3, 2)
        board.set_piece(sq(18), Some(Piece::man(Side::Black))); // (4, 3)
        assert!(!board.can_step(3, 2, 5, 4));

        board.set_piece(sq(18), Some(Piece::king(Side::White)));
        assert!(board.can_step(3, 2, 5, 4));
        assert!(board.can_jump_from(3, 2));

        board.set_piece(sq(23), Some(Piece::man(Side::White))); // (5, 4) occupied
        assert!(!board.can_step(3, 2, 5, 4));
    }

    #[test]
    fn test_apply_leg_capture_and_crown() {
        let mut board = Board::empty();
        board.set_piece(sq(9), Some(Piece::man(Side::White))); // (2, 1)
        board.set_piece(sq(6), Some(Piece::man(Side::Black))); // (1, 2)

        assert!(board.apply_leg(2, 1, 0, 3));
        assert!(board.piece_at(sq(6)).is_none());
        assert!(board.piece_at(sq(9)).is_none());
        assert_eq!(board.piece_at(sq(2)), Some(Piece::king(Side::White)));
    }

    #[test]
    fn test_has_neighbor_edges() {
        let mut board = Board::empty();
        board.set_piece(sq(5), Some(Piece::man(Side::Black))); // (1, 0)
        assert!(!board.has_neighbor(sq(5), Side::Black));
        board.set_piece(sq(1), Some(Piece::king(Side::Black))); // (0, 1)
        assert!(board.has_neighbor(sq(5), Side::Black));
        assert!(!board.has_neighbor(sq(5), Side::White));
    }

    #[test]
    fn test_display() {
        let text = Board::starting_position().to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], ".b.b.b.b");
        assert_eq!(rows[3], "........");
        assert_eq!(rows[7], "w.w.w.w.");
    }
}
