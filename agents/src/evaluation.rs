use checkers_core::{Board, PieceKind, Side};

/// Static evaluation of a leaf position.
pub trait Evaluator {
    /// Scores `board` for `side`; positive values favour `side`.
    fn score(&self, board: &Board, side: Side, opponent: Side) -> i32;
}

/// Material and advancement heuristic.
///
/// Men are worth 5, or 7 once in the advanced half of the board. Kings are
/// worth 10 plus their distance from row 3. An opposing king is scored
/// `-10 + |row - 3|`, so its distance term is not negated.
#[derive(Clone, Copy, Debug, Default)]
pub struct Heuristic;

impl Evaluator for Heuristic {
    fn score(&self, board: &Board, side: Side, opponent: Side) -> i32 {
        let mut value = 0;

        for (square, piece) in board.pieces() {
            let row = square.row();
            let edge = i32::from((row - 3).abs());

            if piece.side == side {
                value += match piece.kind {
                    PieceKind::Man => man_value(side, row),
                    PieceKind::King => 10 + edge,
                };
            } else if piece.side == opponent {
                value -= match piece.kind {
                    PieceKind::Man => man_value(opponent, row),
                    PieceKind::King => 10 - edge,
                };
            }
        }

        value
    }
}

fn man_value(side: Side, row: i8) -> i32 {
    if side.is_advanced(row) {
        7
    } else {
        5
    }
}
