use crate::board::Board;
use crate::move_gen::capture_available;
use crate::types::{color_of, Move, Side, Square};
use thiserror::Error;

/// Why a move was rejected by [`check_move`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("move has fewer than two squares")]
    TooShort,

    #[error("no {side} piece on square {square}")]
    NotOwnPiece { square: Square, side: Side },

    #[error("leg {leg} is a simple step while a capture is available")]
    CaptureRequired { leg: usize },

    #[error("no capture is available, move must be a single step")]
    CaptureNotAvailable,

    #[error("leg {leg} from {from} to {to} is not a legal step")]
    BlockedLeg { leg: usize, from: Square, to: Square },
}

/// Replays `mv` for `side` on a private copy of `board`.
///
/// All legs must be captures when the side has a capture anywhere on the
/// board, and the move must be a single step otherwise. A chain may stop
/// even if its last landing square still offers a jump.
pub fn check_move(board: &Board, mv: &Move, side: Side) -> Result<Board, IllegalMove> {
    if mv.len() < 2 {
        return Err(IllegalMove::TooShort);
    }

    if color_of(board.piece_at(mv.from())) != Some(side) {
        return Err(IllegalMove::NotOwnPiece {
            square: mv.from(),
            side,
        });
    }

    let must_capture = capture_available(board, side);
    if !must_capture && mv.len() != 2 {
        return Err(IllegalMove::CaptureNotAvailable);
    }

    let mut replay = board.clone();
    for (i, leg) in mv.legs().enumerate() {
        let (r1, c1) = leg.from.grid();
        let (r2, c2) = leg.to.grid();

        if !replay.can_step(r1, c1, r2, c2) {
            return Err(IllegalMove::BlockedLeg {
                leg: i,
                from: leg.from,
                to: leg.to,
            });
        }

        let captured = replay.apply_leg(r1, c1, r2, c2);
        if captured != must_capture {
            return Err(if must_capture {
                IllegalMove::CaptureRequired { leg: i }
            } else {
                IllegalMove::CaptureNotAvailable
            });
        }
    }

    Ok(replay)
}

/// Returns true if `mv` is a legal move for `side` on `board`.
pub fn is_legal(board: &Board, mv: &Move, side: Side) -> bool {
    check_move(board, mv, side).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_gen::all_moves;
    use crate::types::Piece;

    fn sq(serial: u8) -> Square {
        Square::new(serial).unwrap()
    }

    fn mv(serials: &[u8]) -> Move {
        Move::from_serials(serials).unwrap()
    }

    fn capture_board() -> Board {
        let mut board = Board::empty();
        board.set_piece(sq(29), Some(Piece::man(Side::White))); // (7, 0)
        board.set_piece(sq(25), Some(Piece::man(Side::Black))); // (6, 1)
        board.set_piece(sq(18), Some(Piece::man(Side::Black))); // (4, 3)
        board.set_piece(sq(28), Some(Piece::man(Side::White))); // (6, 7)
        board
    }

    #[test]
    fn test_generated_moves_are_legal() {
        let board = Board::starting_position();
        for side in [Side::Black, Side::White] {
            for m in all_moves(&board, side) {
                assert!(is_legal(&board, &m, side), "{} should be legal", m);
            }
        }
    }

    #[test]
    fn test_rejects_wrong_owner() {
        let board = Board::starting_position();
        assert_eq!(
            check_move(&board, &mv(&[9, 13]), Side::White),
            Err(IllegalMove::NotOwnPiece {
                square: sq(9),
                side: Side::White
            })
        );
        assert!(!is_legal(&board, &mv(&[16, 20]), Side::Black), "empty origin");
    }

    #[test]
    fn test_simple_move_while_capture_available() {
        let board = capture_board();
        assert_eq!(
            check_move(&board, &mv(&[28, 24]), Side::White),
            Err(IllegalMove::CaptureRequired { leg: 0 })
        );
    }

    #[test]
    fn test_chain_may_stop_early() {
        let board = capture_board();
        let after = check_move(&board, &mv(&[29, 22]), Side::White).unwrap();
        assert_eq!(after.count(Side::Black), 1);

        let after = check_move(&board, &mv(&[29, 22, 15]), Side::White).unwrap();
        assert_eq!(after.count(Side::Black), 0);
        assert_eq!(after.count(Side::White), 2);
    }

    #[test]
    fn test_multi_step_without_capture() {
        let mut board = Board::empty();
        board.set_piece(sq(22), Some(Piece::man(Side::White))); // (5, 2)
        assert_eq!(
            check_move(&board, &mv(&[22, 18, 15]), Side::White),
            Err(IllegalMove::CaptureNotAvailable)
        );
        assert!(is_legal(&board, &mv(&[22, 18]), Side::White));
        assert!(!is_legal(&board, &mv(&[22, 26]), Side::White), "backward step");
    }

    #[test]
    fn test_capture_onto_back_row_crowns() {
        let mut board = Board::empty();
        board.set_piece(sq(9), Some(Piece::man(Side::White))); // (2, 1)
        board.set_piece(sq(6), Some(Piece::man(Side::Black))); // (1, 2)

        let after = check_move(&board, &mv(&[9, 2]), Side::White).unwrap();
        assert_eq!(after.piece_at(sq(2)), Some(Piece::king(Side::White)));
        assert_eq!(after.count(Side::Black), 0);
    }

    #[test]
    fn test_blocked_leg() {
        let mut board = Board::empty();
        board.set_piece(sq(9), Some(Piece::man(Side::White))); // (2, 1)
        board.set_piece(sq(6), Some(Piece::man(Side::Black))); // (1, 2)
        board.set_piece(sq(2), Some(Piece::man(Side::Black))); // (0, 3)

        let err = check_move(&board, &mv(&[9, 2]), Side::White).unwrap_err();
        assert!(matches!(err, IllegalMove::BlockedLeg { leg: 0, .. }));
    }
}
