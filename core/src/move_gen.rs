use crate::board::{Board, JUMPS, STEPS};
use crate::types::{Move, Side, Square};

/// Returns every capture chain starting from the piece on (row, col), as
/// serial paths beginning with the starting square.
///
/// A chain ends only where its landing square offers no further jump. Every
/// such chain is listed, whatever its length.
pub fn jump_chains_from(board: &Board, row: i8, col: i8) -> Vec<Vec<Square>> {
    let mut chains = Vec::new();
    let Some(start) = Square::from_grid(row, col) else {
        return chains;
    };

    for &(dr, dc) in &JUMPS {
        let (r2, c2) = (row + dr, col + dc);
        if !board.can_step(row, col, r2, c2) {
            continue;
        }

        let mut next = board.clone();
        next.apply_leg(row, col, r2, c2);
        let continuations = jump_chains_from(&next, r2, c2);

        if continuations.is_empty() {
            if let Some(landing) = Square::from_grid(r2, c2) {
                chains.push(vec![start, landing]);
            }
        } else {
            for tail in continuations {
                let mut chain = Vec::with_capacity(tail.len() + 1);
                chain.push(start);
                chain.extend(tail);
                chains.push(chain);
            }
        }
    }

    chains
}

/// Returns the moves of the piece on (row, col), and whether they are captures.
/// Captures take priority: simple steps are only listed if no chain exists.
pub fn moves_from(board: &Board, row: i8, col: i8) -> (Vec<Move>, bool) {
    let Some(start) = Square::from_grid(row, col) else {
        return (Vec::new(), false);
    };

    let chains = jump_chains_from(board, row, col);
    if !chains.is_empty() {
        return (chains.into_iter().filter_map(Move::new).collect(), true);
    }

    let moves = STEPS
        .iter()
        .filter(|&&(dr, dc)| board.can_step(row, col, row + dr, col + dc))
        .filter_map(|&(dr, dc)| Square::from_grid(row + dr, col + dc))
        .map(|to| Move::simple(start, to))
        .collect();
    (moves, false)
}

/// Returns true if any piece of `side` can capture.
pub fn capture_available(board: &Board, side: Side) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.side == side)
        .any(|(sq, _)| {
            let (row, col) = sq.grid();
            board.can_jump_from(row, col)
        })
}

/// Generates every legal move for `side`, in serial order of the moving piece.
///
/// When any piece of the side can capture, only capturing pieces contribute,
/// so a simple move is never offered while a capture exists anywhere.
pub fn all_moves(board: &Board, side: Side) -> Vec<Move> {
    let must_capture = capture_available(board, side);
    let mut moves = Vec::new();

    for (square, piece) in board.pieces() {
        if piece.side != side {
            continue;
        }
        let (row, col) = square.grid();
        let (piece_moves, captured) = moves_from(board, row, col);
        if captured == must_capture {
            moves.extend(piece_moves);
        }
    }

    moves
}

/// Returns true if `side` has at least one legal move.
pub fn has_any_move(board: &Board, side: Side) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.side == side)
        .any(|(sq, _)| {
            let (row, col) = sq.grid();
            board.can_jump_from(row, col)
                || STEPS
                    .iter()
                    .any(|&(dr, dc)| board.can_step(row, col, row + dr, col + dc))
        })
}
