use crate::board::Board;
use crate::move_gen::all_moves;
use crate::types::{Move, Side};

/// Perft (move path enumeration) statistics at the leaves.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PerftResults {
    pub nodes: u64,
    /// Leaf moves that capture at least once
    pub captures: u64,
    /// Pieces removed across all leaf moves
    pub pieces_taken: u64,
    /// Leaf moves that crown a man
    pub promotions: u64,
}

impl PerftResults {
    /// Combines results from child nodes.
    pub fn add(&mut self, other: &Self) {
        self.nodes += other.nodes;
        self.captures += other.captures;
        self.pieces_taken += other.pieces_taken;
        self.promotions += other.promotions;
    }
}

/// Counts the leaves of the move tree to `depth`, sides alternating from `side`.
pub fn perft(board: &Board, side: Side, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_moves(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&board.with_move(mv), side.opponent(), depth - 1))
        .sum()
}

/// Node counts for each root move.
pub fn perft_divide(board: &Board, side: Side, depth: u8) -> Vec<(Move, u64)> {
    all_moves(board, side)
        .into_iter()
        .map(|mv| {
            let nodes = if depth <= 1 {
                1
            } else {
                perft(&board.with_move(&mv), side.opponent(), depth - 1)
            };
            (mv, nodes)
        })
        .collect()
}

/// Perft with capture and promotion statistics.
pub fn perft_detailed(board: &Board, side: Side, depth: u8) -> PerftResults {
    let mut results = PerftResults::default();

    if depth == 0 {
        results.nodes = 1;
        return results;
    }

    for mv in all_moves(board, side) {
        let next = board.with_move(&mv);

        if depth == 1 {
            results.nodes += 1;
            if mv.is_capture() {
                results.captures += 1;
                results.pieces_taken += mv.capture_count() as u64;
            }
            let was_king = board.piece_at(mv.from()).map_or(false, |p| p.is_king());
            let is_king = next.piece_at(mv.to()).map_or(false, |p| p.is_king());
            if is_king && !was_king {
                results.promotions += 1;
            }
        } else {
            results.add(&perft_detailed(&next, side.opponent(), depth - 1));
        }
    }

    results
}
