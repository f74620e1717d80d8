use crate::Agent;
use checkers_core::{all_moves, is_legal, GameState, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Plays any legal move, preferring captures.
pub struct RandomAgent<R: Rng = StdRng> {
    name: String,
    rng: R,
}

impl RandomAgent<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomAgent<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomAgent<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomAgent {
            name: "Random".to_string(),
            rng,
        }
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        let mut moves = all_moves(&state.board, state.side);

        if moves.len() == 1 {
            let mv = moves.pop()?;
            return is_legal(&state.board, &mv, state.side).then_some(mv);
        }

        let legal: Vec<Move> = moves
            .into_iter()
            .filter(|mv| is_legal(&state.board, mv, state.side))
            .collect();
        let jumps: Vec<&Move> = legal.iter().filter(|mv| mv.is_capture()).collect();
        debug!(legal = legal.len(), jumps = jumps.len(), "random move pool");

        if jumps.is_empty() {
            legal.choose(&mut self.rng).cloned()
        } else {
            jumps.choose(&mut self.rng).map(|&mv| mv.clone())
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::{Board, Mode, Piece, Side, Square};

    fn sq(serial: u8) -> Square {
        Square::new(serial).unwrap()
    }

    #[test]
    fn test_no_moves() {
        let state = GameState::with_board(Board::empty(), Side::White, Mode::Single, 10.0);
        assert!(RandomAgent::seeded(1).select_move(&state).is_none());
    }

    #[test]
    fn test_single_move() {
        let mut board = Board::empty();
        board.set_piece(sq(5), Some(Piece::man(Side::White))); // (1, 0)
        let state = GameState::with_board(board, Side::White, Mode::Single, 10.0);

        let mv = RandomAgent::seeded(1).select_move(&state).unwrap();
        assert_eq!(mv.serials(), vec![5, 1]);
    }

    #[test]
    fn test_picks_among_captures() {
        let mut board = Board::empty();
        board.set_piece(sq(22), Some(Piece::man(Side::White))); // (5, 2)
        board.set_piece(sq(17), Some(Piece::man(Side::Black))); // (4, 1)
        board.set_piece(sq(18), Some(Piece::man(Side::Black))); // (4, 3)
        board.set_piece(sq(28), Some(Piece::man(Side::White))); // (6, 7)
        let state = GameState::with_board(board, Side::White, Mode::Single, 10.0);

        let mut agent = RandomAgent::seeded(5);
        for _ in 0..20 {
            let mv = agent.select_move(&state).unwrap();
            assert!(mv.is_capture(), "{} is not a capture", mv);
        }
    }

    #[test]
    fn test_opening_moves_are_legal() {
        let state = GameState::new(Side::Black, Mode::Single, 10.0);
        let mut agent = RandomAgent::seeded(9);
        for _ in 0..20 {
            let mv = agent.select_move(&state).unwrap();
            assert!(is_legal(&state.board, &mv, Side::Black));
        }
    }
}
