use crate::evaluation::Evaluator;
use checkers_core::{all_moves, Board, Move, Side};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, trace};

pub const INFINITY: i32 = 1_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Max,
    Min,
}

impl Role {
    pub const fn flip(self) -> Self {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Minimax value of the best move; None when no search was needed
    pub score: Option<i32>,
    pub depth: u8,
    pub nodes: u64,
    /// Number of leaf evaluations performed
    pub evaluations: u64,
    /// How many root moves shared the best value
    pub ties: usize,
}

impl SearchResult {
    fn unsearched(best_move: Option<Move>, depth: u8) -> Self {
        Self {
            best_move,
            score: None,
            depth,
            nodes: 0,
            evaluations: 0,
            ties: 0,
        }
    }
}

struct SearchInfo<'a, E: ?Sized, R: ?Sized> {
    side: Side,
    evaluator: &'a E,
    rng: &'a mut R,
    nodes: u64,
    evaluations: u64,
}

/// Picks the best move for `side` with a fixed-depth alpha-beta search.
///
/// A lone legal move is returned without searching. Among root moves tied
/// on value, the first one whose landing square touches another friendly
/// piece is preferred; otherwise the first best move found wins.
pub fn search<E, R>(board: &Board, side: Side, depth: u8, evaluator: &E, rng: &mut R) -> SearchResult
where
    E: Evaluator + ?Sized,
    R: Rng + ?Sized,
{
    let moves = all_moves(board, side);
    if moves.len() <= 1 {
        return SearchResult::unsearched(moves.into_iter().next(), depth);
    }

    let mut info = SearchInfo {
        side,
        evaluator,
        rng,
        nodes: 0,
        evaluations: 0,
    };

    let mut alpha = -INFINITY;
    let beta = INFINITY;
    let mut best = -INFINITY;
    let mut best_index = 0;
    let mut tied: Vec<usize> = Vec::new();

    for (i, mv) in moves.iter().enumerate() {
        let value = minimax(&board.with_move(mv), depth, Role::Min, alpha, beta, &mut info);
        trace!(%mv, value, "root move");

        if best == -INFINITY || value > best {
            best = value;
            best_index = i;
            tied.clear();
            tied.push(i);
        } else if value == best {
            tied.push(i);
        }

        if best > alpha {
            alpha = best;
        }
    }

    let chosen = if tied.len() > 1 {
        tied.iter()
            .copied()
            .find(|&i| is_supported(board, &moves[i], side))
            .unwrap_or(best_index)
    } else {
        best_index
    };

    let result = SearchResult {
        best_move: moves.into_iter().nth(chosen),
        score: Some(best),
        depth,
        nodes: info.nodes,
        evaluations: info.evaluations,
        ties: tied.len(),
    };
    debug!(
        best_move = ?result.best_move.as_ref().map(Move::serials),
        score = best,
        depth,
        nodes = result.nodes,
        ties = result.ties,
        "search finished"
    );
    result
}

/// Shorthand for [`search`] when only the chosen move matters.
pub fn best_move<E, R>(board: &Board, side: Side, depth: u8, evaluator: &E, rng: &mut R) -> Option<Move>
where
    E: Evaluator + ?Sized,
    R: Rng + ?Sized,
{
    search(board, side, depth, evaluator, rng).best_move
}

/// True if the moved piece ends next to another piece of its side.
fn is_supported(board: &Board, mv: &Move, side: Side) -> bool {
    board.with_move(mv).has_neighbor(mv.to(), side)
}

/// Minimax value of `board` for the searching side, `depth` plies from the leaves.
///
/// Both roles start from -INFINITY, so a node whose mover has no moves is
/// worth -INFINITY. The maximizing role stops once `beta <= best`. The
/// minimizing role keeps going while alpha or its own value is still
/// -INFINITY, or while `alpha < best`.
fn minimax<E, R>(
    board: &Board,
    depth: u8,
    role: Role,
    mut alpha: i32,
    mut beta: i32,
    info: &mut SearchInfo<'_, E, R>,
) -> i32
where
    E: Evaluator + ?Sized,
    R: Rng + ?Sized,
{
    info.nodes += 1;

    if depth <= 1 {
        info.evaluations += 1;
        return info
            .evaluator
            .score(board, info.side, info.side.opponent());
    }

    let depth = depth - 1;
    let mover = match role {
        Role::Max => info.side,
        Role::Min => info.side.opponent(),
    };
    let mut moves = all_moves(board, mover);
    moves.shuffle(&mut *info.rng);

    let mut best = -INFINITY;
    for mv in &moves {
        let open = match role {
            Role::Max => beta > best,
            Role::Min => alpha == -INFINITY || best == -INFINITY || alpha < best,
        };
        if !open {
            break;
        }

        let value = minimax(&board.with_move(mv), depth, role.flip(), alpha, beta, info);

        match role {
            Role::Max => {
                if value > best {
                    best = value;
                }
                if best > alpha {
                    alpha = best;
                }
            }
            Role::Min => {
                if best == -INFINITY || value < best {
                    best = value;
                }
                if best < beta {
                    beta = best;
                }
            }
        }
    }

    best
}
