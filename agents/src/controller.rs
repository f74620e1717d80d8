use crate::config::EngineConfig;
use crate::minimax::MinimaxAgent;
use crate::random::RandomAgent;
use crate::Agent;
use checkers_core::{check_move, Board, GameState, Mode, Move};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

/// The move chosen for the live game.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub mv: Move,
    /// Board after the move, reported in `GAME` mode only
    pub board: Option<Board>,
}

/// Dispatches between the random and the searching agent by game mode.
pub struct Controller {
    random: RandomAgent<StdRng>,
    minimax: MinimaxAgent,
}

impl Controller {
    pub fn new(config: EngineConfig) -> Self {
        let (random_rng, search_rng) = match config.seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (StdRng::from_entropy(), StdRng::from_entropy()),
        };
        Self {
            random: RandomAgent::with_rng(random_rng),
            minimax: MinimaxAgent::with_parts(config, Default::default(), search_rng),
        }
    }

    /// Plays one turn for `state.side`. Returns None when the side cannot move.
    pub fn play(&mut self, state: &mut GameState) -> Option<Outcome> {
        match state.mode {
            Mode::Single => self.explore(state).map(|mv| Outcome { mv, board: None }),
            Mode::Game => self.compete(state),
        }
    }

    /// Picks a random legal move, a capture whenever one exists.
    pub fn explore(&mut self, state: &GameState) -> Option<Move> {
        let mv = self.random.select_move(state)?;
        debug!(agent = self.random.name(), %mv, "exploratory move");
        Some(mv)
    }

    /// Searches for the best move, validates it and plays it on the live board.
    pub fn compete(&mut self, state: &mut GameState) -> Option<Outcome> {
        let mv = self.minimax.select_move(state)?;

        match check_move(&state.board, &mv, state.side) {
            Ok(board) => {
                if let Some(result) = self.minimax.last_result() {
                    info!(
                        agent = self.minimax.name(),
                        %mv,
                        depth = result.depth,
                        nodes = result.nodes,
                        "competitive move"
                    );
                }
                state.board = board.clone();
                Some(Outcome {
                    mv,
                    board: Some(board),
                })
            }
            Err(err) => {
                warn!(%mv, %err, "search produced an illegal move");
                None
            }
        }
    }
}
