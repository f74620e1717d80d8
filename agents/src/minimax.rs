use crate::config::EngineConfig;
use crate::evaluation::{Evaluator, Heuristic};
use crate::search::{search, SearchResult};
use crate::Agent;
use checkers_core::{GameState, Move};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Alpha-beta agent whose depth is picked from the remaining time.
pub struct MinimaxAgent<E: Evaluator = Heuristic, R: Rng = StdRng> {
    name: String,
    config: EngineConfig,
    evaluator: E,
    rng: R,
    last_result: Option<SearchResult>,
}

impl MinimaxAgent<Heuristic, StdRng> {
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_parts(config, Heuristic, rng)
    }
}

impl<E: Evaluator, R: Rng> MinimaxAgent<E, R> {
    pub fn with_parts(config: EngineConfig, evaluator: E, rng: R) -> Self {
        MinimaxAgent {
            name: format!(
                "Minimax(depth={}/{})",
                config.shallow_depth, config.deep_depth
            ),
            config,
            evaluator,
            rng,
            last_result: None,
        }
    }

    /// Statistics of the most recent search.
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }
}

impl<E: Evaluator, R: Rng> Agent for MinimaxAgent<E, R> {
    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        let depth = self.config.depth_for(state.time_remaining);
        let result = search(
            &state.board,
            state.side,
            depth,
            &self.evaluator,
            &mut self.rng,
        );
        let best = result.best_move.clone();
        self.last_result = Some(result);
        best
    }

    fn name(&self) -> &str {
        &self.name
    }
}
