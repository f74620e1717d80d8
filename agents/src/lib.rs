pub mod config;
pub mod controller;
pub mod evaluation;
pub mod minimax;
pub mod random;
pub mod search;

use checkers_core::{GameState, Move};

/// A move-picking strategy.
pub trait Agent {
    /// Chooses a move for `state.side`, or None if it has no legal move.
    fn select_move(&mut self, state: &GameState) -> Option<Move>;

    /// Get the agent's name
    fn name(&self) -> &str;
}

pub use config::{ConfigError, EngineConfig};
pub use controller::{Controller, Outcome};
pub use evaluation::{Evaluator, Heuristic};
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
pub use search::{best_move, search, Role, SearchResult, INFINITY};
