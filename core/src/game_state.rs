//! The live game: board, side to move, play mode and remaining time.
//! This is the only state the controller mutates.
use crate::board::Board;
use crate::types::*;
use std::fmt;

/// How the engine should pick its move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Any legal move will do, chosen at random.
    Single,
    /// Search for the best move.
    Game,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Single => write!(f, "SINGLE"),
            Mode::Game => write!(f, "GAME"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub board: Board,
    /// The side the engine plays
    pub side: Side,
    pub mode: Mode,
    /// Remaining time budget, in seconds
    pub time_remaining: f64,
}

impl GameState {
    /// Creates a game in the opening position.
    pub fn new(side: Side, mode: Mode, time_remaining: f64) -> Self {
        Self {
            board: Board::starting_position(),
            side,
            mode,
            time_remaining,
        }
    }

    /// Creates a game on an existing board.
    pub fn with_board(board: Board, side: Side, mode: Mode, time_remaining: f64) -> Self {
        Self {
            board,
            side,
            mode,
            time_remaining,
        }
    }

    /// Plays a move on the live board without validation.
    pub fn apply_move(&mut self, mv: &Move) {
        self.board.apply_move(mv);
    }
}

impl fmt::Display for GameState {
    /// Writes the state in game description format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.mode)?;
        writeln!(f, "{}", self.side)?;
        writeln!(f, "{}", self.time_remaining)?;
        write!(f, "{}", self.board)
    }
}
