//! Game description parsing.
//!
//! A description is eleven lines: the mode (`SINGLE` or `GAME`), the side
//! to play (`BLACK` or `WHITE`), the remaining time in seconds, and eight
//! board rows of `.`, `b`, `B`, `w`, `W`.
use crate::board::Board;
use crate::game_state::{GameState, Mode};
use crate::types::{Piece, Side};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DescriptionError {
    #[error("missing {0}")]
    MissingLine(&'static str),

    #[error("unknown mode: {0:?}")]
    InvalidMode(String),

    #[error("unknown side: {0:?}")]
    InvalidSide(String),

    #[error("invalid remaining time: {0:?}")]
    InvalidTime(String),

    #[error("board row {row} has {len} cells, expected 8")]
    InvalidRow { row: usize, len: usize },

    #[error("invalid cell {cell:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, cell: char },
}

impl FromStr for Mode {
    type Err = DescriptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SINGLE" => Ok(Mode::Single),
            "GAME" => Ok(Mode::Game),
            _ => Err(DescriptionError::InvalidMode(s.to_string())),
        }
    }
}

impl FromStr for Side {
    type Err = DescriptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BLACK" => Ok(Side::Black),
            "WHITE" => Ok(Side::White),
            _ => Err(DescriptionError::InvalidSide(s.to_string())),
        }
    }
}

impl FromStr for Board {
    type Err = DescriptionError;

    /// Parses eight rows of eight cells. Lines after the eighth are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let mut board = Board::empty();
        for row in 0..8 {
            let line = lines
                .next()
                .ok_or(DescriptionError::MissingLine("board row"))?;
            parse_row(&mut board, row, line.trim_end())?;
        }
        Ok(board)
    }
}

fn parse_row(board: &mut Board, row: usize, line: &str) -> Result<(), DescriptionError> {
    let len = line.chars().count();
    if len != 8 {
        return Err(DescriptionError::InvalidRow { row, len });
    }

    for (col, cell) in line.chars().enumerate() {
        let piece = match cell {
            '.' => None,
            c => Some(Piece::from_char(c).ok_or(DescriptionError::InvalidCell { row, col, cell })?),
        };
        board.set_cell(row, col, piece);
    }
    Ok(())
}

impl GameState {
    /// Parses a full game description.
    pub fn from_description(text: &str) -> Result<Self, DescriptionError> {
        let mut lines = text.lines();
        let mut next = |what: &'static str| {
            lines
                .next()
                .map(str::trim)
                .ok_or(DescriptionError::MissingLine(what))
        };

        let mode = next("mode")?.parse::<Mode>()?;
        let side = next("side")?.parse::<Side>()?;
        let time = next("remaining time")?;
        let time_remaining = time
            .parse::<f64>()
            .map_err(|_| DescriptionError::InvalidTime(time.to_string()))?;

        let rows = (0..8)
            .map(|_| next("board row"))
            .collect::<Result<Vec<_>, _>>()?;
        let board = rows.join("\n").parse::<Board>()?;

        Ok(GameState::with_board(board, side, mode, time_remaining))
    }
}

impl FromStr for GameState {
    type Err = DescriptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::from_description(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    const OPENING: &str = "GAME\nWHITE\n100.0\n\
        .b.b.b.b\n\
        b.b.b.b.\n\
        .b.b.b.b\n\
        ........\n\
        ........\n\
        w.w.w.w.\n\
        .w.w.w.w\n\
        w.w.w.w.\n";

    #[test]
    fn test_parse_opening() {
        let state: GameState = OPENING.parse().unwrap();
        assert_eq!(state.mode, Mode::Game);
        assert_eq!(state.side, Side::White);
        assert_eq!(state.time_remaining, 100.0);
        assert_eq!(state.board, Board::starting_position());
    }

    #[test]
    fn test_display_roundtrip() {
        let state: GameState = OPENING.parse().unwrap();
        let reparsed: GameState = state.to_string().parse().unwrap();
        assert_eq!(reparsed, state);
    }

    #[test]
    fn test_kings_and_crlf() {
        let text = "SINGLE\r\nBLACK\r\n0.5\r\n\
            .B......\r\n........\r\n........\r\n........\r\n\
            ........\r\n........\r\n........\r\n......W.\r\n";
        let state: GameState = text.parse().unwrap();
        assert_eq!(state.mode, Mode::Single);
        assert_eq!(state.side, Side::Black);
        assert_eq!(state.board.piece_at(Square::new(1).unwrap()), Some(Piece::king(Side::Black)));
        assert_eq!(state.board.piece_at(Square::new(32).unwrap()), Some(Piece::king(Side::White)));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            "PLAY\nWHITE\n1\n".parse::<GameState>(),
            Err(DescriptionError::InvalidMode("PLAY".to_string()))
        );
        assert_eq!(
            "GAME\nRED\n1\n".parse::<GameState>(),
            Err(DescriptionError::InvalidSide("RED".to_string()))
        );
        assert_eq!(
            "GAME\nWHITE\nsoon\n".parse::<GameState>(),
            Err(DescriptionError::InvalidTime("soon".to_string()))
        );
        assert_eq!(
            "GAME\nWHITE\n1\n........\n".parse::<GameState>(),
            Err(DescriptionError::MissingLine("board row"))
        );
        assert_eq!(
            "........\n.......\n".parse::<Board>(),
            Err(DescriptionError::InvalidRow { row: 1, len: 7 })
        );
        assert_eq!(
            "...x....\n".parse::<Board>(),
            Err(DescriptionError::InvalidCell { row: 0, col: 3, cell: 'x' })
        );
    }
}
