pub mod board;
pub mod description;
pub mod game_state;
pub mod move_gen;
pub mod notation;
pub mod perft;
pub mod types;
pub mod validate;

pub use board::Board;
pub use description::DescriptionError;
pub use game_state::*;
pub use move_gen::*;
pub use notation::format_move;
pub use perft::{perft, perft_detailed, perft_divide, PerftResults};
pub use types::*;
pub use validate::{check_move, is_legal, IllegalMove};
