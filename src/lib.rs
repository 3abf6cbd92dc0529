//! Crate root module declarations for the puzzle position builder.
//!
//! Replays SAN movetext from the standard starting array (or a PGN `FEN`
//! tag pair) and encodes the reached position as a FEN string. The modules
//! below cover board state, SAN parsing, move application, the FEN codec,
//! the puzzle-facing driver and the command-line front-end.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod notation {
    pub mod san_parser;
}

pub mod move_application {
    pub mod geometry;
    pub mod san_apply;
}

pub mod puzzle {
    pub mod answer_checker;
    pub mod position_builder;
    pub mod puzzle_position;
}

pub mod cli {
    pub mod cli_config;
    pub mod cli_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}

pub use errors::PositionError;
pub use puzzle::position_builder::{build_position, build_puzzle_position};
pub use puzzle::puzzle_position::PuzzlePosition;
