//! Built puzzle position handed to the rendering and session layers.

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzlePosition {
    fen: String,
    plies_applied: usize,
}

impl PuzzlePosition {
    pub fn new(fen: String, plies_applied: usize) -> Self {
        Self { fen, plies_applied }
    }

    pub fn fen(&self) -> &str {
        &self.fen
    }

    pub fn plies_applied(&self) -> usize {
        self.plies_applied
    }

    /// First FEN field, the only one a board renderer needs.
    pub fn board_layout(&self) -> &str {
        self.fen.split(' ').next().unwrap_or_default()
    }

    pub fn side_to_move(&self) -> Color {
        match self.fen.split(' ').nth(1) {
            Some("b") => Color::Dark,
            _ => Color::Light,
        }
    }

    /// Draw the board from Dark's side when Dark has to move.
    pub fn flip_for_dark(&self) -> bool {
        self.side_to_move() == Color::Dark
    }

    pub fn to_move_caption(&self) -> &'static str {
        match self.side_to_move() {
            Color::Light => "White to move",
            Color::Dark => "Black to move",
        }
    }

    pub fn into_fen(self) -> String {
        self.fen
    }
}
