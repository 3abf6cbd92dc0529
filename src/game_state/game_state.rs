//! Board state replayed by the position builder.
//!
//! `GameState` stores piece bitboards, occupancy caches, turn/state flags and
//! clocks. It is created fresh for every build, advanced one SAN move at a
//! time through `move_application::san_apply`, and encoded with
//! `utils::fen_generator` once the requested ply is reached.

use crate::errors::PositionError;
use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [color][piece_kind]
    pub pieces: [[u64; 6]; 2],

    // Occupancy caches.
    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    /// Plies applied since this state was seeded.
    pub ply: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,

            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,

            ply: 0,
        }
    }
}

impl GameState {
    /// Empty board, Light to move, no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut state = Self::new_empty();
        for (file, piece) in BACK_RANK_LAYOUT.iter().enumerate() {
            let file = file as u8;
            state.put_piece(make_square(file, 0), Color::Light, *piece);
            state.put_piece(make_square(file, 1), Color::Light, PieceKind::Pawn);
            state.put_piece(make_square(file, 6), Color::Dark, PieceKind::Pawn);
            state.put_piece(make_square(file, 7), Color::Dark, *piece);
        }
        state.castling_rights = CASTLE_ALL;
        state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Color and kind of the piece on `square`, if any.
    pub fn piece_on_square(&self, square: Square) -> Option<(Color, PieceKind)> {
        let mask = 1u64 << square;
        if self.occupancy_all & mask == 0 {
            return None;
        }

        for color in [Color::Light, Color::Dark] {
            for piece in ALL_PIECE_KINDS {
                if (self.pieces[color.index()][piece.index()] & mask) != 0 {
                    return Some((color, piece));
                }
            }
        }

        None
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupancy_all & (1u64 << square) == 0
    }

    /// Bitboard of `color`'s pieces of kind `piece`.
    #[inline]
    pub fn bitboard(&self, color: Color, piece: PieceKind) -> u64 {
        self.pieces[color.index()][piece.index()]
    }

    /// Place a piece, replacing whatever stood on `square`.
    pub fn put_piece(&mut self, square: Square, color: Color, piece: PieceKind) {
        self.remove_piece(square);
        let mask = 1u64 << square;
        self.pieces[color.index()][piece.index()] |= mask;
        self.occupancy_by_color[color.index()] |= mask;
        self.occupancy_all |= mask;
    }

    /// Clear `square`, returning what stood there.
    pub fn remove_piece(&mut self, square: Square) -> Option<(Color, PieceKind)> {
        let removed = self.piece_on_square(square)?;
        let mask = !(1u64 << square);
        self.pieces[removed.0.index()][removed.1.index()] &= mask;
        self.occupancy_by_color[removed.0.index()] &= mask;
        self.occupancy_all &= mask;
        Some(removed)
    }

    /// Hand the move to the other side, bumping the fullmove number after Dark.
    pub fn switch_side(&mut self) {
        if self.side_to_move == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.opposite();
        self.ply = self.ply.saturating_add(1);
    }

    /// Rebuild occupancy caches from the piece bitboards.
    pub fn recalc_occupancy(&mut self) {
        for color in [Color::Light, Color::Dark] {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .copied()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[Color::Light.index()]
            | self.occupancy_by_color[Color::Dark.index()];
    }
}
