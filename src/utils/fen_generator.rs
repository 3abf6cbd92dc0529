//! GameState-to-FEN encoder.
//!
//! Produces the six space-separated fields consumed downstream: board layout,
//! side to move, castling rights, en-passant target, halfmove clock and
//! fullmove number.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    format!(
        "{} {} {} {} {} {}",
        generate_board_field(game_state),
        game_state.side_to_move.fen_char(),
        generate_castling_field(game_state.castling_rights),
        generate_en_passant_field(game_state.en_passant_square),
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

/// First FEN field only: ranks 8 to 1 separated by `/`.
pub fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::with_capacity(71);

    for rank in (0..8u8).rev() {
        let mut empty_run = 0u8;

        for file in 0..8u8 {
            match game_state.piece_on_square(make_square(file, rank)) {
                Some((color, piece)) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_fen_char(color, piece));
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(color: Color, piece: PieceKind) -> char {
    match color {
        Color::Light => piece.letter(),
        Color::Dark => piece.letter().to_ascii_lowercase(),
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let out: String = [
        (CASTLE_LIGHT_KINGSIDE, 'K'),
        (CASTLE_LIGHT_QUEENSIDE, 'Q'),
        (CASTLE_DARK_KINGSIDE, 'k'),
        (CASTLE_DARK_QUEENSIDE, 'q'),
    ]
    .iter()
    .filter(|(flag, _)| rights & flag != 0)
    .map(|(_, ch)| *ch)
    .collect();

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    square
        .and_then(|sq| square_to_algebraic(sq).ok())
        .unwrap_or_else(|| "-".to_owned())
}
