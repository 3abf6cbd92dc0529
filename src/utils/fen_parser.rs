//! FEN-to-GameState parser.
//!
//! Builds a fully-populated state from a Forsyth-Edwards Notation string,
//! including piece bitboards, rights, clocks and occupancies. Used for
//! movetext that starts from a `[FEN ...]` tag pair rather than the
//! standard opening array.

use crate::errors::PositionError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

fn invalid(reason: impl Into<String>) -> PositionError {
    PositionError::InvalidFen(reason.into())
}

pub fn parse_fen(fen: &str) -> Result<GameState, PositionError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("halfmove clock {halfmove_part}")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("fullmove number {fullmove_part}")))?;

    game_state.recalc_occupancy();

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), PositionError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid(format!("rank '{rank_str}' has too many files")));
                }
                continue;
            }

            let (color, piece) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("piece character '{ch}'")))?;

            if file >= 8 {
                return Err(invalid(format!("rank '{rank_str}' has too many files")));
            }

            let sq = make_square(file, board_rank);
            game_state.pieces[color.index()][piece.index()] |= 1u64 << sq;
            file += 1;
        }

        if file != 8 {
            return Err(invalid(format!("rank '{rank_str}' does not sum to 8 files")));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, PositionError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(format!("side to move {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, PositionError> {
    if castling_part == "-" {
        return Ok(0);
    }

    castling_part.chars().try_fold(0, |rights, ch| match ch {
        'K' => Ok(rights | CASTLE_LIGHT_KINGSIDE),
        'Q' => Ok(rights | CASTLE_LIGHT_QUEENSIDE),
        'k' => Ok(rights | CASTLE_DARK_KINGSIDE),
        'q' => Ok(rights | CASTLE_DARK_QUEENSIDE),
        _ => Err(invalid(format!("castling rights character {ch}"))),
    })
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, PositionError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(format!("en-passant square {en_passant_part}")))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else {
        Color::Dark
    };
    PieceKind::from_letter(ch).map(|piece| (color, piece))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::errors::PositionError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen_matches_seeded_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state, GameState::new_game());
        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
    }

    #[test]
    fn parse_reads_every_field() {
        let game_state =
            parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 23").expect("FEN should parse");

        assert_eq!(game_state.en_passant_square, Some(make_square(3, 5)));
        assert_eq!(game_state.castling_rights, 0);
        assert_eq!(game_state.fullmove_number, 23);
        assert_eq!(
            game_state.piece_on_square(make_square(4, 4)),
            Some((Color::Light, PieceKind::Pawn))
        );
        assert_eq!(game_state.occupancy_all.count_ones(), 4);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        let cases = [
            "8/8/8/8/8/8/8 w - - 0 1",
            "9/8/8/8/8/8/8/8 w - - 0 1",
            "8/8/8/8/8/8/8/7X w - - 0 1",
            "8/8/8/8/8/8/8/8 x - - 0 1",
            "8/8/8/8/8/8/8/8 w KX - 0 1",
            "8/8/8/8/8/8/8/8 w - e9 0 1",
            "8/8/8/8/8/8/8/8 w - - zero 1",
            "8/8/8/8/8/8/8/8 w - - 0 1 extra",
            "8/8/8/8/8/8/8/8 w - -",
        ];
        for fen in cases {
            assert!(
                matches!(parse_fen(fen), Err(PositionError::InvalidFen(_))),
                "{fen} should be rejected"
            );
        }
    }
}
