//! Applies parsed SAN moves to a `GameState`.
//!
//! Every transition works on a clone of the incoming state and returns the
//! successor, so a token that fails to resolve leaves the caller's state
//! untouched.

use tracing::trace;

use crate::errors::PositionError;
use crate::game_state::chess_rules::{castle_plan, castling_flag_for_corner, CastleSide};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_application::geometry::is_move_geometrically_legal;
use crate::notation::san_parser::{parse_san, SanMove, SanPieceMove};

/// Parse `token` and apply it to `game_state`.
pub fn apply_san(game_state: &GameState, token: &str) -> Result<GameState, PositionError> {
    let san_move = parse_san(token)?;
    apply_san_move(game_state, &san_move, token)
}

/// Apply an already parsed move. `token` is only used for error reporting.
pub fn apply_san_move(
    game_state: &GameState,
    san_move: &SanMove,
    token: &str,
) -> Result<GameState, PositionError> {
    match san_move {
        SanMove::Castle(side) => apply_castle(game_state, *side, token),
        SanMove::Piece(mv) => {
            let from = resolve_origin(game_state, mv)
                .ok_or_else(|| PositionError::UnresolvableOrigin(token.to_owned()))?;
            trace!(token, from, to = mv.to, "resolved SAN origin");
            Ok(apply_piece_move(game_state, from, mv))
        }
    }
}

/// First square, in a1..h8 order, holding a piece that can play `mv`.
///
/// Candidates are the side to move's pieces of the right kind that pass the
/// file/rank disambiguators and the movement geometry. King safety is not
/// considered.
pub fn resolve_origin(game_state: &GameState, mv: &SanPieceMove) -> Option<Square> {
    let mover = game_state.side_to_move;
    let mut candidates = game_state.bitboard(mover, mv.piece);

    while candidates != 0 {
        let from = candidates.trailing_zeros() as Square;
        candidates &= candidates - 1;

        if mv.from_file.is_some_and(|file| square_file(from) != file) {
            continue;
        }
        if mv.from_rank.is_some_and(|rank| square_rank(from) != rank) {
            continue;
        }
        if is_move_geometrically_legal(game_state, mover, mv.piece, from, mv.to, mv.capture) {
            return Some(from);
        }
    }

    None
}

fn apply_piece_move(game_state: &GameState, from: Square, mv: &SanPieceMove) -> GameState {
    let mover = game_state.side_to_move;
    let to = mv.to;
    let mut next = game_state.clone();

    next.remove_piece(from);

    let mut captured = false;
    if mv.piece == PieceKind::Pawn
        && mv.capture
        && game_state.en_passant_square == Some(to)
        && game_state.is_empty(to)
    {
        // The captured pawn sits beside the origin, on the destination file.
        next.remove_piece(make_square(square_file(to), square_rank(from)));
        captured = true;
    } else if next.remove_piece(to).is_some() {
        captured = true;
    }

    // Landing on a rook corner removes that corner's right, covering rook captures.
    if let Some(flag) = castling_flag_for_corner(to) {
        next.castling_rights &= !flag;
    }
    match mv.piece {
        PieceKind::King => next.castling_rights &= !mover.castling_mask(),
        PieceKind::Rook => {
            if let Some(flag) = castling_flag_for_corner(from) {
                next.castling_rights &= !flag;
            }
        }
        _ => {}
    }

    let placed = match (mv.piece, mv.promotion) {
        (PieceKind::Pawn, Some(promotion)) => promotion,
        (piece, _) => piece,
    };
    next.put_piece(to, mover, placed);

    let (from_rank, to_rank) = (square_rank(from), square_rank(to));
    next.en_passant_square = if mv.piece == PieceKind::Pawn && from_rank.abs_diff(to_rank) == 2 {
        Some(make_square(square_file(from), (from_rank + to_rank) / 2))
    } else {
        None
    };

    if captured || mv.piece == PieceKind::Pawn {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }

    next.switch_side();
    next
}

fn apply_castle(
    game_state: &GameState,
    side: CastleSide,
    token: &str,
) -> Result<GameState, PositionError> {
    let mover = game_state.side_to_move;
    let plan = castle_plan(mover, side);

    let king_home = game_state.piece_on_square(plan.king_from) == Some((mover, PieceKind::King));
    let rook_home = game_state.piece_on_square(plan.rook_from) == Some((mover, PieceKind::Rook));
    if !king_home || !rook_home {
        return Err(PositionError::UnresolvableOrigin(token.to_owned()));
    }

    let mut next = game_state.clone();
    next.remove_piece(plan.king_from);
    next.remove_piece(plan.rook_from);
    next.put_piece(plan.king_to, mover, PieceKind::King);
    next.put_piece(plan.rook_to, mover, PieceKind::Rook);

    next.castling_rights &= !mover.castling_mask();
    next.en_passant_square = None;
    next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    next.switch_side();

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::{apply_san, resolve_origin};
    use crate::errors::PositionError;
    use crate::game_state::chess_types::*;
    use crate::notation::san_parser::{parse_san, SanMove};
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::fen_parser::parse_fen;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn play(fen: &str, tokens: &[&str]) -> GameState {
        let mut game = parse_fen(fen).expect("FEN should parse");
        for token in tokens {
            game = apply_san(&game, token).expect("SAN should apply");
        }
        game
    }

    fn play_from_start(tokens: &[&str]) -> GameState {
        let mut game = GameState::new_game();
        for token in tokens {
            game = apply_san(&game, token).expect("SAN should apply");
        }
        game
    }

    #[test]
    fn opening_moves_update_clocks_and_counters() {
        let game = play_from_start(&["e4", "e5", "Nf3"]);
        assert_eq!(
            game.get_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );

        let game = play_from_start(&["e4"]);
        assert_eq!(
            game.get_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn castling_clears_only_movers_rights() {
        let game = play_from_start(&["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Bxc6", "dxc6", "O-O"]);
        assert_eq!(
            game.get_fen(),
            "r1bqkbnr/1pp2ppp/p1p5/4p3/4P3/5N2/PPPP1PPP/RNBQ1RK1 b kq - 1 5"
        );

        let long = play("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 3 20", &["O-O-O"]);
        assert_eq!(long.get_fen(), "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 4 21");
    }

    #[test]
    fn castling_without_pieces_on_home_squares_fails() {
        let game = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(
            apply_san(&game, "O-O"),
            Err(PositionError::UnresolvableOrigin("O-O".to_owned()))
        );
    }

    #[test]
    fn en_passant_removes_pawn_beside_origin() {
        let game = play("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1", &["d5"]);
        assert_eq!(game.en_passant_square, Some(sq("d6")));

        let after = apply_san(&game, "exd6").expect("en-passant should apply");
        assert_eq!(after.get_fen(), "4k3/8/3P4/8/8/8/8/4K3 b - - 0 2");
        assert!(after.is_empty(sq("d5")));
    }

    #[test]
    fn en_passant_target_clears_after_unrelated_move() {
        let game = play_from_start(&["e4", "Nf6"]);
        assert_eq!(game.en_passant_square, None);
        assert_eq!(game.halfmove_clock, 1);
    }

    #[test]
    fn promotion_places_promoted_piece_for_both_colors() {
        let light = play("7k/P7/8/8/8/8/8/K7 w - - 5 40", &["a8=Q"]);
        assert_eq!(light.get_fen(), "Q6k/8/8/8/8/8/8/K7 b - - 0 40");

        let dark = play("7k/8/8/8/8/8/p7/1N5K b - - 0 40", &["axb1N+"]);
        assert_eq!(dark.get_fen(), "7k/8/8/8/8/8/8/1n5K w - - 0 41");
    }

    #[test]
    fn capturing_rook_on_home_corner_drops_that_right() {
        let game = play("r3k2r/8/8/8/8/8/6b1/R3K2R b KQkq - 0 1", &["Bxh1"]);
        assert_eq!(
            game.castling_rights,
            CASTLE_LIGHT_QUEENSIDE | CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE
        );

        let rook_move = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", &["Rb1"]);
        assert_eq!(
            rook_move.castling_rights,
            CASTLE_LIGHT_KINGSIDE | CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE
        );

        let king_move = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", &["Kd1"]);
        assert_eq!(king_move.castling_rights, CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE);
    }

    #[test]
    fn disambiguators_pick_the_named_piece() {
        let fen = "4k3/8/8/8/8/8/8/R3K2R w - - 0 1";
        let by_file = play(fen, &["Rhf1"]);
        assert_eq!(by_file.piece_on_square(sq("f1")), Some((Color::Light, PieceKind::Rook)));
        assert!(by_file.is_empty(sq("h1")));
        assert!(!by_file.is_empty(sq("a1")));

        let ranks = "4k3/8/8/R7/8/8/8/R3K3 w - - 0 1";
        let by_rank = play(ranks, &["R5a3"]);
        assert!(by_rank.is_empty(sq("a5")));
        assert!(!by_rank.is_empty(sq("a1")));
    }

    #[test]
    fn resolution_skips_blocked_candidates() {
        let game = parse_fen("4k3/8/8/8/8/8/8/R2NK2R w - - 0 1").expect("FEN should parse");
        let SanMove::Piece(mv) = parse_san("Rf1").expect("SAN should parse") else {
            panic!("expected piece move");
        };
        assert_eq!(resolve_origin(&game, &mv), Some(sq("h1")));
    }

    #[test]
    fn unresolvable_move_leaves_state_untouched() {
        let game = play_from_start(&["e4"]);
        let before = game.clone();

        assert_eq!(
            apply_san(&game, "Nd5"),
            Err(PositionError::UnresolvableOrigin("Nd5".to_owned()))
        );
        assert_eq!(
            apply_san(&game, "e9e5"),
            Err(PositionError::MalformedToken("e9e5".to_owned()))
        );
        assert_eq!(game, before);
    }
}
