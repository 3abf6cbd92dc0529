//! Canonical chess-rule constants.
//!
//! Starting layout, rook home corners and castling destinations used when the
//! board state seeds itself and when it applies castling or updates rights.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const A1: Square = 0;
pub const E1: Square = 4;
pub const H1: Square = 7;
pub const A8: Square = 56;
pub const E8: Square = 60;
pub const H8: Square = 63;

/// Rook home corners paired with the castling flag each one guards.
pub const ROOK_HOME_CORNERS: [(Square, CastlingRights); 4] = [
    (A1, CASTLE_LIGHT_QUEENSIDE),
    (H1, CASTLE_LIGHT_KINGSIDE),
    (A8, CASTLE_DARK_QUEENSIDE),
    (H8, CASTLE_DARK_KINGSIDE),
];

/// Castling flag guarded by a rook standing on `square`, if it is a home corner.
#[inline]
pub fn castling_flag_for_corner(square: Square) -> Option<CastlingRights> {
    ROOK_HOME_CORNERS
        .iter()
        .find(|(corner, _)| *corner == square)
        .map(|(_, flag)| *flag)
}

/// Which wing a castling move goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// King and rook relocation for one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePlan {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
}

/// Squares touched by castling for `color` towards `side`.
pub const fn castle_plan(color: Color, side: CastleSide) -> CastlePlan {
    let rank = color.home_rank();
    match side {
        CastleSide::Kingside => CastlePlan {
            king_from: make_square(4, rank),
            king_to: make_square(6, rank),
            rook_from: make_square(7, rank),
            rook_to: make_square(5, rank),
        },
        CastleSide::Queenside => CastlePlan {
            king_from: make_square(4, rank),
            king_to: make_square(2, rank),
            rook_from: make_square(0, rank),
            rook_to: make_square(3, rank),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn castle_plans_match_standard_squares() {
        let light_short = castle_plan(Color::Light, CastleSide::Kingside);
        assert_eq!(light_short.king_from, E1);
        assert_eq!(light_short.king_to, 6);
        assert_eq!(light_short.rook_from, H1);
        assert_eq!(light_short.rook_to, 5);

        let dark_long = castle_plan(Color::Dark, CastleSide::Queenside);
        assert_eq!(dark_long.king_from, E8);
        assert_eq!(dark_long.king_to, 58);
        assert_eq!(dark_long.rook_from, A8);
        assert_eq!(dark_long.rook_to, 59);
    }

    #[test]
    fn only_corners_guard_castling_flags() {
        assert_eq!(castling_flag_for_corner(H8), Some(CASTLE_DARK_KINGSIDE));
        assert_eq!(castling_flag_for_corner(A1), Some(CASTLE_LIGHT_QUEENSIDE));
        assert_eq!(castling_flag_for_corner(E1), None);
    }
}
