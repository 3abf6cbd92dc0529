//! Per-piece movement geometry.
//!
//! Decides whether a piece standing on `from` could reach `to` in one move
//! under basic movement rules and the current occupancy. There is no check
//! or pin detection here: the movetext being replayed is assumed legal, and
//! this predicate only has to single out the piece a SAN token refers to.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Whether `mover`'s `piece` on `from` can move to `to`.
///
/// `capture` is the SAN capture flag: a capture must land on an enemy piece
/// (or on the en-passant target for pawns), a quiet move on an empty square.
pub fn is_move_geometrically_legal(
    game_state: &GameState,
    mover: Color,
    piece: PieceKind,
    from: Square,
    to: Square,
    capture: bool,
) -> bool {
    if from == to {
        return false;
    }

    match game_state.piece_on_square(to) {
        Some((color, _)) if color == mover => return false,
        Some(_) if !capture => return false,
        None if capture => {
            let en_passant_capture =
                piece == PieceKind::Pawn && game_state.en_passant_square == Some(to);
            if !en_passant_capture {
                return false;
            }
        }
        _ => {}
    }

    match piece {
        PieceKind::Pawn => pawn_reaches(game_state, mover, from, to, capture),
        PieceKind::Knight => knight_reaches(from, to),
        PieceKind::Bishop => bishop_reaches(game_state, from, to),
        PieceKind::Rook => rook_reaches(game_state, from, to),
        PieceKind::Queen => {
            bishop_reaches(game_state, from, to) || rook_reaches(game_state, from, to)
        }
        PieceKind::King => king_reaches(from, to),
    }
}

#[inline]
fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        square_file(to) as i8 - square_file(from) as i8,
        square_rank(to) as i8 - square_rank(from) as i8,
    )
}

fn pawn_reaches(
    game_state: &GameState,
    mover: Color,
    from: Square,
    to: Square,
    capture: bool,
) -> bool {
    let (d_file, d_rank) = deltas(from, to);
    let dir = mover.pawn_direction();

    if capture {
        return d_file.abs() == 1 && d_rank == dir;
    }
    if d_file != 0 {
        return false;
    }
    if d_rank == dir {
        return true;
    }

    d_rank == 2 * dir
        && square_rank(from) == mover.pawn_start_rank()
        && offset_square(from, 0, dir).is_some_and(|middle| game_state.is_empty(middle))
}

fn knight_reaches(from: Square, to: Square) -> bool {
    let (d_file, d_rank) = deltas(from, to);
    matches!((d_file.abs(), d_rank.abs()), (1, 2) | (2, 1))
}

fn bishop_reaches(game_state: &GameState, from: Square, to: Square) -> bool {
    let (d_file, d_rank) = deltas(from, to);
    d_file.abs() == d_rank.abs() && path_clear(game_state, from, to)
}

fn rook_reaches(game_state: &GameState, from: Square, to: Square) -> bool {
    let (d_file, d_rank) = deltas(from, to);
    (d_file == 0 || d_rank == 0) && path_clear(game_state, from, to)
}

fn king_reaches(from: Square, to: Square) -> bool {
    let (d_file, d_rank) = deltas(from, to);
    d_file.abs() <= 1 && d_rank.abs() <= 1
}

/// Every square strictly between `from` and `to` is empty.
///
/// Callers guarantee the two squares share a file, rank or diagonal.
fn path_clear(game_state: &GameState, from: Square, to: Square) -> bool {
    let (d_file, d_rank) = deltas(from, to);
    let (step_file, step_rank) = (d_file.signum(), d_rank.signum());

    let mut current = offset_square(from, step_file, step_rank);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !game_state.is_empty(square) {
            return false;
        }
        current = offset_square(square, step_file, step_rank);
    }

    false
}
