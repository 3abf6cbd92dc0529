//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices, reused by the SAN parser, FEN codec and answer checker.

use crate::errors::PositionError;
use crate::game_state::chess_types::{make_square, Square};

/// File index (`0..=7`) for a file letter `a..=h`.
#[inline]
pub fn file_from_char(ch: char) -> Option<u8> {
    ('a'..='h').contains(&ch).then(|| ch as u8 - b'a')
}

/// Rank index (`0..=7`) for a rank digit `1..=8`.
#[inline]
pub fn rank_from_char(ch: char) -> Option<u8> {
    ('1'..='8').contains(&ch).then(|| ch as u8 - b'1')
}

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, PositionError> {
    let mut chars = square.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(f), Some(r), None) => match (file_from_char(f), rank_from_char(r)) {
            (Some(file), Some(rank)) => Ok(make_square(file, rank)),
            _ => Err(PositionError::InvalidSquare(square.to_owned())),
        },
        _ => Err(PositionError::InvalidSquare(square.to_owned())),
    }
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, PositionError> {
    if square > 63 {
        return Err(PositionError::InvalidSquare(square.to_string()));
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);

    Ok(format!("{file_char}{rank_char}"))
}
