//! Standard Algebraic Notation (SAN) token parsing.
//!
//! SAN examples: `e4`, `Nf3`, `Bxe5`, `Raxd1`, `O-O`, `e8=Q`, `exd8N`.
//!
//! Parsing is purely syntactic. Which piece actually moves is decided later
//! against a concrete position by `move_application::san_apply`.

use crate::errors::PositionError;
use crate::game_state::chess_rules::CastleSide;
use crate::game_state::chess_types::{make_square, PieceKind, Square};
use crate::utils::algebraic::{file_from_char, rank_from_char};

/// A non-castling SAN move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanPieceMove {
    pub piece: PieceKind,
    /// Origin file disambiguator (`0..=7`).
    pub from_file: Option<u8>,
    /// Origin rank disambiguator (`0..=7`).
    pub from_rank: Option<u8>,
    pub capture: bool,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

/// One parsed SAN token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanMove {
    Castle(CastleSide),
    Piece(SanPieceMove),
}

/// Strip surrounding whitespace and trailing check/mate/annotation marks.
pub fn normalize_san_token(token: &str) -> &str {
    token
        .trim()
        .trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'))
}

/// Parse a single SAN token.
///
/// The token is normalized first, so `Qxf7#` and `e4!?` are accepted.
pub fn parse_san(token: &str) -> Result<SanMove, PositionError> {
    let san = normalize_san_token(token);

    match san {
        "O-O" | "0-0" => return Ok(SanMove::Castle(CastleSide::Kingside)),
        "O-O-O" | "0-0-0" => return Ok(SanMove::Castle(CastleSide::Queenside)),
        _ => {}
    }

    parse_piece_move(san)
        .map(SanMove::Piece)
        .ok_or_else(|| PositionError::MalformedToken(token.to_owned()))
}

/// Match `[KQRBN]? [a-h]? [1-8]? x? [a-h][1-8] (=?[QRBN])?` against the whole token.
fn parse_piece_move(san: &str) -> Option<SanPieceMove> {
    let chars: Vec<char> = san.chars().collect();
    let mut end = chars.len();

    // Promotion suffix.
    let mut promotion = None;
    if let Some(&last) = chars.last() {
        if matches!(last, 'Q' | 'R' | 'B' | 'N') {
            promotion = PieceKind::from_letter(last);
            end -= 1;
            if end > 0 && chars[end - 1] == '=' {
                end -= 1;
            }
        }
    }

    // Destination square.
    if end < 2 {
        return None;
    }
    let to_file = file_from_char(chars[end - 2])?;
    let to_rank = rank_from_char(chars[end - 1])?;
    let to = make_square(to_file, to_rank);

    // Prefix: piece letter, origin file, origin rank, capture marker, in that order.
    let mut prefix = chars[..end - 2].iter().copied().peekable();

    let piece = match prefix.peek() {
        Some(&ch) if matches!(ch, 'K' | 'Q' | 'R' | 'B' | 'N') => {
            prefix.next();
            PieceKind::from_letter(ch)?
        }
        _ => PieceKind::Pawn,
    };

    let from_file = prefix.next_if(|ch| file_from_char(*ch).is_some()).and_then(file_from_char);
    let from_rank = prefix.next_if(|ch| rank_from_char(*ch).is_some()).and_then(rank_from_char);
    let capture = prefix.next_if_eq(&'x').is_some();

    if prefix.next().is_some() {
        return None;
    }

    Some(SanPieceMove {
        piece,
        from_file,
        from_rank,
        capture,
        to,
        promotion,
    })
}

#[cfg(test)]
mod tests {
    use super::{normalize_san_token, parse_san, SanMove, SanPieceMove};
    use crate::errors::PositionError;
    use crate::game_state::chess_rules::CastleSide;
    use crate::game_state::chess_types::PieceKind;
    use crate::utils::algebraic::algebraic_to_square;

    fn piece_move(token: &str) -> SanPieceMove {
        match parse_san(token).expect("SAN should parse") {
            SanMove::Piece(mv) => mv,
            other => panic!("expected piece move for {token}, got {other:?}"),
        }
    }

    fn sq(name: &str) -> u8 {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn parses_pawn_push_and_piece_move() {
        let push = piece_move("e4");
        assert_eq!(push.piece, PieceKind::Pawn);
        assert_eq!(push.to, sq("e4"));
        assert_eq!((push.from_file, push.from_rank), (None, None));
        assert!(!push.capture);

        let knight = piece_move("Nf3");
        assert_eq!(knight.piece, PieceKind::Knight);
        assert_eq!(knight.to, sq("f3"));
    }

    #[test]
    fn parses_disambiguators_and_captures() {
        let pawn_capture = piece_move("exd5");
        assert_eq!(pawn_capture.piece, PieceKind::Pawn);
        assert_eq!(pawn_capture.from_file, Some(4));
        assert!(pawn_capture.capture);
        assert_eq!(pawn_capture.to, sq("d5"));

        let rook = piece_move("R1a3");
        assert_eq!(rook.from_file, None);
        assert_eq!(rook.from_rank, Some(0));

        let queen = piece_move("Qh4xe1");
        assert_eq!(queen.from_file, Some(7));
        assert_eq!(queen.from_rank, Some(3));
        assert!(queen.capture);
        assert_eq!(queen.to, sq("e1"));
    }

    #[test]
    fn parses_promotion_with_and_without_equals() {
        let with_equals = piece_move("e8=Q");
        assert_eq!(with_equals.promotion, Some(PieceKind::Queen));
        assert_eq!(with_equals.to, sq("e8"));

        let bare = piece_move("bxa1N+");
        assert_eq!(bare.promotion, Some(PieceKind::Knight));
        assert_eq!(bare.from_file, Some(1));
        assert!(bare.capture);
    }

    #[test]
    fn parses_castling_literals() {
        assert_eq!(
            parse_san("O-O").expect("short castle should parse"),
            SanMove::Castle(CastleSide::Kingside)
        );
        assert_eq!(
            parse_san("O-O-O#").expect("long castle should parse"),
            SanMove::Castle(CastleSide::Queenside)
        );
        assert_eq!(
            parse_san("0-0").expect("zero castle should parse"),
            SanMove::Castle(CastleSide::Kingside)
        );
    }

    #[test]
    fn strips_trailing_annotations_only() {
        assert_eq!(normalize_san_token(" Qxf7#! "), "Qxf7");
        assert_eq!(normalize_san_token("e4!?"), "e4");
    }

    #[test]
    fn rejects_malformed_tokens_with_offending_text() {
        for token in ["e9e5", "e9", "Zf3", "Nf", "", "x", "e4e", "Kxx4", "e8=", "Nf3g", "O-O-O-O"] {
            assert_eq!(
                parse_san(token),
                Err(PositionError::MalformedToken(token.to_owned())),
                "{token:?} should be malformed"
            );
        }
    }
}
