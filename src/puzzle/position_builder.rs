//! Movetext replay: from PGN-style move text and a ply count to a FEN string.
//!
//! Tag pairs, comments, variations, NAGs, move numbers and result markers are
//! stripped; the surviving SAN tokens are replayed in order on a fresh
//! `GameState` and the reached position is encoded.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::errors::PositionError;
use crate::game_state::game_state::GameState;
use crate::move_application::san_apply::apply_san;
use crate::puzzle::puzzle_position::PuzzlePosition;

/// Movetext split into its parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Movetext {
    pub headers: BTreeMap<String, String>,
    pub san_moves: Vec<String>,
    pub result: Option<String>,
}

impl Movetext {
    /// Position replay starts from: the `FEN` tag pair when `SetUp` is `1`,
    /// the standard starting array otherwise.
    pub fn initial_state(&self) -> Result<GameState, PositionError> {
        if self.headers.get("SetUp").map(String::as_str) == Some("1") {
            let fen = self
                .headers
                .get("FEN")
                .ok_or(PositionError::MissingSetupFen)?;
            GameState::from_fen(fen)
        } else {
            Ok(GameState::new_game())
        }
    }
}

pub fn parse_movetext(movetext: &str) -> Result<Movetext, PositionError> {
    let mut parsed = Movetext::default();
    let mut body_lines = Vec::<&str>::new();

    for line in movetext.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            let (key, value) = parse_header_line(trimmed)?;
            parsed.headers.insert(key, value);
        } else if !trimmed.is_empty() {
            body_lines.push(trimmed);
        }
    }

    let body = strip_comments_and_variations(&body_lines.join("\n"));
    for raw in body.split_whitespace() {
        let token = strip_move_number(raw);
        if token.is_empty() || token.starts_with('$') {
            continue;
        }
        if is_result_token(token) {
            parsed.result = Some(token.to_owned());
            break;
        }
        parsed.san_moves.push(token.to_owned());
    }

    Ok(parsed)
}

/// SAN tokens of `movetext`, in order.
pub fn extract_san_moves(movetext: &str) -> Result<Vec<String>, PositionError> {
    parse_movetext(movetext).map(|parsed| parsed.san_moves)
}

/// Apply `san_moves` in order to `initial_state`.
pub fn replay_san_moves<S: AsRef<str>>(
    initial_state: &GameState,
    san_moves: &[S],
) -> Result<GameState, PositionError> {
    san_moves
        .iter()
        .enumerate()
        .try_fold(initial_state.clone(), |state, (index, token)| {
            let token = token.as_ref();
            let next = apply_san(&state, token).inspect_err(|err| {
                warn!(ply = index + 1, token, error = %err, "failed to apply SAN move");
            })?;
            debug!(
                ply = index + 1,
                token,
                side_to_move = %next.side_to_move.fen_char(),
                "applied SAN move"
            );
            Ok(next)
        })
}

/// FEN of the position reached after the first `ply_count` moves of `movetext`.
pub fn build_position(movetext: &str, ply_count: usize) -> Result<String, PositionError> {
    let parsed = parse_movetext(movetext)?;
    let available = parsed.san_moves.len();
    if ply_count > available {
        return Err(PositionError::PlyCountExceedsMoves {
            requested: ply_count,
            available,
        });
    }

    let initial_state = parsed.initial_state()?;
    let state = replay_san_moves(&initial_state, &parsed.san_moves[..ply_count])?;
    Ok(state.get_fen())
}

/// Position shown for a puzzle whose zero-based `initial_ply` names the last
/// move already played: `initial_ply + 1` plies are applied, so the side to
/// move is the one that has to find the solution.
pub fn build_puzzle_position(
    pgn: &str,
    initial_ply: usize,
) -> Result<PuzzlePosition, PositionError> {
    // Saturates so an out-of-range index is reported as too many plies.
    let plies = initial_ply.saturating_add(1);
    let fen = build_position(pgn, plies)?;
    debug!(initial_ply, %fen, "built puzzle position");
    Ok(PuzzlePosition::new(fen, plies))
}

fn parse_header_line(line: &str) -> Result<(String, String), PositionError> {
    let invalid = || PositionError::InvalidHeader(line.to_owned());

    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(invalid)?;
    let (key, value_raw) = inner.trim().split_once(' ').ok_or_else(invalid)?;
    let value = value_raw
        .trim()
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(invalid)?;

    Ok((key.to_owned(), value.replace("\\\"", "\"")))
}

fn strip_comments_and_variations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;
    let mut in_line_comment = false;

    for ch in text.chars() {
        if in_line_comment {
            if ch == '\n' {
                in_line_comment = false;
                out.push(' ');
            }
            continue;
        }

        match ch {
            ';' if brace_depth == 0 => in_line_comment = true,
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => {
                brace_depth = brace_depth.saturating_sub(1);
                out.push(' ');
            }
            '(' if brace_depth == 0 => paren_depth = paren_depth.saturating_add(1),
            ')' if brace_depth == 0 => {
                paren_depth = paren_depth.saturating_sub(1);
                out.push(' ');
            }
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

/// Drop a leading move number (`12.`, `12...`), keeping a move glued to it.
fn strip_move_number(token: &str) -> &str {
    let digits = token.len() - token.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return token;
    }

    let after_digits = &token[digits..];
    if after_digits.starts_with('.') {
        after_digits.trim_start_matches('.')
    } else {
        token
    }
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}
