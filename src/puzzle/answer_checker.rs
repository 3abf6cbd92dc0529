//! Checks chat answers against a puzzle solution.
//!
//! Answers and solutions use coordinate notation (`e2e4`, `e7e8q`): origin
//! square, destination square and an optional lowercase promotion letter.
//! This is a different notation from the SAN movetext replayed by
//! `position_builder` and is never routed through the SAN parser.

use crate::utils::algebraic::algebraic_to_square;

pub const USAGE_HINT: &str = "Send moves like: f3g3 or f3g3 f2g3";

/// Outcome of checking a (possibly partial) move sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerCheck {
    pub correct: bool,
    pub completed: bool,
    pub message: &'static str,
}

/// Outcome of checking a single move against the one expected this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnCheck {
    pub correct: bool,
    pub played: Option<String>,
    pub message: &'static str,
}

/// Extract coordinate moves from free-form chat text.
///
/// Tokens are split on whitespace, commas and semicolons; characters that
/// cannot appear in a coordinate move are dropped before matching.
pub fn parse_coordinate_moves(input: &str) -> Vec<String> {
    input
        .to_ascii_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .map(|token| {
            token
                .chars()
                .filter(|c| matches!(c, 'a'..='h' | '1'..='8' | 'q' | 'r' | 'n'))
                .collect::<String>()
        })
        .filter(|token| is_coordinate_move(token))
        .collect()
}

/// `[a-h][1-8][a-h][1-8][qrbn]?`
pub fn is_coordinate_move(token: &str) -> bool {
    let squares_ok = token.len() >= 4
        && token.is_char_boundary(4)
        && algebraic_to_square(&token[0..2]).is_ok()
        && algebraic_to_square(&token[2..4]).is_ok();

    match token.len() {
        4 => squares_ok,
        5 => squares_ok && matches!(token.as_bytes()[4], b'q' | b'r' | b'b' | b'n'),
        _ => false,
    }
}

/// Compare the moves in `input` with the start of `solution`.
pub fn check_answer<S: AsRef<str>>(input: &str, solution: &[S]) -> AnswerCheck {
    let moves = parse_coordinate_moves(input);
    if moves.is_empty() {
        return AnswerCheck {
            correct: false,
            completed: false,
            message: USAGE_HINT,
        };
    }

    let prefix_match = moves.len() <= solution.len()
        && moves
            .iter()
            .zip(solution)
            .all(|(played, expected)| played.as_str() == expected.as_ref().to_ascii_lowercase());

    if !prefix_match {
        return AnswerCheck {
            correct: false,
            completed: false,
            message: "Wrong move sequence.",
        };
    }

    let completed = moves.len() == solution.len();
    let message = if completed {
        "Correct sequence."
    } else if moves.len() == 1 {
        "Correct first move. Send next move."
    } else {
        "Correct so far. Send next move."
    };

    AnswerCheck {
        correct: true,
        completed,
        message,
    }
}

/// Check the first move in `input` against `expected`.
pub fn check_turn(input: &str, expected: &str) -> TurnCheck {
    let Some(played) = parse_coordinate_moves(input).into_iter().next() else {
        return TurnCheck {
            correct: false,
            played: None,
            message: USAGE_HINT,
        };
    };

    let correct = played == expected.to_ascii_lowercase();
    TurnCheck {
        correct,
        played: Some(played),
        message: if correct { "Correct move." } else { "Wrong move." },
    }
}
