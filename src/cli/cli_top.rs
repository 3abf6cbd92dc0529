//! Command-line front-end.
//!
//! One-shot mode prints the FEN for movetext given as arguments; otherwise
//! each stdin line `<ply> <movetext>` is answered with one FEN line (or an
//! `error:` line) on stdout. Diagnostics go through `tracing` to stderr.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::cli::cli_config::{CliConfig, PlySelection};
use crate::errors::PositionError;
use crate::game_state::chess_types::Color;
use crate::puzzle::position_builder::{build_position, extract_san_moves};
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

pub fn run(config: &CliConfig) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.movetext() {
        Some(movetext) => {
            let result = answer_request(&movetext, config.ply, config.show_board);
            write_answer(&mut out, result)?;
        }
        None => run_stdio_loop(config, io::stdin().lock(), &mut out)?,
    }

    out.flush()
}

pub fn run_stdio_loop(
    config: &CliConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "quit" {
            break;
        }

        let result = match split_request_line(trimmed) {
            Some((plies, movetext)) => {
                answer_request(movetext, Some(PlySelection::Plies(plies)), config.show_board)
            }
            None => answer_request(trimmed, config.ply, config.show_board),
        };
        write_answer(out, result)?;
        out.flush()?;
    }

    Ok(())
}

/// FEN (and optional board drawing) for one request.
pub fn answer_request(
    movetext: &str,
    ply: Option<PlySelection>,
    show_board: bool,
) -> Result<String, PositionError> {
    let plies = match ply {
        Some(selection) => selection.plies_to_apply(),
        None => extract_san_moves(movetext)?.len(),
    };

    let fen = build_position(movetext, plies)?;
    info!(plies, %fen, "position built");

    if !show_board {
        return Ok(fen);
    }

    let state = parse_fen(&fen)?;
    let flip = state.side_to_move == Color::Dark;
    Ok(format!("{fen}\n{}", render_game_state(&state, flip)))
}

/// `<ply> <movetext>` where the first token is a plain number.
fn split_request_line(line: &str) -> Option<(usize, &str)> {
    let (head, rest) = line.split_once(char::is_whitespace)?;
    let plies = head.parse::<usize>().ok()?;
    Some((plies, rest.trim_start()))
}

fn write_answer(out: &mut impl Write, result: Result<String, PositionError>) -> io::Result<()> {
    match result {
        Ok(answer) => writeln!(out, "{answer}"),
        Err(err) => {
            warn!(error = %err, "request failed");
            writeln!(out, "error: {err}")
        }
    }
}
