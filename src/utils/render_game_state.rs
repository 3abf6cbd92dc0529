//! Terminal-oriented Unicode board renderer.
//!
//! Text view of a replayed position for the CLI `--board` flag and for
//! eyeballing failures in tests. Can be drawn from either side.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string, White at the bottom unless `flip`.
pub fn render_game_state(game_state: &GameState, flip: bool) -> String {
    let ranks: Vec<u8> = if flip { (0..8).collect() } else { (0..8).rev().collect() };
    let files: Vec<u8> = if flip { (0..8).rev().collect() } else { (0..8).collect() };

    let file_labels: String = files
        .iter()
        .map(|file| char::from(b'a' + file))
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = format!("  {file_labels}\n");

    for rank in &ranks {
        let rank_label = char::from(b'1' + rank);
        let row: Vec<String> = files
            .iter()
            .map(|file| {
                game_state
                    .piece_on_square(make_square(*file, *rank))
                    .map_or('·', |(color, piece)| piece_to_unicode(color, piece))
                    .to_string()
            })
            .collect();
        out.push_str(&format!("{rank_label} {} {rank_label}\n", row.join(" ")));
    }

    out.push_str(&format!("  {file_labels}"));
    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
