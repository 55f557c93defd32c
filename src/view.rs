//! Maps engine state to the glyphs a front end draws.
//!
//! Kept free of any UI framework on purpose: a screen renders one glyph
//! per cell, the mines-remaining readout, and a face that doubles as the
//! new-game button.

use crate::{CellState, Coord2, Game, GameStatus};

pub const FLAG_GLYPH: &str = "🚩";
pub const MINE_GLYPH: &str = "💣";
pub const EXPLOSION_GLYPH: &str = "💥";

/// Glyph for one cell as the player sees it mid-game.
pub const fn cell_glyph(cell: CellState) -> &'static str {
    use CellState::*;
    match cell {
        Hidden => " ",
        Flagged => FLAG_GLYPH,
        Exploded => EXPLOSION_GLYPH,
        Revealed(0) => " ",
        Revealed(1) => "1",
        Revealed(2) => "2",
        Revealed(3) => "3",
        Revealed(4) => "4",
        Revealed(5) => "5",
        Revealed(6) => "6",
        Revealed(7) => "7",
        // adjacency counts cannot exceed 8
        Revealed(_) => "8",
    }
}

/// Glyph for one cell taking the game result into account: after a loss
/// the unflagged mines are shown.
pub fn board_glyph(game: &Game, coords: Coord2) -> &'static str {
    let cell = game.cell_at(coords);
    if game.status() == GameStatus::Lost && cell == CellState::Hidden && game.has_mine_at(coords) {
        MINE_GLYPH
    } else {
        cell_glyph(cell)
    }
}

/// Face shown on the new-game button.
pub const fn face_glyph(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Ongoing => "😊",
        GameStatus::Won => "😎",
        GameStatus::Lost => "😢",
    }
}

/// Whole-board text rendering, one row per line. Used by terminal front
/// ends and test diagnostics.
pub fn render_board(game: &Game) -> String {
    let (rows, cols) = game.size();
    let mut out = String::new();
    for row in 0..rows {
        for col in 0..cols {
            out.push_str(board_glyph(game, (row, col)));
        }
        out.push('\n');
    }
    out
}
