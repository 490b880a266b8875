//! GameView: maps a `core::Game` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Game, Grid, Position};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{FallingState, Tile};

const BACKGROUND: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const FLUX: Rgb = Rgb::from_hex(0xccffcc);
const UNBREAKABLE: Rgb = Rgb::from_hex(0x999999);
const STONE: Rgb = Rgb::from_hex(0x0000cc);
const BOX: Rgb = Rgb::from_hex(0x8b4513);
const PAIR1: Rgb = Rgb::from_hex(0xffcc00);
const PAIR2: Rgb = Rgb::from_hex(0x00ccff);
const PLAYER: Rgb = Rgb::from_hex(0xff0000);

/// Glyph drawn over the player cell.
pub const PLAYER_GLYPH: char = '@';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the grid.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left terminal cell of the grid for a given viewport.
    pub fn origin(&self, grid: &Grid, viewport: Viewport) -> (u16, u16) {
        let (w, h) = self.grid_extent(grid);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    fn grid_extent(&self, grid: &Grid) -> (u16, u16) {
        let w = (grid.width() as u16).saturating_mul(self.cell_w);
        let h = (grid.height() as u16).saturating_mul(self.cell_h);
        (w, h)
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::default(),
        });

        let grid = game.grid();
        let (start_x, start_y) = self.origin(grid, viewport);

        grid.for_each_cell(|pos, tile| {
            let (ch, style) = tile_glyph(tile);
            self.fill_tile(fb, start_x, start_y, pos, ch, style);
        });

        // Player highlight overlay.
        let player = CellStyle::new(Rgb::new(255, 255, 255), PLAYER).bold();
        self.fill_tile(fb, start_x, start_y, grid.player(), PLAYER_GLYPH, player);

        let (grid_w, grid_h) = self.grid_extent(grid);
        self.draw_side_panel(fb, game, viewport, start_x, start_y, grid_w);

        if game.paused() {
            self.draw_overlay_text(fb, start_x, start_y, grid_w, grid_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn fill_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        pos: Position,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x.saturating_add((pos.col as u16).saturating_mul(self.cell_w));
        let py = start_y.saturating_add((pos.row as u16).saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game: &Game,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        grid_w: u16,
    ) {
        let panel_x = start_x.saturating_add(grid_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let grid = game.grid();

        let mut y = start_y;
        fb.put_str(panel_x, y, "TICK", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, game.tick(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LOCKS", label);
        y = y.saturating_add(1);
        let pair1 = CellStyle::new(PAIR1, PANEL_BG);
        let pair2 = CellStyle::new(PAIR2, PANEL_BG);
        fb.put_str(panel_x, y, "1:", pair1);
        fb.put_u64(panel_x + 2, y, grid.count(Tile::Lock1) as u64, pair1);
        fb.put_str(panel_x + 6, y, "2:", pair2);
        fb.put_u64(panel_x + 8, y, grid.count(Tile::Lock2) as u64, pair2);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        for line in ["wasd move", "p pause", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, value);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        grid_w: u16,
        grid_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(grid_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(grid_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Glyph and style for one tile. Falling stones and boxes get their own glyph.
pub fn tile_glyph(tile: Tile) -> (char, CellStyle) {
    let on_bg = |fg: Rgb| CellStyle::new(fg, BACKGROUND);
    match tile {
        Tile::Air => (' ', on_bg(BACKGROUND)),
        Tile::Flux => ('░', on_bg(FLUX)),
        Tile::Unbreakable => ('█', on_bg(UNBREAKABLE)),
        Tile::Player => (PLAYER_GLYPH, on_bg(PLAYER)),
        Tile::Stone(FallingState::Resting) => ('●', on_bg(STONE).bold()),
        Tile::Stone(FallingState::Falling) => ('○', on_bg(STONE).dim()),
        Tile::Box(FallingState::Resting) => ('▣', on_bg(BOX).bold()),
        Tile::Box(FallingState::Falling) => ('□', on_bg(BOX).dim()),
        Tile::Key1 => ('♦', on_bg(PAIR1).bold()),
        Tile::Lock1 => ('▒', on_bg(PAIR1)),
        Tile::Key2 => ('♦', on_bg(PAIR2).bold()),
        Tile::Lock2 => ('▒', on_bg(PAIR2)),
    }
}
