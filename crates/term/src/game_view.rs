//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The piece kind and orientation carried by each body segment drive the
//! glyph choice, so the classifier's output is directly visible on
//! screen: the head arrow points along the facing, corners render as a
//! joint, and the tail tapers.

use tui_snake_core::snapshot::{SegmentSnapshot, SessionSnapshot};
use tui_snake_types::PieceKind;

use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w: cell_w.max(1) }
    }

    /// Render the snapshot into an existing framebuffer.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid_px_w = snap.width * self.cell_w;
        let start_x = viewport.width.saturating_sub(grid_px_w) / 2;
        let start_y = viewport.height.saturating_sub(snap.height + 1) / 2;

        for y in 0..snap.height {
            for x in 0..snap.width {
                let code = match snap.cell_code(x, y) {
                    Some(code) => code,
                    None => continue,
                };
                let (ch, style) = match code {
                    1 => ('█', wall_style()),
                    3 => ('●', apple_style()),
                    2 => {
                        let seg = snap.segment_at(x as i32, y as i32);
                        (body_glyph(seg), body_style())
                    }
                    _ => (' ', CellStyle::default()),
                };
                fb.fill_rect(
                    start_x + x * self.cell_w,
                    start_y + y,
                    self.cell_w,
                    1,
                    ch,
                    style,
                );
            }
        }

        // Status line under the grid.
        let status = format!("score {}", snap.score);
        fb.put_str(start_x, start_y + snap.height, &status, CellStyle::default());

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, grid_px_w, snap.height, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        grid_px_w: u16,
        grid_h: u16,
        text: &str,
    ) {
        let x = start_x + grid_px_w.saturating_sub(text.len() as u16) / 2;
        let y = start_y + grid_h / 2;
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(120, 0, 0),
            bold: true,
        };
        fb.put_str(x, y, text, style);
    }
}

/// Glyph for a body segment, picked from its classification.
fn body_glyph(seg: Option<&SegmentSnapshot>) -> char {
    let Some(seg) = seg else {
        return '█';
    };
    match seg.piece {
        PieceKind::Head => match seg.orientation {
            0 => '▲',
            90 => '◀',
            180 => '▼',
            _ => '▶',
        },
        PieceKind::Tail => '▪',
        PieceKind::Turn => '◩',
        PieceKind::Straight => match seg.orientation {
            0 | 180 => '┃',
            _ => '━',
        },
    }
}

fn wall_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(130, 130, 130),
        bg: Rgb::new(0, 0, 0),
        bold: false,
    }
}

fn apple_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(220, 40, 40),
        bg: Rgb::new(0, 0, 0),
        bold: true,
    }
}

fn body_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(60, 200, 60),
        bg: Rgb::new(0, 0, 0),
        bold: false,
    }
}
