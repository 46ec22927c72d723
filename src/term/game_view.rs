//! GameView: maps engine state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameEngine, Grid};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};

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

/// Frontend state shown around the board, owned by the game loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    /// Best score this session.
    pub best: u32,
    /// One-line transient message (achievements, "nothing to undo").
    pub notice: Option<&'a str>,
    pub show_won: bool,
    pub show_over: bool,
}

/// Renders the board and HUD into a framebuffer.
pub struct GameView {
    /// Tile width in terminal columns (wide enough for a 4-digit value).
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 6,
            cell_h: 2,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the live game plus HUD.
    pub fn render(&self, engine: &GameEngine, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let size = engine.size() as u16;
        let frame_w = size * self.cell_w + 2;
        let frame_h = size * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border_style());
        self.draw_grid(&mut fb, engine.grid(), start_x + 1, start_y + 1);

        self.draw_side_panel(&mut fb, engine, hud, viewport, start_x, start_y, frame_w);

        if hud.show_won {
            self.draw_overlay(
                &mut fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "YOU WIN",
                "ENTER KEEP PLAYING",
            );
        } else if hud.show_over {
            self.draw_overlay(
                &mut fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                "GAME OVER",
                "U UNDO  R NEW  M MENU",
            );
        }

        fb
    }

    /// Render the size-selection menu around a cosmetic preview board.
    pub fn render_menu(&self, preview: &Grid, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let size = preview.size() as u16;
        let frame_w = size * self.cell_w + 2;
        let frame_h = size * self.cell_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 6) / 2 + 2;

        let title = "2048";
        let title_x = viewport.width.saturating_sub(title.len() as u16) / 2;
        fb.put_str(title_x, start_y.saturating_sub(2), title, label_style());

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border_style());
        self.draw_grid(&mut fb, preview, start_x + 1, start_y + 1);

        let lines = [
            format!("BOARD {0} x {0}  (PRESS 3-8)", preview.size()),
            "ENTER START   Q QUIT".to_string(),
        ];
        for (i, line) in lines.iter().enumerate() {
            let x = viewport.width.saturating_sub(line.chars().count() as u16) / 2;
            let y = start_y + frame_h + 1 + i as u16;
            fb.put_str(x, y, line, value_style());
        }

        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, grid: &Grid, origin_x: u16, origin_y: u16) {
        let size = grid.size();
        for row in 0..size {
            for col in 0..size {
                let value = grid.get(row, col);
                let style = tile_style(value);
                let px = origin_x + (col as u16) * self.cell_w;
                let py = origin_y + (row as u16) * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

                let text = if value == 0 {
                    format!("{:^1$}", "\u{b7}", self.cell_w as usize)
                } else {
                    format!("{:^1$}", value, self.cell_w as usize)
                };
                let text_y = py + (self.cell_h - 1) / 2;
                fb.put_str(px, text_y, &text, style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '\u{250c}', style);
        fb.put_char(x + w - 1, y, '\u{2510}', style);
        fb.put_char(x, y + h - 1, '\u{2514}', style);
        fb.put_char(x + w - 1, y + h - 1, '\u{2518}', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '\u{2500}', style);
            fb.put_char(x + dx, y + h - 1, '\u{2500}', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '\u{2502}', style);
            fb.put_char(x + w - 1, y + dy, '\u{2502}', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        engine: &GameEngine,
        hud: &Hud,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label_style());
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &engine.score().to_string(), value_style());
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label_style());
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &hud.best.to_string(), value_style());
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "REACHED", label_style());
        y = y.saturating_add(1);
        let achieved: Vec<String> = engine
            .achieved_numbers()
            .iter()
            .rev()
            .take(4)
            .map(u32::to_string)
            .collect();
        let achieved_line = if achieved.is_empty() {
            "-".to_string()
        } else {
            achieved.join(" ")
        };
        fb.put_str(panel_x, y, &achieved_line, value_style());
        y = y.saturating_add(2);

        for line in ["ARROWS MOVE", "U UNDO", "R NEW GAME", "M MENU", "Q QUIT"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, value_style());
            y = y.saturating_add(1);
        }

        if let Some(notice) = hud.notice {
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, notice, notice_style());
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        headline: &str,
        hint: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        for (dy, text) in [(0u16, headline), (1, hint)] {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y.saturating_sub(1).saturating_add(dy), text, overlay_style());
        }
    }
}

fn label_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(230, 225, 215),
        bg: Rgb::new(20, 18, 16),
        bold: true,
    }
}

fn value_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(190, 185, 175),
        bg: Rgb::new(20, 18, 16),
        bold: false,
    }
}

fn notice_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(240, 200, 80),
        bg: Rgb::new(20, 18, 16),
        bold: true,
    }
}

fn border_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(130, 120, 110),
        bg: Rgb::new(20, 18, 16),
        bold: false,
    }
}

fn overlay_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(255, 255, 255),
        bg: Rgb::new(120, 60, 30),
        bold: true,
    }
}

/// Classic 2048 tile palette, dark text on light tiles up to 4.
fn tile_style(value: u32) -> CellStyle {
    let dark_text = Rgb::new(119, 110, 101);
    let light_text = Rgb::new(249, 246, 242);
    let (fg, bg) = match value {
        0 => (Rgb::new(100, 92, 84), Rgb::new(55, 50, 45)),
        2 => (dark_text, Rgb::new(238, 228, 218)),
        4 => (dark_text, Rgb::new(237, 224, 200)),
        8 => (light_text, Rgb::new(242, 177, 121)),
        16 => (light_text, Rgb::new(245, 149, 99)),
        32 => (light_text, Rgb::new(246, 124, 95)),
        64 => (light_text, Rgb::new(246, 94, 59)),
        128 => (light_text, Rgb::new(237, 207, 114)),
        256 => (light_text, Rgb::new(237, 204, 97)),
        512 => (light_text, Rgb::new(237, 200, 80)),
        1024 => (light_text, Rgb::new(237, 197, 63)),
        2048 => (light_text, Rgb::new(237, 194, 46)),
        _ => (light_text, Rgb::new(60, 58, 50)),
    };
    CellStyle {
        fg,
        bg,
        bold: value >= 8,
    }
}
