//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so every layout rule here is unit-testable.

use crate::core::{GameSnapshot, Piece, Shape};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const GRID_LINE: Rgb = Rgb::new(30, 30, 30);
const GHOST: Rgb = Rgb::new(80, 80, 80);
const BORDER: Rgb = Rgb::new(200, 200, 200);
const TEXT: Rgb = Rgb::new(255, 255, 255);

const BLOCK: char = '█';
const GHOST_BLOCK: char = '░';
const EMPTY: char = '·';

/// Rows reserved for the held piece; a vertical I needs all four.
const HOLD_ROWS: u16 = 4;

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

/// Board frame position inside the viewport, in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Lays out the board, side panel and overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square on common terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Width and height of the bordered board.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::fg(TEXT)));

        let (w, h) = self.frame_size();
        let show_panel = snap.variant.shows_guides();
        // Center the board together with the panel when there is one.
        let total_w = if show_panel {
            w + 2 + self.panel_width()
        } else {
            w
        };
        let x = if total_w <= viewport.width {
            (viewport.width - total_w) / 2
        } else {
            viewport.width.saturating_sub(w) / 2
        };
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        let frame = Frame { x, y, w, h };

        self.draw_border(fb, frame);

        for row in 0..BOARD_HEIGHT as u16 {
            for col in 0..BOARD_WIDTH as u16 {
                match snap.grid[row as usize][col as usize] {
                    Some(kind) => self.fill_board_cell(fb, frame, col, row, BLOCK, kind_style(kind)),
                    None => {
                        self.fill_board_cell(fb, frame, col, row, EMPTY, CellStyle::fg(GRID_LINE))
                    }
                }
            }
        }

        if let Some(ghost) = snap.ghost.as_ref() {
            self.draw_piece(fb, frame, ghost, GHOST_BLOCK, CellStyle::fg(GHOST));
        }
        self.draw_piece(fb, frame, &snap.active, BLOCK, kind_style(snap.active.kind));

        if show_panel {
            self.draw_side_panel(fb, snap, viewport, frame);
        }

        if snap.game_over {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn panel_width(&self) -> u16 {
        // Widest content is a 4-cell shape or "Score: 999999".
        (4 * self.cell_w).max(13)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let style = CellStyle::fg(BORDER);
        let Frame { x, y, w, h } = frame;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Draw the on-board cells of a piece; rows above the top are skipped.
    fn draw_piece(&self, fb: &mut FrameBuffer, frame: Frame, piece: &Piece, ch: char, style: CellStyle) {
        for (x, y) in piece.cells() {
            if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                self.fill_board_cell(fb, frame, x as u16, y as u16, ch, style);
            }
        }
    }

    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        col: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + col * self.cell_w;
        let py = frame.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Draw a shape matrix with its top-left at (x, y), one board cell per block.
    fn draw_mini_shape(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape, kind: PieceKind) {
        let style = kind_style(kind);
        for (dx, dy) in shape.cells() {
            let px = x + dx as u16 * self.cell_w;
            let py = y + dy as u16 * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < self.panel_width() {
            return;
        }

        let label = CellStyle::fg(TEXT).bold();
        let value = CellStyle::fg(TEXT);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "HOLD", label);
        y += 1;
        if let Some(held) = snap.hold.as_ref() {
            // Shown in the orientation it was held in.
            self.draw_mini_shape(fb, panel_x, y, &held.shape, held.kind);
        }
        y += HOLD_ROWS * self.cell_h + 1;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        for &kind in snap.next_queue.iter() {
            let shape = Shape::of(kind);
            self.draw_mini_shape(fb, panel_x, y, &shape, kind);
            y += (shape.height() as u16 + 1) * self.cell_h;
        }

        let stats_y = (frame.y + frame.h).saturating_sub(4).max(y);
        for (i, (name, n)) in [("Score: ", snap.score), ("Lines: ", snap.lines), ("Level: ", snap.level)]
            .into_iter()
            .enumerate()
        {
            let row = stats_y + i as u16;
            fb.put_str(panel_x, row, name, value);
            fb.put_u32(panel_x + name.len() as u16, row, n, value);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, CellStyle::fg(TEXT).bold());
    }
}

fn kind_style(kind: PieceKind) -> CellStyle {
    CellStyle {
        fg: kind.color(),
        bg: BACKGROUND,
        bold: false,
        dim: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Variant;

    fn empty_snapshot(variant: Variant) -> GameSnapshot {
        GameSnapshot {
            variant,
            ..GameSnapshot::default()
        }
    }

    fn screen(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn simple_variant_has_no_panel() {
        let snap = empty_snapshot(Variant::Simple);
        let fb = GameView::default().render(&snap, Viewport::new(60, 22));
        let text = screen(&fb);
        assert!(!text.contains("HOLD"));
        assert!(!text.contains("Score"));
        // Board alone is centered: (60 - 22) / 2.
        assert_eq!(fb.get(19, 0).map(|c| c.ch), Some('┌'));
    }

    #[test]
    fn extended_panel_lists_stats() {
        let mut snap = empty_snapshot(Variant::Extended);
        snap.score = 1234;
        snap.lines = 12;
        snap.level = 2;
        let fb = GameView::default().render(&snap, Viewport::new(60, 22));
        let text = screen(&fb);
        assert!(text.contains("HOLD"));
        assert!(text.contains("NEXT"));
        assert!(text.contains("Score: 1234"));
        assert!(text.contains("Lines: 12"));
        assert!(text.contains("Level: 2"));
    }

    #[test]
    fn active_cells_above_the_board_are_not_drawn() {
        let mut snap = empty_snapshot(Variant::Simple);
        snap.active = Piece {
            y: -1,
            ..Piece::new(PieceKind::O)
        };
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, Viewport::new(22, 22));

        // O spawns at column 4; only its lower row (board row 0) is visible.
        assert_eq!(fb.get(1 + 4 * 2, 1).map(|c| c.ch), Some(BLOCK));
        // Top border stays intact.
        assert_eq!(fb.get(1 + 4 * 2, 0).map(|c| c.ch), Some('─'));
    }

    #[test]
    fn ghost_is_gray_and_under_the_active_piece() {
        let mut snap = empty_snapshot(Variant::Extended);
        let active = Piece::new(PieceKind::O);
        snap.active = active;
        snap.ghost = Some(Piece { y: 18, ..active });
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, Viewport::new(22, 22));

        let ghost_cell = fb.get(1 + 4 * 2, 1 + 19).unwrap();
        assert_eq!(ghost_cell.ch, GHOST_BLOCK);
        assert_eq!(ghost_cell.style.fg, GHOST);

        let active_cell = fb.get(1 + 4 * 2, 1).unwrap();
        assert_eq!(active_cell.ch, BLOCK);
        assert_eq!(active_cell.style.fg, PieceKind::O.color());
    }

    #[test]
    fn game_over_overlay_is_drawn() {
        let mut snap = empty_snapshot(Variant::Simple);
        snap.game_over = true;
        let fb = GameView::default().render(&snap, Viewport::new(22, 22));
        assert!(fb.row_text(11).contains("GAME OVER"));
    }
}
