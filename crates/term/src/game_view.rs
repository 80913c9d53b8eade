//! GameView: maps a match-four `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: the board frame holds `VISIBLE_ROWS` block rows with the entry row
//! at the top and column 0 on the left, followed by the cat lane. The side
//! panel sits to the right of the frame; the name prompt and key help sit
//! below it.

use crate::core::{GameSnapshot, Hand};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::scores::ScoreEntry;
use crate::types::{BlockColor, BOARD_COLUMNS, SPIN_MS, VISIBLE_ROWS};

const BG: Rgb = Rgb::new(30, 30, 40);
const HIGHLIGHT: Rgb = Rgb::new(120, 110, 30);
const NOTICE: Rgb = Rgb::new(255, 220, 80);
const SPIN_FRAMES: [char; 4] = ['|', '/', '─', '\\'];
const SPIN_FRAME_MS: u32 = 125;
const CAT_GLYPH: char = 'ω';

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

/// Front-end state drawn next to the game: everything the snapshot does not carry.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudView<'a> {
    pub highlighted: Option<u8>,
    pub top_scores: &'a [ScoreEntry],
    /// Name typed so far, shown while the game is over
    pub name: &'a str,
    /// Result of the last score submission
    pub notice: Option<&'a str>,
}

/// Where the board landed in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Terminal column of the first board cell
    pub board_x: u16,
    /// Terminal row of the entry row
    pub board_y: u16,
    /// Terminal row of the cat lane
    pub lane_y: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the match-four board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
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

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    /// Board placement for a viewport. Input uses this to map the pointer.
    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let board_px_w = (BOARD_COLUMNS as u16) * self.cell_w;
        let board_px_h = (VISIBLE_ROWS as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        // One extra row for the cat lane.
        let frame_h = board_px_h + self.cell_h + 2;

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let frame_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + 3) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            board_x: frame_x + 1,
            board_y: frame_y + 1,
            lane_y: frame_y + 1 + board_px_h,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(viewport);
        let bg = CellStyle::fg(Rgb::new(80, 80, 90)).on(BG);
        let border = CellStyle::fg(Rgb::new(200, 200, 200));

        fb.fill_rect(
            layout.board_x,
            layout.board_y,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            bg,
        );
        self.draw_border(fb, layout, border);

        for col in 0..BOARD_COLUMNS {
            let lit = hud.highlighted == Some(col);
            for row in 0..VISIBLE_ROWS {
                let code = snap.board[col as usize][row as usize];
                match BlockColor::from_code(code) {
                    Some(color) => self.draw_block(fb, layout, col, row, color, lit),
                    None => self.draw_empty_cell(fb, layout, col, row, lit),
                }
            }
        }

        self.draw_lane(fb, snap, hud, layout);
        self.draw_side_panel(fb, snap, hud, viewport, layout);
        self.draw_footer(fb, snap, hud, layout);

        if snap.game_over {
            self.draw_overlay_text(fb, layout, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: BoardLayout, style: CellStyle) {
        let BoardLayout {
            frame_x: x,
            frame_y: y,
            frame_w: w,
            frame_h: h,
            ..
        } = layout;

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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, layout: BoardLayout, col: u8, row: u8, lit: bool) {
        let style = CellStyle::fg(Rgb::new(90, 90, 100)).on(cell_bg(lit)).dim();
        self.fill_cell_rect(fb, layout, col, row, '·', style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        col: u8,
        row: u8,
        color: BlockColor,
        lit: bool,
    ) {
        let fg = block_rgb(color);
        let fg = if lit { fg.mix(Rgb::new(255, 255, 160)) } else { fg };
        let style = CellStyle::fg(fg).on(cell_bg(lit)).bold();
        self.fill_cell_rect(fb, layout, col, row, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        col: u8,
        row: u8,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.board_x + col as u16 * self.cell_w;
        let py = layout.board_y + row as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// The cat walks under the highlighted column carrying the hand.
    fn draw_lane(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, hud: &HudView<'_>, layout: BoardLayout) {
        let col = hud.highlighted.unwrap_or(BOARD_COLUMNS / 2);
        let px = layout.board_x + col as u16 * self.cell_w;
        let py = layout.lane_y;

        match snap.hand {
            Hand::Holding { color, count } => {
                let style = CellStyle::fg(block_rgb(color)).on(BG).bold();
                fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
                if count > 1 {
                    let digit = CellStyle::fg(Rgb::new(0, 0, 0)).on(block_rgb(color)).bold();
                    fb.put_u32(px, py, count as u32, digit);
                }
            }
            Hand::Empty => {
                let glyph = if snap.spin_ms > 0 {
                    let frame = SPIN_MS.saturating_sub(snap.spin_ms) / SPIN_FRAME_MS;
                    SPIN_FRAMES[frame as usize % SPIN_FRAMES.len()]
                } else {
                    CAT_GLYPH
                };
                let style = CellStyle::fg(Rgb::new(240, 240, 240)).on(BG).bold();
                fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        layout: BoardLayout,
    ) {
        let panel_x = layout
            .frame_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = layout.frame_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        if let Some(points) = snap.message {
            let bonus = CellStyle::fg(NOTICE).bold();
            fb.put_char(panel_x + 8, y, '+', bonus);
            fb.put_u32(panel_x + 9, y, points, bonus);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.time_left, value);
        let dim = value.dim();
        fb.put_char(panel_x + 3, y, '/', dim);
        fb.put_u32(panel_x + 4, y, snap.time_max, dim);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HAND", label);
        y = y.saturating_add(1);
        match snap.hand {
            Hand::Holding { color, count } => {
                fb.put_str(panel_x, y, color.as_str(), CellStyle::fg(block_rgb(color)));
                fb.put_char(panel_x + 7, y, 'x', value);
                fb.put_u32(panel_x + 8, y, count as u32, value);
            }
            Hand::Empty => fb.put_str(panel_x, y, "-", value),
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HIGH SCORES", label);
        y = y.saturating_add(1);
        let name_w = panel_w.saturating_sub(10) as usize;
        for (i, entry) in hud.top_scores.iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            fb.put_u32(panel_x, y, i as u32 + 1, dim);
            let name: String = entry.player_name.chars().take(name_w).collect();
            fb.put_str(panel_x + 3, y, &name, value);
            fb.put_u32(panel_x + 3 + name_w as u16 + 1, y, entry.points, value);
            y = y.saturating_add(1);
        }
        if hud.top_scores.is_empty() && y < viewport.height {
            fb.put_str(panel_x, y, "-", dim);
        }
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, hud: &HudView<'_>, layout: BoardLayout) {
        let x = layout.frame_x;
        let mut y = layout.frame_y.saturating_add(layout.frame_h);
        let text = CellStyle::default();

        if snap.game_over {
            fb.put_str(x, y, "NAME> ", text.bold());
            fb.put_str(x + 6, y, hud.name, text);
            let cursor_x = x + 6 + hud.name.chars().count() as u16;
            fb.put_char(cursor_x, y, '_', text.dim());
            y = y.saturating_add(1);
            fb.put_str(x, y, "enter submit  F2 restart  esc quit", text.dim());
        } else {
            fb.put_str(x, y, "←/→ move  space pick/put  1 row  r restart  q quit", text.dim());
        }
        y = y.saturating_add(1);

        if let Some(notice) = hud.notice {
            fb.put_str(x, y, notice, CellStyle::fg(NOTICE).bold());
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: BoardLayout, text: &str) {
        let mid_y = layout.frame_y.saturating_add(layout.frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = layout
            .frame_x
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, CellStyle::fg(Rgb::new(255, 255, 255)).bold());
    }
}

fn cell_bg(lit: bool) -> Rgb {
    if lit {
        BG.mix(HIGHLIGHT)
    } else {
        BG
    }
}

fn block_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::Red => Rgb::new(220, 70, 70),
        BlockColor::Blue => Rgb::new(80, 120, 230),
        BlockColor::Green => Rgb::new(90, 210, 110),
        BlockColor::Yellow => Rgb::new(240, 220, 80),
        BlockColor::Orange => Rgb::new(255, 150, 40),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_contains(fb: &FrameBuffer, needle: &str) -> bool {
        (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
    }

    fn snapshot() -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        snap.board[0][0] = BlockColor::Red.code();
        snap.board[9][0] = BlockColor::Blue.code();
        snap.score = 1200;
        snap.time_left = 7;
        snap
    }

    #[test]
    fn board_fits_in_standard_terminal() {
        let view = GameView::default();
        let layout = view.layout(Viewport::new(80, 24));
        assert_eq!(layout.frame_w, 22);
        assert_eq!(layout.frame_h, 12);
        assert!(layout.frame_y + layout.frame_h + 3 <= 24);
        assert_eq!(layout.board_x, layout.frame_x + 1);
    }

    #[test]
    fn entry_row_at_top_column_zero_on_left() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let layout = view.layout(vp);
        let fb = view.render(&snapshot(), &HudView::default(), vp);

        let left = fb.get(layout.board_x, layout.board_y).unwrap();
        assert_eq!(left.ch, '█');
        assert_eq!(left.style.fg, block_rgb(BlockColor::Red));

        let right = fb.get(layout.board_x + 18, layout.board_y).unwrap();
        assert_eq!(right.style.fg, block_rgb(BlockColor::Blue));

        let below = fb.get(layout.board_x, layout.board_y + 1).unwrap();
        assert_eq!(below.ch, '·');
    }

    #[test]
    fn highlighted_column_is_tinted() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let layout = view.layout(vp);
        let hud = HudView {
            highlighted: Some(3),
            ..HudView::default()
        };
        let fb = view.render(&snapshot(), &hud, vp);

        let lit = fb.get(layout.board_x + 6, layout.board_y + 4).unwrap();
        let plain = fb.get(layout.board_x + 8, layout.board_y + 4).unwrap();
        assert_eq!(lit.style.bg, cell_bg(true));
        assert_eq!(plain.style.bg, BG);
    }

    #[test]
    fn held_blocks_follow_highlight_with_count() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let layout = view.layout(vp);
        let mut snap = snapshot();
        snap.hand = Hand::holding(BlockColor::Green, 3);
        let hud = HudView {
            highlighted: Some(2),
            ..HudView::default()
        };
        let fb = view.render(&snap, &hud, vp);

        let lane = fb.get(layout.board_x + 4, layout.lane_y).unwrap();
        assert_eq!(lane.ch, '3');
        let lane_right = fb.get(layout.board_x + 5, layout.lane_y).unwrap();
        assert_eq!(lane_right.ch, '█');
        assert_eq!(lane_right.style.fg, block_rgb(BlockColor::Green));
        assert!(screen_contains(&fb, "green  x3"));
    }

    #[test]
    fn cat_spins_after_a_match() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let layout = view.layout(vp);
        let x = layout.board_x + (BOARD_COLUMNS / 2) as u16 * 2;

        let fb = view.render(&snapshot(), &HudView::default(), vp);
        assert_eq!(fb.get(x, layout.lane_y).unwrap().ch, CAT_GLYPH);

        let mut snap = snapshot();
        snap.spin_ms = SPIN_MS;
        let fb = view.render(&snap, &HudView::default(), vp);
        assert_eq!(fb.get(x, layout.lane_y).unwrap().ch, SPIN_FRAMES[0]);
    }

    #[test]
    fn panel_shows_score_time_and_message() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let mut snap = snapshot();
        snap.message = Some(900);
        let fb = view.render(&snap, &HudView::default(), vp);

        assert!(screen_contains(&fb, "SCORE"));
        assert!(screen_contains(&fb, "1200    +900"));
        assert!(screen_contains(&fb, "7  /10"));
    }

    #[test]
    fn panel_lists_high_scores() {
        let view = GameView::default();
        let vp = Viewport::new(80, 30);
        let scores = [ScoreEntry::new("luna", 2400), ScoreEntry::new("kit", 800)];
        let hud = HudView {
            top_scores: &scores,
            ..HudView::default()
        };
        let fb = view.render(&snapshot(), &hud, vp);

        assert!(screen_contains(&fb, "HIGH SCORES"));
        assert!(screen_contains(&fb, "1  luna"));
        assert!(screen_contains(&fb, "2400"));
        assert!(screen_contains(&fb, "2  kit"));
    }

    #[test]
    fn game_over_shows_overlay_and_name_prompt() {
        let view = GameView::default();
        let vp = Viewport::new(80, 24);
        let mut snap = snapshot();
        snap.game_over = true;
        let hud = HudView {
            name: "mo",
            notice: Some("Please enter a valid player name!"),
            ..HudView::default()
        };
        let fb = view.render(&snap, &hud, vp);

        assert!(screen_contains(&fb, "GAME OVER"));
        assert!(screen_contains(&fb, "NAME> mo_"));
        assert!(screen_contains(&fb, "Please enter a valid player name!"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let fb = view.render(&snapshot(), &HudView::default(), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}
