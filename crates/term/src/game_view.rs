//! GameView: maps a `core::FrameState` into a terminal framebuffer.
//!
//! The playfield is drawn as four lanes of `lane_cols` columns separated by a
//! one-column divider, `rows` rows tall, inside a border with a score line
//! underneath. The same layout maps mouse cells back to playfield units, so
//! what is drawn and what is clickable agree.
//!
//! This module is pure (no I/O).

use crate::core::FrameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, Point, FIELD_HEIGHT, LANE_COUNT, LANE_GAP, LANE_STRIDE, LANE_WIDTH};

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

/// Where clicks outside the playfield land: left of lane 0, above the top edge.
pub const OFF_FIELD: Point = Point::new(-1.0, -1.0);

const FIELD: CellStyle = CellStyle::new(Rgb::BLACK, Rgb::WHITE);
const DIVIDER: CellStyle = CellStyle::new(Rgb::RED, Rgb::WHITE);
const BLOCK: CellStyle = CellStyle::new(Rgb::BLACK, Rgb::PINK);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const HUD: CellStyle = CellStyle::new(Rgb::new(90, 140, 255), Rgb::BLACK);
const TITLE: CellStyle = CellStyle::new(Rgb::RED, Rgb::WHITE).bold();
const PROMPT: CellStyle = CellStyle::new(Rgb::RED, Rgb::WHITE);

/// Terminal renderer for the playfield and title screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Terminal columns per lane.
    lane_cols: u16,
    /// Terminal rows for the full field height.
    rows: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 10 columns x 20 rows: 5 units per column, 15 units per row.
        Self {
            lane_cols: 10,
            rows: 20,
        }
    }
}

impl GameView {
    pub fn new(lane_cols: u16, rows: u16) -> Self {
        Self {
            lane_cols: lane_cols.max(1),
            rows: rows.max(1),
        }
    }

    /// Columns covered by the four lanes and their dividers.
    pub fn field_cols(&self) -> u16 {
        self.lane_cols * LANE_COUNT as u16 + (LANE_COUNT as u16 - 1)
    }

    pub fn field_rows(&self) -> u16 {
        self.rows
    }

    /// Border plus score line.
    pub fn required_size(&self) -> Viewport {
        Viewport::new(self.field_cols() + 2, self.rows + 3)
    }

    /// Top-left cell of the playfield interior (inside the border).
    pub fn field_origin(&self, viewport: Viewport) -> (u16, u16) {
        let need = self.required_size();
        let start_x = viewport.width.saturating_sub(need.width) / 2;
        let start_y = viewport.height.saturating_sub(need.height) / 2;
        (start_x + 1, start_y + 1)
    }

    fn units_per_col(&self) -> f64 {
        LANE_WIDTH / self.lane_cols as f64
    }

    fn units_per_row(&self) -> f64 {
        FIELD_HEIGHT / self.rows as f64
    }

    /// Playfield y (growing down) at the centre of field row `r`.
    fn row_centre(&self, r: u16) -> f64 {
        (r as f64 + 0.5) * self.units_per_row()
    }

    /// Map a terminal cell to the playfield point at its centre.
    ///
    /// Cells outside the playfield map to [`OFF_FIELD`]; divider cells map into
    /// the gap between lanes, which no block covers.
    pub fn cell_to_field(&self, viewport: Viewport, col: u16, row: u16) -> Point {
        let (ox, oy) = self.field_origin(viewport);
        if col < ox || row < oy {
            return OFF_FIELD;
        }
        let c = col - ox;
        let r = row - oy;
        if c >= self.field_cols() || r >= self.rows {
            return OFF_FIELD;
        }

        let lane = c / (self.lane_cols + 1);
        let within = c % (self.lane_cols + 1);
        let x = lane as f64 * LANE_STRIDE
            + if within == self.lane_cols {
                LANE_WIDTH + LANE_GAP / 2.0
            } else {
                (within as f64 + 0.5) * self.units_per_col()
            };
        Point::new(x, self.row_centre(r))
    }

    /// Render into an existing framebuffer (resized to the viewport).
    pub fn render_into(&self, frame: &FrameState<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (ox, oy) = self.field_origin(viewport);
        let cols = self.field_cols();

        fb.fill_rect(ox, oy, cols, self.rows, ' ', FIELD);
        self.draw_border(fb, ox - 1, oy - 1, cols + 2, self.rows + 2);

        match frame.phase {
            Phase::Playing | Phase::GameOver => {
                self.draw_field(fb, frame, ox, oy);
                self.draw_hud(fb, frame, ox, oy + self.rows + 1);
            }
            Phase::Title => self.draw_title(fb, frame, ox, oy),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &FrameState<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let right = x + w - 1;
        let bottom = y + h - 1;
        for cx in x + 1..right {
            fb.set(cx, y, BORDER.cell('─'));
            fb.set(cx, bottom, BORDER.cell('─'));
        }
        for cy in y + 1..bottom {
            fb.set(x, cy, BORDER.cell('│'));
            fb.set(right, cy, BORDER.cell('│'));
        }
        fb.set(x, y, BORDER.cell('┌'));
        fb.set(right, y, BORDER.cell('┐'));
        fb.set(x, bottom, BORDER.cell('└'));
        fb.set(right, bottom, BORDER.cell('┘'));
    }

    fn draw_field(&self, fb: &mut FrameBuffer, frame: &FrameState<'_>, ox: u16, oy: u16) {
        for k in 1..LANE_COUNT as u16 {
            let x = ox + k * (self.lane_cols + 1) - 1;
            for y in 0..self.rows {
                fb.set(x, oy + y, DIVIDER.cell('│'));
            }
        }

        // A row is painted when its centre is inside the block, the same
        // point a click on that row is tested with.
        for block in frame.blocks {
            let x = ox + block.lane().index() as u16 * (self.lane_cols + 1);
            let bottom = block.bottom();
            for r in 0..self.rows {
                let y_from_bottom = FIELD_HEIGHT - self.row_centre(r);
                if (bottom..=bottom + frame.block_height).contains(&y_from_bottom) {
                    fb.fill_rect(x, oy + r, self.lane_cols, 1, '█', BLOCK);
                }
            }
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, frame: &FrameState<'_>, x: u16, y: u16) {
        let current = format!("Current: {}", frame.score);
        fb.put_str(x, y, &current, HUD);

        let best = format!("Best: {}", frame.high_score);
        let bx = (x + self.field_cols()).saturating_sub(best.chars().count() as u16);
        fb.put_str(bx, y, &best, HUD);

        if frame.invincible {
            let mid = x + self.field_cols() / 2 - 1;
            fb.put_str(mid, y, "INV", HUD.bold());
        }
    }

    fn draw_title(&self, fb: &mut FrameBuffer, frame: &FrameState<'_>, ox: u16, oy: u16) {
        self.put_centered(fb, ox, oy + self.rows / 4, "bblock", TITLE);
        if frame.blink_visible {
            self.put_centered(fb, ox, oy + self.rows / 2, "PRESS ANY KEY", PROMPT);
        }
        let high = format!("HIGH SCORE {}", frame.high_score);
        self.put_centered(fb, ox, oy + self.rows.saturating_sub(3), &high, PROMPT);
    }

    fn put_centered(&self, fb: &mut FrameBuffer, ox: u16, y: u16, text: &str, style: CellStyle) {
        let len = text.chars().count() as u16;
        let x = ox + self.field_cols().saturating_sub(len) / 2;
        fb.put_str(x, y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Lane;

    #[test]
    fn default_layout_dimensions() {
        let view = GameView::default();
        assert_eq!(view.field_cols(), 43);
        assert_eq!(view.required_size(), Viewport::new(45, 23));
    }

    #[test]
    fn cell_centres_fall_inside_their_lane() {
        let view = GameView::default();
        let vp = view.required_size();
        let (ox, oy) = view.field_origin(vp);
        for lane in Lane::ALL {
            let left = lane.horizontal_position();
            for within in 0..10 {
                let col = ox + lane.index() as u16 * 11 + within;
                let p = view.cell_to_field(vp, col, oy);
                assert!(p.x > left && p.x < left + LANE_WIDTH, "lane {:?} col {}", lane, col);
                assert_eq!(p.y, 7.5);
            }
        }
    }

    #[test]
    fn divider_cells_land_in_the_gap() {
        let view = GameView::default();
        let vp = view.required_size();
        let (ox, oy) = view.field_origin(vp);
        let p = view.cell_to_field(vp, ox + 10, oy + 5);
        assert_eq!(p.x, 50.5);
    }

    #[test]
    fn border_and_outside_map_off_field() {
        let view = GameView::default();
        let vp = Viewport::new(80, 30);
        let (ox, oy) = view.field_origin(vp);
        assert_eq!(view.cell_to_field(vp, ox - 1, oy), OFF_FIELD);
        assert_eq!(view.cell_to_field(vp, ox, oy - 1), OFF_FIELD);
        assert_eq!(view.cell_to_field(vp, ox + 43, oy), OFF_FIELD);
        assert_eq!(view.cell_to_field(vp, ox, oy + 20), OFF_FIELD);
        assert_eq!(view.cell_to_field(vp, 0, 0), OFF_FIELD);
    }
}
