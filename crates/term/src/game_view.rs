//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: grass, yellow road edge, the lanes separated by
//! dashed white lines, yellow road edge, grass. Two HUD rows sit above the road.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::sprite::{Sprite, SpriteSet};
use crate::types::{LANES, ROWS};

const GRASS_W: u16 = 2;
const HUD_H: u16 = 2;
/// Dash length and gap of the lane separators, in terminal rows.
const DASH: u32 = 2;

const GRASS: Rgb = Rgb::new(15, 120, 25);
const ASPHALT: Rgb = Rgb::new(50, 50, 50);
const EDGE: Rgb = Rgb::new(255, 220, 0);
const LANE_LINE: Rgb = Rgb::new(255, 255, 255);
const PLAYER: Rgb = Rgb::new(60, 220, 90);
const ENEMY: Rgb = Rgb::new(220, 60, 60);

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

/// A lightweight terminal renderer for the road.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Lane cell width in terminal columns.
    cell_w: u16,
    /// Row height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    sprites: SpriteSet,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide cells so a car reads as a car at one row per cell.
        Self::new(6, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
            sprites: SpriteSet::default(),
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_sprites(mut self, sprites: SpriteSet) -> Self {
        self.sprites = sprites;
        self
    }

    fn road_w(&self) -> u16 {
        (LANES as u16) * self.cell_w + (LANES as u16 - 1)
    }

    /// Size of the whole drawing (grass, road and HUD) in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let w = 2 * GRASS_W + 2 + self.road_w();
        let h = HUD_H + (ROWS as u16) * self.cell_h;
        (w, h)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let origin = Origin {
            road_x: start_x + GRASS_W + 1,
            road_y: start_y + HUD_H,
        };

        self.draw_road(fb, origin, start_x, frame_w, snap.ticks);

        for o in snap.obstacles.iter().filter(|o| o.row < ROWS && o.lane < LANES) {
            self.draw_car(fb, origin, o.lane, o.row, self.sprites.enemy.as_ref(), ENEMY);
        }
        self.draw_car(
            fb,
            origin,
            snap.player_lane,
            snap.player_row,
            self.sprites.player.as_ref(),
            PLAYER,
        );

        self.draw_hud(fb, snap, start_x, start_y);

        if snap.game_over {
            self.draw_game_over(fb, start_x, frame_w, origin.road_y);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_road(&self, fb: &mut FrameBuffer, origin: Origin, start_x: u16, frame_w: u16, ticks: u32) {
        let road_h = (ROWS as u16) * self.cell_h;
        let road_w = self.road_w();

        fb.fill_rect(start_x, origin.road_y, frame_w, road_h, ' ', CellStyle::new(GRASS, GRASS));
        fb.fill_rect(
            origin.road_x,
            origin.road_y,
            road_w,
            road_h,
            ' ',
            CellStyle::new(ASPHALT, ASPHALT),
        );

        let edge = CellStyle::new(EDGE, ASPHALT).bold();
        let dash = CellStyle::new(LANE_LINE, ASPHALT);
        // Dashes drift down one row per tick.
        let phase = ticks % (2 * DASH);
        for dy in 0..road_h {
            let y = origin.road_y + dy;
            fb.put_char(origin.road_x - 1, y, '┃', edge);
            fb.put_char(origin.road_x + road_w, y, '┃', edge);

            if (dy as u32 + 2 * DASH - phase) % (2 * DASH) < DASH {
                for lane in 1..LANES as u16 {
                    let x = origin.road_x + lane * (self.cell_w + 1) - 1;
                    fb.put_char(x, y, '│', dash);
                }
            }
        }
    }

    fn draw_car(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        lane: u8,
        row: u8,
        sprite: Option<&Sprite>,
        color: Rgb,
    ) {
        let x = origin.road_x + (lane as u16) * (self.cell_w + 1);
        let y = origin.road_y + (row as u16) * self.cell_h;
        let style = CellStyle::new(color, ASPHALT).bold();

        match sprite {
            Some(sprite) => {
                let w = sprite.width().min(self.cell_w);
                let h = sprite.height().min(self.cell_h);
                let ox = x + (self.cell_w - w) / 2;
                let oy = y + (self.cell_h - h) / 2;
                for sy in 0..h {
                    for sx in 0..w {
                        if let Some(ch) = sprite.at(sx, sy) {
                            fb.put_char(ox + sx, oy + sy, ch, style);
                        }
                    }
                }
            }
            None => {
                let car_w = (self.cell_w * 3 / 4).max(1);
                let car_h = (self.cell_h * 9 / 10).max(1);
                let ox = x + (self.cell_w - car_w) / 2;
                let oy = y + (self.cell_h - car_h) / 2;
                fb.fill_rect(ox, oy, car_w, car_h, '█', style);
            }
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, start_x: u16, start_y: u16) {
        let label = CellStyle::default().bold();
        let hint = CellStyle::new(Rgb::new(160, 160, 160), Rgb::new(0, 0, 0));

        fb.put_str(start_x, start_y, "Score: ", label);
        fb.put_u32(start_x + 7, start_y, snap.score, label);
        fb.put_str(start_x, start_y + 1, "← → move   ENTER restart", hint);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, start_x: u16, frame_w: u16, road_y: u16) {
        let mid_y = road_y + (ROWS as u16) * self.cell_h / 2;
        let title = CellStyle::new(EDGE, ASPHALT).bold();
        let sub = CellStyle::new(LANE_LINE, ASPHALT);
        centered(fb, start_x, frame_w, mid_y, "GAME OVER", title);
        centered(fb, start_x, frame_w, mid_y + 2, "Press ENTER to play again", sub);
    }
}

#[derive(Debug, Clone, Copy)]
struct Origin {
    /// First column of lane 0.
    road_x: u16,
    /// Terminal row of road row 0.
    road_y: u16,
}

fn centered(fb: &mut FrameBuffer, start_x: u16, frame_w: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    fb.put_str(x, y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ObstacleSnapshot;

    #[test]
    fn frame_size_matches_layout() {
        let view = GameView::default();
        // 2 grass + 1 edge + 3*6 lanes + 2 separators + 1 edge + 2 grass
        assert_eq!(view.frame_size(), (26, 20));
        assert_eq!(GameView::new(4, 2).frame_size(), (20, 38));
    }

    #[test]
    fn dashes_scroll_with_ticks() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let mut snap = GameSnapshot::default();
        let vp = Viewport::new(26, 20);
        // First separator sits right after lane 0.
        let sep_x = 3 + 6;

        let a = view.render(&snap, vp);
        snap.ticks = 1;
        let b = view.render(&snap, vp);

        assert_eq!(a.get(sep_x, 2).unwrap().ch, '│');
        assert_eq!(a.get(sep_x, 4).unwrap().ch, ' ');
        assert_eq!(b.get(sep_x, 2).unwrap().ch, ' ');
        assert_eq!(b.get(sep_x, 3).unwrap().ch, '│');
    }

    #[test]
    fn out_of_range_obstacles_are_not_drawn() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let mut snap = GameSnapshot::default();
        snap.obstacles.push(ObstacleSnapshot { lane: 7, row: 3 });
        let fb = view.render(&snap, Viewport::new(26, 20));
        let blocks = (0..fb.height())
            .flat_map(|y| fb.row(y).to_vec())
            .filter(|c| c.ch == '█')
            .count();
        // Only the player's four-column block.
        assert_eq!(blocks, 4);
    }
}
