use glam::ivec2;

use crate::{bounding_box::BoundingBox, config::GameConfig};

/// One pipe pair. Both pipes of every obstacle share the same gap, so only
/// the horizontal position varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub x: i32,
    pub width: i32,
}

impl Obstacle {
    pub fn new(x: i32, width: i32) -> Self {
        Self { x, width }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn scroll(&mut self, speed: i32) {
        self.x -= speed;
    }

    /// Moves the obstacle back to the right edge once it has fully left the
    /// screen. Returns whether it was recycled.
    pub fn recycle(&mut self, screen_width: i32) -> bool {
        if self.right() < 0 {
            self.x = screen_width;
            true
        } else {
            false
        }
    }

    /// The full-height column the obstacle occupies.
    pub fn column(&self, config: &GameConfig) -> BoundingBox {
        BoundingBox::new(ivec2(self.x, 0), ivec2(self.right(), config.screen_height))
    }

    pub fn top_pipe(&self, config: &GameConfig) -> BoundingBox {
        let (gap_top, _) = config.gap_bounds();
        BoundingBox::new(ivec2(self.x, 0), ivec2(self.right(), gap_top))
    }

    pub fn bottom_pipe(&self, config: &GameConfig) -> BoundingBox {
        let (_, gap_bottom) = config.gap_bounds();
        BoundingBox::new(
            ivec2(self.x, gap_bottom),
            ivec2(self.right(), config.screen_height),
        )
    }

    /// Whether `bird` hits either pipe. A box that shares columns with the
    /// obstacle must lie entirely inside the gap.
    pub fn collides_with(&self, bird: &BoundingBox, config: &GameConfig) -> bool {
        if !bird.overlaps_horizontally(&self.column(config)) {
            return false;
        }
        let (gap_top, gap_bottom) = config.gap_bounds();
        bird.top() < gap_top || bird.bottom() > gap_bottom
    }
}
