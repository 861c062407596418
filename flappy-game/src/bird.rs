use glam::{ivec2, IVec2};

use crate::{bounding_box::BoundingBox, config::GameConfig};

pub const ANIMATION_FRAMES: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bird {
    pub position: IVec2,
    pub velocity: i32,
    /// Wing animation cursor, always in `0..ANIMATION_FRAMES`.
    pub frame: u8,
    start: IVec2,
    size: i32,
}

impl Bird {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            position: config.bird_start,
            velocity: 0,
            frame: 0,
            start: config.bird_start,
            size: config.bird_size,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_origin_size(self.position, ivec2(self.size, self.size))
    }

    pub fn animate(&mut self) {
        self.frame = (self.frame + 1) % ANIMATION_FRAMES;
    }

    pub fn update(&mut self, gravity: i32) {
        self.velocity += gravity;
        self.position.y += self.velocity;
    }

    pub fn jump(&mut self, velocity: i32) {
        self.velocity = velocity;
    }

    /// Puts the bird back at its starting height, at rest. The animation
    /// cursor keeps running.
    pub fn respawn(&mut self) {
        self.position = self.start;
        self.velocity = 0;
    }

    pub fn reset(&mut self) {
        self.respawn();
        self.frame = 0;
    }
}
