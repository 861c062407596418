use glam::{ivec2, IVec2};
use rand::Rng;

use crate::{bounding_box::BoundingBox, config::GameConfig};

/// Background decoration. Clouds never interact with the bird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cloud {
    pub position: IVec2,
}

impl Cloud {
    /// A cloud anywhere across the sky band.
    pub fn scattered<R: Rng>(rng: &mut R, config: &GameConfig) -> Self {
        Self {
            position: ivec2(
                rng.gen_range(0..config.screen_width.max(1)),
                random_height(rng, config),
            ),
        }
    }

    pub fn bounding_box(&self, config: &GameConfig) -> BoundingBox {
        BoundingBox::from_origin_size(self.position, config.cloud_size)
    }

    pub fn update<R: Rng>(&mut self, rng: &mut R, config: &GameConfig) {
        self.position.x -= config.cloud_speed;
        if self.position.x < -config.cloud_size.x {
            self.position = ivec2(config.screen_width, random_height(rng, config));
        }
    }
}

fn random_height<R: Rng>(rng: &mut R, config: &GameConfig) -> i32 {
    rng.gen_range(0..config.cloud_max_y.max(1))
}
