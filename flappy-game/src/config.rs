use std::time::Duration;

use glam::{ivec2, IVec2};

/// Every tunable of the simulation. Screen dimensions live here rather than
/// being read back from a window, so the game runs headless.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub ground_height: i32,

    pub bird_start: IVec2,
    pub bird_size: i32,
    pub gravity: i32,
    pub jump_velocity: i32,

    pub obstacle_width: i32,
    pub obstacle_gap: i32,
    pub obstacle_speed: i32,
    /// Starting x of each obstacle when the game is first created.
    pub obstacle_start: [i32; 2],
    /// Distance between the two obstacles after a restart.
    pub obstacle_spacing: i32,

    pub lives: u32,

    pub cloud_count: usize,
    pub cloud_size: IVec2,
    pub cloud_speed: i32,
    pub cloud_max_y: i32,

    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            ground_height: 50,

            bird_start: ivec2(100, 200),
            bird_size: 50,
            gravity: 1,
            jump_velocity: -12,

            obstacle_width: 50,
            obstacle_gap: 200,
            obstacle_speed: 3,
            obstacle_start: [800, 1100],
            obstacle_spacing: 300,

            lives: 3,

            cloud_count: 5,
            cloud_size: ivec2(100, 50),
            cloud_speed: 1,
            cloud_max_y: 150,

            tick_interval: Duration::from_millis(30),
        }
    }
}

impl GameConfig {
    /// Builds a config for a screen of the given size, keeping every other
    /// default. The first obstacles start at the right edge.
    pub fn with_screen_size(width: i32, height: i32) -> Self {
        let default = Self::default();
        Self {
            screen_width: width,
            screen_height: height,
            obstacle_start: [width, width + default.obstacle_spacing],
            ..default
        }
    }

    /// The y coordinate of the top of the ground strip.
    pub fn ground_top(&self) -> i32 {
        self.screen_height - self.ground_height
    }

    /// Top and bottom of the opening shared by every obstacle.
    pub fn gap_bounds(&self) -> (i32, i32) {
        let center = self.screen_height / 2;
        let half = self.obstacle_gap / 2;
        (center - half, center + half)
    }
}
