use glam::IVec2;

use crate::bounding_box::BoundingBox;

/// Everything a renderer needs for one frame, in screen pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub screen_size: IVec2,
    pub night: bool,
    pub clouds: Vec<BoundingBox>,
    pub ground: BoundingBox,
    pub obstacles: [ObstacleView; 2],
    pub bird: BirdView,
    pub score: u32,
    pub lives: u32,
    pub game_over: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleView {
    pub top: BoundingBox,
    pub bottom: BoundingBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirdView {
    pub bounding_box: BoundingBox,
    pub frame: u8,
}
