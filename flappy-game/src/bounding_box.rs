use glam::IVec2;

/// Axis-aligned box in screen pixels, y pointing down. `max` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min: IVec2,
    pub max: IVec2,
}

impl BoundingBox {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    pub fn from_origin_size(origin: IVec2, size: IVec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn size(&self) -> IVec2 {
        self.max - self.min
    }

    pub fn top(&self) -> i32 {
        self.min.y
    }

    pub fn bottom(&self) -> i32 {
        self.max.y
    }

    pub fn overlaps_horizontally(&self, other: &BoundingBox) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x
    }
}

#[cfg(test)]
mod tests {
    use glam::ivec2;

    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoundingBox::from_origin_size(ivec2(0, 0), ivec2(50, 50));
        let b = BoundingBox::from_origin_size(ivec2(50, 0), ivec2(50, 50));
        assert!(!a.overlaps_horizontally(&b));

        let c = BoundingBox::from_origin_size(ivec2(49, 0), ivec2(50, 50));
        assert!(a.overlaps_horizontally(&c));
    }

    #[test]
    fn horizontal_overlap_ignores_height() {
        let a = BoundingBox::from_origin_size(ivec2(10, 0), ivec2(10, 10));
        let b = BoundingBox::from_origin_size(ivec2(15, 500), ivec2(10, 10));
        assert!(a.overlaps_horizontally(&b));
    }

    #[test]
    fn edges_and_size() {
        let b = BoundingBox::new(ivec2(-5, 3), ivec2(20, 40));
        assert_eq!(b.top(), 3);
        assert_eq!(b.bottom(), 40);
        assert_eq!(b.size(), ivec2(25, 37));
    }
}
