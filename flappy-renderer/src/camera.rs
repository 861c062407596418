use glam::{IVec2, Mat4};

/// Maps game pixels (origin top-left, y down) onto the whole surface.
pub struct Camera {
    pub width: f32,
    pub height: f32,
}

impl Camera {
    pub fn new(screen_size: IVec2) -> Self {
        let size = screen_size.as_vec2();
        Self {
            width: size.x,
            height: size.y,
        }
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.width, self.height, 0.0, -1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use glam::{ivec2, vec4};

    use super::*;

    #[test]
    fn screen_corners_map_to_clip_corners() {
        let matrix = Camera::new(ivec2(800, 600)).build_view_projection_matrix();

        let top_left = matrix * vec4(0.0, 0.0, 0.0, 1.0);
        assert!((top_left.x + 1.0).abs() < 1e-6);
        assert!((top_left.y - 1.0).abs() < 1e-6);

        let bottom_right = matrix * vec4(800.0, 600.0, 0.0, 1.0);
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
        assert!((bottom_right.y + 1.0).abs() < 1e-6);
    }
}
