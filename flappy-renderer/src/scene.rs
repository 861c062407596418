use glam::{vec2, Vec2};

use flappy_game::{bounding_box::BoundingBox, snapshot::Snapshot};

use crate::font;

const RECT: u32 = 0;
const ELLIPSE: u32 = 1;

const HUD_SCALE: f32 = 3.0;
const BANNER_SCALE: f32 = 5.0;
const MESSAGE_SCALE: f32 = 2.0;

/// One instanced quad. Ellipses are inscribed in their quad.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Shape {
    pub position: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
    pub kind: u32,
}

impl Shape {
    pub fn rect(position: Vec2, size: Vec2, color: [f32; 4]) -> Self {
        Self {
            position,
            size,
            color,
            kind: RECT,
        }
    }

    pub fn ellipse(position: Vec2, size: Vec2, color: [f32; 4]) -> Self {
        Self {
            position,
            size,
            color,
            kind: ELLIPSE,
        }
    }

    fn from_box(bounding_box: &BoundingBox, color: [f32; 4], kind: u32) -> Self {
        Self {
            position: bounding_box.min.as_vec2(),
            size: bounding_box.size().as_vec2(),
            color,
            kind,
        }
    }
}

/// Colours in linear space, ready for an sRGB surface.
pub struct Palette {
    pub day_sky: [f32; 4],
    pub night_sky: [f32; 4],
    pub day_cloud: [f32; 4],
    pub night_cloud: [f32; 4],
    pub ground: [f32; 4],
    pub obstacle: [f32; 4],
    pub bird: [f32; 4],
    pub wing: [f32; 4],
    pub text: [f32; 4],
    pub banner: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            day_sky: srgb(0x00, 0xff, 0xff),
            night_sky: srgb(0x00, 0x00, 0x00),
            day_cloud: srgb(0xff, 0xff, 0xff),
            night_cloud: srgb(0x40, 0x40, 0x40),
            ground: srgb(0xff, 0xc8, 0x00),
            obstacle: srgb(0xff, 0x00, 0x00),
            bird: srgb(0x00, 0xff, 0x00),
            wing: srgb(0xff, 0xff, 0xff),
            text: srgb(0xff, 0xff, 0xff),
            banner: srgb(0xff, 0x00, 0x00),
        }
    }
}

fn srgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [to_linear(r), to_linear(g), to_linear(b), 1.0]
}

fn to_linear(channel: u8) -> f32 {
    let c = channel as f32 / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// A frame ready for the GPU: the clear colour and the shapes drawn over it
/// back to front.
pub struct Scene {
    pub clear_color: [f32; 4],
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn build(snapshot: &Snapshot, palette: &Palette) -> Self {
        let (clear_color, cloud_color) = if snapshot.night {
            (palette.night_sky, palette.night_cloud)
        } else {
            (palette.day_sky, palette.day_cloud)
        };

        let mut shapes = Vec::new();

        for cloud in &snapshot.clouds {
            shapes.push(Shape::from_box(cloud, cloud_color, ELLIPSE));
        }

        shapes.push(Shape::from_box(&snapshot.ground, palette.ground, RECT));

        for obstacle in &snapshot.obstacles {
            shapes.push(Shape::from_box(&obstacle.top, palette.obstacle, RECT));
            shapes.push(Shape::from_box(&obstacle.bottom, palette.obstacle, RECT));
        }

        let bird = &snapshot.bird;
        shapes.push(Shape::from_box(&bird.bounding_box, palette.bird, ELLIPSE));
        let wing_drop = if bird.frame == 1 { 10.0 } else { 5.0 };
        shapes.push(Shape::ellipse(
            bird.bounding_box.min.as_vec2() + vec2(10.0, wing_drop),
            vec2(30.0, 20.0),
            palette.wing,
        ));

        font::push_text(
            &mut shapes,
            &format!("Score: {}", snapshot.score),
            vec2(20.0, 29.0),
            HUD_SCALE,
            palette.text,
        );
        font::push_text(
            &mut shapes,
            &format!("Lives: {}", snapshot.lives),
            vec2(20.0, 59.0),
            HUD_SCALE,
            palette.text,
        );

        if snapshot.game_over {
            let screen = snapshot.screen_size.as_vec2();

            let banner = "GAME OVER";
            font::push_text(
                &mut shapes,
                banner,
                vec2(
                    (screen.x - font::text_width(banner, BANNER_SCALE)) / 2.0,
                    screen.y / 2.0 - 20.0 - font::text_height(BANNER_SCALE),
                ),
                BANNER_SCALE,
                palette.banner,
            );

            let message = game_over_message(snapshot.score);
            font::push_text(
                &mut shapes,
                &message,
                vec2(
                    (screen.x - font::text_width(&message, MESSAGE_SCALE)) / 2.0,
                    screen.y / 2.0,
                ),
                MESSAGE_SCALE,
                palette.text,
            );
        }

        Self {
            clear_color,
            shapes,
        }
    }
}

pub fn game_over_message(score: u32) -> String {
    format!("Score: {score} - Press Enter to restart")
}

#[cfg(test)]
mod tests {
    use flappy_game::{config::GameConfig, GameState};

    use super::*;

    fn snapshot() -> Snapshot {
        GameState::new(GameConfig::default(), 3).snapshot()
    }

    #[test]
    fn world_shapes_come_before_the_hud() {
        let palette = Palette::default();
        let scene = Scene::build(&snapshot(), &palette);

        assert_eq!(scene.clear_color, palette.day_sky);

        let clouds = &scene.shapes[..5];
        assert!(clouds
            .iter()
            .all(|s| s.kind == ELLIPSE && s.color == palette.day_cloud));

        let ground = scene.shapes[5];
        assert_eq!(ground.position, vec2(0.0, 550.0));
        assert_eq!(ground.size, vec2(800.0, 50.0));
        assert_eq!(ground.color, palette.ground);

        let pipes = &scene.shapes[6..10];
        assert_eq!(pipes[0].position, vec2(800.0, 0.0));
        assert_eq!(pipes[0].size, vec2(50.0, 200.0));
        assert_eq!(pipes[1].position, vec2(800.0, 400.0));
        assert_eq!(pipes[3].position, vec2(1100.0, 400.0));
        assert!(pipes.iter().all(|s| s.color == palette.obstacle));

        let bird = scene.shapes[10];
        assert_eq!(bird.kind, ELLIPSE);
        assert_eq!(bird.position, vec2(100.0, 200.0));
        assert_eq!(bird.size, vec2(50.0, 50.0));

        let wing = scene.shapes[11];
        assert_eq!(wing.position, vec2(110.0, 205.0));

        assert!(scene.shapes[12..].iter().all(|s| s.color == palette.text));
    }

    #[test]
    fn wing_drops_on_the_middle_frame() {
        let mut snapshot = snapshot();
        snapshot.bird.frame = 1;
        let scene = Scene::build(&snapshot, &Palette::default());
        assert_eq!(scene.shapes[11].position, vec2(110.0, 210.0));
    }

    #[test]
    fn night_darkens_sky_and_clouds() {
        let palette = Palette::default();
        let mut snapshot = snapshot();
        snapshot.night = true;

        let scene = Scene::build(&snapshot, &palette);
        assert_eq!(scene.clear_color, palette.night_sky);
        assert_eq!(scene.shapes[0].color, palette.night_cloud);
    }

    #[test]
    fn game_over_adds_a_banner() {
        let palette = Palette::default();
        let mut snapshot = snapshot();
        let running = Scene::build(&snapshot, &palette).shapes.len();

        snapshot.game_over = true;
        let scene = Scene::build(&snapshot, &palette);

        assert!(scene.shapes.len() > running);
        assert!(scene.shapes[running..]
            .iter()
            .any(|s| s.color == palette.banner));
    }

    #[test]
    fn message_carries_the_final_score() {
        assert_eq!(
            game_over_message(17),
            "Score: 17 - Press Enter to restart"
        );
    }

    #[test]
    fn palette_is_linearized() {
        let green = srgb(0, 255, 0);
        assert_eq!(green[0], 0.0);
        assert!((green[1] - 1.0).abs() < 1e-5);
        assert_eq!(green[3], 1.0);
        let grey = to_linear(0x40);
        assert!(grey > 0.05 && grey < 0.055);
    }
}
