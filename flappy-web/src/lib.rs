use std::time::Duration;

use wasm_bindgen::prelude::*;
use winit::{dpi::LogicalSize, event_loop::EventLoop, window::WindowBuilder};

use flappy_game::{config::GameConfig, GameState};
use flappy_renderer::{State, WINDOW_TITLE};

#[wasm_bindgen(start)]
async fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Couldn't initialize logger");

    let config = GameConfig::default();

    let event_loop = EventLoop::new().unwrap();
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(config.screen_width, config.screen_height))
        .build(&event_loop)
        .unwrap();

    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::WindowExtWebSys;
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| {
                let canvas = web_sys::Element::from(window.canvas()?);
                doc.body()?.append_child(&canvas).ok()?;
                Some(())
            })
            .expect("Couldn't append canvas to document body.");
    }

    let clock = Clock::new();
    let seed = clock.seed();
    let game = GameState::new(config, seed);
    log::info!("Starting game, seed {}", seed);

    let mut state = State::new(&window, wgpu::Backends::GL, clock, game)
        .await
        .expect("Couldn't initialize renderer");

    let size = window.inner_size();
    state.resize(size);
    state.manual_size = true;

    state.run(event_loop).unwrap();
}

/// Reads time from `performance.now()`, in milliseconds.
struct Clock {
    performance: web_sys::Performance,
}

impl Clock {
    fn new() -> Self {
        let performance = web_sys::window()
            .and_then(|win| win.performance())
            .expect("Couldn't access window.performance");
        Self { performance }
    }

    fn seed(&self) -> u64 {
        (self.performance.time_origin() + self.performance.now()) as u64
    }
}

impl flappy_renderer::clock::Clock for Clock {
    type Instant = f64;

    fn now(&self) -> Self::Instant {
        self.performance.now()
    }

    fn elapsed(&self, start: Self::Instant, end: Self::Instant) -> Duration {
        Duration::from_secs_f64(((end - start) / 1000.0).max(0.0))
    }
}
