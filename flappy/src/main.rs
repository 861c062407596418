use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use winit::{dpi::LogicalSize, event_loop::EventLoop, window::WindowBuilder};

use flappy_game::{config::GameConfig, GameState};
use flappy_renderer::{State, WINDOW_TITLE};

/// Guide the bird through the pipes. Space to flap, Enter to restart after
/// game over, Escape to quit.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Playfield width in pixels.
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u16).range(400..=3840))]
    width: u16,

    /// Playfield height in pixels.
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u16).range(400..=2160))]
    height: u16,

    /// Seed for cloud placement. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(time_seed);
    let config = GameConfig::with_screen_size(args.width.into(), args.height.into());
    log::info!(
        "Starting {}x{} game, seed {}",
        config.screen_width,
        config.screen_height,
        seed
    );

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(config.screen_width, config.screen_height))
        .with_resizable(false)
        .build(&event_loop)
        .context("failed to create window")?;

    let game = GameState::new(config, seed);
    let mut state = pollster::block_on(State::new(
        &window,
        wgpu::Backends::PRIMARY,
        Clock,
        game,
    ))
    .context("failed to initialise renderer")?;

    state.run(event_loop).context("event loop failed")?;
    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

struct Clock;

impl flappy_renderer::clock::Clock for Clock {
    type Instant = Instant;

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn elapsed(&self, start: Self::Instant, end: Self::Instant) -> Duration {
        end.saturating_duration_since(start)
    }
}
