use wgpu::util::DeviceExt;
use winit::{
    error::EventLoopError,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use flappy_game::{command::Command, ticker::Ticker, GameState};

use crate::{
    clock::Clock,
    scene::{Palette, Scene},
};

pub use crate::error::RendererError;

pub mod clock;
pub mod font;
pub mod scene;

mod camera;
mod error;
mod shape_renderer;

pub const WINDOW_TITLE: &str = "Flappy Bird Animation";

/// Maps a pressed key to the game command it triggers, if any.
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Space => Some(Command::Jump),
        KeyCode::Enter | KeyCode::NumpadEnter => Some(Command::Restart),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurfaceAction {
    Reconfigure,
    Skip,
    Exit,
}

fn surface_error_action(err: &wgpu::SurfaceError) -> SurfaceAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceAction::Reconfigure,
        wgpu::SurfaceError::Timeout => SurfaceAction::Skip,
        wgpu::SurfaceError::OutOfMemory | wgpu::SurfaceError::Other => SurfaceAction::Exit,
    }
}

pub struct State<'a, C: Clock> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    pub manual_size: bool,
    window: &'a Window,
    camera_bind_group: wgpu::BindGroup,
    shape_renderer: shape_renderer::ShapeRenderer,
    palette: Palette,
    game: GameState,
    ticker: Ticker,
    clock: C,
    last_frame: C::Instant,
}

impl<'a, C: Clock> State<'a, C> {
    pub async fn new(
        window: &'a Window,
        backends: wgpu::Backends,
        clock: C,
        game: GameState,
    ) -> Result<Self, RendererError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RendererError::NoAdapter)?;
        log::info!("Using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: adapter.limits(),
                    label: None,
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);

        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);
        if !surface_format.is_srgb() {
            log::warn!("No sRGB surface format, colours will look washed out");
        }
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let camera = camera::Camera::new(game.snapshot().screen_size);

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera.build_view_projection_matrix()]),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
                label: Some("camera_bind_group_layout"),
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        let shape_renderer =
            shape_renderer::ShapeRenderer::new(&device, &camera_bind_group_layout, config.format);

        let ticker = Ticker::new(game.config.tick_interval);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            manual_size: false,
            window,
            camera_bind_group,
            shape_renderer,
            palette: Palette::default(),
            game,
            ticker,
            last_frame: clock.now(),
            clock,
        })
    }

    pub fn run(&mut self, event_loop: EventLoop<()>) -> Result<(), EventLoopError> {
        event_loop.run(move |event, control_flow| {
            if let Event::WindowEvent {
                ref event,
                window_id,
            } = event
            {
                if window_id != self.window.id() || self.input(event) {
                    return;
                }
                match event {
                    WindowEvent::CloseRequested
                    | WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                state: ElementState::Pressed,
                                physical_key:
                                    PhysicalKey::Code(KeyCode::Escape | KeyCode::KeyQ),
                                ..
                            },
                        ..
                    } => {
                        log::info!("Closing with score {}", self.game.run.score);
                        control_flow.exit();
                    }
                    WindowEvent::Resized(physical_size) => {
                        if !self.manual_size {
                            self.resize(*physical_size);
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        self.window.request_redraw();

                        self.update();
                        if let Err(err) = self.render() {
                            match surface_error_action(&err) {
                                SurfaceAction::Reconfigure => self.resize(self.size),
                                SurfaceAction::Skip => log::warn!("Surface error: {err}"),
                                SurfaceAction::Exit => {
                                    log::error!("Surface error: {err}");
                                    control_flow.exit();
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }

        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => match command_for_key(*code) {
                Some(command) => {
                    self.command(command);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn command(&mut self, command: Command) {
        if !self.game.handle(command) {
            return;
        }
        if command == Command::Restart {
            self.ticker.start();
            self.last_frame = self.clock.now();
            log::info!("Restarted");
        }
    }

    fn update(&mut self) {
        let this_frame = self.clock.now();
        let elapsed = self.clock.elapsed(self.last_frame, this_frame);
        self.last_frame = this_frame;
        if !self.ticker.is_running() {
            return;
        }

        for _ in 0..self.ticker.advance(elapsed) {
            let outcome = self.game.advance();
            if outcome.night_toggled {
                log::debug!("Night: {}", self.game.run.night);
            }
            if outcome.game_over {
                self.ticker.stop();
                log::info!(
                    "Game Over! Score: {}. Press Enter to restart.",
                    self.game.run.score
                );
                break;
            }
            if outcome.life_lost {
                log::info!("Life lost, {} remaining", self.game.run.lives);
            }
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if self.size.width == 0 || self.size.height == 0 {
            return Ok(());
        }

        let scene = Scene::build(&self.game.snapshot(), &self.palette);
        self.shape_renderer
            .update(&self.device, &self.queue, &scene.shapes);

        let output = self.surface.get_current_texture()?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let [r, g, b, a] = scene.clear_color.map(f64::from);
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            self.shape_renderer
                .render(&mut render_pass, &self.camera_bind_group);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_jumps_and_enter_restarts() {
        assert_eq!(command_for_key(KeyCode::Space), Some(Command::Jump));
        assert_eq!(command_for_key(KeyCode::Enter), Some(Command::Restart));
        assert_eq!(command_for_key(KeyCode::NumpadEnter), Some(Command::Restart));
        assert_eq!(command_for_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn surface_errors_are_reported_by_their_own_name() {
        let err = wgpu::SurfaceError::Other;
        assert_eq!(surface_error_action(&err), SurfaceAction::Exit);
        assert!(!err.to_string().contains("memory"));

        assert_eq!(
            surface_error_action(&wgpu::SurfaceError::OutOfMemory),
            SurfaceAction::Exit
        );
        assert_eq!(
            surface_error_action(&wgpu::SurfaceError::Outdated),
            SurfaceAction::Reconfigure
        );
        assert_eq!(
            surface_error_action(&wgpu::SurfaceError::Timeout),
            SurfaceAction::Skip
        );
    }

    #[test]
    fn window_title_names_the_game() {
        assert_eq!(WINDOW_TITLE, "Flappy Bird Animation");
    }
}
