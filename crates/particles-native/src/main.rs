use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Fullscreen, WindowBuilder},
};

use particles_core::{
    palette_color, FrameClock, GesturePipeline, ParticleAnimator, SceneConfig, SignalSmoother,
};

mod input;
mod render;
mod sim;

use input::{command_for_key, UiCommand};
use render::GpuState;
use sim::{SharedSimInput, SimulatedBackend};

// scroll distance treated as one wheel notch on touchpads
const PIXELS_PER_WHEEL_LINE: f32 = 40.0;

/// Everything that changes per frame apart from the GPU.
struct Scene {
    animator: ParticleAnimator,
    gestures: GesturePipeline<SimulatedBackend>,
    clock: FrameClock,
    sim: SharedSimInput,
}

impl Scene {
    fn new(config: &SceneConfig) -> Self {
        let sim = SharedSimInput::default();
        let animator = ParticleAnimator::new(
            config.shape,
            config.particle_count(),
            config.color,
            StdRng::from_entropy(),
        );
        let mut gestures = GesturePipeline::new(
            SimulatedBackend::new(sim.clone()),
            SignalSmoother::new(config.smoothing_alpha),
        );
        if config.tracking {
            gestures.set_enabled(true);
        }
        Self {
            animator,
            gestures,
            clock: FrameClock::new(),
            sim,
        }
    }

    fn apply(&mut self, command: UiCommand) {
        match command {
            UiCommand::SelectShape(shape) => self.animator.set_shape(shape),
            UiCommand::NextShape => {
                let next = self.animator.shape().next();
                self.animator.set_shape(next);
            }
            UiCommand::SelectColor(slot) => {
                if let Some(rgb) = palette_color(slot) {
                    self.animator.set_color(rgb);
                }
            }
            UiCommand::ToggleTracking => {
                self.gestures.toggle();
            }
            UiCommand::ToggleTwoHands => {
                let mut sim = self.sim.borrow_mut();
                sim.two_hands = !sim.two_hands;
                log::info!("[sim] {} hand mode", if sim.two_hands { "two" } else { "one" });
            }
            // window-level commands are handled by the event loop
            UiCommand::ToggleFullscreen | UiCommand::Quit => {}
        }
    }

    fn frame(&mut self) {
        let time = self.clock.tick();
        let signal = self.gestures.tick();
        self.animator.update(time, &signal);
    }

    fn title(&self) -> String {
        let status = if self.gestures.is_enabled() {
            self.gestures.signal().status_label()
        } else {
            "Tracking Off"
        };
        format!("Gesture Particles | {} | {}", self.animator.shape(), status)
    }
}

fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Character(s) => Some(s.as_str()),
        Key::Named(NamedKey::Tab) => Some("Tab"),
        Key::Named(NamedKey::Escape) => Some("Escape"),
        _ => None,
    }
}

fn toggle_fullscreen(window: &winit::window::Window) {
    if window.fullscreen().is_some() {
        window.set_fullscreen(None);
    } else {
        window.set_fullscreen(Some(Fullscreen::Borderless(None)));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = SceneConfig::from_args(std::env::args().skip(1))?;
    log::info!(
        "[scene] {} particles, shape {}, tracking {}",
        config.particle_count(),
        config.shape,
        if config.tracking { "on" } else { "off" }
    );
    let mut scene = Scene::new(&config);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(scene.title())
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window, scene.animator.count()))?;
    let mut title = scene.title();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => gpu.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                },
            ..
        } => match key_name(&logical_key).and_then(command_for_key) {
            Some(UiCommand::Quit) => elwt.exit(),
            Some(UiCommand::ToggleFullscreen) => toggle_fullscreen(gpu.window),
            Some(command) => scene.apply(command),
            None => {}
        },
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => {
            let size = gpu.window.inner_size();
            if size.width > 0 && size.height > 0 {
                let uv = Vec2::new(
                    position.x as f32 / size.width as f32,
                    position.y as f32 / size.height as f32,
                );
                let mut sim = scene.sim.borrow_mut();
                sim.cursor = uv.clamp(Vec2::ZERO, Vec2::ONE);
                sim.inside = true;
            }
        }
        Event::WindowEvent {
            event: WindowEvent::CursorEntered { .. },
            ..
        } => scene.sim.borrow_mut().inside = true,
        Event::WindowEvent {
            event: WindowEvent::CursorLeft { .. },
            ..
        } => scene.sim.borrow_mut().inside = false,
        Event::WindowEvent {
            event:
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                },
            ..
        } => scene.sim.borrow_mut().fist = state == ElementState::Pressed,
        Event::WindowEvent {
            event: WindowEvent::MouseWheel { delta, .. },
            ..
        } => {
            let lines = match delta {
                MouseScrollDelta::LineDelta(_, y) => y,
                MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_WHEEL_LINE,
            };
            scene.sim.borrow_mut().add_wheel_lines(lines);
        }
        Event::AboutToWait => {
            scene.frame();
            let next_title = scene.title();
            if next_title != title {
                gpu.window.set_title(&next_title);
                title = next_title;
            }
            match gpu.render(&scene.animator) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[gpu] out of memory");
                    elwt.exit()
                }
                Err(e) => log::warn!("[gpu] frame skipped: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
