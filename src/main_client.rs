use anyhow::Context;
use glutin::{
    dpi::LogicalSize, event_loop::EventLoop, window::WindowBuilder, Api, ContextBuilder, GlRequest,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roguelike_client::client::game_render::{load_font, GlSurface};
use roguelike_client::client::input_event::*;
use roguelike_client::client::{GameLoop, Phase};
use roguelike_client::config::ClientConfig;
use roguelike_client::time::FramePacer;

fn main() -> anyhow::Result<()> {
    // Load .env before reading any configuration.
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env()?;
    init_tracing(&config.log_level);
    info!("starting client, shared directory {:?}", config.shared_dir);

    // Build window and event loop.
    let event_loop = EventLoop::new();
    let windowed_context = ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, (4, 1)))
        .with_vsync(true)
        .build_windowed(
            WindowBuilder::new()
                .with_title(config.window_title.as_str())
                .with_inner_size(LogicalSize::new(
                    config.window_width as f64,
                    config.window_height as f64,
                )),
            &event_loop,
        )
        .context("failed to create window")?;

    // Text is optional; without a font the HUD draws shapes only.
    let font = config.font_path.as_deref().and_then(|path| match load_font(path) {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("{}", err);
            None
        }
    });
    if config.font_path.is_none() {
        warn!("no font found, HUD text disabled");
    }

    let surface = GlSurface::new(windowed_context, font).context("failed to initialize surface")?;

    // Create communication channels.
    let (input_send, input_recv) = crossbeam_channel::unbounded();
    let mut game_loop = GameLoop::new(&config, surface, input_recv);
    let mut pacer = FramePacer::new(config.target_fps);

    // Handle input (This call permanently hijacks main).
    event_loop.run(move |event, _, out| {
        use glutin::dpi::*;
        use glutin::event::*;
        use glutin::event_loop::*;

        *out = ControlFlow::Poll;
        let input_event = match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => InputEvent::Close,
                WindowEvent::Resized(PhysicalSize { width, height }) => {
                    InputEvent::WindowResize(width, height)
                }
                WindowEvent::Focused(state) => InputEvent::Focused(state),

                // Keyboard input.
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    // Map key state.
                    let key_state = match state {
                        ElementState::Pressed => KeyState::Down,
                        ElementState::Released => KeyState::Up,
                    };

                    // Map key type.
                    let input_key = match key {
                        VirtualKeyCode::W => InputKey::W,
                        VirtualKeyCode::A => InputKey::A,
                        VirtualKeyCode::S => InputKey::S,
                        VirtualKeyCode::D => InputKey::D,
                        VirtualKeyCode::Left => InputKey::Left,
                        VirtualKeyCode::Right => InputKey::Right,
                        VirtualKeyCode::Up => InputKey::Up,
                        VirtualKeyCode::Down => InputKey::Down,
                        VirtualKeyCode::Space => InputKey::Space,
                        VirtualKeyCode::E => InputKey::E,
                        VirtualKeyCode::P => InputKey::P,
                        VirtualKeyCode::Escape => InputKey::Escape,
                        _ => return,
                    };

                    InputEvent::KeyEvent(key_state, input_key)
                }
                _ => return,
            },

            // One tick per drained batch of window events.
            Event::MainEventsCleared => {
                pacer.pace();
                if game_loop.tick() == Phase::Terminated {
                    info!("client closed");
                    *out = ControlFlow::Exit;
                }
                return;
            }
            _ => return,
        };

        // The receiver lives in the loop; a send can only fail after shutdown.
        input_send.send(input_event).ok();
    });
}

fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
