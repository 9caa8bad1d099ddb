pub mod error;
pub mod functions;
pub mod game_render;
pub mod input_channel;
pub mod input_event;
pub mod input_state;
pub mod scene;
pub mod state_channel;
pub mod style;
pub mod surface;
pub mod transform;

use crossbeam_channel::Receiver;
use tracing::{debug, info, warn};

use self::input_channel::*;
use self::input_event::*;
use self::input_state::*;
use self::scene::*;
use self::state_channel::*;
use self::surface::*;
use crate::config::ClientConfig;
use crate::time::*;

pub fn time<T>(t: &mut u64, mut f: impl FnMut() -> T) -> T {
    let start = get_microseconds_as_u64();
    let out = f();
    *t += get_microseconds_as_u64() - start;
    out
}

// Frame statistics are printed this often.
const STATS_INTERVAL_US: u64 = 5_000_000;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Init,
    Running,
    ShuttingDown,
    Terminated,
}

#[derive(Debug, Default)]
struct FrameStats {
    since: u64,
    ticks: u64,
    channel_us: u64,
    compose_us: u64,
    present_us: u64,
}

/// Owns one session of the client: surface, channels and the lifecycle.
pub struct GameLoop<S: Surface> {
    phase: Phase,
    surface: Option<S>,
    events: Receiver<InputEvent>,
    shared_dir: std::path::PathBuf,

    input_state: InputState,
    input_channel: InputChannel,
    state_channel: StateChannel,
    composer: SceneComposer,

    stats: FrameStats,
}

impl<S: Surface> GameLoop<S> {
    pub fn new(config: &ClientConfig, surface: S, events: Receiver<InputEvent>) -> Self {
        let viewport = surface.viewport();
        Self {
            phase: Phase::Init,
            surface: Some(surface),
            events,
            shared_dir: config.shared_dir.clone(),

            input_state: InputState::new(),
            input_channel: InputChannel::new(&config.shared_dir),
            state_channel: StateChannel::new(&config.shared_dir),
            composer: SceneComposer::new(viewport),

            stats: FrameStats::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input_channel(&self) -> &InputChannel {
        &self.input_channel
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Advances the state machine by one step and returns the phase it ends in.
    pub fn tick(&mut self) -> Phase {
        match self.phase {
            Phase::Init => self.start(),
            Phase::Running => {
                self.run_tick();
                if self.input_state.close_requested() {
                    self.transition(Phase::ShuttingDown);
                }
            }
            Phase::ShuttingDown => self.shutdown(),
            Phase::Terminated => {}
        }
        self.phase
    }

    fn start(&mut self) {
        if let Err(err) = ensure_shared_dir(&self.shared_dir) {
            warn!("{}", err);
        }
        info!(
            "state {:?}, input {:?}",
            self.state_channel.path(),
            self.input_channel.path()
        );
        self.stats.since = get_microseconds_as_u64();
        self.transition(Phase::Running);
    }

    fn run_tick(&mut self) {
        let Self {
            surface,
            events,
            input_state,
            input_channel,
            state_channel,
            composer,
            stats,
            ..
        } = self;
        let surface = match surface {
            Some(surface) => surface,
            None => return,
        };

        // Input out, state in. A close request leaves the quit frame as the
        // only write that follows it.
        let closing = time(&mut stats.channel_us, || {
            let frame = input_state.capture(events.try_iter());
            if input_state.close_requested() {
                return true;
            }
            input_channel.publish(&frame);
            state_channel.poll();
            false
        });
        if closing {
            return;
        }

        if let Some((width, height)) = input_state.take_resize() {
            surface.resize(width, height);
            composer.set_viewport(surface.viewport());
        }

        let scene = time(&mut stats.compose_us, || {
            composer.compose(state_channel.snapshot(), state_channel.room())
        });

        time(&mut stats.present_us, || {
            if let Err(err) = surface.present(&scene) {
                warn!("{}", err);
            }
        });

        stats.ticks += 1;
        self.print_stats();
    }

    fn shutdown(&mut self) {
        self.input_channel.publish_quit();
        if let Some(mut surface) = self.surface.take() {
            surface.release();
        }
        info!(
            "{} of {} input frames written",
            self.input_channel.written(),
            self.input_channel.attempts()
        );
        self.transition(Phase::Terminated);
    }

    fn transition(&mut self, phase: Phase) {
        info!("{:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn print_stats(&mut self) {
        let now = get_microseconds_as_u64();
        let stats = &mut self.stats;
        if now.saturating_sub(stats.since) < STATS_INTERVAL_US || stats.ticks == 0 {
            return;
        }

        let per_tick = |us: u64| us as f32 / (stats.ticks as f32 * 1000.);
        debug!(
            "Frame: {:.03}ms, Channels: {:.03}ms, Compose: {:.03}ms, Present: {:.03}ms",
            per_tick(stats.channel_us + stats.compose_us + stats.present_us),
            per_tick(stats.channel_us),
            per_tick(stats.compose_us),
            per_tick(stats.present_us),
        );
        *stats = FrameStats {
            since: now,
            ..FrameStats::default()
        };
    }
}
