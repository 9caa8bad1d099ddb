use std::time::{Duration, Instant};

lazy_static! {
    static ref PROGRAM_START: Instant = Instant::now();
}

pub fn get_microseconds_as_u64() -> u64 {
    let start = *PROGRAM_START;
    Instant::now().duration_since(start).as_nanos() as u64 / 1_000
}

/// Sleeps until ``time`` (in microseconds since program start) and returns the current time.
pub fn wait(time: u64) -> u64 {
    std::thread::sleep(Duration::from_micros(
        time.saturating_sub(get_microseconds_as_u64()),
    ));
    get_microseconds_as_u64()
}

/// Frame-rate hint: keeps ticks near a target cadence without guaranteeing it.
pub struct FramePacer {
    frametime: u64, // us
    deadline: u64,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        let frametime = 1_000_000 / target_fps.max(1) as u64;
        Self {
            frametime,
            deadline: get_microseconds_as_u64() + frametime,
        }
    }

    pub fn frametime(&self) -> u64 {
        self.frametime
    }

    /// Blocks until the current frame deadline, then schedules the next one.
    /// A tick that overran its slot starts the next slot from now rather than
    /// trying to catch up.
    pub fn pace(&mut self) -> u64 {
        let now = wait(self.deadline);
        self.deadline = if now > self.deadline + self.frametime {
            now + self.frametime
        } else {
            self.deadline + self.frametime
        };
        now
    }
}
