use super::input_event::*;
use crate::shared::{Axis, InputFrame};

// Each key keeps a bit queue: bit 0 is "down this tick", bit 1 "down last tick".
#[derive(Debug, Default)]
struct KeyQueue(u8);

impl KeyQueue {
    // Shift left, cloning right most bit.
    fn advance(&mut self) {
        self.0 = self.0 & 1 | self.0 << 1;
    }

    fn set(&mut self, down: bool) {
        if down {
            self.0 |= 1;
        } else {
            self.0 &= !1;
        }
    }

    fn held(&self) -> bool {
        self.0 & 0b1 == 1
    }

    fn pressed(&self) -> bool {
        self.0 & 0b1 == 1 && self.0 & 0b10 == 0
    }
}

/// Turns the event stream into one `InputFrame` per tick.
#[derive(Debug, Default)]
pub struct InputState {
    // Movement:
    up: KeyQueue,
    down: KeyQueue,
    left: KeyQueue,
    right: KeyQueue,

    // Attack:
    attack_up: KeyQueue,
    attack_down: KeyQueue,
    attack_left: KeyQueue,
    attack_right: KeyQueue,

    // Actions:
    bomb: KeyQueue,
    use_item: KeyQueue,
    pause: KeyQueue,
    quit: KeyQueue,

    close_requested: bool,
    resize: Option<(u32, u32)>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies this tick's events and returns the captured frame.
    pub fn capture(&mut self, events: impl Iterator<Item = InputEvent>) -> InputFrame {
        for queue in self.queues_mut() {
            queue.advance();
        }

        for event in events {
            match event {
                InputEvent::KeyEvent(state, key) => self.queue_mut(key).set(state == KeyState::Down),
                InputEvent::Focused(false) => {
                    for queue in self.queues_mut() {
                        queue.set(false);
                    }
                }
                InputEvent::Focused(true) => {}
                InputEvent::WindowResize(w, h) => self.resize = Some((w, h)),
                InputEvent::Close => self.close_requested = true,
            }
        }

        let frame = InputFrame {
            movement: Axis::from_keys(
                self.left.held(),
                self.right.held(),
                self.up.held(),
                self.down.held(),
            ),
            attack: Axis::from_keys(
                self.attack_left.held(),
                self.attack_right.held(),
                self.attack_up.held(),
                self.attack_down.held(),
            ),
            bomb: self.bomb.pressed(),
            use_item: self.use_item.pressed(),
            pause: self.pause.pressed(),
            quit: self.quit.pressed(),
        };

        // The quit key doubles as a local close request.
        if frame.quit {
            self.close_requested = true;
        }

        frame
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Most recent window size reported since the last call.
    pub fn take_resize(&mut self) -> Option<(u32, u32)> {
        self.resize.take()
    }

    fn queue_mut(&mut self, key: InputKey) -> &mut KeyQueue {
        match key {
            InputKey::W => &mut self.up,
            InputKey::S => &mut self.down,
            InputKey::A => &mut self.left,
            InputKey::D => &mut self.right,
            InputKey::Up => &mut self.attack_up,
            InputKey::Down => &mut self.attack_down,
            InputKey::Left => &mut self.attack_left,
            InputKey::Right => &mut self.attack_right,
            InputKey::Space => &mut self.bomb,
            InputKey::E => &mut self.use_item,
            InputKey::P => &mut self.pause,
            InputKey::Escape => &mut self.quit,
        }
    }

    fn queues_mut(&mut self) -> [&mut KeyQueue; 12] {
        [
            &mut self.up,
            &mut self.down,
            &mut self.left,
            &mut self.right,
            &mut self.attack_up,
            &mut self.attack_down,
            &mut self.attack_left,
            &mut self.attack_right,
            &mut self.bomb,
            &mut self.use_item,
            &mut self.pause,
            &mut self.quit,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(key: InputKey) -> InputEvent {
        InputEvent::KeyEvent(KeyState::Down, key)
    }

    fn up(key: InputKey) -> InputEvent {
        InputEvent::KeyEvent(KeyState::Up, key)
    }

    #[test]
    fn idle_frame_is_neutral() {
        let mut state = InputState::new();
        assert_eq!(state.capture(std::iter::empty()), InputFrame::default());
    }

    #[test]
    fn movement_is_held() {
        let mut state = InputState::new();
        let frame = state.capture(vec![down(InputKey::W), down(InputKey::D)].into_iter());
        assert_eq!(frame.movement, Axis { x: 1., y: -1. });
        let frame = state.capture(std::iter::empty());
        assert_eq!(frame.movement, Axis { x: 1., y: -1. });
        let frame = state.capture(vec![up(InputKey::W)].into_iter());
        assert_eq!(frame.movement, Axis { x: 1., y: 0. });
    }

    #[test]
    fn opposing_attack_keys_cancel() {
        let mut state = InputState::new();
        let frame = state.capture(vec![down(InputKey::Left), down(InputKey::Right), down(InputKey::Down)].into_iter());
        assert_eq!(frame.attack, Axis { x: 0., y: 1. });
    }

    #[test]
    fn actions_are_edge_triggered() {
        let mut state = InputState::new();
        assert!(state.capture(vec![down(InputKey::Space)].into_iter()).bomb);
        assert!(!state.capture(std::iter::empty()).bomb);
        let frame = state.capture(vec![up(InputKey::Space), down(InputKey::E)].into_iter());
        assert!(!frame.bomb);
        assert!(frame.use_item);
        assert!(state.capture(vec![up(InputKey::E), down(InputKey::Space)].into_iter()).bomb);
    }

    #[test]
    fn focus_loss_releases_keys() {
        let mut state = InputState::new();
        state.capture(vec![down(InputKey::A), down(InputKey::Up)].into_iter());
        let frame = state.capture(vec![InputEvent::Focused(false)].into_iter());
        assert_eq!(frame, InputFrame::default());
    }

    #[test]
    fn escape_requests_close() {
        let mut state = InputState::new();
        let frame = state.capture(vec![down(InputKey::Escape)].into_iter());
        assert!(frame.quit);
        assert!(state.close_requested());
    }

    #[test]
    fn close_and_resize_events() {
        let mut state = InputState::new();
        let frame = state.capture(vec![InputEvent::WindowResize(800, 600), InputEvent::WindowResize(640, 480), InputEvent::Close].into_iter());
        assert!(!frame.quit);
        assert!(state.close_requested());
        assert_eq!(state.take_resize(), Some((640, 480)));
        assert_eq!(state.take_resize(), None);
    }
}
