/// Platform-neutral window and keyboard events, forwarded by the event loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    WindowResize(u32, u32),
    Focused(bool),
    KeyEvent(KeyState, InputKey),
    Close,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyState {
    Up,
    Down,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputKey {
    W,
    A,
    S,
    D,
    Left,
    Right,
    Up,
    Down,
    Space,
    E,
    P,
    Escape,
}
