/// A direction composed from an opposing key pair per axis; each component is -1, 0 or 1.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Default)]
pub struct Axis {
    pub x: f32,
    pub y: f32,
}

impl Axis {
    pub const ZERO: Axis = Axis { x: 0., y: 0. };

    pub fn from_keys(left: bool, right: bool, up: bool, down: bool) -> Self {
        Self {
            x: (right as i8 - left as i8) as f32,
            y: (down as i8 - up as i8) as f32,
        }
    }
}

/// Local player input for one tick, as written to `input.json`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Default)]
pub struct InputFrame {
    #[serde(rename = "move")]
    pub movement: Axis,
    pub attack: Axis,
    pub bomb: bool,
    pub use_item: bool,
    pub pause: bool,
    pub quit: bool,
}

impl InputFrame {
    /// The terminal frame: `quit` set, everything else neutral.
    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_keys_cancel() {
        assert_eq!(Axis::from_keys(true, true, true, true), Axis::ZERO);
        assert_eq!(Axis::from_keys(true, false, false, true), Axis { x: -1., y: 1. });
    }

    #[test]
    fn wire_shape() {
        let value = serde_json::to_value(InputFrame::quit()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "move": {"x": 0.0, "y": 0.0},
                "attack": {"x": 0.0, "y": 0.0},
                "bomb": false,
                "use_item": false,
                "pause": false,
                "quit": true
            })
        );
    }
}
