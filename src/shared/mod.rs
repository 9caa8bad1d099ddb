pub mod input_frame;
pub mod kind;
pub mod snapshot;

pub use self::input_frame::*;
pub use self::kind::*;
pub use self::snapshot::*;

// Channel files (inside the shared directory):
pub const STATE_FILE: &str = "game_state.json"; // Written by the simulation.
pub const INPUT_FILE: &str = "input.json"; // Written by this client.

// Tilemap:
pub const DEFAULT_TILE_SIZE: f32 = 32.0; // Tile size (in pixels).
