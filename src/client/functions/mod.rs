pub mod compose_actors;
pub mod compose_effects;
pub mod compose_hud;
pub mod compose_pickups;
pub mod compose_projectiles;
pub mod compose_tilemap;
pub mod gen_shape_buffers;
pub mod gen_text_buffers;

pub use self::compose_actors::*;
pub use self::compose_effects::*;
pub use self::compose_hud::*;
pub use self::compose_pickups::*;
pub use self::compose_projectiles::*;
pub use self::compose_tilemap::*;
pub use self::gen_shape_buffers::*;
pub use self::gen_text_buffers::*;
