//! The simulation's state document.
//!
//! Every field is optional on the wire. Documents are first read into `Raw*`
//! structures (all `Option`, JSON `null` counts as missing) and then converted
//! into the typed snapshot, so the default table is applied exactly once at
//! parse time. Unknown keys are ignored; a type mismatch anywhere rejects the
//! whole document.

use super::kind::*;
use super::DEFAULT_TILE_SIZE;

/// One complete state document. Sections that were absent stay `None` and
/// contribute nothing to the scene.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GameStateSnapshot {
    pub tilemap: Option<Tilemap>,
    pub actors: Option<Vec<Actor>>,
    pub pickups: Option<Vec<Pickup>>,
    pub projectiles: Option<Vec<Projectile>>,
    pub effects: Option<Vec<Effect>>,
    pub ui: Option<Ui>,
    pub meta: Option<Meta>,
}

impl GameStateSnapshot {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawTilemap")]
pub struct Tilemap {
    /// Row-major, `tiles[y][x]`. Rows may differ in length.
    pub tiles: Vec<Vec<TileKind>>,
    pub tile_size: f32,
    pub width: i32,  // In tiles.
    pub height: i32, // In tiles.
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawActor")]
pub struct Actor {
    pub role: ActorRole,
    pub variant: ActorVariant,
    pub x: f32,
    pub y: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub invulnerable: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawPickup")]
pub struct Pickup {
    pub kind: PickupKind,
    pub x: f32,
    pub y: f32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawProjectile")]
pub struct Projectile {
    pub owner: ProjectileOwner,
    pub x: f32,
    pub y: f32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawEffect")]
pub struct Effect {
    pub kind: EffectKind,
    pub x: f32,
    pub y: f32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawUi")]
pub struct Ui {
    /// Oldest first.
    pub messages: Vec<String>,
    pub boss_health: Option<BossHealth>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawBossHealth")]
pub struct BossHealth {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawMeta")]
pub struct Meta {
    pub player_hp: i32,
    pub player_max_hp: i32,
    pub coins: i32,
    pub keys: i32,
    pub bombs: i32,
}

// Wire layer.

#[derive(Deserialize)]
struct RawTilemap {
    tiles: Option<Vec<Vec<TileKind>>>,
    tile_size: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
}

#[derive(Deserialize)]
struct RawActor {
    #[serde(rename = "type")]
    role: Option<String>,
    variant: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
    hp: Option<f64>,
    max_hp: Option<f64>,
    invulnerable: Option<bool>,
}

#[derive(Deserialize)]
struct RawPickup {
    kind: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
}

#[derive(Deserialize)]
struct RawProjectile {
    owner: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
}

#[derive(Deserialize)]
struct RawEffect {
    kind: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
}

#[derive(Deserialize)]
struct RawUi {
    messages: Option<Vec<String>>,
    boss_health: Option<BossHealth>,
}

#[derive(Deserialize)]
struct RawBossHealth {
    name: Option<String>,
    hp: Option<f64>,
    max_hp: Option<f64>,
}

#[derive(Deserialize)]
struct RawMeta {
    player_hp: Option<f64>,
    player_max_hp: Option<f64>,
    coins: Option<f64>,
    keys: Option<f64>,
    bombs: Option<f64>,
}

fn int_or(value: Option<f64>, default: i32) -> i32 {
    value.map(|v| v as i32).unwrap_or(default)
}

fn coord(value: Option<f64>) -> f32 {
    value.unwrap_or(0.0) as f32
}

fn kind_or_default<K: for<'a> From<&'a str> + Default>(name: Option<String>) -> K {
    name.as_deref().map(K::from).unwrap_or_default()
}

impl From<RawTilemap> for Tilemap {
    fn from(raw: RawTilemap) -> Self {
        Self {
            tiles: raw.tiles.unwrap_or_default(),
            tile_size: raw.tile_size.map(|v| v as f32).unwrap_or(DEFAULT_TILE_SIZE),
            width: int_or(raw.width, 0),
            height: int_or(raw.height, 0),
        }
    }
}

impl From<RawActor> for Actor {
    fn from(raw: RawActor) -> Self {
        Self {
            role: kind_or_default(raw.role),
            variant: kind_or_default(raw.variant),
            x: coord(raw.x),
            y: coord(raw.y),
            hp: int_or(raw.hp, 0),
            max_hp: int_or(raw.max_hp, 1),
            invulnerable: raw.invulnerable.unwrap_or(false),
        }
    }
}

impl From<RawPickup> for Pickup {
    fn from(raw: RawPickup) -> Self {
        Self {
            kind: kind_or_default(raw.kind),
            x: coord(raw.x),
            y: coord(raw.y),
        }
    }
}

impl From<RawProjectile> for Projectile {
    fn from(raw: RawProjectile) -> Self {
        Self {
            owner: kind_or_default(raw.owner),
            x: coord(raw.x),
            y: coord(raw.y),
        }
    }
}

impl From<RawEffect> for Effect {
    fn from(raw: RawEffect) -> Self {
        Self {
            kind: kind_or_default(raw.kind),
            x: coord(raw.x),
            y: coord(raw.y),
        }
    }
}

impl From<RawUi> for Ui {
    fn from(raw: RawUi) -> Self {
        Self {
            messages: raw.messages.unwrap_or_default(),
            boss_health: raw.boss_health,
        }
    }
}

impl From<RawBossHealth> for BossHealth {
    fn from(raw: RawBossHealth) -> Self {
        Self {
            name: raw.name.unwrap_or_else(|| String::from("Boss")),
            hp: int_or(raw.hp, 0),
            max_hp: int_or(raw.max_hp, 1),
        }
    }
}

impl From<RawMeta> for Meta {
    fn from(raw: RawMeta) -> Self {
        let player_hp = int_or(raw.player_hp, 0);
        Self {
            player_hp,
            player_max_hp: int_or(raw.player_max_hp, player_hp.max(1)),
            coins: int_or(raw.coins, 0),
            keys: int_or(raw.keys, 0),
            bombs: int_or(raw.bombs, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GameStateSnapshot {
        GameStateSnapshot::from_slice(json.as_bytes()).unwrap()
    }

    #[test]
    fn empty_object_has_no_sections() {
        assert_eq!(parse("{}"), GameStateSnapshot::default());
    }

    #[test]
    fn null_sections_are_absent() {
        let snapshot = parse(r#"{"tilemap": null, "actors": null, "ui": null, "meta": null}"#);
        assert_eq!(snapshot, GameStateSnapshot::default());
    }

    #[test]
    fn actor_defaults() {
        let snapshot = parse(r#"{"actors": [{}]}"#);
        let actor = &snapshot.actors.unwrap()[0];
        assert_eq!(actor.role, ActorRole::Enemy);
        assert_eq!(actor.variant, ActorVariant::Generic);
        assert_eq!((actor.x, actor.y), (0.0, 0.0));
        assert_eq!((actor.hp, actor.max_hp), (0, 1));
        assert!(!actor.invulnerable);
    }

    #[test]
    fn tilemap_defaults() {
        let tilemap = parse(r#"{"tilemap": {}}"#).tilemap.unwrap();
        assert!(tilemap.tiles.is_empty());
        assert_eq!(tilemap.tile_size, 32.0);
        assert_eq!((tilemap.width, tilemap.height), (0, 0));
    }

    #[test]
    fn meta_max_hp_defaults_to_hp() {
        let meta = parse(r#"{"meta": {"player_hp": 4}}"#).meta.unwrap();
        assert_eq!(meta.player_max_hp, 4);
        let meta = parse(r#"{"meta": {}}"#).meta.unwrap();
        assert_eq!(meta.player_max_hp, 1);
    }

    #[test]
    fn boss_health_defaults_and_null() {
        let ui = parse(r#"{"ui": {"boss_health": {}}}"#).ui.unwrap();
        let boss = ui.boss_health.unwrap();
        assert_eq!(boss.name, "Boss");
        assert_eq!((boss.hp, boss.max_hp), (0, 1));
        assert!(ui.messages.is_empty());

        let ui = parse(r#"{"ui": {"messages": ["hi"], "boss_health": null}}"#).ui.unwrap();
        assert_eq!(ui.boss_health, None);
        assert_eq!(ui.messages, vec!["hi".to_string()]);
    }

    #[test]
    fn simulation_document_parses() {
        let json = r#"{
            "meta": {"tick": 3, "delta_time": 0.016, "player_hp": 6, "player_max_hp": 6,
                     "coins": 2, "keys": 1, "bombs": 1, "rng_seed": null, "messages": []},
            "tilemap": {"width": 3, "height": 1, "tile_size": 32, "tiles": [["wall", "door_up", "lava"]]},
            "actors": [{"id": "player", "type": "player", "variant": "isaac", "x": 1.5, "y": 0.5,
                        "dir_x": 0.0, "hp": 6, "max_hp": 6, "invulnerable": true, "items": []}],
            "projectiles": [{"id": "p1", "owner": "enemy", "kind": "tear", "x": 1, "y": 2,
                             "vx": 0.0, "vy": 1.0, "damage": 1, "ttl": 2.0, "radius": 0.2}],
            "pickups": [{"id": "k", "kind": "key", "x": 2.0, "y": 0.0}],
            "effects": [{"id": "e", "kind": "blood_splatter", "x": 0.0, "y": 0.0, "ttl": 0.3}],
            "ui": {"messages": ["Picked up key"], "boss_health": null}
        }"#;
        let snapshot = parse(json);
        let tilemap = snapshot.tilemap.unwrap();
        assert_eq!(tilemap.tiles[0], vec![TileKind::Wall, TileKind::Door(DoorSide::Up), TileKind::Unknown]);
        let actor = &snapshot.actors.unwrap()[0];
        assert_eq!(actor.role, ActorRole::Player);
        assert!(actor.invulnerable);
        assert_eq!(snapshot.projectiles.unwrap()[0].owner, ProjectileOwner::Other);
        assert_eq!(snapshot.pickups.unwrap()[0].kind, PickupKind::Key);
        assert_eq!(snapshot.effects.unwrap()[0].kind, EffectKind::BloodSplatter);
        assert_eq!(snapshot.meta.unwrap().coins, 2);
    }

    #[test]
    fn float_integers_truncate() {
        let actor = &parse(r#"{"actors": [{"hp": 2.9, "max_hp": 5.0}]}"#).actors.unwrap()[0];
        assert_eq!((actor.hp, actor.max_hp), (2, 5));
    }

    #[test]
    fn type_mismatch_rejects_document() {
        assert!(GameStateSnapshot::from_slice(br#"{"tilemap": {"tiles": [[1, 2]]}}"#).is_err());
        assert!(GameStateSnapshot::from_slice(br#"{"actors": [{"x": "left"}]}"#).is_err());
        assert!(GameStateSnapshot::from_slice(b"[]").is_err());
        assert!(GameStateSnapshot::from_slice(br#"{"actors": [{"x": 1"#).is_err());
    }
}
