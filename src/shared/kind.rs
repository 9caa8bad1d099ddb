// Semantic entity kinds as written by the simulation. Every string maps to
// some variant, unrecognised names land on the fallback variant.

#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String")]
pub enum TileKind {
    Floor,
    Wall,
    Pit,
    Rock,
    Spikes,
    Door(DoorSide),
    Special,
    Unknown,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DoorSide {
    Up,
    Down,
    Left,
    Right,
}

impl From<&str> for TileKind {
    fn from(name: &str) -> Self {
        match name {
            "floor" => TileKind::Floor,
            "wall" => TileKind::Wall,
            "pit" => TileKind::Pit,
            "rock" => TileKind::Rock,
            "spikes" => TileKind::Spikes,
            "door_up" => TileKind::Door(DoorSide::Up),
            "door_down" => TileKind::Door(DoorSide::Down),
            "door_left" => TileKind::Door(DoorSide::Left),
            "door_right" => TileKind::Door(DoorSide::Right),
            "special" => TileKind::Special,
            _ => TileKind::Unknown,
        }
    }
}

impl From<String> for TileKind {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum PickupKind {
    Heart,
    #[default]
    Coin,
    Key,
    Bomb,
    Unknown,
}

impl From<&str> for PickupKind {
    fn from(name: &str) -> Self {
        match name {
            "heart" => PickupKind::Heart,
            "coin" => PickupKind::Coin,
            "key" => PickupKind::Key,
            "bomb" => PickupKind::Bomb,
            _ => PickupKind::Unknown,
        }
    }
}

/// Actor `type`. Anything that is not the player is drawn as a hostile.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ActorRole {
    Player,
    #[default]
    Enemy,
}

impl From<&str> for ActorRole {
    fn from(name: &str) -> Self {
        match name {
            "player" => ActorRole::Player,
            _ => ActorRole::Enemy,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ActorVariant {
    Spitter,
    #[default]
    Generic,
}

impl From<&str> for ActorVariant {
    fn from(name: &str) -> Self {
        match name {
            "spitter" => ActorVariant::Spitter,
            _ => ActorVariant::Generic,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ProjectileOwner {
    #[default]
    Player,
    Other,
}

impl From<&str> for ProjectileOwner {
    fn from(name: &str) -> Self {
        match name {
            "player" => ProjectileOwner::Player,
            _ => ProjectileOwner::Other,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum EffectKind {
    BloodSplatter,
    #[default]
    Impact,
}

impl From<&str> for EffectKind {
    fn from(name: &str) -> Self {
        match name {
            "blood_splatter" => EffectKind::BloodSplatter,
            _ => EffectKind::Impact,
        }
    }
}
