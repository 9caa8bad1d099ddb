//! Style resolution: semantic kind -> fill, outline and shape.
//!
//! All lookups are total. Unknown tiles get a neutral fill and a suppressed
//! (fully transparent) outline; unknown pickups get a generic light grey.

use crate::shared::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Zero alpha means "do not draw".
    pub fn is_visible(&self) -> bool {
        self.a > 0
    }

    pub fn to_f32(&self) -> (f32, f32, f32, f32) {
        (
            self.r as f32 / 255.,
            self.g as f32 / 255.,
            self.b as f32 / 255.,
            self.a as f32 / 255.,
        )
    }
}

/// How an entity is drawn. Radii are fractions of the tile size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
    Tile,
    Disc { radius: f32 },
    Ring { radius: f32 },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
    pub fill: Color,
    pub outline: Color,
    pub shape: Shape,
}

impl Style {
    pub fn has_outline(&self) -> bool {
        self.outline.is_visible()
    }
}

// Tiles:
const TILE_FALLBACK_FILL: Color = Color::rgb(50, 48, 60);
const DOOR_FILL: Color = Color::rgb(150, 120, 60);
const DOOR_OUTLINE: Color = Color::rgb(240, 190, 90);

// Pickups:
const PICKUP_RADIUS: f32 = 0.22;
const PICKUP_FALLBACK_FILL: Color = Color::rgb(220, 220, 220);

// Actors:
const PLAYER_RADIUS: f32 = 0.35;
const PLAYER_FILL: Color = Color::rgb(120, 200, 255);
const PLAYER_INVULNERABLE_FILL: Color = Color::rgb(255, 255, 180);
const PLAYER_OUTLINE: Color = Color::rgb(30, 30, 60);
const ENEMY_RADIUS: f32 = 0.32;
const SPITTER_FILL: Color = Color::rgb(220, 90, 90);
const ENEMY_FILL: Color = Color::rgb(200, 120, 120);
const ENEMY_OUTLINE: Color = Color::rgb(60, 20, 20);

// Projectiles and effects:
const PROJECTILE_RADIUS: f32 = 0.18;
const EFFECT_RADIUS: f32 = 0.28;

pub fn tile_fill(kind: TileKind) -> Color {
    match kind {
        TileKind::Floor => Color::rgb(60, 52, 65),
        TileKind::Wall => Color::rgb(90, 92, 112),
        TileKind::Pit => Color::rgb(20, 20, 32),
        TileKind::Rock => Color::rgb(120, 120, 140),
        TileKind::Spikes => Color::rgb(110, 40, 40),
        TileKind::Door(_) => DOOR_FILL,
        TileKind::Special => Color::rgb(100, 50, 130),
        TileKind::Unknown => TILE_FALLBACK_FILL,
    }
}

pub fn tile_outline(kind: TileKind) -> Color {
    match kind {
        TileKind::Wall => Color::rgba(15, 15, 25, 180),
        TileKind::Rock => Color::rgba(30, 30, 40, 200),
        TileKind::Spikes => Color::rgb(200, 40, 60),
        TileKind::Door(_) => DOOR_OUTLINE,
        TileKind::Special => Color::rgb(200, 120, 255),
        TileKind::Floor | TileKind::Pit | TileKind::Unknown => Color::TRANSPARENT,
    }
}

pub fn tile_style(kind: impl Into<TileKind>) -> Style {
    let kind = kind.into();
    Style {
        fill: tile_fill(kind),
        outline: tile_outline(kind),
        shape: Shape::Tile,
    }
}

pub fn pickup_style(kind: impl Into<PickupKind>) -> Style {
    let fill = match kind.into() {
        PickupKind::Heart => Color::rgb(220, 60, 80),
        PickupKind::Coin => Color::rgb(230, 200, 80),
        PickupKind::Key => Color::rgb(180, 180, 200),
        PickupKind::Bomb => Color::rgb(90, 90, 90),
        PickupKind::Unknown => PICKUP_FALLBACK_FILL,
    };
    Style {
        fill,
        outline: Color::TRANSPARENT,
        shape: Shape::Disc {
            radius: PICKUP_RADIUS,
        },
    }
}

pub fn actor_style(role: ActorRole, variant: ActorVariant, invulnerable: bool) -> Style {
    match role {
        ActorRole::Player => Style {
            fill: if invulnerable {
                PLAYER_INVULNERABLE_FILL
            } else {
                PLAYER_FILL
            },
            outline: PLAYER_OUTLINE,
            shape: Shape::Disc {
                radius: PLAYER_RADIUS,
            },
        },
        ActorRole::Enemy => Style {
            fill: match variant {
                ActorVariant::Spitter => SPITTER_FILL,
                ActorVariant::Generic => ENEMY_FILL,
            },
            outline: ENEMY_OUTLINE,
            shape: Shape::Disc {
                radius: ENEMY_RADIUS,
            },
        },
    }
}

pub fn projectile_style(owner: ProjectileOwner) -> Style {
    Style {
        fill: match owner {
            ProjectileOwner::Player => Color::rgb(150, 220, 255),
            ProjectileOwner::Other => Color::rgb(255, 150, 150),
        },
        outline: Color::TRANSPARENT,
        shape: Shape::Disc {
            radius: PROJECTILE_RADIUS,
        },
    }
}

pub fn effect_style(kind: EffectKind) -> Style {
    Style {
        fill: Color::TRANSPARENT,
        outline: match kind {
            EffectKind::BloodSplatter => Color::rgba(200, 40, 40, 180),
            EffectKind::Impact => Color::rgba(220, 220, 255, 180),
        },
        shape: Shape::Ring {
            radius: EFFECT_RADIUS,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tile_is_neutral_without_outline() {
        let style = tile_style("lava");
        assert_eq!(style.fill, TILE_FALLBACK_FILL);
        assert!(!style.has_outline());
    }

    #[test]
    fn floor_and_pit_have_no_outline() {
        assert!(!tile_style("floor").has_outline());
        assert!(!tile_style("pit").has_outline());
        assert!(tile_style("wall").has_outline());
    }

    #[test]
    fn doors_share_style() {
        let up = tile_style("door_up");
        for name in ["door_down", "door_left", "door_right"] {
            assert_eq!(tile_style(name), up);
        }
        assert_eq!(up.outline, DOOR_OUTLINE);
    }

    #[test]
    fn pickup_fallback() {
        assert_eq!(pickup_style("trinket").fill, PICKUP_FALLBACK_FILL);
        assert_ne!(pickup_style("coin").fill, PICKUP_FALLBACK_FILL);
        assert_eq!(pickup_style("coin").shape, Shape::Disc { radius: 0.22 });
    }

    #[test]
    fn player_two_tone() {
        let normal = actor_style(ActorRole::Player, ActorVariant::Generic, false);
        let flashing = actor_style(ActorRole::Player, ActorVariant::Generic, true);
        assert_ne!(normal.fill, flashing.fill);
        assert_eq!(normal.outline, flashing.outline);
        assert_eq!(normal.shape, Shape::Disc { radius: 0.35 });
    }

    #[test]
    fn enemy_two_tone_ignores_invulnerability() {
        let spitter = actor_style(ActorRole::Enemy, ActorVariant::Spitter, false);
        let generic = actor_style(ActorRole::Enemy, ActorVariant::Generic, false);
        assert_ne!(spitter.fill, generic.fill);
        assert_eq!(generic, actor_style(ActorRole::Enemy, ActorVariant::Generic, true));
        assert_eq!(generic.shape, Shape::Disc { radius: 0.32 });
    }

    #[test]
    fn effects_are_unfilled_rings() {
        let style = effect_style(EffectKind::Impact);
        assert!(!style.fill.is_visible());
        assert!(style.has_outline());
        assert_eq!(style.shape, Shape::Ring { radius: 0.28 });
    }
}
