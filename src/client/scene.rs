use cgmath::Vector2;

use super::functions::*;
use super::style::Color;
use super::transform::*;
use crate::shared::GameStateSnapshot;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// One drawing-primitive call, in screen pixels (origin top-left, y down).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        thickness: f32,
        color: Color,
    },
    FillCircle {
        center: Vector2<f32>,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Vector2<f32>,
        radius: f32,
        color: Color,
    },
    /// `position` is the top-left corner of the text box.
    Text {
        text: String,
        position: Vector2<f32>,
        size: f32,
        color: Color,
    },
}

/// Layers in draw order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Tilemap,
    Pickups,
    Actors,
    Projectiles,
    Effects,
    Hud,
}

/// Ordered draw list for one tick.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scene {
    commands: Vec<(Layer, DrawCommand)>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, layer: Layer, command: DrawCommand) {
        self.commands.push((layer, command));
    }

    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands.iter().map(|(_, command)| command)
    }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(move |(l, _)| *l == layer)
            .map(|(_, command)| command)
    }

    pub fn layers(&self) -> impl Iterator<Item = Layer> + '_ {
        self.commands.iter().map(|(layer, _)| *layer)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Maps a snapshot onto a layered scene for the current viewport.
pub struct SceneComposer {
    viewport: Viewport,
}

impl SceneComposer {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn compose(&self, snapshot: &GameStateSnapshot, room: &RoomMetrics) -> Scene {
        let transform = RoomTransform::new(room, &self.viewport);
        let mut scene = Scene::new();

        // Fixed layer order, independent of the document's key order.
        if let Some(tilemap) = &snapshot.tilemap {
            compose_tilemap(&mut scene, tilemap, &transform);
        }
        if let Some(pickups) = &snapshot.pickups {
            compose_pickups(&mut scene, pickups, &transform);
        }
        if let Some(actors) = &snapshot.actors {
            compose_actors(&mut scene, actors, &transform);
        }
        if let Some(projectiles) = &snapshot.projectiles {
            compose_projectiles(&mut scene, projectiles, &transform);
        }
        if let Some(effects) = &snapshot.effects {
            compose_effects(&mut scene, effects, &transform);
        }
        compose_hud(
            &mut scene,
            snapshot.ui.as_ref(),
            snapshot.meta.as_ref(),
            &self.viewport,
        );

        scene
    }
}

/// Fill fraction of a health bar, clamped to [0, 1].
pub fn health_fraction(hp: i32, max_hp: i32) -> f32 {
    (hp as f32 / max_hp.max(1) as f32).clamp(0., 1.)
}

/// Background and foreground of a horizontal health bar.
pub fn health_bar(
    background: Rect,
    hp: i32,
    max_hp: i32,
    background_color: Color,
    foreground_color: Color,
) -> [DrawCommand; 2] {
    let foreground = Rect {
        w: background.w * health_fraction(hp, max_hp),
        ..background
    };
    [
        DrawCommand::FillRect {
            rect: background,
            color: background_color,
        },
        DrawCommand::FillRect {
            rect: foreground,
            color: foreground_color,
        },
    ]
}
