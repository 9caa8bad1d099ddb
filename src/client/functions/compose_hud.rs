use cgmath::Vector2;

use crate::client::scene::*;
use crate::client::style::Color;
use crate::client::transform::Viewport;
use crate::shared::{BossHealth, Meta, Ui};

// Messages (bottom-left, newest lowest):
const MESSAGE_X: f32 = 20.;
const MESSAGE_BOTTOM_MARGIN: f32 = 20.;
const MESSAGE_LINE_HEIGHT: f32 = 22.;
const MESSAGE_SIZE: f32 = 18.;
const MESSAGE_COLOR: Color = Color::rgb(230, 230, 230);

// Boss bar (bottom-centre):
const BOSS_BAR_WIDTH: f32 = 0.4; // Fraction of viewport width.
const BOSS_BAR_HEIGHT: f32 = 18.;
const BOSS_BAR_BOTTOM_OFFSET: f32 = 60.;
const BOSS_BAR_BACKGROUND: Color = Color::rgba(40, 10, 10, 200);
const BOSS_BAR_FOREGROUND: Color = Color::rgb(200, 40, 40);
const BOSS_NAME_OFFSET: f32 = 22.;
const BOSS_NAME_SIZE: f32 = 20.;
const BOSS_NAME_COLOR: Color = Color::rgb(240, 240, 240);

// Hearts and counters (top-left):
const HEART_SIZE: f32 = 20.;
const HEART_SPACING: f32 = 6.;
const HEART_ORIGIN: (f32, f32) = (20., 20.);
const HEART_FULL: Color = Color::rgb(220, 30, 60);
const HEART_EMPTY: Color = Color::rgb(80, 40, 40);
const HEART_OUTLINE: Color = Color::rgb(30, 10, 10);
const HEART_OUTLINE_THICKNESS: f32 = 1.5;
const MAX_HEARTS: i32 = 100;
const COUNTERS_POSITION: (f32, f32) = (20., 50.);
const COUNTERS_SIZE: f32 = 20.;
const COUNTERS_COLOR: Color = Color::rgb(235, 235, 235);

pub fn compose_hud(scene: &mut Scene, ui: Option<&Ui>, meta: Option<&Meta>, viewport: &Viewport) {
    if let Some(ui) = ui {
        compose_messages(scene, &ui.messages, viewport);
        if let Some(boss) = &ui.boss_health {
            compose_boss_health(scene, boss, viewport);
        }
    }
    if let Some(meta) = meta {
        compose_meta(scene, meta);
    }
}

/// Walks messages newest first, each one line higher than the last.
fn compose_messages(scene: &mut Scene, messages: &[String], viewport: &Viewport) {
    let mut y = viewport.height - MESSAGE_BOTTOM_MARGIN;
    for text in messages.iter().rev() {
        y -= MESSAGE_LINE_HEIGHT;
        scene.push(
            Layer::Hud,
            DrawCommand::Text {
                text: text.clone(),
                position: Vector2::new(MESSAGE_X, y),
                size: MESSAGE_SIZE,
                color: MESSAGE_COLOR,
            },
        );
    }
}

fn compose_boss_health(scene: &mut Scene, boss: &BossHealth, viewport: &Viewport) {
    let width = viewport.width * BOSS_BAR_WIDTH;
    let background = Rect {
        x: (viewport.width - width) * 0.5,
        y: viewport.height - BOSS_BAR_BOTTOM_OFFSET,
        w: width,
        h: BOSS_BAR_HEIGHT,
    };
    for command in health_bar(
        background,
        boss.hp,
        boss.max_hp,
        BOSS_BAR_BACKGROUND,
        BOSS_BAR_FOREGROUND,
    ) {
        scene.push(Layer::Hud, command);
    }
    scene.push(
        Layer::Hud,
        DrawCommand::Text {
            text: boss.name.clone(),
            position: Vector2::new(background.x, background.y - BOSS_NAME_OFFSET),
            size: BOSS_NAME_SIZE,
            color: BOSS_NAME_COLOR,
        },
    );
}

fn compose_meta(scene: &mut Scene, meta: &Meta) {
    let (start_x, start_y) = HEART_ORIGIN;
    for i in 0..meta.player_max_hp.min(MAX_HEARTS) {
        let rect = Rect {
            x: start_x + i as f32 * (HEART_SIZE + HEART_SPACING),
            y: start_y,
            w: HEART_SIZE,
            h: HEART_SIZE,
        };
        let fill = if i < meta.player_hp {
            HEART_FULL
        } else {
            HEART_EMPTY
        };
        scene.push(Layer::Hud, DrawCommand::FillRect { rect, color: fill });
        scene.push(
            Layer::Hud,
            DrawCommand::StrokeRect {
                rect,
                thickness: HEART_OUTLINE_THICKNESS,
                color: HEART_OUTLINE,
            },
        );
    }

    scene.push(
        Layer::Hud,
        DrawCommand::Text {
            text: format!(
                "Coins: {}  Keys: {}  Bombs: {}",
                meta.coins, meta.keys, meta.bombs
            ),
            position: Vector2::new(COUNTERS_POSITION.0, COUNTERS_POSITION.1),
            size: COUNTERS_SIZE,
            color: COUNTERS_COLOR,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::GameStateSnapshot;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.,
        height: 720.,
    };

    fn hud(json: &str) -> Scene {
        let snapshot = GameStateSnapshot::from_slice(json.as_bytes()).unwrap();
        let mut scene = Scene::new();
        compose_hud(
            &mut scene,
            snapshot.ui.as_ref(),
            snapshot.meta.as_ref(),
            &VIEWPORT,
        );
        scene
    }

    fn texts(scene: &Scene) -> Vec<(String, f32)> {
        scene
            .commands()
            .filter_map(|command| match command {
                DrawCommand::Text { text, position, .. } => Some((text.clone(), position.y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn messages_stack_upwards_newest_lowest() {
        let scene = hud(r#"{"ui": {"messages": ["A", "B", "C"]}}"#);
        let lines = texts(&scene);
        assert_eq!(
            lines,
            vec![
                ("C".to_string(), 720. - 42.),
                ("B".to_string(), 720. - 64.),
                ("A".to_string(), 720. - 86.),
            ]
        );
    }

    #[test]
    fn missing_or_null_boss_draws_no_bar() {
        assert!(hud(r#"{"ui": {}}"#).is_empty());
        assert!(hud(r#"{"ui": {"boss_health": null}}"#).is_empty());
    }

    #[test]
    fn boss_bar_is_centred_with_label() {
        let scene = hud(r#"{"ui": {"boss_health": {"name": "Monstro", "hp": 25, "max_hp": 100}}}"#);
        let commands: Vec<&DrawCommand> = scene.commands().collect();
        assert_eq!(commands.len(), 3);
        match (commands[0], commands[1], commands[2]) {
            (
                DrawCommand::FillRect { rect: bg, .. },
                DrawCommand::FillRect { rect: fg, .. },
                DrawCommand::Text { text, position, .. },
            ) => {
                assert_eq!(bg.w, 512.);
                assert_eq!(bg.x, 384.);
                assert_eq!(bg.y, 660.);
                assert_eq!(fg.w, 128.);
                assert_eq!(text, "Monstro");
                assert_eq!((position.x, position.y), (384., 638.));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn one_heart_per_max_hp_point() {
        let scene = hud(r#"{"meta": {"player_hp": 2, "player_max_hp": 3, "coins": 5, "keys": 1, "bombs": 0}}"#);
        let fills: Vec<Color> = scene
            .commands()
            .filter_map(|command| match command {
                DrawCommand::FillRect { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(fills, vec![HEART_FULL, HEART_FULL, HEART_EMPTY]);
        assert_eq!(
            texts(&scene),
            vec![("Coins: 5  Keys: 1  Bombs: 0".to_string(), 50.)]
        );
    }

    #[test]
    fn default_meta_draws_a_single_empty_heart() {
        let scene = hud(r#"{"meta": {}}"#);
        let hearts = scene
            .commands()
            .filter(|command| matches!(command, DrawCommand::FillRect { .. }))
            .count();
        assert_eq!(hearts, 1);
    }

    #[test]
    fn hud_order_is_messages_boss_meta() {
        let scene = hud(r#"{
            "meta": {"player_max_hp": 1},
            "ui": {"messages": ["m"], "boss_health": {"name": "b"}}
        }"#);
        let names: Vec<String> = texts(&scene).into_iter().map(|(text, _)| text).collect();
        assert_eq!(names[0], "m");
        assert_eq!(names[1], "b");
        assert!(names[2].starts_with("Coins"));
    }
}
