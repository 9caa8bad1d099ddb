use crate::client::scene::*;
use crate::client::style::*;
use crate::client::transform::RoomTransform;
use crate::shared::{Actor, ActorRole};

use super::push_disc;

const BAR_WIDTH: f32 = 0.6; // Fraction of tile size.
const BAR_HEIGHT: f32 = 4.0; // In pixels.
const BAR_BACKGROUND: Color = Color::rgba(30, 10, 10, 180);
const BAR_FOREGROUND: Color = Color::rgba(220, 40, 40, 200);

pub fn compose_actors(scene: &mut Scene, actors: &[Actor], transform: &RoomTransform) {
    for actor in actors {
        let style = actor_style(actor.role, actor.variant, actor.invulnerable);
        push_disc(scene, Layer::Actors, &style, transform, actor.x, actor.y);

        // Only hostiles carry an overhead bar.
        if actor.role == ActorRole::Player {
            continue;
        }

        let center = transform.world_to_screen(actor.x, actor.y);
        let bar_width = transform.scale(BAR_WIDTH);
        let background = Rect {
            x: center.x - bar_width / 2.,
            y: center.y - transform.scale(0.5),
            w: bar_width,
            h: BAR_HEIGHT,
        };
        for command in health_bar(
            background,
            actor.hp,
            actor.max_hp,
            BAR_BACKGROUND,
            BAR_FOREGROUND,
        ) {
            scene.push(Layer::Actors, command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::transform::*;
    use crate::shared::ActorVariant;

    fn transform() -> RoomTransform {
        let room = RoomMetrics {
            width: 10,
            height: 8,
            tile_size: 32.,
        };
        RoomTransform::new(&room, &Viewport::new(1280., 720.))
    }

    fn actor(role: ActorRole, hp: i32, max_hp: i32) -> Actor {
        Actor {
            role,
            variant: ActorVariant::Generic,
            x: 1.,
            y: 1.,
            hp,
            max_hp,
            invulnerable: false,
        }
    }

    #[test]
    fn player_is_disc_and_outline_only() {
        let mut scene = Scene::new();
        compose_actors(&mut scene, &[actor(ActorRole::Player, 3, 6)], &transform());
        let commands: Vec<&DrawCommand> = scene.commands().collect();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], DrawCommand::FillCircle { radius, .. } if *radius == 32. * 0.35));
        assert!(matches!(commands[1], DrawCommand::StrokeCircle { .. }));
    }

    #[test]
    fn enemy_has_health_bar_above() {
        let mut scene = Scene::new();
        compose_actors(&mut scene, &[actor(ActorRole::Enemy, 1, 4)], &transform());
        let commands: Vec<&DrawCommand> = scene.commands().collect();
        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[0], DrawCommand::FillCircle { radius, .. } if *radius == 32. * 0.32));

        // Centre of tile (1, 1) is (528, 280).
        match (commands[2], commands[3]) {
            (DrawCommand::FillRect { rect: bg, .. }, DrawCommand::FillRect { rect: fg, .. }) => {
                assert!((bg.w - 19.2).abs() < 1e-4);
                assert!((bg.x - (528. - 9.6)).abs() < 1e-4);
                assert_eq!(bg.y, 264.);
                assert_eq!(bg.h, 4.);
                assert!((fg.w - 4.8).abs() < 1e-4);
                assert_eq!(fg.x, bg.x);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn overhealed_enemy_bar_does_not_overdraw() {
        let mut scene = Scene::new();
        compose_actors(&mut scene, &[actor(ActorRole::Enemy, 9, 3)], &transform());
        let rects: Vec<Rect> = scene
            .commands()
            .filter_map(|command| match command {
                DrawCommand::FillRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(rects[0].w, rects[1].w);
    }
}
