use crate::client::scene::*;
use crate::client::style::*;
use crate::client::transform::RoomTransform;
use crate::shared::Projectile;

use super::push_disc;

pub fn compose_projectiles(scene: &mut Scene, projectiles: &[Projectile], transform: &RoomTransform) {
    for projectile in projectiles {
        let style = projectile_style(projectile.owner);
        push_disc(scene, Layer::Projectiles, &style, transform, projectile.x, projectile.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::transform::*;
    use crate::shared::ProjectileOwner;

    #[test]
    fn colour_keyed_by_owner() {
        let transform = RoomTransform::new(&RoomMetrics::default(), &Viewport::new(100., 100.));
        let mut scene = Scene::new();
        let shots = [
            Projectile { owner: ProjectileOwner::Player, x: 0., y: 0. },
            Projectile { owner: ProjectileOwner::Other, x: 0., y: 0. },
        ];
        compose_projectiles(&mut scene, &shots, &transform);
        let colors: Vec<Color> = scene
            .commands()
            .map(|command| match command {
                DrawCommand::FillCircle { color, radius, .. } => {
                    assert_eq!(*radius, 32. * 0.18);
                    *color
                }
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(colors.len(), 2);
        assert_ne!(colors[0], colors[1]);
    }
}
