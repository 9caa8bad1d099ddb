use crate::client::scene::*;
use crate::client::style::*;
use crate::client::transform::RoomTransform;
use crate::shared::Effect;

use super::push_disc;

pub fn compose_effects(scene: &mut Scene, effects: &[Effect], transform: &RoomTransform) {
    for effect in effects {
        let style = effect_style(effect.kind);
        push_disc(scene, Layer::Effects, &style, transform, effect.x, effect.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::transform::*;
    use crate::shared::EffectKind;

    #[test]
    fn effects_are_outlines_only() {
        let transform = RoomTransform::new(&RoomMetrics::default(), &Viewport::new(100., 100.));
        let mut scene = Scene::new();
        let effects = [Effect {
            kind: EffectKind::BloodSplatter,
            x: 2.,
            y: 2.,
        }];
        compose_effects(&mut scene, &effects, &transform);
        let commands: Vec<&DrawCommand> = scene.commands().collect();
        assert_eq!(commands.len(), 1);
        assert!(matches!(
            commands[0],
            DrawCommand::StrokeCircle { radius, color, .. }
                if *radius == 32. * 0.28 && *color == effect_style(EffectKind::BloodSplatter).outline
        ));
    }
}
