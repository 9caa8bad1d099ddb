use crate::client::scene::*;
use crate::client::style::*;
use crate::client::transform::RoomTransform;
use crate::shared::Pickup;

pub fn compose_pickups(scene: &mut Scene, pickups: &[Pickup], transform: &RoomTransform) {
    for pickup in pickups {
        let style = pickup_style(pickup.kind);
        push_disc(scene, Layer::Pickups, &style, transform, pickup.x, pickup.y);
    }
}

/// Filled circle for a `Shape::Disc` style, plus its outline when it has one.
pub fn push_disc(
    scene: &mut Scene,
    layer: Layer,
    style: &Style,
    transform: &RoomTransform,
    x: f32,
    y: f32,
) {
    let radius = match style.shape {
        Shape::Disc { radius } | Shape::Ring { radius } => transform.scale(radius),
        Shape::Tile => transform.scale(0.5),
    };
    let center = transform.world_to_screen(x, y);

    if style.fill.is_visible() {
        scene.push(
            layer,
            DrawCommand::FillCircle {
                center,
                radius,
                color: style.fill,
            },
        );
    }
    if style.has_outline() {
        scene.push(
            layer,
            DrawCommand::StrokeCircle {
                center,
                radius,
                color: style.outline,
            },
        );
    }
}
