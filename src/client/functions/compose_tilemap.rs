use crate::client::scene::*;
use crate::client::style::*;
use crate::client::transform::RoomTransform;
use crate::shared::Tilemap;

const TILE_OUTLINE_THICKNESS: f32 = 1.0;

pub fn compose_tilemap(scene: &mut Scene, tilemap: &Tilemap, transform: &RoomTransform) {
    for (y, row) in tilemap.tiles.iter().enumerate() {
        for (x, &kind) in row.iter().enumerate() {
            let rect = transform.tile_rect(x, y);
            let style = tile_style(kind);
            scene.push(
                Layer::Tilemap,
                DrawCommand::FillRect {
                    rect,
                    color: style.fill,
                },
            );

            // Suppressed outlines emit nothing.
            if style.has_outline() {
                scene.push(
                    Layer::Tilemap,
                    DrawCommand::StrokeRect {
                        rect,
                        thickness: TILE_OUTLINE_THICKNESS,
                        color: style.outline,
                    },
                );
            }
        }
    }
}
