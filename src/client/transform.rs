use cgmath::Vector2;

use super::scene::Rect;
use crate::shared::*;

/// Room dimensions cached from the most recent snapshot that carried a tilemap.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoomMetrics {
    pub width: i32,  // In tiles.
    pub height: i32, // In tiles.
    pub tile_size: f32,
}

impl Default for RoomMetrics {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl RoomMetrics {
    pub fn from_tilemap(tilemap: &Tilemap) -> Self {
        Self {
            width: tilemap.width,
            height: tilemap.height,
            tile_size: tilemap.tile_size,
        }
    }

    pub fn size_px(&self) -> Vector2<f32> {
        Vector2::new(
            self.width as f32 * self.tile_size,
            self.height as f32 * self.tile_size,
        )
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// World (tile units) to screen (pixels), with the room centred in the viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RoomTransform {
    pub offset: Vector2<f32>,
    pub tile_size: f32,
}

impl RoomTransform {
    pub fn new(room: &RoomMetrics, viewport: &Viewport) -> Self {
        let room_px = room.size_px();
        Self {
            offset: Vector2::new(
                (viewport.width - room_px.x) * 0.5,
                (viewport.height - room_px.y) * 0.5,
            ),
            tile_size: room.tile_size,
        }
    }

    /// Entity positions are tile-centred.
    pub fn world_to_screen(&self, x: f32, y: f32) -> Vector2<f32> {
        self.offset + Vector2::new(x + 0.5, y + 0.5) * self.tile_size
    }

    pub fn tile_rect(&self, x: usize, y: usize) -> Rect {
        Rect {
            x: self.offset.x + x as f32 * self.tile_size,
            y: self.offset.y + y as f32 * self.tile_size,
            w: self.tile_size,
            h: self.tile_size,
        }
    }

    /// Scales a tile-relative length to pixels.
    pub fn scale(&self, fraction: f32) -> f32 {
        fraction * self.tile_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(width: i32, height: i32, tile_size: f32) -> RoomMetrics {
        RoomMetrics {
            width,
            height,
            tile_size,
        }
    }

    #[test]
    fn centres_room_in_viewport() {
        let transform = RoomTransform::new(&room(10, 8, 32.), &Viewport::new(1280., 720.));
        assert_eq!(transform.offset, Vector2::new(480., 232.));
    }

    #[test]
    fn transform_is_idempotent() {
        let viewport = Viewport::new(1280., 720.);
        let a = RoomTransform::new(&room(10, 8, 32.), &viewport);
        let b = RoomTransform::new(&room(10, 8, 32.), &viewport);
        assert_eq!(a, b);
        assert_eq!(a.world_to_screen(2., 3.), a.world_to_screen(2., 3.));
    }

    #[test]
    fn entities_are_tile_centred() {
        let transform = RoomTransform::new(&room(10, 8, 32.), &Viewport::new(1280., 720.));
        assert_eq!(transform.world_to_screen(0., 0.), Vector2::new(496., 248.));
        assert_eq!(transform.world_to_screen(2., 1.), Vector2::new(480. + 80., 232. + 48.));
    }

    #[test]
    fn tile_rects_are_corner_anchored() {
        let transform = RoomTransform::new(&room(10, 8, 32.), &Viewport::new(1280., 720.));
        assert_eq!(
            transform.tile_rect(1, 2),
            Rect {
                x: 512.,
                y: 296.,
                w: 32.,
                h: 32.
            }
        );
    }

    #[test]
    fn room_larger_than_viewport_has_negative_offset() {
        let transform = RoomTransform::new(&room(50, 30, 32.), &Viewport::new(1280., 720.));
        assert_eq!(transform.offset, Vector2::new(-160., -120.));
    }

    #[test]
    fn empty_room_offset_is_viewport_centre() {
        let transform = RoomTransform::new(&RoomMetrics::default(), &Viewport::new(1280., 720.));
        assert_eq!(transform.offset, Vector2::new(640., 360.));
    }
}
