use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use cgmath::Vector2;

use crate::client::style::Color;

/// Rasterizes one line of text into a tightly sized RGBA image.
/// Returns `(width, height, pixels)`; pixels carry `color` with glyph coverage in alpha.
pub fn gen_text_pixels(font: &FontArc, text: &str, size: f32, color: Color) -> (usize, usize, Vec<u8>) {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let ascent = scaled.ascent();

    // Layout.
    let mut glyphs = Vec::with_capacity(text.len());
    let mut caret = 0f32;
    let mut prev: Option<GlyphId> = None;
    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = prev {
            caret += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(caret, ascent)));
        caret += scaled.h_advance(id);
        prev = Some(id);
    }

    let width = caret.ceil().max(1.) as usize;
    let height = scaled.height().ceil().max(1.) as usize;
    let mut pixels = vec![0u8; 4 * width * height];
    for px in pixels.chunks_exact_mut(4) {
        px[0] = color.r;
        px[1] = color.g;
        px[2] = color.b;
    }

    // Raster.
    for glyph in glyphs {
        let outlined = match font.outline_glyph(glyph) {
            Some(outlined) => outlined,
            None => continue, // Whitespace.
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            let x = bounds.min.x as i32 + gx as i32;
            let y = bounds.min.y as i32 + gy as i32;
            if x < 0 || y < 0 || x as usize >= width || y as usize >= height {
                return;
            }
            let alpha = &mut pixels[4 * (x as usize + y as usize * width) + 3];
            let value = (coverage.clamp(0., 1.) * color.a as f32) as u8;
            *alpha = (*alpha).max(value);
        });
    }

    (width, height, pixels)
}

/// Screen quad and texture coordinates for a `width` x `height` text image at `position`.
pub fn gen_text_quad(
    position: Vector2<f32>,
    width: usize,
    height: usize,
) -> ([(f32, f32); 4], [(f32, f32); 4]) {
    let (x, y) = (position.x.round(), position.y.round());
    let (w, h) = (width as f32, height as f32);
    (
        [(x, y), (x + w, y), (x + w, y + h), (x, y + h)],
        [(0., 0.), (1., 0.), (1., 1.), (0., 1.)],
    )
}
