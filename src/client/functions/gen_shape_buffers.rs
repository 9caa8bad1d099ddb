use std::f32::consts::TAU;

use crate::client::scene::{DrawCommand, Rect};

const CIRCLE_SEGMENTS: usize = 32;
const CIRCLE_LINE_WIDTH: f32 = 1.0; // In pixels.

/// Appends the quads for one shape command and returns how many were added.
/// Every primitive is expressed as quads so one shared quad index buffer can
/// draw them all; circles use one (degenerate) quad per fan segment. Text
/// commands produce nothing here.
pub fn gen_shape_vertices(
    command: &DrawCommand,
    xy: &mut Vec<(f32, f32)>,
    rgba: &mut Vec<(f32, f32, f32, f32)>,
) -> usize {
    let (quads, color) = match command {
        DrawCommand::FillRect { rect, color } => {
            push_rect(xy, rect);
            (1, color)
        }
        DrawCommand::StrokeRect {
            rect,
            thickness,
            color,
        } => {
            // Drawn inside the rect bounds.
            let t = thickness.min(rect.w / 2.).min(rect.h / 2.);
            let Rect { x, y, w, h } = *rect;
            push_rect(xy, &Rect { x, y, w, h: t });
            push_rect(xy, &Rect { x, y: y + h - t, w, h: t });
            push_rect(xy, &Rect { x, y: y + t, w: t, h: h - 2. * t });
            push_rect(xy, &Rect { x: x + w - t, y: y + t, w: t, h: h - 2. * t });
            (4, color)
        }
        DrawCommand::FillCircle {
            center,
            radius,
            color,
        } => {
            for i in 0..CIRCLE_SEGMENTS {
                let a = circle_point(center.x, center.y, *radius, i);
                let b = circle_point(center.x, center.y, *radius, i + 1);
                xy.extend_from_slice(&[(center.x, center.y), a, b, b]);
            }
            (CIRCLE_SEGMENTS, color)
        }
        DrawCommand::StrokeCircle {
            center,
            radius,
            color,
        } => {
            let inner = (radius - CIRCLE_LINE_WIDTH / 2.).max(0.);
            let outer = radius + CIRCLE_LINE_WIDTH / 2.;
            for i in 0..CIRCLE_SEGMENTS {
                xy.extend_from_slice(&[
                    circle_point(center.x, center.y, inner, i),
                    circle_point(center.x, center.y, outer, i),
                    circle_point(center.x, center.y, outer, i + 1),
                    circle_point(center.x, center.y, inner, i + 1),
                ]);
            }
            (CIRCLE_SEGMENTS, color)
        }
        DrawCommand::Text { .. } => return 0,
    };

    let color = color.to_f32();
    rgba.extend(std::iter::repeat(color).take(4 * quads));
    quads
}

/// Quad count of a shape command without generating it.
pub fn shape_quad_count(command: &DrawCommand) -> usize {
    match command {
        DrawCommand::FillRect { .. } => 1,
        DrawCommand::StrokeRect { .. } => 4,
        DrawCommand::FillCircle { .. } | DrawCommand::StrokeCircle { .. } => CIRCLE_SEGMENTS,
        DrawCommand::Text { .. } => 0,
    }
}

fn push_rect(xy: &mut Vec<(f32, f32)>, rect: &Rect) {
    let Rect { x, y, w, h } = *rect;
    xy.extend_from_slice(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h)]);
}

fn circle_point(cx: f32, cy: f32, radius: f32, segment: usize) -> (f32, f32) {
    let angle = TAU * (segment % CIRCLE_SEGMENTS) as f32 / CIRCLE_SEGMENTS as f32;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}
