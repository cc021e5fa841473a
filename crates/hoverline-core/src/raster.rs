// File: crates/hoverline-core/src/raster.rs
// Summary: PNG rasterization of a display list using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::frame::{Frame, Primitive, TextAnchor};
use crate::theme::Color;

fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub fn to_png(frame: &Frame) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((frame.width.max(1) as i32, frame.height.max(1) as i32))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(skia::Color::TRANSPARENT);

    for p in &frame.primitives {
        draw_primitive(canvas, p);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

fn stroke_paint(color: Color, width: f64) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width as f32);
    paint.set_color(sk_color(color));
    paint
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(sk_color(color));
    paint
}

fn draw_primitive(canvas: &skia::Canvas, p: &Primitive) {
    match p {
        Primitive::Rect { x, y, width, height, radius, fill } => {
            let rect = skia::Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32);
            canvas.draw_round_rect(rect, *radius as f32, *radius as f32, &fill_paint(*fill));
        }
        Primitive::Path { points, stroke, width } => {
            if points.len() < 2 {
                return;
            }
            let mut path = skia::Path::new();
            let (x0, y0) = points[0];
            path.move_to((x0 as f32, y0 as f32));
            for &(x, y) in points.iter().skip(1) {
                path.line_to((x as f32, y as f32));
            }
            canvas.draw_path(&path, &stroke_paint(*stroke, *width));
        }
        Primitive::Line { x1, y1, x2, y2, stroke, width, dash } => {
            let mut paint = stroke_paint(*stroke, *width);
            if let Some((on, off)) = dash {
                paint.set_path_effect(skia::PathEffect::dash(&[*on as f32, *off as f32], 0.0));
            }
            canvas.draw_line((*x1 as f32, *y1 as f32), (*x2 as f32, *y2 as f32), &paint);
        }
        Primitive::Circle { cx, cy, r, fill, stroke, stroke_width } => {
            let center = (*cx as f32, *cy as f32);
            canvas.draw_circle(center, *r as f32, &fill_paint(*fill));
            canvas.draw_circle(center, *r as f32, &stroke_paint(*stroke, *stroke_width));
        }
        Primitive::Text { x, y, text, size, color, anchor } => {
            let paint = fill_paint(*color);
            let mut font = skia::Font::default();
            font.set_size(*size as f32);
            let (advance, _) = font.measure_str(text, Some(&paint));
            let left = match anchor {
                TextAnchor::Start => *x as f32,
                TextAnchor::Middle => *x as f32 - advance * 0.5,
                TextAnchor::End => *x as f32 - advance,
            };
            canvas.draw_str(text, (left, *y as f32), &font, &paint);
        }
    }
}
