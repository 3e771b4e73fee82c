// File: crates/brief-render-skia/src/raster.rs
// Summary: Headless rasterization of chart drawings using Skia CPU raster surfaces.

use std::f32::consts::PI;
use std::path::Path;

use brief_core::drawing::{Drawing, Primitive, Stroke};
use brief_core::{Color, RenderError};
use log::debug;
use skia_safe as skia;

use crate::text::TextShaper;

#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    /// Device pixels per drawing unit.
    pub scale: f32,
    /// Text is skipped when false, which keeps pixel snapshots independent of installed fonts.
    pub draw_text: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 1.0, draw_text: true }
    }
}

fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(s: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(s.width);
    paint.set_color(sk_color(s.color));
    paint
}

fn fill_paint(c: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(sk_color(c));
    paint
}

pub struct SkiaRenderer {
    text: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    fn surface(&self, drawing: &Drawing, opts: &RasterOptions) -> Result<skia::Surface, RenderError> {
        let width = ((drawing.width as f32) * opts.scale).round().max(1.0) as i32;
        let height = ((drawing.height as f32) * opts.scale).round().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(RenderError::Surface { width, height })?;
        let canvas = surface.canvas();
        canvas.clear(drawing.background.map(sk_color).unwrap_or(skia::Color::TRANSPARENT));
        canvas.scale((opts.scale, opts.scale));
        for p in &drawing.primitives {
            self.draw_primitive(canvas, p, opts);
        }
        debug!("rasterized {} primitives into {}x{}", drawing.len(), width, height);
        Ok(surface)
    }

    fn draw_primitive(&self, canvas: &skia::Canvas, p: &Primitive, opts: &RasterOptions) {
        match p {
            Primitive::Line { from, to, stroke } => {
                canvas.draw_line((from.x, from.y), (to.x, to.y), &stroke_paint(stroke));
            }
            Primitive::Polyline { points, stroke } => {
                let Some((first, rest)) = points.split_first() else { return };
                let mut path = skia::Path::new();
                path.move_to((first.x, first.y));
                for pt in rest {
                    path.line_to((pt.x, pt.y));
                }
                let mut paint = stroke_paint(stroke);
                paint.set_stroke_join(skia::paint::Join::Round);
                paint.set_stroke_cap(skia::paint::Cap::Round);
                canvas.draw_path(&path, &paint);
            }
            Primitive::Circle { center, radius, fill, stroke } => {
                if let Some(c) = fill {
                    canvas.draw_circle((center.x, center.y), *radius, &fill_paint(*c));
                }
                if let Some(s) = stroke {
                    canvas.draw_circle((center.x, center.y), *radius, &stroke_paint(s));
                }
            }
            Primitive::Rect { rect, fill, corner_radius } => {
                let r = skia::Rect::from_xywh(rect.left, rect.top, rect.width, rect.height);
                canvas.draw_round_rect(r, *corner_radius, *corner_radius, &fill_paint(*fill));
            }
            Primitive::Arc { center, radius, offset, length, stroke } => {
                if *length <= 0.0 {
                    return;
                }
                let circumference = 2.0 * PI * radius;
                let start = -90.0 + offset / circumference * 360.0;
                let sweep = length / circumference * 360.0;
                let oval = skia::Rect::from_ltrb(center.x - radius, center.y - radius, center.x + radius, center.y + radius);
                canvas.draw_arc(oval, start, sweep, false, &stroke_paint(stroke));
            }
            Primitive::Text { pos, content, size, color, anchor, weight } => {
                if opts.draw_text {
                    self.text.draw_anchored(canvas, content, pos.x, pos.y, *size, sk_color(*color), *anchor, *weight);
                }
            }
        }
    }

    /// Render into a tightly packed RGBA8 buffer. Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, drawing: &Drawing, opts: &RasterOptions) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        let mut surface = self.surface(drawing, opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Encode("rgba8"));
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    pub fn render_to_png_bytes(&self, drawing: &Drawing, opts: &RasterOptions) -> Result<Vec<u8>, RenderError> {
        let mut surface = self.surface(drawing, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode("png"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render `drawing` to a PNG at `path`, creating parent directories.
    pub fn render_to_png(&self, drawing: &Drawing, opts: &RasterOptions, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        let bytes = self.render_to_png_bytes(drawing, opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RenderError::io(parent, e))?;
        }
        std::fs::write(path, bytes).map_err(|e| RenderError::io(path, e))
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}
