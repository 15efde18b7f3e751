/// Software rasterizer: replays a display list onto an RGBA canvas

use std::io::Cursor;

use image::buffer::ConvertBuffer;
use image::{ImageFormat, Rgba as Px, RgbImage, RgbaImage};

use crate::rendering::layout::Rect;
use crate::rendering::paint::{DisplayList, PaintCommand, Rgba};
use crate::rendering::text::{FontBook, GlyphBitmap};
use crate::rendering::Screenshot;
use crate::{Error, Result, Viewport};

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        let (r, g, b, _) = background;
        Self {
            image: RgbaImage::from_pixel(width, height, Px([r, g, b, 255])),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let p = self.image.get_pixel(x, y);
        (p[0], p[1], p[2], p[3])
    }

    /// Composite `rgba` over the pixel, with its alpha scaled by `coverage`.
    /// The canvas is opaque, so the destination alpha stays at 255.
    fn blend(&mut self, x: i32, y: i32, rgba: Rgba, coverage: u8) {
        if x < 0 || y < 0 || x >= self.width() as i32 || y >= self.height() as i32 {
            return;
        }
        let alpha = rgba.3 as u32 * coverage as u32 / 255;
        if alpha == 0 {
            return;
        }
        let inv = 255 - alpha;
        let mix = |fg: u8, bg: u8| ((fg as u32 * alpha + bg as u32 * inv + 127) / 255) as u8;
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        *dst = Px([mix(rgba.0, dst[0]), mix(rgba.1, dst[1]), mix(rgba.2, dst[2]), 255]);
    }

    /// Clamp `rect` to the canvas; `None` when nothing is visible.
    fn visible(&self, rect: &Rect) -> Option<(i32, i32, i32, i32)> {
        let x0 = rect.x.max(0);
        let y0 = rect.y.max(0);
        let x1 = rect.right().min(self.width() as i32);
        let y1 = rect.bottom().min(self.height() as i32);
        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some((x0, y0, x1, y1))
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, rgba: Rgba) {
        let Some((x0, y0, x1, y1)) = self.visible(&rect) else {
            return;
        };
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, rgba, 255);
            }
        }
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: u32, rgba: Rgba) {
        let Some((x0, y0, x1, y1)) = self.visible(&rect) else {
            return;
        };
        for py in y0..y1 {
            for px in x0..x1 {
                if inside_rounded(&rect, radius, px, py) {
                    self.blend(px, py, rgba, 255);
                }
            }
        }
    }

    pub fn stroke_rounded_rect(&mut self, rect: Rect, radius: u32, rgba: Rgba) {
        let inner = rect.inset(1);
        let inner_radius = radius.saturating_sub(1);
        let Some((x0, y0, x1, y1)) = self.visible(&rect) else {
            return;
        };
        for py in y0..y1 {
            for px in x0..x1 {
                if inside_rounded(&rect, radius, px, py) && !inside_rounded(&inner, inner_radius, px, py) {
                    self.blend(px, py, rgba, 255);
                }
            }
        }
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, rgba: Rgba) {
        let outer = radius as f32 + 0.5;
        self.shade_disc(cx, cy, radius, rgba, |d| d <= outer);
    }

    pub fn stroke_circle(&mut self, cx: i32, cy: i32, radius: u32, rgba: Rgba) {
        let outer = radius as f32 + 0.5;
        let inner = radius as f32 - 0.5;
        self.shade_disc(cx, cy, radius, rgba, |d| d <= outer && d > inner);
    }

    fn shade_disc<F>(&mut self, cx: i32, cy: i32, radius: u32, rgba: Rgba, hit: F)
    where
        F: Fn(f32) -> bool,
    {
        let r = radius as i32;
        for py in (cy - r)..=(cy + r) {
            for px in (cx - r)..=(cx + r) {
                let dx = (px - cx) as f32;
                let dy = (py - cy) as f32;
                if hit((dx * dx + dy * dy).sqrt()) {
                    self.blend(px, py, rgba, 255);
                }
            }
        }
    }

    pub fn draw_glyphs(&mut self, x: i32, y: i32, glyphs: &[GlyphBitmap], rgba: Rgba) {
        for glyph in glyphs {
            for (i, &coverage) in glyph.coverage.iter().enumerate() {
                if coverage == 0 {
                    continue;
                }
                let px = x + glyph.x + (i % glyph.width) as i32;
                let py = y + glyph.y + (i / glyph.width) as i32;
                self.blend(px, py, rgba, coverage);
            }
        }
    }

    pub fn apply(&mut self, cmd: &PaintCommand, fonts: &mut FontBook) {
        match cmd {
            PaintCommand::FillRect { rect, rgba } => self.fill_rect(*rect, *rgba),
            PaintCommand::FillRoundedRect { rect, radius, rgba } => self.fill_rounded_rect(*rect, *radius, *rgba),
            PaintCommand::StrokeRoundedRect { rect, radius, rgba } => self.stroke_rounded_rect(*rect, *radius, *rgba),
            PaintCommand::FillCircle { cx, cy, radius, rgba } => self.fill_circle(*cx, *cy, *radius, *rgba),
            PaintCommand::StrokeCircle { cx, cy, radius, rgba } => self.stroke_circle(*cx, *cy, *radius, *rgba),
            PaintCommand::Text { x, y, text, font, rgba, .. } => {
                let glyphs = fonts.resolve(*font).rasterize(text);
                self.draw_glyphs(*x, *y, &glyphs, *rgba);
            }
        }
    }

    /// Flatten to opaque RGB and encode as PNG.
    pub fn encode_png(&self) -> Result<Screenshot> {
        let rgb: RgbImage = self.image.convert();
        let mut png_data = Vec::new();
        rgb.write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)?;
        Ok(Screenshot {
            width: self.width(),
            height: self.height(),
            png_data,
        })
    }
}

/// Pixel-center test against a rectangle with circular corners.
fn inside_rounded(rect: &Rect, radius: u32, px: i32, py: i32) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let r = radius.min(rect.width / 2).min(rect.height / 2) as f32;
    let fx = px as f32 + 0.5;
    let fy = py as f32 + 0.5;
    let left = rect.x as f32;
    let top = rect.y as f32;
    let right = rect.right() as f32;
    let bottom = rect.bottom() as f32;
    if fx < left || fx > right || fy < top || fy > bottom {
        return false;
    }
    let dx = (left + r - fx).max(fx - (right - r)).max(0.0);
    let dy = (top + r - fy).max(fy - (bottom - r)).max(0.0);
    dx * dx + dy * dy <= r * r
}

/// Replay `list` onto a fresh canvas and encode the result.
pub fn rasterize(viewport: Viewport, background: Rgba, list: &DisplayList, fonts: &mut FontBook) -> Result<Screenshot> {
    if viewport.width == 0 || viewport.height == 0 {
        return Err(Error::RenderError(format!(
            "cannot rasterize a {}x{} canvas",
            viewport.width, viewport.height
        )));
    }
    let mut canvas = Canvas::new(viewport.width, viewport.height, background);
    for cmd in list.commands() {
        canvas.apply(cmd, fonts);
    }
    canvas.encode_png()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba = (15, 15, 15, 255);

    #[test]
    fn rasterize_returns_screenshot() {
        let s = rasterize(Viewport { width: 128, height: 64 }, BG, &DisplayList::new(), &mut FontBook::bitmap_only()).unwrap();
        assert_eq!(s.width, 128);
        assert_eq!(s.height, 64);
        assert_eq!(&s.png_data[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn rasterize_rejects_empty_viewport() {
        let err = rasterize(Viewport { width: 0, height: 10 }, BG, &DisplayList::new(), &mut FontBook::bitmap_only());
        assert!(matches!(err, Err(Error::RenderError(_))));
    }

    #[test]
    fn translucent_fill_blends_over_background() {
        let mut c = Canvas::new(4, 4, (0, 0, 0, 255));
        c.fill_rect(Rect::new(0, 0, 4, 4), (255, 255, 255, 128));
        let (r, g, b, a) = c.pixel(1, 1);
        assert!((126..=130).contains(&r));
        assert_eq!((r, g), (g, b));
        assert_eq!(a, 255);
    }

    #[test]
    fn stacked_translucent_layers_keep_canvas_opaque() {
        let mut c = Canvas::new(8, 8, (15, 15, 15, 255));
        for alpha in [8u8, 11, 40, 100, 190] {
            c.fill_rect(Rect::new(0, 0, 8, 8), (255, 255, 255, alpha));
        }
        c.draw_glyphs(0, 0, &[GlyphBitmap { x: 0, y: 0, width: 2, height: 1, coverage: vec![64, 200] }], (99, 102, 241, 255));
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(c.pixel(x, y).3, 255, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn full_scene_replay_leaves_every_pixel_opaque() {
        let viewport = Viewport::default();
        let mut fonts = FontBook::bitmap_only();
        let scene = crate::mockup::build_scene(&mut fonts, viewport);
        let mut c = Canvas::new(viewport.width, viewport.height, crate::mockup::palette::BG_DARK);
        for cmd in scene.commands() {
            c.apply(cmd, &mut fonts);
        }
        assert!(c.image.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn rounded_corners_stay_untouched() {
        let mut c = Canvas::new(40, 40, (0, 0, 0, 255));
        c.fill_rounded_rect(Rect::new(0, 0, 40, 40), 12, (255, 255, 255, 255));
        assert_eq!(c.pixel(0, 0), (0, 0, 0, 255));
        assert_eq!(c.pixel(20, 20), (255, 255, 255, 255));
        assert_eq!(c.pixel(20, 0), (255, 255, 255, 255));
    }

    #[test]
    fn stroke_leaves_interior_clear() {
        let mut c = Canvas::new(30, 30, (0, 0, 0, 255));
        c.stroke_rounded_rect(Rect::new(5, 5, 20, 20), 4, (255, 0, 0, 255));
        assert_eq!(c.pixel(15, 5), (255, 0, 0, 255));
        assert_eq!(c.pixel(15, 15), (0, 0, 0, 255));
    }

    #[test]
    fn ring_is_one_pixel_wide() {
        let mut c = Canvas::new(41, 41, (0, 0, 0, 255));
        c.stroke_circle(20, 20, 10, (0, 255, 0, 255));
        assert_eq!(c.pixel(30, 20), (0, 255, 0, 255));
        assert_eq!(c.pixel(29, 20), (0, 0, 0, 255));
        assert_eq!(c.pixel(20, 20), (0, 0, 0, 255));
    }

    #[test]
    fn shapes_clip_at_canvas_edges() {
        let mut c = Canvas::new(10, 10, (0, 0, 0, 255));
        c.fill_rect(Rect::new(-5, -5, 8, 8), (255, 255, 255, 255));
        c.fill_circle(9, 9, 4, (255, 255, 255, 255));
        assert_eq!(c.pixel(0, 0), (255, 255, 255, 255));
        assert_eq!(c.pixel(9, 9), (255, 255, 255, 255));
    }
}
