//! Font resolution, text measurement and glyph rasterization.
//!
//! Faces are loaded lazily from TrueType files and memoized by path. A face
//! that fails to load (missing file, unparsable data) silently degrades to the
//! built-in bitmap font; the failure is remembered and never retried.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use serde::{Deserialize, Serialize};

use crate::rendering::bitmap_font;
use crate::{Error, Result};

pub const DEFAULT_REGULAR_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
pub const DEFAULT_BOLD_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFace {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub face: FontFace,
    pub size: f32,
}

impl FontSpec {
    pub const fn new(face: FontFace, size: f32) -> Self {
        Self { face, size }
    }

    pub const fn regular(size: f32) -> Self {
        Self::new(FontFace::Regular, size)
    }

    pub const fn bold(size: f32) -> Self {
        Self::new(FontFace::Bold, size)
    }
}

/// Ink bounding box of a laid-out line, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// One rasterized glyph placed relative to the line's top-left corner.
#[derive(Debug, Clone)]
pub struct GlyphBitmap {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage, 0..=255
    pub coverage: Vec<u8>,
}

/// Anything that can tell the scene builder how wide a string will be.
pub trait TextMetrics {
    fn measure(&mut self, text: &str, font: FontSpec) -> TextExtent;
}

/// Deterministic measurer for layout tests: every char advances
/// `size * advance_ratio` pixels and lines are `size` pixels tall.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMetrics {
    pub advance_ratio: f32,
}

impl Default for FixedAdvanceMetrics {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl TextMetrics for FixedAdvanceMetrics {
    fn measure(&mut self, text: &str, font: FontSpec) -> TextExtent {
        let chars = text.chars().count() as f32;
        TextExtent {
            width: (chars * font.size * self.advance_ratio).round() as u32,
            height: if text.is_empty() { 0 } else { font.size.round() as u32 },
        }
    }
}

/// A face ready for use at a particular size.
pub enum ResolvedFont<'a> {
    Vector { font: &'a Font, size: f32 },
    Bitmap,
}

impl ResolvedFont<'_> {
    pub fn measure(&self, text: &str) -> TextExtent {
        match self {
            ResolvedFont::Vector { font, size } => {
                let boxes = vector_layout(font, *size, text)
                    .into_iter()
                    .map(|(_, x, y, m)| (x, y, m.width as i32, m.height as i32));
                ink_extent(boxes)
            }
            ResolvedFont::Bitmap => {
                let width = bitmap_font::line_width(text);
                TextExtent {
                    width,
                    height: if width == 0 { 0 } else { bitmap_font::GLYPH_HEIGHT },
                }
            }
        }
    }

    pub fn rasterize(&self, text: &str) -> Vec<GlyphBitmap> {
        match self {
            ResolvedFont::Vector { font, size } => vector_layout(font, *size, text)
                .into_iter()
                .filter(|(_, _, _, m)| m.width > 0 && m.height > 0)
                .map(|(ch, x, y, _)| {
                    let (metrics, coverage) = font.rasterize(ch, *size);
                    GlyphBitmap { x, y, width: metrics.width, height: metrics.height, coverage }
                })
                .collect(),
            ResolvedFont::Bitmap => text
                .chars()
                .enumerate()
                .filter_map(|(i, ch)| {
                    bitmap_font::glyph_rows(ch).map(|rows| GlyphBitmap {
                        x: (i as u32 * bitmap_font::ADVANCE) as i32,
                        y: 0,
                        width: bitmap_font::GLYPH_WIDTH as usize,
                        height: bitmap_font::GLYPH_HEIGHT as usize,
                        coverage: bitmap_font::glyph_mask(rows),
                    })
                })
                .collect(),
        }
    }
}

/// Pen positions for a single line: (char, glyph left, glyph top, metrics).
fn vector_layout(font: &Font, size: f32, text: &str) -> Vec<(char, i32, i32, fontdue::Metrics)> {
    let ascent = font
        .horizontal_line_metrics(size)
        .map(|m| m.ascent)
        .unwrap_or(size)
        .ceil() as i32;

    let mut placed = Vec::with_capacity(text.len());
    let mut pen = 0.0f32;
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if let Some(p) = prev {
            pen += font.horizontal_kern(p, ch, size).unwrap_or(0.0);
        }
        let m = font.metrics(ch, size);
        let left = pen.round() as i32 + m.xmin;
        let top = ascent - (m.ymin + m.height as i32);
        placed.push((ch, left, top, m));
        pen += m.advance_width;
        prev = Some(ch);
    }
    placed
}

fn ink_extent<I>(boxes: I) -> TextExtent
where
    I: IntoIterator<Item = (i32, i32, i32, i32)>,
{
    let mut bounds: Option<(i32, i32, i32, i32)> = None;
    for (x, y, w, h) in boxes {
        if w <= 0 || h <= 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x + w, y + h),
            Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x + w), b.max(y + h)),
        });
    }
    match bounds {
        Some((l, t, r, b)) => TextExtent { width: (r - l) as u32, height: (b - t) as u32 },
        None => TextExtent::default(),
    }
}

fn load_font(path: &Path) -> Result<Font> {
    let data = std::fs::read(path).map_err(|e| Error::FontError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Font::from_bytes(data, FontSettings::default()).map_err(|reason| Error::FontError {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    })
}

/// Memoizing font cache keyed by file path.
pub struct FontBook {
    regular_path: PathBuf,
    bold_path: PathBuf,
    cache: HashMap<PathBuf, Option<Font>>,
}

impl FontBook {
    pub fn new(regular_path: impl Into<PathBuf>, bold_path: impl Into<PathBuf>) -> Self {
        Self {
            regular_path: regular_path.into(),
            bold_path: bold_path.into(),
            cache: HashMap::new(),
        }
    }

    /// A book whose faces never resolve, so every string uses the bitmap font.
    pub fn bitmap_only() -> Self {
        Self::new(PathBuf::new(), PathBuf::new())
    }

    pub fn path_for(&self, face: FontFace) -> &Path {
        match face {
            FontFace::Regular => &self.regular_path,
            FontFace::Bold => &self.bold_path,
        }
    }

    pub fn resolve(&mut self, spec: FontSpec) -> ResolvedFont<'_> {
        let path = self.path_for(spec.face).to_path_buf();
        let entry = self
            .cache
            .entry(path)
            .or_insert_with_key(|p| load_font(p).ok());
        match entry.as_ref() {
            Some(font) => ResolvedFont::Vector { font, size: spec.size },
            None => ResolvedFont::Bitmap,
        }
    }
}

impl Default for FontBook {
    fn default() -> Self {
        Self::new(DEFAULT_REGULAR_FONT, DEFAULT_BOLD_FONT)
    }
}

impl TextMetrics for FontBook {
    fn measure(&mut self, text: &str, font: FontSpec) -> TextExtent {
        self.resolve(font).measure(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_falls_back_to_bitmap() {
        let mut book = FontBook::new("/nonexistent/regular.ttf", "/nonexistent/bold.ttf");
        assert!(matches!(book.resolve(FontSpec::bold(24.0)), ResolvedFont::Bitmap));
        let ext = book.measure("Total", FontSpec::regular(12.0));
        assert_eq!(ext, TextExtent { width: 29, height: 7 });
    }

    #[test]
    fn bitmap_font_ignores_requested_size() {
        let mut book = FontBook::bitmap_only();
        let small = book.measure("1,234", FontSpec::bold(9.0));
        let large = book.measure("1,234", FontSpec::bold(32.0));
        assert_eq!(small, large);
    }

    #[test]
    fn failed_lookups_are_memoized() {
        let mut book = FontBook::new("/nonexistent/a.ttf", "/nonexistent/a.ttf");
        book.measure("x", FontSpec::regular(10.0));
        book.measure("x", FontSpec::bold(10.0));
        assert_eq!(book.cache.len(), 1);
    }

    #[test]
    fn fixed_advance_scales_with_size() {
        let mut m = FixedAdvanceMetrics::default();
        assert_eq!(m.measure("abcde", FontSpec::regular(10.0)), TextExtent { width: 30, height: 10 });
        assert_eq!(m.measure("", FontSpec::regular(10.0)), TextExtent::default());
    }

    #[test]
    fn bitmap_rasterize_skips_spaces() {
        let glyphs = ResolvedFont::Bitmap.rasterize("a b");
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[1].x, 12);
    }

    #[test]
    fn ink_extent_spans_all_boxes() {
        let ext = ink_extent(vec![(0, 2, 5, 5), (6, 0, 4, 9), (20, 0, 0, 0)]);
        assert_eq!(ext, TextExtent { width: 10, height: 9 });
    }
}
