/// Layout primitives shared by the scene builder and the rasterizer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn center_x(&self) -> i32 {
        self.x + (self.width / 2) as i32
    }

    pub fn center_y(&self) -> i32 {
        self.y + (self.height / 2) as i32
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// Shrink by `by` pixels on every side.
    pub fn inset(&self, by: u32) -> Rect {
        Rect {
            x: self.x + by as i32,
            y: self.y + by as i32,
            width: self.width.saturating_sub(by * 2),
            height: self.height.saturating_sub(by * 2),
        }
    }
}

/// Left edge that centers `content` pixels on the column `center`.
pub fn centered_on(center: i32, content: u32) -> i32 {
    center - (content / 2) as i32
}

/// Left edge that centers `content` pixels inside a span starting at `start`.
pub fn centered_in(start: i32, span: u32, content: u32) -> i32 {
    start + (span as i32 - content as i32) / 2
}

/// Hard character cap. Cuts on char boundaries, never inside a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Drop trailing characters until `measure` reports a width within `max_width`.
pub fn fit_to_width<F>(text: &str, max_width: u32, mut measure: F) -> String
where
    F: FnMut(&str) -> u32,
{
    let mut fitted = text.to_string();
    while !fitted.is_empty() && measure(&fitted) > max_width {
        fitted.pop();
    }
    fitted
}

/// Top-left corner of cell `index` in a grid filled row by row.
pub fn grid_cell(index: usize, columns: usize, origin: (i32, i32), step: (i32, i32)) -> (i32, i32) {
    let col = (index % columns) as i32;
    let row = (index / columns) as i32;
    (origin.0 + col * step.0, origin.1 + row * step.1)
}
