/// Paint commands and the ordered display list the rasterizer replays

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::rendering::layout::Rect;
use crate::rendering::text::{FontSpec, TextExtent};
use crate::Result;

/// Straight (non-premultiplied) RGBA
pub type Rgba = (u8, u8, u8, u8);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PaintCommand {
    FillRect {
        rect: Rect,
        rgba: Rgba,
    },
    FillRoundedRect {
        rect: Rect,
        radius: u32,
        rgba: Rgba,
    },
    /// One pixel wide outline
    StrokeRoundedRect {
        rect: Rect,
        radius: u32,
        rgba: Rgba,
    },
    FillCircle {
        cx: i32,
        cy: i32,
        radius: u32,
        rgba: Rgba,
    },
    /// One pixel wide ring
    StrokeCircle {
        cx: i32,
        cy: i32,
        radius: u32,
        rgba: Rgba,
    },
    /// `x`/`y` is the top-left of the line box; `extent` is the measured ink box.
    Text {
        x: i32,
        y: i32,
        text: String,
        font: FontSpec,
        rgba: Rgba,
        extent: TextExtent,
    },
}

impl PaintCommand {
    /// Pixel area the command may touch.
    pub fn bounds(&self) -> Rect {
        match self {
            PaintCommand::FillRect { rect, .. }
            | PaintCommand::FillRoundedRect { rect, .. }
            | PaintCommand::StrokeRoundedRect { rect, .. } => *rect,
            PaintCommand::FillCircle { cx, cy, radius, .. }
            | PaintCommand::StrokeCircle { cx, cy, radius, .. } => Rect::new(
                cx - *radius as i32,
                cy - *radius as i32,
                radius * 2 + 1,
                radius * 2 + 1,
            ),
            PaintCommand::Text { x, y, extent, .. } => Rect::new(*x, *y, extent.width, extent.height),
        }
    }

    pub fn rgba(&self) -> Rgba {
        match self {
            PaintCommand::FillRect { rgba, .. }
            | PaintCommand::FillRoundedRect { rgba, .. }
            | PaintCommand::StrokeRoundedRect { rgba, .. }
            | PaintCommand::FillCircle { rgba, .. }
            | PaintCommand::StrokeCircle { rgba, .. }
            | PaintCommand::Text { rgba, .. } => *rgba,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            PaintCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Ordered paint commands. Later commands are composited over earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    commands: Vec<PaintCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cmd: PaintCommand) {
        self.commands.push(cmd);
    }

    pub fn append(&mut self, other: DisplayList) {
        self.commands.extend(other.commands);
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text commands in paint order
    pub fn texts(&self) -> impl Iterator<Item = &PaintCommand> {
        self.commands.iter().filter(|c| c.text().is_some())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// SHA-256 over the JSON form. Equal fingerprints mean equal geometry,
    /// ordering, colors and text.
    pub fn fingerprint(&self) -> Result<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }
}
