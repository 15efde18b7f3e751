//! Fixed colors of the mockup

use crate::rendering::paint::Rgba;

pub const BG_DARK: Rgba = (0x0f, 0x0f, 0x0f, 255);
pub const BG_MEDIUM: Rgba = (0x1a, 0x1a, 0x1a, 255);
pub const BG_LIGHT: Rgba = (0x15, 0x15, 0x15, 255);
pub const PRIMARY: Rgba = (0x5b, 0x8d, 0xef, 255);
pub const WHITE: Rgba = (255, 255, 255, 255);
pub const GLASS_FILL: Rgba = (255, 255, 255, 20);
pub const GLASS_BORDER: Rgba = (255, 255, 255, 30);
pub const SHADOW: Rgba = (0, 0, 0, 100);

/// Same color, different alpha.
pub const fn with_alpha(color: Rgba, alpha: u8) -> Rgba {
    (color.0, color.1, color.2, alpha)
}

/// Three background stops, top to bottom.
pub const BACKGROUND_STOPS: [Rgba; 3] = [BG_DARK, BG_MEDIUM, BG_LIGHT];

/// Dimmed white used for secondary text and inactive nav icons
pub const fn dim_white(alpha: u8) -> Rgba {
    with_alpha(WHITE, alpha)
}
