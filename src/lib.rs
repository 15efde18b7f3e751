//! Expenses UI mockup generator
//!
//! Renders a single static PNG of the expenses mobile app: a gradient
//! background, glass-style stat cards, recent transactions and a bottom
//! navigation bar.
//!
//! Rendering happens in two passes. [`mockup::build_scene`] measures text and
//! produces an ordered [`DisplayList`]; [`rendering::raster::rasterize`] then
//! replays that list onto a canvas and encodes it.
//!
//! # Example
//!
//! ```no_run
//! use expenses_mockup::MockupConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MockupConfig {
//!     output_path: "/tmp/ui-mockup-modern.png".into(),
//!     ..Default::default()
//! };
//! let summary = expenses_mockup::run(&config)?;
//! println!("{}", summary.completion_message());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod error;
pub use error::{Error, Result};

pub mod mockup;
pub mod rendering;

pub use rendering::paint::DisplayList;
pub use rendering::text::FontBook;
pub use rendering::Screenshot;

pub const DEFAULT_OUTPUT_PATH: &str = "/workspace/expenses/public/ui-mockup-modern.png";

/// Canvas dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 1400,
        }
    }
}

/// Configuration for a render run
///
/// The defaults reproduce the canonical asset: an 800x1400 canvas, DejaVu
/// Sans faces, written into the expenses app's `public/` directory.
///
/// ```
/// let cfg = expenses_mockup::MockupConfig::default();
/// assert_eq!(cfg.viewport.width, 800);
/// assert!(cfg.output_path.ends_with("ui-mockup-modern.png"));
/// ```
#[derive(Debug, Clone)]
pub struct MockupConfig {
    /// Canvas dimensions
    pub viewport: Viewport,
    /// Where the PNG is written
    pub output_path: PathBuf,
    /// TrueType file for regular text
    pub regular_font: PathBuf,
    /// TrueType file for bold text
    pub bold_font: PathBuf,
}

impl Default for MockupConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            regular_font: PathBuf::from(rendering::text::DEFAULT_REGULAR_FONT),
            bold_font: PathBuf::from(rendering::text::DEFAULT_BOLD_FONT),
        }
    }
}

impl MockupConfig {
    pub fn validate(&self) -> Result<()> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(Error::ConfigError(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::ConfigError("output path is empty".into()));
        }
        Ok(())
    }

    pub fn font_book(&self) -> FontBook {
        FontBook::new(&self.regular_font, &self.bold_font)
    }
}

/// A rendered frame together with the display list that produced it.
#[derive(Debug, Clone)]
pub struct RenderedMockup {
    pub scene: DisplayList,
    pub screenshot: Screenshot,
}

impl RenderedMockup {
    /// Persist the PNG and describe what was written.
    pub fn write(&self, path: &Path) -> Result<RunSummary> {
        self.screenshot.save(path)?;
        let fingerprint = self.scene.fingerprint()?;
        log::info!(
            "wrote {} bytes to {} (layout {})",
            self.screenshot.png_data.len(),
            path.display(),
            &fingerprint[..12]
        );
        Ok(RunSummary {
            path: path.to_path_buf(),
            width: self.screenshot.width,
            height: self.screenshot.height,
            bytes: self.screenshot.png_data.len(),
            fingerprint,
        })
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
    /// SHA-256 of the display list; equal across runs with equal fonts
    pub fingerprint: String,
}

impl RunSummary {
    /// The single line printed once the file is on disk
    pub fn completion_message(&self) -> String {
        format!("✅ Image generated: {}", self.path.display())
    }
}

/// Build the scene and rasterize it, without touching the output path.
pub fn render_mockup(config: &MockupConfig) -> Result<RenderedMockup> {
    config.validate()?;
    let mut fonts = config.font_book();
    let scene = mockup::build_scene(&mut fonts, config.viewport);
    let screenshot = rendering::raster::rasterize(config.viewport, mockup::palette::BG_DARK, &scene, &mut fonts)?;
    Ok(RenderedMockup { scene, screenshot })
}

/// Render the mockup and write it to `config.output_path`.
pub fn run(config: &MockupConfig) -> Result<RunSummary> {
    log::info!(
        "rendering {}x{} mockup",
        config.viewport.width, config.viewport.height
    );
    render_mockup(config)?.write(&config.output_path)
}
