//! Rendering pipeline: layout helpers, paint commands, fonts and the rasterizer

pub mod bitmap_font;
pub mod layout;
pub mod paint;
pub mod raster;
pub mod text;

use std::path::Path;

use crate::{Error, Result};

/// An encoded frame, ready to be written to disk.
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    /// Write the PNG bytes to `path`. The parent directory must already exist.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.png_data).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_into_missing_directory_fails() {
        let shot = Screenshot { width: 1, height: 1, png_data: Vec::new() };
        let err = shot.save(Path::new("/nonexistent-dir/for/sure/out.png")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
