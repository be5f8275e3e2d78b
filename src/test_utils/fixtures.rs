//! Font and template fixtures.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::options::{FontType, RenderOptions};

/// A temporary directory holding one fake font file per format.
///
/// File contents are deterministic per format and include bytes that are not
/// valid UTF-8, like real font binaries.
pub struct FontFixture {
    dir: TempDir,
    font_name: String,
}

impl FontFixture {
    /// Create `<font_name>.<ext>` for every [`FontType`].
    pub fn new(font_name: &str) -> Result<Self> {
        let dir = TempDir::new().context("Failed to create fixture directory")?;
        let fixture = Self {
            dir,
            font_name: font_name.to_string(),
        };
        for font_type in FontType::ALL {
            let content = Self::sample_content(font_type);
            fixture.write_font(font_type, &content)?;
        }
        Ok(fixture)
    }

    /// Fixture directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the font file for `font_type`.
    pub fn font_path(&self, font_type: FontType) -> PathBuf {
        self.dir.path().join(format!("{}.{}", self.font_name, font_type))
    }

    /// Replace the content of one font file.
    pub fn write_font(&self, font_type: FontType, content: &[u8]) -> Result<PathBuf> {
        let path = self.font_path(font_type);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write fixture font {}", path.display()))?;
        Ok(path)
    }

    /// Write a template file into the fixture directory.
    pub fn write_template(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write fixture template {}", path.display()))?;
        Ok(path)
    }

    /// Options listing every fixture font file, all formats produced.
    pub fn options(&self) -> RenderOptions {
        RenderOptions::new(self.font_name.clone())
            .with_files(FontType::ALL.map(|t| self.font_path(t)))
            .with_types(FontType::ALL)
    }

    fn sample_content(font_type: FontType) -> Vec<u8> {
        let mut content = vec![0x00, 0x01, 0xff, 0xfe];
        content.extend_from_slice(format!("fake {} font data", font_type).as_bytes());
        content
    }
}
