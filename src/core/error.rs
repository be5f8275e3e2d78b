//! Error handling for iconfont-css
//!
//! Every stage of the render pipeline reports failures through [`CssError`].
//! The taxonomy is deliberately small:
//!
//! - **File access**: a font file listed for hashing, or the CSS template, could
//!   not be read ([`CssError::FileRead`])
//! - **Template**: the template failed to compile or render ([`CssError::Template`])
//! - **Serialization**: the options could not be serialized for fingerprinting
//!   ([`CssError::Serialize`])
//! - **Options**: an unknown font format tag was parsed ([`CssError::UnknownFontType`])
//!
//! None of these are retried or recovered; they propagate to the caller of
//! [`render_css`](crate::render::render_css).
//!
//! # Examples
//!
//! ```rust,no_run
//! use iconfont_css::core::CssError;
//! use iconfont_css::{RenderOptions, render_css};
//!
//! let options = RenderOptions::new("icons").with_files(["missing.woff"]);
//! match render_css(&options, None) {
//!     Ok(css) => println!("{css}"),
//!     Err(CssError::FileRead { path, .. }) => eprintln!("cannot read {}", path.display()),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::templating::TemplateError;

/// What a file was being read for when the read failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePurpose {
    /// Font asset contents fed into the fingerprint
    FontAsset,
    /// The CSS template to render
    Template,
}

impl std::fmt::Display for FilePurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilePurpose::FontAsset => write!(f, "font file"),
            FilePurpose::Template => write!(f, "CSS template"),
        }
    }
}

/// The error type for stylesheet generation.
#[derive(Error, Debug)]
pub enum CssError {
    /// A font file or the template could not be read
    #[error("Failed to read {purpose} '{}': {source}", .path.display())]
    FileRead {
        /// Path that was being read
        path: PathBuf,
        /// Why the file was being read
        purpose: FilePurpose,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The template could not be compiled or rendered
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// The options structure could not be serialized for fingerprinting
    #[error("Failed to serialize render options: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A format tag outside eot, woff2, woff, ttf, svg
    #[error("Unknown font type '{tag}' (expected one of: eot, woff2, woff, ttf, svg)")]
    UnknownFontType {
        /// The tag that failed to parse
        tag: String,
    },
}

impl CssError {
    /// Build a [`CssError::FileRead`] for `path`.
    pub fn file_read(path: &Path, purpose: FilePurpose, source: std::io::Error) -> Self {
        CssError::FileRead {
            path: path.to_path_buf(),
            purpose,
            source,
        }
    }

    /// Whether this error came from the filesystem rather than the template engine.
    pub fn is_file_access(&self) -> bool {
        matches!(self, CssError::FileRead { .. })
    }
}

/// Read a file to a `String`, tagging failures with the read's purpose.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than failing,
/// so binary font files can be read the same way as text templates.
pub(crate) fn read_text_lossy(path: &Path, purpose: FilePurpose) -> Result<String, CssError> {
    let bytes = std::fs::read(path).map_err(|e| CssError::file_read(path, purpose, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
