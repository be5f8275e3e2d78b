//! Render options: the caller-supplied description of one stylesheet build.
//!
//! [`RenderOptions`] carries the font name, the font files to fingerprint, the
//! formats that were produced, the preferred `src` order, the glyph codepoints,
//! an optional base URL, the template path and any extra template variables.
//!
//! # Configuration Files
//!
//! Options can be loaded from TOML or JSON. Every field is optional and falls
//! back to [`RenderOptions::default`]:
//!
//! ```toml
//! fontName = "myicons"
//! files = ["dist/myicons.woff", "dist/myicons.woff2"]
//! types = ["woff2", "woff"]
//! cssFontsUrl = "https://cdn.example.com/fonts/"
//! cssTemplate = "templates/icons.css.tera"
//!
//! [codepoints]
//! star = 61448
//! heart = 9825
//!
//! [templateOptions]
//! classPrefix = "mi-"
//! baseSelector = ".mi"
//! ```
//!
//! # Fingerprint Stability
//!
//! The whole structure is serialized to JSON as part of the fingerprint. Maps
//! are `BTreeMap`s so the serialization does not depend on insertion order.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::CssError;

/// Default font name used when none is configured.
pub const DEFAULT_FONT_NAME: &str = "iconfont";

/// A font file encoding.
///
/// Declaration order doubles as the default `@font-face` `src` precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontType {
    /// Embedded OpenType
    Eot,
    /// WOFF 2.0
    Woff2,
    /// WOFF 1.0
    Woff,
    /// TrueType
    Ttf,
    /// SVG font
    Svg,
}

impl FontType {
    /// All formats in default `src` order.
    pub const ALL: [FontType; 5] = [
        FontType::Eot,
        FontType::Woff2,
        FontType::Woff,
        FontType::Ttf,
        FontType::Svg,
    ];

    /// The file extension, which is also the format tag.
    pub fn extension(self) -> &'static str {
        match self {
            FontType::Eot => "eot",
            FontType::Woff2 => "woff2",
            FontType::Woff => "woff",
            FontType::Ttf => "ttf",
            FontType::Svg => "svg",
        }
    }
}

impl fmt::Display for FontType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for FontType {
    type Err = CssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontType::ALL
            .into_iter()
            .find(|t| t.extension().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CssError::UnknownFontType {
                tag: s.to_string(),
            })
    }
}

/// Options for a single stylesheet render.
///
/// Request-scoped: build one, pass it to [`render_css`](crate::render_css),
/// and drop it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Font family name; used in URLs, the SVG fragment and the template
    pub font_name: String,
    /// Font files whose contents feed the fingerprint, in order
    pub files: Vec<PathBuf>,
    /// Formats this build produced
    pub types: Vec<FontType>,
    /// Preferred `src` precedence; only entries also in `types` are emitted
    pub order: Vec<FontType>,
    /// Glyph name to Unicode codepoint
    pub codepoints: BTreeMap<String, u32>,
    /// Base URL prepended to asset URLs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_fonts_url: Option<String>,
    /// Template file; the bundled template is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_template: Option<PathBuf>,
    /// Extra template variables, layered over the computed ones
    pub template_options: BTreeMap<String, Value>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_name: DEFAULT_FONT_NAME.to_string(),
            files: Vec::new(),
            types: vec![FontType::Eot, FontType::Woff, FontType::Woff2],
            order: FontType::ALL.to_vec(),
            codepoints: BTreeMap::new(),
            css_fonts_url: None,
            css_template: None,
            template_options: BTreeMap::new(),
        }
    }
}

impl RenderOptions {
    /// Create options for `font_name` with every other field defaulted.
    pub fn new(font_name: impl Into<String>) -> Self {
        Self {
            font_name: font_name.into(),
            ..Self::default()
        }
    }

    /// Set the font files to fingerprint.
    pub fn with_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Set the produced formats.
    pub fn with_types(mut self, types: impl IntoIterator<Item = FontType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    /// Set the `src` precedence.
    pub fn with_order(mut self, order: impl IntoIterator<Item = FontType>) -> Self {
        self.order = order.into_iter().collect();
        self
    }

    /// Add one glyph codepoint.
    pub fn with_codepoint(mut self, name: impl Into<String>, codepoint: u32) -> Self {
        self.codepoints.insert(name.into(), codepoint);
        self
    }

    /// Set the base URL for asset URLs.
    pub fn with_css_fonts_url(mut self, url: impl Into<String>) -> Self {
        self.css_fonts_url = Some(url.into());
        self
    }

    /// Set the template file to render.
    pub fn with_css_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.css_template = Some(path.into());
        self
    }

    /// Add one extra template variable.
    pub fn with_template_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.template_options.insert(key.into(), value.into());
        self
    }

    /// Load options from a configuration file.
    ///
    /// Files with a `.json` extension are parsed as JSON; anything else is
    /// parsed as TOML. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not match the
    /// options schema.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read render options from {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let options: Self = if is_json {
            serde_json::from_str(&content).with_context(|| {
                format!("Failed to parse JSON render options from {}", path.display())
            })?
        } else {
            toml::from_str(&content).with_context(|| {
                format!("Failed to parse TOML render options from {}", path.display())
            })?
        };

        tracing::debug!(
            "Loaded render options for '{}' from {} ({} files, {} codepoints)",
            options.font_name,
            path.display(),
            options.files.len(),
            options.codepoints.len()
        );
        Ok(options)
    }
}
