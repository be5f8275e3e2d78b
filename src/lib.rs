//! iconfont-css - stylesheet generation for icon fonts
//!
//! Given the font files an icon-font build produced, a naming scheme and a
//! CSS template, this crate renders the stylesheet that declares the
//! `@font-face` rule and per-glyph codepoint bindings.
//!
//! # Pipeline
//!
//! Rendering is a pure, synchronous pipeline; every stage is public so callers
//! can stop early or substitute their own input:
//!
//! 1. [`hash`] - fingerprint the font files plus the full options (MD5, hex)
//! 2. [`urls`] - derive `<fontName>.<type>?<fingerprint>` per format, optionally
//!    joined onto a base URL
//! 3. [`context`] - assemble `fontName`, `src`, `codepoints` and any extra
//!    template options
//! 4. [`render`] - render the Tera template against that context
//!
//! # Supporting Modules
//!
//! - [`options`] - [`RenderOptions`] and [`FontType`], loadable from TOML/JSON
//! - [`templating`] - the Tera renderer, template errors and the bundled template
//! - [`core`] - the [`CssError`] taxonomy
//!
//! Templates are Tera, not Handlebars: output is never escaped, so write
//! `{{ src }}` where a Handlebars template had `{{{src}}}`.
//!
//! # Example
//!
//! ```rust,no_run
//! use iconfont_css::{FontType, RenderOptions, render_css};
//!
//! let options = RenderOptions::new("myicon")
//!     .with_files(["dist/myicon.woff2", "dist/myicon.woff"])
//!     .with_types([FontType::Woff2, FontType::Woff])
//!     .with_css_fonts_url("https://cdn.example.com/fonts/")
//!     .with_codepoint("star", 0xf008)
//!     .with_template_option("classPrefix", "mi-");
//!
//! let css = render_css(&options, None)?;
//! assert!(css.contains("https://cdn.example.com/fonts/myicon.woff2?"));
//! # Ok::<(), iconfont_css::CssError>(())
//! ```

// Pipeline stages
pub mod context;
pub mod hash;
pub mod render;
pub mod urls;

// Supporting modules
pub mod core;
pub mod options;
pub mod templating;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::context::{RenderContext, build_context};
pub use crate::core::CssError;
pub use crate::hash::compute_hash;
pub use crate::options::{FontType, RenderOptions};
pub use crate::render::render_css;
pub use crate::urls::{UrlMap, build_urls};
