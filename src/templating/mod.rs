//! CSS templating with Tera.
//!
//! Templates are plain text with Tera placeholders. The variables available
//! are the ones assembled by [`build_context`](crate::context::build_context):
//!
//! - `{{ fontName }}`: the font family name
//! - `{{ src }}`: the complete `@font-face` `src` value
//! - `{{ codepoints.<glyph> }}`: a glyph's hex codepoint
//! - anything passed through `templateOptions`
//!
//! Tera parses a `-` inside a dotted path as subtraction, so a glyph named
//! `arrow-left` has to be looked up with brackets:
//!
//! ```text
//! .icon-arrow-left:before { content: "\{{ codepoints["arrow-left"] }}"; }
//! ```
//!
//! Loops and filters work as usual in Tera:
//!
//! ```text
//! {% for name, codepoint in codepoints %}
//! .icon-{{ name }}:before { content: "\{{ codepoint }}"; }
//! {% endfor %}
//! ```
//!
//! Output is never HTML-escaped, so the quotes inside `src` survive intact.
//! When no template path is configured, [`DEFAULT_CSS_TEMPLATE`] is rendered.

pub mod error;
pub mod renderer;

pub use error::{ErrorLocation, TemplateError};
pub use renderer::{DEFAULT_CSS_TEMPLATE, TemplateRenderer};
