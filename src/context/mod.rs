//! Template context construction.
//!
//! The context handed to the template engine has three computed variables:
//!
//! - `fontName`: the configured font name
//! - `src`: the `@font-face` `src` value, one `url(...) format(...)` declaration
//!   per format, joined by `",\n"`
//! - `codepoints`: glyph name to lowercase hex codepoint (`9825` -> `"2661"`)
//!
//! Entries from [`RenderOptions::template_options`] are layered on top, so an
//! explicit `fontName`, `src` or `codepoints` there replaces the computed value.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tera::Context as TeraContext;

use crate::options::{FontType, RenderOptions};
use crate::urls::UrlMap;

/// Inputs to a single `src` declaration.
#[derive(Debug, Clone, Copy)]
pub struct SrcParams<'a> {
    /// Resolved asset URL
    pub url: &'a str,
    /// Font name, used as the SVG fragment anchor
    pub font_name: &'a str,
}

/// Renders one `src` declaration.
pub type SrcFormatter = fn(&SrcParams<'_>) -> String;

fn eot_src(p: &SrcParams<'_>) -> String {
    format!("url(\"{}?#iefix\") format(\"embedded-opentype\")", p.url)
}

fn woff2_src(p: &SrcParams<'_>) -> String {
    format!("url(\"{}\") format(\"woff2\")", p.url)
}

fn woff_src(p: &SrcParams<'_>) -> String {
    format!("url(\"{}\") format(\"woff\")", p.url)
}

fn ttf_src(p: &SrcParams<'_>) -> String {
    format!("url(\"{}\") format(\"truetype\")", p.url)
}

fn svg_src(p: &SrcParams<'_>) -> String {
    format!("url(\"{}#{}\") format(\"svg\")", p.url, p.font_name)
}

/// Declaration format per font type.
pub static SRC_FORMATS: [(FontType, SrcFormatter); 5] = [
    (FontType::Eot, eot_src),
    (FontType::Woff2, woff2_src),
    (FontType::Woff, woff_src),
    (FontType::Ttf, ttf_src),
    (FontType::Svg, svg_src),
];

/// Look up the declaration formatter for `font_type`.
pub fn src_formatter(font_type: FontType) -> Option<SrcFormatter> {
    SRC_FORMATS.iter().find_map(|(t, f)| (*t == font_type).then_some(*f))
}

/// Variables passed to the template engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    vars: Map<String, Value>,
}

impl RenderContext {
    /// Look up a top-level variable.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    /// Insert or replace a top-level variable, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.vars.insert(key.into(), value)
    }

    /// Top-level variable names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// The context as a JSON object.
    pub fn as_json(&self) -> &Map<String, Value> {
        &self.vars
    }

    /// Convert into a Tera context.
    pub fn to_tera(&self) -> TeraContext {
        let mut context = TeraContext::new();
        for (key, value) in &self.vars {
            context.insert(key.as_str(), value);
        }
        context
    }
}

/// Convert every codepoint to lowercase hex without prefix or padding.
pub fn build_codepoints(codepoints: &BTreeMap<String, u32>) -> BTreeMap<String, String> {
    codepoints
        .iter()
        .map(|(name, codepoint)| (name.clone(), format!("{codepoint:x}")))
        .collect()
}

/// Build the `@font-face` `src` value.
///
/// Formats appear in [`RenderOptions::order`] sequence, restricted to those in
/// [`RenderOptions::types`]. A format with no entry in `urls` is skipped.
pub fn build_src(options: &RenderOptions, urls: &UrlMap) -> String {
    options
        .order
        .iter()
        .filter(|font_type| options.types.contains(font_type))
        .filter_map(|&font_type| {
            let Some(url) = urls.get(&font_type) else {
                tracing::warn!("No URL for {} font, omitting it from src", font_type);
                return None;
            };
            let params = SrcParams {
                url,
                font_name: &options.font_name,
            };
            src_formatter(font_type).map(|format| format(&params))
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Assemble the full template context.
pub fn build_context(options: &RenderOptions, urls: &UrlMap) -> RenderContext {
    let mut context = RenderContext::default();
    context.insert("fontName", Value::String(options.font_name.clone()));
    context.insert("src", Value::String(build_src(options, urls)));
    context.insert(
        "codepoints",
        Value::Object(
            build_codepoints(&options.codepoints)
                .into_iter()
                .map(|(name, hex)| (name, Value::String(hex)))
                .collect(),
        ),
    );

    for (key, value) in &options.template_options {
        if context.insert(key.clone(), value.clone()).is_some() {
            tracing::debug!("Template option '{}' overrides the computed value", key);
        }
    }

    context
}
