//! Template rendering engine with Tera.
//!
//! [`TemplateRenderer`] compiles a CSS template with a fresh Tera instance and
//! renders it against a [`RenderContext`]. Compilation and rendering are kept
//! as separate steps so a malformed template is reported as a syntax error and
//! never confused with a missing variable.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use strsim::levenshtein;
use tera::Tera;

use super::error::{ErrorLocation, TemplateError};
use crate::context::RenderContext;

/// Name the template is registered under inside Tera.
///
/// Must not end in `.html`, `.htm` or `.xml`: Tera auto-escapes those, and the
/// `src` value is full of double quotes.
const TEMPLATE_NAME: &str = "__iconfont_css";

/// Maximum allowed Levenshtein distance as a percentage of target length for suggestions.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Lines shown before and after the failing line in error reports.
const CONTEXT_LINES: usize = 3;

static VARIABLE_NOT_FOUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Variable `([^`]+)` not found").expect("valid regex"));
static LINE_COLUMN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+):(\d+)").expect("valid regex"));

/// Stylesheet template bundled with the crate, used when no template path is configured.
///
/// Besides the computed variables it reads two optional template options:
/// `baseSelector` (default `.icon`) and `classPrefix` (default `icon-`).
pub const DEFAULT_CSS_TEMPLATE: &str = include_str!("../../templates/iconfont.css.tera");

/// Renders CSS templates against a [`RenderContext`].
#[derive(Debug, Clone, Default)]
pub struct TemplateRenderer {
    /// Where the template came from, for error reports
    template_path: Option<PathBuf>,
}

impl TemplateRenderer {
    /// Create a renderer for an in-memory template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer whose errors name `path` as the template source.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: Some(path.into()),
        }
    }

    /// Compile `source` and render it against `context`.
    ///
    /// The output is never HTML-escaped.
    ///
    /// # Errors
    ///
    /// - [`TemplateError::SyntaxError`] if `source` does not compile
    /// - [`TemplateError::VariableNotFound`] if it references a missing variable
    /// - [`TemplateError::RenderFailed`] for any other rendering failure
    pub fn render(&self, source: &str, context: &RenderContext) -> Result<String, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());

        tera.add_raw_template(TEMPLATE_NAME, source).map_err(|e| {
            let message = Self::format_tera_error(&e);
            TemplateError::SyntaxError {
                location: Box::new(self.build_error_location(&message, source)),
                message,
            }
        })?;

        tracing::debug!("Rendering CSS template with context");
        Self::log_context(context);

        let rendered = tera
            .render(TEMPLATE_NAME, &context.to_tera())
            .map_err(|e| self.parse_render_error(&e, source, context))?;

        tracing::debug!("CSS template rendered ({} bytes)", rendered.len());
        Ok(rendered)
    }

    /// Classify a render-time Tera error.
    fn parse_render_error(
        &self,
        error: &tera::Error,
        source: &str,
        context: &RenderContext,
    ) -> TemplateError {
        let message = Self::format_tera_error(error);
        let location = Box::new(self.build_error_location(&message, source));

        if let Some(variable) = Self::extract_variable_name(&message) {
            let available_variables: Vec<String> = context.keys().map(str::to_string).collect();
            let suggestions = Self::find_similar_variables(&variable, &available_variables);
            return TemplateError::VariableNotFound {
                variable,
                available_variables: Box::new(available_variables),
                suggestions: Box::new(suggestions),
                location,
            };
        }

        TemplateError::RenderFailed {
            message,
            location,
        }
    }

    /// Extract variable name from "Variable `foo` not found" message
    fn extract_variable_name(error_msg: &str) -> Option<String> {
        VARIABLE_NOT_FOUND
            .captures(error_msg)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Find similar variable names using Levenshtein distance
    fn find_similar_variables(target: &str, available: &[String]) -> Vec<String> {
        let mut scored: Vec<_> =
            available.iter().map(|var| (var.clone(), levenshtein(target, var))).collect();

        scored.sort_by_key(|(_, dist)| *dist);

        scored
            .into_iter()
            .filter(|(_, dist)| *dist <= target.len() * SIMILARITY_THRESHOLD_PERCENT / 100)
            .take(3)
            .map(|(var, _)| var)
            .collect()
    }

    fn build_error_location(&self, message: &str, source: &str) -> ErrorLocation {
        let line_number = Self::extract_line_number(message);
        let context_lines = line_number
            .map(|line| Self::extract_context_lines(source, line, CONTEXT_LINES))
            .filter(|lines| !lines.is_empty());

        ErrorLocation {
            file_path: self.template_path.clone(),
            line_number,
            context_lines,
        }
    }

    /// Tera parse errors carry a `line:column` marker such as ` --> 3:14`.
    fn extract_line_number(message: &str) -> Option<usize> {
        LINE_COLUMN
            .captures(message)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Lines around `error_line` (1-based), numbered for display.
    fn extract_context_lines(
        content: &str,
        error_line: usize,
        context_size: usize,
    ) -> Vec<(usize, String)> {
        let lines: Vec<&str> = content.lines().collect();
        if error_line == 0 || error_line > lines.len() {
            return Vec::new();
        }

        let start = error_line.saturating_sub(context_size + 1);
        let end = (error_line + context_size).min(lines.len());

        lines[start..end]
            .iter()
            .enumerate()
            .map(|(idx, line)| (start + idx + 1, (*line).to_string()))
            .collect()
    }

    /// Flatten a Tera error chain into one message without internal template names.
    pub fn format_tera_error(error: &tera::Error) -> String {
        use std::error::Error;

        let mut all_messages = vec![error.to_string()];
        let mut current: Option<&dyn Error> = error.source();
        while let Some(err) = current {
            all_messages.push(err.to_string());
            current = err.source();
        }

        let messages: Vec<String> = all_messages
            .into_iter()
            .map(|msg| Self::strip_template_name(&msg))
            .filter(|msg| !msg.is_empty())
            .collect();

        if messages.is_empty() {
            "unknown template error".to_string()
        } else {
            messages.join("\n  -> ")
        }
    }

    /// Remove Tera's wrapper phrases around the internal template name.
    fn strip_template_name(msg: &str) -> String {
        let mut cleaned = msg.to_string();
        for quoted in [format!("'{}'", TEMPLATE_NAME), format!("\"{}\"", TEMPLATE_NAME)] {
            cleaned = cleaned
                .replace(&format!("while rendering {}", quoted), "")
                .replace(&format!("Failed to render {}", quoted), "")
                .replace(&format!("Failed to parse {}", quoted), "");
        }
        cleaned.replace(TEMPLATE_NAME, "template").trim().to_string()
    }

    fn log_context(context: &RenderContext) {
        for (key, value) in context.as_json() {
            match value {
                serde_json::Value::Object(map) => {
                    tracing::debug!("  {}: {{{} entries}}", key, map.len());
                }
                serde_json::Value::String(s) if s.len() > 100 => {
                    let preview: String = s.chars().take(97).collect();
                    tracing::debug!("  {}: \"{}...\" ({} chars)", key, preview, s.len());
                }
                other => tracing::debug!("  {}: {}", key, other),
            }
        }
    }
}
