//! Template error types.
//!
//! Tera failures are sorted into three kinds: the template did not compile,
//! it referenced a variable the context does not have, or rendering failed for
//! some other reason (a bad filter argument, a type error in an expression).

use std::path::PathBuf;

/// Errors raised while compiling or rendering a CSS template.
#[derive(Debug)]
pub enum TemplateError {
    /// The template could not be parsed
    SyntaxError {
        message: String,
        location: Box<ErrorLocation>,
    },

    /// The template referenced a variable missing from the context
    VariableNotFound {
        variable: String,
        available_variables: Box<Vec<String>>,
        suggestions: Box<Vec<String>>,
        location: Box<ErrorLocation>,
    },

    /// Rendering failed after a successful compile
    RenderFailed {
        message: String,
        location: Box<ErrorLocation>,
    },
}

/// Where a template error happened.
#[derive(Debug, Clone, Default)]
pub struct ErrorLocation {
    /// Template file, when the template came from disk
    pub file_path: Option<PathBuf>,
    /// Line number if Tera reported one
    pub line_number: Option<usize>,
    /// Lines around the error with their 1-based numbers
    pub context_lines: Option<Vec<(usize, String)>>,
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateError::SyntaxError {
                message,
                ..
            } => write!(f, "Template syntax error: {}", message),
            TemplateError::VariableNotFound {
                variable,
                ..
            } => write!(f, "Template variable not found: '{}'", variable),
            TemplateError::RenderFailed {
                message,
                ..
            } => write!(f, "Template rendering failed: {}", message),
        }
    }
}

impl std::error::Error for TemplateError {}

impl TemplateError {
    /// Where the error happened.
    pub fn location(&self) -> &ErrorLocation {
        match self {
            TemplateError::SyntaxError {
                location,
                ..
            }
            | TemplateError::VariableNotFound {
                location,
                ..
            }
            | TemplateError::RenderFailed {
                location,
                ..
            } => location,
        }
    }

    /// Multi-line report with location, surrounding lines and suggestions.
    pub fn format_with_context(&self) -> String {
        let mut msg = String::new();

        match self {
            TemplateError::SyntaxError {
                message,
                ..
            } => {
                msg.push_str("ERROR: Template Syntax Error\n\n");
                msg.push_str(&format!("Error: {}\n", message));
            }
            TemplateError::VariableNotFound {
                variable,
                ..
            } => {
                msg.push_str("ERROR: Template Variable Not Found\n\n");
                msg.push_str(&format!("Variable: {}\n", variable));
            }
            TemplateError::RenderFailed {
                message,
                ..
            } => {
                msg.push_str("ERROR: Template Rendering Failed\n\n");
                msg.push_str(&format!("Error: {}\n", message));
            }
        }

        let location = self.location();
        if let Some(path) = &location.file_path {
            msg.push_str(&format!("Template: {}\n", path.display()));
        }
        if let Some(line) = location.line_number {
            msg.push_str(&format!("Line: {}\n", line));
        }
        if let Some(lines) = &location.context_lines {
            msg.push('\n');
            for (number, text) in lines {
                let marker = if Some(*number) == location.line_number {
                    ">"
                } else {
                    " "
                };
                msg.push_str(&format!("{} {:>4} | {}\n", marker, number, text));
            }
        }
        msg.push('\n');

        match self {
            TemplateError::SyntaxError {
                ..
            } => {
                msg.push_str(
                    "SUGGESTION: Check template syntax for unclosed tags or invalid expressions.\n",
                );
                msg.push_str("Common issues:\n");
                msg.push_str("  - Unclosed {{ }} or {% %} delimiters\n");
                msg.push_str("  - Handlebars-style {{{ }}} or {{#each}} blocks (use {{ }} and {% for %})\n");
                msg.push_str("  - Invalid filter names\n");
            }
            TemplateError::VariableNotFound {
                suggestions,
                available_variables,
                ..
            } => {
                if !suggestions.is_empty() {
                    msg.push_str("Did you mean one of these?\n");
                    for suggestion in suggestions.iter() {
                        msg.push_str(&format!("  - {}\n", suggestion));
                    }
                    msg.push('\n');
                }
                if !available_variables.is_empty() {
                    msg.push_str("Available variables in this context:\n");
                    for var in available_variables.iter() {
                        msg.push_str(&format!("  {}\n", var));
                    }
                    msg.push('\n');
                }
                msg.push_str("SUGGESTION: Pass extra variables through templateOptions.\n");
            }
            TemplateError::RenderFailed {
                ..
            } => {}
        }

        msg
    }
}
