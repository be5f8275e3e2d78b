//! The render pipeline: fingerprint, URLs, context, template.

use crate::context::build_context;
use crate::core::{CssError, FilePurpose, read_text_lossy};
use crate::options::RenderOptions;
use crate::templating::{DEFAULT_CSS_TEMPLATE, TemplateRenderer};
use crate::urls::{UrlMap, build_urls};

/// Render the stylesheet described by `options`.
///
/// When `urls` is `None` the asset URLs are computed from the fingerprint of
/// the font files and options; a caller-supplied map is used as-is and no file
/// is hashed. The template at [`RenderOptions::css_template`] is rendered, or
/// the bundled [`DEFAULT_CSS_TEMPLATE`] when none is set. Nothing is written to
/// disk.
///
/// # Errors
///
/// - [`CssError::FileRead`] if a font file or the template cannot be read
/// - [`CssError::Template`] if the template fails to compile or render
///
/// # Examples
///
/// ```rust,no_run
/// use iconfont_css::{FontType, RenderOptions, render_css};
///
/// let options = RenderOptions::new("myicon")
///     .with_files(["dist/myicon.woff", "dist/myicon.svg"])
///     .with_types([FontType::Woff, FontType::Svg])
///     .with_order([FontType::Woff, FontType::Svg])
///     .with_codepoint("star", 61448)
///     .with_css_template("templates/icons.css.tera");
///
/// let css = render_css(&options, None)?;
/// std::fs::write("dist/myicon.css", css)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_css(options: &RenderOptions, urls: Option<&UrlMap>) -> Result<String, CssError> {
    let computed;
    let urls = match urls {
        Some(urls) => {
            tracing::debug!("Using {} caller-supplied font URLs", urls.len());
            urls
        }
        None => {
            computed = build_urls(options)?;
            &computed
        }
    };

    let context = build_context(options, urls);

    let rendered = match &options.css_template {
        Some(path) => {
            tracing::debug!("Reading CSS template {}", path.display());
            let source = read_text_lossy(path, FilePurpose::Template)?;
            TemplateRenderer::for_path(path).render(&source, &context)?
        }
        None => {
            tracing::debug!("No CSS template configured, using the bundled template");
            TemplateRenderer::new().render(DEFAULT_CSS_TEMPLATE, &context)?
        }
    };

    Ok(rendered)
}
