//! Failure propagation from files and templates.

use anyhow::Result;
use iconfont_css::core::FilePurpose;
use iconfont_css::templating::TemplateError;
use iconfont_css::test_utils::FontFixture;
use iconfont_css::{CssError, FontType, render_css};

#[test]
fn test_missing_font_file() -> Result<()> {
    let fixture = FontFixture::new("icon")?;
    std::fs::remove_file(fixture.font_path(FontType::Eot))?;

    let err = render_css(&fixture.options(), None).unwrap_err();

    match err {
        CssError::FileRead {
            path,
            purpose,
            ..
        } => {
            assert_eq!(purpose, FilePurpose::FontAsset);
            assert_eq!(path, fixture.font_path(FontType::Eot));
        }
        other => panic!("expected FileRead, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_missing_template_file() -> Result<()> {
    let fixture = FontFixture::new("icon")?;
    let options = fixture.options().with_css_template(fixture.path().join("absent.css"));

    let err = render_css(&options, None).unwrap_err();

    assert!(err.is_file_access());
    assert!(err.to_string().contains("CSS template"));
    Ok(())
}

#[test]
fn test_handlebars_triple_stash_is_syntax_error() -> Result<()> {
    let fixture = FontFixture::new("icon")?;
    let template = fixture.write_template("hbs.css", "src: {{{src}}};")?;
    let options = fixture.options().with_css_template(&template);

    let err = render_css(&options, None).unwrap_err();

    match &err {
        CssError::Template(template_err @ TemplateError::SyntaxError {
            location,
            ..
        }) => {
            assert_eq!(location.file_path.as_ref(), Some(&template));
            assert!(template_err.format_with_context().contains("Handlebars-style {{{ }}}"));
        }
        other => panic!("expected syntax error, got {other:?}"),
    }

    // The unescaped Tera spelling renders the same value
    let plain = fixture.write_template("tera.css", "src: {{ src }};")?;
    let css = render_css(&fixture.options().with_css_template(&plain), None)?;
    assert!(css.starts_with("src: url(\""));
    Ok(())
}

#[test]
fn test_unknown_variable_reports_suggestions() -> Result<()> {
    let fixture = FontFixture::new("icon")?;
    let template = fixture.write_template("typo.css", "{{ codepoint }}")?;
    let options = fixture.options().with_css_template(&template);

    let err = render_css(&options, None).unwrap_err();

    let CssError::Template(template_err) = err else {
        panic!("expected a template error");
    };
    assert!(matches!(template_err, TemplateError::VariableNotFound { .. }));
    assert!(template_err.format_with_context().contains("codepoints"));
    Ok(())
}
