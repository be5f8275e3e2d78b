//! Options loaded from configuration files.

use anyhow::Result;
use iconfont_css::test_utils::FontFixture;
use iconfont_css::{FontType, RenderOptions, compute_hash, render_css};

#[test]
fn test_toml_config_renders() -> Result<()> {
    let fixture = FontFixture::new("cfg")?;
    let template = fixture.write_template("t.css", "{{ fontName }}|{{ codepoints.home }}|{{ src }}")?;
    let config = fixture.path().join("icons.toml");
    std::fs::write(
        &config,
        format!(
            r#"
fontName = "cfg"
files = [{woff:?}]
types = ["woff"]
cssFontsUrl = "/assets/fonts"
cssTemplate = {template:?}

[codepoints]
home = 59905
"#,
            woff = fixture.font_path(FontType::Woff),
            template = template,
        ),
    )?;

    let options = RenderOptions::load_from(&config)?;
    let hash = compute_hash(&options)?;
    let css = render_css(&options, None)?;

    assert_eq!(css, format!("cfg|ea01|url(\"/assets/fonts/cfg.woff?{hash}\") format(\"woff\")"));
    Ok(())
}

#[test]
fn test_json_and_toml_with_same_content_hash_equal() -> Result<()> {
    let fixture = FontFixture::new("same")?;
    let toml_path = fixture.path().join("a.toml");
    let json_path = fixture.path().join("a.json");
    std::fs::write(&toml_path, "fontName = \"same\"\n[codepoints]\nb = 2\na = 1\n")?;
    std::fs::write(&json_path, r#"{"fontName": "same", "codepoints": {"a": 1, "b": 2}}"#)?;

    let from_toml = RenderOptions::load_from(&toml_path)?;
    let from_json = RenderOptions::load_from(&json_path)?;

    assert_eq!(from_toml, from_json);
    assert_eq!(compute_hash(&from_toml)?, compute_hash(&from_json)?);
    Ok(())
}
