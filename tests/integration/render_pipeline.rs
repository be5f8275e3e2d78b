//! Full render pipeline tests.

use anyhow::Result;
use iconfont_css::test_utils::{FontFixture, init_test_logging};
use iconfont_css::{FontType, UrlMap, build_urls, compute_hash, render_css};

#[test]
fn test_end_to_end_woff_and_svg() -> Result<()> {
    init_test_logging(None);

    let fixture = FontFixture::new("myicon")?;
    let template = fixture.write_template(
        "icons.css",
        r#".icon{font-family:"{{fontName}}"} @font-face{src:{{src}}}"#,
    )?;
    let options = fixture
        .options()
        .with_types([FontType::Woff, FontType::Svg])
        .with_order([FontType::Woff, FontType::Svg])
        .with_codepoint("star", 61448)
        .with_css_template(&template);

    let hash = compute_hash(&options)?;
    let css = render_css(&options, None)?;

    assert!(css.contains(r#"font-family:"myicon""#));
    let expected_src = format!(
        "url(\"myicon.woff?{hash}\") format(\"woff\"),\nurl(\"myicon.svg?{hash}#myicon\") format(\"svg\")"
    );
    assert!(css.contains(&expected_src), "unexpected output:\n{css}");
    Ok(())
}

#[test]
fn test_render_is_deterministic() -> Result<()> {
    let fixture = FontFixture::new("icons")?;
    let options = fixture.options().with_codepoint("a", 0xe001).with_codepoint("b", 0xe002);

    assert_eq!(render_css(&options, None)?, render_css(&options, None)?);
    Ok(())
}

#[test]
fn test_font_change_busts_every_url() -> Result<()> {
    let fixture = FontFixture::new("icons")?;
    let options = fixture.options();
    let before = build_urls(&options)?;

    fixture.write_font(FontType::Ttf, b"\x00\x01 new outlines")?;
    let after = build_urls(&options)?;

    for font_type in FontType::ALL {
        assert_ne!(before[&font_type], after[&font_type]);
    }
    Ok(())
}

#[test]
fn test_base_url_joined_once() -> Result<()> {
    let fixture = FontFixture::new("icon")?;
    let template = fixture.write_template("src.css", "{{ src }}")?;
    let options = fixture
        .options()
        .with_types([FontType::Woff2])
        .with_order([FontType::Woff2])
        .with_css_fonts_url("http://cdn.example.com/fonts/")
        .with_css_template(&template);

    let hash = compute_hash(&options)?;
    let css = render_css(&options, None)?;

    assert_eq!(
        css,
        format!("url(\"http://cdn.example.com/fonts/icon.woff2?{hash}\") format(\"woff2\")")
    );
    Ok(())
}

#[test]
fn test_order_filtering_in_rendered_src() -> Result<()> {
    let fixture = FontFixture::new("icon")?;
    let template = fixture.write_template("src.css", "{{ src }}")?;
    let options = fixture
        .options()
        .with_types([FontType::Woff, FontType::Ttf])
        .with_order([FontType::Ttf, FontType::Eot, FontType::Woff])
        .with_css_template(&template);
    let urls: UrlMap = [
        (FontType::Woff, "icon.woff?abc123".to_string()),
        (FontType::Ttf, "icon.ttf?abc123".to_string()),
    ]
    .into();

    let css = render_css(&options, Some(&urls))?;

    assert_eq!(
        css,
        "url(\"icon.ttf?abc123\") format(\"truetype\"),\nurl(\"icon.woff?abc123\") format(\"woff\")"
    );
    Ok(())
}

#[test]
fn test_codepoints_loop_and_template_options() -> Result<()> {
    let fixture = FontFixture::new("icon")?;
    let template = fixture.write_template(
        "glyphs.css",
        "{% for name, hex in codepoints %}.{{ prefix }}{{ name }}:before{content:\"\\{{ hex }}\"}\n{% endfor %}",
    )?;
    let options = fixture
        .options()
        .with_codepoint("heart", 9825)
        .with_template_option("prefix", "i-")
        .with_css_template(&template);

    let css = render_css(&options, Some(&UrlMap::new()))?;

    assert_eq!(css, ".i-heart:before{content:\"\\2661\"}\n");
    Ok(())
}

#[test]
fn test_hyphenated_glyph_names() -> Result<()> {
    let fixture = FontFixture::new("icon")?;
    let template = fixture.write_template(
        "arrows.css",
        ".icon-arrow-left:before{content:\"\\{{ codepoints[\"arrow-left\"] }}\"}",
    )?;
    let options = fixture
        .options()
        .with_codepoint("arrow-left", 0xf001)
        .with_codepoint("chevron-down", 0xf002)
        .with_css_template(&template);

    let css = render_css(&options, Some(&UrlMap::new()))?;

    assert_eq!(css, ".icon-arrow-left:before{content:\"\\f001\"}");
    Ok(())
}

#[test]
fn test_hyphenated_glyph_names_in_bundled_template() -> Result<()> {
    let fixture = FontFixture::new("icon")?;
    let options = fixture.options().with_codepoint("chevron-down", 0xf002);

    let css = render_css(&options, Some(&UrlMap::new()))?;

    assert!(css.contains(".icon-chevron-down:before {\n\tcontent: \"\\f002\";"));
    Ok(())
}

#[test]
fn test_template_option_overrides_font_name() -> Result<()> {
    let fixture = FontFixture::new("icon")?;
    let template = fixture.write_template("name.css", "{{ fontName }}")?;
    let options = fixture
        .options()
        .with_template_option("fontName", "override")
        .with_css_template(&template);

    assert_eq!(render_css(&options, None)?, "override");
    Ok(())
}

#[test]
fn test_bundled_template_full_output() -> Result<()> {
    let fixture = FontFixture::new("glyphs")?;
    let options = fixture
        .options()
        .with_types([FontType::Woff2, FontType::Woff])
        .with_codepoint("star", 0xf008)
        .with_template_option("baseSelector", ".g")
        .with_template_option("classPrefix", "g-");
    let urls: UrlMap = [
        (FontType::Woff2, "glyphs.woff2?h".to_string()),
        (FontType::Woff, "glyphs.woff?h".to_string()),
    ]
    .into();

    let css = render_css(&options, Some(&urls))?;

    assert!(css.starts_with("@font-face {\n\tfont-family: \"glyphs\";\n"));
    assert!(css.contains(
        "\tsrc: url(\"glyphs.woff2?h\") format(\"woff2\"),\nurl(\"glyphs.woff?h\") format(\"woff\");\n"
    ));
    assert!(css.contains(".g:before {"));
    assert!(css.contains(".g-star:before {\n\tcontent: \"\\f008\";\n}"));
    Ok(())
}
