//! Tests for compiler configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        render_style = "expanded"

        [phrase]
        enabled_by_default = true
        slop = { fixed = 4 }

        [language]
        indicator = "lang_"
        merger_prefix = "all_"

        [data_type]
        indicator = "type_"
    "#;

    let config = CompilerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.render_style, RenderStyle::Expanded);
    assert!(config.phrase.enabled_by_default);
    assert_eq!(config.phrase.slop, PhraseSlop::Fixed(4));
    assert_eq!(config.language.prefix_for("en"), "lang_en");
    assert_eq!(config.language.merger_prefix, "all_");
    assert_eq!(config.data_type.prefix_for("int"), "type_int");
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        render_style: grouped
        phrase:
          enabled_by_default: false
          slop: auto
        language:
          indicator: "@"
    "#;

    let config = CompilerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.render_style, RenderStyle::Grouped);
    assert_eq!(config.phrase.slop, PhraseSlop::Auto);
    // missing merger prefix falls back to the default
    assert_eq!(config.language.merger_prefix, "_!@");
}

#[test]
fn test_empty_document_gives_defaults() {
    let config = CompilerConfig::from_toml_str("").unwrap();
    assert_eq!(config, CompilerConfig::default());
    assert_eq!(config.language.prefix_for("de"), "@de");
    assert_eq!(config.data_type.prefix_for("date"), "_date");
    assert_eq!(config.phrase.slop_for(3), None);
}

#[test]
fn test_slop_for() {
    let auto = PhraseConfig {
        enabled_by_default: true,
        slop: PhraseSlop::Auto,
    };
    assert_eq!(auto.slop_for(2), Some(11));
    assert_eq!(auto.slop_for(3), Some(14));

    let fixed = PhraseConfig {
        enabled_by_default: true,
        slop: PhraseSlop::Fixed(2),
    };
    assert_eq!(fixed.slop_for(10), Some(2));
}

#[test]
fn test_invalid_values_rejected() {
    let err = CompilerConfig::from_toml_str(
        r#"
        [language]
        indicator = ""
    "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = CompilerConfig::from_yaml_str(
        r#"
        data_type:
          indicator: ""
    "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = CompilerConfig::from_toml_str(
        r#"
        [phrase]
        slop = { fixed = 0 }
    "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_render_style_fails() {
    let err = CompilerConfig::from_toml_str(r#"render_style = "fancy""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = CompilerConfig::load("/nonexistent/queryforge.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = CompilerConfig::new()
        .with_phrase_by_default(true)
        .with_phrase_slop(PhraseSlop::Auto)
        .with_render_style(RenderStyle::Expanded);

    assert!(config.phrase.enabled_by_default);
    assert_eq!(config.phrase.slop, PhraseSlop::Auto);
    assert_eq!(config.render_style, RenderStyle::Expanded);
    assert!(config.validate().is_ok());
}
