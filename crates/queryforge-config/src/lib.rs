//! Configuration system for QueryForge.
//!
//! Load compiler configuration from TOML or YAML files to control the phrase
//! optimization, language and data type field prefixes and the rendering
//! style without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use queryforge_config::{CompilerConfig, PhraseSlop, RenderStyle};
//!
//! let config = CompilerConfig::from_toml_str(r#"
//!     render_style = "expanded"
//!
//!     [phrase]
//!     enabled_by_default = true
//!     slop = "auto"
//!
//!     [language]
//!     merger_prefix = "_!@"
//! "#).unwrap();
//!
//! assert_eq!(config.render_style, RenderStyle::Expanded);
//! assert_eq!(config.phrase.slop, PhraseSlop::Auto);
//! assert_eq!(config.phrase.slop_for(2), Some(11));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use queryforge_config::CompilerConfig;
//!
//! let config = CompilerConfig::load("queryforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main compiler configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CompilerConfig {
    /// Phrase optimization settings.
    #[serde(default)]
    pub phrase: PhraseConfig,

    /// Language field prefixes.
    #[serde(default)]
    pub language: LanguageConfig,

    /// Data type field prefixes.
    #[serde(default)]
    pub data_type: DataTypeConfig,

    /// Rendering returned by the compiler.
    #[serde(default)]
    pub render_style: RenderStyle,
}

impl CompilerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot produce valid queries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.language.indicator.is_empty() {
            return Err(ConfigError::Invalid(
                "language.indicator must not be empty".to_string(),
            ));
        }
        if self.language.merger_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "language.merger_prefix must not be empty".to_string(),
            ));
        }
        if self.data_type.indicator.is_empty() {
            return Err(ConfigError::Invalid(
                "data_type.indicator must not be empty".to_string(),
            ));
        }
        if self.phrase.slop == PhraseSlop::Fixed(0) {
            return Err(ConfigError::Invalid(
                "phrase.slop fixed value must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets whether phrases are built when a value carries no phrase flag.
    pub fn with_phrase_by_default(mut self, enabled: bool) -> Self {
        self.phrase.enabled_by_default = enabled;
        self
    }

    /// Sets the phrase proximity slop.
    pub fn with_phrase_slop(mut self, slop: PhraseSlop) -> Self {
        self.phrase.slop = slop;
        self
    }

    /// Sets the rendering style.
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    /// Sets the language field prefixes.
    pub fn with_language(mut self, language: LanguageConfig) -> Self {
        self.language = language;
        self
    }

    /// Sets the data type field prefixes.
    pub fn with_data_type(mut self, data_type: DataTypeConfig) -> Self {
        self.data_type = data_type;
        self
    }
}

/// Phrase optimization configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PhraseConfig {
    /// Build phrases when the constraint value carries no phrase flag.
    #[serde(default)]
    pub enabled_by_default: bool,

    /// Proximity slop appended to phrases.
    #[serde(default)]
    pub slop: PhraseSlop,
}

impl PhraseConfig {
    /// Returns the slop for a phrase of `terms` terms, if any.
    ///
    /// `Auto` grows with the phrase: `5 + 3 * terms`.
    pub fn slop_for(&self, terms: usize) -> Option<u32> {
        match self.slop {
            PhraseSlop::None => None,
            PhraseSlop::Auto => Some(5 + 3 * terms as u32),
            PhraseSlop::Fixed(n) => Some(n),
        }
    }
}

/// Proximity slop of phrase queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseSlop {
    /// Exact phrase.
    #[default]
    None,

    /// Slop derived from the number of terms.
    Auto,

    /// Fixed slop.
    Fixed(u32),
}

/// Field prefixes for language scoped text fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LanguageConfig {
    /// Prefix put before the language code (`@` gives `@en`).
    #[serde(default = "default_indicator")]
    pub indicator: String,

    /// Prefix of the field merging all languages.
    #[serde(default = "default_merger_prefix")]
    pub merger_prefix: String,
}

fn default_indicator() -> String {
    "@".to_string()
}

fn default_merger_prefix() -> String {
    "_!@".to_string()
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            indicator: default_indicator(),
            merger_prefix: default_merger_prefix(),
        }
    }
}

impl LanguageConfig {
    /// Returns the field prefix for a language.
    pub fn prefix_for(&self, language: &str) -> String {
        format!("{}{}", self.indicator, language)
    }
}

/// Field prefixes for data type scoped fields.
///
/// Non-text values are indexed in fields named after their data type, so a
/// field token gets the prefix `_int`, `_date`, `_ref` and so on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DataTypeConfig {
    /// Prefix put before the data type tag (`_` gives `_int`).
    #[serde(default = "default_data_type_indicator")]
    pub indicator: String,
}

fn default_data_type_indicator() -> String {
    "_".to_string()
}

impl Default for DataTypeConfig {
    fn default() -> Self {
        Self {
            indicator: default_data_type_indicator(),
        }
    }
}

impl DataTypeConfig {
    /// Returns the field prefix for a data type tag.
    pub fn prefix_for(&self, tag: &str) -> String {
        format!("{}{}", self.indicator, tag)
    }
}

/// Rendering of compiled field fragments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    /// Positions concatenated, alternatives joined with AND/OR in place.
    #[default]
    Grouped,

    /// Cartesian expansion of all alternatives.
    Expanded,
}

#[cfg(test)]
mod tests;
