//! Editor configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! `#[derive(Serialize, Deserialize)]` generates the TOML mapping, and
//! `#[serde(default)]` fills missing fields from `Default`, so a config file
//! only has to mention what it changes:
//!
//! ```toml
//! [editor]
//! tab_size = 4
//!
//! [languages.cpp]
//! unknown_characters = "ignore"
//! ```

use glint_buffer::IndentUnit;
use glint_syntax::{Language, TokenizerOptions, UnknownCharacterBehaviour};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editor behavior settings
    pub editor: EditorConfig,

    /// Language-specific settings keyed by language id
    pub languages: HashMap<String, LanguageConfig>,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(%err, "using default configuration");
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("glint").join("config.toml"))
    }

    /// Saves the config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::default_path()?)
    }

    /// Saves the config to a file, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns config for a specific language.
    pub fn language(&self, id: &str) -> LanguageConfig {
        self.languages.get(id).cloned().unwrap_or_default()
    }

    /// The language's tokenizer options with any overrides applied.
    pub fn tokenizer_options(&self, language: Language) -> TokenizerOptions {
        let mut options = language.tokenizer_options();
        let overrides = self.language(language.id());
        if let Some(comment) = overrides.comment {
            options.comment_prefix = comment;
        }
        if let Some(behaviour) = overrides.unknown_characters {
            options.unknown_character_behaviour = behaviour;
        }
        options
    }

    /// One level of indentation.
    pub fn indent_unit(&self) -> IndentUnit {
        IndentUnit::spaces(self.editor.tab_size)
    }
}

/// Editor behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Indentation width in spaces
    pub tab_size: usize,

    /// Language used when none is given or detected
    pub language: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 2,
            language: "cpp".to_string(),
        }
    }
}

/// Language-specific overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Line comment prefix
    pub comment: Option<String>,

    /// Unknown-character policy
    pub unknown_characters: Option<UnknownCharacterBehaviour>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
