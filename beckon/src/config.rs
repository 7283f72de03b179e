//! Runtime configuration.
//!
//! Every field has a default, so an empty file (or no file at all) is a
//! valid configuration:
//!
//! ```toml
//! confirm_timeout_secs = 60
//! pagination_timeout_secs = 300
//!
//! [emojis]
//! accept = "✅"
//! reject = "❌"
//! first = "⏪"
//! previous = "⬅"
//! next = "➡"
//! last = "⏩"
//! stop = "❌"
//! ```

use crate::paginate::NavigationEmojis;
use beckon_core::ReactionEmoji;
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

/// Errors raised while loading a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file parsed but a value is unusable.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Timeouts and emoji used by prompts and paginators.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How long a confirmation prompt waits when the caller gives no timeout.
    pub confirm_timeout_secs: u64,
    /// How long a paginator waits for the next navigation reaction.
    pub pagination_timeout_secs: u64,
    /// Reaction emoji.
    pub emojis: EmojiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confirm_timeout_secs: 60,
            pagination_timeout_secs: 300,
            emojis: EmojiConfig::default(),
        }
    }
}

/// The `[emojis]` table. Values are unicode emoji.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmojiConfig {
    /// Confirmation "yes".
    pub accept: String,
    /// Confirmation "no".
    pub reject: String,
    /// Jump to the first page.
    pub first: String,
    /// Go back one page.
    pub previous: String,
    /// Go forward one page.
    pub next: String,
    /// Jump to the last page.
    pub last: String,
    /// Stop paginating.
    pub stop: String,
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            accept: "\u{2705}".to_owned(),
            reject: "\u{274C}".to_owned(),
            first: "\u{23EA}".to_owned(),
            previous: "\u{2B05}".to_owned(),
            next: "\u{27A1}".to_owned(),
            last: "\u{23E9}".to_owned(),
            stop: "\u{274C}".to_owned(),
        }
    }
}

impl Config {
    /// Read and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values can actually drive a prompt and a paginator.
    ///
    /// Timeouts must be non-zero, every emoji non-empty, the five navigation
    /// emoji pairwise distinct and accept distinct from reject. The stop
    /// emoji may equal the reject emoji.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.confirm_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "confirm_timeout_secs must be greater than zero".to_owned(),
            ));
        }
        if self.pagination_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "pagination_timeout_secs must be greater than zero".to_owned(),
            ));
        }

        let emojis = &self.emojis;
        let named = [
            ("accept", &emojis.accept),
            ("reject", &emojis.reject),
            ("first", &emojis.first),
            ("previous", &emojis.previous),
            ("next", &emojis.next),
            ("last", &emojis.last),
            ("stop", &emojis.stop),
        ];
        if let Some((name, _)) = named.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("emojis.{name} must not be empty")));
        }

        if emojis.accept == emojis.reject {
            return Err(ConfigError::Invalid(
                "emojis.accept and emojis.reject must differ".to_owned(),
            ));
        }

        let navigation = &named[2..];
        for (i, (name, value)) in navigation.iter().enumerate() {
            if let Some((other, _)) = navigation[i + 1..].iter().find(|(_, v)| v == value) {
                return Err(ConfigError::Invalid(format!(
                    "emojis.{name} and emojis.{other} must differ"
                )));
            }
        }
        Ok(())
    }

    /// Default timeout of a confirmation prompt.
    pub fn confirm_timeout(&self) -> Duration {
        Duration::from_secs(self.confirm_timeout_secs)
    }

    /// Inactivity timeout of a paginator.
    pub fn pagination_timeout(&self) -> Duration {
        Duration::from_secs(self.pagination_timeout_secs)
    }

    /// Confirmation "yes" emoji.
    pub fn accept_emoji(&self) -> ReactionEmoji {
        ReactionEmoji::unicode(&self.emojis.accept)
    }

    /// Confirmation "no" emoji.
    pub fn reject_emoji(&self) -> ReactionEmoji {
        ReactionEmoji::unicode(&self.emojis.reject)
    }

    /// The paginator's navigation emoji.
    pub fn navigation(&self) -> NavigationEmojis {
        NavigationEmojis {
            first: ReactionEmoji::unicode(&self.emojis.first),
            previous: ReactionEmoji::unicode(&self.emojis.previous),
            next: ReactionEmoji::unicode(&self.emojis.next),
            last: ReactionEmoji::unicode(&self.emojis.last),
            stop: ReactionEmoji::unicode(&self.emojis.stop),
        }
    }
}
