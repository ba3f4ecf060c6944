//! Loading a [`WhitelistConfig`] from JSON.
//!
//! The engine never needs this; it is a convenience for callers that keep
//! their whitelist in a file. The accepted document is either `null`
//! (filtering disabled) or an object keyed by tag name:
//!
//! ```json
//! {
//!     "p": null,
//!     "a": ["href", "title"],
//!     "img": { "src": 1, "width": 1, "height": 1 }
//! }
//! ```
//!
//! `null` allows the tag with every attribute stripped. An array lists the
//! allowed attribute names. An object lists them as keys; its values are
//! ignored.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::IgnoredAny;
use thiserror::Error;
use tracing::debug;

use super::whitelist::{TagRule, WhitelistConfig};

/// Errors that can occur while loading a whitelist.
#[derive(Debug, Error)]
pub enum WhitelistError {
    /// The whitelist file could not be read.
    #[error("failed to read whitelist {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not have the expected shape.
    #[error("invalid whitelist: {0}")]
    Json(#[from] serde_json::Error),
}

/// One rule as written in JSON.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRule {
    Names(Vec<String>),
    Legacy(BTreeMap<String, IgnoredAny>),
}

impl From<Option<RawRule>> for TagRule {
    fn from(raw: Option<RawRule>) -> Self {
        match raw {
            None => Self::StripAllAttributes,
            Some(RawRule::Names(names)) => Self::attributes(names),
            Some(RawRule::Legacy(names)) => Self::attributes(names.into_keys()),
        }
    }
}

type RawWhitelist = Option<BTreeMap<String, Option<RawRule>>>;

impl WhitelistConfig {
    /// Parse a whitelist from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`WhitelistError::Json`] if the text is not JSON or a rule is
    /// neither `null`, an array of strings, nor an object.
    pub fn from_json_str(json: &str) -> Result<Self, WhitelistError> {
        let raw: RawWhitelist = serde_json::from_str(json)?;
        let Some(tags) = raw else {
            return Ok(Self::Disabled);
        };

        let config = tags
            .into_iter()
            .fold(Self::new(), |config, (tag, rule)| {
                config.with_rule(&tag, rule.into())
            });
        debug!(tags = config.len(), "loaded whitelist");
        Ok(config)
    }

    /// Read and parse a whitelist file.
    ///
    /// # Errors
    ///
    /// Returns [`WhitelistError::Io`] if the file cannot be read and
    /// [`WhitelistError::Json`] if its contents are invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, WhitelistError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| WhitelistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
