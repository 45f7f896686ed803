//! Engine configuration, loaded from RON.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::reply::MESSAGE_CHAR_LIMIT;
use crate::schema::request::Style;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("reply_limit must be greater than zero")]
    ZeroReplyLimit,
}

/// Settings for an [`OldeEngine`](crate::core::engine::OldeEngine) and the
/// replies built from it. None of these touch the rewrite stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for opener selection; `None` draws from the thread RNG.
    pub seed: Option<u64>,
    /// Style used when a caller does not name one.
    pub default_style: Style,
    /// Maximum reply length in characters.
    pub reply_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_style: Style::Plain,
            reply_limit: MESSAGE_CHAR_LIMIT,
        }
    }
}

impl EngineConfig {
    pub fn load_from_ron(path: &Path) -> Result<EngineConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    pub fn parse_ron(input: &str) -> Result<EngineConfig, ConfigError> {
        let config: EngineConfig = ron::from_str(input)?;
        if config.reply_limit == 0 {
            return Err(ConfigError::ZeroReplyLimit);
        }
        Ok(config)
    }
}
