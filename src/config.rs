// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Adapter configuration.
//!
//! Loaded from TOML; every key is optional:
//!
//! ```toml
//! default_record_type = "application/json"
//! default_message_type = "application/octet-stream"
//! pretty = false
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{DEFAULT_MESSAGE_TYPE, DEFAULT_RECORD_TYPE};
use crate::encoding::{CodecRegistry, JsonCodec};
use crate::producer::FixedRecordType;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: '{key}' must not be empty")]
    Empty { key: &'static str },
}

/// Settings shared by consumers and producers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdapterConfig {
    /// Media type producers encode records with.
    pub default_record_type: String,
    /// Media type assumed for raw data without a declared type.
    pub default_message_type: String,
    /// Emit indented JSON.
    pub pretty: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            default_record_type: DEFAULT_RECORD_TYPE.to_string(),
            default_message_type: DEFAULT_MESSAGE_TYPE.to_string(),
            pretty: false,
        }
    }
}

impl AdapterConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_record_type.trim().is_empty() {
            return Err(ConfigError::Empty {
                key: "default_record_type",
            });
        }
        if self.default_message_type.trim().is_empty() {
            return Err(ConfigError::Empty {
                key: "default_message_type",
            });
        }
        Ok(())
    }

    /// Selector that always answers `default_record_type`.
    pub fn record_type_selector(&self) -> FixedRecordType {
        FixedRecordType::new(self.default_record_type.clone())
    }

    /// Registry with the built-in codecs, honouring `pretty`.
    pub fn registry(&self) -> CodecRegistry {
        let registry = CodecRegistry::with_defaults();
        if self.pretty {
            let json = Arc::new(JsonCodec::pretty());
            for media_type in registry.media_types() {
                registry.register_builder(&media_type, json.clone());
            }
        }
        registry
    }
}
