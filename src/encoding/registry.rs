// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codec registry keyed by media type.
//!
//! This module provides the default [`RecordCodecProvider`]:
//! - Dynamic registration of parsers and builders
//! - Media type normalisation (`Text/JSON; charset=utf-8` -> `text/json`)
//! - Thread-safe lookups
//!
//! # Example
//!
//! ```
//! use recordmsg::encoding::{CodecRegistry, JsonCodec, RecordCodecProvider, RecordParser};
//!
//! let registry = CodecRegistry::new();
//! registry.register_codec("application/json", JsonCodec::new());
//! let parser = registry.parser("application/json").unwrap();
//! let record = parser.parse(br#"{"x": 1}"#).unwrap();
//! assert_eq!(record.len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use super::codec::{RecordBuilder, RecordCodecProvider, RecordParser};
use super::json::JsonCodec;
use crate::core::{media_type_essence, CodecError, Result};

#[derive(Default, Clone)]
struct Entry {
    parser: Option<Arc<dyn RecordParser>>,
    builder: Option<Arc<dyn RecordBuilder>>,
}

/// Registry mapping media types to parsers and builders.
#[derive(Default)]
pub struct CodecRegistry {
    // Keys are media type essences, see `media_type_essence`
    entries: RwLock<HashMap<String, Entry>>,
}

impl CodecRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in JSON codec registered under
    /// `application/json` and `text/json`.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        let json = Arc::new(JsonCodec::new());
        for media_type in ["application/json", "text/json"] {
            registry.register_parser(media_type, json.clone());
            registry.register_builder(media_type, json.clone());
        }
        registry
    }

    /// Register a parser for a media type, replacing any previous one.
    pub fn register_parser(&self, media_type: &str, parser: Arc<dyn RecordParser>) {
        let key = media_type_essence(media_type);
        debug!(media_type = %key, "registering record parser");
        self.write_entries(|entries| {
            entries.entry(key).or_default().parser = Some(parser);
        });
    }

    /// Register a builder for a media type, replacing any previous one.
    pub fn register_builder(&self, media_type: &str, builder: Arc<dyn RecordBuilder>) {
        let key = media_type_essence(media_type);
        debug!(media_type = %key, "registering record builder");
        self.write_entries(|entries| {
            entries.entry(key).or_default().builder = Some(builder);
        });
    }

    /// Register one codec as both parser and builder for a media type.
    pub fn register_codec<C>(&self, media_type: &str, codec: C)
    where
        C: RecordParser + RecordBuilder + 'static,
    {
        let codec = Arc::new(codec);
        self.register_parser(media_type, codec.clone());
        self.register_builder(media_type, codec);
    }

    /// Unregister both sides of a media type.
    ///
    /// # Returns
    ///
    /// `true` if anything was registered, `false` if not found
    pub fn unregister(&self, media_type: &str) -> bool {
        let key = media_type_essence(media_type);
        self.write_entries(|entries| entries.remove(&key).is_some())
    }

    /// Check if a parser or builder is registered for a media type.
    pub fn has_media_type(&self, media_type: &str) -> bool {
        let key = media_type_essence(media_type);
        self.read_entries(|entries| entries.contains_key(&key))
    }

    /// Get all registered media types, sorted.
    pub fn media_types(&self) -> Vec<String> {
        let mut types = self.read_entries(|entries| entries.keys().cloned().collect::<Vec<_>>());
        types.sort();
        types
    }

    /// Get the number of registered media types.
    pub fn count(&self) -> usize {
        self.read_entries(HashMap::len)
    }

    fn lookup(&self, media_type: &str) -> Result<Entry> {
        if media_type.trim().is_empty() {
            return Err(CodecError::invalid_argument(
                "media_type",
                "media type must not be empty",
            ));
        }
        let key = media_type_essence(media_type);
        self.read_entries(|entries| entries.get(&key).cloned())
            .ok_or_else(|| CodecError::unknown_media_type(media_type))
    }

    // A panic while holding the lock cannot leave a half-written entry, so
    // poisoning is ignored.
    fn read_entries<T>(&self, f: impl FnOnce(&HashMap<String, Entry>) -> T) -> T {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        f(&entries)
    }

    fn write_entries<T>(&self, f: impl FnOnce(&mut HashMap<String, Entry>) -> T) -> T {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut entries)
    }
}

impl RecordCodecProvider for CodecRegistry {
    fn parser(&self, media_type: &str) -> Result<Arc<dyn RecordParser>> {
        self.lookup(media_type)?
            .parser
            .ok_or_else(|| CodecError::unknown_media_type(media_type))
    }

    fn builder(&self, media_type: &str) -> Result<Arc<dyn RecordBuilder>> {
        self.lookup(media_type)?
            .builder
            .ok_or_else(|| CodecError::unknown_media_type(media_type))
    }
}
