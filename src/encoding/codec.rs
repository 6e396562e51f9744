// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codec interfaces consumed by the record adapters.
//!
//! ## Architecture
//!
//! - **Capabilities** ([`RecordParser`], [`RecordBuilder`]) - convert between
//!   bytes and [`Record`]s for one media type
//! - **Provider** ([`RecordCodecProvider`]) - resolves the capabilities for a
//!   media type, see [`CodecRegistry`](super::CodecRegistry)

use std::sync::Arc;

use crate::core::{Record, Result};

/// Parses a byte payload into a record.
pub trait RecordParser: Send + Sync {
    /// Parse `data` into a record.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Malformed` if `data` is not valid for the codec.
    fn parse(&self, data: &[u8]) -> Result<Record>;
}

/// Builds a byte payload from a record.
pub trait RecordBuilder: Send + Sync {
    /// Encode `record` into bytes.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Unencodable` if a value has no representation in
    /// the target encoding.
    fn build(&self, record: &Record) -> Result<Vec<u8>>;
}

/// Resolves parsers and builders by media type.
pub trait RecordCodecProvider: Send + Sync {
    /// Get the parser registered for `media_type`.
    fn parser(&self, media_type: &str) -> Result<Arc<dyn RecordParser>>;

    /// Get the builder registered for `media_type`.
    fn builder(&self, media_type: &str) -> Result<Arc<dyn RecordBuilder>>;
}

impl<F> RecordParser for F
where
    F: Fn(&[u8]) -> Result<Record> + Send + Sync,
{
    fn parse(&self, data: &[u8]) -> Result<Record> {
        self(data)
    }
}

impl<F> RecordBuilder for F
where
    F: Fn(&Record) -> Result<Vec<u8>> + Send + Sync,
{
    fn build(&self, record: &Record) -> Result<Vec<u8>> {
        self(record)
    }
}

impl<P: RecordCodecProvider + ?Sized> RecordCodecProvider for Arc<P> {
    fn parser(&self, media_type: &str) -> Result<Arc<dyn RecordParser>> {
        (**self).parser(media_type)
    }

    fn builder(&self, media_type: &str) -> Result<Arc<dyn RecordBuilder>> {
        (**self).builder(media_type)
    }
}
