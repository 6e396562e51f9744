// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout recordmsg.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Errors raised by record codecs
//! - [`Record`] / [`RecordValue`] - Structured record representation
//! - Media type constants and normalisation

pub mod error;
pub mod value;

pub use error::{CodecError, ErrorCode, Result};
pub use value::{Record, RecordValue};

/// Media type used by producers when no other type is selected.
pub const DEFAULT_RECORD_TYPE: &str = "application/json";

/// Media type assumed for raw data handed in without a declared type.
pub const DEFAULT_MESSAGE_TYPE: &str = "application/octet-stream";

/// Normalise a media type for registry lookups.
///
/// Trims whitespace, drops parameters (`; charset=utf-8`) and lowercases
/// the remaining `type/subtype` essence.
pub fn media_type_essence(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
