// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Raw message envelope and the handler contracts.
//!
//! - [`Message`] / [`RawMessage`] - byte payload plus declared media type
//! - [`MessageHandler`] - the byte-oriented processing contract
//! - [`RecordHandler`] - the structured-record processing contract

pub mod error;

use std::borrow::Cow;
use std::sync::Arc;

use crate::core::{Record, DEFAULT_MESSAGE_TYPE};

pub use error::{
    normalize, rewrap_codec, wrap_internal, BoxError, MessageError, MessageErrorKind,
};

/// Result type for handler operations.
pub type Result<T> = std::result::Result<T, MessageError>;

/// An opaque message envelope.
///
/// Both accessors may fail, e.g. when the content is streamed lazily.
pub trait Message: Send + Sync {
    /// Declared media type of the content.
    fn media_type(&self) -> Result<&str>;

    /// Byte content of the message.
    fn content(&self) -> Result<Cow<'_, [u8]>>;
}

/// Owned message with in-memory content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    media_type: String,
    content: Vec<u8>,
}

impl RawMessage {
    /// Create a message. A missing media type falls back to
    /// [`DEFAULT_MESSAGE_TYPE`].
    pub fn new(content: impl Into<Vec<u8>>, media_type: Option<&str>) -> Self {
        Self::with_default_type(content, media_type, DEFAULT_MESSAGE_TYPE)
    }

    /// Create a message with an explicit fallback media type.
    pub fn with_default_type(
        content: impl Into<Vec<u8>>,
        media_type: Option<&str>,
        default_type: &str,
    ) -> Self {
        Self {
            media_type: media_type.unwrap_or(default_type).to_string(),
            content: content.into(),
        }
    }

    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}

impl Message for RawMessage {
    fn media_type(&self) -> Result<&str> {
        Ok(&self.media_type)
    }

    fn content(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(&self.content))
    }
}

/// Byte-oriented message processing.
pub trait MessageHandler: Send + Sync {
    /// Process `data` of the given media type for `event`.
    ///
    /// Implementations should assume `application/octet-stream` when
    /// `media_type` is `None`.
    fn process(&self, event: &str, data: &[u8], media_type: Option<&str>) -> Result<()>;

    /// Process a message envelope for `event`.
    fn process_message(&self, event: &str, message: &dyn Message) -> Result<()>;
}

/// Structured-record processing.
pub trait RecordHandler: Send + Sync {
    fn process_record(&self, event: &str, record: Record) -> Result<()>;
}

impl<H: MessageHandler + ?Sized> MessageHandler for Arc<H> {
    fn process(&self, event: &str, data: &[u8], media_type: Option<&str>) -> Result<()> {
        (**self).process(event, data, media_type)
    }

    fn process_message(&self, event: &str, message: &dyn Message) -> Result<()> {
        (**self).process_message(event, message)
    }
}

impl<H: RecordHandler + ?Sized> RecordHandler for Arc<H> {
    fn process_record(&self, event: &str, record: Record) -> Result<()> {
        (**self).process_record(event, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_message_declared_type() {
        let message = RawMessage::new(b"{}".to_vec(), Some("text/json"));
        assert_eq!(message.media_type().unwrap(), "text/json");
        assert_eq!(message.content().unwrap().as_ref(), b"{}");
    }

    #[test]
    fn test_raw_message_default_type() {
        let message = RawMessage::new("abc", None);
        assert_eq!(message.media_type().unwrap(), DEFAULT_MESSAGE_TYPE);

        let message = RawMessage::with_default_type("abc", None, "text/plain");
        assert_eq!(message.media_type().unwrap(), "text/plain");
        assert_eq!(message.into_content(), b"abc".to_vec());
    }
}
