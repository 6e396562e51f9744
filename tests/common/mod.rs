// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::borrow::Cow;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use recordmsg::message::Result;
use recordmsg::{
    CodecError, ErrorCode, JsonCodec, Message, MessageError, MessageHandler, Record,
    RecordBuilder, RecordCodecProvider, RecordParser, RecordProcessor, RecordValue,
};

// ============================================================================
// Records
// ============================================================================

/// Build a record from `(name, value)` pairs, keeping their order.
pub fn record<const N: usize>(fields: [(&str, RecordValue); N]) -> Record {
    fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

pub fn foo_bar() -> Record {
    record([("foo", RecordValue::String("bar".to_string()))])
}

// ============================================================================
// Codec Provider Mock
// ============================================================================

/// How the mock provider answers lookups.
#[derive(Debug, Clone)]
pub enum Lookup {
    /// Answer with the JSON codec
    Json,
    /// Fail with the given codec error
    Fail(CodecError),
}

/// Provider that counts lookups and answers as configured.
pub struct MockProvider {
    lookup: Lookup,
    pub parser_lookups: AtomicUsize,
    pub builder_lookups: AtomicUsize,
    pub requested: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new(lookup: Lookup) -> Self {
        Self {
            lookup,
            parser_lookups: AtomicUsize::new(0),
            builder_lookups: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn json() -> Self {
        Self::new(Lookup::Json)
    }

    pub fn failing(error: CodecError) -> Self {
        Self::new(Lookup::Fail(error))
    }

    pub fn parser_lookups(&self) -> usize {
        self.parser_lookups.load(Ordering::SeqCst)
    }

    pub fn builder_lookups(&self) -> usize {
        self.builder_lookups.load(Ordering::SeqCst)
    }

    fn answer<T: ?Sized>(
        &self,
        media_type: &str,
        codec: Arc<T>,
    ) -> recordmsg::core::Result<Arc<T>> {
        self.requested.lock().unwrap().push(media_type.to_string());
        match &self.lookup {
            Lookup::Json => Ok(codec),
            Lookup::Fail(error) => Err(error.clone()),
        }
    }
}

impl RecordCodecProvider for MockProvider {
    fn parser(&self, media_type: &str) -> recordmsg::core::Result<Arc<dyn RecordParser>> {
        self.parser_lookups.fetch_add(1, Ordering::SeqCst);
        let codec: Arc<dyn RecordParser> = Arc::new(JsonCodec::new());
        self.answer(media_type, codec)
    }

    fn builder(&self, media_type: &str) -> recordmsg::core::Result<Arc<dyn RecordBuilder>> {
        self.builder_lookups.fetch_add(1, Ordering::SeqCst);
        let codec: Arc<dyn RecordBuilder> = Arc::new(JsonCodec::new());
        self.answer(media_type, codec)
    }
}

// ============================================================================
// Messages
// ============================================================================

/// Accessor of [`BrokenMessage`] that fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrokenPart {
    MediaType,
    Content,
}

/// Message with one accessor failing with an argument error.
pub struct BrokenMessage {
    pub part: BrokenPart,
}

impl BrokenMessage {
    pub fn new(part: BrokenPart) -> Self {
        Self { part }
    }

    pub fn error(part: BrokenPart) -> MessageError {
        let reason = match part {
            BrokenPart::MediaType => "media type header is unreadable",
            BrokenPart::Content => "content stream was closed",
        };
        MessageError::argument(ErrorCode::InvalidArgument, reason)
    }
}

impl Message for BrokenMessage {
    fn media_type(&self) -> Result<&str> {
        match self.part {
            BrokenPart::MediaType => Err(Self::error(self.part)),
            BrokenPart::Content => Ok("application/json"),
        }
    }

    fn content(&self) -> Result<Cow<'_, [u8]>> {
        match self.part {
            BrokenPart::MediaType => Ok(Cow::Borrowed(&br#"{"foo":"bar"}"#[..])),
            BrokenPart::Content => Err(Self::error(self.part)),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Processor recording every record it receives.
#[derive(Default)]
pub struct RecordingProcessor {
    pub calls: Mutex<Vec<(String, Record)>>,
}

impl RecordingProcessor {
    pub fn calls(&self) -> Vec<(String, Record)> {
        self.calls.lock().unwrap().clone()
    }
}

impl RecordProcessor for RecordingProcessor {
    fn process_record(&self, event: &str, record: Record) -> Result<()> {
        self.calls.lock().unwrap().push((event.to_string(), record));
        Ok(())
    }
}

/// A payload seen by [`RecordingUpstream`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forwarded {
    pub event: String,
    pub data: Vec<u8>,
    pub media_type: Option<String>,
}

/// Upstream message handler recording every call.
#[derive(Default)]
pub struct RecordingUpstream {
    pub processed: Mutex<Vec<Forwarded>>,
    pub messages: AtomicUsize,
}

impl RecordingUpstream {
    pub fn processed(&self) -> Vec<Forwarded> {
        self.processed.lock().unwrap().clone()
    }
}

impl MessageHandler for RecordingUpstream {
    fn process(&self, event: &str, data: &[u8], media_type: Option<&str>) -> Result<()> {
        self.processed.lock().unwrap().push(Forwarded {
            event: event.to_string(),
            data: data.to_vec(),
            media_type: media_type.map(str::to_string),
        });
        Ok(())
    }

    fn process_message(&self, event: &str, message: &dyn Message) -> Result<()> {
        self.messages.fetch_add(1, Ordering::SeqCst);
        self.process(event, &message.content()?, Some(message.media_type()?))
    }
}
