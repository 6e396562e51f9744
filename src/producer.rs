// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Outbound adapter: records to raw messages.
//!
//! [`RecordProducer`] decorates an upstream [`MessageHandler`]. Raw calls are
//! forwarded untouched; records are encoded with the builder registered for
//! the media type chosen by a [`RecordTypeSelector`] and then forwarded.
//!
//! Producers that need validation or enrichment before encoding wrap the
//! producer in their own [`RecordHandler`] and call
//! [`process_record`](RecordHandler::process_record) on it once done.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{Record, DEFAULT_RECORD_TYPE};
use crate::encoding::{RecordBuilder, RecordCodecProvider};
use crate::message::{
    normalize, rewrap_codec, BoxError, Message, MessageHandler, RecordHandler, Result,
};

const BUILDER_NOTICE: &str = "Could not get record builder";
const PROCESS_NOTICE: &str = "Could not process record";

/// Chooses the media type a record is encoded with.
pub trait RecordTypeSelector: Send + Sync {
    /// Media type for records of `event`.
    ///
    /// Returning a [`MessageError`](crate::MessageError) propagates it
    /// unchanged; any other error is reported as internal.
    fn record_type(&self, event: &str) -> std::result::Result<String, BoxError>;
}

impl<F> RecordTypeSelector for F
where
    F: Fn(&str) -> std::result::Result<String, BoxError> + Send + Sync,
{
    fn record_type(&self, event: &str) -> std::result::Result<String, BoxError> {
        self(event)
    }
}

/// Selector answering the same media type for every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRecordType(String);

impl FixedRecordType {
    pub fn new(media_type: impl Into<String>) -> Self {
        Self(media_type.into())
    }

    pub fn media_type(&self) -> &str {
        &self.0
    }
}

impl Default for FixedRecordType {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_TYPE)
    }
}

impl RecordTypeSelector for FixedRecordType {
    fn record_type(&self, _event: &str) -> std::result::Result<String, BoxError> {
        Ok(self.0.clone())
    }
}

/// Encodes records and forwards them to an upstream message handler.
#[derive(Clone)]
pub struct RecordProducer {
    handler: Arc<dyn MessageHandler>,
    provider: Arc<dyn RecordCodecProvider>,
    selector: Arc<dyn RecordTypeSelector>,
}

impl RecordProducer {
    /// Create a producer encoding with [`DEFAULT_RECORD_TYPE`].
    pub fn new(handler: Arc<dyn MessageHandler>, provider: Arc<dyn RecordCodecProvider>) -> Self {
        Self {
            handler,
            provider,
            selector: Arc::new(FixedRecordType::default()),
        }
    }

    /// Replace the media type selection strategy.
    pub fn with_record_type(mut self, selector: impl RecordTypeSelector + 'static) -> Self {
        self.selector = Arc::new(selector);
        self
    }

    /// Media type records of `event` are encoded with.
    pub fn record_type(&self, event: &str) -> std::result::Result<String, BoxError> {
        self.selector.record_type(event)
    }

    /// Look up the builder for `media_type`.
    ///
    /// A codec error is rewrapped as a runtime
    /// [`MessageError`](crate::MessageError) that keeps the codec error's code.
    pub fn record_builder(&self, media_type: &str) -> Result<Arc<dyn RecordBuilder>> {
        self.provider.builder(media_type).map_err(|error| {
            warn!(media_type, fields = ?error.log_fields(), "no record builder");
            rewrap_codec(BUILDER_NOTICE, error)
        })
    }

    fn encode(&self, event: &str, record: &Record) -> Result<(String, Vec<u8>)> {
        let media_type = self
            .record_type(event)
            .map_err(|error| normalize(PROCESS_NOTICE, error))?;
        let builder = self.record_builder(&media_type)?;
        let data = builder.build(record).map_err(|error| {
            warn!(event, media_type = %media_type, fields = ?error.log_fields(), "record encoding failed");
            normalize(PROCESS_NOTICE, Box::new(error))
        })?;
        Ok((media_type, data))
    }
}

impl MessageHandler for RecordProducer {
    fn process(&self, event: &str, data: &[u8], media_type: Option<&str>) -> Result<()> {
        self.handler.process(event, data, media_type)
    }

    fn process_message(&self, event: &str, message: &dyn Message) -> Result<()> {
        self.handler.process_message(event, message)
    }
}

impl RecordHandler for RecordProducer {
    fn process_record(&self, event: &str, record: Record) -> Result<()> {
        let (media_type, data) = self.encode(event, &record)?;
        debug!(event, media_type = %media_type, bytes = data.len(), "forwarding encoded record");
        self.process(event, &data, Some(&media_type))
    }
}
