// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inbound adapter: raw messages to records.
//!
//! [`RecordConsumer`] decodes every message with the parser registered for
//! its media type and hands the record to a [`RecordProcessor`]. The decode
//! step is fixed; the processor is the only extension point.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use recordmsg::{CodecRegistry, MessageHandler, Record, RecordConsumer};
//!
//! let consumer = RecordConsumer::new(
//!     Arc::new(CodecRegistry::with_defaults()),
//!     Arc::new(|event: &str, record: Record| -> recordmsg::message::Result<()> {
//!         println!("{event}: {} fields", record.len());
//!         Ok(())
//!     }),
//! );
//! consumer
//!     .process("urn:example:event", br#"{"foo":"bar"}"#, Some("text/json"))
//!     .unwrap();
//! ```

use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::{CodecError, Record, DEFAULT_MESSAGE_TYPE};
use crate::encoding::RecordCodecProvider;
use crate::message::{
    wrap_internal, Message, MessageError, MessageHandler, RawMessage, RecordHandler, Result,
};

const PARSE_NOTICE: &str = "Could not parse message";

/// Application logic invoked with each decoded record.
pub trait RecordProcessor: Send + Sync {
    fn process_record(&self, event: &str, record: Record) -> Result<()>;
}

impl<F> RecordProcessor for F
where
    F: Fn(&str, Record) -> Result<()> + Send + Sync,
{
    fn process_record(&self, event: &str, record: Record) -> Result<()> {
        self(event, record)
    }
}

/// Decodes raw messages into records and dispatches them to a processor.
#[derive(Clone)]
pub struct RecordConsumer {
    provider: Arc<dyn RecordCodecProvider>,
    processor: Arc<dyn RecordProcessor>,
    default_type: String,
}

impl RecordConsumer {
    pub fn new(
        provider: Arc<dyn RecordCodecProvider>,
        processor: Arc<dyn RecordProcessor>,
    ) -> Self {
        Self {
            provider,
            processor,
            default_type: DEFAULT_MESSAGE_TYPE.to_string(),
        }
    }

    /// Media type assumed by [`process`](MessageHandler::process) when the
    /// caller declares none.
    pub fn with_message_type(mut self, media_type: impl Into<String>) -> Self {
        self.default_type = media_type.into();
        self
    }

    pub fn message_type(&self) -> &str {
        &self.default_type
    }

    /// Parse the content of `message` according to its media type.
    ///
    /// Every failure (type, parser lookup, content, parsing) becomes an
    /// internal [`MessageError`] with the original error as its source.
    pub fn fetch_record(&self, message: &dyn Message) -> Result<Record> {
        let media_type = message.media_type().map_err(parse_failure)?;
        let parser = self
            .provider
            .parser(media_type)
            .map_err(codec_parse_failure)?;
        let content = message.content().map_err(parse_failure)?;
        parser.parse(&content).map_err(codec_parse_failure)
    }
}

fn parse_failure(error: MessageError) -> MessageError {
    let wrapped = wrap_internal(PARSE_NOTICE, error);
    warn!(error = %wrapped, "message rejected");
    wrapped
}

fn codec_parse_failure(error: CodecError) -> MessageError {
    warn!(fields = ?error.log_fields(), "record parsing failed");
    wrap_internal(PARSE_NOTICE, error)
}

impl MessageHandler for RecordConsumer {
    fn process(&self, event: &str, data: &[u8], media_type: Option<&str>) -> Result<()> {
        let message = RawMessage::with_default_type(data, media_type, &self.default_type);
        self.process_message(event, &message)
    }

    fn process_message(&self, event: &str, message: &dyn Message) -> Result<()> {
        let record = self.fetch_record(message)?;
        debug!(event, fields = record.len(), "dispatching parsed record");
        self.processor.process_record(event, record)
    }
}

impl RecordHandler for RecordConsumer {
    fn process_record(&self, event: &str, record: Record) -> Result<()> {
        self.processor.process_record(event, record)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::core::{ErrorCode, RecordValue};
    use crate::encoding::CodecRegistry;

    type Calls = Arc<Mutex<Vec<(String, Record)>>>;

    fn recording_consumer(provider: Arc<dyn RecordCodecProvider>) -> (RecordConsumer, Calls) {
        let calls: Calls = Arc::default();
        let sink = calls.clone();
        let consumer = RecordConsumer::new(
            provider,
            Arc::new(move |event: &str, record: Record| -> Result<()> {
                sink.lock().unwrap().push((event.to_string(), record));
                Ok(())
            }),
        );
        (consumer, calls)
    }

    #[test]
    fn test_process_dispatches_parsed_record() {
        let (consumer, calls) = recording_consumer(Arc::new(CodecRegistry::with_defaults()));

        consumer
            .process("urn:foo:bar", br#"{"foo":"bar"}"#, Some("text/json"))
            .unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "urn:foo:bar");
        assert_eq!(
            calls[0].1.get("foo"),
            Some(&RecordValue::String("bar".to_string()))
        );
    }

    #[test]
    fn test_missing_type_uses_default_message_type() {
        let (consumer, calls) = recording_consumer(Arc::new(CodecRegistry::with_defaults()));

        let err = consumer.process("urn:foo:bar", b"{}", None).unwrap_err();
        assert!(err.is_internal());
        assert_eq!(
            err.message(),
            "Could not parse message: Caught CodecError::UnknownMediaType"
        );
        assert!(calls.lock().unwrap().is_empty());

        let consumer = consumer.with_message_type("application/json");
        consumer.process("urn:foo:bar", b"{}", None).unwrap();
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_content_is_internal_error() {
        let (consumer, calls) = recording_consumer(Arc::new(CodecRegistry::with_defaults()));

        let err = consumer
            .process("urn:foo:bar", b"not json", Some("application/json"))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Internal);
        assert!(matches!(
            err.cause_ref::<CodecError>(),
            Some(CodecError::Malformed { .. })
        ));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_process_record_bypasses_decoding() {
        let (consumer, calls) = recording_consumer(Arc::new(CodecRegistry::new()));

        let mut record = Record::new();
        record.insert("k".to_string(), RecordValue::Bool(true));
        consumer.process_record("urn:k", record.clone()).unwrap();

        assert_eq!(calls.lock().unwrap()[0].1, record);
    }

    #[test]
    fn test_processor_errors_are_not_wrapped() {
        let consumer = RecordConsumer::new(
            Arc::new(CodecRegistry::with_defaults()),
            Arc::new(|_: &str, _: Record| -> Result<()> {
                Err(MessageError::argument(ErrorCode::InvalidArgument, "rejected"))
            }),
        );

        let err = consumer
            .process("urn:foo:bar", b"{}", Some("application/json"))
            .unwrap_err();
        assert!(err.is_argument());
        assert_eq!(err.message(), "rejected");
    }
}
