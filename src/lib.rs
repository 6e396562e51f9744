// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # recordmsg
//!
//! Structured-record adapters for byte-oriented message pipelines.
//!
//! A pipeline moves opaque bytes tagged with a media type. Application code
//! usually wants decoded records instead. This library bridges the two:
//! - [`RecordConsumer`] decodes inbound messages with the parser registered
//!   for their media type and dispatches the [`Record`] to a processor
//! - [`RecordProducer`] encodes outbound records with a builder chosen per
//!   event and forwards the bytes to an upstream [`MessageHandler`]
//!
//! ## Architecture
//!
//! - `core/` - Record values, codec errors, media type constants
//! - `encoding/` - Parser/builder interfaces, codec registry, JSON codec
//! - `message/` - Message envelope, handler contracts, message errors
//! - `consumer` / `producer` - The two adapters
//! - `config` - TOML adapter configuration
//!
//! ## Example: Round Trip
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::{Arc, Mutex};
//!
//! use recordmsg::message::Result;
//! use recordmsg::{
//!     CodecRegistry, Message, MessageHandler, Record, RecordConsumer, RecordHandler,
//!     RecordProducer,
//! };
//!
//! #[derive(Default)]
//! struct Wire(Mutex<Vec<(Vec<u8>, Option<String>)>>);
//!
//! impl MessageHandler for Wire {
//!     fn process(&self, _event: &str, data: &[u8], media_type: Option<&str>) -> Result<()> {
//!         self.0.lock().unwrap().push((data.to_vec(), media_type.map(String::from)));
//!         Ok(())
//!     }
//!
//!     fn process_message(&self, event: &str, message: &dyn Message) -> Result<()> {
//!         self.process(event, &message.content()?, Some(message.media_type()?))
//!     }
//! }
//!
//! let registry = Arc::new(CodecRegistry::with_defaults());
//! let wire = Arc::new(Wire::default());
//! let producer = RecordProducer::new(wire.clone(), registry.clone());
//!
//! let mut record = Record::new();
//! record.insert("foo".into(), "bar".into());
//! producer.process_record("urn:example:greeting", record.clone())?;
//!
//! let (data, media_type) = wire.0.lock().unwrap().pop().unwrap();
//! let decoded = Arc::new(Mutex::new(None));
//! let slot = decoded.clone();
//! let consumer = RecordConsumer::new(
//!     registry,
//!     Arc::new(move |_: &str, record: Record| -> Result<()> {
//!         *slot.lock().unwrap() = Some(record);
//!         Ok(())
//!     }),
//! );
//! consumer.process("urn:example:greeting", &data, media_type.as_deref())?;
//! assert_eq!(decoded.lock().unwrap().take(), Some(record));
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

pub use crate::core::{
    CodecError, ErrorCode, Record, RecordValue, DEFAULT_MESSAGE_TYPE, DEFAULT_RECORD_TYPE,
};

// Codecs
pub mod encoding;

pub use encoding::{CodecRegistry, JsonCodec, RecordBuilder, RecordCodecProvider, RecordParser};

// Message envelope and handler contracts
pub mod message;

pub use message::{Message, MessageError, MessageErrorKind, MessageHandler, RawMessage, RecordHandler};

// Adapters
pub mod consumer;
pub mod producer;

pub use consumer::{RecordConsumer, RecordProcessor};
pub use producer::{FixedRecordType, RecordProducer, RecordTypeSelector};

// Configuration
pub mod config;

pub use config::{AdapterConfig, ConfigError};
