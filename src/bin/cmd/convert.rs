// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Convert command - decode a payload and encode it with another media type.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use recordmsg::message::Result as HandlerResult;
use recordmsg::{
    AdapterConfig, FixedRecordType, Message, MessageError, MessageHandler, Record, RecordConsumer,
    RecordHandler, RecordProducer,
};
use tracing::info;

use crate::common::{read_input, Result, DEFAULT_EVENT};

/// Decode a payload and encode it with another media type.
#[derive(Args, Clone, Debug)]
pub struct ConvertArgs {
    /// Input file (`-` for stdin)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Media type of the input [default: default_message_type from config]
    #[arg(long, value_name = "MEDIA_TYPE")]
    from: Option<String>,

    /// Media type of the output [default: default_record_type from config]
    #[arg(long, value_name = "MEDIA_TYPE")]
    to: Option<String>,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,

    /// Event identifier passed to the adapters
    #[arg(short, long, default_value = DEFAULT_EVENT)]
    event: String,
}

/// Upstream handler writing every payload to a file.
struct FileSink {
    path: PathBuf,
}

impl MessageHandler for FileSink {
    fn process(&self, event: &str, data: &[u8], media_type: Option<&str>) -> HandlerResult<()> {
        fs::write(&self.path, data).map_err(|e| {
            MessageError::internal(format!("Could not write {}", self.path.display()))
                .with_source(e)
        })?;
        info!(
            event,
            media_type = media_type.unwrap_or_default(),
            bytes = data.len(),
            path = %self.path.display(),
            "payload written"
        );
        Ok(())
    }

    fn process_message(&self, event: &str, message: &dyn Message) -> HandlerResult<()> {
        self.process(event, &message.content()?, Some(message.media_type()?))
    }
}

impl ConvertArgs {
    pub fn run(self, config: &AdapterConfig) -> Result<()> {
        let config = AdapterConfig {
            pretty: config.pretty || self.pretty,
            ..config.clone()
        };
        let data = read_input(&self.input)?;
        let selector = match self.to {
            Some(to) => FixedRecordType::new(to),
            None => config.record_type_selector(),
        };

        let registry = Arc::new(config.registry());
        let producer = RecordProducer::new(
            Arc::new(FileSink {
                path: self.output.clone(),
            }),
            registry.clone(),
        )
        .with_record_type(selector.clone());

        let consumer = RecordConsumer::new(
            registry,
            Arc::new(move |event: &str, record: Record| -> HandlerResult<()> {
                producer.process_record(event, record)
            }),
        )
        .with_message_type(config.default_message_type.clone());

        consumer.process(&self.event, &data, self.from.as_deref())?;
        let from = self.from.as_deref().unwrap_or(consumer.message_type());

        println!("Converted {} -> {}", self.input.display(), self.output.display());
        println!("  From: {from}");
        println!("  To:   {}", selector.media_type());
        Ok(())
    }
}
