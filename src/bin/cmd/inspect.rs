// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Inspect command - decode a payload and list its fields.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Args;
use recordmsg::message::Result as HandlerResult;
use recordmsg::{AdapterConfig, MessageHandler, Record, RecordConsumer};

use crate::common::{describe_value, read_input, Result, DEFAULT_EVENT};

/// Decode a payload and list its fields.
#[derive(Args, Clone, Debug)]
pub struct InspectArgs {
    /// Input file (`-` for stdin)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Media type of the input [default: default_message_type from config]
    #[arg(short = 't', long = "type", value_name = "MEDIA_TYPE")]
    media_type: Option<String>,

    /// Event identifier passed to the consumer
    #[arg(short, long, default_value = DEFAULT_EVENT)]
    event: String,
}

impl InspectArgs {
    pub fn run(self, config: &AdapterConfig) -> Result<()> {
        let data = read_input(&self.input)?;

        let decoded = Arc::new(Mutex::new(None));
        let slot = decoded.clone();
        let consumer = RecordConsumer::new(
            Arc::new(config.registry()),
            Arc::new(move |_: &str, record: Record| -> HandlerResult<()> {
                if let Ok(mut slot) = slot.lock() {
                    *slot = Some(record);
                }
                Ok(())
            }),
        )
        .with_message_type(config.default_message_type.clone());

        consumer.process(&self.event, &data, self.media_type.as_deref())?;
        let media_type = self
            .media_type
            .as_deref()
            .unwrap_or(consumer.message_type());

        let record = decoded
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .unwrap_or_default();

        println!("Event:      {}", self.event);
        println!("Media type: {media_type}");
        println!("Fields:     {}", record.len());
        for (name, value) in &record {
            println!(
                "  {name}: {} = {}",
                value.type_name(),
                describe_value(value)
            );
        }
        Ok(())
    }
}
