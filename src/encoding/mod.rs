// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Record codecs.
//!
//! - [`codec`] - Parser, builder and provider interfaces
//! - [`json`] - JSON record codec
//! - [`registry`] - Media type keyed codec registry

pub mod codec;
pub mod json;
pub mod registry;

pub use codec::{RecordBuilder, RecordCodecProvider, RecordParser};
pub use json::JsonCodec;
pub use registry::CodecRegistry;
