// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON record codec module.
//!
//! Provides JSON parsing and building support.

pub mod codec;

pub use codec::JsonCodec;
