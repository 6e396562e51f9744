// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Message processing errors and the normalisation applied at every
//! collaborator boundary.
//!
//! [`MessageError`] is the error family recognized by handlers. Anything
//! else that fails while resolving codecs, parsing or building is folded
//! into it by one of three helpers:
//!
//! - [`wrap_internal`] - always wraps, code [`ErrorCode::Internal`]
//! - [`normalize`] - passes a `MessageError` through unchanged, wraps the rest
//! - [`rewrap_codec`] - wraps a [`CodecError`], keeping its code

use std::error::Error as StdError;
use std::fmt;
use std::io;

use thiserror::Error;

use crate::core::{CodecError, ErrorCode};

/// Boxed error used as the cause of a [`MessageError`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Broad category of a message error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageErrorKind {
    /// The caller passed an invalid event, message or record
    Argument,
    /// Processing failed at runtime
    Runtime,
}

impl fmt::Display for MessageErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageErrorKind::Argument => write!(f, "argument"),
            MessageErrorKind::Runtime => write!(f, "runtime"),
        }
    }
}

/// Error returned by message and record handlers.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct MessageError {
    kind: MessageErrorKind,
    code: ErrorCode,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl MessageError {
    /// Create an argument error.
    pub fn argument(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            kind: MessageErrorKind::Argument,
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a runtime error.
    pub fn runtime(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            kind: MessageErrorKind::Runtime,
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a runtime error classified as internal.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::runtime(ErrorCode::Internal, message)
    }

    /// Attach the underlying cause.
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> MessageErrorKind {
        self.kind
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_argument(&self) -> bool {
        self.kind == MessageErrorKind::Argument
    }

    pub fn is_internal(&self) -> bool {
        self.kind == MessageErrorKind::Runtime && self.code == ErrorCode::Internal
    }

    /// Downcast the attached cause, if any.
    pub fn cause_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.as_deref().and_then(|e| e.downcast_ref::<E>())
    }
}

/// Name of the error families known to this crate.
fn known_kind_name(error: &(dyn StdError + 'static)) -> Option<String> {
    if let Some(codec) = error.downcast_ref::<CodecError>() {
        return Some(codec.kind_name().to_string());
    }
    if let Some(message) = error.downcast_ref::<MessageError>() {
        return Some(format!("MessageError::{:?}", message.kind()));
    }
    if error.is::<io::Error>() {
        return Some("io::Error".to_string());
    }
    None
}

/// Kind of a type-erased error, taken from the head of its `Debug` output.
///
/// Errors whose `Debug` output does not start with a type-like name (boxed
/// strings, for one) are named by their `Display` text instead.
fn boxed_kind_name(error: &(dyn StdError + 'static)) -> String {
    if let Some(known) = known_kind_name(error) {
        return known;
    }
    let debug = format!("{error:?}");
    let head: String = debug
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == ':')
        .collect();
    if head.starts_with(|c: char| c.is_ascii_uppercase()) {
        head
    } else {
        format!("error ({error})")
    }
}

/// Wrap any error as an internal runtime error.
///
/// The resulting message reads `"{notice}: Caught {kind}"` and the original
/// error is kept as the source.
pub fn wrap_internal<E>(notice: &str, error: E) -> MessageError
where
    E: StdError + Send + Sync + 'static,
{
    let kind =
        known_kind_name(&error).unwrap_or_else(|| std::any::type_name::<E>().to_string());
    MessageError::internal(format!("{notice}: Caught {kind}")).with_source(error)
}

/// Return a recognized [`MessageError`] unchanged, wrap anything else.
pub fn normalize(notice: &str, error: BoxError) -> MessageError {
    match error.downcast::<MessageError>() {
        Ok(recognized) => *recognized,
        Err(other) => {
            let kind = boxed_kind_name(&*other);
            MessageError::internal(format!("{notice}: Caught {kind}")).with_source(other)
        }
    }
}

/// Rewrap a codec error as a runtime message error, keeping its code.
pub fn rewrap_codec(notice: &str, error: CodecError) -> MessageError {
    let code = error.code();
    let message = format!("{notice}: Caught {}", error.kind_name());
    MessageError::runtime(code, message).with_source(error)
}
