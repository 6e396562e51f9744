// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for recordmsg.
//!
//! Provides the error family raised by record codecs:
//! - Media type lookup
//! - Payload parsing
//! - Record building

use std::fmt;

/// Numeric classification shared by codec and message errors.
///
/// The code survives rewrapping, so a caller can still branch on the
/// original failure category after a codec error was turned into a
/// message error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No more specific classification available
    Unknown,
    /// A caller supplied an invalid argument
    InvalidArgument,
    /// No codec is registered for a media type
    UnknownMediaType,
    /// Input could not be decoded
    Malformed,
    /// A record could not be encoded
    Unencodable,
    /// Generic internal failure
    Internal,
}

impl ErrorCode {
    /// Numeric value of the code.
    pub fn as_u16(&self) -> u16 {
        match self {
            ErrorCode::Unknown => 0,
            ErrorCode::InvalidArgument => 400,
            ErrorCode::UnknownMediaType => 415,
            ErrorCode::Malformed => 422,
            ErrorCode::Unencodable => 406,
            ErrorCode::Internal => 500,
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "unknown",
            ErrorCode::InvalidArgument => "invalid_argument",
            ErrorCode::UnknownMediaType => "unknown_media_type",
            ErrorCode::Malformed => "malformed",
            ErrorCode::Unencodable => "unencodable",
            ErrorCode::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.as_u16())
    }
}

/// Errors that can occur inside a record codec.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// No parser or builder registered for the media type
    UnknownMediaType {
        /// Media type that was requested
        media_type: String,
    },

    /// Payload could not be parsed into a record
    Malformed {
        /// Codec context (e.g., "JSON")
        codec: String,
        /// Error message
        message: String,
    },

    /// Record could not be encoded
    Unencodable {
        /// Codec context (e.g., "JSON")
        codec: String,
        /// Field path that failed, if known
        field: Option<String>,
        /// Error message
        message: String,
    },

    /// Invalid argument passed to a codec
    InvalidArgument {
        /// Argument name
        argument: String,
        /// Why it was rejected
        reason: String,
    },

    /// Other error
    Other(String),
}

impl CodecError {
    /// Create an "unknown media type" error.
    pub fn unknown_media_type(media_type: impl Into<String>) -> Self {
        CodecError::UnknownMediaType {
            media_type: media_type.into(),
        }
    }

    /// Create a malformed input error.
    pub fn malformed(codec: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::Malformed {
            codec: codec.into(),
            message: message.into(),
        }
    }

    /// Create an unencodable record error.
    pub fn unencodable(codec: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::Unencodable {
            codec: codec.into(),
            field: None,
            message: message.into(),
        }
    }

    /// Create an unencodable record error for a specific field.
    pub fn unencodable_field(
        codec: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        CodecError::Unencodable {
            codec: codec.into(),
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Classification code carried over when this error is rewrapped.
    pub fn code(&self) -> ErrorCode {
        match self {
            CodecError::UnknownMediaType { .. } => ErrorCode::UnknownMediaType,
            CodecError::Malformed { .. } => ErrorCode::Malformed,
            CodecError::Unencodable { .. } => ErrorCode::Unencodable,
            CodecError::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            CodecError::Other(_) => ErrorCode::Unknown,
        }
    }

    /// Name of the error kind, used in wrapped error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            CodecError::UnknownMediaType { .. } => "CodecError::UnknownMediaType",
            CodecError::Malformed { .. } => "CodecError::Malformed",
            CodecError::Unencodable { .. } => "CodecError::Unencodable",
            CodecError::InvalidArgument { .. } => "CodecError::InvalidArgument",
            CodecError::Other(_) => "CodecError::Other",
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::UnknownMediaType { media_type } => {
                vec![("media_type", media_type.clone())]
            }
            CodecError::Malformed { codec, message } => {
                vec![("codec", codec.clone()), ("message", message.clone())]
            }
            CodecError::Unencodable {
                codec,
                field,
                message,
            } => {
                let mut fields = vec![("codec", codec.clone())];
                if let Some(field) = field {
                    fields.push(("field", field.clone()));
                }
                fields.push(("message", message.clone()));
                fields
            }
            CodecError::InvalidArgument { argument, reason } => {
                vec![("argument", argument.clone()), ("reason", reason.clone())]
            }
            CodecError::Other(msg) => vec![("message", msg.clone())],
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::UnknownMediaType { media_type } => {
                write!(f, "No codec registered for media type '{media_type}'")
            }
            CodecError::Malformed { codec, message } => {
                write!(f, "Malformed {codec} input: {message}")
            }
            CodecError::Unencodable {
                codec,
                field: Some(field),
                message,
            } => write!(f, "{codec} cannot encode field '{field}': {message}"),
            CodecError::Unencodable {
                codec,
                field: None,
                message,
            } => write!(f, "{codec} cannot encode record: {message}"),
            CodecError::InvalidArgument { argument, reason } => {
                write!(f, "Invalid argument '{argument}': {reason}")
            }
            CodecError::Other(msg) => write!(f, "Other error: {msg}"),
        }
    }
}

impl std::error::Error for CodecError {}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::Malformed {
            codec: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
