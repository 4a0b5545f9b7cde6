//! Shared error type across skore crates.

use thiserror::Error;

use crate::protocol::value::ValueKind;

/// Caller-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Position outside the value log.
    IndexOutOfRange,
    /// Replacement value does not match the slot's type.
    TypeMismatch,
    /// Bad argument (zero amount, unparsable text, oversized string).
    InvalidArgument,
    /// Malformed packet bytes.
    Malformed,
    /// Unsupported script version.
    UnsupportedVersion,
    /// Internal failure.
    Internal,
}

impl ErrorCode {
    /// String representation used in diagnostics and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::IndexOutOfRange => "INDEX_OUT_OF_RANGE",
            ErrorCode::TypeMismatch => "TYPE_MISMATCH",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::Malformed => "MALFORMED",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SkoreError>;

/// Unified error type used by core and construct.
#[derive(Debug, Error)]
pub enum SkoreError {
    #[error("index {index} out of range for {len} values")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("type mismatch: slot holds {expected:?}, got {found:?}")]
    TypeMismatch { expected: ValueKind, found: ValueKind },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("malformed packet: {0}")]
    Malformed(String),
    #[error("unsupported script version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl SkoreError {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SkoreError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            SkoreError::TypeMismatch { .. } => ErrorCode::TypeMismatch,
            SkoreError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            SkoreError::Malformed(_) => ErrorCode::Malformed,
            SkoreError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            SkoreError::Internal(_) => ErrorCode::Internal,
        }
    }
}
