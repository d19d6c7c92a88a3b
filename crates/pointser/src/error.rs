//! Engine-wide error type.
//!
//! Three failure kinds reach callers: malformed input, an unknown format
//! identifier, and a decoded element that breaks the variant contract. Sink and
//! source failures are passed through as `Io`.

use thiserror::Error;

use crate::codec::Format;
use crate::model::PointKind;

/// Why a single custom-format line was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecordFault {
    #[error("blank line")]
    Blank,
    #[error("record must be wrapped in `(` and `)`")]
    Parens,
    #[error("missing `-` between tag and fields")]
    MissingSeparator,
    #[error("unknown tag `{0}`")]
    UnknownTag(String),
    #[error("tag `{kind}` takes {expected} fields, found {found}")]
    FieldCount {
        kind: PointKind,
        expected: usize,
        found: usize,
    },
    #[error("field `{0}` is not a 32-bit integer")]
    BadInteger(String),
}

#[derive(Debug, Error)]
pub enum CodecError {
    /// A line of the custom format violates the record grammar.
    #[error("malformed record on line {line} (`{record}`): {fault}")]
    MalformedRecord {
        line: usize,
        record: String,
        fault: RecordFault,
    },
    /// An opaque backend rejected the payload (truncated, corrupt, wrong shape).
    #[error("malformed {format} payload: {reason}")]
    MalformedPayload { format: Format, reason: String },
    #[error("unsupported format `{0}`")]
    UnsupportedFormat(String),
    /// A decoded element declares one variant but carries the fields of another.
    #[error("element {index} declared as {declared} {detail}")]
    TypeMismatch {
        index: usize,
        declared: PointKind,
        detail: &'static str,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a `CodecError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedRecord,
    UnsupportedFormat,
    TypeMismatch,
    Io,
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::MalformedRecord { .. } | CodecError::MalformedPayload { .. } => {
                ErrorKind::MalformedRecord
            }
            CodecError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            CodecError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            CodecError::Io(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn payload(format: Format, reason: impl std::fmt::Display) -> Self {
        CodecError::MalformedPayload {
            format,
            reason: reason.to_string(),
        }
    }
}
