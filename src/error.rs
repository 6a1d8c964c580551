use crate::id::TagId;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while encoding or decoding tags.
///
/// All failures are reported through return values. A failed decode never leaves a partially
/// built tag behind: whatever was constructed before the failure is dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Fewer bytes were available than a length, a varint, or a fixed-width value required.
    #[error("expected {expected} bytes, but got {actual} on step [{step}]")]
    TruncatedInput {
        step: &'static str,
        actual: usize,
        expected: usize,
    },
    /// A varint would not fit in 64 bits.
    #[error("ILInt value overflows 64 bits")]
    Overflow,
    /// A varint was not written with the shortest possible encoding.
    #[error("ILInt {value} used {actual} bytes, but its shortest encoding is {expected} bytes")]
    NonCanonicalEncoding {
        value: u64,
        expected: usize,
        actual: usize,
    },
    /// Strict decoding met an id the factory doesn't know, or an implicit id with no known width.
    #[error("unknown tag id {0}")]
    UnknownTagId(TagId),
    /// A value did not consume exactly the number of bytes declared for it.
    #[error("tag {id}: expected a value of {expected} bytes, got {actual}")]
    ValueSizeMismatch {
        id: TagId,
        expected: u64,
        actual: u64,
    },
    /// The value had the right size but its content is illegal for the tag type.
    #[error("tag {id}: invalid value ({reason})")]
    InvalidValue { id: TagId, reason: String },
    /// The caller passed inconsistent parameters.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Containers were nested deeper than the factory allows.
    #[error("nesting depth limit of {0} exceeded")]
    DepthLimit(usize),
    /// A container with a maximum entry count refused another entry.
    #[error("list is full (maximum of {max} entries)")]
    ListFull { max: u64 },
}

impl Error {
    pub(crate) fn truncated(step: &'static str, actual: usize, expected: usize) -> Self {
        Error::TruncatedInput {
            step,
            actual,
            expected,
        }
    }

    pub(crate) fn invalid_value(id: TagId, reason: impl Into<String>) -> Self {
        Error::InvalidValue {
            id,
            reason: reason.into(),
        }
    }
}
