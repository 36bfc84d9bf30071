//! Custom error types for the dvb-text crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant is recoverable: a bad field degrades to an empty string
/// while the rest of a table scan keeps going. In particular, a charset the
/// conversion engine does not know is a per-field data-quality problem, not
/// a process-level fault.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DvbTextError {
    /// The text field is empty, or too short for its encoding selector
    /// (e.g. a table-index selector without its two index bytes).
    #[error("Text field is empty or truncated")]
    InvalidInput,

    /// The text field exceeds the maximum field length carried in SI tables.
    #[error("Text field of {len} bytes exceeds the {max}-byte limit")]
    FieldTooLong { len: usize, max: usize },

    /// The leading byte names a reserved encoding selector.
    #[error("Reserved encoding selector: {0:#04x}")]
    UnsupportedEncoding(u8),

    /// The conversion engine has no converter for the resolved charset.
    #[error("No converter available for charset {0:?}")]
    UnsupportedCharset(String),

    /// The field's bytes are not valid text in its declared charset.
    #[error("Field is not valid {charset} text")]
    ConversionFailure { charset: String },

    /// Converted output exceeds the documented expansion bound.
    #[error("Converted text of {needed} bytes exceeds the {capacity}-byte output bound")]
    BufferTooSmall { needed: usize, capacity: usize },
}

/// A convenience `Result` type alias using the crate's `DvbTextError` type.
pub type Result<T> = std::result::Result<T, DvbTextError>;
