//! Core data structures for DVB text decoding.

use std::borrow::Cow;

/// Maximum length of a raw text field as carried in SI tables.
pub const MAX_FIELD_LEN: usize = 1024;

/// Upper bound on converted output: UTF-8 needs up to 6 bytes per code
/// point of the legacy charsets.
pub const MAX_UTF8_LEN: usize = MAX_FIELD_LEN * 6;

/// Selector byte marking a huffman-compressed text field.
pub const COMPRESSED_SELECTOR: u8 = 0x1F;

/// Charset assumed when the field carries no selector byte.
///
/// The SI tables say ISO 6937, but many stations get it wrong and transmit
/// ISO-8859-1; the conversion engine accounts for that.
pub const DEFAULT_CHARSET: &str = "ISO6937";

/// One slot of the encoding selector table.
///
/// The selector byte at the start of a text field indexes this table to
/// name the charset of the bytes that follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Reserved by the SI specification; classification fails.
    Reserved,
    /// Content starts right after the selector byte, in the named charset.
    Fixed(&'static str),
    /// The two bytes after the selector form a big-endian table index that
    /// completes the charset name (prefix + index).
    Variable(&'static str),
    /// Huffman-compressed content; the nominal charset is attached but
    /// decoding is delegated to a [`HuffmanDecoder`](crate::HuffmanDecoder).
    Compressed(&'static str),
}

/// Result of classifying a text field's leading bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEncoding {
    /// Charset the content bytes are encoded in.
    pub charset: Cow<'static, str>,
    /// Byte offset where text content starts. Zero means the leading byte
    /// is itself content, not a selector.
    pub offset: usize,
}
