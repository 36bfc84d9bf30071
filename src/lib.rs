//! # dvb-text
//!
//! Decodes text fields from DVB service-information tables (SDT, EIT and
//! friends) into XML-entity-safe UTF-8.
//!
//! A DVB text field starts with an optional selector byte naming the
//! character set of the bytes that follow; fields without a selector fall
//! back to the legacy broadcast default. [`TextPipeline`] classifies the
//! field, transcodes it to UTF-8 and escapes the result for embedding in
//! XML content.
pub mod dvb;

// Re-export the main types for convenience
pub use dvb::{
    codec::charset::{CachingConverter, ConversionEngine, Converter, EncodingRsEngine},
    codec::xml::escape,
    huffman::{HuffmanDecoder, NoHuffmanTables},
    pipeline::TextPipeline,
    selector::resolve,
    types::error::{DvbTextError, Result},
    types::models::{ResolvedEncoding, Selector, DEFAULT_CHARSET, MAX_FIELD_LEN},
};
