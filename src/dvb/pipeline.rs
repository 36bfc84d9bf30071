//! The field conversion pipeline: classify, transcode, escape.

use log::warn;

use super::codec::charset::{CachingConverter, ConversionEngine, EncodingRsEngine};
use super::codec::xml;
use super::huffman::{HuffmanDecoder, NoHuffmanTables};
use super::selector;
use super::types::error::{DvbTextError, Result};
use super::types::models::{COMPRESSED_SELECTOR, MAX_FIELD_LEN, MAX_UTF8_LEN};

/// Converts raw SI text fields into XML-safe UTF-8.
///
/// One pipeline holds the converter cache for one caller; it is not
/// shared. For concurrent decoding, give each thread its own pipeline.
pub struct TextPipeline<E: ConversionEngine = EncodingRsEngine, D: HuffmanDecoder = NoHuffmanTables>
{
    converter: CachingConverter<E>,
    huffman: D,
}

impl TextPipeline {
    /// Pipeline with the `encoding_rs` engine and no huffman tables.
    pub fn new() -> Self {
        Self::with_parts(EncodingRsEngine, NoHuffmanTables)
    }
}

impl Default for TextPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ConversionEngine, D: HuffmanDecoder> TextPipeline<E, D> {
    /// Pipeline over a caller-supplied engine and huffman decoder.
    pub fn with_parts(engine: E, huffman: D) -> Self {
        Self {
            converter: CachingConverter::new(engine),
            huffman,
        }
    }

    /// Convert one raw text field into escaped UTF-8.
    ///
    /// Classifies the leading bytes, transcodes the content to UTF-8 and
    /// escapes XML entities. Huffman-compressed fields (leading byte 0x1F)
    /// go through the decoder instead of the charset converter; note the
    /// field is handed over unadvanced, selector byte included, because
    /// classification has already routed 0x1F down the default-charset
    /// path (see [`selector::resolve`]).
    ///
    /// # Errors
    /// Any [`DvbTextError`]; all are per-field and recoverable. Use
    /// [`convert_lossy`](Self::convert_lossy) to degrade bad fields to
    /// empty strings instead.
    pub fn convert(&mut self, field: &[u8]) -> Result<String> {
        if field.len() > MAX_FIELD_LEN {
            return Err(DvbTextError::FieldTooLong {
                len: field.len(),
                max: MAX_FIELD_LEN,
            });
        }
        let resolved = selector::resolve(field)?;

        let utf8 = if field[0] == COMPRESSED_SELECTOR {
            self.huffman.decompress(field)
        } else {
            self.converter
                .convert(&resolved.charset, &field[resolved.offset..])?
        };
        if utf8.len() > MAX_UTF8_LEN {
            return Err(DvbTextError::BufferTooSmall {
                needed: utf8.len(),
                capacity: MAX_UTF8_LEN,
            });
        }

        Ok(xml::escape(&utf8).into_owned())
    }

    /// Convert a field, degrading any failure to an empty string.
    ///
    /// A bad field must not abort a whole table scan; the failure is
    /// logged and the field comes back empty.
    pub fn convert_lossy(&mut self, field: &[u8]) -> String {
        match self.convert(field) {
            Ok(text) => text,
            Err(e) => {
                warn!("dropping text field: {}", e);
                String::new()
            }
        }
    }
}
