//! Boundary to the huffman decompressor for compressed text fields.

use log::warn;

/// Decodes a huffman-compressed text field straight into UTF-8.
///
/// The compression tables ship with the broadcaster platform, so the
/// implementation is supplied by the embedding application. The pipeline
/// trusts the returned string and does not transcode it again.
///
/// The field handed in is the raw, unadvanced field: the leading 0x1F
/// selector byte is still in place. Implementations that index their
/// tables from the byte after the selector must skip it themselves.
pub trait HuffmanDecoder {
    fn decompress(&self, field: &[u8]) -> String;
}

/// Stand-in for builds without huffman tables: every compressed field
/// decodes to the empty string.
#[derive(Debug, Default)]
pub struct NoHuffmanTables;

impl HuffmanDecoder for NoHuffmanTables {
    fn decompress(&self, field: &[u8]) -> String {
        warn!(
            "no huffman tables loaded, dropping {}-byte compressed field",
            field.len()
        );
        String::new()
    }
}
