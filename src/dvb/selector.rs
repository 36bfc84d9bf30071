//! Encoding selector classification for raw text fields.
//!
//! The first byte of a DVB text field selects the character set of the
//! rest of the field. Bytes 0x20 and above are ordinary text in the
//! default charset; bytes below that index the selector table.

use byteorder::{BigEndian, ByteOrder};
use log::warn;

use super::types::error::{DvbTextError, Result};
use super::types::models::{ResolvedEncoding, Selector, DEFAULT_CHARSET};

/// Selector table per ETSI EN 300 468 annex A.2, one slot per selector
/// byte 0x00-0x1F.
const SELECTOR_TABLE: [Selector; 32] = [
    Selector::Reserved,                  // 0x00
    Selector::Fixed("ISO-8859-5"),       // 0x01
    Selector::Fixed("ISO-8859-6"),       // 0x02
    Selector::Fixed("ISO-8859-7"),       // 0x03
    Selector::Fixed("ISO-8859-8"),       // 0x04
    Selector::Fixed("ISO-8859-9"),       // 0x05
    Selector::Fixed("ISO-8859-10"),      // 0x06
    Selector::Fixed("ISO-8859-11"),      // 0x07
    Selector::Fixed("ISO-8859-12"),      // 0x08
    Selector::Fixed("ISO-8859-13"),      // 0x09
    Selector::Fixed("ISO-8859-14"),      // 0x0A
    Selector::Fixed("ISO-8859-15"),      // 0x0B
    Selector::Reserved,                  // 0x0C
    Selector::Reserved,                  // 0x0D
    Selector::Reserved,                  // 0x0E
    Selector::Reserved,                  // 0x0F
    Selector::Variable("ISO-8859-"),     // 0x10
    Selector::Fixed("ISO-10646/UCS2"),   // 0x11
    Selector::Fixed("KSC_5601"),         // 0x12
    Selector::Fixed("GB_2312-80"),       // 0x13
    Selector::Fixed("BIG5"),             // 0x14
    Selector::Fixed("ISO-10646/UTF8"),   // 0x15
    Selector::Reserved,                  // 0x16
    Selector::Reserved,                  // 0x17
    Selector::Reserved,                  // 0x18
    Selector::Reserved,                  // 0x19
    Selector::Reserved,                  // 0x1A
    Selector::Reserved,                  // 0x1B
    Selector::Reserved,                  // 0x1C
    Selector::Reserved,                  // 0x1D
    Selector::Reserved,                  // 0x1E
    Selector::Compressed("ISO-10646/UTF8"), // 0x1F
];

/// Classify the leading bytes of a raw text field.
///
/// Returns the charset name of the field's content and the offset where
/// that content starts. Resolution depends only on the first up-to-three
/// bytes; repeated calls with the same input give the same answer.
///
/// Selector 0x1F marks huffman-compressed text, but the range check below
/// stops one short of it, so a 0x1F field classifies as default-charset
/// content at offset 0. [`TextPipeline`](crate::TextPipeline) recognizes
/// compressed fields from the raw byte instead; keep the two in sync.
///
/// # Errors
/// - [`DvbTextError::InvalidInput`] for an empty field, or a table-index
///   selector without its two index bytes.
/// - [`DvbTextError::UnsupportedEncoding`] for a reserved selector byte.
pub fn resolve(raw: &[u8]) -> Result<ResolvedEncoding> {
    let b0 = *raw.first().ok_or(DvbTextError::InvalidInput)?;

    if b0 < 0x1F {
        return match SELECTOR_TABLE[b0 as usize] {
            Selector::Reserved => {
                warn!("reserved encoding: {:#04x}", b0);
                Err(DvbTextError::UnsupportedEncoding(b0))
            }
            Selector::Fixed(name) => Ok(ResolvedEncoding {
                charset: name.into(),
                offset: 1,
            }),
            Selector::Variable(prefix) => {
                if raw.len() < 3 {
                    return Err(DvbTextError::InvalidInput);
                }
                let idx = BigEndian::read_u16(&raw[1..3]);
                Ok(ResolvedEncoding {
                    charset: format!("{prefix}{idx}").into(),
                    offset: 3,
                })
            }
            Selector::Compressed(name) => Ok(ResolvedEncoding {
                charset: name.into(),
                offset: 0,
            }),
        };
    }

    Ok(ResolvedEncoding {
        charset: DEFAULT_CHARSET.into(),
        offset: 0,
    })
}
