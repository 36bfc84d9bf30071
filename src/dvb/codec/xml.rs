//! XML entity escaping of converted text.

use std::borrow::Cow;
use log::error;

/// Escape the XML-significant characters in `text`.
///
/// `"`, `&`, `<` and `>` become their named entities; everything else is
/// copied through unchanged. These four are single-byte sequences in UTF-8
/// and every byte of a multi-byte sequence has its high bit set, so a
/// plain left-to-right byte scan can never fire inside a multi-byte
/// character.
///
/// Control codes that XML 1.0 forbids (0x00-0x08, 0x0B-0x1F, 0x7F) are
/// reported and copied through unchanged; stripping them is left to the
/// consumer.
///
/// Escaping is not idempotent: escaping already-escaped text doubles the
/// `&amp;`s, so escape each field exactly once.
pub fn escape(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let mut escaped: Option<String> = None;
    let mut copied = 0;

    for (i, &b) in bytes.iter().enumerate() {
        let entity = match b {
            b'"' => "&quot;",
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            0x00..=0x08 | 0x0B..=0x1F | 0x7F => {
                error!("forbidden char: {:#04x}", b);
                continue;
            }
            _ => continue,
        };
        let out = escaped
            .get_or_insert_with(|| String::with_capacity(bytes.len() + entity.len()));
        out.push_str(&text[copied..i]);
        out.push_str(entity);
        copied = i + 1;
    }

    match escaped {
        Some(mut out) => {
            out.push_str(&text[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}
