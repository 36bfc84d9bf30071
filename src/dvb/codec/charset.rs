//! Charset-to-UTF-8 conversion with converter caching.

use encoding_rs::{Encoding, UTF_16BE, UTF_8, WINDOWS_1252};
use log::debug;

use crate::dvb::types::error::{DvbTextError, Result};

/// Boundary to the underlying conversion facility.
///
/// `open` builds a converter that transcodes one source charset into
/// UTF-8. Opening is the expensive step, so [`CachingConverter`] holds on
/// to the result until the requested charset changes.
pub trait ConversionEngine {
    /// Open a converter for the named source charset.
    ///
    /// # Errors
    /// [`DvbTextError::UnsupportedCharset`] if the engine has no converter
    /// for this name.
    fn open(&mut self, charset: &str) -> Result<Box<dyn Converter>>;
}

/// A ready-to-use transcoder from one source charset into UTF-8.
pub trait Converter {
    /// Transcode `input` into UTF-8.
    ///
    /// # Errors
    /// [`DvbTextError::ConversionFailure`] if `input` is not valid text in
    /// the converter's source charset.
    fn convert(&mut self, input: &[u8]) -> Result<String>;
}

/// Default engine backed by `encoding_rs`.
///
/// DVB names the ISO-10646 charsets with its own labels, so those are
/// aliased before the WHATWG label lookup. Everything the selector table
/// can produce except `ISO-8859-12` (which no registry defines) resolves.
#[derive(Debug, Default)]
pub struct EncodingRsEngine;

impl EncodingRsEngine {
    fn lookup(charset: &str) -> Option<&'static Encoding> {
        match charset {
            // Stations transmit Latin-1 where the tables say ISO 6937.
            "ISO6937" => Some(WINDOWS_1252),
            // SI tables carry UCS-2 big-endian.
            "ISO-10646/UCS2" => Some(UTF_16BE),
            "ISO-10646/UTF8" => Some(UTF_8),
            _ => Encoding::for_label(charset.as_bytes()),
        }
    }
}

impl ConversionEngine for EncodingRsEngine {
    fn open(&mut self, charset: &str) -> Result<Box<dyn Converter>> {
        let encoding = Self::lookup(charset)
            .ok_or_else(|| DvbTextError::UnsupportedCharset(charset.to_string()))?;
        Ok(Box::new(EncodingRsConverter { encoding }))
    }
}

struct EncodingRsConverter {
    encoding: &'static Encoding,
}

impl Converter for EncodingRsConverter {
    fn convert(&mut self, input: &[u8]) -> Result<String> {
        let (text, had_errors) = self.encoding.decode_without_bom_handling(input);
        if had_errors {
            return Err(DvbTextError::ConversionFailure {
                charset: self.encoding.name().to_string(),
            });
        }
        Ok(text.into_owned())
    }
}

/// Caches the converter opened for the previous conversion.
///
/// Consecutive fields in a table almost always share a charset, so the
/// converter is torn down and reopened only when the requested name
/// differs from the cached one. The cache is updated only after a
/// successful open; a failed open leaves it empty and the next call
/// starts clean.
pub struct CachingConverter<E: ConversionEngine> {
    engine: E,
    charset: Option<String>,
    converter: Option<Box<dyn Converter>>,
}

impl<E: ConversionEngine> CachingConverter<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            charset: None,
            converter: None,
        }
    }

    /// Transcode `input` from `charset` into UTF-8, reusing the cached
    /// converter when the charset matches the previous call.
    pub fn convert(&mut self, charset: &str, input: &[u8]) -> Result<String> {
        if self.charset.as_deref() != Some(charset) {
            self.converter = None;
            self.charset = None;
            self.converter = Some(self.engine.open(charset)?);
            self.charset = Some(charset.to_string());
            debug!("opened converter for charset {}", charset);
        }
        let converter = self
            .converter
            .as_mut()
            .ok_or_else(|| DvbTextError::UnsupportedCharset(charset.to_string()))?;
        converter.convert(input)
    }
}
