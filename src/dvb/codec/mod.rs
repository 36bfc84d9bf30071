//! Codec layer for charset conversion and XML escaping.
//!
//! Pure data transforms, no I/O: the field has already been classified by
//! [`selector`](super::selector) when these run.
//!
//! # Submodules
//!
//! - [`charset`][]: charset-to-UTF-8 conversion with converter caching
//! - [`xml`][]: XML entity escaping of converted text

pub mod charset;
pub mod xml;
