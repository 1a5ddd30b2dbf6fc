#![warn(rust_2018_idioms)]

//! Conversion of legacy glyph-encoded Indic text to Unicode.
//!
//! Printing-era fonts such as Kruti Dev, Chanakya and the Nudi family of
//! Kannada fonts map keyboard keys to glyph shapes in visual order, not to
//! Unicode code points. Text extracted from documents set in these fonts
//! therefore needs rule-driven rewriting: resolving each legacy sequence to
//! its Unicode counterpart and then reordering the marks (short-i signs,
//! reph, subjoined consonants) that the fonts place on the wrong side of
//! their base consonant.
//!
//! The converters never fail: unmapped input passes through literally, so a
//! caller rendering extracted text always gets something to display.

/// Chunking of long inputs.
pub mod chunk;
pub mod convert;
/// Devanagari character classes.
pub mod devanagari;
/// Digit conversion utilities.
pub mod numerals;

pub use crate::convert::chanakya::chanakya_to_unicode;
pub use crate::convert::kannada::{kannada_ascii_to_unicode, kannada_digits_to_ascii};
pub use crate::convert::krutidev::kruti_dev_to_unicode;
pub use crate::convert::{convert_text, Converter};
