//! Legacy font encoding converters and font name dispatch.

pub mod chanakya;
pub mod kannada;
pub mod krutidev;
mod rules;

pub use chanakya::chanakya_to_unicode;
pub use kannada::{kannada_ascii_to_unicode, kannada_digits_to_ascii};
pub use krutidev::kruti_dev_to_unicode;

/// Legacy encodings with a converter in this crate.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Converter {
    KrutiDev,
    Chanakya,
    KannadaAscii,
}

impl Converter {
    /// Picks a converter from a font name, if the name marks one of the
    /// known legacy encodings.
    pub fn from_font_name(font_name: &str) -> Option<Converter> {
        if font_name.contains("Kruti") {
            Some(Converter::KrutiDev)
        } else if font_name.contains("Chanakya") {
            Some(Converter::Chanakya)
        } else if font_name.contains("+TT") || font_name.contains("Nudi") {
            Some(Converter::KannadaAscii)
        } else {
            None
        }
    }

    /// Runs the converter over `text`.
    pub fn convert(self, text: &str) -> String {
        match self {
            Converter::KrutiDev => kruti_dev_to_unicode(text),
            Converter::Chanakya => chanakya_to_unicode(text),
            Converter::KannadaAscii => kannada_ascii_to_unicode(text),
        }
    }
}

/// Converts `text` according to the encoding its font name marks.
/// Text in an unrecognized font is returned unchanged.
pub fn convert_text(text: &str, font_name: &str) -> String {
    match Converter::from_font_name(font_name) {
        Some(converter) => {
            log::debug!("converting {:?} text from font {}", converter, font_name);
            converter.convert(text)
        }
        None => text.to_string(),
    }
}
