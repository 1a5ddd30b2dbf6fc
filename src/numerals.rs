//! ASCII to native digit conversion for Indic scripts.

/// Scripts with a decimal digit block this module can target.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NumeralScript {
    Devanagari,
    Gujarati,
    Gurmukhi,
    Bengali,
}

impl NumeralScript {
    /// Code point of the script's zero digit.
    fn zero(self) -> u32 {
        match self {
            NumeralScript::Devanagari => 0x0966,
            NumeralScript::Gujarati => 0x0AE6,
            NumeralScript::Gurmukhi => 0x0A66,
            NumeralScript::Bengali => 0x09E6,
        }
    }
}

/// Replaces ASCII digits in `text` with the script's native digits.
pub fn to_native_digits(text: &str, script: NumeralScript) -> String {
    let zero = script.zero();
    text.chars()
        .map(|ch| match ch {
            '0'..='9' => {
                let n = ch as u32 - '0' as u32;
                char::from_u32(zero + n).unwrap_or(ch)
            }
            _ => ch,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devanagari() {
        assert_eq!(to_native_digits("1947", NumeralScript::Devanagari), "१९४७");
    }

    #[test]
    fn test_bengali() {
        assert_eq!(to_native_digits("05", NumeralScript::Bengali), "০৫");
    }

    #[test]
    fn test_gurmukhi_and_gujarati() {
        assert_eq!(to_native_digits("2", NumeralScript::Gurmukhi), "੨");
        assert_eq!(to_native_digits("2", NumeralScript::Gujarati), "૨");
    }

    #[test]
    fn test_non_digits_untouched() {
        assert_eq!(
            to_native_digits("पृष्ठ 12", NumeralScript::Devanagari),
            "पृष्ठ १२"
        );
    }
}
