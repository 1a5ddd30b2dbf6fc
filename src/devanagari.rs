//! Devanagari character classes.
//!
//! Membership tests used by the reordering passes to decide where a
//! repositioned mark may legally be inserted.

/// U+094D DEVANAGARI SIGN VIRAMA (halant).
pub const VIRAMA: char = '\u{094D}';
/// U+0930 DEVANAGARI LETTER RA.
pub const RA: char = '\u{0930}';
/// U+0902 DEVANAGARI SIGN ANUSVARA.
pub const ANUSVARA: char = '\u{0902}';
/// U+093F DEVANAGARI VOWEL SIGN I.
pub const VOWEL_SIGN_I: char = '\u{093F}';

/// Dependent vowel signs (matras).
pub fn matra(ch: char) -> bool {
    match ch {
        '\u{093E}' => true, // Aa
        '\u{093F}' => true, // I
        '\u{0940}' => true, // Ii
        '\u{0941}' => true, // U
        '\u{0942}' => true, // Uu
        '\u{0943}' => true, // Vocalic R
        '\u{0945}' => true, // Candra E
        '\u{0947}' => true, // E
        '\u{0948}' => true, // Ai
        '\u{094B}' => true, // O
        '\u{094C}' => true, // Au
        _ => false,
    }
}

/// Independent vowels that can carry a trailing reph mark in legacy text.
pub fn vowel(ch: char) -> bool {
    match ch {
        '\u{0905}' => true, // A
        '\u{0906}' => true, // Aa
        '\u{0907}' => true, // I
        '\u{0908}' => true, // Ii
        '\u{0909}' => true, // U
        '\u{090A}' => true, // Uu
        '\u{090F}' => true, // E
        '\u{0910}' => true, // Ai
        '\u{0913}' => true, // O
        '\u{0914}' => true, // Au
        _ => false,
    }
}

/// Anusvara and candrabindu.
pub fn bindu(ch: char) -> bool {
    match ch {
        '\u{0901}' => true, // Candrabindu
        '\u{0902}' => true, // Anusvara
        _ => false,
    }
}

/// Characters that belong to the tail of a consonant cluster.
///
/// A reph attaches before the cluster these marks close; the repositioning
/// walk steps backward over them. The ASCII colon stands in for the visarga
/// in legacy text.
pub fn cluster_tail(ch: char) -> bool {
    matra(ch) || vowel(ch) || bindu(ch) || ch == ':'
}
