//! Conversion of Kruti Dev encoded text to Unicode Devanagari.
//!
//! Kruti Dev assigns keyboard keys to glyph shapes in visual order. The rule
//! table resolves each legacy sequence to Unicode; the passes that follow fix
//! what a table cannot express: glyphs whose Unicode position depends on the
//! character after them. The short-i sign renders before its consonant but
//! encodes after it, and the reph renders at the end of a consonant cluster
//! but encodes as RA + virama before it.

use lazy_static::lazy_static;

use crate::chunk;
use crate::convert::rules::{expand_glyph, RuleTable};
use crate::devanagari::{self, ANUSVARA, RA, VIRAMA, VOWEL_SIGN_I};

/// Placeholder carrying the reph mark between passes; resolved last.
const REPH: char = 'Z';
/// Placeholder for the pre-base short-i glyph.
const PRE_I: char = 'f';
/// Legacy key for the anusvara, paired with `PRE_I` by the combined glyphs.
const ANUSVARA_KEY: char = 'a';

/// Spelling variants folded into canonical legacy spelling before the main
/// table runs. Order matters: declaration order is preserved from the source
/// font's table.
#[rustfmt::skip]
static NORMALIZE: &[(&str, &str)] = &[
    ("Q+Z", "QZ+"),
    ("sas", "sa"),
    ("aa",  "a"),
    (")Z",  "र्द्ध"),
    ("ZZ",  "Z"),
    ("=kk", "=k"),
    ("f=k", "f="),
];

/// The main table, in the font's declaration order. Longer patterns are
/// listed (and matched) before shorter overlapping ones. Duplicate patterns
/// keep their first entry.
#[rustfmt::skip]
static RULES: &[(&str, &str)] = &[
    ("ñ", "॰"),
    ("‘", "\""), ("’", "\""), ("“", "'"), ("”", "'"),

    // Digits.
    ("å", "०"), ("ƒ", "१"), ("„", "२"), ("…", "३"), ("†", "४"),
    ("‡", "५"), ("ˆ", "६"), ("‰", "७"), ("Š", "८"), ("‹", "९"),

    // One-key nukta letters.
    ("¶+", "फ़्"), ("d+", "क़"), ("[+k", "ख़"), ("[+", "ख़्"), ("x+", "ग़"),
    ("T+", "ज़्"), ("t+", "ज़"), ("M+", "ड़"), ("<+", "ढ़"), ("Q+", "फ़"),
    (";+", "य़"), ("j+", "ऱ"), ("u+", "ऩ"),

    ("Ùk", "त्त"), ("Ù", "त्त्"), ("ä", "क्त"), ("–", "दृ"), ("—", "कृ"),
    ("é", "न्न"), ("™", "न्न्"),

    ("à", "ह्न"), ("á", "ह्य"), ("â", "हृ"), ("ã", "ह्म"), ("ºz", "ह्र"),
    ("º", "ह्"), ("í", "द्द"), ("{k", "क्ष"), ("{", "क्ष्"), ("=", "त्र"),
    ("«", "त्र्"),
    ("Nî", "छ्य"), ("Vî", "ट्य"), ("Bî", "ठ्य"), ("Mî", "ड्य"), ("<î", "ढ्य"),
    ("|", "द्य"), ("K", "ज्ञ"), ("}", "द्व"),
    ("J", "श्र"), ("Vª", "ट्र"), ("Mª", "ड्र"), ("<ªª", "ढ्र"), ("Nª", "छ्र"),
    ("Ø", "क्र"), ("Ý", "फ्र"), ("nzZ", "र्द्र"), ("æ", "द्र"), ("ç", "प्र"),
    ("Á", "प्र"), ("xz", "ग्र"), ("#", "रु"), (":", "रू"),

    // Independent vowels.
    ("v‚", "ऑ"), ("vks", "ओ"), ("vkS", "औ"), ("vk", "आ"), ("v", "अ"),
    ("b±", "ईं"), ("Ã", "ई"), ("bZ", "ई"), ("b", "इ"), ("m", "उ"),
    ("Å", "ऊ"), (",s", "ऐ"), (",", "ए"), ("_", "ऋ"),

    // Consonants: full form, form with trailing Aa key, half form.
    ("ô", "क्क"), ("d", "क"), ("Dk", "क"), ("D", "क्"), ("£", "ख"),
    ("[k", "ख"), ("[", "ख्"), ("x", "ग"), ("Xk", "ग"), ("X", "ग्"),
    ("Ä", "घ"), ("?k", "घ"), ("?", "घ्"), ("³", "ङ"),
    ("p", "च"), ("Pk", "च"), ("P", "च्"), ("N", "छ"), ("t", "ज"),
    ("Tk", "ज"), ("T", "ज्"), (">", "झ"), ("÷", "झ्"), ("¥", "ञ"),

    ("ê", "ट्ट"), ("ë", "ट्ठ"), ("V", "ट"), ("B", "ठ"), ("ì", "ड्ड"),
    ("ï", "ड्ढ"), ("M+", "ड़"), ("<+", "ढ़"), ("M", "ड"), ("<", "ढ"),
    (".k", "ण"), (".", "ण्"),
    ("r", "त"), ("Rk", "त"), ("R", "त्"), ("Fk", "थ"), ("F", "थ्"),
    (")", "द्ध"), ("n", "द"), ("/k", "ध"), ("èk", "ध"), ("/", "ध्"),
    ("Ë", "ध्"), ("è", "ध्"), ("u", "न"), ("Uk", "न"), ("U", "न्"),

    ("i", "प"), ("Ik", "प"), ("I", "प्"), ("Q", "फ"), ("¶", "फ्"),
    ("c", "ब"), ("Ck", "ब"), ("C", "ब्"), ("Hk", "भ"), ("H", "भ्"),
    ("e", "म"), ("Ek", "म"), ("E", "म्"),
    (";", "य"), ("¸", "य्"), ("j", "र"), ("y", "ल"), ("Yk", "ल"),
    ("Y", "ल्"), ("G", "ळ"), ("o", "व"), ("Ok", "व"), ("O", "व्"),
    ("'k", "श"), ("'", "श्"), ("\"k", "ष"), ("\"", "ष्"), ("l", "स"),
    ("Lk", "स"), ("L", "स्"), ("g", "ह"),

    ("È", "ीं"), ("z", "्र"),
    ("Ì", "द्द"), ("Í", "ट्ट"), ("Î", "ट्ठ"), ("Ï", "ड्ड"), ("Ñ", "कृ"),
    ("Ò", "भ"), ("Ó", "्य"), ("Ô", "ड्ढ"), ("Ö", "झ्"), ("Ø", "क्र"),
    ("Ù", "त्त्"), ("Ük", "श"), ("Ü", "श्"),

    // Dependent vowel signs and marks.
    ("‚", "ॉ"), ("¨", "ो"), ("ks", "ो"), ("©", "ौ"), ("kS", "ौ"),
    ("k", "ा"), ("h", "ी"), ("q", "ु"), ("w", "ू"), ("`", "ृ"),
    ("s", "े"), ("¢", "े"), ("S", "ै"),
    ("a", "ं"), ("¡", "ँ"), ("%", "ः"), ("W", "ॅ"), ("•", "ऽ"),
    ("·", "ऽ"), ("∙", "ऽ"), ("~j", "्र"), ("~", "्"), ("\\", "?"),
    ("+", "़"),

    // Punctuation.
    ("^", "‘"), ("*", "’"), ("Þ", "“"), ("ß", "”"), ("(", ";"),
    ("¼", "("), ("½", ")"), ("¿", "{"), ("À", "}"), ("¾", "="),
    ("A", "।"), ("-", "."), ("&", "-"), ("&", "µ"), ("Œ", "॰"),
    ("]", ","), ("~ ", "् "), ("@", "/"),
];

/// Mark sequences the table emits in visual order.
#[rustfmt::skip]
static CLEANUP: &[(&str, &str)] = &[
    // Space + visarga comes from the colon key; the visarga itself is only
    // produced by the main table, so the rewrite runs after it.
    (" ः", ":"),
    ("ाे", "ो"),
    ("ाॅ", "ॉ"),
    ("ंै", "ैं"),
    ("े्र", "्रे"),
    ("अौ", "औ"),
    ("अो", "ओ"),
    ("आॅ", "ऑ"),
];

lazy_static! {
    static ref TABLE: RuleTable = RuleTable::new(NORMALIZE, RULES, CLEANUP);
}

/// Converts Kruti Dev encoded text to Unicode Devanagari.
///
/// Total: unmapped glyphs pass through literally and already-Unicode text it
/// does not recognize falls through unchanged.
pub fn kruti_dev_to_unicode(text: &str) -> String {
    kruti_dev_with_chunk_size(text, chunk::CHUNK_SIZE)
}

fn kruti_dev_with_chunk_size(text: &str, chunk_size: usize) -> String {
    // One-word fix carried over from the source converter.
    let text = if text == "/eZa %" { "/keZ%" } else { text };

    // PDF extraction artifacts: smart apostrophes stand for the sha key, and
    // a diaeresis over nothing comes out as space + combining mark.
    let text = text.replace('’', "'").replace(" \u{0308}", "¨");

    let mut out = String::with_capacity(text.len());
    for chunk in chunk::chunks(&text, chunk_size) {
        out.push_str(&convert_chunk(chunk));
    }
    out
}

fn convert_chunk(text: &str) -> String {
    let converted = TABLE.apply(text);
    let mut cs: Vec<char> = converted.chars().collect();

    // Combined reph + anusvara glyph.
    expand_glyph(&mut cs, '±', &[REPH, ANUSVARA]);

    // Short-i on a reph carrier, then every pre-base short-i moves forward.
    expand_glyph(&mut cs, 'Æ', &[RA, VIRAMA, PRE_I]);
    shift_vowel_i(&mut cs);

    // Combined short-i + anusvara glyphs need a two-position shift.
    expand_glyph(&mut cs, 'Ç', &[PRE_I, ANUSVARA_KEY]);
    expand_glyph(&mut cs, 'É', &[RA, VIRAMA, PRE_I, ANUSVARA_KEY]);
    shift_vowel_i_anusvara(&mut cs);

    // Long-ii on a reph carrier.
    expand_glyph(&mut cs, 'Ê', &['ी', REPH]);

    fix_misplaced_i(&mut cs);
    reposition_reph(&mut cs);

    cs.into_iter().collect()
}

/// Moves each pre-base short-i placeholder one position forward, turning it
/// into the dependent vowel sign. A trailing placeholder has nothing to jump
/// over and becomes the vowel sign in place.
fn shift_vowel_i(cs: &mut [char]) {
    let mut i = 0;
    while i < cs.len() {
        if cs[i] == PRE_I {
            if i + 1 < cs.len() {
                cs[i] = cs[i + 1];
                cs[i + 1] = VOWEL_SIGN_I;
            } else {
                cs[i] = VOWEL_SIGN_I;
            }
            i += 2;
        } else {
            i += 1;
        }
    }
}

/// Moves each `fa` placeholder pair two positions forward, turning it into
/// the short-i sign followed by anusvara.
fn shift_vowel_i_anusvara(cs: &mut [char]) {
    let mut i = 0;
    while i + 1 < cs.len() {
        if cs[i] == PRE_I && cs[i + 1] == ANUSVARA_KEY {
            if i + 2 < cs.len() {
                cs[i] = cs[i + 2];
                cs[i + 1] = VOWEL_SIGN_I;
                cs[i + 2] = ANUSVARA;
                i += 3;
            } else {
                cs[i] = VOWEL_SIGN_I;
                cs[i + 1] = ANUSVARA;
                break;
            }
        } else {
            i += 1;
        }
    }
}

/// The forward shifts can land a short-i sign on a half form. Move it past
/// the consonant that follows the virama.
fn fix_misplaced_i(cs: &mut [char]) {
    let mut i = 0;
    while i + 1 < cs.len() {
        if cs[i] == VOWEL_SIGN_I && cs[i + 1] == VIRAMA {
            if i + 2 < cs.len() {
                cs[i] = VIRAMA;
                cs[i + 1] = cs[i + 2];
                cs[i + 2] = VOWEL_SIGN_I;
            } else {
                cs.swap(i, i + 1);
            }
            i += 2;
        } else {
            i += 1;
        }
    }
}

/// Resolves each reph placeholder by walking backward to the start of the
/// consonant cluster it attaches to and splicing RA + virama there.
///
/// The walk first steps over the cluster's trailing marks (which stay with
/// the cluster), then over virama + consonant pairs of a conjunct. If the
/// walk runs off the front of the buffer, or the placeholder sits at
/// position 0, it resolves to RA + virama in place; the pass removes one
/// placeholder per iteration and always terminates.
fn reposition_reph(cs: &mut Vec<char>) {
    while let Some(rpos) = cs.iter().position(|&ch| ch == REPH) {
        let attach = (rpos > 0).then(|| cluster_start(cs, rpos)).flatten();
        match attach {
            Some(start) => {
                cs.remove(rpos);
                cs.splice(start..start, [RA, VIRAMA]);
            }
            None => {
                // Malformed input: no cluster to attach to.
                cs.splice(rpos..rpos + 1, [RA, VIRAMA]);
            }
        }
    }
}

fn cluster_start(cs: &[char], rpos: usize) -> Option<usize> {
    let mut p = rpos - 1;
    while devanagari::cluster_tail(cs[p]) {
        if p == 0 {
            return None;
        }
        p -= 1;
    }
    while p >= 2 && cs[p - 1] == VIRAMA {
        p -= 2;
    }
    Some(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod table {
        use super::*;

        #[test]
        fn test_common_words() {
            assert_eq!(kruti_dev_to_unicode("vkSj"), "और");
            assert_eq!(kruti_dev_to_unicode("fgUnh"), "हिन्दी");
            assert_eq!(kruti_dev_to_unicode("fdrkc"), "किताब");
        }

        #[test]
        fn test_empty() {
            assert_eq!(kruti_dev_to_unicode(""), "");
        }

        #[test]
        fn test_unmapped_passes_through() {
            assert_eq!(kruti_dev_to_unicode("0123456789"), "0123456789");
        }

        #[test]
        fn test_idempotent_on_unicode() {
            let once = kruti_dev_to_unicode("fdrkc vkSj /keZ");
            assert_eq!(kruti_dev_to_unicode(&once), once);
        }

        #[test]
        fn test_nukta_letters() {
            // Nukta letters come out in the table's precomposed forms.
            assert_eq!(kruti_dev_to_unicode("d+ye"), "\u{0958}लम");
            assert_eq!(kruti_dev_to_unicode("cM+k"), "ब\u{095C}ा");
        }

        #[test]
        fn test_visarga_after_space_is_colon() {
            // The colon key converts through ः, then joins its word.
            assert_eq!(kruti_dev_to_unicode("le; %"), "समय:");
        }

        #[test]
        fn test_normalize_spelling_variants() {
            // Doubled anusvara key collapses before the main table runs.
            assert_eq!(kruti_dev_to_unicode("gaa"), "हं");
        }
    }

    mod shifts {
        use super::*;

        #[test]
        fn test_vowel_i_moves_forward() {
            let mut cs: Vec<char> = vec![PRE_I, 'क'];
            shift_vowel_i(&mut cs);
            assert_eq!(cs, vec!['क', VOWEL_SIGN_I]);
        }

        #[test]
        fn test_trailing_vowel_i() {
            let mut cs: Vec<char> = vec!['क', PRE_I];
            shift_vowel_i(&mut cs);
            assert_eq!(cs, vec!['क', VOWEL_SIGN_I]);
        }

        #[test]
        fn test_i_anusvara_moves_two() {
            let mut cs: Vec<char> = vec![PRE_I, ANUSVARA_KEY, 'क'];
            shift_vowel_i_anusvara(&mut cs);
            assert_eq!(cs, vec!['क', VOWEL_SIGN_I, ANUSVARA]);
        }

        #[test]
        fn test_combined_i_glyph() {
            // Ç carries short-i + anusvara before its consonant.
            assert_eq!(kruti_dev_to_unicode("Çddj"), "किंकर");
        }

        #[test]
        fn test_misplaced_i_on_half_form() {
            let mut cs: Vec<char> = vec![VOWEL_SIGN_I, VIRAMA, 'क'];
            fix_misplaced_i(&mut cs);
            assert_eq!(cs, vec![VIRAMA, 'क', VOWEL_SIGN_I]);
        }
    }

    mod reph {
        use super::*;

        #[test]
        fn test_simple_reph() {
            assert_eq!(kruti_dev_to_unicode("/keZ"), "धर्म");
        }

        #[test]
        fn test_reph_skips_matra() {
            assert_eq!(kruti_dev_to_unicode("'kekZ"), "शर्मा");
        }

        #[test]
        fn test_reph_skips_conjunct() {
            // The walk steps over virama + consonant pairs of a conjunct.
            let mut cs: Vec<char> = vec!['क', VIRAMA, 'त', REPH];
            reposition_reph(&mut cs);
            assert_eq!(
                cs,
                vec![RA, VIRAMA, 'क', VIRAMA, 'त'],
            );
        }

        #[test]
        fn test_reph_at_start_terminates() {
            let mut cs: Vec<char> = vec![REPH, 'क'];
            reposition_reph(&mut cs);
            assert_eq!(cs, vec![RA, VIRAMA, 'क']);
        }

        #[test]
        fn test_reph_after_marks_only_terminates() {
            let mut cs: Vec<char> = vec!['ा', 'ं', REPH];
            reposition_reph(&mut cs);
            assert_eq!(cs, vec!['ा', 'ं', RA, VIRAMA]);
        }

        #[test]
        fn test_reph_anusvara_glyph() {
            // ± is the combined reph + anusvara mark.
            assert_eq!(kruti_dev_to_unicode("iw.kk±d"), "पूर्णांक");
        }
    }

    mod chunking {
        use super::*;

        #[test]
        fn test_chunk_size_does_not_change_output() {
            let text = "vkSj /keZ 'kekZ fdrkc vkSj /keZ";
            let full = kruti_dev_with_chunk_size(text, chunk::CHUNK_SIZE);
            // No word in the sample exceeds five characters.
            for size in [6, 9, 13] {
                assert_eq!(kruti_dev_with_chunk_size(text, size), full);
            }
        }
    }
}
