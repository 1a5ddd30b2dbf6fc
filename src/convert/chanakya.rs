//! Conversion of Chanakya encoded text to Unicode Devanagari.
//!
//! Chanakya is a close cousin of Kruti Dev with its own key layout. Its
//! reordering needs are shallower: the encoding cannot produce the deeply
//! nested conjuncts Kruti Dev can, so the post-table fixups each run as one
//! left-to-right scan instead of a walk to fixpoint. That single-pass
//! behavior is preserved from the source converter; it is unverified for
//! conjuncts nested deeper than two consonants.

use lazy_static::lazy_static;

use crate::chunk;
use crate::convert::rules::{expand_glyph, RuleTable};
use crate::devanagari::{ANUSVARA, RA, VIRAMA, VOWEL_SIGN_I};

/// Reph placeholder, resolved by the trailing passes.
const REPH: char = 'Z';
/// Pre-base short-i placeholder.
const PRE_I: char = 'f';
/// Pre-base short-i + anusvara placeholder.
const PRE_I_ANUSVARA: char = 'Ż';

#[rustfmt::skip]
static NORMALIZE: &[(&str, &str)] = &[
    ("Q+Z", "QZ+"),
    ("sas", "sa"),
    ("aa",  "a"),
    ("¼Z",  "र्द्ध"),
    ("ZZ",  "Z"),
    ("=kk", "=k"),
    ("f=k", "f="),
];

#[rustfmt::skip]
static RULES: &[(&str, &str)] = &[
    ("ñ", "॰"),

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
    ("º", "ह्"), ("í", "द्द"), ("{k", "क्ष"), ("{", "क्ष्"),
    ("f=", "त्रि"), ("=k", "त्र"), ("«", "त्र्"),
    ("Nî", "छ्य"), ("Vî", "ट्य"), ("Bî", "ठ्य"), ("Mî", "ड्य"), ("<î", "ढ्य"),
    ("|", "द्य"), ("K", "ज्ञ"), ("}", "द्व"), ("J", "श्र"),
    ("Vª", "ट्र"), ("Mª", "ड्र"), (">ª", "ढ्र"), ("Nª", "छ्र"), ("Ø", "क्र"),
    ("Ý", "फ्र"), ("nzZ", "र्द्र"), ("æ", "द्र"), ("ç", "प्र"), ("Á", "प्र"),
    ("xz", "ग्र"), ("#", "रु"), (":", "रू"),

    // Independent vowels.
    ("v‚", "ऑ"), ("vks", "ओ"), ("vkS", "औ"), ("vk", "आ"), ("v", "अ"),
    ("b±", "ईं"), ("Ã", "ई"), ("bZ", "ई"), ("b", "इ"), ("mQ", "ऊ"),
    ("m", "उ"), ("Å", "ऊ"), (",s", "ऐ"), (",", "ए"), ("½", "ऋ"),

    // Consonants.
    ("ô", "क्क"), ("d", "क"), ("Dk", "क"), ("D", "क्"), ("£", "र्f"),
    ("[k", "ख"), ("[", "ख्"), ("x", "ग"), ("Xk", "ग"), ("X", "ग्"),
    ("Ä", "घ"), ("?k", "घ"), ("?", "घ्"), ("³", "ङ"),
    ("p", "च"), ("Pk", "च"), ("P", "च्"), ("N", "छ"),
    ("”k", "ज"), ("”", "ज्"),
    ("t", "ज"), ("Tk", "ज"), ("T", "ज्"), (">", "झ"), ("÷", "झ्"),
    ("¥", "ञ"),
    ("ê", "ट्ट"), ("ë", "ट्ठ"), ("V", "ट"), ("B", "ठ"), ("ì", "ड्ड"),
    ("ï", "ड्ढ"), ("M", "ड"), ("<", "ढ"), (".k", "ण"), (".", "ण्"),
    ("r", "त"), ("Rk", "त"), ("R", "त्"), ("Fk", "थ"), ("F", "थ्"),
    ("n", "द"), ("/", "ध"), ("èk", "ध"), ("è", "ध्"), ("Ë  ", "ध्"),
    ("u", "न"), ("Uk", "न"), ("U", "न्"),
    ("iQ", "फ"), ("i", "प"), ("Ik", "प"), ("I", "प्"), ("¶", "फ्"),
    ("c", "ब"), ("Ck", "ब"), ("C", "ब्"), ("Hk", "भ"), ("H", "भ्"),
    ("e", "म"), ("Ek", "म"), ("E", "म्"),
    (";", "य"), ("¸", "य्"), ("j", "र"), ("y", "ल"), ("Yk", "ल"),
    ("Y", "ल्"), ("G", "ळ"), ("oQ", "क"), ("o", "व"), ("Ok", "व"),
    ("O", "व्"),
    ("'k", "श"), ("'", "श्"), ("Ük", "श"), ("Ü", "श्"),
    ("\"k", "ष"), ("\"", "ष्"), ("l", "स"), ("Lk", "स"), ("L", "स्"),
    ("g", "ह"),
    ("È", "ीं"), ("z", "्र"),
    ("Ì", "द्द"), ("Í", "ट्ट"), ("Î", "ट्ठ"), ("Ï", "ड्ड"), ("Ñ", "कृ"),
    ("Ò", "भ"), ("Ó", "्य"), ("Ô", "ड्ढ"), ("Ö", "झ्"), ("¼", "द्ध"),
    ("Ú", "फ्र"), ("É", "ह्न"),
    ("Ů", "त्त्"), ("Ľ", "द्ध"), ("˝", "ऋ"), ("Ř", "क्र"), ("Ń", "कृ"),
    ("Q", "फ़"), ("č", "ध्"), ("Ş", "्र"),

    // Dependent vowel signs and marks.
    ("‚", "ॉ"), ("¨", "ो"), ("ks", "ो"), ("©", "ौ"), ("kS", "ौ"),
    ("k", "ा"), ("h", "ी"), ("q", "ु"), ("w", "ू"), ("`", "ृ"),
    ("s", "े"), ("¢", "े"), ("S", "ै"), ("a", "ं"), ("¡", "ँ"),
    ("ˇ", "ँ"), ("%", "ः"), ("W", "ॅ"), ("•", "ऽ"), ("·", "ऽ"),
    ("∙", "ऽ"), ("+", "़"), ("\\", "?"),

    // Punctuation. The right double quote is the ja glyph above, so only
    // the left-side smart quotes fold to ASCII here.
    ("‘", "\""), ("’", "\""), ("“", "'"),
    ("^", "‘"), ("*", "’"), ("Þ", "“"), ("ß", "”"), ("¾", "="),
    ("&", "-"), ("μ", "-"), ("¿", "{"), ("À", "}"), ("A", "।"),
    ("Œ", "॰"), ("]", ","), ("@", "/"),
    ("~", "्"),
];

#[rustfmt::skip]
static CLEANUP: &[(&str, &str)] = &[
    // Space + visarga comes from the colon key; the visarga itself is only
    // produced by the main table, so the rewrite runs after it.
    (" ः", ":"),
    ("्ा", ""),
    ("ाे", "ो"),
    ("ाॅ", "ॉ"),
    ("अौ", "औ"),
    ("अो", "ओ"),
    ("आॅ", "ऑ"),
];

lazy_static! {
    static ref TABLE: RuleTable = RuleTable::new(NORMALIZE, RULES, CLEANUP);
}

/// Converts Chanakya encoded text to Unicode Devanagari.
pub fn chanakya_to_unicode(text: &str) -> String {
    chanakya_with_chunk_size(text, chunk::CHUNK_SIZE)
}

fn chanakya_with_chunk_size(text: &str, chunk_size: usize) -> String {
    let mut out = String::with_capacity(text.len());
    for chunk in chunk::chunks(text, chunk_size) {
        out.push_str(&convert_chunk(chunk));
    }
    out
}

fn convert_chunk(text: &str) -> String {
    let mut cs: Vec<char> = text.chars().collect();

    // Stray matra-carrier glyphs typed before the pha key would be consumed
    // out of order by the table; rotate the pha key in front of them first.
    move_pha_before_carriers(&mut cs);

    let converted = TABLE.apply(&cs.into_iter().collect::<String>());
    let mut cs: Vec<char> = converted.chars().collect();

    move_ra_ligature_before_matras(&mut cs);
    move_anusvara_after_matras(&mut cs);
    fix_word_initial_aa_sign(&mut cs);

    expand_glyph(&mut cs, '¯', &[PRE_I]);
    expand_glyph(&mut cs, 'Ł', &[RA, VIRAMA, PRE_I]);

    swap_i_past_consonant(&mut cs);
    // The source converter applies the half-form swap exactly twice, which
    // carries the sign across at most two conjunct consonants.
    swap_i_past_half_form(&mut cs);
    swap_i_past_half_form(&mut cs);

    expand_glyph(&mut cs, PRE_I, &[VOWEL_SIGN_I]);
    expand_glyph(&mut cs, PRE_I_ANUSVARA, &[VOWEL_SIGN_I, ANUSVARA]);

    expand_glyph(&mut cs, '±', &[REPH, ANUSVARA]);
    move_reph_before_cluster(&mut cs);
    move_reph_before_half_form(&mut cs);
    expand_glyph(&mut cs, REPH, &[RA, VIRAMA]);

    cs.into_iter().collect()
}

fn carrier(ch: char) -> bool {
    matches!(ch, 'Z' | 'z' | 's' | 'S' | 'q' | 'w' | 'a' | '¡' | '`')
}

/// Consonant class of the reph reordering passes. The rra and rha members
/// are the precomposed U+095C/U+095D the tables emit; the virama and ña come
/// from the source class spelling ksha and jña as conjuncts. Kept as-is.
fn reph_host(ch: char) -> bool {
    match ch {
        'क' | 'ख' | 'ग' | 'घ' | 'च' | 'छ' | 'ज' | 'झ' | 'ट' | 'ठ' | 'ड'
        | '\u{095C}' | 'ढ' | '\u{095D}' | 'ण' | 'त' | 'थ' | 'द' | 'ध' | 'न'
        | 'प' | 'फ' | 'ब' | 'भ' | 'म' | 'य' | 'र' | 'ल' | 'ळ' | 'व' | 'श'
        | 'ष' | 'स' | 'ह' | 'ञ' => true,
        VIRAMA => true,
        _ => false,
    }
}

/// Consonant class of the short-i swap passes; differs from [`reph_host`]
/// in carrying the velar nasal and not the retroflex la.
fn i_host(ch: char) -> bool {
    match ch {
        'क' | 'ख' | 'ग' | 'घ' | 'ङ' | 'च' | 'छ' | 'ज' | 'झ' | 'ञ' | 'ट'
        | 'ठ' | 'ड' | '\u{095C}' | 'ढ' | '\u{095D}' | 'ण' | 'त' | 'थ' | 'द'
        | 'ध' | 'न' | 'प' | 'फ' | 'ब' | 'भ' | 'म' | 'य' | 'र' | 'ल' | 'व'
        | 'श' | 'ष' | 'स' | 'ह' => true,
        VIRAMA => true,
        _ => false,
    }
}

fn reph_tail(ch: char) -> bool {
    matches!(
        ch,
        'ा' | 'ि' | 'ी' | 'ु' | 'ू' | 'ृ' | 'े' | 'ै' | 'ो' | 'ौ' | 'ं' | 'ँ'
    )
}

fn pre_i_like(ch: char) -> bool {
    ch == PRE_I || ch == PRE_I_ANUSVARA
}

/// Rotates the pha key in front of a run of matra carriers sitting before it.
fn move_pha_before_carriers(cs: &mut [char]) {
    let mut i = 0;
    while i < cs.len() {
        if carrier(cs[i]) {
            let start = i;
            let mut j = i + 1;
            while j < cs.len() && carrier(cs[j]) {
                j += 1;
            }
            if j < cs.len() && cs[j] == 'Q' {
                cs[start..=j].rotate_right(1);
                i = j + 1;
            } else {
                i = j;
            }
        } else {
            i += 1;
        }
    }
}

/// The ra ligature sign renders under the whole syllable, so the table can
/// emit it after the syllable's marks; move it back before them.
fn move_ra_ligature_before_matras(cs: &mut [char]) {
    let run = |ch: char| matches!(ch, 'े' | 'ै' | 'ु' | 'ू' | 'ं');
    let mut i = 0;
    while i < cs.len() {
        if run(cs[i]) {
            let start = i;
            let mut j = i + 1;
            while j < cs.len() && run(cs[j]) {
                j += 1;
            }
            if j + 1 < cs.len() && cs[j] == VIRAMA && cs[j + 1] == RA {
                cs[start..=j + 1].rotate_right(2);
                i = j + 2;
            } else {
                i = j;
            }
        } else {
            i += 1;
        }
    }
}

/// An anusvara emitted before the matras it follows in Unicode order.
fn move_anusvara_after_matras(cs: &mut [char]) {
    let run = |ch: char| matches!(ch, 'ा' | 'े' | 'ै' | 'ु' | 'ू');
    let mut i = 0;
    while i < cs.len() {
        if cs[i] == 'ं' && i + 1 < cs.len() && run(cs[i + 1]) {
            let mut j = i + 1;
            while j < cs.len() && run(cs[j]) {
                j += 1;
            }
            cs[i..j].rotate_left(1);
            i = j;
        } else {
            i += 1;
        }
    }
}

/// The Aa sign glyph doubles as word-initial sha in this encoding.
fn fix_word_initial_aa_sign(cs: &mut [char]) {
    for i in 1..cs.len() {
        if cs[i] == 'ा' && (cs[i - 1] == ' ' || cs[i - 1] == '\n') {
            cs[i] = 'श';
        }
    }
}

fn swap_i_past_consonant(cs: &mut [char]) {
    let mut i = 0;
    while i + 1 < cs.len() {
        if pre_i_like(cs[i]) && i_host(cs[i + 1]) {
            cs.swap(i, i + 1);
            i += 2;
        } else {
            i += 1;
        }
    }
}

fn swap_i_past_half_form(cs: &mut [char]) {
    let mut i = 0;
    while i + 2 < cs.len() {
        if pre_i_like(cs[i]) && cs[i + 1] == VIRAMA && i_host(cs[i + 2]) {
            let sign = cs[i];
            cs[i] = cs[i + 1];
            cs[i + 1] = cs[i + 2];
            cs[i + 2] = sign;
            i += 3;
        } else {
            i += 1;
        }
    }
}

/// Moves a reph placeholder before the consonant + matra run it trails.
fn move_reph_before_cluster(cs: &mut [char]) {
    let mut i = 0;
    while i < cs.len() {
        if reph_host(cs[i]) {
            let mut j = i + 1;
            while j < cs.len() && reph_tail(cs[j]) {
                j += 1;
            }
            if j < cs.len() && cs[j] == REPH {
                cs[i..=j].rotate_right(1);
                i = j + 1;
            } else {
                i += 1;
            }
        } else {
            i += 1;
        }
    }
}

/// Moves a reph placeholder before a half form (consonant + virama).
fn move_reph_before_half_form(cs: &mut [char]) {
    let mut i = 0;
    while i + 2 < cs.len() {
        if reph_host(cs[i]) && cs[i + 1] == VIRAMA && cs[i + 2] == REPH {
            cs[i..=i + 2].rotate_right(1);
            i += 3;
        } else {
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod table {
        use super::*;

        #[test]
        fn test_common_words() {
            assert_eq!(chanakya_to_unicode("Hkkjr"), "भारत");
            assert_eq!(chanakya_to_unicode("iqLrd"), "पुस्तक");
        }

        #[test]
        fn test_empty() {
            assert_eq!(chanakya_to_unicode(""), "");
        }

        #[test]
        fn test_unmapped_passes_through() {
            assert_eq!(chanakya_to_unicode("0123456789"), "0123456789");
        }

        #[test]
        fn test_idempotent_on_unicode() {
            let once = chanakya_to_unicode("iqLrd vkSj /eZ");
            assert_eq!(chanakya_to_unicode(&once), once);
        }

        #[test]
        fn test_visarga_after_space_is_colon() {
            // The colon key converts through ः, then joins its word.
            assert_eq!(chanakya_to_unicode("le; %"), "समय:");
        }

        #[test]
        fn test_right_quote_is_ja() {
            assert_eq!(chanakya_to_unicode("”ky"), "जल");
        }
    }

    mod reorder {
        use super::*;

        #[test]
        fn test_reph() {
            assert_eq!(chanakya_to_unicode("/eZ"), "धर्म");
        }

        #[test]
        fn test_reph_skips_matra() {
            assert_eq!(chanakya_to_unicode("/ekZ"), "धर्मा");
        }

        #[test]
        fn test_short_i_swaps_past_consonant() {
            assert_eq!(chanakya_to_unicode("fueZy"), "निर्मल");
        }

        #[test]
        fn test_short_i_crosses_half_form() {
            // f ahead of a half form lands after the full conjunct.
            let mut cs: Vec<char> = vec![PRE_I, VIRAMA, 'क'];
            swap_i_past_half_form(&mut cs);
            assert_eq!(cs, vec![VIRAMA, 'क', PRE_I]);
        }

        #[test]
        fn test_anusvara_moves_after_matra() {
            let mut cs: Vec<char> = vec!['क', 'ं', 'ा'];
            move_anusvara_after_matras(&mut cs);
            assert_eq!(cs, vec!['क', 'ा', 'ं']);
        }

        #[test]
        fn test_ra_ligature_moves_before_matras() {
            let mut cs: Vec<char> = vec!['े', VIRAMA, RA];
            move_ra_ligature_before_matras(&mut cs);
            assert_eq!(cs, vec![VIRAMA, RA, 'े']);
        }

        #[test]
        fn test_word_initial_aa_sign_is_sha() {
            let mut cs: Vec<char> = " ाम".chars().collect();
            fix_word_initial_aa_sign(&mut cs);
            assert_eq!(cs.into_iter().collect::<String>(), " शम");
        }

        #[test]
        fn test_reph_before_retroflex() {
            assert_eq!(chanakya_to_unicode("xMZ"), "गर्ड");
        }

        #[test]
        fn test_nukta_letter_hosts_reph() {
            // The precomposed rra is a member of the host class.
            assert_eq!(chanakya_to_unicode("M+Z"), "र्\u{095C}");
        }

        #[test]
        fn test_reph_at_start_terminates() {
            // No host before the placeholder; it resolves in place.
            assert_eq!(chanakya_to_unicode("Zd"), "र्क");
        }

        #[test]
        fn test_chunk_size_does_not_change_output() {
            let text = "Hkkjr dh iqLrd vkSj /eZ";
            let full = chanakya_with_chunk_size(text, chunk::CHUNK_SIZE);
            // No word in the sample exceeds five characters.
            for size in [7, 10, 15] {
                assert_eq!(chanakya_with_chunk_size(text, size), full);
            }
        }

        #[test]
        fn test_pha_carrier_guard() {
            // sQ renders pha + e-matra; the guard reorders it before the
            // table consumes the carrier.
            assert_eq!(chanakya_to_unicode("lsQn"), "सफ़ेद");
        }
    }
}
