use regex::Regex;

use lipika::{
    chanakya_to_unicode, convert_text, kannada_ascii_to_unicode, kruti_dev_to_unicode, Converter,
};

#[test]
fn test_kruti_dev_sentence() {
    let converted = kruti_dev_to_unicode("fgUnh Hkkjr dh jktHkk\"kk gSA");
    assert_eq!(converted, "हिन्दी भारत की राजभाषा है।");
}

#[test]
fn test_kruti_dev_reph_and_short_i() {
    assert_eq!(kruti_dev_to_unicode("/keZ"), "धर्म");
    assert_eq!(kruti_dev_to_unicode("fdrkc"), "किताब");
    assert_eq!(kruti_dev_to_unicode("vkSj"), "और");
}

#[test]
fn test_chanakya_sentence() {
    assert_eq!(chanakya_to_unicode("Hkkjr dh iqLrd"), "भारत की पुस्तक");
    assert_eq!(chanakya_to_unicode("fueZy"), "निर्मल");
}

#[test]
fn test_kannada_words() {
    assert_eq!(kannada_ascii_to_unicode("PÀ£ÀßqÀ"), "ಕನ್ನಡ");
    assert_eq!(kannada_ascii_to_unicode("ªÀµÀð"), "ವರ್ಷ");
}

#[test]
fn test_dispatch_by_font_name() {
    assert_eq!(convert_text("/keZ", "KrutiDev 010"), "धर्म");
    assert_eq!(convert_text("/eZ", "Chanakya"), "धर्म");
    assert_eq!(convert_text("ªÀµÀð", "BRHKMD+TTKGF"), "ವರ್ಷ");
    assert_eq!(convert_text("hello", "Helvetica"), "hello");
    assert_eq!(Converter::from_font_name("Times New Roman"), None);
}

#[test]
fn test_devanagari_output_is_clean() {
    // Converted text contains no leftover Latin-1 keys or placeholders.
    let legacy = Regex::new(r"[A-Za-z\u{0080}-\u{00FF}]").unwrap();
    for input in ["fgUnh tu x.k eu", "'kekZ th dk /keZ", "iw.kk±d la[;k,¡"] {
        let converted = kruti_dev_to_unicode(input);
        assert!(
            !legacy.is_match(&converted),
            "leftover legacy bytes in {:?}",
            converted
        );
    }
}

#[test]
fn test_devanagari_conversion_is_stable() {
    let once = kruti_dev_to_unicode("fgUnh Hkkjr dh jktHkk\"kk gSA");
    assert_eq!(kruti_dev_to_unicode(&once), once);
}
