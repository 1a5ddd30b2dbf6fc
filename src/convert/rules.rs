//! Rule-table engine shared by the Kruti Dev and Chanakya converters.
//!
//! A table runs in three stages:
//!
//! 1. Normalize: a short ordered list of rewrites whose replacements re-enter
//!    the legacy alphabet, each applied until its pattern no longer occurs.
//!    These fold spelling variants into the canonical legacy spelling before
//!    the main table sees them.
//! 2. Main: a single left-to-right scan. At each position the longest pattern
//!    starting there wins; the replacement is emitted and never rescanned.
//!    Unmatched characters pass through literally.
//! 3. Cleanup: ordered fixpoint rewrites over the produced Unicode, fixing
//!    mark sequences the table can emit in visual order.
//!
//! Replacements in the main stage are final output except for the deliberate
//! placeholder characters (`f`, `Z`, `a`) owned by the converter's later
//! repositioning passes.

use std::cmp;

use rustc_hash::FxHashMap;

type Rules = &'static [(&'static str, &'static str)];

pub struct RuleTable {
    normalize: Rules,
    map: FxHashMap<&'static str, &'static str>,
    max_len: usize,
    cleanup: Rules,
}

impl RuleTable {
    pub fn new(normalize: Rules, rules: Rules, cleanup: Rules) -> Self {
        let mut map = FxHashMap::default();
        let mut max_len = 1;
        for &(pattern, replacement) in rules {
            // First declaration wins for duplicate patterns.
            map.entry(pattern).or_insert(replacement);
            max_len = cmp::max(max_len, pattern.chars().count());
        }
        for &(pattern, replacement) in normalize.iter().chain(cleanup) {
            debug_assert!(
                !replacement.contains(pattern),
                "fixpoint rewrite {:?} -> {:?} would not terminate",
                pattern,
                replacement
            );
        }
        RuleTable {
            normalize,
            map,
            max_len,
            cleanup,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let mut text = text.to_string();
        for &(pattern, replacement) in self.normalize {
            replace_to_fixpoint(&mut text, pattern, replacement);
        }
        let mut text = self.scan(&text);
        for &(pattern, replacement) in self.cleanup {
            replace_to_fixpoint(&mut text, pattern, replacement);
        }
        text
    }

    fn scan(&self, text: &str) -> String {
        let cs: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut key = String::new();
        let mut i = 0;
        while i < cs.len() {
            let top = cmp::min(self.max_len, cs.len() - i);
            let mut matched = false;
            for len in (1..=top).rev() {
                key.clear();
                key.extend(&cs[i..i + len]);
                if let Some(replacement) = self.map.get(key.as_str()) {
                    out.push_str(replacement);
                    i += len;
                    matched = true;
                    break;
                }
            }
            if !matched {
                out.push(cs[i]);
                i += 1;
            }
        }
        out
    }
}

fn replace_to_fixpoint(text: &mut String, pattern: &str, replacement: &str) {
    while text.contains(pattern) {
        *text = text.replace(pattern, replacement);
    }
}

/// Replaces every occurrence of `glyph` in the buffer with `with`.
pub(crate) fn expand_glyph(cs: &mut Vec<char>, glyph: char, with: &[char]) {
    let mut i = 0;
    while i < cs.len() {
        if cs[i] == glyph {
            cs.splice(i..i + 1, with.iter().copied());
            i += with.len();
        } else {
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleTable {
        static NORMALIZE: &[(&str, &str)] = &[("aa", "a")];
        static RULES: &[(&str, &str)] = &[
            ("abc", "LONG"),
            ("ab", "MID"),
            ("a", "x"),
            ("a", "dead"), // first declaration wins
        ];
        static CLEANUP: &[(&str, &str)] = &[("Dd", "!")];
        RuleTable::new(NORMALIZE, RULES, CLEANUP)
    }

    #[test]
    fn test_longest_match_wins() {
        assert_eq!(table().apply("abc"), "LONG");
        assert_eq!(table().apply("abe"), "MIDe");
    }

    #[test]
    fn test_first_duplicate_wins() {
        assert_eq!(table().apply("a"), "x");
    }

    #[test]
    fn test_normalize_runs_to_fixpoint() {
        // "aaaa" collapses to "a" before the main scan maps it.
        assert_eq!(table().apply("aaaa"), "x");
    }

    #[test]
    fn test_cleanup_applies_to_output() {
        // Main stage produces "MIDd"; cleanup rewrites the tail.
        assert_eq!(table().apply("abd"), "MI!");
        assert_eq!(table().apply("abab"), "MIDMID");
    }

    #[test]
    fn test_unmatched_passes_through() {
        assert_eq!(table().apply("123"), "123");
        assert_eq!(table().apply(""), "");
    }

    #[test]
    fn test_expand_glyph() {
        let mut cs: Vec<char> = "xZy".chars().collect();
        expand_glyph(&mut cs, 'Z', &['r', '!']);
        assert_eq!(cs, vec!['x', 'r', '!', 'y']);
    }
}
