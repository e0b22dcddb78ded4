//! Whole-word, case-insensitive matching.
//!
//! A *word character* is any Unicode alphanumeric character or `_`. A match of
//! `needle` at `[start, end)` is whole-word when:
//!
//! - the needle starts with a word character and the character before `start`
//!   (if any) is not a word character, and
//! - the needle ends with a word character and the character at `end` (if any)
//!   is not a word character.
//!
//! Edges of the needle that are not word characters (e.g. the `+` in `C++`)
//! impose no boundary requirement on that side.
//!
//! Case folding is per character (`char::to_lowercase`), so folds that change
//! the character count (`ß` vs `SS`) do not match.

use std::borrow::Cow;
use std::ops::Range;

/// Whether `c` counts as part of a word.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Find every non-overlapping whole-word occurrence of `needle`, left to right.
///
/// Returns byte ranges into `haystack`. An empty needle never matches.
pub fn find_whole_word(haystack: &str, needle: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = needle.chars().collect();
    let (Some(&first), Some(&last)) = (needle.first(), needle.last()) else {
        return Vec::new();
    };
    let check_start = is_word_char(first);
    let check_end = is_word_char(last);

    let chars: Vec<(usize, char)> = haystack.char_indices().collect();
    let n = needle.len();
    let mut matches = Vec::new();
    let mut i = 0;

    while i + n <= chars.len() {
        if check_start && i > 0 && is_word_char(chars[i - 1].1) {
            i += 1;
            continue;
        }

        let hit = needle
            .iter()
            .zip(&chars[i..i + n])
            .all(|(&nc, &(_, hc))| eq_ignore_case(hc, nc));

        if hit {
            let end = i + n;
            let bounded = !check_end || end == chars.len() || !is_word_char(chars[end].1);
            if bounded {
                let byte_end = chars.get(end).map_or(haystack.len(), |&(b, _)| b);
                matches.push(chars[i].0..byte_end);
                i = end;
                continue;
            }
        }

        i += 1;
    }

    matches
}

/// Whether `needle` occurs in `haystack` as a whole word, ignoring case.
pub fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    !find_whole_word(haystack, needle).is_empty()
}

/// Replace every whole-word occurrence of `needle` with `replacement`.
///
/// Borrows the input unchanged when nothing matches.
pub fn replace_whole_word<'a>(haystack: &'a str, needle: &str, replacement: &str) -> Cow<'a, str> {
    let ranges = find_whole_word(haystack, needle);
    if ranges.is_empty() {
        return Cow::Borrowed(haystack);
    }

    let mut out = String::with_capacity(haystack.len() + ranges.len() * replacement.len());
    let mut cursor = 0;
    for range in ranges {
        out.push_str(&haystack[cursor..range.start]);
        out.push_str(replacement);
        cursor = range.end;
    }
    out.push_str(&haystack[cursor..]);

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_whole_word_any_case() {
        assert_eq!(find_whole_word("hiv and HIV and Hiv", "HIV").len(), 3);
    }

    #[test]
    fn test_ignores_substrings() {
        assert!(find_whole_word("HIVE hives archive", "HIV").is_empty());
        assert!(find_whole_word("preHIV", "HIV").is_empty());
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        let ranges = find_whole_word("(HIV), HIV-positive; HIV.", "hiv");
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0], 1..4);
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        assert!(find_whole_word("HIV_1 HIV1", "HIV").is_empty());
    }

    #[test]
    fn test_unicode_letters_block_matches() {
        assert!(find_whole_word("éHIV", "HIV").is_empty());
        assert_eq!(find_whole_word("« HIV »", "HIV").len(), 1);
    }

    #[test]
    fn test_non_word_edges_skip_boundary_check() {
        assert_eq!(find_whole_word("knows C++ well", "c++").len(), 1);
        assert_eq!(find_whole_word("C++11", "C++").len(), 1);
    }

    #[test]
    fn test_multi_word_needle() {
        let text = "Patients with Heart Failure or heart failureX";
        assert_eq!(find_whole_word(text, "heart failure"), vec![14..27]);
    }

    #[test]
    fn test_empty_needle_never_matches() {
        assert!(find_whole_word("anything", "").is_empty());
        assert!(!contains_whole_word("anything", ""));
    }

    #[test]
    fn test_replace_borrows_when_absent() {
        let out = replace_whole_word("no match here", "HIV", "virus");
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn test_replace_multibyte_context() {
        let out = replace_whole_word("über HIV café", "hiv", "virus");
        assert_eq!(out, "über virus café");
    }
}
