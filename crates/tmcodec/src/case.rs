//! Case folding and strings-as-sets.
//!
//! Folding works byte by byte with the fixed ±32 offset of the universal
//! encoding. Escape units such as `<Alpha>` are not treated specially: their
//! name bytes are folded like any other bytes.

use alloc::vec::Vec;

use bstr::BString;

use crate::classify::{is_locase, is_upcase};

#[must_use]
pub fn upcase(c: u8) -> u8 {
    if is_locase(c) { c - 32 } else { c }
}

#[must_use]
pub fn locase(c: u8) -> u8 {
    if is_upcase(c) { c + 32 } else { c }
}

/// Matching close bracket for `{`, `(` and `[`; any other byte maps to
/// itself.
#[must_use]
pub fn closing_delimiter(c: u8) -> u8 {
    match c {
        b'{' => b'}',
        b'(' => b')',
        b'[' => b']',
        _ => c,
    }
}

#[must_use]
pub fn upcase_first(s: &[u8]) -> BString {
    map_first(s, upcase)
}

#[must_use]
pub fn locase_first(s: &[u8]) -> BString {
    map_first(s, locase)
}

#[must_use]
pub fn upcase_all(s: &[u8]) -> BString {
    s.iter().copied().map(upcase).collect::<Vec<u8>>().into()
}

#[must_use]
pub fn locase_all(s: &[u8]) -> BString {
    s.iter().copied().map(locase).collect::<Vec<u8>>().into()
}

fn map_first(s: &[u8], f: fn(u8) -> u8) -> BString {
    let mut r = BString::from(s);
    if let Some(first) = r.first_mut() {
        *first = f(*first);
    }
    r
}

/// Bytes of `a` that occur nowhere in `b`, in their original order.
#[must_use]
pub fn string_minus(a: &[u8], b: &[u8]) -> BString {
    a.iter()
        .copied()
        .filter(|c| !b.contains(c))
        .collect::<Vec<u8>>()
        .into()
}

/// `string_minus(a, b)` followed by all of `b`.
#[must_use]
pub fn string_union(a: &[u8], b: &[u8]) -> BString {
    let mut r = string_minus(a, b);
    r.extend_from_slice(b);
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_ascii_and_cork() {
        assert_eq!(upcase(b'q'), b'Q');
        assert_eq!(locase(b'Q'), b'q');
        // č <-> Č
        assert_eq!(upcase(0xA3), 0x83);
        assert_eq!(locase(0x83), 0xA3);
        // é <-> É
        assert_eq!(upcase(0xE9), 0xC9);
        // pound sign has no case
        assert_eq!(upcase(0xBF), 0xBF);
        assert_eq!(locase(0x9F), 0x9F);
    }

    #[test]
    fn case_round_trip_is_stable_for_all_bytes() {
        for c in 0..=255u8 {
            assert_eq!(locase(upcase(c)), locase(c), "byte {c}");
            assert_eq!(upcase(locase(c)), upcase(c), "byte {c}");
        }
    }

    #[test]
    fn caseless_cork_letters_are_left_alone() {
        // dotted I and d with stroke have no partner 32 positions away
        assert_eq!(locase(0x9D), 0x9D);
        assert_eq!(upcase(0xBD), 0xBD);
        assert_eq!(locase(0x9E), 0x9E);
        assert_eq!(locase(0x9C), 0xBC);
    }

    #[test]
    fn first_and_all() {
        assert_eq!(upcase_first(b"hello"), "Hello");
        assert_eq!(locase_first(b"HELLO"), "hELLO");
        assert_eq!(upcase_first(b""), "");
        assert_eq!(upcase_all(b"a<b>c"), "A<B>C");
        assert_eq!(locase_all(b"MiXeD 1"), "mixed 1");
    }

    #[test]
    fn set_operations() {
        assert_eq!(string_minus(b"abcdef", b"bdx"), "acef");
        assert_eq!(string_union(b"abc", b"cd"), "abcd");
        assert_eq!(string_union(b"", b"xy"), "xy");
        assert_eq!(string_minus(b"aaa", b""), "aaa");
    }

    #[quickcheck_macros::quickcheck]
    #[allow(clippy::needless_pass_by_value)]
    fn whole_string_folding(s: alloc::vec::Vec<u8>) -> bool {
        let up = upcase_all(&s);
        up.len() == s.len() && locase_all(&up) == locase_all(&s)
    }

    #[quickcheck_macros::quickcheck]
    #[allow(clippy::needless_pass_by_value)]
    fn union_keeps_all_of_the_right_side(a: alloc::vec::Vec<u8>, b: alloc::vec::Vec<u8>) -> bool {
        string_union(&a, &b).ends_with(&b)
    }

    #[test]
    fn delimiters() {
        assert_eq!(closing_delimiter(b'('), b')');
        assert_eq!(closing_delimiter(b'<'), b'<');
    }
}
