//! Byte-level search, matching and cursor-driven reading.
//!
//! Unlike [`scanner`](crate::scanner), nothing here apart from
//! [`skip_symbol`] knows about escape units: positions are plain byte offsets
//! and matches may start anywhere.

use alloc::vec::Vec;

use bstr::{BString, ByteSlice};
use log::debug;

use crate::{
    classify::{is_digit, is_numeric, is_space},
    options::WildcardOptions,
    scanner::step_forward,
};

/// Whether `pattern` occurs in `s` at offset `i`.
#[must_use]
pub fn test_at(s: &[u8], i: usize, pattern: &[u8]) -> bool {
    s.get(i..).is_some_and(|rest| rest.starts_with(pattern))
}

#[must_use]
pub fn starts(s: &[u8], prefix: &[u8]) -> bool {
    s.starts_with(prefix)
}

#[must_use]
pub fn ends(s: &[u8], suffix: &[u8]) -> bool {
    s.ends_with(suffix)
}

/// Consumes `literal` at `*i` if it is there.
pub fn read_literal(s: &[u8], i: &mut usize, literal: &[u8]) -> bool {
    if test_at(s, *i, literal) {
        *i += literal.len();
        true
    } else {
        false
    }
}

/// Reads up to the next newline.
///
/// Returns the line without its terminator and whether a newline was found.
/// The cursor moves past the newline, or to the end of `s` when there is
/// none.
pub fn read_line<'a>(s: &'a [u8], i: &mut usize) -> (&'a [u8], bool) {
    let start = (*i).min(s.len());
    match s[start..].find_byte(b'\n') {
        Some(k) => {
            *i = start + k + 1;
            (&s[start..start + k], true)
        }
        None => {
            *i = s.len();
            (&s[start..], false)
        }
    }
}

fn digits_end(s: &[u8], mut i: usize) -> usize {
    while i < s.len() && is_digit(s[i]) {
        i += 1;
    }
    i
}

/// Reads an optionally negative decimal integer at `*i`.
///
/// On failure, including overflow, the cursor is left where it was.
///
/// ```rust
/// use tmcodec::search::read_int;
///
/// let mut i = 2;
/// assert_eq!(read_int(b"x=-42;", &mut i), Some(-42));
/// assert_eq!(i, 5);
/// ```
pub fn read_int(s: &[u8], i: &mut usize) -> Option<i64> {
    let start = *i;
    let mut j = start;
    if s.get(j) == Some(&b'-') {
        j += 1;
    }
    if !s.get(j).is_some_and(|&c| is_digit(c)) {
        return None;
    }
    let end = digits_end(s, j);
    let value = core::str::from_utf8(&s[start..end]).ok()?.parse().ok()?;
    *i = end;
    Some(value)
}

/// Reads a decimal floating point number: optional `-`, digits, an optional
/// fraction and an optional exponent.
///
/// On failure the cursor is left where it was. A lone `.` is not a number.
pub fn read_double(s: &[u8], i: &mut usize) -> Option<f64> {
    let start = *i;
    let mut j = start;
    if s.get(j) == Some(&b'-') {
        j += 1;
    }
    if !s.get(j).is_some_and(|&c| is_numeric(c)) {
        return None;
    }
    j = digits_end(s, j);
    if s.get(j) == Some(&b'.') {
        j = digits_end(s, j + 1);
    }
    if matches!(s.get(j), Some(b'e' | b'E')) {
        j += 1;
        if s.get(j) == Some(&b'-') {
            j += 1;
        }
        if !s.get(j).is_some_and(|&c| is_digit(c)) {
            return None;
        }
        j = digits_end(s, j);
    }
    let value = core::str::from_utf8(&s[start..j]).ok()?.parse().ok()?;
    *i = j;
    Some(value)
}

/// Skips spaces and tabs.
pub fn skip_spaces(s: &[u8], i: &mut usize) {
    while *i < s.len() && matches!(s[*i], b' ' | b'\t') {
        *i += 1;
    }
}

/// Skips spaces, tabs and newlines.
pub fn skip_whitespace(s: &[u8], i: &mut usize) {
    while *i < s.len() && matches!(s[*i], b' ' | b'\t' | b'\n') {
        *i += 1;
    }
}

/// Moves past the next newline, or to the end of `s`.
pub fn skip_line(s: &[u8], i: &mut usize) {
    let start = (*i).min(s.len());
    *i = s[start..].find_byte(b'\n').map_or(s.len(), |k| start + k + 1);
}

/// Moves past one logical character: a whole `<...>` unit (or an unclosed
/// `<` run up to the end), otherwise a single byte. Stays put at the end.
pub fn skip_symbol(s: &[u8], i: &mut usize) {
    *i = step_forward(s, *i);
}

/// First occurrence of `pattern` at or after `pos`. An empty pattern matches
/// at `pos` itself as long as `pos` is within `s`.
#[must_use]
pub fn search_forwards(pattern: &[u8], pos: usize, s: &[u8]) -> Option<usize> {
    let rest = s.get(pos..)?;
    rest.find(pattern).map(|k| pos + k)
}

/// First position at or after `pos` where any of `patterns` occurs. At each
/// position the patterns are tried in order; empty patterns never match.
#[must_use]
pub fn search_forwards_any<P: AsRef<[u8]>>(patterns: &[P], pos: usize, s: &[u8]) -> Option<usize> {
    (pos..s.len()).find(|&i| {
        patterns
            .iter()
            .map(AsRef::as_ref)
            .any(|p| !p.is_empty() && s[i..].starts_with(p))
    })
}

/// Last occurrence of `pattern` starting at or before `pos`.
#[must_use]
pub fn search_backwards(pattern: &[u8], pos: usize, s: &[u8]) -> Option<usize> {
    let end = pos.saturating_add(pattern.len()).min(s.len());
    s[..end].rfind(pattern)
}

#[must_use]
pub fn occurs(pattern: &[u8], s: &[u8]) -> bool {
    s.find(pattern).is_some()
}

/// Number of possibly overlapping occurrences of `pattern`. Zero for an
/// empty pattern.
#[must_use]
pub fn count_occurrences(pattern: &[u8], s: &[u8]) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut i = 0;
    while let Some(next) = search_forwards(pattern, i, s) {
        count += 1;
        i = next + 1;
    }
    count
}

/// Length of the longest suffix of `a` that is also a prefix of `b`.
#[must_use]
pub fn overlapping(a: &[u8], b: &[u8]) -> usize {
    (1..=a.len().min(b.len()))
        .rev()
        .find(|&k| a[a.len() - k..] == b[..k])
        .unwrap_or(0)
}

/// Replaces every non-overlapping occurrence of `what`, scanning left to
/// right. An empty `what` leaves `s` unchanged.
#[must_use]
pub fn replace(s: &[u8], what: &[u8], by: &[u8]) -> BString {
    if what.is_empty() {
        return s.into();
    }
    s.replace(what, by).into()
}

struct Wildcard<'a> {
    s: &'a [u8],
    w: &'a [u8],
    budget: Option<usize>,
    steps: usize,
}

impl Wildcard<'_> {
    fn tick(&mut self) -> bool {
        self.steps += 1;
        self.budget.is_none_or(|b| self.steps <= b)
    }

    fn exhausted(&self) -> bool {
        self.budget.is_some_and(|b| self.steps > b)
    }

    fn matches(&mut self, mut sp: usize, mut wp: usize) -> bool {
        loop {
            if !self.tick() {
                return false;
            }
            match self.w.get(wp) {
                None => return sp == self.s.len(),
                Some(b'*') => break,
                Some(&c) if self.s.get(sp) == Some(&c) => {
                    sp += 1;
                    wp += 1;
                }
                Some(_) => return false,
            }
        }
        while self.w.get(wp) == Some(&b'*') {
            wp += 1;
        }
        for start in sp..=self.s.len() {
            if self.matches(start, wp) {
                return true;
            }
            if self.exhausted() {
                return false;
            }
        }
        false
    }
}

/// Whether `s` matches the glob `pattern`, where `*` stands for any run of
/// bytes and every other byte matches itself.
///
/// ```rust
/// use tmcodec::search::match_wildcard;
///
/// assert!(match_wildcard(b"abXc", b"a*c"));
/// assert!(!match_wildcard(b"abcd", b"a*c"));
/// ```
#[must_use]
pub fn match_wildcard(s: &[u8], pattern: &[u8]) -> bool {
    match_wildcard_with(s, pattern, &WildcardOptions::default())
}

/// [`match_wildcard`] under a step budget. Running out of budget counts as
/// no match.
#[must_use]
pub fn match_wildcard_with(s: &[u8], pattern: &[u8], options: &WildcardOptions) -> bool {
    let mut m = Wildcard {
        s,
        w: pattern,
        budget: options.step_budget,
        steps: 0,
    };
    let matched = m.matches(0, 0);
    if !matched && m.exhausted() {
        debug!(
            "wildcard match gave up after {} steps on {:?}",
            m.steps,
            pattern.as_bstr()
        );
    }
    matched
}

/// Splits `s` at every occurrence of `sep`. An empty separator yields `s`
/// as the only piece.
#[must_use]
pub fn tokenize<'a>(s: &'a [u8], sep: &[u8]) -> Vec<&'a [u8]> {
    if sep.is_empty() {
        return alloc::vec![s];
    }
    s.split_str(sep).collect()
}

/// Joins `parts` with `sep`; inverse of [`tokenize`].
#[must_use]
pub fn recompose<T: AsRef<[u8]>>(parts: &[T], sep: &[u8]) -> BString {
    let mut r = Vec::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            r.extend_from_slice(sep);
        }
        r.extend_from_slice(part.as_ref());
    }
    r.into()
}

#[must_use]
pub fn trim_spaces_left(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&c| !is_space(c)).unwrap_or(s.len());
    &s[start..]
}

#[must_use]
pub fn trim_spaces_right(s: &[u8]) -> &[u8] {
    let end = s.iter().rposition(|&c| !is_space(c)).map_or(0, |k| k + 1);
    &s[..end]
}

#[must_use]
pub fn trim_spaces(s: &[u8]) -> &[u8] {
    trim_spaces_left(trim_spaces_right(s))
}

/// [`trim_spaces`] applied to each element.
#[must_use]
pub fn trim_spaces_all<T: AsRef<[u8]>>(parts: &[T]) -> Vec<&[u8]> {
    parts.iter().map(|p| trim_spaces(p.as_ref())).collect()
}
