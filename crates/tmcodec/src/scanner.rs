//! Logical-character navigation over universal text.
//!
//! A logical character is either one byte other than `<`, or a bracketed
//! unit running from `<` up to and including the next `>`. Units do not
//! nest. Every function here moves in whole units, so a cursor that starts
//! on a unit boundary never ends up inside `<...>`.
//!
//! Malformed input is handled on a best-effort basis:
//! - an unterminated `<...` is one final unit reaching the end of the string;
//! - stepping backwards over a `>` with no matching `<` lands on offset 0.
//!
//! Cursors are byte offsets. Offsets past the end are clamped to the length.
//!
//! ```rust
//! use tmcodec::scanner;
//!
//! let s = b"x<alpha>y";
//! let units = scanner::tokenize(s);
//! assert_eq!(units, [&b"x"[..], b"<alpha>", b"y"]);
//! assert_eq!(scanner::step_forward(s, 1), 8);
//! assert_eq!(scanner::step_backward(s, 8), 1);
//! ```

use alloc::{vec, vec::Vec};
use core::iter::FusedIterator;

use bstr::BString;

use crate::classify::{is_iso_alpha, is_numeric};

/// Offset just past the logical character starting at `pos`.
///
/// Returns `pos` unchanged at the end of the string.
#[must_use]
pub fn step_forward(s: &[u8], pos: usize) -> usize {
    let n = s.len();
    let mut pos = pos.min(n);
    if pos == n {
        return pos;
    }
    if s[pos] != b'<' {
        return pos + 1;
    }
    while pos < n && s[pos] != b'>' {
        pos += 1;
    }
    if pos < n {
        pos += 1;
    }
    pos
}

/// Offset of the start of the logical character ending at `pos`.
///
/// Returns `0` at the start of the string.
#[must_use]
pub fn step_backward(s: &[u8], pos: usize) -> usize {
    let mut pos = pos.min(s.len());
    if pos == 0 {
        return 0;
    }
    if s[pos - 1] != b'>' {
        return pos - 1;
    }
    while pos > 0 && s[pos - 1] != b'<' {
        pos -= 1;
    }
    pos.saturating_sub(1)
}

/// In-place form of [`step_forward`].
pub fn char_forwards(s: &[u8], pos: &mut usize) {
    *pos = step_forward(s, *pos);
}

/// In-place form of [`step_backward`].
pub fn char_backwards(s: &[u8], pos: &mut usize) {
    *pos = step_backward(s, *pos);
}

/// Number of logical characters in `s`.
#[must_use]
pub fn logical_length(s: &[u8]) -> usize {
    LogicalChars::new(s).count()
}

/// The `k`-th logical character counting from the start (0-based), or an
/// empty slice when `s` is shorter.
#[must_use]
pub fn nth_logical_unit(s: &[u8], k: usize) -> &[u8] {
    let mut pos = 0;
    for _ in 0..k {
        char_forwards(s, &mut pos);
    }
    let start = pos;
    char_forwards(s, &mut pos);
    &s[start..pos]
}

/// The `k`-th logical character counting from the end (0 is the last one),
/// or an empty slice when `s` is shorter.
#[must_use]
pub fn nth_from_end(s: &[u8], k: usize) -> &[u8] {
    let mut pos = s.len();
    for _ in 0..k {
        char_backwards(s, &mut pos);
    }
    let end = pos;
    char_backwards(s, &mut pos);
    &s[pos..end]
}

/// Splits `s` into its logical characters. Concatenating the result gives
/// back `s`.
#[must_use]
pub fn tokenize(s: &[u8]) -> Vec<&[u8]> {
    LogicalChars::new(s).collect()
}

/// Concatenates logical characters produced by [`tokenize`].
#[must_use]
pub fn recompose<T: AsRef<[u8]>>(units: &[T]) -> BString {
    let mut r = Vec::with_capacity(units.iter().map(|u| u.as_ref().len()).sum());
    for unit in units {
        r.extend_from_slice(unit.as_ref());
    }
    r.into()
}

/// First occurrence of `needle` at or after `pos` that starts on a logical
/// character boundary reachable from `pos`.
///
/// `pos` is clamped to the haystack length; an empty needle matches
/// immediately at the clamped position.
#[must_use]
pub fn search_forward(needle: &[u8], pos: usize, haystack: &[u8]) -> Option<usize> {
    let mut pos = pos.min(haystack.len());
    if needle.is_empty() {
        return Some(pos);
    }
    while haystack.len() - pos >= needle.len() {
        if haystack[pos..].starts_with(needle) {
            return Some(pos);
        }
        char_forwards(haystack, &mut pos);
    }
    None
}

/// Last occurrence of `needle` at or before `pos`, probing only logical
/// character boundaries while walking back from `pos`.
#[must_use]
pub fn search_backward(needle: &[u8], pos: usize, haystack: &[u8]) -> Option<usize> {
    let mut pos = pos.min(haystack.len());
    loop {
        if haystack[pos..].starts_with(needle) {
            return Some(pos);
        }
        if pos == 0 {
            return None;
        }
        char_backwards(haystack, &mut pos);
    }
}

/// Whether some logical character of `s` is a numeric `<#...>` escape.
#[must_use]
pub fn contains_unicode_char(s: &[u8]) -> bool {
    LogicalChars::new(s).any(|unit| unit.starts_with(b"<#"))
}

/// Splits a word that does not fit on a line into two or three pieces.
///
/// Tried in order:
/// 1. at the first space at or past the middle, which becomes a piece of
///    its own unless it is the final byte;
/// 2. at the first change of run kind (digits, letters, other) at or past
///    the middle;
/// 3. at the first logical character boundary at or past the middle.
///
/// Escape units are never split.
#[must_use]
pub fn wrap_split(s: &[u8]) -> Vec<&[u8]> {
    let r = split_at_spaces(s);
    if r.len() > 1 {
        return r;
    }
    let r = split_between_words(s);
    if r.len() > 1 {
        return r;
    }
    let n = s.len();
    let mut i = 0;
    while i < n / 2 {
        char_forwards(s, &mut i);
    }
    vec![&s[..i], &s[i..]]
}

fn split_at_spaces(s: &[u8]) -> Vec<&[u8]> {
    let n = s.len();
    let mut i = 0;
    let mut j = 0;
    while j < n / 2 {
        let Some(found) = search_forward(b" ", i, s) else {
            break;
        };
        j = found;
        i = found + 1;
    }
    if j < 1 || j >= n {
        vec![s]
    } else if j == n - 1 {
        vec![&s[..j], &s[j..]]
    } else {
        vec![&s[..j], &s[j..=j], &s[j + 1..]]
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Run {
    Start,
    Number,
    Word,
    Other,
}

fn split_between_words(s: &[u8]) -> Vec<&[u8]> {
    let n = s.len();
    let mut i = 0;
    let mut boundary: Option<usize> = None;
    let mut run = Run::Start;
    while i < n && boundary.is_none_or(|j| j < n / 2) {
        let c = s[i];
        let continues = (is_numeric(c) && run == Run::Number) || (is_iso_alpha(c) && run == Run::Word);
        if !continues {
            run = if is_numeric(c) {
                Run::Number
            } else if is_iso_alpha(c) {
                Run::Word
            } else {
                Run::Other
            };
            boundary = Some(i);
        }
        char_forwards(s, &mut i);
    }
    match boundary {
        Some(j) if j > 0 && j < n => vec![&s[..j], &s[j..]],
        _ => vec![s],
    }
}

/// Iterator over the logical characters of a byte string.
///
/// ```rust
/// use tmcodec::LogicalChars;
///
/// let mut it = LogicalChars::new(b"a<b>");
/// assert_eq!(it.next(), Some(&b"a"[..]));
/// assert_eq!(it.offset(), 1);
/// assert_eq!(it.next(), Some(&b"<b>"[..]));
/// assert_eq!(it.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct LogicalChars<'a> {
    s: &'a [u8],
    pos: usize,
}

impl<'a> LogicalChars<'a> {
    /// Iterator over the logical characters of `s`, starting at offset 0.
    #[must_use]
    pub fn new(s: &'a [u8]) -> Self {
        Self { s, pos: 0 }
    }

    /// Byte offset of the next unit to be yielded.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Unconsumed tail of the string.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.s[self.pos..]
    }
}

impl<'a> Iterator for LogicalChars<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.s.len() {
            return None;
        }
        let start = self.pos;
        self.pos = step_forward(self.s, start);
        Some(&self.s[start..self.pos])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.s.len() - self.pos;
        (usize::from(rest > 0), Some(rest))
    }
}

impl FusedIterator for LogicalChars<'_> {}
