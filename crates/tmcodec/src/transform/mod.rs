//! Conversions between universal text and its external notations.
//!
//! - [`tm_encode`] / [`tm_decode`] guard literal angle brackets.
//! - [`tm_to_xml_name`], [`tm_to_xml_cdata`] and friends handle XML names
//!   and character data.
//! - [`escape_sh`], [`scm_quote`] and [`raw_quote`] cover shell, Scheme and
//!   raw string literals.
//!
//! Everything here is total: malformed input yields a best-effort result.

mod quote;
mod xml;

use alloc::vec::Vec;

use bstr::{BString, ByteSlice};
use log::trace;

use crate::scanner::step_forward;

pub use quote::{
    dos_to_better, escape_generic, escape_sh, escape_sh_with, escape_spaces, escape_verbatim,
    raw_quote, raw_unquote, scm_quote, scm_unquote, unescape_guile,
};
pub use xml::{
    Cdata, CdataPiece, old_tm_to_xml_cdata, tm_to_xml_cdata, tm_to_xml_name, xml_cdata_to_tm,
    xml_name_to_tm, xml_unspace,
};

/// Verbatim bytes to universal text: `<` becomes `<less>`, `>` becomes
/// `<gtr>`.
#[must_use]
pub fn tm_encode(s: &[u8]) -> BString {
    let mut r = Vec::with_capacity(s.len());
    for &c in s {
        match c {
            b'<' => r.extend_from_slice(b"<less>"),
            b'>' => r.extend_from_slice(b"<gtr>"),
            _ => r.push(c),
        }
    }
    r.into()
}

/// Universal text back to verbatim bytes.
///
/// `<less>` and `<gtr>` become `<` and `>`. Other escape units and stray
/// `>` bytes are dropped. An unterminated `<...` ends decoding and the text
/// decoded so far is returned.
///
/// ```rust
/// use tmcodec::transform::tm_decode;
///
/// assert_eq!(tm_decode(b"a<less>b<alpha>c"), "a<bc");
/// assert_eq!(tm_decode(b"ab<gtr><oops"), "ab>");
/// ```
#[must_use]
pub fn tm_decode(s: &[u8]) -> BString {
    let mut r = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        match s[i] {
            b'<' => {
                let end = step_forward(s, i);
                let unit = &s[i..end];
                match unit {
                    b"<less>" => r.push(b'<'),
                    b"<gtr>" => r.push(b'>'),
                    _ if unit.last() != Some(&b'>') => {
                        trace!("tm_decode: unterminated escape at offset {i}");
                        break;
                    }
                    _ => trace!("tm_decode: dropping {}", unit.as_bstr()),
                }
                i = end;
                continue;
            }
            b'>' => {}
            c => r.push(c),
        }
        i += 1;
    }
    r.into()
}

/// Like [`tm_encode`], but numeric `<#...>` escapes already present in `s`
/// are copied through intact.
#[must_use]
pub fn tm_var_encode(s: &[u8]) -> BString {
    let mut r = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        match s[i] {
            b'<' if s.get(i + 1) == Some(&b'#') => {
                let end = step_forward(s, i);
                r.extend_from_slice(&s[i..end]);
                i = end;
                continue;
            }
            b'<' => r.extend_from_slice(b"<less>"),
            b'>' => r.extend_from_slice(b"<gtr>"),
            c => r.push(c),
        }
        i += 1;
    }
    r.into()
}

/// Repairs universal text: stray `>` bytes are removed, a unit containing a
/// second `<` is removed whole, and an unterminated trailing `<...` is cut.
#[must_use]
pub fn tm_correct(s: &[u8]) -> BString {
    let mut r = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        match s[i] {
            b'<' => {
                let Some(len) = s[i + 1..].find_byte(b'>') else {
                    trace!("tm_correct: cutting unterminated escape at offset {i}");
                    break;
                };
                let close = i + 1 + len;
                if s[i + 1..close].contains(&b'<') {
                    trace!("tm_correct: dropping nested escape at offset {i}");
                } else {
                    r.extend_from_slice(&s[i..=close]);
                }
                i = close;
            }
            b'>' => {}
            c => r.push(c),
        }
        i += 1;
    }
    r.into()
}

/// Replaces each tab by spaces up to the next multiple of `tab_width`
/// columns. Columns restart after every newline and after every tab. A tab
/// width of zero is treated as one.
///
/// ```rust
/// use tmcodec::transform::convert_tabs_to_spaces;
///
/// assert_eq!(convert_tabs_to_spaces(b"ab\tc\n\td", 4), "ab  c\n    d");
/// ```
#[must_use]
pub fn convert_tabs_to_spaces(s: &[u8], tab_width: usize) -> BString {
    let tab_width = tab_width.max(1);
    let mut r = Vec::with_capacity(s.len());
    let mut line_start = 0;
    for (i, &c) in s.iter().enumerate() {
        match c {
            b'\t' => {
                let fill = tab_width - (i - line_start) % tab_width;
                r.resize(r.len() + fill, b' ');
                line_start = i + 1;
            }
            b'\n' => {
                line_start = i + 1;
                r.push(c);
            }
            _ => r.push(c),
        }
    }
    r.into()
}
