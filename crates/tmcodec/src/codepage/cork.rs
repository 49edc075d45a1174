//! Universal (Cork) encoding against UTF-8.
//!
//! Only what the XML writer needs: single bytes, the `<less>`/`<gtr>`
//! escapes and numeric `<#HEX>` escapes. Other named escapes are symbol
//! names whose meaning lives outside this crate; they pass through
//! unchanged in both directions.

use alloc::vec::Vec;

use bstr::BString;

use super::tables::CORK_TO_UNICODE;
use crate::{numbering::as_hexadecimal, scanner::LogicalChars};

#[must_use]
pub fn cork_to_unicode(c: u8) -> char {
    if c < 0x80 {
        char::from(c)
    } else {
        CORK_TO_UNICODE[usize::from(c - 0x80)]
    }
}

/// Universal byte for `ch`, if it has one.
#[must_use]
pub fn unicode_to_cork(ch: char) -> Option<u8> {
    if ch.is_ascii() {
        return u8::try_from(ch).ok();
    }
    CORK_TO_UNICODE
        .iter()
        .position(|&c| c == ch)
        .and_then(|i| u8::try_from(i + 0x80).ok())
}

fn push_char(r: &mut Vec<u8>, ch: char) {
    let mut buf = [0u8; 4];
    r.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
}

/// Scalar named by a `<#HEX>` unit, if the unit is one and the value is a
/// valid Unicode scalar.
pub(crate) fn numeric_escape(unit: &[u8]) -> Option<char> {
    let hex = unit.strip_prefix(b"<#")?.strip_suffix(b">")?;
    if hex.is_empty() || hex.len() > 8 || !hex.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let code = hex
        .iter()
        .fold(0u32, |acc, &d| (acc << 4) | u32::from(hex_value(d)));
    char::from_u32(code)
}

fn hex_value(d: u8) -> u8 {
    match d {
        b'0'..=b'9' => d - b'0',
        b'a'..=b'f' => d - b'a' + 10,
        _ => d - b'A' + 10,
    }
}

/// Converts universal text to UTF-8.
///
/// ```rust
/// use tmcodec::codepage::cork_to_utf8;
///
/// assert_eq!(cork_to_utf8(b"caf\xe9 <less> <#3B1> <alpha>"), "café < α <alpha>");
/// ```
#[must_use]
pub fn cork_to_utf8(s: &[u8]) -> BString {
    let mut r = Vec::with_capacity(s.len());
    for unit in LogicalChars::new(s) {
        match unit {
            [c] => push_char(&mut r, cork_to_unicode(*c)),
            b"<less>" => r.push(b'<'),
            b"<gtr>" => r.push(b'>'),
            _ => match numeric_escape(unit) {
                Some(ch) => push_char(&mut r, ch),
                None => r.extend_from_slice(unit),
            },
        }
    }
    r.into()
}

/// Converts UTF-8 to universal text.
///
/// Characters with a universal byte become that byte, `<` and `>` become
/// `<less>` and `<gtr>`, everything else becomes an upper-case `<#HEX>`
/// escape. Bytes that are not valid UTF-8 are copied unchanged.
#[must_use]
pub fn utf8_to_cork(s: &[u8]) -> BString {
    let mut r = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        let (ch, len) = bstr::decode_utf8(&s[i..]);
        match ch {
            Some('<') => r.extend_from_slice(b"<less>"),
            Some('>') => r.extend_from_slice(b"<gtr>"),
            Some(ch) => match unicode_to_cork(ch) {
                Some(c) => r.push(c),
                None => {
                    r.extend_from_slice(b"<#");
                    r.extend_from_slice(&as_hexadecimal(i64::from(u32::from(ch))));
                    r.push(b'>');
                }
            },
            None => r.extend_from_slice(&s[i..i + len.max(1)]),
        }
        i += len.max(1);
    }
    r.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cork_byte_round_trips_through_unicode() {
        for c in 0..=255u8 {
            assert_eq!(unicode_to_cork(cork_to_unicode(c)), Some(c), "byte {c:#04x}");
        }
    }

    #[test]
    fn utf8_round_trip_of_cork_text() {
        let cork = b"\x8A\xf3d\xb9 <less>x<gtr> <#20AC>";
        let utf8 = cork_to_utf8(cork);
        assert_eq!(utf8, "Łód\u{17a} <x> €");
        assert_eq!(utf8_to_cork(&utf8), &cork[..]);
    }

    #[test]
    fn named_and_malformed_escapes_pass_through() {
        assert_eq!(cork_to_utf8(b"<alpha><#zz><#D800>"), "<alpha><#zz><#D800>");
        assert_eq!(cork_to_utf8(b"ab<#41"), "ab<#41");
    }

    #[test]
    fn non_cork_scalars_become_numeric_escapes() {
        assert_eq!(utf8_to_cork("α".as_bytes()), "<#3B1>");
        assert_eq!(utf8_to_cork(b"\xff"), &b"\xff"[..]);
    }

    #[test]
    fn numeric_escape_parsing() {
        assert_eq!(numeric_escape(b"<#41>"), Some('A'));
        assert_eq!(numeric_escape(b"<#3b1>"), Some('α'));
        assert_eq!(numeric_escape(b"<#>"), None);
        assert_eq!(numeric_escape(b"<alpha>"), None);
    }
}
