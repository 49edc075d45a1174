//! Counter renderings and hexadecimal conversion.

use alloc::{format, vec::Vec};

use bstr::BString;

use crate::case::upcase_all;

const ONES: [&[u8]; 10] = [b"", b"i", b"ii", b"iii", b"iv", b"v", b"vi", b"vii", b"viii", b"ix"];
const TENS: [&[u8]; 10] = [b"", b"x", b"xx", b"xxx", b"xl", b"l", b"lx", b"lxx", b"lxxx", b"xc"];
const HUNDREDS: [&[u8]; 10] = [b"", b"c", b"cc", b"ccc", b"cd", b"d", b"dc", b"dcc", b"dccc", b"cm"];

/// Lower-case roman numeral.
///
/// Zero is `o`, negative numbers get a leading `-`, and every full thousand
/// above 1000 adds an `m`. Within a thousand the subtractive short forms
/// `im` (999), `id` (499) and `ic`/`il` for 99 and 49 past a hundred are
/// used.
///
/// ```rust
/// use tmcodec::numbering::roman_nr;
///
/// assert_eq!(roman_nr(4), "iv");
/// assert_eq!(roman_nr(1987), "mcmlxxxvii");
/// assert_eq!(roman_nr(199), "cic");
/// ```
#[must_use]
pub fn roman_nr(nr: i32) -> BString {
    let mut r = Vec::new();
    if nr < 0 {
        r.push(b'-');
    }
    let mut nr = nr.unsigned_abs() as usize;
    if nr == 0 {
        return BString::from("o");
    }
    while nr > 1000 {
        r.push(b'm');
        nr -= 1000;
    }
    match nr {
        1000 => r.push(b'm'),
        999 => r.extend_from_slice(b"im"),
        499 => r.extend_from_slice(b"id"),
        _ if nr % 100 == 99 => {
            r.extend_from_slice(HUNDREDS[nr / 100]);
            r.extend_from_slice(b"ic");
        }
        _ if nr % 100 == 49 => {
            r.extend_from_slice(HUNDREDS[nr / 100]);
            r.extend_from_slice(b"il");
        }
        _ => {
            r.extend_from_slice(HUNDREDS[nr / 100]);
            r.extend_from_slice(TENS[nr % 100 / 10]);
            r.extend_from_slice(ONES[nr % 10]);
        }
    }
    r.into()
}

#[must_use]
pub fn upper_roman_nr(nr: i32) -> BString {
    upcase_all(&roman_nr(nr))
}

/// Bijective base-26 letters: 1 is `a`, 26 is `z`, 27 is `aa`. Zero is `0`.
#[must_use]
pub fn alpha_nr(nr: i32) -> BString {
    if nr == 0 {
        return BString::from("0");
    }
    let mut digits = Vec::new();
    let mut n = nr.unsigned_abs();
    while n > 0 {
        let d = (n - 1) % 26;
        digits.push(b'a' + d as u8);
        n = (n - 1) / 26;
    }
    if nr < 0 {
        digits.push(b'-');
    }
    digits.reverse();
    digits.into()
}

#[must_use]
pub fn upper_alpha_nr(nr: i32) -> BString {
    upcase_all(&alpha_nr(nr))
}

const FNSYMBOLS: [&[u8]; 6] = [
    b"<asterisk>",
    b"<dag>",
    b"<ddag>",
    b"<paragraph>",
    b"<endofline>",
    b"||",
];

/// Footnote symbol for the `nr`-th footnote: six symbols, each repeated once
/// more on every pass through the cycle. The sign is ignored; 0 renders as
/// the empty string.
#[must_use]
pub fn fnsymbol_nr(nr: i32) -> BString {
    let nr = nr.unsigned_abs() as usize;
    if nr == 0 {
        return BString::default();
    }
    FNSYMBOLS[(nr - 1) % 6].repeat((nr - 1) / 6 + 1).into()
}

/// Upper-case hexadecimal with a leading `-` for negative values.
#[must_use]
pub fn as_hexadecimal(i: i64) -> BString {
    if i < 0 {
        format!("-{:X}", i.unsigned_abs()).into()
    } else {
        format!("{i:X}").into()
    }
}

/// The lowest `len` hex digits of `i` in two's complement, zero padded.
#[must_use]
pub fn as_hexadecimal_padded(i: i64, len: usize) -> BString {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let fill = if i < 0 { -1 } else { 0 };
    (0..len)
        .rev()
        .map(|k| {
            let shifted = u32::try_from(4 * k)
                .ok()
                .and_then(|sh| i.checked_shr(sh))
                .unwrap_or(fill);
            HEX[(shifted & 15) as usize]
        })
        .collect::<Vec<u8>>()
        .into()
}

/// Parses hexadecimal digits of either case, with an optional leading `-`.
///
/// Every byte shifts the accumulator by one digit; bytes that are not hex
/// digits contribute zero. Overflow wraps.
#[must_use]
pub fn from_hexadecimal(s: &[u8]) -> i64 {
    if let Some(rest) = s.strip_prefix(b"-") {
        return from_hexadecimal(rest).wrapping_neg();
    }
    s.iter().fold(0i64, |acc, &c| {
        let d = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => 0,
        };
        acc.wrapping_shl(4) | i64::from(d)
    })
}
