use alloc::vec::Vec;

use bstr::BString;

use crate::{classify::is_hex_digit, numbering::from_hexadecimal, options::ShellFlavor};

/// [`escape_sh_with`] for the shell of the compilation target.
#[must_use]
pub fn escape_sh(s: &[u8]) -> BString {
    escape_sh_with(s, ShellFlavor::native())
}

/// Makes `s` safe to paste into a shell command line.
///
/// ```rust
/// use tmcodec::{ShellFlavor, transform::escape_sh_with};
///
/// assert_eq!(escape_sh_with(b"a b$(c)", ShellFlavor::Posix), r"a\ b\$\(c\)");
/// assert_eq!(escape_sh_with(b"a b", ShellFlavor::Windows), "\"a b\"");
/// ```
#[must_use]
pub fn escape_sh_with(s: &[u8], flavor: ShellFlavor) -> BString {
    if flavor == ShellFlavor::Windows {
        return raw_quote(s);
    }
    let mut r = Vec::with_capacity(s.len());
    for &c in s {
        match c {
            b'(' | b')' | b'<' | b'>' | b'?' | b'&' | b'$' | b'`' | b'"' | b'\\' | b' ' => {
                r.push(b'\\');
                r.push(c);
            }
            b'\n' => r.extend_from_slice(b"\\n"),
            _ => r.push(c),
        }
    }
    r.into()
}

/// Scheme string literal: wraps in double quotes and escapes `"` and `\`.
#[must_use]
pub fn scm_quote(s: &[u8]) -> BString {
    let mut r = Vec::with_capacity(s.len() + 2);
    r.push(b'"');
    for &c in s {
        if matches!(c, b'"' | b'\\') {
            r.push(b'\\');
        }
        r.push(c);
    }
    r.push(b'"');
    r.into()
}

/// Inverse of [`scm_quote`]. Input that is not wrapped in double quotes is
/// returned unchanged.
///
/// A backslash right before the closing quote is kept literally, so
/// `"a\"` unquotes to `a\`.
#[must_use]
pub fn scm_unquote(s: &[u8]) -> BString {
    let [b'"', body @ .., b'"'] = s else {
        return s.into();
    };
    let mut r = Vec::with_capacity(body.len());
    let mut i = 0;
    while i < body.len() {
        match (body[i], body.get(i + 1)) {
            (b'\\', Some(&next @ (b'\\' | b'"'))) => {
                r.push(next);
                i += 2;
            }
            (c, _) => {
                r.push(c);
                i += 1;
            }
        }
    }
    r.into()
}

/// Wraps `s` in double quotes without escaping anything.
#[must_use]
pub fn raw_quote(s: &[u8]) -> BString {
    let mut r = Vec::with_capacity(s.len() + 2);
    r.push(b'"');
    r.extend_from_slice(s);
    r.push(b'"');
    r.into()
}

/// Strips one pair of surrounding double quotes, if present.
#[must_use]
pub fn raw_unquote(s: &[u8]) -> BString {
    match s {
        [b'"', body @ .., b'"'] => body.into(),
        _ => s.into(),
    }
}

/// Prefixes the control bytes `0x02`, `0x05` and `0x1B` with an extra
/// `0x1B`.
#[must_use]
pub fn escape_generic(s: &[u8]) -> BString {
    let mut r = Vec::with_capacity(s.len());
    for &c in s {
        if matches!(c, 0x02 | 0x05 | 0x1B) {
            r.push(0x1B);
        }
        r.push(c);
    }
    r.into()
}

/// Display-safe filtering: newline and tab become a space, every other byte
/// below 32 is dropped.
#[must_use]
pub fn escape_verbatim(s: &[u8]) -> BString {
    s.iter()
        .filter_map(|&c| match c {
            b'\n' | b'\t' => Some(b' '),
            0..32 => None,
            _ => Some(c),
        })
        .collect::<Vec<u8>>()
        .into()
}

/// Backslash before every space.
#[must_use]
pub fn escape_spaces(s: &[u8]) -> BString {
    let mut r = Vec::with_capacity(s.len());
    for &c in s {
        if c == b' ' {
            r.push(b'\\');
        }
        r.push(c);
    }
    r.into()
}

/// Drops carriage returns.
#[must_use]
pub fn dos_to_better(s: &[u8]) -> BString {
    s.iter()
        .copied()
        .filter(|&c| c != b'\r')
        .collect::<Vec<u8>>()
        .into()
}

/// Replaces `\xHH` escapes, exactly two hex digits, by the byte they name.
/// An escape that ends the string is decoded too. Other backslashes are kept.
#[must_use]
pub fn unescape_guile(s: &[u8]) -> BString {
    let mut r = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        match &s[i..] {
            [b'\\', b'x', h, l, ..] if is_hex_digit(*h) && is_hex_digit(*l) => {
                let byte = from_hexadecimal(&[*h, *l]);
                r.push(u8::try_from(byte).unwrap_or_default());
                i += 4;
            }
            [c, ..] => {
                r.push(*c);
                i += 1;
            }
            [] => break,
        }
    }
    r.into()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn posix_shell_escapes() {
        assert_eq!(
            escape_sh_with(b"echo \"hi\" > `x` & ?\\\n", ShellFlavor::Posix),
            "echo\\ \\\"hi\\\"\\ \\>\\ \\`x\\`\\ \\&\\ \\?\\\\\\n"
        );
        assert_eq!(escape_sh_with(b"plain-word_1", ShellFlavor::Posix), "plain-word_1");
    }

    #[test]
    fn native_flavor_matches_target() {
        assert_eq!(escape_sh(b"a b"), escape_sh_with(b"a b", ShellFlavor::native()));
    }

    #[rstest]
    #[case(b"", "\"\"")]
    #[case(b"abc", "\"abc\"")]
    #[case(br#"say "hi""#, r#""say \"hi\"""#)]
    #[case(br"back\slash", r#""back\\slash""#)]
    fn scheme_quote(#[case] s: &[u8], #[case] expected: &str) {
        assert_eq!(scm_quote(s), expected);
        assert_eq!(scm_unquote(&scm_quote(s)), s);
    }

    #[rstest]
    #[case(b"unquoted", "unquoted")]
    #[case(b"\"", "\"")]
    #[case(br#""a\""#, r"a\")]
    #[case(br#""\q""#, r"\q")]
    fn scheme_unquote_edges(#[case] s: &[u8], #[case] expected: &str) {
        assert_eq!(scm_unquote(s), expected);
    }

    #[test]
    fn raw_quoting() {
        assert_eq!(raw_quote(b"a\"b"), "\"a\"b\"");
        assert_eq!(raw_unquote(b"\"a\"b\""), "a\"b");
        assert_eq!(raw_unquote(b"\""), "\"");
        assert_eq!(raw_unquote(b"\"\""), "");
    }

    #[test]
    fn control_filters() {
        assert_eq!(escape_generic(b"a\x02b\x1bc"), "a\x1b\x02b\x1b\x1bc");
        assert_eq!(escape_verbatim(b"a\tb\nc\x07d\r"), "a b cd");
        assert_eq!(escape_spaces(b"a b  c"), "a\\ b\\ \\ c");
        assert_eq!(dos_to_better(b"l1\r\nl2\r\n"), "l1\nl2\n");
    }

    #[test]
    fn guile_hex_escapes() {
        assert_eq!(unescape_guile(br"a\x41\x7ez"), "aA~z");
        assert_eq!(unescape_guile(br"\x4"), r"\x4");
        assert_eq!(unescape_guile(br"\xg1\\"), r"\xg1\\");
        assert_eq!(unescape_guile(br"\xe9"), &b"\xe9"[..]);
    }

    #[test]
    fn guile_escape_at_end_of_string() {
        assert_eq!(unescape_guile(br"ab\x41"), "abA");
        assert_eq!(unescape_guile(br"ab\x41\x42"), "abAB");
        assert_eq!(unescape_guile(br"ab\x4"), r"ab\x4");
    }
}
