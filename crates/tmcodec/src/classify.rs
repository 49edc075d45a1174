//! Byte classification.
//!
//! The high half of the universal encoding follows the Cork (T1) layout:
//! `0x80..0x9F` are upper-case letters whose lower-case partner sits exactly
//! 32 positions higher in `0xA0..0xBF`, and `0xC0..0xFF` mirrors Latin-1,
//! again with upper case 32 below lower case. Four slots in that range hold
//! non-letters: `0x9F` (section sign), `0xBD` and `0xBE` (inverted
//! punctuation) and `0xBF` (pound sign).
//!
//! String predicates are false for the empty string.

/// Which repertoire counts as alphabetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Charset {
    /// `a..=z` and `A..=Z` only.
    Ascii,
    /// ASCII letters plus every high byte except the four reserved symbols.
    Iso,
    /// Bytes the universal encoding assigns a case to.
    Universal,
}

impl Charset {
    /// Alphabetic test for one byte under this repertoire.
    #[must_use]
    pub fn is_alpha(self, c: u8) -> bool {
        match self {
            Charset::Ascii => is_alpha(c),
            Charset::Iso => is_iso_alpha(c),
            Charset::Universal => is_locase(c) || is_upcase(c),
        }
    }

    /// Whole-string form of [`Charset::is_alpha`].
    #[must_use]
    pub fn is_alpha_str(self, s: &[u8]) -> bool {
        all_bytes(s, |c| self.is_alpha(c))
    }
}

#[must_use]
pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// ASCII letters and every byte `>= 128` other than 159, 189, 190 and 191.
#[must_use]
pub fn is_iso_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic() || (c >= 128 && !matches!(c, 159 | 189 | 190 | 191))
}

#[must_use]
pub fn is_locase(c: u8) -> bool {
    c.is_ascii_lowercase() || (160..189).contains(&c) || c >= 224
}

/// Upper-case letters. `0x9D` (dotted I) and `0x9E` (d with stroke) have no
/// partner 32 positions up (`0xBD` is `¡`, `0xBE` is `¿`), so they are left
/// out of the `0x80..0x9F` block.
#[must_use]
pub fn is_upcase(c: u8) -> bool {
    c.is_ascii_uppercase() || (128..157).contains(&c) || (192..224).contains(&c)
}

#[must_use]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

#[must_use]
pub fn is_hex_digit(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

/// Digits and the decimal point.
#[must_use]
pub fn is_numeric(c: u8) -> bool {
    c.is_ascii_digit() || c == b'.'
}

#[must_use]
pub fn is_punctuation(c: u8) -> bool {
    matches!(c, b'.' | b',' | b':' | b'\'' | b'`' | b';' | b'!' | b'?')
}

/// Space, tab, line feed and carriage return.
#[must_use]
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r')
}

/// Bytes that may appear verbatim in an XML name produced by
/// [`tm_to_xml_name`](crate::transform::tm_to_xml_name).
#[must_use]
pub fn is_xml_name(c: u8) -> bool {
    is_alpha(c) || is_numeric(c) || c == b'-' || c == b':'
}

fn all_bytes(s: &[u8], pred: impl Fn(u8) -> bool) -> bool {
    !s.is_empty() && s.iter().all(|&c| pred(c))
}

#[must_use]
pub fn is_alpha_str(s: &[u8]) -> bool {
    all_bytes(s, is_alpha)
}

/// True when every byte is in `a..=z`.
#[must_use]
pub fn is_locase_alpha_str(s: &[u8]) -> bool {
    all_bytes(s, |c| c.is_ascii_lowercase())
}

#[must_use]
pub fn is_iso_alpha_str(s: &[u8]) -> bool {
    all_bytes(s, is_iso_alpha)
}

#[must_use]
pub fn is_numeric_str(s: &[u8]) -> bool {
    all_bytes(s, is_numeric)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn iso_alpha_excludes_reserved_symbols() {
        for c in 128..=255u8 {
            let reserved = matches!(c, 159 | 189 | 190 | 191);
            assert_eq!(is_iso_alpha(c), !reserved, "byte {c}");
        }
        assert!(!is_iso_alpha(b'1'));
    }

    #[test]
    fn case_classes_partition_high_letters() {
        for c in 128..=255u8 {
            assert!(!(is_locase(c) && is_upcase(c)), "byte {c} in both classes");
            if is_upcase(c) {
                assert!(is_locase(c + 32), "byte {c} has no lower-case partner");
            }
        }
        // bytes without a partner 32 positions away carry no case
        for c in [157u8, 158, 159, 189, 190, 191] {
            assert!(!is_locase(c) && !is_upcase(c), "byte {c}");
        }
    }

    #[rstest]
    #[case(b"abc", true)]
    #[case(b"aBc", true)]
    #[case(b"ab1", false)]
    #[case(b"", false)]
    fn alpha_strings(#[case] s: &[u8], #[case] expected: bool) {
        assert_eq!(is_alpha_str(s), expected);
    }

    #[rstest]
    #[case(b"3.14", true)]
    #[case(b"..", true)]
    #[case(b"1e3", false)]
    #[case(b"", false)]
    fn numeric_strings(#[case] s: &[u8], #[case] expected: bool) {
        assert_eq!(is_numeric_str(s), expected);
    }

    #[test]
    fn locase_alpha_rejects_upper_and_high_bytes() {
        assert!(is_locase_alpha_str(b"word"));
        assert!(!is_locase_alpha_str(b"Word"));
        assert!(!is_locase_alpha_str(b"\xe9t\xe9"));
        assert!(is_iso_alpha_str(b"\xe9t\xe9"));
    }

    #[test]
    fn charset_dispatch() {
        assert!(!Charset::Ascii.is_alpha(0xE9));
        assert!(Charset::Iso.is_alpha(0xE9));
        assert!(Charset::Universal.is_alpha(0xE9));
        assert!(Charset::Iso.is_alpha(0xBC));
        assert!(Charset::Universal.is_alpha(0xBC));
        assert!(!Charset::Universal.is_alpha(0x9F));
        assert!(!Charset::Ascii.is_alpha_str(b""));
    }

    #[test]
    fn punctuation_and_space() {
        for c in b".,:'`;!?" {
            assert!(is_punctuation(*c));
        }
        assert!(!is_punctuation(b'-'));
        assert!(is_space(b'\r'));
        assert!(!is_space(0x0B));
    }
}
