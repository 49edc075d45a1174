use alloc::vec::Vec;

use bstr::{BStr, BString, ByteSlice};
use log::debug;

use crate::{
    classify::{is_hex_digit, is_space, is_xml_name},
    codepage::{cork_to_unicode, cork_to_utf8, utf8_to_cork},
    scanner::LogicalChars,
};

fn push_decimal(r: &mut Vec<u8>, c: u8) {
    if c >= 100 {
        r.push(b'0' + c / 100);
    }
    if c >= 10 {
        r.push(b'0' + c / 10 % 10);
    }
    r.push(b'0' + c % 10);
}

/// Makes `s` usable as an XML name: bytes outside letters, digits, `.`,
/// `-` and `:` are written as their decimal value between underscores.
///
/// ```rust
/// use tmcodec::transform::{tm_to_xml_name, xml_name_to_tm};
///
/// assert_eq!(tm_to_xml_name(b"my tag"), "my_32_tag");
/// assert_eq!(xml_name_to_tm(b"my_32_tag"), "my tag");
/// ```
#[must_use]
pub fn tm_to_xml_name(s: &[u8]) -> BString {
    let mut r = Vec::with_capacity(s.len());
    for &c in s {
        if is_xml_name(c) {
            r.push(c);
        } else {
            r.push(b'_');
            push_decimal(&mut r, c);
            r.push(b'_');
        }
    }
    r.into()
}

/// Inverse of [`tm_to_xml_name`]. A decimal run that is not closed by `_`
/// extends to the end of the string; values wrap modulo 256.
#[must_use]
pub fn xml_name_to_tm(s: &[u8]) -> BString {
    let mut r = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        if s[i] == b'_' {
            let start = i + 1;
            let end = s[start..].find_byte(b'_').map_or(s.len(), |k| start + k);
            let value = s[start..end]
                .iter()
                .filter(|c| c.is_ascii_digit())
                .fold(0u8, |acc, &d| acc.wrapping_mul(10).wrapping_add(d - b'0'));
            r.push(value);
            i = end + 1;
        } else {
            r.push(s[i]);
            i += 1;
        }
    }
    r.into()
}

/// Flat entity form of universal text: every escape unit `<name>` becomes
/// `&name;` with `name` passed through [`tm_to_xml_name`], and `&`, `>` are
/// escaped.
#[must_use]
pub fn old_tm_to_xml_cdata(s: &[u8]) -> BString {
    let mut r = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        match s[i] {
            b'&' => r.extend_from_slice(b"&amp;"),
            b'>' => r.extend_from_slice(b"&gt;"),
            b'<' => {
                let start = i + 1;
                let end = s[start..].find_byte(b'>').map_or(s.len(), |k| start + k);
                r.push(b'&');
                r.extend_from_slice(&tm_to_xml_name(&s[start..end]));
                r.push(b';');
                i = end;
            }
            c => r.push(c),
        }
        i += 1;
    }
    r.into()
}

/// Parses the body of a `&#...;` reference: `#x` or `#X` for hexadecimal,
/// otherwise decimal.
fn numeric_reference(body: &[u8]) -> Option<char> {
    let (digits, radix) = match body {
        [b'x' | b'X', rest @ ..] => (rest, 16),
        _ => (body, 10),
    };
    if digits.is_empty() {
        return None;
    }
    let mut code = 0u32;
    for &d in digits {
        let v = char::from(d).to_digit(radix)?;
        code = code.checked_mul(radix)?.checked_add(v)?;
    }
    char::from_u32(code)
}

fn push_entity(r: &mut Vec<u8>, name: &[u8]) {
    match name {
        b"amp" => r.push(b'&'),
        b"lt" => r.extend_from_slice(b"<less>"),
        b"gt" => r.extend_from_slice(b"<gtr>"),
        b"quot" => r.push(b'"'),
        b"apos" => r.push(b'\''),
        [b'#', body @ ..] => match numeric_reference(body) {
            Some(ch) => {
                let mut buf = [0u8; 4];
                r.extend_from_slice(&utf8_to_cork(ch.encode_utf8(&mut buf).as_bytes()));
            }
            None => {
                debug!("malformed character reference &{};", name.as_bstr());
                push_named(r, name);
            }
        },
        _ => push_named(r, name),
    }
}

fn push_named(r: &mut Vec<u8>, name: &[u8]) {
    r.push(b'<');
    r.extend_from_slice(&xml_name_to_tm(name));
    r.push(b'>');
}

/// Universal text from XML character data whose unescaped bytes are
/// already in the universal encoding.
///
/// Literal `<` and `>` become `<less>` and `<gtr>`. The predefined entities
/// map to their characters, numeric references to the universal form of the
/// scalar they name, and any other `&name;` to the escape unit `<name>`.
/// Inverts [`old_tm_to_xml_cdata`].
///
/// ```rust
/// use tmcodec::transform::xml_cdata_to_tm;
///
/// assert_eq!(
///     xml_cdata_to_tm(b"a &lt; b &amp;&alpha; &#x3B1;&#233;"),
///     &b"a <less> b &<alpha> <#3B1>\xe9"[..]
/// );
/// ```
#[must_use]
pub fn xml_cdata_to_tm(s: &[u8]) -> BString {
    let mut r = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        match s[i] {
            b'<' => r.extend_from_slice(b"<less>"),
            b'>' => r.extend_from_slice(b"<gtr>"),
            b'&' => {
                let start = i + 1;
                let end = s[start..].find_byte(b';').map_or(s.len(), |k| start + k);
                push_entity(&mut r, &s[start..end]);
                i = end;
            }
            c => r.push(c),
        }
        i += 1;
    }
    r.into()
}

/// One run of [`Cdata`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CdataPiece {
    /// UTF-8 text, not yet XML escaped.
    Text(BString),
    /// Name of a symbol with no exact UTF-8 form, without its brackets.
    Symbol(BString),
}

/// Universal text split into UTF-8 runs and symbols, as produced by
/// [`tm_to_xml_cdata`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cdata {
    pieces: Vec<CdataPiece>,
}

impl Cdata {
    #[must_use]
    pub fn pieces(&self) -> &[CdataPiece] {
        &self.pieces
    }

    #[must_use]
    pub fn into_pieces(self) -> Vec<CdataPiece> {
        self.pieces
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The text when `self` holds no symbols.
    #[must_use]
    pub fn as_text(&self) -> Option<&BStr> {
        match self.pieces.as_slice() {
            [] => Some(b"".as_bstr()),
            [CdataPiece::Text(t)] => Some(t.as_bstr()),
            _ => None,
        }
    }

    fn push_text(&mut self, bytes: &[u8]) {
        if let Some(CdataPiece::Text(t)) = self.pieces.last_mut() {
            t.extend_from_slice(bytes);
        } else {
            self.pieces.push(CdataPiece::Text(bytes.into()));
        }
    }

    /// Renders XML character data.
    ///
    /// Text is escaped for `&`, `<` and `>`. A symbol whose name is `#`
    /// followed by hex digits becomes a numeric character reference; any
    /// other symbol becomes a `<tm-sym>` element.
    #[must_use]
    pub fn to_xml(&self) -> BString {
        let mut r = Vec::new();
        for piece in &self.pieces {
            match piece {
                CdataPiece::Text(t) => escape_text(&mut r, t),
                CdataPiece::Symbol(name) => match name.strip_prefix(b"#") {
                    Some(hex) if !hex.is_empty() && hex.iter().all(|&c| is_hex_digit(c)) => {
                        r.extend_from_slice(b"&#x");
                        r.extend_from_slice(hex);
                        r.push(b';');
                    }
                    _ => {
                        r.extend_from_slice(b"<tm-sym>");
                        escape_text(&mut r, name);
                        r.extend_from_slice(b"</tm-sym>");
                    }
                },
            }
        }
        r.into()
    }
}

fn escape_text(r: &mut Vec<u8>, t: &[u8]) {
    for &c in t {
        match c {
            b'&' => r.extend_from_slice(b"&amp;"),
            b'<' => r.extend_from_slice(b"&lt;"),
            b'>' => r.extend_from_slice(b"&gt;"),
            _ => r.push(c),
        }
    }
}

/// Splits universal text into UTF-8 text and symbols.
///
/// Single bytes are converted through the universal table. An escape unit
/// is kept as text when its UTF-8 form differs from it and converts back to
/// exactly the same unit (`<less>`, `<#3B1>`); otherwise it becomes a
/// symbol. An unterminated unit becomes a symbol named by everything after
/// its `<`.
///
/// ```rust
/// use tmcodec::{CdataPiece, transform::tm_to_xml_cdata};
///
/// let cdata = tm_to_xml_cdata(b"x<less>y <alpha>");
/// assert_eq!(
///     cdata.pieces(),
///     [CdataPiece::Text("x<y ".into()), CdataPiece::Symbol("alpha".into())]
/// );
/// assert_eq!(cdata.to_xml(), "x&lt;y <tm-sym>alpha</tm-sym>");
/// ```
#[must_use]
pub fn tm_to_xml_cdata(s: &[u8]) -> Cdata {
    let mut cdata = Cdata::default();
    let mut buf = [0u8; 4];
    for unit in LogicalChars::new(s) {
        let name = match unit {
            [b'<', inner @ .., b'>'] => {
                let utf8 = cork_to_utf8(unit);
                if utf8 != unit && utf8_to_cork(&utf8) == unit {
                    cdata.push_text(&utf8);
                    continue;
                }
                inner
            }
            [b'<', rest @ ..] => {
                debug!("unterminated escape {}", unit.as_bstr());
                rest
            }
            [c] => {
                cdata.push_text(cork_to_unicode(*c).encode_utf8(&mut buf).as_bytes());
                continue;
            }
            _ => unit,
        };
        cdata.pieces.push(CdataPiece::Symbol(name.into()));
    }
    cdata
}

/// Collapses each whitespace run to one space. With `first` leading
/// whitespace is dropped, with `last` trailing whitespace is dropped.
#[must_use]
pub fn xml_unspace(s: &[u8], first: bool, last: bool) -> BString {
    let mut r = Vec::with_capacity(s.len());
    let mut i = 0;
    let n = s.len();
    if first {
        while i < n && is_space(s[i]) {
            i += 1;
        }
    }
    while i < n {
        if is_space(s[i]) {
            while i < n && is_space(s[i]) {
                i += 1;
            }
            if i < n || !last {
                r.push(b' ');
            }
        } else {
            r.push(s[i]);
            i += 1;
        }
    }
    r.into()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn xml_names_round_trip_every_byte() {
        let all: Vec<u8> = (0..=255u8).collect();
        let name = tm_to_xml_name(&all);
        assert!(name.iter().all(|&c| is_xml_name(c) || c == b'_'));
        assert_eq!(xml_name_to_tm(&name), all);
    }

    #[test]
    fn xml_name_digits_after_escape() {
        assert_eq!(tm_to_xml_name(b"_1"), "_95_1");
        assert_eq!(xml_name_to_tm(b"_95_1"), "_1");
        assert_eq!(xml_name_to_tm(b"a_300_"), "a,");
        assert_eq!(xml_name_to_tm(b"a_65"), "aA");
    }

    #[test]
    fn old_cdata_form() {
        assert_eq!(old_tm_to_xml_cdata(b"a&b<alpha>c>d"), "a&amp;b&alpha;c&gt;d");
        assert_eq!(old_tm_to_xml_cdata(b"<#3B1>"), "&_35_3B1;");
        assert_eq!(old_tm_to_xml_cdata(b"x<open"), "x&open;");
    }

    #[rstest]
    #[case(b"a&b<alpha>c")]
    #[case(b"<less>x<gtr>")]
    #[case(b"<#3B1> and <big-sum>")]
    fn old_cdata_round_trip(#[case] s: &[u8]) {
        assert_eq!(xml_cdata_to_tm(&old_tm_to_xml_cdata(s)), s);
    }

    #[rstest]
    #[case(b"&quot;&apos;", "\"'")]
    #[case(b"&#60;", "<less>")]
    #[case(b"&#x20AC;", "<#20AC>")]
    #[case(b"&#xD800;", "<#xD800>")]
    #[case(b"&#;", "<#>")]
    #[case(b"tail &amp", "tail &")]
    fn entities(#[case] s: &[u8], #[case] expected: &str) {
        assert_eq!(xml_cdata_to_tm(s), expected);
    }

    #[test]
    fn cdata_prefers_exact_utf8() {
        let cdata = tm_to_xml_cdata(b"\xe9<#3B1><#3b1><gtr>&");
        assert_eq!(
            cdata.pieces(),
            [
                CdataPiece::Text("é\u{3b1}".into()),
                CdataPiece::Symbol("#3b1".into()),
                CdataPiece::Text(">&".into()),
            ]
        );
        assert_eq!(cdata.to_xml(), "é\u{3b1}&#x3b1;&gt;&amp;");
    }

    #[test]
    fn cdata_unterminated_and_empty() {
        let cdata = tm_to_xml_cdata(b"a<b&c");
        assert_eq!(
            cdata.pieces(),
            [CdataPiece::Text("a".into()), CdataPiece::Symbol("b&c".into())]
        );
        assert_eq!(cdata.to_xml(), "a<tm-sym>b&amp;c</tm-sym>");
        assert!(tm_to_xml_cdata(b"").is_empty());
        assert_eq!(tm_to_xml_cdata(b"").as_text(), Some(b"".as_bstr()));
        assert_eq!(cdata.as_text(), None);
    }

    #[rstest]
    #[case(false, false, " a b ")]
    #[case(true, false, "a b ")]
    #[case(false, true, " a b")]
    #[case(true, true, "a b")]
    fn unspace(#[case] first: bool, #[case] last: bool, #[case] expected: &str) {
        assert_eq!(xml_unspace(b" \n a \t\r b  ", first, last), expected);
    }
}
