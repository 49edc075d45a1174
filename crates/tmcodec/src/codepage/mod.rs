//! Legacy 8-bit codepage transcoders.
//!
//! Each byte transcoder is a pure per-byte map, so a string keeps its
//! length. Bytes below `0x80` are left alone (apart from the Latin `I i` of
//! [`Koi8::LEGACY_UKRAINIAN`]) and the high half goes through a fixed lookup
//! table. The tables are not exact inverses of each other; where
//! the target has no image a filler byte is produced. The ispell schemes are
//! not length preserving and live in [`Ispell`].

mod cork;
mod tables;

use alloc::vec::Vec;

use bstr::BString;

pub use cork::{cork_to_unicode, cork_to_utf8, unicode_to_cork, utf8_to_cork};

/// Per-byte transcoding between an external codepage and the internal side.
///
/// `decode` goes external → internal, `encode` internal → external. Neither
/// direction can fail.
pub trait ByteTranscoder {
    /// Maps one external byte to its internal image.
    fn decode_byte(&self, c: u8) -> u8;

    /// Maps one internal byte back to the external codepage.
    fn encode_byte(&self, c: u8) -> u8;

    fn decode(&self, s: &[u8]) -> BString {
        s.iter()
            .map(|&c| self.decode_byte(c))
            .collect::<Vec<u8>>()
            .into()
    }

    fn encode(&self, s: &[u8]) -> BString {
        s.iter()
            .map(|&c| self.encode_byte(c))
            .collect::<Vec<u8>>()
            .into()
    }
}

fn high_half(table: &[u8; 128], c: u8) -> u8 {
    if c < 0x80 {
        c
    } else {
        table[usize::from(c - 0x80)]
    }
}

/// ISO-8859-2 (Polish, Czech and other Central European text) against the
/// universal encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latin2;

impl ByteTranscoder for Latin2 {
    fn decode_byte(&self, c: u8) -> u8 {
        high_half(&tables::LATIN2_TO_CORK, c)
    }

    fn encode_byte(&self, c: u8) -> u8 {
        high_half(&tables::CORK_TO_LATIN2, c)
    }
}

const KOI8_YO_UPPER: u8 = 0xB3;
const KOI8_YO_LOWER: u8 = 0xA3;
const LEGACY_YO_UPPER: u8 = 0x9C;
const LEGACY_YO_LOWER: u8 = 0xBC;
const ISO_YO_UPPER: u8 = 0xA1;
const ISO_YO_LOWER: u8 = 0xF1;

/// KOI8-U positions of `І і Є є Ї ї Ґ ґ` and their ISO-8859-5 images.
/// ISO-8859-5 has no `Ґ`, so it decodes to `Г` and does not come back.
const UKRAINIAN: [(u8, u8); 8] = [
    (0xB6, 0xA6),
    (0xA6, 0xF6),
    (0xB4, 0xA4),
    (0xA4, 0xF4),
    (0xB7, 0xA7),
    (0xA7, 0xF7),
    (0xBD, 0xB3),
    (0xAD, 0xD3),
];

/// Same letters in the legacy layout, where `І і` are spelled with the Latin
/// `I i`.
const LEGACY_UKRAINIAN: [(u8, u8); 8] = [
    (b'I', 0xA6),
    (b'i', 0xF6),
    (0xB4, 0xA4),
    (0xA4, 0xF4),
    (0xB7, 0xA7),
    (0xA7, 0xF7),
    (0xBD, 0xB3),
    (0xAD, 0xD3),
];

/// Invertible prefix of the Ukrainian tables.
const UKRAINIAN_ENCODABLE: usize = 6;

/// Where KOI8 bytes sit on the 8-bit side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Koi8Layout {
    /// KOI8-R / KOI8-U as registered. Box drawing bytes without an
    /// ISO-8859-5 image become `?`.
    #[default]
    Standard,
    /// Layout found in older documents: `Ё ё` sit at `0x9C` and `0xBC`,
    /// Ukrainian `І і` are the Latin `I i`, and every other byte below `0xC0`
    /// passes through unchanged in both directions.
    Legacy,
}

impl Koi8Layout {
    fn yo(self) -> (u8, u8) {
        match self {
            Koi8Layout::Standard => (KOI8_YO_UPPER, KOI8_YO_LOWER),
            Koi8Layout::Legacy => (LEGACY_YO_UPPER, LEGACY_YO_LOWER),
        }
    }

    fn ukrainian(self) -> &'static [(u8, u8); 8] {
        match self {
            Koi8Layout::Standard => &UKRAINIAN,
            Koi8Layout::Legacy => &LEGACY_UKRAINIAN,
        }
    }

    /// Bytes below this bound map to themselves.
    fn identity_below(self) -> u8 {
        match self {
            Koi8Layout::Standard => 0x80,
            Koi8Layout::Legacy => 0xC0,
        }
    }

    fn lookup(self, table: &[u8; 128], c: u8) -> u8 {
        if c < self.identity_below() {
            c
        } else {
            high_half(table, c)
        }
    }
}

/// KOI8-R (or KOI8-U when `ukrainian` is set) against ISO-8859-5.
///
/// Here the "internal" side is ISO-8859-5: `decode` maps KOI8 to ISO and
/// `encode` maps back.
///
/// ```rust
/// use tmcodec::{ByteTranscoder, Koi8};
///
/// // "мир" in KOI8-R
/// let koi8 = [0xCD, 0xC9, 0xD2];
/// let iso = Koi8::RUSSIAN.decode(&koi8);
/// assert_eq!(iso, &[0xDC, 0xD8, 0xE0][..]);
/// assert_eq!(Koi8::RUSSIAN.encode(&iso), &koi8[..]);
///
/// // Ё in the legacy layout
/// assert_eq!(Koi8::LEGACY_RUSSIAN.decode(&[0x9C]), &[0xA1][..]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Koi8 {
    /// Also map the Ukrainian letters `І і Є є Ї ї Ґ ґ`.
    pub ukrainian: bool,
    /// Byte positions on the KOI8 side.
    pub layout: Koi8Layout,
}

impl Koi8 {
    /// KOI8-R.
    pub const RUSSIAN: Koi8 = Koi8 {
        ukrainian: false,
        layout: Koi8Layout::Standard,
    };
    /// KOI8-U.
    pub const UKRAINIAN: Koi8 = Koi8 {
        ukrainian: true,
        layout: Koi8Layout::Standard,
    };
    /// Russian letters in the [legacy layout](Koi8Layout::Legacy).
    pub const LEGACY_RUSSIAN: Koi8 = Koi8 {
        ukrainian: false,
        layout: Koi8Layout::Legacy,
    };
    /// Russian and Ukrainian letters in the [legacy layout](Koi8Layout::Legacy).
    pub const LEGACY_UKRAINIAN: Koi8 = Koi8 {
        ukrainian: true,
        layout: Koi8Layout::Legacy,
    };
}

impl ByteTranscoder for Koi8 {
    fn decode_byte(&self, c: u8) -> u8 {
        let (yo_upper, yo_lower) = self.layout.yo();
        if c == yo_upper {
            return ISO_YO_UPPER;
        }
        if c == yo_lower {
            return ISO_YO_LOWER;
        }
        if self.ukrainian {
            if let Some(&(_, iso)) = self.layout.ukrainian().iter().find(|(koi8, _)| *koi8 == c) {
                return iso;
            }
        }
        self.layout.lookup(&tables::KOI8_TO_ISO, c)
    }

    fn encode_byte(&self, c: u8) -> u8 {
        let (yo_upper, yo_lower) = self.layout.yo();
        match c {
            ISO_YO_UPPER => return yo_upper,
            ISO_YO_LOWER => return yo_lower,
            _ => {}
        }
        if self.ukrainian {
            if let Some(&(koi8, _)) = self.layout.ukrainian()[..UKRAINIAN_ENCODABLE]
                .iter()
                .find(|(_, iso)| *iso == c)
            {
                return koi8;
            }
        }
        self.layout.lookup(&tables::ISO_TO_KOI8, c)
    }
}

#[must_use]
pub fn il2_to_cork(s: &[u8]) -> BString {
    Latin2.decode(s)
}

#[must_use]
pub fn cork_to_il2(s: &[u8]) -> BString {
    Latin2.encode(s)
}

#[must_use]
pub fn koi8_to_iso(s: &[u8]) -> BString {
    Koi8::RUSSIAN.decode(s)
}

#[must_use]
pub fn iso_to_koi8(s: &[u8]) -> BString {
    Koi8::RUSSIAN.encode(s)
}

#[must_use]
pub fn koi8uk_to_iso(s: &[u8]) -> BString {
    Koi8::UKRAINIAN.decode(s)
}

#[must_use]
pub fn iso_to_koi8uk(s: &[u8]) -> BString {
    Koi8::UKRAINIAN.encode(s)
}

/// Digraph spellings used by ispell dictionaries.
///
/// Ispell spells accented letters as a prefix byte followed by the base
/// letter (`'e` for é in Spanish, `"a` for ä in German). German dictionaries
/// additionally keep ß at its Latin-1 position `0xDF`, whereas the universal
/// encoding puts it at `0xFF`.
///
/// ```rust
/// use tmcodec::Ispell;
///
/// let word = Ispell::Spanish.to_universal(b"ma'nana");
/// assert_eq!(word, &b"ma\xf1ana"[..]);
/// assert_eq!(Ispell::Spanish.from_universal(&word), "ma'nana");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ispell {
    Spanish,
    German,
}

const SPANISH_DIGRAPHS: &[(u8, u8)] = &[
    (b'A', 0xC1),
    (b'E', 0xC9),
    (b'I', 0xCD),
    (b'N', 0xD1),
    (b'O', 0xD3),
    (b'U', 0xDA),
    (b'Y', 0xDD),
    (b'a', 0xE1),
    (b'e', 0xE9),
    (b'i', 0xED),
    (b'n', 0xF1),
    (b'o', 0xF3),
    (b'u', 0xFA),
    (b'y', 0xFD),
];

const GERMAN_DIGRAPHS: &[(u8, u8)] = &[
    (b'A', 0xC4),
    (b'O', 0xD6),
    (b'U', 0xDC),
    (b'a', 0xE4),
    (b'o', 0xF6),
    (b'u', 0xFC),
];

const ISPELL_ESZETT: u8 = 0xDF;
const UNIVERSAL_ESZETT: u8 = 0xFF;

impl Ispell {
    fn prefix(self) -> u8 {
        match self {
            Ispell::Spanish => b'\'',
            Ispell::German => b'"',
        }
    }

    fn digraphs(self) -> &'static [(u8, u8)] {
        match self {
            Ispell::Spanish => SPANISH_DIGRAPHS,
            Ispell::German => GERMAN_DIGRAPHS,
        }
    }

    /// Collapses digraphs into single universal bytes.
    ///
    /// A prefix followed by a letter without an accented form is kept as
    /// the two original bytes; a prefix at the very end is kept as is.
    #[must_use]
    pub fn to_universal(self, s: &[u8]) -> BString {
        let prefix = self.prefix();
        let mut r = Vec::with_capacity(s.len());
        let mut i = 0;
        while i < s.len() {
            let c = s[i];
            if c == prefix && i + 1 < s.len() {
                let next = s[i + 1];
                match self.digraphs().iter().find(|(letter, _)| *letter == next) {
                    Some(&(_, accented)) => r.push(accented),
                    None => r.extend_from_slice(&[prefix, next]),
                }
                i += 2;
                continue;
            }
            if self == Ispell::German && c == ISPELL_ESZETT {
                r.push(UNIVERSAL_ESZETT);
            } else {
                r.push(c);
            }
            i += 1;
        }
        r.into()
    }

    /// Expands accented universal bytes back into digraphs.
    #[must_use]
    pub fn from_universal(self, s: &[u8]) -> BString {
        let prefix = self.prefix();
        let mut r = Vec::with_capacity(s.len());
        for &c in s {
            if let Some(&(letter, _)) = self.digraphs().iter().find(|(_, accented)| *accented == c)
            {
                r.extend_from_slice(&[prefix, letter]);
            } else if self == Ispell::German && c == UNIVERSAL_ESZETT {
                r.push(ISPELL_ESZETT);
            } else {
                r.push(c);
            }
        }
        r.into()
    }
}
