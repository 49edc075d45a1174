//! Fixed 128-entry tables for the high half (`0x80..=0xFF`) of each
//! codepage. Index with `byte - 0x80`.

/// ISO-8859-2 high half to universal (Cork). Spacing accents map to the
/// Cork accent glyphs in the control range; bytes with no image become a
/// space.
#[rustfmt::skip]
pub(super) static LATIN2_TO_CORK: [u8; 128] = [
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, // 0x80
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, // 0x88
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, // 0x90
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, // 0x98
    0x20, 0x81, 0x08, 0x8A, 0x20, 0x89, 0x91, 0x9F, // 0xA0
    0x04, 0x92, 0x93, 0x94, 0x99, 0x7F, 0x9A, 0x9B, // 0xA8
    0x20, 0xA1, 0x0C, 0xAA, 0x01, 0xA9, 0xB1, 0x07, // 0xB0
    0x0B, 0xB2, 0xB3, 0xB4, 0xB9, 0x05, 0xBA, 0xBB, // 0xB8
    0x8F, 0xC1, 0xC2, 0x80, 0xC4, 0x88, 0x82, 0xC7, // 0xC0
    0x83, 0xC9, 0x86, 0xCB, 0x85, 0xCD, 0xCE, 0x84, // 0xC8
    0xD0, 0x8B, 0x8C, 0xD3, 0xD4, 0x8E, 0xD6, 0x20, // 0xD0
    0x90, 0x97, 0xDA, 0x96, 0xDC, 0xDD, 0x95, 0xFF, // 0xD8
    0xAF, 0xE1, 0xE2, 0xA0, 0xE4, 0xA8, 0xA2, 0xE7, // 0xE0
    0xA3, 0xE9, 0xA6, 0xEB, 0xA5, 0xED, 0xEE, 0xA4, // 0xE8
    0x9E, 0xAB, 0xAC, 0xF3, 0xF4, 0xAE, 0xF6, 0x20, // 0xF0
    0xB0, 0xB7, 0xFA, 0xB6, 0xFC, 0xFD, 0xB5, 0x0A, // 0xF8
];

/// Universal (Cork) high half to ISO-8859-2. Letters missing from Latin-2
/// fall back to their unaccented ASCII base letter, anything else to a space.
#[rustfmt::skip]
pub(super) static CORK_TO_LATIN2: [u8; 128] = [
    0xC3, 0xA1, 0xC6, 0xC8, 0xCF, 0xCC, 0xCA, 0x47, // 0x80
    0xC5, 0xA5, 0xA3, 0xD1, 0xD2, 0x20, 0xD5, 0xC0, // 0x88
    0xD8, 0xA6, 0xA9, 0xAA, 0xAB, 0xDE, 0xDB, 0xD9, // 0x90
    0x59, 0xAC, 0xAE, 0xAF, 0x20, 0x49, 0xF0, 0xA7, // 0x98
    0xE3, 0xB1, 0xE6, 0xE8, 0xEF, 0xEC, 0xEA, 0x67, // 0xA0
    0xE5, 0xB5, 0xB3, 0xF1, 0xF2, 0x20, 0xF5, 0xE0, // 0xA8
    0xF8, 0xB6, 0xB9, 0xBA, 0xBB, 0xFE, 0xFB, 0xF9, // 0xB0
    0x79, 0xBC, 0xBE, 0xBF, 0x20, 0x20, 0x20, 0x20, // 0xB8
    0x41, 0xC1, 0xC2, 0x41, 0xC4, 0x41, 0x20, 0xC7, // 0xC0
    0x45, 0xC9, 0x45, 0xCB, 0x49, 0xCD, 0xCE, 0x49, // 0xC8
    0xD0, 0x4E, 0x4F, 0xD3, 0xD4, 0x4F, 0xD6, 0x20, // 0xD0
    0x20, 0x55, 0xDA, 0x55, 0xDC, 0xDD, 0x20, 0x20, // 0xD8
    0x61, 0xE1, 0xE2, 0x61, 0xE4, 0x61, 0x20, 0xE7, // 0xE0
    0x65, 0xE9, 0x65, 0xEB, 0x69, 0xED, 0xEE, 0x69, // 0xE8
    0x20, 0x6E, 0x6F, 0xF3, 0xF4, 0x6F, 0xF6, 0x20, // 0xF0
    0x20, 0x75, 0xFA, 0x75, 0xFC, 0xFD, 0x20, 0xDF, // 0xF8
];

/// KOI8-R high half to ISO-8859-5. Box drawing and other symbols without an
/// ISO-8859-5 image become `?`. The slots of `Ё`/`ё` are filler too: those
/// two letters are mapped before the table is consulted.
#[rustfmt::skip]
pub(super) static KOI8_TO_ISO: [u8; 128] = [
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0x80
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0x88
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0x90
    0x3F, 0x3F, 0xA0, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0x98
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0xA0
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0xA8
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0xB0
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0xB8
    0xEE, 0xD0, 0xD1, 0xE6, 0xD4, 0xD5, 0xE4, 0xD3, // 0xC0
    0xE5, 0xD8, 0xD9, 0xDA, 0xDB, 0xDC, 0xDD, 0xDE, // 0xC8
    0xDF, 0xEF, 0xE0, 0xE1, 0xE2, 0xE3, 0xD6, 0xD2, // 0xD0
    0xEC, 0xEB, 0xD7, 0xE8, 0xED, 0xE9, 0xE7, 0xEA, // 0xD8
    0xCE, 0xB0, 0xB1, 0xC6, 0xB4, 0xB5, 0xC4, 0xB3, // 0xE0
    0xC5, 0xB8, 0xB9, 0xBA, 0xBB, 0xBC, 0xBD, 0xBE, // 0xE8
    0xBF, 0xCF, 0xC0, 0xC1, 0xC2, 0xC3, 0xB6, 0xB2, // 0xF0
    0xCC, 0xCB, 0xB7, 0xC8, 0xCD, 0xC9, 0xC7, 0xCA, // 0xF8
];

/// ISO-8859-5 high half to KOI8-R, filler `?` where KOI8-R has no image.
#[rustfmt::skip]
pub(super) static ISO_TO_KOI8: [u8; 128] = [
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0x80
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0x88
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0x90
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0x98
    0x9A, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0xA0
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0xA8
    0xE1, 0xE2, 0xF7, 0xE7, 0xE4, 0xE5, 0xF6, 0xFA, // 0xB0
    0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF, 0xF0, // 0xB8
    0xF2, 0xF3, 0xF4, 0xF5, 0xE6, 0xE8, 0xE3, 0xFE, // 0xC0
    0xFB, 0xFD, 0xFF, 0xF9, 0xF8, 0xFC, 0xE0, 0xF1, // 0xC8
    0xC1, 0xC2, 0xD7, 0xC7, 0xC4, 0xC5, 0xD6, 0xDA, // 0xD0
    0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE, 0xCF, 0xD0, // 0xD8
    0xD2, 0xD3, 0xD4, 0xD5, 0xC6, 0xC8, 0xC3, 0xDE, // 0xE0
    0xDB, 0xDD, 0xDF, 0xD9, 0xD8, 0xDC, 0xC0, 0xD1, // 0xE8
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0xF0
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // 0xF8
];

/// Unicode scalar for each universal (Cork) byte `0x80..=0xFF`.
#[rustfmt::skip]
pub(super) static CORK_TO_UNICODE: [char; 128] = [
    '\u{0102}', '\u{0104}', '\u{0106}', '\u{010C}', '\u{010E}', '\u{011A}', '\u{0118}', '\u{011E}', // 0x80
    '\u{0139}', '\u{013D}', '\u{0141}', '\u{0143}', '\u{0147}', '\u{014A}', '\u{0150}', '\u{0154}', // 0x88
    '\u{0158}', '\u{015A}', '\u{0160}', '\u{015E}', '\u{0164}', '\u{0162}', '\u{0170}', '\u{016E}', // 0x90
    '\u{0178}', '\u{0179}', '\u{017D}', '\u{017B}', '\u{0132}', '\u{0130}', '\u{0111}', '\u{00A7}', // 0x98
    '\u{0103}', '\u{0105}', '\u{0107}', '\u{010D}', '\u{010F}', '\u{011B}', '\u{0119}', '\u{011F}', // 0xA0
    '\u{013A}', '\u{013E}', '\u{0142}', '\u{0144}', '\u{0148}', '\u{014B}', '\u{0151}', '\u{0155}', // 0xA8
    '\u{0159}', '\u{015B}', '\u{0161}', '\u{015F}', '\u{0165}', '\u{0163}', '\u{0171}', '\u{016F}', // 0xB0
    '\u{00FF}', '\u{017A}', '\u{017E}', '\u{017C}', '\u{0133}', '\u{00A1}', '\u{00BF}', '\u{00A3}', // 0xB8
    '\u{00C0}', '\u{00C1}', '\u{00C2}', '\u{00C3}', '\u{00C4}', '\u{00C5}', '\u{00C6}', '\u{00C7}', // 0xC0
    '\u{00C8}', '\u{00C9}', '\u{00CA}', '\u{00CB}', '\u{00CC}', '\u{00CD}', '\u{00CE}', '\u{00CF}', // 0xC8
    '\u{00D0}', '\u{00D1}', '\u{00D2}', '\u{00D3}', '\u{00D4}', '\u{00D5}', '\u{00D6}', '\u{0152}', // 0xD0
    '\u{00D8}', '\u{00D9}', '\u{00DA}', '\u{00DB}', '\u{00DC}', '\u{00DD}', '\u{00DE}', '\u{1E9E}', // 0xD8
    '\u{00E0}', '\u{00E1}', '\u{00E2}', '\u{00E3}', '\u{00E4}', '\u{00E5}', '\u{00E6}', '\u{00E7}', // 0xE0
    '\u{00E8}', '\u{00E9}', '\u{00EA}', '\u{00EB}', '\u{00EC}', '\u{00ED}', '\u{00EE}', '\u{00EF}', // 0xE8
    '\u{00F0}', '\u{00F1}', '\u{00F2}', '\u{00F3}', '\u{00F4}', '\u{00F5}', '\u{00F6}', '\u{0153}', // 0xF0
    '\u{00F8}', '\u{00F9}', '\u{00FA}', '\u{00FB}', '\u{00FC}', '\u{00FD}', '\u{00FE}', '\u{00DF}', // 0xF8
];
