use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::quickcheck_tests;
use crate::codepage::{ByteTranscoder, Koi8, cork_to_utf8, utf8_to_cork};

/// KOI8-U letters with no ISO-8859-5 image: Ґ and ґ.
const KOI8_UKRAINIAN_LOSSY: [u8; 2] = [0xAD, 0xBD];

/// Property: every KOI8 byte that decodes to something other than the
/// filler comes back unchanged, apart from the documented lossy letters.
#[test]
fn koi8_round_trip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(s: Vec<u8>, ukrainian: bool) -> bool {
        let koi8 = Koi8 {
            ukrainian,
            ..Koi8::default()
        };
        let s: Vec<u8> = s
            .into_iter()
            .filter(|&c| c == b'?' || koi8.decode_byte(c) != b'?')
            .filter(|c| !(ukrainian && KOI8_UKRAINIAN_LOSSY.contains(c)))
            .collect();
        koi8.encode(&koi8.decode(&s)) == s
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<u8>, bool) -> bool);
}

/// Property: text made of single universal bytes survives a trip through
/// UTF-8.
#[test]
fn cork_utf8_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(s: Vec<u8>) -> bool {
        let s: Vec<u8> = s.into_iter().filter(|&c| c != b'<' && c != b'>').collect();
        let utf8 = cork_to_utf8(&s);
        core::str::from_utf8(&utf8).is_ok() && utf8_to_cork(&utf8) == s
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}
