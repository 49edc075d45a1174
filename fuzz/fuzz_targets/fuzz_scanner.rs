#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tmcodec::{
    WildcardOptions,
    binary::{parse, parse_array},
    scanner, search, transform,
};

#[derive(Debug, Arbitrary)]
struct Input {
    text: Vec<u8>,
    pattern: Vec<u8>,
    pos: u16,
    budget: u8,
}

fn check_scanner(s: &[u8], pos: usize) {
    let units = scanner::tokenize(s);
    assert_eq!(scanner::recompose(&units), s);
    assert_eq!(units.len(), scanner::logical_length(s));

    let forward = scanner::step_forward(s, pos);
    if pos < s.len() {
        assert!(forward > pos && forward <= s.len());
    }
    let backward = scanner::step_backward(s, pos);
    if pos > 0 && pos <= s.len() {
        assert!(backward < pos);
    }

    let halves = scanner::wrap_split(s);
    assert_eq!(halves.concat(), s);
}

fn check_transforms(s: &[u8]) {
    assert_eq!(transform::tm_decode(&transform::tm_encode(s)), s);
    assert_eq!(transform::xml_name_to_tm(&transform::tm_to_xml_name(s)), s);
    assert_eq!(transform::scm_unquote(&transform::scm_quote(s)), s);

    // Total on arbitrary input.
    let _ = transform::tm_to_xml_cdata(s).to_xml();
    let _ = transform::xml_cdata_to_tm(s);
    let _ = transform::tm_correct(s);
    let _ = transform::unescape_guile(s);
}

fn check_search(input: &Input) {
    let options = WildcardOptions {
        step_budget: Some(usize::from(input.budget) * 64),
    };
    let _ = search::match_wildcard_with(&input.text, &input.pattern, &options);
    if !input.pattern.is_empty() {
        let parts = search::tokenize(&input.text, &input.pattern);
        assert_eq!(search::recompose(&parts, &input.pattern), input.text);
    }
    let mut i = usize::from(input.pos).min(input.text.len());
    let start = i;
    if search::read_int(&input.text, &mut i).is_none() {
        assert_eq!(i, start);
    }
}

fn check_binary(buf: &[u8], pos: usize) {
    let mut cursor = pos;
    if parse::<i32>(buf, &mut cursor).is_err() {
        assert_eq!(cursor, pos);
    }
    let mut cursor = pos;
    if parse_array::<u16>(buf, &mut cursor, 3).is_err() {
        assert_eq!(cursor, pos);
    }
}

fuzz_target!(|input: Input| {
    let pos = usize::from(input.pos);
    check_scanner(&input.text, pos);
    check_transforms(&input.text);
    check_search(&input);
    check_binary(&input.text, pos);
});
