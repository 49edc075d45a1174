use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::{
    arbitrary::{Unit, render},
    quickcheck_tests,
};
use crate::scanner::{
    LogicalChars, logical_length, nth_from_end, nth_logical_unit, recompose, search_forward,
    step_backward, step_forward, tokenize,
};

/// Property: tokenizing any byte string and concatenating the pieces gives
/// the input back, and the piece count is the logical length.
#[test]
fn tokenize_recompose_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(s: Vec<u8>) -> bool {
        let units = tokenize(&s);
        recompose(&units) == s && units.len() == logical_length(&s)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: on well-formed text, stepping forwards and backwards visits
/// exactly the unit boundaries, and random access agrees with iteration.
#[test]
fn stepping_lands_on_boundaries_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(units: Vec<Unit>) -> bool {
        let s = render(&units);
        let mut boundaries = alloc::vec![0];
        for unit in &units {
            let last = boundaries.last().copied().unwrap_or(0);
            boundaries.push(last + unit.bytes().len());
        }

        let forward_ok = boundaries
            .windows(2)
            .all(|w| step_forward(&s, w[0]) == w[1]);
        let backward_ok = boundaries
            .windows(2)
            .all(|w| step_backward(&s, w[1]) == w[0]);
        let access_ok = units.iter().enumerate().all(|(k, unit)| {
            nth_logical_unit(&s, k) == unit.bytes().as_slice()
                && nth_from_end(&s, units.len() - 1 - k) == unit.bytes().as_slice()
        });
        forward_ok && backward_ok && access_ok && logical_length(&s) == units.len()
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<Unit>) -> bool);
}

/// Property: every position reported by `search_forward` is a unit boundary.
#[test]
fn search_matches_start_on_boundaries_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(units: Vec<Unit>, needle: Vec<u8>) -> bool {
        let s = render(&units);
        let needle = &needle[..needle.len().min(3)];
        let mut pos = 0;
        let mut boundaries = Vec::new();
        let mut it = LogicalChars::new(&s);
        loop {
            boundaries.push(it.offset());
            if it.next().is_none() {
                break;
            }
        }
        while let Some(found) = search_forward(needle, pos, &s) {
            if !boundaries.contains(&found) || !s[found..].starts_with(needle) {
                return false;
            }
            if found >= s.len() {
                break;
            }
            pos = step_forward(&s, found);
        }
        true
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<Unit>, Vec<u8>) -> bool);
}
