mod property_codepage;
mod property_scanner;

/// Case count for property tests: more on CI, a handful under miri.
fn quickcheck_tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}
