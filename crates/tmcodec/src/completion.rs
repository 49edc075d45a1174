//! Completion lists for incremental text entry.

use alloc::vec::Vec;

use bstr::BString;

/// Candidates sorted bytewise with duplicates removed.
#[must_use]
pub fn as_completions<I>(candidates: I) -> Vec<BString>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut list: Vec<BString> = candidates
        .into_iter()
        .map(|c| BString::from(c.as_ref()))
        .collect();
    list.sort_unstable();
    list.dedup();
    list
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Sorted candidates headed by their longest common prefix.
///
/// The prefix is only listed once, so when it is itself a candidate it is
/// not repeated.
///
/// ```rust
/// use tmcodec::completion::close_completions;
///
/// assert_eq!(
///     close_completions(["also", "alpha", "alphabet"]),
///     ["al", "alpha", "alphabet", "also"]
/// );
/// ```
#[must_use]
pub fn close_completions<I>(candidates: I) -> Vec<BString>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let list = as_completions(candidates);
    let Some(first) = list.first() else {
        return list;
    };
    let prefix_len = list
        .windows(2)
        .fold(first.len(), |len, pair| {
            len.min(common_prefix_len(&pair[0], &pair[1]))
        });
    let mut r = Vec::with_capacity(list.len() + 1);
    r.push(BString::from(&first[..prefix_len]));
    for candidate in list {
        if r.last() != Some(&candidate) {
            r.push(candidate);
        }
    }
    r
}

/// Candidates starting with `prefix`, with the prefix removed.
#[must_use]
pub fn strip_completions<'a, T: AsRef<[u8]>>(candidates: &'a [T], prefix: &[u8]) -> Vec<&'a [u8]> {
    candidates
        .iter()
        .filter_map(|c| c.as_ref().strip_prefix(prefix))
        .collect()
}
