//! Whitespace trimming over concatenations of text segments.

use alloc::vec::Vec;

use bstr::BString;

use crate::search;

/// A run of text, or a concatenation of nested segments.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    /// Text.
    Leaf(BString),
    /// Children in order.
    Concat(Vec<Segment>),
}

impl Default for Segment {
    fn default() -> Self {
        Segment::Leaf(BString::default())
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        Segment::Leaf(s.into())
    }
}

impl From<&[u8]> for Segment {
    fn from(s: &[u8]) -> Self {
        Segment::Leaf(s.into())
    }
}

impl From<Vec<Segment>> for Segment {
    fn from(children: Vec<Segment>) -> Self {
        Segment::Concat(children)
    }
}

impl Segment {
    /// Whether this is an empty leaf. A concatenation is never empty, even
    /// with no children.
    #[must_use]
    pub fn is_empty_leaf(&self) -> bool {
        matches!(self, Segment::Leaf(s) if s.is_empty())
    }

    /// All leaf bytes in order.
    #[must_use]
    pub fn flatten(&self) -> BString {
        let mut r = BString::default();
        self.flatten_into(&mut r);
        r
    }

    fn flatten_into(&self, r: &mut BString) {
        match self {
            Segment::Leaf(s) => r.extend_from_slice(s),
            Segment::Concat(children) => children.iter().for_each(|c| c.flatten_into(r)),
        }
    }

    /// Removes leading whitespace. Children that trim down to an empty leaf
    /// are dropped from the front; the first surviving child is trimmed.
    #[must_use]
    pub fn trim_spaces_left(&self) -> Segment {
        match self {
            Segment::Leaf(s) => Segment::Leaf(search::trim_spaces_left(s).into()),
            Segment::Concat(children) => {
                let mut r = Vec::with_capacity(children.len());
                let mut rest = children.iter();
                for child in rest.by_ref() {
                    let trimmed = child.trim_spaces_left();
                    if !trimmed.is_empty_leaf() {
                        r.push(trimmed);
                        break;
                    }
                }
                r.extend(rest.cloned());
                collapse(r)
            }
        }
    }

    /// Mirror image of [`Segment::trim_spaces_left`].
    #[must_use]
    pub fn trim_spaces_right(&self) -> Segment {
        match self {
            Segment::Leaf(s) => Segment::Leaf(search::trim_spaces_right(s).into()),
            Segment::Concat(children) => {
                let mut r = Vec::with_capacity(children.len());
                let mut rest = children.iter().rev();
                for child in rest.by_ref() {
                    let trimmed = child.trim_spaces_right();
                    if !trimmed.is_empty_leaf() {
                        r.push(trimmed);
                        break;
                    }
                }
                r.extend(rest.cloned());
                r.reverse();
                collapse(r)
            }
        }
    }

    #[must_use]
    pub fn trim_spaces(&self) -> Segment {
        self.trim_spaces_right().trim_spaces_left()
    }
}

/// No children is an empty leaf and one child stands for itself.
fn collapse(mut children: Vec<Segment>) -> Segment {
    match children.len() {
        0 => Segment::default(),
        1 => children.pop().unwrap_or_default(),
        _ => Segment::Concat(children),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn leaves_trim_like_strings() {
        assert_eq!(Segment::from("  a b \n").trim_spaces(), Segment::from("a b"));
        assert_eq!(Segment::from(" \t").trim_spaces_left(), Segment::default());
    }

    #[test]
    fn empty_edges_are_dropped() {
        let seg = Segment::from(vec![
            Segment::from("  "),
            Segment::from(" x "),
            Segment::from("y"),
            Segment::from(" "),
        ]);
        assert_eq!(
            seg.trim_spaces_left(),
            Segment::from(vec![Segment::from("x "), Segment::from("y"), Segment::from(" ")])
        );
        assert_eq!(
            seg.trim_spaces_right(),
            Segment::from(vec![Segment::from("  "), Segment::from(" x "), Segment::from("y")])
        );
        assert_eq!(
            seg.trim_spaces(),
            Segment::from(vec![Segment::from("x "), Segment::from("y")])
        );
    }

    #[test]
    fn nested_concatenations_collapse() {
        let seg = Segment::from(vec![
            Segment::from(vec![Segment::from(" "), Segment::from(" a")]),
            Segment::from("  "),
        ]);
        assert_eq!(seg.trim_spaces(), Segment::from("a"));
        assert_eq!(Segment::Concat(vec![]).trim_spaces(), Segment::default());
        assert_eq!(seg.flatten(), "  a  ");
    }
}
