use std::ops::{Bound, RangeBounds};

use crate::seq::Sequence;

// -----------------------------------------------------------------------------
// Slice
// -----------------------------------------------------------------------------
/// Tolerant window copies out of a [Sequence].
///
/// Both window forms return a new sequence and never mutate the receiver.
/// Out-of-range inputs follow one policy:
///
/// - `start` past the end is the only absent result ([None]);
/// - `start` exactly at the end selects an empty window;
/// - an end bound past the end clamps to it;
/// - an end bound before `start` selects an empty window;
/// - arithmetic on bounds saturates instead of overflowing.
///
/// Addressing is head-relative only; there is no from-the-end index form.
///
/// Implemented for every [Sequence].
///
/// # Example
/// ```
/// use qseq::Slice;
///
/// let seq = vec!["foo", "quux", "bar", "aa"];
///
/// assert_eq!(seq.slice(0, 3), Some(vec!["foo", "quux", "bar"]));
/// assert_eq!(seq.slice_range(0..=3), Some(seq.clone()));
/// assert_eq!(seq.slice_range(0..2), Some(vec!["foo", "quux"]));
/// assert_eq!(seq.slice(5, 1), None);
/// ```
pub trait Slice: Sequence {
    /// Up to `len` elements starting at `start`, as a new sequence.
    fn slice(&self, start: usize, len: usize) -> Option<Self> {
        if start > self.len() {
            return None;
        }
        let end = start.saturating_add(len).min(self.len());
        Some(self.subseq(start, end))
    }

    /// The elements `range` selects, as a new sequence.
    ///
    /// `a..b` selects `a` through `b - 1`, `a..=b` selects `a` through `b`;
    /// the open forms follow from [RangeBounds].
    fn slice_range<R>(&self, range: R) -> Option<Self>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        if start > self.len() {
            return None;
        }
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len(),
        };
        let end = end.clamp(start, self.len());
        Some(self.subseq(start, end))
    }

    /// First element.
    #[inline]
    fn first(&self) -> Option<&Self::Elem> {
        self.get(0)
    }

    /// Last element.
    #[inline]
    fn last(&self) -> Option<&Self::Elem> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Up to `n` leading elements, as a new sequence.
    #[inline]
    fn first_n(&self, n: usize) -> Self {
        self.subseq(0, n.min(self.len()))
    }

    /// Up to `n` trailing elements, as a new sequence.
    #[inline]
    fn last_n(&self, n: usize) -> Self {
        self.subseq(self.len() - n.min(self.len()), self.len())
    }
}

impl<S: Sequence> Slice for S {}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rstest::rstest;

    use super::*;

    #[rstest_reuse::template]
    #[rstest]
    #[case::full(0, 4, Some(vec!["foo", "quux", "bar", "aa"]))]
    #[case::head(0, 3, Some(vec!["foo", "quux", "bar"]))]
    #[case::inner(1, 2, Some(vec!["quux", "bar"]))]
    #[case::empty_len(1, 0, Some(vec![]))]
    #[case::len_clamps(2, 9, Some(vec!["bar", "aa"]))]
    #[case::huge_len_clamps(3, usize::MAX, Some(vec!["aa"]))]
    #[case::start_at_size(4, 2, Some(vec![]))]
    #[case::start_past_size(5, 0, None)]
    fn start_len_cases(
        #[case] start: usize,
        #[case] len: usize,
        #[case] expected: Option<Vec<&'static str>>,
    ) {
    }

    #[rstest_reuse::apply(start_len_cases)]
    fn test_slice_on_vec(start: usize, len: usize, expected: Option<Vec<&'static str>>) {
        let seq = vec!["foo", "quux", "bar", "aa"];

        assert_eq!(seq.slice(start, len), expected);
    }

    #[rstest_reuse::apply(start_len_cases)]
    fn test_slice_on_deque(start: usize, len: usize, expected: Option<Vec<&'static str>>) {
        let seq = VecDeque::from(vec!["foo", "quux", "bar", "aa"]);

        assert_eq!(seq.slice(start, len), expected.map(VecDeque::from));
    }

    #[rstest_reuse::template]
    #[rstest]
    #[case::exclusive((Bound::Included(0), Bound::Excluded(2)), Some(vec!["foo", "quux"]))]
    #[case::inclusive((Bound::Included(0), Bound::Included(3)), Some(vec!["foo", "quux", "bar", "aa"]))]
    #[case::unbounded((Bound::Unbounded, Bound::Unbounded), Some(vec!["foo", "quux", "bar", "aa"]))]
    #[case::tail((Bound::Included(2), Bound::Unbounded), Some(vec!["bar", "aa"]))]
    #[case::head((Bound::Unbounded, Bound::Excluded(3)), Some(vec!["foo", "quux", "bar"]))]
    #[case::end_clamps((Bound::Included(1), Bound::Included(99)), Some(vec!["quux", "bar", "aa"]))]
    #[case::inverted((Bound::Included(2), Bound::Excluded(1)), Some(vec![]))]
    #[case::excluded_start((Bound::Excluded(0), Bound::Included(2)), Some(vec!["quux", "bar"]))]
    #[case::start_at_size((Bound::Included(4), Bound::Excluded(9)), Some(vec![]))]
    #[case::start_past_size((Bound::Included(5), Bound::Unbounded), None)]
    fn range_cases(
        #[case] range: (Bound<usize>, Bound<usize>),
        #[case] expected: Option<Vec<&'static str>>,
    ) {
    }

    #[rstest_reuse::apply(range_cases)]
    fn test_slice_range_on_vec(
        range: (Bound<usize>, Bound<usize>),
        expected: Option<Vec<&'static str>>,
    ) {
        let seq = vec!["foo", "quux", "bar", "aa"];

        assert_eq!(seq.slice_range(range), expected);
    }

    #[rstest_reuse::apply(range_cases)]
    fn test_slice_range_on_deque(
        range: (Bound<usize>, Bound<usize>),
        expected: Option<Vec<&'static str>>,
    ) {
        let seq = VecDeque::from(vec!["foo", "quux", "bar", "aa"]);

        assert_eq!(seq.slice_range(range), expected.map(VecDeque::from));
    }

    #[test]
    fn test_slicing_copies_independently() {
        let seq = vec![1, 2, 3];

        let mut window = seq.slice(0, 2).unwrap();
        window.replace(0, 9);

        assert_eq!(window, vec![9, 2]);
        assert_eq!(seq, vec![1, 2, 3]);
    }

    #[test]
    fn test_first_and_last() {
        let seq = vec![7, 8, 9];
        assert_eq!(seq.first(), Some(&7));
        assert_eq!(seq.last(), Some(&9));

        let empty = Vec::<i32>::new();
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn test_first_n_and_last_n_clamp() {
        let seq = vec![7, 8, 9];

        assert_eq!(seq.first_n(2), vec![7, 8]);
        assert_eq!(seq.first_n(0), Vec::new());
        assert_eq!(seq.first_n(9), seq);
        assert_eq!(seq.last_n(2), vec![8, 9]);
        assert_eq!(seq.last_n(9), seq);
        assert_eq!(Vec::<i32>::new().last_n(3), Vec::new());
    }
}
