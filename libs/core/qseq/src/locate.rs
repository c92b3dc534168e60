use crate::seq::Sequence;

// -----------------------------------------------------------------------------
// Locate
// -----------------------------------------------------------------------------
/// First-match index lookup over a [Sequence].
///
/// Lookup scans indices in ascending order and returns the smallest index
/// whose element matches, or [None] when nothing does. A miss is an absent
/// result, never an error. Matching on the absent value works without any
/// special casing: with `Elem = Option<T>`, `position_of(&None)` finds the
/// first absent element.
///
/// The `try_` variants take a fallible predicate; its error aborts the scan
/// and comes back to the caller untouched.
///
/// Implemented for every [Sequence].
///
/// # Example
/// ```
/// use qseq::Locate;
///
/// let seq = vec!["foo", "quux", "bar", "aa"];
///
/// assert_eq!(seq.position_of(&"quux"), Some(1));
/// assert_eq!(seq.position_of(&"nope"), None);
/// assert_eq!(seq.position_where(|s| s.len() == 2), Some(3));
/// ```
pub trait Locate: Sequence {
    /// Smallest index holding an element equal to `target`.
    #[inline]
    fn position_of(&self, target: &Self::Elem) -> Option<usize>
    where
        Self::Elem: PartialEq,
    {
        self.position_where(|elem| elem == target)
    }

    /// Smallest index whose element satisfies `pred`.
    fn position_where<P>(&self, mut pred: P) -> Option<usize>
    where
        P: FnMut(&Self::Elem) -> bool,
    {
        (0..self.len()).find(|&index| self.get(index).is_some_and(&mut pred))
    }

    /// Smallest index whose element satisfies `pred`, with a fallible `pred`.
    fn try_position_where<P, Er>(&self, mut pred: P) -> Result<Option<usize>, Er>
    where
        P: FnMut(&Self::Elem) -> Result<bool, Er>,
    {
        for index in 0..self.len() {
            if let Some(elem) = self.get(index) {
                if pred(elem)? {
                    return Ok(Some(index));
                }
            }
        }
        Ok(None)
    }

    /// Largest index holding an element equal to `target`.
    #[inline]
    fn rposition_of(&self, target: &Self::Elem) -> Option<usize>
    where
        Self::Elem: PartialEq,
    {
        self.rposition_where(|elem| elem == target)
    }

    /// Largest index whose element satisfies `pred`. Scans descending, so
    /// `pred` sees elements tail-first.
    fn rposition_where<P>(&self, mut pred: P) -> Option<usize>
    where
        P: FnMut(&Self::Elem) -> bool,
    {
        (0..self.len()).rev().find(|&index| self.get(index).is_some_and(&mut pred))
    }

    /// Largest index whose element satisfies `pred`, with a fallible `pred`.
    fn try_rposition_where<P, Er>(&self, mut pred: P) -> Result<Option<usize>, Er>
    where
        P: FnMut(&Self::Elem) -> Result<bool, Er>,
    {
        for index in (0..self.len()).rev() {
            if let Some(elem) = self.get(index) {
                if pred(elem)? {
                    return Ok(Some(index));
                }
            }
        }
        Ok(None)
    }

    /// Deferred lookup handle over this sequence.
    ///
    /// Use it when the predicate is not at hand yet: the returned [Search]
    /// carries no scan state, so it can be consumed any number of times and
    /// every consumption reads the sequence afresh.
    #[inline]
    fn search(&self) -> Search<'_, Self> {
        Search { seq: self }
    }
}

impl<S: Sequence> Locate for S {}

// -----------------------------------------------------------------------------
// Search
// -----------------------------------------------------------------------------
/// A reusable, restartable lookup over a borrowed [Sequence].
///
/// Created by [`Locate::search`]. Consuming it with [`Search::first_where`]
/// is equivalent to calling [`Locate::position_where`] directly; [`Search::iter`]
/// starts a fresh pass over `(index, element)` pairs on every call.
///
/// # Example
/// ```
/// use qseq::Locate;
///
/// let seq = vec!["foo", "quux", "bar", "aa"];
/// let search = seq.search();
///
/// assert_eq!(search.first_where(|s| *s == "bar"), Some(2));
/// assert_eq!(search.iter().count(), 4);
/// ```
#[derive(Debug)]
pub struct Search<'a, S> {
    seq: &'a S,
}

impl<S> Clone for Search<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Search<'_, S> {}

impl<'a, S: Sequence> Search<'a, S> {
    /// Smallest index whose element satisfies `pred`.
    #[inline]
    pub fn first_where<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&S::Elem) -> bool,
    {
        self.seq.position_where(pred)
    }

    /// Smallest index whose element satisfies `pred`, with a fallible `pred`.
    #[inline]
    pub fn try_first_where<P, Er>(&self, pred: P) -> Result<Option<usize>, Er>
    where
        P: FnMut(&S::Elem) -> Result<bool, Er>,
    {
        self.seq.try_position_where(pred)
    }

    /// Fresh pass over `(index, element)` pairs.
    #[inline]
    pub fn iter(&self) -> SearchIter<'a, S> {
        SearchIter { seq: self.seq, next: 0 }
    }
}

impl<'a, S: Sequence> IntoIterator for Search<'a, S> {
    type Item = (usize, &'a S::Elem);
    type IntoIter = SearchIter<'a, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S: Sequence> IntoIterator for &Search<'a, S> {
    type Item = (usize, &'a S::Elem);
    type IntoIter = SearchIter<'a, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// -----------------------------------------------------------------------------
// SearchIter
// -----------------------------------------------------------------------------
/// Single pass of a [Search]: yields `(index, element)` in ascending index
/// order, reading each element at the step it is yielded.
#[derive(Debug)]
pub struct SearchIter<'a, S> {
    seq: &'a S,
    next: usize,
}

impl<S> Clone for SearchIter<'_, S> {
    #[inline]
    fn clone(&self) -> Self {
        Self { seq: self.seq, next: self.next }
    }
}

impl<'a, S: Sequence> Iterator for SearchIter<'a, S> {
    type Item = (usize, &'a S::Elem);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.seq.get(self.next).map(|elem| (self.next, elem));
        if item.is_some() {
            self.next += 1;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.seq.len().saturating_sub(self.next);
        (rest, Some(rest))
    }
}

impl<S: Sequence> ExactSizeIterator for SearchIter<'_, S> {}
