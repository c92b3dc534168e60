use std::cmp::Ordering;

use itertools::Itertools;

use crate::{error::Incomparable, locate::Locate, seq::Sequence};

// -----------------------------------------------------------------------------
// Sort
// -----------------------------------------------------------------------------
/// Copying and in-place sorting over a [Sequence].
///
/// Each entry point comes in a natural-ordering form (`Elem: PartialOrd`,
/// fallible with [Incomparable]) and a comparator form taking the caller's
/// ordering closure. Sorting is stable: elements the ordering ties keep their
/// original relative order.
///
/// The copying forms build a new sequence and leave the receiver alone. The
/// in-place forms permute the receiver through [`Sequence::swap`] and hand
/// back the same `&mut Self` for chaining. All comparisons run before the
/// first swap, so a failed sort returns with the receiver untouched.
///
/// Implemented for every [Sequence].
///
/// # Example
/// ```
/// use qseq::Sort;
///
/// let seq = vec!["foo", "quux", "bar", "aa"];
///
/// let sorted = seq.sorted().unwrap();
/// assert_eq!(sorted, vec!["aa", "bar", "foo", "quux"]);
/// assert_eq!(seq, vec!["foo", "quux", "bar", "aa"]);
///
/// let by_len = seq.sorted_by(|l, r| l.len().cmp(&r.len()));
/// assert_eq!(by_len, vec!["aa", "foo", "bar", "quux"]);
/// ```
pub trait Sort: Sequence {
    /// New sequence holding this one's elements in ascending natural order.
    fn sorted(&self) -> Result<Self, Incomparable>
    where
        Self::Elem: PartialOrd,
    {
        let order = natural_order(self)?;
        let mut out = self.subseq(0, self.len());
        apply_order(&mut out, &order);
        Ok(out)
    }

    /// New sequence holding this one's elements in `cmp`'s ascending order.
    fn sorted_by<C>(&self, cmp: C) -> Self
    where
        C: FnMut(&Self::Elem, &Self::Elem) -> Ordering,
    {
        let order = comparator_order(self, cmp);
        let mut out = self.subseq(0, self.len());
        apply_order(&mut out, &order);
        out
    }

    /// New sequence in `cmp`'s ascending order, with a fallible `cmp`.
    fn try_sorted_by<C, Er>(&self, cmp: C) -> Result<Self, Er>
    where
        C: FnMut(&Self::Elem, &Self::Elem) -> Result<Ordering, Er>,
    {
        let order = try_comparator_order(self, cmp)?;
        let mut out = self.subseq(0, self.len());
        apply_order(&mut out, &order);
        Ok(out)
    }

    /// Reorder this sequence into ascending natural order.
    ///
    /// On failure nothing has moved.
    fn sort_in_place(&mut self) -> Result<&mut Self, Incomparable>
    where
        Self::Elem: PartialOrd,
    {
        let order = natural_order(self)?;
        apply_order(self, &order);
        Ok(self)
    }

    /// Reorder this sequence into `cmp`'s ascending order.
    fn sort_in_place_by<C>(&mut self, cmp: C) -> &mut Self
    where
        C: FnMut(&Self::Elem, &Self::Elem) -> Ordering,
    {
        let order = comparator_order(self, cmp);
        apply_order(self, &order);
        self
    }

    /// Reorder this sequence into `cmp`'s ascending order, with a fallible
    /// `cmp`.
    ///
    /// On failure nothing has moved.
    fn try_sort_in_place_by<C, Er>(&mut self, cmp: C) -> Result<&mut Self, Er>
    where
        C: FnMut(&Self::Elem, &Self::Elem) -> Result<Ordering, Er>,
    {
        let order = try_comparator_order(self, cmp)?;
        apply_order(self, &order);
        Ok(self)
    }
}

impl<S: Sequence> Sort for S {}

// -----------------------------------------------------------------------------
// ordering helpers
// -----------------------------------------------------------------------------
/// Stable target ordering under natural comparison, or the positions of a
/// pair the comparison cannot relate.
fn natural_order<S>(seq: &S) -> Result<Vec<usize>, Incomparable>
where
    S: Sequence,
    S::Elem: PartialOrd,
{
    let mut tagged: Vec<(usize, &S::Elem)> = seq.search().iter().collect();
    tagged.sort_by(|l, r| l.1.partial_cmp(r.1).unwrap_or(Ordering::Equal));

    // A value unrelatable to the rest survives the fallback sort next to a
    // witness, so one adjacent-pair sweep finds it.
    for ((li, l), (ri, r)) in tagged.iter().tuple_windows() {
        if l.partial_cmp(r).is_none() {
            return Err(Incomparable { lhs: *li, rhs: *ri });
        }
    }
    Ok(tagged.into_iter().map(|(index, _)| index).collect())
}

/// Stable target ordering under `cmp`.
fn comparator_order<S, C>(seq: &S, mut cmp: C) -> Vec<usize>
where
    S: Sequence,
    C: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let mut tagged: Vec<(usize, &S::Elem)> = seq.search().iter().collect();
    tagged.sort_by(|l, r| cmp(l.1, r.1));
    tagged.into_iter().map(|(index, _)| index).collect()
}

/// Stable target ordering under a fallible `cmp`, or its first error.
fn try_comparator_order<S, C, Er>(seq: &S, mut cmp: C) -> Result<Vec<usize>, Er>
where
    S: Sequence,
    C: FnMut(&S::Elem, &S::Elem) -> Result<Ordering, Er>,
{
    let mut tagged: Vec<(usize, &S::Elem)> = seq.search().iter().collect();

    // `sort_by` has no fallible form: remember the first failure, fold the
    // remaining comparisons to Equal, and report after the pass.
    let mut failure = None;
    tagged.sort_by(|l, r| {
        if failure.is_some() {
            return Ordering::Equal;
        }
        cmp(l.1, r.1).unwrap_or_else(|er| {
            failure = Some(er);
            Ordering::Equal
        })
    });
    match failure {
        Some(er) => Err(er),
        None => Ok(tagged.into_iter().map(|(index, _)| index).collect()),
    }
}

/// Permute `seq` so that position `k` ends up holding the element that sat
/// at `order[k]` before the call. `order` must be a permutation of
/// `0..seq.len()`.
fn apply_order<S: Sequence>(seq: &mut S, order: &[usize]) {
    // dest[i] = final position of the element currently at i
    let mut dest = vec![0; order.len()];
    for (target, &source) in order.iter().enumerate() {
        dest[source] = target;
    }
    for start in 0..dest.len() {
        while dest[start] != start {
            let other = dest[start];
            seq.swap(start, other);
            dest.swap(start, other);
        }
    }
}
