// -----------------------------------------------------------------------------
// Sequence
// -----------------------------------------------------------------------------
/// The fixed interface of an externally-owned, ordered, 0-indexed, mutable
/// sequence of elements.
///
/// This is the narrow seam the rest of the crate builds on: the capability
/// traits ([`Locate`], [`Sort`], [`Slice`], [`Visit`]) are blanket-implemented
/// for every `Sequence`, so implementing these five primitives is all a
/// container has to do to pick up the whole adapter surface.
///
/// The primitives are strict: out-of-range indices passed to a mutating or
/// copying primitive are a caller bug and panic, as they do for the std
/// containers. Tolerant out-of-range handling (clamping, absent results) is
/// the adapter layer's job, never the container's.
///
/// An element may itself represent "no value present": instantiate
/// `Elem = Option<T>` and the absent element participates in equality and
/// lookup like any other value.
///
/// [`Locate`]: crate::Locate
/// [`Sort`]: crate::Sort
/// [`Slice`]: crate::Slice
/// [`Visit`]: crate::Visit
pub trait Sequence: Sized {
    type Elem;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`, or [None] out of range.
    fn get(&self, index: usize) -> Option<&Self::Elem>;

    /// Put `elem` at `index`, returning the element it displaces.
    fn replace(&mut self, index: usize, elem: Self::Elem) -> Self::Elem;

    /// Exchange the elements at `lhs` and `rhs`.
    fn swap(&mut self, lhs: usize, rhs: usize);

    /// New sequence holding copies of the elements in `start..end`.
    fn subseq(&self, start: usize, end: usize) -> Self;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
