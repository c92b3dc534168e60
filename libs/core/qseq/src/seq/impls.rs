use std::collections::VecDeque;

use super::Sequence;

// -----------------------------------------------------------------------------
// std backings
// -----------------------------------------------------------------------------
// `subseq` duplicates elements, so the std impls ask for `Clone`; for
// handle-like elements (references, `Rc`, small copies) this is the same
// cheap copy the foreign containers make of their element handles.

impl<E: Clone> Sequence for Vec<E> {
    type Elem = E;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&E> {
        self.as_slice().get(index)
    }

    #[inline]
    fn replace(&mut self, index: usize, elem: E) -> E {
        std::mem::replace(&mut self[index], elem)
    }

    #[inline]
    fn swap(&mut self, lhs: usize, rhs: usize) {
        self.as_mut_slice().swap(lhs, rhs);
    }

    #[inline]
    fn subseq(&self, start: usize, end: usize) -> Self {
        self[start..end].to_vec()
    }
}

impl<E: Clone> Sequence for VecDeque<E> {
    type Elem = E;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&E> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn replace(&mut self, index: usize, elem: E) -> E {
        std::mem::replace(&mut self[index], elem)
    }

    #[inline]
    fn swap(&mut self, lhs: usize, rhs: usize) {
        VecDeque::swap(self, lhs, rhs);
    }

    #[inline]
    fn subseq(&self, start: usize, end: usize) -> Self {
        self.range(start..end).cloned().collect()
    }
}
