use std::fmt;

use crate::{decompose::Decompose, seq::Sequence};

// -----------------------------------------------------------------------------
// Visited
// -----------------------------------------------------------------------------
/// One element as a visitor sees it: whole, or broken into positional parts.
pub enum Visited<'a, E: Decompose> {
    /// The element's value does not decompose and arrives whole.
    Element(&'a E),
    /// The element's ordered parts.
    Parts(Vec<E::Part>),
}

impl<E> fmt::Debug for Visited<'_, E>
where
    E: Decompose + fmt::Debug,
    E::Part: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(elem) => f.debug_tuple("Element").field(elem).finish(),
            Self::Parts(parts) => f.debug_tuple("Parts").field(parts).finish(),
        }
    }
}

// -----------------------------------------------------------------------------
// Visit
// -----------------------------------------------------------------------------
/// Destructuring traversal of a [Sequence].
///
/// Each element is offered to the visitor once, in ascending index order. An
/// element whose value decomposes (per [Decompose]) arrives as
/// [`Visited::Parts`]; any other element arrives whole as
/// [`Visited::Element`]. Pair with [`bind_positional`] to spread parts over a
/// fixed parameter list.
///
/// The index range is fixed when traversal starts and each element is read
/// just before it is offered.
///
/// Implemented for every [Sequence].
///
/// # Example
/// ```
/// use qseq::{Visit, Visited};
///
/// let seq = vec![vec![1, 2], vec![3]];
///
/// let mut flat = Vec::new();
/// seq.visit_each(|visited| {
///     if let Visited::Parts(parts) = visited {
///         flat.extend(parts);
///     }
/// });
/// assert_eq!(flat, vec![1, 2, 3]);
/// ```
///
/// [`bind_positional`]: crate::bind_positional
pub trait Visit: Sequence {
    /// Offer every element to `visitor`, decomposed where the value allows.
    fn visit_each<V>(&self, mut visitor: V)
    where
        Self::Elem: Decompose,
        V: FnMut(Visited<'_, Self::Elem>),
    {
        for index in 0..self.len() {
            if let Some(elem) = self.get(index) {
                match elem.decompose() {
                    Some(parts) => visitor(Visited::Parts(parts)),
                    None => visitor(Visited::Element(elem)),
                }
            }
        }
    }

    /// Offer every element to a fallible `visitor`; its first error aborts
    /// the traversal and comes back untouched.
    fn try_visit_each<V, Er>(&self, mut visitor: V) -> Result<(), Er>
    where
        Self::Elem: Decompose,
        V: FnMut(Visited<'_, Self::Elem>) -> Result<(), Er>,
    {
        for index in 0..self.len() {
            if let Some(elem) = self.get(index) {
                match elem.decompose() {
                    Some(parts) => visitor(Visited::Parts(parts))?,
                    None => visitor(Visited::Element(elem))?,
                }
            }
        }
        Ok(())
    }
}

impl<S: Sequence> Visit for S {}

#[cfg(test)]
mod tests {
    use crate::decompose::bind_positional;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Pair {
        car: &'static str,
        cdr: &'static str,
    }

    impl Decompose for Pair {
        type Part = &'static str;

        fn decompose(&self) -> Option<Vec<&'static str>> {
            Some(vec![self.car, self.cdr])
        }
    }

    #[test]
    fn test_decomposable_elements_spread_positionally() {
        let seq = vec![Pair { car: "x", cdr: "y" }];

        let mut seen = Vec::new();
        seq.visit_each(|visited| match visited {
            Visited::Parts(parts) => {
                let [car, cdr] = bind_positional::<_, 2>(parts);
                seen.push((car, cdr));
            }
            Visited::Element(_) => panic!("a pair always decomposes"),
        });

        assert_eq!(seen, vec![(Some("x"), Some("y"))]);
    }

    #[test]
    fn test_missing_parts_bind_to_none() {
        let seq = vec![Pair { car: "x", cdr: "y" }];

        let mut seen = Vec::new();
        seq.visit_each(|visited| {
            if let Visited::Parts(parts) = visited {
                seen.push(bind_positional::<_, 3>(parts));
            }
        });

        assert_eq!(seen, vec![[Some("x"), Some("y"), None]]);
    }

    #[test]
    fn test_absent_elements_stay_whole() {
        let seq = vec![Some((1, 2)), None, Some((3, 4))];

        let mut log = Vec::new();
        seq.visit_each(|visited| match visited {
            Visited::Parts(parts) => log.push(Some(parts)),
            Visited::Element(elem) => {
                assert_eq!(elem, &None);
                log.push(None);
            }
        });

        assert_eq!(log, vec![Some(vec![1, 2]), None, Some(vec![3, 4])]);
    }

    #[test]
    fn test_plain_elements_arrive_whole_in_order() {
        let seq = vec![10, 20, 30];

        let mut seen = Vec::new();
        seq.visit_each(|visited| match visited {
            Visited::Element(n) => seen.push(*n),
            Visited::Parts(_) => panic!("integers stay whole"),
        });

        assert_eq!(seen, vec![10, 20, 30]);
    }

    #[test]
    fn test_try_visit_each_completes() {
        let seq = vec![vec![1], vec![2, 3]];

        let mut total = 0;
        let res: Result<(), ()> = seq.try_visit_each(|visited| {
            if let Visited::Parts(parts) = visited {
                total += parts.into_iter().sum::<i32>();
            }
            Ok(())
        });

        assert_eq!(res, Ok(()));
        assert_eq!(total, 6);
    }

    #[test]
    fn test_try_visit_each_aborts_on_the_first_error() {
        let seq = vec!["a", "b", "c"];

        let mut visited = 0;
        let res = seq.try_visit_each(|_| {
            visited += 1;
            if visited == 2 {
                Err("stop")
            } else {
                Ok(())
            }
        });

        assert_eq!(res, Err("stop"));
        assert_eq!(visited, 2);
    }
}
