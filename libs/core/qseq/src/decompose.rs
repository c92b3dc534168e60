// -----------------------------------------------------------------------------
// Decompose
// -----------------------------------------------------------------------------
/// An ordered breakdown of a value into positional parts.
///
/// The query is value-level: [`Decompose::decompose`] answers [None] for
/// "this value stays whole", so one element type can hold both decomposable
/// and plain values. `Option<T>` delegates to `T` for `Some` and stays whole
/// for `None`; scalar and text primitives always stay whole; homogeneous
/// tuples, arrays and `Vec` break into their items.
pub trait Decompose {
    /// The part type positional consumers receive.
    type Part;

    /// The ordered parts of this value, or [None] to stay whole.
    fn decompose(&self) -> Option<Vec<Self::Part>>;
}

// -----------------------------------------------------------------------------
// std impls
// -----------------------------------------------------------------------------
impl<T: Decompose> Decompose for Option<T> {
    type Part = T::Part;

    #[inline]
    fn decompose(&self) -> Option<Vec<T::Part>> {
        self.as_ref().and_then(Decompose::decompose)
    }
}

impl<T: Clone> Decompose for (T, T) {
    type Part = T;

    #[inline]
    fn decompose(&self) -> Option<Vec<T>> {
        Some(vec![self.0.clone(), self.1.clone()])
    }
}

impl<T: Clone> Decompose for (T, T, T) {
    type Part = T;

    #[inline]
    fn decompose(&self) -> Option<Vec<T>> {
        Some(vec![self.0.clone(), self.1.clone(), self.2.clone()])
    }
}

impl<T: Clone, const N: usize> Decompose for [T; N] {
    type Part = T;

    #[inline]
    fn decompose(&self) -> Option<Vec<T>> {
        Some(self.to_vec())
    }
}

impl<T: Clone> Decompose for Vec<T> {
    type Part = T;

    #[inline]
    fn decompose(&self) -> Option<Vec<T>> {
        Some(self.clone())
    }
}

macro_rules! impl_whole {
    ($($ty:ty),* $(,)?) => {$(
        impl Decompose for $ty {
            type Part = Self;

            #[inline]
            fn decompose(&self) -> Option<Vec<Self>> {
                None
            }
        }
    )*};
}

impl_whole!(
    bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    String, &str,
);

// -----------------------------------------------------------------------------
// bind_positional
// -----------------------------------------------------------------------------
/// Bind `parts` to `N` positional slots.
///
/// Extra parts are dropped; missing slots bind to [None].
///
/// # Example
/// ```
/// use qseq::bind_positional;
///
/// let [x, y, rest] = bind_positional::<_, 3>(vec!["x", "y"]);
///
/// assert_eq!(x, Some("x"));
/// assert_eq!(y, Some("y"));
/// assert_eq!(rest, None);
/// ```
pub fn bind_positional<P, const N: usize>(parts: Vec<P>) -> [Option<P>; N] {
    let mut parts = parts.into_iter();
    std::array::from_fn(|_| parts.next())
}
