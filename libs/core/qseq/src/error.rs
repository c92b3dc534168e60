// -----------------------------------------------------------------------------
// Incomparable
// -----------------------------------------------------------------------------
/// Two positions whose elements the natural ordering cannot relate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Elements at positions {} and {} are not comparable", .lhs, .rhs)]
pub struct Incomparable {
    pub lhs: usize,
    pub rhs: usize,
}
