#[cfg(test)]
use rstest_reuse;

mod decompose;
mod error;
mod locate;
mod seq;
mod slice;
mod sort;
mod visit;

pub use decompose::{bind_positional, Decompose};
pub use error::Incomparable;
pub use locate::{Locate, Search, SearchIter};
pub use seq::Sequence;
pub use slice::Slice;
pub use sort::Sort;
pub use visit::{Visit, Visited};
