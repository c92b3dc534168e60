mod impls;
mod traits;

pub use traits::Sequence;
