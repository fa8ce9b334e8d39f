/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod fpa;

#[doc(inline)]
pub use fpa::EPSILON;
#[doc(inline)]
pub use fpa::FPA;
