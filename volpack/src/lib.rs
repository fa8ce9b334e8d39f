//! A deterministic 3D rectangular bin-packing engine.
//!
//! Items (axis-aligned boxes with a set of allowed rotations) are placed into bins
//! by a greedy, non-backtracking first-fit engine driven by an extreme-point style
//! anchor heuristic. Packing runs are synchronous, single-threaded and fully
//! deterministic for identical input.
//!
//! An item that fits nowhere is a normal outcome (it ends up in the unfit list),
//! never an error; errors are reserved for malformed input and lifecycle misuse.

pub mod entities;
pub mod geometry;
pub mod io;
pub mod packer;
pub mod place;
pub mod util;

mod error;

#[doc(inline)]
pub use error::PackError;
#[doc(inline)]
pub use error::Result;
