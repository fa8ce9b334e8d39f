//! Geometric primitives and transforms used by the packing engine.

pub mod geo_traits;
pub mod primitives;
mod rotation;

#[doc(inline)]
pub use rotation::Rotation;
