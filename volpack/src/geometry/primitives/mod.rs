mod cuboid;
mod dim;
mod point;

#[doc(inline)]
pub use cuboid::Cuboid;
#[doc(inline)]
pub use dim::Dim;
#[doc(inline)]
pub use point::Point3;
