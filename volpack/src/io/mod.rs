//! Import and export between the internal entities and a serializable external representation.

pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::expanded_item_names;
#[doc(inline)]
pub use import::import;
