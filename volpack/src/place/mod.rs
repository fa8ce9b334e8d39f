//! The core placement algorithm: anchor generation and the greedy first-fit engine.

mod anchors;
mod engine;

#[doc(inline)]
pub use anchors::AnchorSet;
#[doc(inline)]
pub use engine::PlacementEngine;
