use crate::packer::PackerState;
use thiserror::Error;

/// Result type alias for all fallible operations in `volpack`.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors raised by construction and lifecycle violations.
/// An item failing to fit anywhere is *not* an error: it ends up in the unfit list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackError {
    /// A dimension component was zero or negative.
    #[error("invalid dimension {w} x {h} x {d}, all components must be > 0")]
    InvalidDimension { w: f32, h: f32, d: f32 },

    /// An item was constructed with an explicitly empty set of allowed rotations.
    #[error("item {id} has an empty rotation set")]
    EmptyRotationSet { id: usize },

    /// An operation was called out of lifecycle order.
    #[error("`{op}` is not valid while the packer is in the {state:?} state")]
    InvalidState {
        op: &'static str,
        state: PackerState,
    },

    /// `pack()` was called on an already packed instance.
    #[error("pack() has already been run on this packer")]
    AlreadyPacked,
}
