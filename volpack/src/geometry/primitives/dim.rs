use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::util::FPA;
use crate::{PackError, Result};

/// Dimensions of an axis-aligned box: width (x), height (y) and depth (z).
/// Immutable once created, all components strictly positive.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Dim {
    pub w: f32,
    pub h: f32,
    pub d: f32,
}

impl Dim {
    pub fn try_new(w: f32, h: f32, d: f32) -> Result<Self> {
        match w > 0.0 && h > 0.0 && d > 0.0 {
            true => Ok(Dim { w, h, d }),
            false => Err(PackError::InvalidDimension { w, h, d }),
        }
    }

    pub fn volume(&self) -> f32 {
        self.w * self.h * self.d
    }

    pub fn max_axis(&self) -> f32 {
        self.w.max(self.h).max(self.d)
    }

    /// True iff `self` fits within `container` on all three axes, with tolerance.
    /// No implicit rotation: apply a [`Rotation`](crate::geometry::Rotation) beforehand.
    pub fn fits_within(&self, container: &Dim) -> bool {
        FPA(self.w) <= FPA(container.w)
            && FPA(self.h) <= FPA(container.h)
            && FPA(self.d) <= FPA(container.d)
    }
}

impl Display for Dim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {} x {}", self.w, self.h, self.d)
    }
}
