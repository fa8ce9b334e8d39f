use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Dim;

/// One of the six axis-aligned permutations of an item's (w, h, d).
/// The variant name spells out which original axis ends up on x, y and z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    /// (w, h, d) — identity
    Whd,
    /// (h, w, d)
    Hwd,
    /// (h, d, w)
    Hdw,
    /// (d, h, w)
    Dhw,
    /// (d, w, h)
    Dwh,
    /// (w, d, h)
    Wdh,
}

impl Rotation {
    /// All six rotations, in the order they are tried when an item does not restrict them.
    pub const ALL: [Rotation; 6] = [
        Rotation::Whd,
        Rotation::Hwd,
        Rotation::Hdw,
        Rotation::Dhw,
        Rotation::Dwh,
        Rotation::Wdh,
    ];

    /// Permutes the components of `dim`. Total function, never fails.
    pub fn apply(self, dim: Dim) -> Dim {
        let Dim { w, h, d } = dim;
        match self {
            Rotation::Whd => Dim { w, h, d },
            Rotation::Hwd => Dim { w: h, h: w, d },
            Rotation::Hdw => Dim { w: h, h: d, d: w },
            Rotation::Dhw => Dim { w: d, h, d: w },
            Rotation::Dwh => Dim { w: d, h: w, d: h },
            Rotation::Wdh => Dim { w, h: d, d: h },
        }
    }

    /// The rotation that undoes `self`: `r.inverse().apply(r.apply(dim)) == dim`.
    pub fn inverse(self) -> Rotation {
        match self {
            Rotation::Whd => Rotation::Whd,
            Rotation::Hwd => Rotation::Hwd,
            Rotation::Hdw => Rotation::Dwh,
            Rotation::Dhw => Rotation::Dhw,
            Rotation::Dwh => Rotation::Hdw,
            Rotation::Wdh => Rotation::Wdh,
        }
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Rotation::Whd => "(w, h, d)",
            Rotation::Hwd => "(h, w, d)",
            Rotation::Hdw => "(h, d, w)",
            Rotation::Dhw => "(d, h, w)",
            Rotation::Dwh => "(d, w, h)",
            Rotation::Wdh => "(w, d, h)",
        };
        write!(f, "{s}")
    }
}
