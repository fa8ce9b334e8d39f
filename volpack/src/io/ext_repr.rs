use serde::{Deserialize, Serialize};

use crate::geometry::Rotation;

/// External (serializable) representation of a packing instance.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtInstance {
    pub bins: Vec<ExtBin>,
    pub items: Vec<ExtItem>,
}

/// External representation of a [`Bin`](crate::entities::Bin).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtBin {
    pub id: String,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtItem {
    pub id: String,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    /// Number of copies of this item, defaults to 1
    #[serde(default = "default_quantity")]
    pub quantity: usize,
    /// Allowed rotations; absent means all six
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotations: Option<Vec<Rotation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
}

fn default_quantity() -> usize {
    1
}

/// External representation of the outcome of a packing run.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtSolution {
    pub bins: Vec<ExtPackedBin>,
    /// Ids of items that could not be placed in any bin
    pub unfit: Vec<String>,
    /// Ratio of placed item volume to total bin volume
    pub density: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtPackedBin {
    pub id: String,
    pub placed: Vec<ExtPlacedItem>,
    pub density: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExtPlacedItem {
    pub id: String,
    /// Minimum corner (x, y, z) in bin-local coordinates
    pub position: [f32; 3],
    pub rotation: Rotation,
    /// Dimensions after rotation
    pub dimensions: [f32; 3],
}
