use crate::entities::Item;
use crate::geometry::Rotation;
use crate::geometry::primitives::{Cuboid, Dim, Point3};

/// An [`Item`] that has been placed in a [`Bin`](crate::entities::Bin):
/// the item's id together with its resolved rotation and anchor position.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct PlacedItem {
    pub item_id: usize,
    pub rotation: Rotation,
    /// Minimum corner of the bounding box, in bin-local coordinates
    pub position: Point3,
    /// Dimensions after the rotation has been applied
    pub dim: Dim,
}

impl PlacedItem {
    pub fn new(item: &Item, position: Point3, rotation: Rotation) -> Self {
        PlacedItem {
            item_id: item.id,
            rotation,
            position,
            dim: rotation.apply(item.dim),
        }
    }

    pub fn cuboid(&self) -> Cuboid {
        Cuboid {
            pos: self.position,
            dim: self.dim,
        }
    }

    pub fn volume(&self) -> f32 {
        self.dim.volume()
    }
}
