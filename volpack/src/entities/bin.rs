use log::trace;

use crate::entities::{Item, PlacedItem};
use crate::geometry::Rotation;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Cuboid, Dim, Point3};
use crate::util::assertions;
use crate::Result;

/// A container in which [`Item`]'s can be placed.
/// Owns its placed items for the duration of a packing run; their order is placement order.
/// Invariant: placed cuboids are pairwise disjoint and fully contained within `dim`.
#[derive(Clone, Debug)]
pub struct Bin {
    pub id: usize,
    pub dim: Dim,
    pub placed_items: Vec<PlacedItem>,
}

impl Bin {
    pub fn new(id: usize, w: f32, h: f32, d: f32) -> Result<Bin> {
        let dim = Dim::try_new(w, h, d)?;
        Ok(Bin {
            id,
            dim,
            placed_items: vec![],
        })
    }

    /// Attempts to place `item` at `position` with `rotation`.
    /// Succeeds iff the rotated item lies within the bin bounds and does not overlap
    /// any already placed item. The only mutating entry point of a `Bin`.
    pub fn try_place(&mut self, item: &Item, position: Point3, rotation: Rotation) -> bool {
        debug_assert!(item.allowed_rotations.contains(&rotation));

        let cuboid = Cuboid {
            pos: position,
            dim: rotation.apply(item.dim),
        };
        if !cuboid.within(&self.dim) {
            trace!("[BIN {}] item {} out of bounds at {position} {rotation}", self.id, item.id);
            return false;
        }
        if self
            .placed_items
            .iter()
            .any(|pi| pi.cuboid().collides_with(&cuboid))
        {
            trace!("[BIN {}] item {} overlaps at {position} {rotation}", self.id, item.id);
            return false;
        }

        self.placed_items.push(PlacedItem::new(item, position, rotation));
        debug_assert!(assertions::bin_is_feasible(self));
        true
    }

    pub fn volume(&self) -> f32 {
        self.dim.volume()
    }

    /// Sum of the volumes of all placed items.
    pub fn placed_volume(&self) -> f32 {
        self.placed_items.iter().map(|pi| pi.volume()).sum()
    }

    /// Bin volume minus placed item volume. Bookkeeping for heuristics and reporting,
    /// not used for correctness.
    pub fn remaining_volume(&self) -> f32 {
        self.volume() - self.placed_volume()
    }

    /// Ratio of placed item volume to bin volume.
    pub fn density(&self) -> f32 {
        self.placed_volume() / self.volume()
    }

    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_out_of_bounds_is_rejected() {
        let mut bin = Bin::new(0, 100.0, 100.0, 100.0).unwrap();
        let item = Item::new(0, 60.0, 60.0, 60.0, None, None).unwrap();
        assert!(!bin.try_place(&item, Point3(50.0, 0.0, 0.0), Rotation::Whd));
        assert!(bin.is_empty());
    }

    #[test]
    fn overlapping_placement_is_rejected() {
        let mut bin = Bin::new(0, 100.0, 100.0, 100.0).unwrap();
        let item = Item::new(0, 60.0, 60.0, 60.0, None, None).unwrap();
        assert!(bin.try_place(&item, Point3::ORIGIN, Rotation::Whd));
        assert!(!bin.try_place(&item, Point3(30.0, 0.0, 0.0), Rotation::Whd));
        assert_eq!(bin.placed_items.len(), 1);
    }

    #[test]
    fn touching_placements_are_allowed() {
        let mut bin = Bin::new(0, 100.0, 100.0, 100.0).unwrap();
        let item = Item::new(0, 50.0, 100.0, 100.0, None, None).unwrap();
        assert!(bin.try_place(&item, Point3::ORIGIN, Rotation::Whd));
        assert!(bin.try_place(&item, Point3(50.0, 0.0, 0.0), Rotation::Whd));
        assert_eq!(bin.placed_items.len(), 2);
        assert!(assertions::bin_is_feasible(&bin));
    }

    #[test]
    fn rotation_is_applied_before_the_bounds_check() {
        let mut bin = Bin::new(0, 50.0, 50.0, 100.0).unwrap();
        let item = Item::new(0, 100.0, 40.0, 40.0, None, None).unwrap();
        assert!(!bin.try_place(&item, Point3::ORIGIN, Rotation::Whd));
        // long axis on z
        assert!(bin.try_place(&item, Point3::ORIGIN, Rotation::Dhw));
        let pi = &bin.placed_items[0];
        assert_eq!((pi.dim.w, pi.dim.h, pi.dim.d), (40.0, 40.0, 100.0));
    }

    #[test]
    fn volume_bookkeeping() {
        let mut bin = Bin::new(0, 100.0, 100.0, 100.0).unwrap();
        let item = Item::new(0, 50.0, 50.0, 50.0, None, None).unwrap();
        assert!(bin.try_place(&item, Point3::ORIGIN, Rotation::Whd));
        assert_eq!(bin.remaining_volume(), 1_000_000.0 - 125_000.0);
        assert_eq!(bin.density(), 0.125);
    }
}
