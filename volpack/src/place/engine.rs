use log::debug;

use crate::entities::{Bin, Item, PlacedItem};
use crate::place::AnchorSet;

/// Greedy first-fit placement engine for a single [`Bin`].
///
/// Anchors are searched in ascending (z, y, x) order, and per anchor the item's
/// allowed rotations in their declared order; the first combination that fits wins.
/// Non-backtracking: already placed items are never revisited.
/// Deterministic: identical bin state, item and anchors always yield the same placement.
pub struct PlacementEngine<'a> {
    bin: &'a mut Bin,
    anchors: AnchorSet,
    /// Number of anchor/rotation combinations tried so far
    pub n_attempts: usize,
}

impl<'a> PlacementEngine<'a> {
    pub fn new(bin: &'a mut Bin) -> Self {
        let anchors = match bin.is_empty() {
            true => AnchorSet::new(),
            false => AnchorSet::rebuild(&bin.dim, bin.placed_items.iter().map(|pi| pi.cuboid())),
        };
        PlacementEngine {
            bin,
            anchors,
            n_attempts: 0,
        }
    }

    /// Attempts to place `item` in the bin. Returns the resulting [`PlacedItem`] on
    /// success; `None` means the item is rejected from this bin (a normal outcome,
    /// not an error).
    pub fn place(&mut self, item: &Item) -> Option<PlacedItem> {
        if !item.fits_in_some_rotation(&self.bin.dim) {
            debug!(
                "[ENGINE] item {} ({}) exceeds bin {} ({}) in every rotation",
                item.id, item.dim, self.bin.id, self.bin.dim
            );
            return None;
        }

        let mut chosen = None;
        'search: for (idx, &anchor) in self.anchors.as_slice().iter().enumerate() {
            for &rotation in &item.allowed_rotations {
                self.n_attempts += 1;
                if self.bin.try_place(item, anchor, rotation) {
                    chosen = Some(idx);
                    break 'search;
                }
            }
        }

        let idx = chosen?;
        let placed = *self
            .bin
            .placed_items
            .last()
            .expect("try_place appended the placement");
        self.anchors
            .consume(Some(idx), &placed.cuboid(), &self.bin.dim);
        debug!(
            "[ENGINE] placed item {} in bin {} at {} with rotation {}",
            item.id, self.bin.id, placed.position, placed.rotation
        );
        Some(placed)
    }

    pub fn bin(&self) -> &Bin {
        self.bin
    }
}
