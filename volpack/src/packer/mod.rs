//! Orchestration of a packing run: candidate bins, the item pool and the
//! partition into packed and unfit items.

mod sort;

#[doc(inline)]
pub use sort::SortPolicy;

use log::{debug, info};

use crate::entities::{Bin, Item};
use crate::place::PlacementEngine;
use crate::util::assertions;
use crate::{PackError, Result};

/// Lifecycle state of a [`Packer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackerState {
    /// Bins and items are being added
    Configuring,
    /// `pack()` has run; results are available. Terminal.
    Packed,
}

/// Orchestrates a packing run.
///
/// Bins and items are added in the `Configuring` state; [`Packer::pack`] sorts the item
/// pool according to the [`SortPolicy`], runs the [`PlacementEngine`] per bin in input
/// order and partitions the items into packed and unfit.
/// `pack()` is single-shot: a second call is rejected with [`PackError::AlreadyPacked`].
/// Fully deterministic for identical input: no randomized tie-breaking anywhere.
#[derive(Debug)]
pub struct Packer {
    bins: Vec<Bin>,
    items: Vec<Item>,
    policy: SortPolicy,
    state: PackerState,
    unfit: Vec<usize>,
    n_attempts: usize,
}

impl Packer {
    pub fn new(policy: SortPolicy) -> Self {
        Packer {
            bins: vec![],
            items: vec![],
            policy,
            state: PackerState::Configuring,
            unfit: vec![],
            n_attempts: 0,
        }
    }

    pub fn state(&self) -> PackerState {
        self.state
    }

    pub fn add_bin(&mut self, bin: Bin) -> Result<()> {
        self.ensure_state(PackerState::Configuring, "add_bin")?;
        debug!("[PACKER] bin {} added ({})", bin.id, bin.dim);
        self.bins.push(bin);
        Ok(())
    }

    pub fn add_item(&mut self, item: Item) -> Result<()> {
        self.ensure_state(PackerState::Configuring, "add_item")?;
        debug_assert!(self.items.iter().all(|i| i.id != item.id));
        debug!("[PACKER] item {} added ({})", item.id, item.dim);
        self.items.push(item);
        Ok(())
    }

    /// Runs the placement engine over all bins. Consumes the `Configuring` state;
    /// afterwards the packer is `Packed` and immutable.
    pub fn pack(&mut self) -> Result<()> {
        match self.state {
            PackerState::Configuring => (),
            PackerState::Packed => return Err(PackError::AlreadyPacked),
        }

        let mut remaining = self.policy.sort(&self.items);
        let items = &self.items;
        for bin in &mut self.bins {
            if remaining.is_empty() {
                break;
            }
            let mut engine = PlacementEngine::new(bin);
            remaining.retain(|&idx| {
                let item = &items[idx];
                match engine.place(item) {
                    Some(placed) => {
                        info!(
                            "[PACKER] item {} -> bin {} at {} {}",
                            item.id,
                            engine.bin().id,
                            placed.position,
                            placed.rotation
                        );
                        false
                    }
                    None => true,
                }
            });
            self.n_attempts += engine.n_attempts;
        }

        // report unfit items in input order
        remaining.sort_unstable();
        self.unfit = remaining;
        self.state = PackerState::Packed;

        info!(
            "[PACKER] done: {} packed, {} unfit over {} bins",
            self.items.len() - self.unfit.len(),
            self.unfit.len(),
            self.bins.len()
        );
        debug_assert!(self.bins.iter().all(assertions::bin_is_feasible));
        debug_assert!(assertions::solution_is_partition(
            self.items.len(),
            &self.bins,
            &self.unfit
        ));
        Ok(())
    }

    /// The bins with their placed items. Only valid after [`Packer::pack`].
    pub fn bins(&self) -> Result<&[Bin]> {
        self.ensure_state(PackerState::Packed, "bins")?;
        Ok(&self.bins)
    }

    /// All input items, identity unchanged. Only valid after [`Packer::pack`].
    pub fn items(&self) -> Result<&[Item]> {
        self.ensure_state(PackerState::Packed, "items")?;
        Ok(&self.items)
    }

    /// The items that could not be placed in any bin, in input order.
    /// Only valid after [`Packer::pack`].
    pub fn unfit_items(&self) -> Result<Vec<&Item>> {
        self.ensure_state(PackerState::Packed, "unfit_items")?;
        Ok(self.unfit.iter().map(|&idx| &self.items[idx]).collect())
    }

    /// Total number of anchor/rotation combinations tried during [`Packer::pack`].
    pub fn n_placement_attempts(&self) -> usize {
        self.n_attempts
    }

    /// Ratio of placed item volume to total bin volume, `0.0` for a run without bins.
    /// Only valid after [`Packer::pack`].
    pub fn density(&self) -> Result<f32> {
        self.ensure_state(PackerState::Packed, "density")?;
        let bin_volume: f32 = self.bins.iter().map(|b| b.volume()).sum();
        if bin_volume == 0.0 {
            return Ok(0.0);
        }
        let placed_volume: f32 = self.bins.iter().map(|b| b.placed_volume()).sum();
        Ok(placed_volume / bin_volume)
    }

    fn ensure_state(&self, expected: PackerState, op: &'static str) -> Result<()> {
        match self.state == expected {
            true => Ok(()),
            false => Err(PackError::InvalidState {
                op,
                state: self.state,
            }),
        }
    }
}

impl Default for Packer {
    fn default() -> Self {
        Packer::new(SortPolicy::default())
    }
}
