//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and tests

use itertools::Itertools;
use log::error;

use crate::entities::Bin;
use crate::geometry::geo_traits::CollidesWith;

/// True iff all placed items in `bin` are contained within the bin bounds and
/// pairwise non-overlapping.
pub fn bin_is_feasible(bin: &Bin) -> bool {
    for pi in &bin.placed_items {
        if !pi.cuboid().within(&bin.dim) {
            error!(
                "[BIN {}] item {} at {} exceeds bin bounds {}",
                bin.id, pi.item_id, pi.position, bin.dim
            );
            return false;
        }
    }
    for (a, b) in bin.placed_items.iter().tuple_combinations() {
        if a.cuboid().collides_with(&b.cuboid()) {
            error!(
                "[BIN {}] items {} and {} overlap ({} and {})",
                bin.id, a.item_id, b.item_id, a.position, b.position
            );
            return false;
        }
    }
    true
}

/// True iff every one of the `n_items` input items ends up in exactly one of
/// {packed, unfit}: no duplicates, no omissions.
pub fn solution_is_partition(n_items: usize, bins: &[Bin], unfit: &[usize]) -> bool {
    let mut seen = vec![0usize; n_items];
    let placed_ids = bins
        .iter()
        .flat_map(|bin| bin.placed_items.iter().map(|pi| pi.item_id));
    for id in placed_ids.chain(unfit.iter().copied()) {
        match seen.get_mut(id) {
            Some(count) => *count += 1,
            None => {
                error!("unknown item id {id} in solution");
                return false;
            }
        }
    }
    seen.iter().all(|&count| count == 1)
}
