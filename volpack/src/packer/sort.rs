use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use crate::entities::Item;

/// Pluggable ordering heuristic applied to the item pool before placement.
/// All variants are stable sorts: ties are broken by input order, keeping runs deterministic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    /// Largest volume first (first-fit-decreasing)
    #[default]
    DecreasingVolume,
    /// Longest axis first
    DecreasingMaxAxis,
    /// No reordering
    InputOrder,
}

impl SortPolicy {
    /// Returns the indices of `items` in placement order.
    pub fn sort(&self, items: &[Item]) -> Vec<usize> {
        let indices = 0..items.len();
        match self {
            SortPolicy::InputOrder => indices.collect_vec(),
            SortPolicy::DecreasingVolume => indices
                .sorted_by_cached_key(|&i| {
                    Reverse(NotNan::new(items[i].volume()).expect("item volume is NaN"))
                })
                .collect_vec(),
            SortPolicy::DecreasingMaxAxis => indices
                .sorted_by_cached_key(|&i| {
                    Reverse(NotNan::new(items[i].dim.max_axis()).expect("item dimension is NaN"))
                })
                .collect_vec(),
        }
    }
}
