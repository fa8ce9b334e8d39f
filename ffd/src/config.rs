use serde::{Deserialize, Serialize};

use volpack::packer::SortPolicy;

/// Configuration for the FFD reference implementation
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct FFDConfig {
    /// Ordering heuristic applied to the item pool before placement
    pub sort_policy: SortPolicy,
}

impl Default for FFDConfig {
    fn default() -> Self {
        Self {
            sort_policy: SortPolicy::DecreasingVolume,
        }
    }
}
