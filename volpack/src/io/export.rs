use anyhow::{Context, Result};

use crate::io::ext_repr::{ExtInstance, ExtPackedBin, ExtPlacedItem, ExtSolution};
use crate::io::import::expanded_item_names;
use crate::packer::Packer;

/// Converts a packed [`Packer`] back to the external representation,
/// restoring the string ids of `ext`.
pub fn export(packer: &Packer, ext: &ExtInstance) -> Result<ExtSolution> {
    let names = expanded_item_names(ext);
    let bins = packer
        .bins()
        .context("packer has not been packed yet")?
        .iter()
        .map(|bin| ExtPackedBin {
            id: ext.bins[bin.id].id.clone(),
            placed: bin
                .placed_items
                .iter()
                .map(|pi| ExtPlacedItem {
                    id: names[pi.item_id].clone(),
                    position: [pi.position.x(), pi.position.y(), pi.position.z()],
                    rotation: pi.rotation,
                    dimensions: [pi.dim.w, pi.dim.h, pi.dim.d],
                })
                .collect(),
            density: bin.density(),
        })
        .collect();

    let unfit = packer
        .unfit_items()?
        .iter()
        .map(|item| names[item.id].clone())
        .collect();

    Ok(ExtSolution {
        bins,
        unfit,
        density: packer.density()?,
    })
}
