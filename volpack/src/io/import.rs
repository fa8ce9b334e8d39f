use anyhow::{Context, Result, ensure};
use itertools::Itertools;

use crate::entities::{Bin, Item};
use crate::io::ext_repr::ExtInstance;
use crate::packer::{Packer, SortPolicy};

/// Builds a configured [`Packer`] from an external instance.
/// Internal ids are indices: bin `i` maps to `ext.bins[i]`, item ids follow the
/// quantity-expanded order of `ext.items` (see [`expanded_item_names`]).
pub fn import(ext: &ExtInstance, policy: SortPolicy) -> Result<Packer> {
    ensure!(
        ext.items.iter().map(|i| &i.id).all_unique(),
        "duplicate item ids in instance"
    );
    ensure!(
        ext.bins.iter().map(|b| &b.id).all_unique(),
        "duplicate bin ids in instance"
    );

    let mut packer = Packer::new(policy);
    for (id, ext_bin) in ext.bins.iter().enumerate() {
        let bin = Bin::new(id, ext_bin.width, ext_bin.height, ext_bin.depth)
            .with_context(|| format!("invalid bin '{}'", ext_bin.id))?;
        packer.add_bin(bin)?;
    }

    let mut next_id = 0;
    for ext_item in &ext.items {
        let base = Item::new(
            next_id,
            ext_item.width,
            ext_item.height,
            ext_item.depth,
            ext_item.rotations.clone(),
            ext_item.weight,
        )
        .with_context(|| format!("invalid item '{}'", ext_item.id))?;
        for copy in 0..ext_item.quantity {
            packer.add_item(base.clone_with_id(next_id + copy))?;
        }
        next_id += ext_item.quantity;
    }
    Ok(packer)
}

/// The external names of all items after quantity expansion, in internal id order.
/// Copies of an item with `quantity > 1` are suffixed with their copy index.
pub fn expanded_item_names(ext: &ExtInstance) -> Vec<String> {
    ext.items
        .iter()
        .flat_map(|item| {
            (0..item.quantity).map(|copy| match item.quantity {
                1 => item.id.clone(),
                _ => format!("{}_{}", item.id, copy),
            })
        })
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ext_repr::{ExtBin, ExtItem};

    fn instance() -> ExtInstance {
        ExtInstance {
            bins: vec![ExtBin {
                id: "pallet".into(),
                width: 100.0,
                height: 100.0,
                depth: 300.0,
            }],
            items: vec![
                ExtItem {
                    id: "box".into(),
                    width: 100.0,
                    height: 50.0,
                    depth: 50.0,
                    quantity: 2,
                    rotations: None,
                    weight: None,
                },
                ExtItem {
                    id: "lid".into(),
                    width: 10.0,
                    height: 10.0,
                    depth: 10.0,
                    quantity: 1,
                    rotations: None,
                    weight: Some(0.5),
                },
            ],
        }
    }

    #[test]
    fn quantities_are_expanded_into_distinct_items() {
        let mut packer = import(&instance(), SortPolicy::default()).unwrap();
        packer.pack().unwrap();
        assert_eq!(packer.items().unwrap().len(), 3);
        assert_eq!(
            expanded_item_names(&instance()),
            vec!["box_0", "box_1", "lid"]
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut ext = instance();
        ext.items[1].id = "box".into();
        assert!(import(&ext, SortPolicy::default()).is_err());
    }

    #[test]
    fn invalid_geometry_is_reported_with_the_offending_id() {
        let mut ext = instance();
        ext.items[0].width = 0.0;
        let err = import(&ext, SortPolicy::default()).unwrap_err();
        assert!(format!("{err:#}").contains("box"));
    }
}
