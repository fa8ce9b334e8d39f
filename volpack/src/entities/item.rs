use crate::geometry::Rotation;
use crate::geometry::primitives::Dim;
use crate::{PackError, Result};

/// A packable box. Immutable: the resolved position and rotation of a successfully
/// placed item are recorded in a [`PlacedItem`](crate::entities::PlacedItem), not here.
#[derive(Clone, Debug)]
pub struct Item {
    /// Unique within a single packer run, not enforced globally
    pub id: usize,
    pub dim: Dim,
    /// Rotations the engine may try for this item, in the order they will be tried
    pub allowed_rotations: Vec<Rotation>,
    /// Opaque payload weight, carried through for reporting only
    pub weight: Option<f32>,
}

impl Item {
    /// `rotations: None` defaults to all six axis-aligned rotations.
    pub fn new(
        id: usize,
        w: f32,
        h: f32,
        d: f32,
        rotations: Option<Vec<Rotation>>,
        weight: Option<f32>,
    ) -> Result<Item> {
        let dim = Dim::try_new(w, h, d)?;
        let allowed_rotations = rotations.unwrap_or_else(|| Rotation::ALL.to_vec());
        if allowed_rotations.is_empty() {
            return Err(PackError::EmptyRotationSet { id });
        }
        Ok(Item {
            id,
            dim,
            allowed_rotations,
            weight,
        })
    }

    pub fn clone_with_id(&self, id: usize) -> Item {
        Item { id, ..self.clone() }
    }

    pub fn volume(&self) -> f32 {
        self.dim.volume()
    }

    /// True iff at least one allowed rotation of this item fits in an empty `container`.
    /// Used as a fast-path rejection before any anchor search.
    pub fn fits_in_some_rotation(&self, container: &Dim) -> bool {
        self.allowed_rotations
            .iter()
            .any(|rot| rot.apply(self.dim).fits_within(container))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_fails_with_invalid_dimension() {
        let err = Item::new(0, 0.0, 50.0, 50.0, None, None).unwrap_err();
        assert!(matches!(err, PackError::InvalidDimension { .. }));
    }

    #[test]
    fn explicit_empty_rotation_set_is_rejected() {
        let err = Item::new(7, 10.0, 10.0, 10.0, Some(vec![]), None).unwrap_err();
        assert_eq!(err, PackError::EmptyRotationSet { id: 7 });
    }

    #[test]
    fn rotations_default_to_all_six() {
        let item = Item::new(0, 10.0, 20.0, 30.0, None, None).unwrap();
        assert_eq!(item.allowed_rotations, Rotation::ALL.to_vec());
    }

    #[test]
    fn fast_path_detects_rotated_fit() {
        let container = Dim::try_new(50.0, 50.0, 100.0).unwrap();
        // only fits with its long axis on z
        let item = Item::new(0, 100.0, 40.0, 40.0, None, None).unwrap();
        assert!(item.fits_in_some_rotation(&container));

        let restricted = Item::new(1, 100.0, 40.0, 40.0, Some(vec![Rotation::Whd]), None).unwrap();
        assert!(!restricted.fits_in_some_rotation(&container));
    }
}
