use ordered_float::OrderedFloat;

use crate::geometry::primitives::{Cuboid, Dim, Point3};
use crate::util::FPA;

/// Deterministic set of candidate anchor points for a single bin.
///
/// Seeded with the origin. After every successful placement the consumed anchor is
/// removed and the three outward corners of the placed cuboid are inserted.
/// Anchors are kept sorted ascending by (z, y, x), so iteration order is the
/// search order of the engine.
#[derive(Clone, Debug)]
pub struct AnchorSet {
    anchors: Vec<Point3>,
}

impl AnchorSet {
    pub fn new() -> Self {
        AnchorSet {
            anchors: vec![Point3::ORIGIN],
        }
    }

    /// Rebuilds the anchor set for a bin that already contains placements,
    /// replaying them in placement order.
    pub fn rebuild(bin_dim: &Dim, placed: impl Iterator<Item = Cuboid>) -> Self {
        let mut set = AnchorSet::new();
        for cuboid in placed {
            let idx = set.anchors.iter().position(|&a| points_eq(a, cuboid.pos));
            set.consume(idx, &cuboid, bin_dim);
        }
        set
    }

    pub fn as_slice(&self) -> &[Point3] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Registers a successful placement: removes the anchor at `used_idx` (if any)
    /// and inserts the placed cuboid's outward corners.
    /// Corners on or beyond the bin boundary can never host an item and are discarded,
    /// as are duplicates of existing anchors.
    pub fn consume(&mut self, used_idx: Option<usize>, placed: &Cuboid, bin_dim: &Dim) {
        if let Some(idx) = used_idx {
            self.anchors.remove(idx);
        }
        for corner in placed.outward_corners() {
            let in_bounds = FPA(corner.x()) < FPA(bin_dim.w)
                && FPA(corner.y()) < FPA(bin_dim.h)
                && FPA(corner.z()) < FPA(bin_dim.d);
            if in_bounds && !self.anchors.iter().any(|&a| points_eq(a, corner)) {
                self.anchors.push(corner);
            }
        }
        self.anchors.sort_by_key(|p| {
            (
                OrderedFloat(p.z()),
                OrderedFloat(p.y()),
                OrderedFloat(p.x()),
            )
        });
    }
}

impl Default for AnchorSet {
    fn default() -> Self {
        AnchorSet::new()
    }
}

fn points_eq(a: Point3, b: Point3) -> bool {
    FPA(a.x()) == FPA(b.x()) && FPA(a.y()) == FPA(b.y()) && FPA(a.z()) == FPA(b.z())
}
