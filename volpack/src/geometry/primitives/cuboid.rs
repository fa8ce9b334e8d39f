use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Dim, Point3};
use crate::util::FPA;

/// An axis-aligned box at a position: the bounding volume of a placed item.
/// `pos` is the minimum corner.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Cuboid {
    pub pos: Point3,
    pub dim: Dim,
}

impl Cuboid {
    pub fn x_max(&self) -> f32 {
        self.pos.x() + self.dim.w
    }

    pub fn y_max(&self) -> f32 {
        self.pos.y() + self.dim.h
    }

    pub fn z_max(&self) -> f32 {
        self.pos.z() + self.dim.d
    }

    /// True iff `self` lies entirely within `[0, container.w] x [0, container.h] x [0, container.d]`,
    /// with tolerance.
    pub fn within(&self, container: &Dim) -> bool {
        FPA(self.pos.x()) >= FPA(0.0)
            && FPA(self.pos.y()) >= FPA(0.0)
            && FPA(self.pos.z()) >= FPA(0.0)
            && FPA(self.x_max()) <= FPA(container.w)
            && FPA(self.y_max()) <= FPA(container.h)
            && FPA(self.z_max()) <= FPA(container.d)
    }

    /// The three outward corners on the max-x, max-y and max-z faces.
    /// These become the candidate anchor points for subsequent placements.
    pub fn outward_corners(&self) -> [Point3; 3] {
        [
            Point3(self.x_max(), self.pos.y(), self.pos.z()),
            Point3(self.pos.x(), self.y_max(), self.pos.z()),
            Point3(self.pos.x(), self.pos.y(), self.z_max()),
        ]
    }
}

impl CollidesWith<Cuboid> for Cuboid {
    /// Half-open interval semantics: cuboids sharing a face do not collide.
    #[inline(always)]
    fn collides_with(&self, other: &Cuboid) -> bool {
        FPA(self.pos.x()) < FPA(other.x_max())
            && FPA(other.pos.x()) < FPA(self.x_max())
            && FPA(self.pos.y()) < FPA(other.y_max())
            && FPA(other.pos.y()) < FPA(self.y_max())
            && FPA(self.pos.z()) < FPA(other.z_max())
            && FPA(other.pos.z()) < FPA(self.z_max())
    }
}

impl CollidesWith<Point3> for Cuboid {
    /// Half-open on the max faces: a point on a min face collides, on a max face it does not.
    #[inline(always)]
    fn collides_with(&self, point: &Point3) -> bool {
        FPA(point.x()) >= FPA(self.pos.x())
            && FPA(point.x()) < FPA(self.x_max())
            && FPA(point.y()) >= FPA(self.pos.y())
            && FPA(point.y()) < FPA(self.y_max())
            && FPA(point.z()) >= FPA(self.pos.z())
            && FPA(point.z()) < FPA(self.z_max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuboid(x: f32, y: f32, z: f32, w: f32, h: f32, d: f32) -> Cuboid {
        Cuboid {
            pos: Point3(x, y, z),
            dim: Dim::try_new(w, h, d).unwrap(),
        }
    }

    #[test]
    fn touching_faces_do_not_collide() {
        let a = cuboid(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        let b = cuboid(10.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        let c = cuboid(0.0, 10.0, 0.0, 10.0, 10.0, 10.0);
        let d = cuboid(0.0, 0.0, 10.0, 10.0, 10.0, 10.0);
        assert!(!a.collides_with(&b));
        assert!(!a.collides_with(&c));
        assert!(!a.collides_with(&d));
    }

    #[test]
    fn overlapping_cuboids_collide() {
        let a = cuboid(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        let b = cuboid(5.0, 5.0, 5.0, 10.0, 10.0, 10.0);
        assert!(a.collides_with(&b));
        assert!(b.collides_with(&a));
    }

    #[test]
    fn overlap_requires_all_three_axes() {
        let a = cuboid(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        // overlaps in x and y, disjoint in z
        let b = cuboid(5.0, 5.0, 20.0, 10.0, 10.0, 10.0);
        assert!(!a.collides_with(&b));
    }

    #[test]
    fn point_collision_is_half_open_on_max_faces() {
        let c = cuboid(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        assert!(c.collides_with(&Point3(0.0, 0.0, 0.0)));
        assert!(c.collides_with(&Point3(5.0, 5.0, 5.0)));
        assert!(!c.collides_with(&Point3(10.0, 0.0, 0.0)));
        assert!(!c.collides_with(&Point3(0.0, 0.0, 10.0)));
    }

    #[test]
    fn within_accepts_exact_fill() {
        let container = Dim::try_new(10.0, 10.0, 10.0).unwrap();
        assert!(cuboid(0.0, 0.0, 0.0, 10.0, 10.0, 10.0).within(&container));
        assert!(!cuboid(0.1, 0.0, 0.0, 10.0, 10.0, 10.0).within(&container));
        assert!(!cuboid(-0.1, 0.0, 0.0, 5.0, 5.0, 5.0).within(&container));
    }

    #[test]
    fn outward_corners_sit_on_max_faces() {
        let c = cuboid(1.0, 2.0, 3.0, 10.0, 20.0, 30.0);
        assert_eq!(
            c.outward_corners(),
            [
                Point3(11.0, 2.0, 3.0),
                Point3(1.0, 22.0, 3.0),
                Point3(1.0, 2.0, 33.0)
            ]
        );
    }
}
