use crate::{Intersects, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
///
/// ```other
///            y
///            │     ┌─────────┐ ← max
///            │    ╱         ╱│
///            │   ┌─────────┐ │
///            │   │         │ ┘
///            │   │         │╱
///   min →    │   └─────────┘
///            ┼──────────────────── x
///           ╱
///          z
/// ```
///
/// A box may be flat along any axis (e.g. the bounds of a horizontal polygon).
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Aabb {
    /// The corner with the smallest coordinates
    pub min: Point3,
    /// The corner with the largest coordinates
    pub max: Point3,
}

impl Aabb {
    /// Creates a new [`Aabb`] from two corners.
    ///
    /// # Examples
    ///
    /// ## From tuples
    /// ```
    /// use dragline_geometry::Aabb;
    ///
    /// let area = Aabb::try_new((-1.0, 0.0, -1.0), (1.0, 2.0, 1.0)).expect("Invalid aabb");
    /// ```
    ///
    /// ## From points
    /// ```
    /// use dragline_geometry::{Aabb, Point3};
    ///
    /// let area = Aabb::try_new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 2.0))
    ///     .expect("Invalid aabb");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when `min` is larger than `max` on any axis
    /// or when a coordinate is `NaN`.
    ///
    /// [`Aabb`]: ./struct.Aabb.html
    pub fn try_new<P1, P2>(min: P1, max: P2) -> Result<Self, ()>
    where
        P1: Into<Point3>,
        P2: Into<Point3>,
    {
        let min = min.into();
        let max = max.into();

        if min.x <= max.x && min.y <= max.y && min.z <= max.z {
            Ok(Self { min, max })
        } else {
            Err(())
        }
    }

    /// Creates a box around `center` extending `half_extents` in each direction.
    ///
    /// # Errors
    ///
    /// Returns an error when any of the half extents is negative or `NaN`.
    pub fn try_from_center<P>(center: P, half_extents: Vector3) -> Result<Self, ()>
    where
        P: Into<Point3>,
    {
        let center = center.into();
        Self::try_new(center - half_extents, center + half_extents)
    }

    /// Returns the smallest box containing all `points`, or `None` if there are none
    /// or if any coordinate is `NaN`.
    pub fn enclosing(points: &[Point3]) -> Option<Self> {
        let has_nan = |point: &Point3| point.x.is_nan() || point.y.is_nan() || point.z.is_nan();
        if points.iter().any(has_nan) {
            return None;
        }

        let (first, rest) = points.split_first()?;
        let (min, max) = rest.iter().fold((*first, *first), |(min, max), point| {
            (
                Point3::new(min.x.min(point.x), min.y.min(point.y), min.z.min(point.z)),
                Point3::new(max.x.max(point.x), max.y.max(point.y), max.z.max(point.z)),
            )
        });

        Self::try_new(min, max).ok()
    }

    /// Returns the center of the box
    pub fn center(&self) -> Point3 {
        self.min + (self.max - self.min) / 2.0
    }

    /// Returns the distances from the center to the faces of the box
    pub fn half_extents(&self) -> Vector3 {
        (self.max - self.min) / 2.0
    }

    /// Returns true if the box has a positive extent along every axis
    pub fn has_volume(&self) -> bool {
        self.min.x < self.max.x && self.min.y < self.max.y && self.min.z < self.max.z
    }
}

impl Intersects for Aabb {
    /// Returns wether this box touches, contains or is contained in another box
    fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
            && self.min.z <= other.max.z
            && other.min.z <= self.max.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_cube() -> Aabb {
        Aabb::try_new((-0.5, -0.5, -0.5), (0.5, 0.5, 0.5)).unwrap()
    }

    #[test]
    fn try_new_accepts_flat_box() {
        assert!(Aabb::try_new((0.0, 0.0, 0.0), (1.0, 0.0, 1.0)).is_ok());
    }

    #[test]
    fn try_new_errors_when_min_is_larger_than_max() {
        assert!(Aabb::try_new((10.0, 10.0, 10.0), (0.0, 0.0, 0.0)).is_err());
    }

    #[test]
    fn try_new_errors_when_min_z_is_larger_than_max_z() {
        assert!(Aabb::try_new((0.0, 0.0, 10.0), (5.0, 5.0, 0.0)).is_err());
    }

    #[test]
    fn try_new_errors_for_nan() {
        assert!(Aabb::try_new((std::f64::NAN, 0.0, 0.0), (1.0, 1.0, 1.0)).is_err());
    }

    #[test]
    fn try_from_center_builds_symmetric_box() {
        let aabb = Aabb::try_from_center((0.0, 0.0, 0.0), Vector3::new(0.125, 0.125, 0.125))
            .unwrap();
        assert_eq!(Point3::new(-0.125, -0.125, -0.125), aabb.min);
        assert_eq!(Point3::new(0.125, 0.125, 0.125), aabb.max);
    }

    #[test]
    fn try_from_center_errors_for_negative_extents() {
        assert!(Aabb::try_from_center((0.0, 0.0, 0.0), Vector3::new(-1.0, 1.0, 1.0)).is_err());
    }

    #[test]
    fn reports_center_and_half_extents() {
        let aabb = Aabb::try_new((1.0, 0.0, -2.0), (3.0, 4.0, 2.0)).unwrap();
        assert_eq!(Point3::new(2.0, 2.0, 0.0), aabb.center());
        assert_eq!(Vector3::new(1.0, 2.0, 2.0), aabb.half_extents());
    }

    #[test]
    fn enclosing_no_points_is_none() {
        assert!(Aabb::enclosing(&[]).is_none());
    }

    #[test]
    fn enclosing_points_with_nan_is_none() {
        let aabb = Aabb::enclosing(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, std::f64::NAN, 0.0),
            Point3::new(0.5, 0.0, 1.0),
        ]);

        assert!(aabb.is_none());
    }

    #[test]
    fn enclosing_triangle_is_flat_when_points_share_height() {
        let aabb = Aabb::enclosing(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 0.0, 1.0),
        ])
        .unwrap();

        assert_eq!(Point3::new(0.0, 0.0, 0.0), aabb.min);
        assert_eq!(Point3::new(1.0, 0.0, 1.0), aabb.max);
        assert!(!aabb.has_volume());
    }

    #[test]
    fn intersects_self() {
        assert!(unit_cube().intersects(&unit_cube()));
    }

    #[test]
    fn intersects_contained() {
        let inner = Aabb::try_new((-0.1, -0.1, -0.1), (0.1, 0.1, 0.1)).unwrap();
        assert!(unit_cube().intersects(&inner));
        assert!(inner.intersects(&unit_cube()));
    }

    #[test]
    fn intersects_touching_face() {
        let neighbour = Aabb::try_new((0.5, -0.5, -0.5), (1.5, 0.5, 0.5)).unwrap();
        assert!(unit_cube().intersects(&neighbour));
    }

    #[test]
    fn intersects_flat_box_through_middle() {
        let flat = Aabb::try_new((-2.0, 0.0, -2.0), (2.0, 0.0, 2.0)).unwrap();
        assert!(unit_cube().intersects(&flat));
    }

    #[test]
    fn does_not_intersect_when_apart() {
        let far_away = Aabb::try_new((2.0, 2.0, 2.0), (3.0, 3.0, 3.0)).unwrap();
        assert!(!unit_cube().intersects(&far_away));
    }

    #[test]
    fn does_not_intersect_when_apart_on_single_axis() {
        let beside = Aabb::try_new((-0.5, -0.5, 0.6), (0.5, 0.5, 1.0)).unwrap();
        assert!(!unit_cube().intersects(&beside));
    }
}
