//! Overlap tests between committed regions and the target volume

use crate::prelude::*;
#[cfg(any(test, feature = "use-mocks"))]
use mockiato::mockable;
use ncollide3d::math::{Isometry, Point as NcollidePoint, Vector as NcollideVector};
use ncollide3d::query;
use ncollide3d::shape::{Cuboid, Triangle};
use std::fmt::Debug;

/// Contacts shallower than this are treated as touching, not overlapping
const PENETRATION_EPSILON: f64 = 1e-9;

/// Fan triangles with a doubled area below this are skipped
const DEGENERATE_TRIANGLE_EPSILON: f64 = 1e-12;

/// Decides whether a region overlaps a target volume.
///
/// Implementations must be deterministic: testing the same
/// region against the same volume always yields the same answer.
#[cfg_attr(any(test, feature = "use-mocks"), mockable)]
pub trait IntersectionDetector: Debug {
    /// Returns `true` if `region` and the box of `volume` share interior points
    fn intersects(&self, region: &RegionPolygon, volume: &TargetVolume) -> bool;
}

/// [`IntersectionDetector`] backed by ncollide.
///
/// A region without area never intersects. Otherwise the bounding boxes
/// are compared first, after which every triangle of the region is checked
/// for penetration of the volume. Regions that merely touch the volume's
/// surface do not intersect, and neither do regions whose bounds reach into
/// the volume while their area passes beside it.
///
/// [`IntersectionDetector`]: ./trait.IntersectionDetector.html
#[derive(Debug, Default, Clone, Copy)]
pub struct NcollideIntersectionDetector;

impl NcollideIntersectionDetector {
    /// Creates a new detector
    pub fn new() -> Self {
        Self::default()
    }
}

impl IntersectionDetector for NcollideIntersectionDetector {
    fn intersects(&self, region: &RegionPolygon, volume: &TargetVolume) -> bool {
        if region.is_degenerate() {
            return false;
        }

        let bounds = volume.bounds();
        if !region.intersects(&bounds) {
            return false;
        }

        let center = bounds.center();
        let volume_position = Isometry::translation(center.x, center.y, center.z);
        let cuboid = Cuboid::new(to_ncollide_vector(bounds.half_extents()));

        region
            .triangles()
            .filter(|&[first, second, third]| {
                (second - first).cross_product(third - first).magnitude()
                    >= DEGENERATE_TRIANGLE_EPSILON
            })
            .any(|[first, second, third]| {
                let triangle = Triangle::new(
                    to_ncollide_point(first),
                    to_ncollide_point(second),
                    to_ncollide_point(third),
                );
                query::contact(
                    &Isometry::identity(),
                    &triangle,
                    &volume_position,
                    &cuboid,
                    0.0,
                )
                .map(|contact| contact.depth > PENETRATION_EPSILON)
                .unwrap_or(false)
            })
    }
}

fn to_ncollide_point(point: Point3) -> NcollidePoint<f64> {
    NcollidePoint::new(point.x, point.y, point.z)
}

fn to_ncollide_vector(vector: Vector3) -> NcollideVector<f64> {
    NcollideVector::new(vector.x, vector.y, vector.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volume() -> TargetVolume {
        TargetVolume::cube(Point3::default(), 0.25).unwrap()
    }

    fn region(points: &[(f64, f64, f64)]) -> RegionPolygon {
        PolygonBuilder::default()
            .vertices(points.iter().map(|&point| Point3::from(point)))
            .build()
            .unwrap()
    }

    #[test]
    fn region_covering_volume_intersects() {
        let region = region(&[(-1.0, 0.0, -1.0), (1.0, 0.0, -1.0), (0.0, 0.0, 1.0)]);
        assert!(NcollideIntersectionDetector::new().intersects(&region, &volume()));
    }

    #[test]
    fn region_inside_volume_intersects() {
        let region = region(&[(-0.05, 0.0, -0.05), (0.05, 0.0, -0.05), (0.0, 0.0, 0.05)]);
        assert!(NcollideIntersectionDetector::new().intersects(&region, &volume()));
    }

    #[test]
    fn region_crossing_edge_of_volume_intersects() {
        let region = region(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.5, 0.0, 1.0)]);
        assert!(NcollideIntersectionDetector::new().intersects(&region, &volume()));
    }

    #[test]
    fn region_far_outside_volume_does_not_intersect() {
        let region = region(&[(2.0, 0.0, 2.0), (3.0, 0.0, 2.0), (2.5, 0.0, 3.0)]);
        assert!(!NcollideIntersectionDetector::new().intersects(&region, &volume()));
    }

    #[test]
    fn region_with_overlapping_bounds_but_no_shared_area_does_not_intersect() {
        let region = region(&[(0.1, 0.0, 1.0), (1.0, 0.0, 1.0), (1.0, 0.0, -1.0)]);
        assert!(!NcollideIntersectionDetector::new().intersects(&region, &volume()));
    }

    #[test]
    fn region_above_volume_does_not_intersect() {
        let region = region(&[(-1.0, 1.0, -1.0), (1.0, 1.0, -1.0), (0.0, 1.0, 1.0)]);
        assert!(!NcollideIntersectionDetector::new().intersects(&region, &volume()));
    }

    #[test]
    fn region_touching_face_of_volume_does_not_intersect() {
        let region = region(&[(0.125, 0.0, -1.0), (0.125, 0.0, 1.0), (1.0, 0.0, 0.0)]);
        assert!(!NcollideIntersectionDetector::new().intersects(&region, &volume()));
    }

    #[test]
    fn collinear_region_does_not_intersect() {
        let region = region(&[(-1.0, 0.0, 0.0), (0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        assert!(!NcollideIntersectionDetector::new().intersects(&region, &volume()));
    }

    #[test]
    fn region_with_nan_vertex_does_not_intersect() {
        let region = RegionPolygon::from_unordered_points(&[
            Point3::new(-1.0, 0.0, -1.0),
            Point3::new(std::f64::NAN, 0.0, std::f64::NAN),
            Point3::new(0.0, 0.0, 1.0),
        ]);
        assert!(!NcollideIntersectionDetector::new().intersects(&region, &volume()));
    }

    #[test]
    fn repeated_tests_yield_same_result() {
        let detector = NcollideIntersectionDetector::new();
        let region = region(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.5, 0.0, 1.0)]);
        let volume = volume();

        let first_result = detector.intersects(&region, &volume);
        for _ in 0..5 {
            assert_eq!(first_result, detector.intersects(&region, &volume));
        }
    }
}
