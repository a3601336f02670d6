use crate::Vector3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point in 3D space
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Point3 {
    /// The x coordinate of the Point
    pub x: f64,
    /// The y coordinate of the Point, i.e. its height
    pub y: f64,
    /// The z coordinate of the Point
    pub z: f64,
}

impl Point3 {
    /// Creates a new point from its coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the same point with its height replaced by `y`
    pub fn with_height(self, y: f64) -> Self {
        Self { y, ..self }
    }

    /// Returns true if no coordinate is infinite or `NaN`
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Point3 { x, y, z }
    }
}

impl From<Vector3> for Point3 {
    fn from(vector: Vector3) -> Self {
        Self {
            x: vector.x,
            y: vector.y,
            z: vector.z,
        }
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    fn sub(self, other: Point3) -> Self::Output {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, other: Vector3) -> Self::Output {
        Point3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;

    fn sub(self, other: Vector3) -> Self::Output {
        Point3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

/// Returns the arithmetic mean of `points`.
///
/// Angles around the centroid are measured in the horizontal (x, z) plane,
/// see [`angle_around`], so the averaged height does not influence them.
///
/// # Panics
/// Panics if `points` is empty.
///
/// [`angle_around`]: ./fn.angle_around.html
pub fn centroid(points: &[Point3]) -> Point3 {
    assert!(
        !points.is_empty(),
        "Attempted to take the centroid of zero points, which is undefined"
    );

    let count = points.len() as f64;
    let sum = points.iter().fold(Vector3::default(), |sum, &point| {
        sum + Vector3::from(point)
    });

    Point3::from(sum / count)
}

/// Returns the angle of `point` around `center` in the horizontal plane,
/// i.e. `atan2(point.z - center.z, point.x - center.x)`, in the range (-π; π].
pub fn angle_around(center: Point3, point: Point3) -> f64 {
    (point.z - center.z).atan2(point.x - center.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearly_eq::assert_nearly_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn point_with_nan_coordinate_is_not_finite() {
        assert!(!Point3::new(0.0, std::f64::NAN, 0.0).is_finite());
        assert!(!Point3::new(std::f64::NEG_INFINITY, 0.0, 0.0).is_finite());
        assert!(Point3::new(1.0, -2.0, 3.0).is_finite());
    }

    #[test]
    fn subtracting_points_yields_vector() {
        let start = Point3::new(1.0, 2.0, 3.0);
        let end = Point3::new(4.0, 0.0, -3.0);
        assert_eq!(Vector3::new(3.0, -2.0, -6.0), end - start);
    }

    #[test]
    fn adding_vector_moves_point() {
        let point = Point3::new(1.0, 0.0, 0.0);
        let vector = Vector3::new(0.5, 0.0, 0.0);
        assert_eq!(Point3::new(1.5, 0.0, 0.0), point + vector);
    }

    #[test]
    fn subtracting_vector_moves_point_back() {
        let point = Point3::new(1.5, 0.0, 0.0);
        let vector = Vector3::new(0.5, 0.0, 0.0);
        assert_eq!(Point3::new(1.0, 0.0, 0.0), point - vector);
    }

    #[test]
    fn replaces_height() {
        let point = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(Point3::new(1.0, -7.0, 3.0), point.with_height(-7.0));
    }

    #[test]
    fn can_be_created_from_tuple() {
        assert_eq!(Point3::new(1.0, 2.0, 3.0), Point3::from((1.0, 2.0, 3.0)));
    }

    #[test]
    fn centroid_of_single_point_is_point() {
        let point = Point3::new(-3.0, 4.0, 1.0);
        assert_eq!(point, centroid(&[point]));
    }

    #[test]
    fn centroid_of_triangle_is_mean() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 0.0, 1.0),
        ];
        let centroid = centroid(&points);

        assert_nearly_eq!(0.5, centroid.x);
        assert_nearly_eq!(0.0, centroid.y);
        assert_nearly_eq!(1.0 / 3.0, centroid.z);
    }

    #[test]
    #[should_panic]
    fn centroid_of_no_points_is_undefined() {
        let _centroid = centroid(&[]);
    }

    #[test]
    fn angle_around_is_zero_on_positive_x_axis() {
        let angle = angle_around(Point3::default(), Point3::new(2.0, 5.0, 0.0));
        assert_nearly_eq!(0.0, angle);
    }

    #[test]
    fn angle_around_is_quarter_turn_on_positive_z_axis() {
        let angle = angle_around(Point3::default(), Point3::new(0.0, 0.0, 3.0));
        assert_nearly_eq!(FRAC_PI_2, angle);
    }

    #[test]
    fn angle_around_is_pi_on_negative_x_axis() {
        let angle = angle_around(Point3::default(), Point3::new(-1.0, 0.0, 0.0));
        assert_nearly_eq!(PI, angle);
    }

    #[test]
    fn angle_around_ignores_height() {
        let center = Point3::new(1.0, 0.0, 1.0);
        let low = angle_around(center, Point3::new(2.0, -4.0, 2.0));
        let high = angle_around(center, Point3::new(2.0, 9.0, 2.0));
        assert_nearly_eq!(low, high);
    }
}
