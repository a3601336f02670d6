use crate::Point3;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A vector in 3D space
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// The x component of the Vector
    pub x: f64,
    /// The y component of the Vector
    pub y: f64,
    /// The z component of the Vector
    pub z: f64,
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Self::Output) -> Self::Output {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Self::Output) -> Self::Output {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f64) -> Self::Output {
        Vector3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        self * -1.0
    }
}

impl From<Point3> for Vector3 {
    fn from(point: Point3) -> Self {
        Self {
            x: point.x,
            y: point.y,
            z: point.z,
        }
    }
}

impl Vector3 {
    /// Creates a new vector from its components
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Calculates the dot product of itself and another vector
    /// # Examples
    /// ```
    /// use dragline_geometry::Vector3;
    /// // a · b = c
    /// let a = Vector3::new(2.0, 3.0, 1.0);
    /// let b = Vector3::new(-4.0, 10.0, 2.0);
    /// let c = a.dot_product(b);
    /// assert_eq!(24.0, c);
    /// ```
    pub fn dot_product(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product of itself and another vector
    /// # Examples
    /// ```
    /// use dragline_geometry::Vector3;
    /// // x × z = -y
    /// let x = Vector3::new(1.0, 0.0, 0.0);
    /// let z = Vector3::new(0.0, 0.0, 1.0);
    /// assert_eq!(Vector3::new(0.0, -1.0, 0.0), x.cross_product(z));
    /// ```
    pub fn cross_product(self, other: Self) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the magnitude of the vector, i.e. its length if viewed as a line
    pub fn magnitude(self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Returns unit vector of this vector, i.e. a vector with the same direction and a magnitude of 1
    ///
    /// # Panics
    /// Panics on the zero vector. Use [`Vector3::try_unit`] when the magnitude may be zero.
    ///
    /// [`Vector3::try_unit`]: ./struct.Vector3.html#method.try_unit
    pub fn unit(self) -> Vector3 {
        self.try_unit().expect(
            "Attempted to take the unit vector of a zero vector (0, 0, 0), which is undefined",
        )
    }

    /// Returns the unit vector of this vector, or `None` if this is the zero vector
    /// or has a component that is infinite or `NaN`
    pub fn try_unit(self) -> Option<Vector3> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 || !magnitude.is_finite() {
            None
        } else {
            Some(self / magnitude)
        }
    }

    /// Returns the same vector with its vertical component dropped
    pub fn horizontal(self) -> Vector3 {
        Vector3 { y: 0.0, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearly_eq::assert_nearly_eq;

    #[test]
    fn adds_other_vector() {
        let original_vector = Vector3::new(12.0, 43.0, -1.0);
        let vector_to_add = Vector3::new(3.0, 1.0, 4.0);
        let expected_vector = Vector3::new(15.0, 44.0, 3.0);
        assert_eq!(expected_vector, original_vector + vector_to_add);
    }

    #[test]
    fn adds_to_zero_vector() {
        let original_vector = Vector3::new(12.0, 43.0, 7.5);
        let vector_to_add = Vector3::new(-12.0, -43.0, -7.5);
        assert_eq!(Vector3::default(), original_vector + vector_to_add);
    }

    #[test]
    fn subtracts_negative_vector() {
        let original_vector = Vector3::new(12.0, 43.0, 0.0);
        let vector_to_subtract = Vector3::new(-10.0, -20.0, -1.0);
        let expected_vector = Vector3::new(22.0, 63.0, 1.0);
        assert_eq!(expected_vector, original_vector - vector_to_subtract);
    }

    #[test]
    fn scales_vector_with_negative_component() {
        let original_vector = Vector3::new(-4.0, 2.0, 1.0);
        let expected_vector = Vector3::new(-8.0, 4.0, 2.0);
        assert_eq!(expected_vector, original_vector * 2.0);
    }

    #[test]
    fn shrinks_positive_vector() {
        let original_vector = Vector3::new(1.0, 2.0, 4.0);
        let expected_vector = Vector3::new(0.5, 1.0, 2.0);
        assert_eq!(expected_vector, original_vector / 2.0);
    }

    #[test]
    fn negates_vector() {
        assert_eq!(
            Vector3::new(-1.0, 2.0, -3.0),
            -Vector3::new(1.0, -2.0, 3.0)
        );
    }

    #[test]
    fn calculates_negative_dot_product() {
        let a = Vector3::new(2.0, 3.0, 0.0);
        let b = Vector3::new(-40.0, 10.0, 5.0);
        assert_nearly_eq!(-50.0, a.dot_product(b));
    }

    #[test]
    fn cross_product_is_perpendicular() {
        let a = Vector3::new(2.0, 3.0, -1.0);
        let b = Vector3::new(-4.0, 10.0, 2.0);
        let cross_product = a.cross_product(b);

        assert_nearly_eq!(0.0, cross_product.dot_product(a));
        assert_nearly_eq!(0.0, cross_product.dot_product(b));
    }

    #[test]
    fn cross_product_of_self_is_zero() {
        let vector = Vector3::new(40.0, 10.0, -3.0);
        assert_eq!(Vector3::default(), vector.cross_product(vector));
    }

    #[test]
    fn magnitude_of_zero_vector_is_zero() {
        assert_nearly_eq!(0.0, Vector3::default().magnitude());
    }

    #[test]
    fn magnitude_of_rotated_vector_is_correct() {
        let vector = Vector3::new(2.0, 3.0, 6.0);
        assert_nearly_eq!(7.0, vector.magnitude());
    }

    #[test]
    fn unit_vector_is_correct_for_negative_numbers() {
        let vector = Vector3::new(0.0, -3.0, -4.0);
        assert_eq!(Vector3::new(0.0, -0.6, -0.8), vector.unit());
    }

    #[test]
    fn magnitude_of_unit_vector_is_one() {
        let vector = Vector3::new(1_000.0, -2_000.0, 0.125);
        assert_nearly_eq!(1.0, vector.unit().magnitude(), 1e-12);
    }

    #[test]
    fn magnitude_of_small_unit_vector_is_one() {
        let vector = Vector3::new(0.000_3, 0.0, -0.000_1);
        assert_nearly_eq!(1.0, vector.unit().magnitude(), 1e-12);
    }

    #[test]
    #[should_panic]
    fn unit_vector_of_zero_vector_is_undefined() {
        let _unit_vector = Vector3::default().unit();
    }

    #[test]
    fn try_unit_of_zero_vector_is_none() {
        assert!(Vector3::default().try_unit().is_none());
    }

    #[test]
    fn try_unit_of_nan_vector_is_none() {
        assert!(Vector3::new(std::f64::NAN, 0.0, 1.0).try_unit().is_none());
    }

    #[test]
    fn try_unit_of_infinite_vector_is_none() {
        assert!(Vector3::new(std::f64::INFINITY, 0.0, 0.0).try_unit().is_none());
    }

    #[test]
    fn try_unit_of_axis_vector_is_axis() {
        let vector = Vector3::new(5.0, 0.0, 0.0);
        assert_eq!(Some(Vector3::new(1.0, 0.0, 0.0)), vector.try_unit());
    }

    #[test]
    fn horizontal_drops_height() {
        let vector = Vector3::new(1.0, 5.0, -2.0);
        assert_eq!(Vector3::new(1.0, 0.0, -2.0), vector.horizontal());
    }
}
