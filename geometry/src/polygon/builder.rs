use super::{RegionPolygon, MINIMUM_VERTICES_IN_EUCLIDEAN_GEOMETRY};
use crate::Point3;

/// [`RegionPolygon`] factory.
///
/// The vertices may be given in any order,
/// [`PolygonBuilder::build`] arranges them by angle.
///
/// # Examples
/// ```
/// use dragline_geometry::PolygonBuilder;
///
/// let triangle = PolygonBuilder::default()
///     .vertex(0.0, 0.0, 0.0)
///     .vertex(1.0, 0.0, 0.0)
///     .vertex(0.5, 0.0, 1.0)
///     .build()
///     .expect("Generated an invalid polygon");
/// ```
///
/// [`RegionPolygon`]: ./struct.RegionPolygon.html
/// [`PolygonBuilder::build`]: ./struct.PolygonBuilder.html#method.build
#[derive(Default, Debug)]
pub struct PolygonBuilder {
    vertices: Vec<Point3>,
}

impl PolygonBuilder {
    /// Adds a vertex to the polygon
    pub fn vertex(mut self, x: f64, y: f64, z: f64) -> Self {
        self.vertices.push(Point3 { x, y, z });
        self
    }

    /// Adds all given points as vertices
    pub fn vertices<I>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = Point3>,
    {
        self.vertices.extend(points);
        self
    }

    /// Finishes building the [`RegionPolygon`] with all
    /// vertices that have been configured up to this point
    ///
    /// # Errors
    /// This method will return an error if the number of configured
    /// vertices is less than three, as the resulting [`RegionPolygon`]
    /// would not be two-dimensional.
    ///
    /// [`RegionPolygon`]: ./struct.RegionPolygon.html
    pub fn build(self) -> Result<RegionPolygon, ()> {
        if self.vertices.len() < MINIMUM_VERTICES_IN_EUCLIDEAN_GEOMETRY {
            return Err(());
        }

        Ok(RegionPolygon::from_unordered_points(&self.vertices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_without_vertices() {
        assert!(PolygonBuilder::default().build().is_err());
    }

    #[test]
    fn errors_with_two_vertices() {
        let result = PolygonBuilder::default()
            .vertex(0.0, 0.0, 0.0)
            .vertex(1.0, 0.0, 1.0)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn builds_triangle_in_angular_order() {
        let polygon = PolygonBuilder::default()
            .vertex(0.0, 0.0, 0.0)
            .vertex(1.0, 0.0, 0.0)
            .vertex(0.5, 0.0, 1.0)
            .build()
            .unwrap();

        assert_eq!(
            &[
                Point3::new(0.5, 0.0, 1.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 0.0),
            ],
            polygon.vertices()
        );
    }

    #[test]
    fn accepts_iterator_of_points() {
        let points = vec![
            Point3::new(-1.0, 0.0, -1.0),
            Point3::new(1.0, 0.0, -1.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let polygon = PolygonBuilder::default()
            .vertices(points.clone())
            .build()
            .unwrap();

        assert_eq!(3, polygon.vertices().len());
        assert!(points
            .iter()
            .all(|point| polygon.vertices().contains(point)));
    }
}
