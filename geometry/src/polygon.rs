//! Types relating to the region polygon and its construction

pub use self::builder::*;
use crate::{angle_around, centroid, Aabb, Intersects, Point3, Vector3};
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Ordering;

mod builder;

/// Polygons with an area below this are considered collinear
const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

/// A simple (non self-intersecting) polygon in 3D space.
///
/// The vertices are ordered by their angle around the centroid in the
/// horizontal plane, from the largest angle to the smallest. Renderers rely on
/// this winding for the orientation of the polygon's face.
///
/// Can either be constructed using a [`PolygonBuilder`],
/// [`RegionPolygon::from_unordered_points`] or with [`RegionPolygon::try_new`].
///
/// [`PolygonBuilder`]: ./struct.PolygonBuilder.html
/// [`RegionPolygon::from_unordered_points`]: ./struct.RegionPolygon.html#method.from_unordered_points
/// [`RegionPolygon::try_new`]: ./struct.RegionPolygon.html#method.try_new
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct RegionPolygon {
    vertices: Vec<Point3>,
}

impl RegionPolygon {
    /// Builds a polygon from points in any order by sorting them by their angle
    /// around the centroid and reversing the result.
    ///
    /// Points with the same angle end up in the reverse of their input order.
    /// Collinear points are accepted and result in a polygon without area.
    ///
    /// # Panics
    /// Panics if fewer than three points are given.
    pub fn from_unordered_points(points: &[Point3]) -> Self {
        assert!(
            points.len() >= MINIMUM_VERTICES_IN_EUCLIDEAN_GEOMETRY,
            "A polygon needs at least {} points, got {}",
            MINIMUM_VERTICES_IN_EUCLIDEAN_GEOMETRY,
            points.len()
        );

        let center = centroid(points);
        let mut points_with_angles: Vec<_> = points
            .iter()
            .map(|&point| (angle_around(center, point), point))
            .collect();
        // sort_by is stable, so after reversing, ties end up in reverse input order
        points_with_angles.sort_by(|(angle_a, _), (angle_b, _)| {
            angle_a.partial_cmp(angle_b).unwrap_or(Ordering::Equal)
        });
        points_with_angles.reverse();

        Self {
            vertices: points_with_angles
                .into_iter()
                .map(|(_, point)| point)
                .collect(),
        }
    }

    /// Creates a new [`RegionPolygon`] from vertices that are already ordered.
    ///
    /// # Errors
    /// This method will return an error if the number of vertices is less than three
    /// (as the resulting polygon would not be two-dimensional), or if the vertices
    /// are not ordered by descending angle around their centroid.
    ///
    /// [`RegionPolygon`]: ./struct.RegionPolygon.html
    pub fn try_new(vertices: Vec<Point3>) -> Result<Self, ()> {
        if vertices.len() >= MINIMUM_VERTICES_IN_EUCLIDEAN_GEOMETRY
            && is_angularly_ordered(&vertices)
        {
            Ok(Self { vertices })
        } else {
            Err(())
        }
    }

    /// Returns the vertices of the polygon
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the polygon's edges, i.e. the lines between vertices, as vectors.
    pub fn edges(&self) -> impl Iterator<Item = Vector3> + '_ {
        let vertices = self.vertices();
        let shifted_vertices = vertices.iter().cycle().skip(1).take(vertices.len());
        vertices
            .iter()
            .zip(shifted_vertices)
            .map(|(&first_vertex, &second_vertex)| second_vertex - first_vertex)
    }

    /// Splits the polygon into a fan of triangles around its first vertex
    pub fn triangles(&self) -> impl Iterator<Item = [Point3; 3]> + '_ {
        let anchor = self.vertices[0];
        self.vertices[1..]
            .iter()
            .tuple_windows()
            .map(move |(&second, &third)| [anchor, second, third])
    }

    /// Returns the arithmetic mean of the vertices
    pub fn centroid(&self) -> Point3 {
        centroid(&self.vertices)
    }

    /// Returns the area enclosed by the polygon
    pub fn area(&self) -> f64 {
        let normal = self
            .triangles()
            .map(|[first, second, third]| (second - first).cross_product(third - first))
            .fold(Vector3::default(), |sum, normal| sum + normal);

        normal.magnitude() / 2.0
    }

    /// Returns true if all vertices lie on a single line, leaving the polygon without area,
    /// or if a vertex has a coordinate that is infinite or `NaN`.
    /// Nothing can intersect such a polygon.
    pub fn is_degenerate(&self) -> bool {
        let area = self.area();
        !area.is_finite() || area < DEGENERATE_AREA_EPSILON
    }

    /// Returns an [`Aabb`] which fully contains this polygon.
    ///
    /// # Panics
    /// Panics if a vertex has a `NaN` coordinate. Check [`RegionPolygon::is_degenerate`] first.
    ///
    /// [`RegionPolygon::is_degenerate`]: ./struct.RegionPolygon.html#method.is_degenerate
    /// [`Aabb`]: ./struct.Aabb.html
    pub fn aabb(&self) -> Aabb {
        Aabb::enclosing(&self.vertices)
            .expect("Internal error: A polygon always has vertices with comparable coordinates")
    }
}

impl Intersects<Aabb> for RegionPolygon {
    /// Returns wether the bounds of this polygon touch or overlap the box
    fn intersects(&self, other: &Aabb) -> bool {
        Aabb::enclosing(&self.vertices).map_or(false, |bounds| bounds.intersects(other))
    }
}

const MINIMUM_VERTICES_IN_EUCLIDEAN_GEOMETRY: usize = 3;

/// Walking the vertices, the angle around the centroid may only
/// increase once, namely when wrapping around from -π to π.
fn is_angularly_ordered(vertices: &[Point3]) -> bool {
    let center = centroid(vertices);
    let angles: Vec<_> = vertices
        .iter()
        .map(|&vertex| angle_around(center, vertex))
        .collect();

    let ascents = angles
        .iter()
        .zip(angles.iter().cycle().skip(1))
        .filter(|(current, next)| next > current)
        .count();

    ascents <= 1
}
