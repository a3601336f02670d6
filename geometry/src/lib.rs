//! Geometric primitives of the dragline interaction pipeline:
//! points and vectors in 3D space, yaw-only orientations,
//! axis-aligned boxes and the angularly ordered region polygon.

#![deny(
    rust_2018_idioms,
    missing_debug_implementations,
    missing_docs,
    clippy::doc_markdown,
    clippy::unimplemented
)]
#![cfg_attr(test, allow(clippy::float_cmp))]

mod aabb;
mod intersects;
mod orientation;
mod point;
mod polygon;
mod radians;
mod vector;

pub use self::aabb::*;
pub use self::intersects::*;
pub use self::orientation::*;
pub use self::point::*;
pub use self::polygon::*;
pub use self::radians::*;
pub use self::vector::*;
