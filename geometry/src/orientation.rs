use crate::{Point3, Radians};
use nalgebra::{UnitQuaternion, Vector3 as NalgebraVector};
use serde::{Deserialize, Serialize};

/// The orientation of an upright object.
///
/// Only the rotation around the vertical axis (yaw) is free,
/// pitch and roll are locked to zero.
/// A yaw of zero faces the positive z axis, a yaw of π/2 faces the positive x axis.
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct Orientation {
    /// Rotation around the vertical axis
    pub yaw: Radians,
}

impl Orientation {
    /// Creates an orientation with the given yaw
    pub fn from_yaw(yaw: Radians) -> Self {
        Self { yaw }
    }

    /// Returns the upright orientation of an object at `position` looking at `target`.
    ///
    /// Returns `None` when `target` lies directly above or below `position`,
    /// as there is no horizontal direction to face.
    pub fn facing(position: Point3, target: Point3) -> Option<Self> {
        let direction = (target - position).horizontal();
        if direction.x == 0.0 && direction.z == 0.0 {
            return None;
        }

        let yaw = Radians::wrapped(direction.x.atan2(direction.z)).ok()?;
        Some(Self { yaw })
    }

    /// Converts the orientation into a rotation around the vertical (y) axis
    pub fn to_unit_quaternion(self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&NalgebraVector::y_axis(), self.yaw.value())
    }
}
