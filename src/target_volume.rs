//! The box that committed regions are tested against

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// How the target volume is drawn
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum VisualState {
    /// No region overlaps the volume
    Normal,
    /// The last committed region overlaps the volume
    Intersecting,
}

impl Default for VisualState {
    fn default() -> Self {
        VisualState::Normal
    }
}

impl From<bool> for VisualState {
    fn from(intersects: bool) -> Self {
        if intersects {
            VisualState::Intersecting
        } else {
            VisualState::Normal
        }
    }
}

/// A fixed, axis-aligned box whose appearance reflects
/// whether the latest region overlaps it.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TargetVolume {
    bounds: Aabb,
    visual_state: VisualState,
    last_intersection: Option<bool>,
}

impl TargetVolume {
    /// Creates a volume occupying `bounds` that has not been tested yet
    pub fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            visual_state: VisualState::default(),
            last_intersection: None,
        }
    }

    /// Creates a cube centered on `center`
    ///
    /// # Errors
    /// Returns an error if `side_length` is negative or `NaN`
    pub fn cube(center: Point3, side_length: f64) -> Result<Self, ()> {
        let half_side = side_length / 2.0;
        let bounds = Aabb::try_from_center(center, Vector3::new(half_side, half_side, half_side))?;
        Ok(Self::new(bounds))
    }

    /// The space occupied by the volume
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// The current appearance
    pub fn visual_state(&self) -> VisualState {
        self.visual_state
    }

    /// The result of the most recent intersection test, `None` before the first one
    pub fn last_intersection(&self) -> Option<bool> {
        self.last_intersection
    }

    /// Records the outcome of an intersection test and updates the appearance to match
    pub fn apply_intersection_result(&mut self, intersects: bool) {
        self.last_intersection = Some(intersects);
        self.visual_state = VisualState::from(intersects);
    }
}
