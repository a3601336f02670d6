//! Objects of the scene that the pipeline moves around

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use slab::Slab;
use std::fmt::Debug;

#[cfg(any(test, feature = "use-mocks"))]
pub use self::mocks::*;

/// A positioned, orientable object of the scene, such as the indicator.
///
/// The host's renderer reads these values, the pipeline writes them.
pub trait SceneObject: Debug {
    /// The current position of the object
    fn position(&self) -> Point3;

    /// Moves the object to `position`
    fn set_position(&mut self, position: Point3);

    /// The current orientation of the object
    fn orientation(&self) -> Orientation;

    /// Rotates the object to `orientation`
    fn set_orientation(&mut self, orientation: Orientation);

    /// Turns the object around its vertical axis so that it faces `target`.
    /// Leaves the orientation untouched if `target` is straight above or below.
    fn face_towards(&mut self, target: Point3) {
        if let Some(orientation) = Orientation::facing(self.position(), target) {
            self.set_orientation(orientation);
        }
    }
}

/// The plain [`SceneObject`] that stores its position and orientation
///
/// [`SceneObject`]: ./trait.SceneObject.html
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct SceneNode {
    /// Where the node is located
    pub position: Point3,
    /// Where the node is looking
    pub orientation: Orientation,
}

impl SceneNode {
    /// Creates a node at `position`, rotated by `orientation`
    pub fn new(position: Point3, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

impl SceneObject for SceneNode {
    fn position(&self) -> Point3 {
        self.position
    }

    fn set_position(&mut self, position: Point3) {
        self.position = position;
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }
}

/// Handle of an object registered in a [`SceneRegistry`]
///
/// [`SceneRegistry`]: ./struct.SceneRegistry.html
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubjectId(usize);

/// Owns the objects that can be animated.
///
/// Handles of removed objects are never reused while
/// an equal handle is still registered.
#[derive(Debug, Default)]
pub struct SceneRegistry<'a> {
    objects: Slab<Box<dyn SceneObject + 'a>>,
}

impl<'a> SceneRegistry<'a> {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `object` and returns its handle
    pub fn add(&mut self, object: Box<dyn SceneObject + 'a>) -> SubjectId {
        SubjectId(self.objects.insert(object))
    }

    /// Removes an object, returning it if it was registered
    pub fn remove(&mut self, id: SubjectId) -> Option<Box<dyn SceneObject + 'a>> {
        if self.objects.contains(id.0) {
            Some(self.objects.remove(id.0))
        } else {
            None
        }
    }

    /// Returns the object behind `id`
    pub fn get(&self, id: SubjectId) -> Option<&(dyn SceneObject + 'a)> {
        self.objects.get(id.0).map(|object| &**object)
    }

    /// Returns the object behind `id` for mutation
    pub fn get_mut(&mut self, id: SubjectId) -> Option<&mut (dyn SceneObject + 'a)> {
        self.objects.get_mut(id.0).map(|object| &mut **object)
    }

    /// The number of registered objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if no object is registered
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(any(test, feature = "use-mocks"))]
mod mocks {
    use super::*;
    use std::thread::panicking;

    /// Mock for [`SceneObject`] that records every movement
    ///
    /// [`SceneObject`]: ../trait.SceneObject.html
    #[derive(Debug, Default)]
    pub struct SceneObjectMock {
        position: Point3,
        orientation: Orientation,

        expect_final_position: Option<Point3>,
        expect_face_towards: Option<Point3>,

        set_position_calls: Vec<Point3>,
        face_towards_was_called: bool,
    }

    impl SceneObjectMock {
        /// Construct a new `SceneObjectMock` located at `position`
        pub fn new(position: Point3) -> Self {
            let mut mock = Self::default();
            mock.position = position;
            mock
        }

        /// Expect `set_position` to be called at least once, the last call with `position`
        pub fn expect_final_position(&mut self, position: Point3) {
            self.expect_final_position = Some(position);
        }

        /// Expect a call to `face_towards` with `target`
        pub fn expect_face_towards(&mut self, target: Point3) {
            self.expect_face_towards = Some(target);
        }

        /// Every position passed to `set_position`, oldest first
        pub fn set_position_calls(&self) -> &[Point3] {
            &self.set_position_calls
        }
    }

    impl SceneObject for SceneObjectMock {
        fn position(&self) -> Point3 {
            self.position
        }

        fn set_position(&mut self, position: Point3) {
            self.set_position_calls.push(position);
            self.position = position;
        }

        fn orientation(&self) -> Orientation {
            self.orientation
        }

        fn set_orientation(&mut self, orientation: Orientation) {
            self.orientation = orientation;
        }

        fn face_towards(&mut self, target: Point3) {
            self.face_towards_was_called = true;

            if let Some(expected_target) = self.expect_face_towards {
                assert_eq!(
                    expected_target, target,
                    "face_towards() was called with {:?}, but {:?} was expected",
                    target, expected_target
                );
            } else {
                panic!("face_towards() was called unexpectedly");
            }
        }
    }

    impl Drop for SceneObjectMock {
        fn drop(&mut self) {
            if panicking() {
                return;
            }

            if let Some(expected_position) = self.expect_final_position {
                assert_eq!(
                    Some(&expected_position),
                    self.set_position_calls.last(),
                    "set_position() was not last called with {:?}",
                    expected_position
                );
            }

            assert!(
                self.expect_face_towards.is_some() == self.face_towards_was_called,
                "face_towards() was not called, but expected"
            );
        }
    }
}
