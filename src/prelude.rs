//! Everything a host needs to drive the interaction pipeline

pub use crate::animation::{AnimationScheduler, Easing};
pub use crate::event_bus::{Channel, Event, EventBus, PositionUpdate, SubscriptionId};
pub use crate::interaction::{
    DragOutcome, InteractionPipeline, InteractionState, PipelineBuildError, PipelineBuilder,
};
pub use crate::intersection::{IntersectionDetector, NcollideIntersectionDetector};
pub use crate::scene::{SceneNode, SceneObject, SceneRegistry, SubjectId};
pub use crate::target_volume::{TargetVolume, VisualState};
pub use dragline_geometry::*;
