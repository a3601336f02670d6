//! The drag lifecycle: from a drag gesture over the indicator's animation
//! to the region that is tested against the target volume.

pub use self::builder::*;
use crate::prelude::*;
use log::{debug, info, warn};
use std::collections::VecDeque;

mod builder;

/// The phase of the current drag cycle
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum InteractionState {
    /// No drag happened yet, or the last one was degenerate
    Idle,
    /// The marker is being dragged
    Dragging,
    /// The indicator moves towards the target derived from the last drag
    Animating,
    /// The region of the last cycle was tested against the target volume.
    /// Behaves like [`InteractionState::Idle`].
    ///
    /// [`InteractionState::Idle`]: ./enum.InteractionState.html#variant.Idle
    SegmentCommitted,
}

impl Default for InteractionState {
    fn default() -> Self {
        InteractionState::Idle
    }
}

/// What a call to [`InteractionPipeline::drag_end`] set in motion
///
/// [`InteractionPipeline::drag_end`]: ./struct.InteractionPipeline.html#method.drag_end
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum DragOutcome {
    /// The indicator started moving
    Animating,
    /// The drag ended where it started, or at a position that is not finite.
    /// Nothing was published.
    Degenerate,
    /// No drag was in progress
    Ignored,
}

/// One gesture from press to release and the region it produced
#[derive(Debug)]
struct DragCycle {
    drag_start_position: Point3,
    region: Option<RegionPolygon>,
}

impl DragCycle {
    fn new(drag_start_position: Point3) -> Self {
        Self {
            drag_start_position,
            region: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PipelineSettings {
    fixed_distance: f64,
    animation_duration_ticks: u32,
    easing: Easing,
}

/// Turns drag gestures into indicator movements, regions and
/// intersection results, announcing each step on its [`EventBus`].
///
/// Events raised while another event is being delivered are queued and
/// delivered afterwards. For every event, the pipeline's own handlers run
/// before the subscribers of the [`EventBus`], so subscribers always observe
/// the state that results from the event.
///
/// Use [`PipelineBuilder`] to create one.
///
/// [`EventBus`]: ../event_bus/struct.EventBus.html
/// [`PipelineBuilder`]: ./struct.PipelineBuilder.html
#[derive(Debug)]
pub struct InteractionPipeline<'a> {
    settings: PipelineSettings,
    state: InteractionState,
    cycle: Option<DragCycle>,
    scene: SceneRegistry<'a>,
    indicator: SubjectId,
    target_volume: TargetVolume,
    intersection_detector: Box<dyn IntersectionDetector + 'a>,
    scheduler: AnimationScheduler<'a, Event>,
    event_bus: EventBus<'a>,
    pending_events: VecDeque<Event>,
}

impl<'a> InteractionPipeline<'a> {
    fn new(
        settings: PipelineSettings,
        indicator: Box<dyn SceneObject + 'a>,
        target_volume: TargetVolume,
        intersection_detector: Box<dyn IntersectionDetector + 'a>,
    ) -> Self {
        let mut scene = SceneRegistry::new();
        let indicator = scene.add(indicator);

        Self {
            settings,
            state: InteractionState::default(),
            cycle: None,
            scene,
            indicator,
            target_volume,
            intersection_detector,
            scheduler: AnimationScheduler::new(),
            event_bus: EventBus::new(),
            pending_events: VecDeque::new(),
        }
    }

    /// Begins a new drag cycle at `position`.
    ///
    /// Accepted in every state: a running indicator animation is cancelled
    /// and the region of the previous cycle is discarded.
    pub fn drag_start(&mut self, position: Point3) {
        if self.scheduler.cancel(self.indicator) {
            debug!("Indicator animation was superseded by a new drag");
        }

        if let Some(DragCycle {
            region: Some(region),
            ..
        }) = self.cycle.take()
        {
            debug!("Discarding region {:?} of the previous cycle", region);
        }

        debug!("Drag started at {:?}", position);
        self.cycle = Some(DragCycle::new(position));
        self.state = InteractionState::Dragging;
        self.dispatch(Event::DragStart(position));
    }

    /// Ends the current drag at `position` and starts moving the indicator.
    ///
    /// The indicator is sent past `position`, in the direction of the drag,
    /// by the configured fixed distance while keeping its height.
    pub fn drag_end(&mut self, position: Point3) -> DragOutcome {
        if self.state != InteractionState::Dragging {
            warn!(
                "Ignoring end of drag at {:?} while {:?}",
                position, self.state
            );
            return DragOutcome::Ignored;
        }

        let drag_start_position = match &self.cycle {
            Some(cycle) => cycle.drag_start_position,
            None => {
                warn!("Ignoring end of drag at {:?} without a drag cycle", position);
                self.state = InteractionState::Idle;
                return DragOutcome::Ignored;
            }
        };

        let drag = PositionUpdate {
            start: drag_start_position,
            end: position,
        };
        if !drag.start.is_finite() || !drag.end.is_finite() {
            info!(
                "Skipping drag with non-finite positions from {:?} to {:?}",
                drag.start, drag.end
            );
            self.state = InteractionState::Idle;
            return DragOutcome::Degenerate;
        }

        if drag.displacement().try_unit().is_none() {
            info!("Skipping drag of zero length at {:?}", position);
            self.state = InteractionState::Idle;
            return DragOutcome::Degenerate;
        }

        debug!("Drag completed from {:?} to {:?}", drag.start, drag.end);
        self.dispatch(Event::DragComplete(drag));
        DragOutcome::Animating
    }

    /// Advances all animations by one tick. Call this once per frame.
    pub fn tick(&mut self) {
        let completions = self.scheduler.tick(&mut self.scene);
        for event in completions {
            self.dispatch(event);
        }
    }

    /// The channels on which the pipeline publishes its progress
    pub fn event_bus_mut(&mut self) -> &mut EventBus<'a> {
        &mut self.event_bus
    }

    /// The current phase of the drag cycle
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// The object that follows the drags
    pub fn indicator(&self) -> &(dyn SceneObject + 'a) {
        self.scene
            .get(self.indicator)
            .expect("Internal error: The indicator is never removed from the scene")
    }

    /// The handle of the indicator in [`InteractionPipeline::scene`]
    ///
    /// [`InteractionPipeline::scene`]: ./struct.InteractionPipeline.html#method.scene
    pub fn indicator_id(&self) -> SubjectId {
        self.indicator
    }

    /// All objects that can be animated
    pub fn scene(&self) -> &SceneRegistry<'a> {
        &self.scene
    }

    /// The volume that regions are tested against
    pub fn target_volume(&self) -> &TargetVolume {
        &self.target_volume
    }

    /// The region of the current drag cycle, once it has been committed
    pub fn live_region(&self) -> Option<&RegionPolygon> {
        self.cycle.as_ref().and_then(|cycle| cycle.region.as_ref())
    }

    /// Where the current drag cycle started
    pub fn drag_start_position(&self) -> Option<Point3> {
        self.cycle.as_ref().map(|cycle| cycle.drag_start_position)
    }

    /// The animations in flight
    pub fn scheduler(&self) -> &AnimationScheduler<'a, Event> {
        &self.scheduler
    }

    fn dispatch(&mut self, event: Event) {
        self.pending_events.push_back(event);
        while let Some(event) = self.pending_events.pop_front() {
            self.handle(&event);
            self.event_bus.publish(&event);
        }
    }

    fn handle(&mut self, event: &Event) {
        match event {
            Event::DragStart(_) => {}
            Event::DragComplete(drag) => self.move_indicator(*drag),
            Event::IndicatorMoved(movement) => self.commit_region(*movement),
            Event::RegionCommitted(region) => self.check_target_volume(region),
        }
    }

    fn move_indicator(&mut self, drag: PositionUpdate) {
        let direction = match drag.displacement().try_unit() {
            Some(direction) => direction,
            None => return,
        };

        let start = self.indicator().position();
        let target = (drag.end + direction * self.settings.fixed_distance).with_height(start.y);
        let face_target = drag.end;
        debug!("Moving indicator from {:?} to {:?}", start, target);

        self.scheduler.animate(
            self.indicator,
            start,
            target,
            self.settings.animation_duration_ticks,
            self.settings.easing,
            move |indicator| {
                indicator.face_towards(face_target);
                Event::IndicatorMoved(PositionUpdate { start, end: target })
            },
        );
        self.state = InteractionState::Animating;
    }

    fn commit_region(&mut self, movement: PositionUpdate) {
        let cycle = match self.cycle.as_mut() {
            Some(cycle) => cycle,
            None => {
                warn!("Indicator moved outside of a drag cycle");
                return;
            }
        };

        let region = RegionPolygon::from_unordered_points(&[
            movement.start,
            movement.end,
            cycle.drag_start_position,
        ]);
        debug!("Committing region {:?}", region.vertices());
        cycle.region = Some(region.clone());
        self.pending_events.push_back(Event::RegionCommitted(region));
    }

    fn check_target_volume(&mut self, region: &RegionPolygon) {
        let intersects = self
            .intersection_detector
            .intersects(region, &self.target_volume);
        debug!("Region intersects target volume: {}", intersects);
        self.target_volume.apply_intersection_result(intersects);
        self.state = InteractionState::SegmentCommitted;
    }
}
