//! Typed publish/subscribe channels through which the interaction pipeline
//! announces its progress.
//!
//! Delivery is synchronous and in subscription order. Events published while
//! nobody listens are lost; channels never buffer or replay.

use crate::prelude::*;
use nameof::name_of_type;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// An object moved from `start` to `end`
#[derive(Debug, PartialEq, Copy, Clone, Default, Serialize, Deserialize)]
pub struct PositionUpdate {
    /// Where the movement began
    pub start: Point3,
    /// Where the movement ended
    pub end: Point3,
}

impl PositionUpdate {
    /// Returns the displacement from `start` to `end`
    pub fn displacement(&self) -> Vector3 {
        self.end - self.start
    }
}

/// Everything that can happen during a drag cycle
#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum Event {
    /// The marker was grabbed at the given position
    DragStart(Point3),
    /// The marker was released, the update spans the whole gesture
    DragComplete(PositionUpdate),
    /// The indicator finished its animation
    IndicatorMoved(PositionUpdate),
    /// A new region was built and tested against the target volume
    RegionCommitted(RegionPolygon),
}

/// Identifies a subscription on a [`Channel`]
///
/// [`Channel`]: ./struct.Channel.html
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// A subscriber of a [`Channel`] carrying values of type `T`
///
/// [`Channel`]: ./struct.Channel.html
pub type Subscriber<'a, T> = Box<dyn FnMut(&T) + 'a>;

/// A one-to-many channel for a single kind of value
pub struct Channel<'a, T> {
    subscribers: Vec<(SubscriptionId, Subscriber<'a, T>)>,
    next_id: usize,
}

impl<'a, T> Debug for Channel<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(name_of_type!(Channel<'a, T>))
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<'a, T> Default for Channel<'a, T> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<'a, T> Channel<'a, T> {
    /// Creates a channel without subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `subscriber` to be called with every value published from now on.
    /// Subscribers are called in the order in which they subscribed.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'a,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns `false` if the subscription did not exist.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let subscriber_count = self.subscribers.len();
        self.subscribers
            .retain(|(subscription_id, _)| *subscription_id != id);
        self.subscribers.len() != subscriber_count
    }

    /// Calls every subscriber with `value`, each one running to completion
    /// before the next one is called.
    pub fn publish(&mut self, value: &T) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(value);
        }
    }

    /// Returns the number of current subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// The channels of the interaction pipeline, one per kind of [`Event`]
///
/// [`Event`]: ./enum.Event.html
#[derive(Debug, Default)]
pub struct EventBus<'a> {
    drag_start: Channel<'a, Point3>,
    drag_complete: Channel<'a, PositionUpdate>,
    indicator_moved: Channel<'a, PositionUpdate>,
    region_committed: Channel<'a, RegionPolygon>,
}

impl<'a> EventBus<'a> {
    /// Creates a bus whose channels have no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Carries the position of the marker when a drag begins
    pub fn drag_start(&mut self) -> &mut Channel<'a, Point3> {
        &mut self.drag_start
    }

    /// Carries the start and end of every completed, non-degenerate drag
    pub fn drag_complete(&mut self) -> &mut Channel<'a, PositionUpdate> {
        &mut self.drag_complete
    }

    /// Carries the indicator's position before and after its animation
    pub fn indicator_moved(&mut self) -> &mut Channel<'a, PositionUpdate> {
        &mut self.indicator_moved
    }

    /// Carries every region after it was tested against the target volume
    pub fn region_committed(&mut self) -> &mut Channel<'a, RegionPolygon> {
        &mut self.region_committed
    }

    /// Delivers `event` to the subscribers of its channel
    pub fn publish(&mut self, event: &Event) {
        match event {
            Event::DragStart(position) => self.drag_start.publish(position),
            Event::DragComplete(update) => self.drag_complete.publish(update),
            Event::IndicatorMoved(update) => self.indicator_moved.publish(update),
            Event::RegionCommitted(region) => self.region_committed.publish(region),
        }
    }
}
