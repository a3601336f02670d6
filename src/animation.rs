//! Tick-driven interpolation of scene object positions

pub use self::easing::*;
use crate::prelude::*;
use log::{debug, trace, warn};
use nameof::name_of_type;
use slab::Slab;
use std::collections::HashMap;
use std::fmt::{self, Debug};

mod easing;

/// Called with the subject once its animation reached the target
pub type CompletionHandler<'a, O> = Box<dyn FnOnce(&mut dyn SceneObject) -> O + 'a>;

struct AnimationTask<'a, O> {
    subject: SubjectId,
    from: Point3,
    to: Point3,
    started_at: u64,
    duration_ticks: u32,
    easing: Easing,
    on_complete: CompletionHandler<'a, O>,
}

impl<'a, O> Debug for AnimationTask<'a, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(name_of_type!(AnimationTask<'a, O>))
            .field("subject", &self.subject)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("started_at", &self.started_at)
            .field("duration_ticks", &self.duration_ticks)
            .field("easing", &self.easing)
            .finish()
    }
}

/// Moves objects of a [`SceneRegistry`] towards their targets, one step per tick.
///
/// Each subject has at most one animation at a time. Scheduling a new animation
/// for a subject cancels the running one without calling its completion handler.
/// Completion handlers return a value of type `O`, which [`tick`] hands back
/// to the caller.
///
/// [`SceneRegistry`]: ../scene/struct.SceneRegistry.html
/// [`tick`]: ./struct.AnimationScheduler.html#method.tick
pub struct AnimationScheduler<'a, O> {
    tasks: Slab<AnimationTask<'a, O>>,
    task_of_subject: HashMap<SubjectId, usize>,
    current_tick: u64,
}

impl<'a, O> Debug for AnimationScheduler<'a, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(name_of_type!(AnimationScheduler<'a, O>))
            .field("tasks", &self.tasks)
            .field("current_tick", &self.current_tick)
            .finish()
    }
}

impl<'a, O> Default for AnimationScheduler<'a, O> {
    fn default() -> Self {
        Self {
            tasks: Slab::new(),
            task_of_subject: HashMap::new(),
            current_tick: 0,
        }
    }
}

impl<'a, O> AnimationScheduler<'a, O> {
    /// Creates a scheduler without animations
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the movement of `subject` from `from` to `to` over `duration_ticks` ticks.
    ///
    /// `on_complete` is called during the tick in which the subject arrives at `to`.
    /// An animation never completes synchronously, even with a duration of zero.
    pub fn animate<F>(
        &mut self,
        subject: SubjectId,
        from: Point3,
        to: Point3,
        duration_ticks: u32,
        easing: Easing,
        on_complete: F,
    ) where
        F: FnOnce(&mut dyn SceneObject) -> O + 'a,
    {
        if self.cancel(subject) {
            debug!("Animation of {:?} was superseded", subject);
        }

        debug!(
            "Animating {:?} from {:?} to {:?} over {} ticks",
            subject, from, to, duration_ticks
        );
        let key = self.tasks.insert(AnimationTask {
            subject,
            from,
            to,
            started_at: self.current_tick,
            duration_ticks,
            easing,
            on_complete: Box::new(on_complete),
        });
        self.task_of_subject.insert(subject, key);
    }

    /// Stops the animation of `subject` where it currently is.
    /// Its completion handler is dropped without being called.
    ///
    /// Returns `false` if `subject` was not animating.
    pub fn cancel(&mut self, subject: SubjectId) -> bool {
        match self.task_of_subject.remove(&subject) {
            Some(key) => {
                self.tasks.remove(key);
                true
            }
            None => false,
        }
    }

    /// Returns `true` while `subject` has an animation that has not completed
    pub fn is_animating(&self, subject: SubjectId) -> bool {
        self.task_of_subject.contains_key(&subject)
    }

    /// The number of animations that have not completed
    pub fn active_animations(&self) -> usize {
        self.tasks.len()
    }

    /// Advances every animation by one tick and returns the
    /// values of the completion handlers that ran.
    ///
    /// Animations whose subject is no longer registered are dropped.
    pub fn tick(&mut self, registry: &mut SceneRegistry<'_>) -> Vec<O> {
        self.current_tick += 1;

        let keys: Vec<usize> = self.tasks.iter().map(|(key, _)| key).collect();
        let mut completions = Vec::new();
        for key in keys {
            let task = &self.tasks[key];
            let subject = match registry.get_mut(task.subject) {
                Some(subject) => subject,
                None => {
                    warn!(
                        "Dropping animation of {:?}, which is no longer registered",
                        task.subject
                    );
                    let task = self.tasks.remove(key);
                    self.task_of_subject.remove(&task.subject);
                    continue;
                }
            };

            let elapsed = self.current_tick - task.started_at;
            if elapsed >= u64::from(task.duration_ticks) {
                let task = self.tasks.remove(key);
                self.task_of_subject.remove(&task.subject);
                subject.set_position(task.to);
                debug!("Animation of {:?} completed at {:?}", task.subject, task.to);
                completions.push((task.on_complete)(subject));
            } else {
                let progress = elapsed as f64 / f64::from(task.duration_ticks);
                let position = task.from + (task.to - task.from) * task.easing.apply(progress);
                trace!("{:?} is at {:?}", task.subject, position);
                subject.set_position(position);
            }
        }

        completions
    }
}
