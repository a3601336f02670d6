//! Builder for the [`InteractionPipeline`]
//!
//! [`InteractionPipeline`]: ../struct.InteractionPipeline.html

use super::{InteractionPipeline, PipelineSettings};
use crate::prelude::*;
use std::error::Error;
use std::f64::consts::FRAC_PI_2;
use std::fmt;

const DEFAULT_FIXED_DISTANCE: f64 = 0.5;
const DEFAULT_ANIMATION_DURATION_TICKS: u32 = 50;
const DEFAULT_TARGET_VOLUME_HALF_SIDE: f64 = 0.125;

/// Builder for the [`InteractionPipeline`]. This is the composition root.
///
/// # Example
/// ```
/// use dragline_engine::prelude::*;
///
/// let mut builder = PipelineBuilder::new();
/// builder.fixed_distance(0.75);
/// let pipeline = builder.build().expect("Invalid configuration");
/// assert_eq!(InteractionState::Idle, pipeline.state());
/// ```
///
/// [`InteractionPipeline`]: ../struct.InteractionPipeline.html
#[derive(Debug, Default)]
pub struct PipelineBuilder<'a> {
    fixed_distance: Option<f64>,
    animation_duration_ticks: Option<u32>,
    easing: Option<Easing>,
    indicator: Option<Box<dyn SceneObject + 'a>>,
    target_volume: Option<TargetVolume>,
    intersection_detector: Option<Box<dyn IntersectionDetector + 'a>>,
}

impl<'a> PipelineBuilder<'a> {
    /// Creates a new builder by calling `PipelineBuilder::default()`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how far past the end of a drag the indicator travels.
    /// Defaults to 0.5.
    pub fn fixed_distance(&mut self, fixed_distance: f64) {
        self.fixed_distance = Some(fixed_distance);
    }

    /// Sets how many ticks the indicator's animation lasts.
    /// Defaults to 50.
    pub fn animation_duration_ticks(&mut self, animation_duration_ticks: u32) {
        self.animation_duration_ticks = Some(animation_duration_ticks);
    }

    /// Sets the curve of the indicator's animation.
    /// Defaults to [`Easing::CubicIn`].
    ///
    /// [`Easing::CubicIn`]: ../animation/enum.Easing.html#variant.CubicIn
    pub fn easing(&mut self, easing: Easing) {
        self.easing = Some(easing);
    }

    /// Sets the object that follows the drags.
    ///
    /// By default this is a [`SceneNode`] at (-0.5, 0, 0.5) facing the positive x axis.
    ///
    /// [`SceneNode`]: ../scene/struct.SceneNode.html
    pub fn indicator(&mut self, indicator: Box<dyn SceneObject + 'a>) {
        self.indicator = Some(indicator);
    }

    /// Sets the volume that regions are tested against.
    ///
    /// By default this is a cube with a side of 0.25 centered on the origin.
    pub fn target_volume(&mut self, target_volume: TargetVolume) {
        self.target_volume = Some(target_volume);
    }

    /// Sets the [`IntersectionDetector`].
    ///
    /// By default this builder uses the [`NcollideIntersectionDetector`].
    ///
    /// [`IntersectionDetector`]: ../intersection/trait.IntersectionDetector.html
    /// [`NcollideIntersectionDetector`]: ../intersection/struct.NcollideIntersectionDetector.html
    pub fn intersection_detector(
        &mut self,
        intersection_detector: Box<dyn IntersectionDetector + 'a>,
    ) {
        self.intersection_detector = Some(intersection_detector);
    }

    /// Builds the [`InteractionPipeline`].
    ///
    /// # Errors
    /// Returns [`PipelineBuildError::InvalidFixedDistance`] if the
    /// fixed distance is negative, infinite or `NaN`.
    ///
    /// [`InteractionPipeline`]: ../struct.InteractionPipeline.html
    /// [`PipelineBuildError::InvalidFixedDistance`]: ./enum.PipelineBuildError.html#variant.InvalidFixedDistance
    pub fn build(self) -> Result<InteractionPipeline<'a>, PipelineBuildError> {
        let fixed_distance = self.fixed_distance.unwrap_or(DEFAULT_FIXED_DISTANCE);
        if !fixed_distance.is_finite() || fixed_distance < 0.0 {
            return Err(PipelineBuildError::InvalidFixedDistance(fixed_distance));
        }

        let settings = PipelineSettings {
            fixed_distance,
            animation_duration_ticks: self
                .animation_duration_ticks
                .unwrap_or(DEFAULT_ANIMATION_DURATION_TICKS),
            easing: self.easing.unwrap_or_default(),
        };

        Ok(InteractionPipeline::new(
            settings,
            self.indicator.unwrap_or_else(default_indicator),
            self.target_volume.unwrap_or_else(default_target_volume),
            self.intersection_detector
                .unwrap_or_else(|| Box::new(NcollideIntersectionDetector::new())),
        ))
    }
}

fn default_indicator<'a>() -> Box<dyn SceneObject + 'a> {
    let yaw = Radians::try_new(FRAC_PI_2).expect("Internal error: π/2 is a valid angle");
    Box::new(SceneNode::new(
        Point3::new(-0.5, 0.0, 0.5),
        Orientation::from_yaw(yaw),
    ))
}

fn default_target_volume() -> TargetVolume {
    let half_side = DEFAULT_TARGET_VOLUME_HALF_SIDE;
    TargetVolume::new(Aabb {
        min: Point3::new(-half_side, -half_side, -half_side),
        max: Point3::new(half_side, half_side, half_side),
    })
}

/// The reason why an [`InteractionPipeline`] could not be built
///
/// [`InteractionPipeline`]: ../struct.InteractionPipeline.html
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineBuildError {
    /// The fixed distance was negative, infinite or `NaN`
    InvalidFixedDistance(f64),
}

impl fmt::Display for PipelineBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineBuildError::InvalidFixedDistance(fixed_distance) => write!(
                f,
                "Fixed distance must be finite and non-negative, got {}",
                fixed_distance
            ),
        }
    }
}

impl Error for PipelineBuildError {}
