//! This crate contains the interaction pipeline of a drag-driven
//! 3D scene: a drag gesture moves an indicator, the movement history
//! spans a region, and the region is tested against a target volume.
//!
//! The host owns rendering and input. It forwards pointer drags to
//! [`InteractionPipeline::drag_start`] and [`InteractionPipeline::drag_end`],
//! calls [`InteractionPipeline::tick`] once per frame and observes the
//! channels of the [`EventBus`].
//!
//! [`InteractionPipeline::drag_start`]: ./interaction/struct.InteractionPipeline.html#method.drag_start
//! [`InteractionPipeline::drag_end`]: ./interaction/struct.InteractionPipeline.html#method.drag_end
//! [`InteractionPipeline::tick`]: ./interaction/struct.InteractionPipeline.html#method.tick
//! [`EventBus`]: ./event_bus/struct.EventBus.html

#![deny(
    rust_2018_idioms,
    missing_debug_implementations,
    missing_docs,
    clippy::doc_markdown,
    clippy::unimplemented
)]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod animation;
pub mod event_bus;
pub mod intersection;
pub mod interaction;
pub mod prelude;
pub mod scene;
pub mod target_volume;
