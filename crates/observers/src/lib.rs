//! Reusable observers for odestep integration runs.
//!
//! This crate provides [`Observer`] implementations and the capability traits
//! they are written against, so an observer can be reused with any event and
//! action types that expose the capabilities it needs.
//!
//! # Modules
//!
//! - [`traits`]: capability traits ([`HasStep`], [`HasTime`], [`CanStopEarly`])
//! - [`StepBudget`]: stops a run after a fixed number of steps
//! - [`StopWhen`]: stops a run when a predicate on the event holds
//!
//! [`Observer`]: odestep_core::Observer
//! [`HasStep`]: traits::HasStep
//! [`HasTime`]: traits::HasTime
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod budget;
mod stop_when;

pub use budget::StepBudget;
pub use stop_when::StopWhen;
