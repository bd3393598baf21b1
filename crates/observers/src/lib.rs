//! Reusable observers for the bondkit framework.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across finders in the bondkit ecosystem.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-finder observers
//!   ([`HasBond`], [`CanStopEarly`], [`CanReject`])
//!
//! # Observers
//!
//! - [`StopAfter`]: ends a scan once a number of bonds have been seen
//! - [`Chain`]: runs two observers in order; the first action wins
//!
//! # Features
//!
//! - `tracing`: Enables [`TraceObserver`] for structured logging of finder
//!   events via the `tracing` crate.
//!
//! [`Observer`]: bondkit_core::Observer
//! [`HasBond`]: traits::HasBond
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanReject`]: traits::CanReject

pub mod traits;

mod chain;
mod stop_after;

#[cfg(feature = "tracing")]
mod trace;

pub use chain::Chain;
pub use stop_after::StopAfter;

#[cfg(feature = "tracing")]
pub use trace::TraceObserver;
