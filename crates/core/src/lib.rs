//! Core traits and types for the bondkit framework.
//!
//! This crate defines the shared abstractions that finders and observers
//! build on:
//!
//! - [`Addend`]: an integer type whose values can be paired by sum
//! - [`Bond`]: a pair of values that sum to a target
//! - [`Observer`]: receives finder events and optionally returns control actions

mod addend;
mod bond;
mod observer;

pub use addend::Addend;
pub use bond::Bond;
pub use observer::Observer;
