//! A collection of aerodynamic analysis components for the Planform
//! framework.
//!
//! Components are pure functions of the flight-condition batch plus their own
//! fixed parameters: they borrow the batch for one call, produce per-point
//! result arrays, and hold no mutable state between calls.

pub mod inlet;
