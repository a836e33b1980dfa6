//! Core plumbing for the Planform framework.
//!
//! This crate holds the pieces every Planform analysis builds on:
//!
//! - [`constraint`]: construction-time numeric invariants, so component
//!   geometry and other fixed parameters can be trusted once built.
//! - [`conditions`]: the batched flight-condition data model that analyses
//!   consume, one array entry per simultaneous operating point.

pub mod conditions;
pub mod constraint;

pub use conditions::{ConditionsError, Freestream};
