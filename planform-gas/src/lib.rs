//! Compressible gas dynamics relations for the Planform framework.
//!
//! This crate provides the flow relations that inlet and nozzle analyses
//! build on, for a calorically perfect gas:
//!
//! - [`isentropic`]: stagnation-to-static property ratios, the area-Mach
//!   (mass-flow) function, and its branch-explicit inversion.
//! - [`shock`]: oblique-shock jump relations and the normal-shock
//!   specialization.
//!
//! All quantities are dimensionless ratios or Mach numbers on `f64`; angles
//! are in radians. The relations themselves evaluate quietly — physically
//! inconsistent inputs propagate as NaN/Inf — while the area-Mach inversion
//! returns explicit [`GasDynamicsError`]s, since its failure modes (a choked
//! target value, γ at or below one) are the ones worth diagnosing.

mod error;

pub mod isentropic;
pub mod shock;

pub use error::GasDynamicsError;
pub use isentropic::FlowBranch;
