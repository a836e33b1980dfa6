//! Batched flight conditions shared across aerodynamic analyses.
//!
//! A conceptual-design analysis rarely looks at one flight condition at a
//! time: a mission or sweep evaluates many operating points in a single call.
//! [`Freestream`] holds those points as parallel arrays, one entry per point,
//! in SI units. Analyses borrow the batch for the duration of a call and
//! never retain it.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A batch of simultaneous freestream operating points.
///
/// Each field holds one value per operating point. The equal-length invariant
/// across fields is enforced by [`Freestream::new`].
///
/// Value-domain invariants (heat capacity ratio, specific heat, and gas
/// constant strictly positive; density positive; Mach number non-negative)
/// are the caller's contract: analyses do not re-validate them, and
/// violations propagate quietly as NaN/Inf through the numerics.
///
/// The batch is read-only to analyses with one documented exception:
/// the inlet flow solver overwrites [`mass_flow_rate`](Self::mass_flow_rate)
/// on every solve, since downstream propulsion sizing reads it from here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freestream {
    /// Ratio of specific heats, γ \[-\].
    pub heat_capacity_ratio: Array1<f64>,
    /// Specific heat at constant pressure \[J/(kg·K)\].
    pub specific_heat: Array1<f64>,
    /// Static pressure \[Pa\].
    pub pressure: Array1<f64>,
    /// Static density \[kg/m³\].
    pub density: Array1<f64>,
    /// Specific gas constant \[J/(kg·K)\].
    pub gas_constant: Array1<f64>,
    /// Mach number \[-\].
    pub mach: Array1<f64>,
    /// Area of the initial streamtube of air captured by the inlet \[m²\].
    pub streamtube_area: Array1<f64>,
    /// Mass flow rate into the engine \[kg/s\].
    ///
    /// `None` until an inlet flow solve writes it; overwritten on each solve.
    pub mass_flow_rate: Option<Array1<f64>>,
}

impl Freestream {
    /// Builds a batch from its per-point fields, in the order they are
    /// declared on the struct.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionsError::Empty`] for a zero-length batch and
    /// [`ConditionsError::LengthMismatch`] if any field disagrees with the
    /// Mach array's length.
    pub fn new(
        heat_capacity_ratio: Array1<f64>,
        specific_heat: Array1<f64>,
        pressure: Array1<f64>,
        density: Array1<f64>,
        gas_constant: Array1<f64>,
        mach: Array1<f64>,
        streamtube_area: Array1<f64>,
    ) -> Result<Self, ConditionsError> {
        let expected = mach.len();
        if expected == 0 {
            return Err(ConditionsError::Empty);
        }

        for (field, actual) in [
            ("heat_capacity_ratio", heat_capacity_ratio.len()),
            ("specific_heat", specific_heat.len()),
            ("pressure", pressure.len()),
            ("density", density.len()),
            ("gas_constant", gas_constant.len()),
            ("streamtube_area", streamtube_area.len()),
        ] {
            if actual != expected {
                return Err(ConditionsError::LengthMismatch {
                    field,
                    expected,
                    actual,
                });
            }
        }

        Ok(Self {
            heat_capacity_ratio,
            specific_heat,
            pressure,
            density,
            gas_constant,
            mach,
            streamtube_area,
            mass_flow_rate: None,
        })
    }

    /// Number of operating points in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mach.len()
    }

    /// Whether the batch holds no operating points.
    ///
    /// Always `false` for a batch built through [`Freestream::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mach.is_empty()
    }
}

/// Errors that can occur when assembling a flight-condition batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionsError {
    /// A per-point field disagrees with the batch length.
    #[error("field `{field}` has {actual} entries but the batch has {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The batch holds no operating points.
    #[error("a batch must contain at least one operating point")]
    Empty,
}
