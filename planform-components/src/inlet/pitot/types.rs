use ndarray::Array1;
use planform_gas::GasDynamicsError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::f64::Area;

use super::FlowRegime;

/// Upstream stagnation state for a solve.
///
/// A single state is broadcast identically to every operating point before
/// regime classification; per-point arrays must match the batch length.
/// Values are SI (kelvin, pascal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StagnationInput {
    /// One stagnation state applied to the whole batch.
    Uniform { temperature: f64, pressure: f64 },
    /// One stagnation state per operating point.
    PerPoint {
        temperature: Array1<f64>,
        pressure: Array1<f64>,
    },
}

impl StagnationInput {
    /// Broadcasts to per-point temperature and pressure arrays of length
    /// `expected`.
    pub(crate) fn resolve(
        &self,
        expected: usize,
    ) -> Result<(Array1<f64>, Array1<f64>), InletError> {
        match self {
            Self::Uniform {
                temperature,
                pressure,
            } => Ok((
                Array1::from_elem(expected, *temperature),
                Array1::from_elem(expected, *pressure),
            )),
            Self::PerPoint {
                temperature,
                pressure,
            } => {
                for (field, actual) in [
                    ("temperature", temperature.len()),
                    ("pressure", pressure.len()),
                ] {
                    if actual != expected {
                        return Err(InletError::StagnationLengthMismatch {
                            field,
                            expected,
                            actual,
                        });
                    }
                }
                Ok((temperature.clone(), pressure.clone()))
            }
        }
    }
}

/// Exit-plane (engine-face) state from an inlet flow solve.
///
/// Every field holds one value per operating point, SI units. A fresh result
/// is produced on each solve; nothing accumulates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InletFlow {
    /// Stagnation temperature \[K\]. Equal to the upstream stagnation
    /// temperature in every regime (the shock jump is adiabatic).
    pub stagnation_temperature: Array1<f64>,
    /// Stagnation pressure \[Pa\].
    pub stagnation_pressure: Array1<f64>,
    /// Stagnation enthalpy \[J/kg\].
    pub stagnation_enthalpy: Array1<f64>,
    /// Engine-face Mach number \[-\].
    pub mach: Array1<f64>,
    /// Static temperature \[K\].
    pub static_temperature: Array1<f64>,
    /// Static enthalpy \[J/kg\].
    pub static_enthalpy: Array1<f64>,
    /// Velocity \[m/s\].
    pub velocity: Array1<f64>,
    /// Flow regime each operating point classified into.
    pub regime: Vec<FlowRegime>,
}

/// Errors that may occur when building or calling a pitot inlet.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum InletError {
    /// The throat must be the narrowest internal station.
    #[error("throat area {throat:?} exceeds the capture area {capture:?}")]
    ThroatExceedsCapture { throat: Area, capture: Area },

    /// A per-point stagnation input disagrees with the batch length.
    #[error("stagnation `{field}` has {actual} entries but the batch has {expected}")]
    StagnationLengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A gas-dynamics relation failed at one operating point.
    #[error("gas dynamics relation failed at operating point {index}")]
    GasDynamics {
        index: usize,
        #[source]
        source: GasDynamicsError,
    },
}
