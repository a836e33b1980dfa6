use thiserror::Error;

/// Errors that may occur when inverting the area-Mach (mass-flow) function.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum GasDynamicsError {
    /// The heat capacity ratio is at or below one (or NaN), so the isentropic
    /// relations are undefined.
    #[error("heat capacity ratio must exceed one (gamma = {gamma})")]
    HeatCapacityRatio { gamma: f64 },

    /// The requested mass-flow function value exceeds its sonic maximum of
    /// one; no isentropic solution exists without a shock.
    #[error("mass flow function value {value} exceeds its sonic maximum of one")]
    Choked { value: f64 },

    /// The requested mass-flow function value is negative, NaN, or infinite.
    #[error("mass flow function value {value} is outside the invertible range")]
    OutOfRange { value: f64 },

    /// No Mach number brackets the requested value on the chosen branch.
    #[error("no Mach bracket found for mass flow function value {value} on the supersonic branch")]
    Unbracketed { value: f64 },
}
