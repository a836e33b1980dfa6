//! Isentropic flow relations for a calorically perfect gas.
//!
//! Relations follow the standard compressible-flow forms (see Cantwell,
//! AA283 course notes,
//! <https://web.stanford.edu/~cantwell/AA283_Course_Material/AA283_Course_Notes/>).
//!
//! The area-Mach function is handled in its mass-flow orientation
//! `Φ(M) = A*/A`, which rises monotonically from 0 at M = 0 to its maximum
//! of 1 at M = 1 and falls back toward 0 as M → ∞. Its reciprocal `A/A*` is
//! reported by [`ratios`] for callers that work with the area-ratio
//! orientation. Because Φ is two-valued below its maximum, the inversion
//! takes an explicit [`FlowBranch`] rather than guessing which root the
//! caller means.

use crate::GasDynamicsError;

/// Bisection iteration cap for the area-Mach inversion.
const MAX_ITERATIONS: usize = 200;

/// Bracket width at which the area-Mach inversion stops refining.
const TOLERANCE: f64 = 1e-13;

/// Stagnation-to-static property ratios at a given Mach number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsentropicRatios {
    /// Static-to-stagnation temperature ratio, `T/Tt`.
    pub temperature: f64,
    /// Static-to-stagnation pressure ratio, `P/Pt`.
    pub pressure: f64,
    /// Static-to-stagnation density ratio, `ρ/ρt`.
    pub density: f64,
    /// Local-to-sonic area ratio, `A/A*`.
    ///
    /// Minimum of 1 at M = 1; infinite at M = 0.
    pub area: f64,
}

/// Evaluates the isentropic property ratios at `mach` for the given heat
/// capacity ratio.
///
/// Evaluates quietly: `gamma ≤ 1` or a negative Mach number produce NaN/Inf
/// rather than an error.
#[must_use]
pub fn ratios(mach: f64, gamma: f64) -> IsentropicRatios {
    let base = 1.0 + 0.5 * (gamma - 1.0) * mach * mach;

    IsentropicRatios {
        temperature: base.recip(),
        pressure: base.powf(-gamma / (gamma - 1.0)),
        density: base.powf(-1.0 / (gamma - 1.0)),
        area: mass_flow_function(mach, gamma).recip(),
    }
}

/// Evaluates the mass-flow (area-Mach) function `Φ(M) = A*/A`.
///
/// `Φ` is the local flow area expressed as a fraction of the sonic throat
/// area that the same mass flow would require: 0 at rest, 1 at exactly sonic
/// conditions. A station value above 1 is not achievable by isentropic flow.
#[must_use]
pub fn mass_flow_function(mach: f64, gamma: f64) -> f64 {
    let base = 1.0 + 0.5 * (gamma - 1.0) * mach * mach;
    let exponent = 0.5 * (gamma + 1.0) / (gamma - 1.0);

    mach * (0.5 * (gamma + 1.0) / base).powf(exponent)
}

/// The two monotonic branches of the mass-flow function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowBranch {
    /// `0 ≤ M ≤ 1`, where `Φ` increases with Mach.
    Subsonic,
    /// `M ≥ 1`, where `Φ` decreases with Mach.
    Supersonic,
}

/// Inverts the mass-flow function on the requested branch.
///
/// The inversion is two-valued for `value < 1`; the caller's flow-regime
/// logic decides which root is physical and passes it as `branch`.
///
/// # Errors
///
/// - [`GasDynamicsError::HeatCapacityRatio`] if `gamma ≤ 1` or NaN.
/// - [`GasDynamicsError::Choked`] if `value > 1` (no isentropic solution).
/// - [`GasDynamicsError::OutOfRange`] if `value` is negative or not finite.
/// - [`GasDynamicsError::Unbracketed`] if no Mach number on the supersonic
///   branch reaches `value` (only possible for vanishingly small values).
pub fn invert_mass_flow_function(
    value: f64,
    gamma: f64,
    branch: FlowBranch,
) -> Result<f64, GasDynamicsError> {
    if !(gamma > 1.0) {
        return Err(GasDynamicsError::HeatCapacityRatio { gamma });
    }
    if !value.is_finite() || value < 0.0 {
        return Err(GasDynamicsError::OutOfRange { value });
    }
    if value > 1.0 {
        return Err(GasDynamicsError::Choked { value });
    }
    if value == 1.0 {
        // The branches meet at the sonic point.
        return Ok(1.0);
    }

    match branch {
        FlowBranch::Subsonic => {
            if value == 0.0 {
                return Ok(0.0);
            }
            Ok(bisect(value, gamma, 0.0, 1.0))
        }
        FlowBranch::Supersonic => {
            // Expand the upper bracket until Φ drops below the target.
            let mut hi = 2.0;
            while mass_flow_function(hi, gamma) > value {
                hi *= 2.0;
                if hi > 1e6 {
                    return Err(GasDynamicsError::Unbracketed { value });
                }
            }
            Ok(bisect(value, gamma, 1.0, hi))
        }
    }
}

/// Bisects `Φ(M) − value` on `[lo, hi]`, which must bracket a sign change.
fn bisect(value: f64, gamma: f64, mut lo: f64, mut hi: f64) -> f64 {
    let residual = |mach: f64| mass_flow_function(mach, gamma) - value;
    let mut at_lo = residual(lo);
    if at_lo == 0.0 {
        return lo;
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        let at_mid = residual(mid);

        if at_mid == 0.0 || hi - lo < TOLERANCE {
            return mid;
        }
        if (at_mid > 0.0) == (at_lo > 0.0) {
            lo = mid;
            at_lo = at_mid;
        } else {
            hi = mid;
        }
    }

    0.5 * (lo + hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_relative_eq, relative_eq};

    #[test]
    fn ratios_at_rest_are_unity() {
        let r = ratios(0.0, 1.4);
        assert_relative_eq!(r.temperature, 1.0);
        assert_relative_eq!(r.pressure, 1.0);
        assert_relative_eq!(r.density, 1.0);
        assert!(r.area.is_infinite());
    }

    #[test]
    fn ratios_match_tables_at_mach_two() {
        // γ = 1.4, M = 2: T/Tt = 1/1.8, P/Pt = 1.8^-3.5, A/A* = 1.6875.
        let r = ratios(2.0, 1.4);
        assert_relative_eq!(r.temperature, 1.0 / 1.8);
        assert_relative_eq!(r.pressure, 0.127805, epsilon = 1e-6);
        assert_relative_eq!(r.density, 0.230048, epsilon = 1e-6);
        assert_relative_eq!(r.area, 1.6875, epsilon = 1e-9);
    }

    #[test]
    fn mass_flow_function_peaks_at_sonic() {
        assert_relative_eq!(mass_flow_function(1.0, 1.4), 1.0);
        assert_relative_eq!(mass_flow_function(0.0, 1.4), 0.0);

        // A/A* = 1.33984 at M = 0.5 (γ = 1.4), so Φ is its reciprocal.
        assert_relative_eq!(
            mass_flow_function(0.5, 1.4),
            1.0 / 1.33984,
            epsilon = 1e-5
        );

        // Below the maximum everywhere else.
        for mach in [0.2, 0.7, 1.3, 2.5, 4.0] {
            assert!(mass_flow_function(mach, 1.4) < 1.0);
        }
    }

    #[test]
    fn inversion_round_trips_on_both_branches() {
        for (mach, branch) in [
            (0.05, FlowBranch::Subsonic),
            (0.3, FlowBranch::Subsonic),
            (0.95, FlowBranch::Subsonic),
            (1.05, FlowBranch::Supersonic),
            (2.0, FlowBranch::Supersonic),
            (5.0, FlowBranch::Supersonic),
        ] {
            for gamma in [1.3, 1.4, 1.67] {
                let value = mass_flow_function(mach, gamma);
                let inverted = invert_mass_flow_function(value, gamma, branch).unwrap();
                assert!(
                    relative_eq!(inverted, mach, epsilon = 1e-9),
                    "M = {mach}, γ = {gamma}: inverted to {inverted}"
                );
            }
        }
    }

    #[test]
    fn inversion_at_the_sonic_point() {
        let subsonic = invert_mass_flow_function(1.0, 1.4, FlowBranch::Subsonic).unwrap();
        let supersonic = invert_mass_flow_function(1.0, 1.4, FlowBranch::Supersonic).unwrap();
        assert_relative_eq!(subsonic, 1.0, epsilon = 1e-9);
        assert_relative_eq!(supersonic, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn inversion_at_rest() {
        let mach = invert_mass_flow_function(0.0, 1.4, FlowBranch::Subsonic).unwrap();
        assert_eq!(mach, 0.0);
    }

    #[test]
    fn choked_value_is_an_error() {
        let err = invert_mass_flow_function(1.2, 1.4, FlowBranch::Subsonic).unwrap_err();
        assert_eq!(err, GasDynamicsError::Choked { value: 1.2 });
    }

    #[test]
    fn invalid_gamma_is_an_error() {
        assert!(matches!(
            invert_mass_flow_function(0.5, 1.0, FlowBranch::Subsonic),
            Err(GasDynamicsError::HeatCapacityRatio { .. })
        ));
        assert!(matches!(
            invert_mass_flow_function(0.5, f64::NAN, FlowBranch::Subsonic),
            Err(GasDynamicsError::HeatCapacityRatio { .. })
        ));
    }

    #[test]
    fn non_finite_value_is_an_error() {
        assert!(matches!(
            invert_mass_flow_function(f64::NAN, 1.4, FlowBranch::Subsonic),
            Err(GasDynamicsError::OutOfRange { .. })
        ));
        assert!(matches!(
            invert_mass_flow_function(-0.1, 1.4, FlowBranch::Subsonic),
            Err(GasDynamicsError::OutOfRange { .. })
        ));
    }

    #[test]
    fn vanishing_value_has_no_supersonic_root() {
        assert!(matches!(
            invert_mass_flow_function(0.0, 1.4, FlowBranch::Supersonic),
            Err(GasDynamicsError::Unbracketed { .. })
        ));
    }
}
