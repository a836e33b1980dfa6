//! Per-point additive (spillage) drag for the pitot inlet.
//!
//! Follows Nikolai's conceptual-design method: the momentum deficit of the
//! spilled flow is evaluated at the inlet-entrance station and corrected by
//! an empirical pressure-recovery factor `K_add` fitted over Mach number and
//! capture-area ratio. The regime logic mirrors the flow solver but is
//! deliberately kept separate: the reference station here is the inlet
//! entrance, not the engine face, and sharing code across stations invites
//! station-mismatch mistakes.

use planform_core::Freestream;
use planform_gas::{FlowBranch, GasDynamicsError, isentropic, shock};

use super::regime::FlowRegime;

// Quartic Mach fits producing the coefficients of the quadratic-in-area-ratio
// pressure-recovery correction. Highest power first.
const K_ADD_C1: [f64; 5] = [
    -18.89169518,
    71.11608826,
    -98.78321794,
    59.30401343,
    -12.54234863,
];
const K_ADD_C2: [f64; 5] = [
    3.2614414,
    -15.37113363,
    27.9247673,
    -20.70274059,
    4.25466643,
];
const K_ADD_C3: [f64; 5] = [
    4.83460478,
    -16.62737509,
    20.6998037,
    -11.04366207,
    2.73090033,
];

/// Evaluates a polynomial with coefficients ordered highest power first.
fn polyval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Empirical pressure-recovery correction for the additive drag.
fn k_add(mach: f64, area_ratio: f64) -> f64 {
    let c1 = polyval(&K_ADD_C1, mach);
    let c2 = polyval(&K_ADD_C2, mach);
    let c3 = polyval(&K_ADD_C3, mach);

    polyval(&[c1, c2, c3], area_ratio)
}

/// Computes the additive drag force \[N\] for operating point `index`.
pub(super) fn additive_drag_point(
    freestream: &Freestream,
    index: usize,
    stagnation_temperature: f64,
    stagnation_pressure: f64,
    capture_area: f64,
    throat_area: f64,
    entrance_area: f64,
) -> Result<f64, GasDynamicsError> {
    let gamma = freestream.heat_capacity_ratio[index];
    let gas_constant = freestream.gas_constant[index];
    let mach_inf = freestream.mach[index];
    let pressure_inf = freestream.pressure[index];
    let streamtube_area = freestream.streamtube_area[index];

    let static_temperature_inf =
        isentropic::ratios(mach_inf, gamma).temperature * stagnation_temperature;
    let velocity_inf = (gamma * gas_constant * static_temperature_inf).sqrt() * mach_inf;
    let dynamic_pressure_inf = 0.5 * freestream.density[index] * velocity_inf * velocity_inf;

    let phi_inf = isentropic::mass_flow_function(mach_inf, gamma);
    let phi_throat_isentropic = phi_inf * streamtube_area / throat_area;

    let regime = FlowRegime::classify(mach_inf, phi_throat_isentropic);

    let (entrance_mach, entrance_pressure) = match regime {
        FlowRegime::SubsonicNoShock => {
            let phi_entrance = phi_inf * streamtube_area / entrance_area;
            let mach =
                isentropic::invert_mass_flow_function(phi_entrance, gamma, FlowBranch::Subsonic)?;
            (
                mach,
                isentropic::ratios(mach, gamma).pressure * stagnation_pressure,
            )
        }
        FlowRegime::SubsonicWithShock | FlowRegime::Supersonic => {
            // The shock stands at the inlet lip, so the entrance sees the
            // post-shock state directly.
            let jump = shock::normal(mach_inf, gamma);
            (jump.mach, jump.pressure * pressure_inf)
        }
    };

    let correction = k_add(mach_inf, streamtube_area / capture_area);

    // The q-normalized coefficient form of this expression is singular at
    // static conditions; the force form carries the q → 0 limit exactly.
    let uncorrected = pressure_inf
        * entrance_area
        * ((entrance_pressure / pressure_inf) * (1.0 + gamma * entrance_mach * entrance_mach)
            - 1.0)
        - 2.0 * streamtube_area * dynamic_pressure_inf;

    Ok(correction * uncorrected)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn polyval_is_highest_power_first() {
        // 2x² − 3x + 1 at x = 2.
        assert_relative_eq!(polyval(&[2.0, -3.0, 1.0], 2.0), 3.0);
        // Constant term alone at x = 0.
        assert_relative_eq!(polyval(&K_ADD_C3, 0.0), 2.73090033);
    }

    #[test]
    fn coefficient_fits_match_direct_evaluation() {
        let m: f64 = 0.7;
        let direct = -18.89169518 * m.powi(4) + 71.11608826 * m.powi(3) - 98.78321794 * m.powi(2)
            + 59.30401343 * m
            - 12.54234863;
        assert_relative_eq!(polyval(&K_ADD_C1, m), direct, epsilon = 1e-12);

        let direct = 3.2614414 * m.powi(4) - 15.37113363 * m.powi(3) + 27.9247673 * m.powi(2)
            - 20.70274059 * m
            + 4.25466643;
        assert_relative_eq!(polyval(&K_ADD_C2, m), direct, epsilon = 1e-12);

        let direct = 4.83460478 * m.powi(4) - 16.62737509 * m.powi(3) + 20.6998037 * m.powi(2)
            - 11.04366207 * m
            + 2.73090033;
        assert_relative_eq!(polyval(&K_ADD_C3, m), direct, epsilon = 1e-12);
    }

    #[test]
    fn k_add_is_finite_at_zero_area_ratio() {
        // The quadratic collapses to its constant coefficient.
        let value = k_add(0.0, 0.0);
        assert!(value.is_finite());
        assert_relative_eq!(value, polyval(&K_ADD_C3, 0.0));
    }
}
