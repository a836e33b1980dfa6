//! Per-point exit-plane solve for the pitot inlet.
//!
//! The mass-flow function `Φ` evaluated at the freestream station is carried
//! to the engine-face and throat stations by pure area scaling (the captured
//! streamtube feeds both), which is what makes the regime classification and
//! the engine-face Mach recovery a mass-conservation statement rather than a
//! separate model.

use planform_core::Freestream;
use planform_gas::{FlowBranch, GasDynamicsError, isentropic, shock};

use super::regime::FlowRegime;

/// Exit-plane scalars for one operating point.
pub(super) struct PointExit {
    pub regime: FlowRegime,
    pub stagnation_pressure: f64,
    pub mach: f64,
    pub static_temperature: f64,
    pub mass_flow_rate: f64,
}

/// Solves the engine-face state for operating point `index`.
pub(super) fn exit_point(
    freestream: &Freestream,
    index: usize,
    stagnation_temperature: f64,
    stagnation_pressure_in: f64,
    capture_area: f64,
    throat_area: f64,
) -> Result<PointExit, GasDynamicsError> {
    let gamma = freestream.heat_capacity_ratio[index];
    let gas_constant = freestream.gas_constant[index];
    let mach_inf = freestream.mach[index];
    let streamtube_area = freestream.streamtube_area[index];

    // Upstream static state and the mass flow captured by the streamtube.
    let static_temperature_inf =
        isentropic::ratios(mach_inf, gamma).temperature * stagnation_temperature;
    let velocity_inf = (gamma * gas_constant * static_temperature_inf).sqrt() * mach_inf;
    let mass_flow_rate = freestream.density[index] * streamtube_area * velocity_inf;

    // Mass-flow function carried to the engine-face and throat stations.
    let phi_inf = isentropic::mass_flow_function(mach_inf, gamma);
    let phi_face_isentropic = phi_inf * streamtube_area / capture_area;
    let phi_throat_isentropic = phi_inf * streamtube_area / throat_area;

    let regime = FlowRegime::classify(mach_inf, phi_throat_isentropic);

    let (stagnation_pressure, mach) = match regime {
        FlowRegime::SubsonicNoShock => {
            let mach = isentropic::invert_mass_flow_function(
                phi_face_isentropic,
                gamma,
                FlowBranch::Subsonic,
            )?;
            (stagnation_pressure_in, mach)
        }
        FlowRegime::SubsonicWithShock | FlowRegime::Supersonic => {
            // Normal shock evaluated at the freestream Mach; the flow behind
            // it reaches the engine face subsonically through the throat.
            let jump = shock::normal(mach_inf, gamma);
            let phi_face = isentropic::mass_flow_function(jump.mach, gamma) * throat_area
                / capture_area;
            let mach =
                isentropic::invert_mass_flow_function(phi_face, gamma, FlowBranch::Subsonic)?;
            (jump.stagnation_pressure * stagnation_pressure_in, mach)
        }
    };

    // Stagnation temperature is conserved across the adiabatic jump, so the
    // exit static state follows from the upstream stagnation temperature.
    let static_temperature = isentropic::ratios(mach, gamma).temperature * stagnation_temperature;

    Ok(PointExit {
        regime,
        stagnation_pressure,
        mach,
        static_temperature,
        mass_flow_rate,
    })
}
