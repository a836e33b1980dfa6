//! Oblique-shock jump relations for a calorically perfect gas.
//!
//! The relations are written in terms of the shock-normal Mach component
//! `M₁ₙ = M₁·sin β`, so a shock angle of 90° specializes to a normal shock.
//! Angles are in radians. Stagnation temperature is conserved across the
//! shock (adiabatic jump), so no temperature ratio beyond the static one is
//! reported.
//!
//! Like the isentropic relations, these evaluate quietly: a shock-normal
//! Mach component at or below one is not physical for a compression shock,
//! and produces NaN rather than an error.

/// Property ratios across an oblique shock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShockRatios {
    /// Downstream Mach number, `M₂`.
    pub mach: f64,
    /// Static pressure ratio, `P₂/P₁`.
    pub pressure: f64,
    /// Static temperature ratio, `T₂/T₁`.
    pub temperature: f64,
    /// Stagnation pressure ratio, `Pt₂/Pt₁`.
    pub stagnation_pressure: f64,
}

/// Evaluates the jump relations for a shock at `shock_angle` with the flow
/// deflected by `deflection`, both in radians.
///
/// The caller supplies a compatible `(deflection, shock_angle)` pair (from a
/// θ–β–M solution or, for a detached/normal shock, zero deflection and 90°);
/// the relations themselves do not solve the angle coupling.
#[must_use]
pub fn oblique(mach: f64, gamma: f64, deflection: f64, shock_angle: f64) -> ShockRatios {
    let normal_in = mach * shock_angle.sin();
    let m2 = normal_in * normal_in;

    let pressure = 1.0 + 2.0 * gamma / (gamma + 1.0) * (m2 - 1.0);
    let density = (gamma + 1.0) * m2 / ((gamma - 1.0) * m2 + 2.0);
    let temperature = pressure / density;

    let normal_out = (((gamma - 1.0) * m2 + 2.0) / (2.0 * gamma * m2 - (gamma - 1.0))).sqrt();
    let mach_out = normal_out / (shock_angle - deflection).sin();

    let stagnation_pressure = density.powf(gamma / (gamma - 1.0))
        * ((gamma + 1.0) / (2.0 * gamma * m2 - (gamma - 1.0))).powf(1.0 / (gamma - 1.0));

    ShockRatios {
        mach: mach_out,
        pressure,
        temperature,
        stagnation_pressure,
    }
}

/// Evaluates the normal-shock jump relations (90° shock, no deflection).
#[must_use]
pub fn normal(mach: f64, gamma: f64) -> ShockRatios {
    oblique(mach, gamma, 0.0, std::f64::consts::FRAC_PI_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::FRAC_PI_4;

    use approx::assert_relative_eq;

    #[test]
    fn normal_shock_matches_tables_at_mach_two() {
        // γ = 1.4, M = 2: M₂ = √(1/3), P₂/P₁ = 4.5, T₂/T₁ = 1.6875,
        // Pt₂/Pt₁ = 0.72087.
        let shock = normal(2.0, 1.4);
        assert_relative_eq!(shock.mach, (1.0f64 / 3.0).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(shock.pressure, 4.5, epsilon = 1e-12);
        assert_relative_eq!(shock.temperature, 1.6875, epsilon = 1e-12);
        assert_relative_eq!(shock.stagnation_pressure, 0.72087, epsilon = 1e-4);
    }

    #[test]
    fn sonic_shock_is_a_mach_wave() {
        let shock = normal(1.0, 1.4);
        assert_relative_eq!(shock.mach, 1.0, epsilon = 1e-12);
        assert_relative_eq!(shock.pressure, 1.0, epsilon = 1e-12);
        assert_relative_eq!(shock.temperature, 1.0, epsilon = 1e-12);
        assert_relative_eq!(shock.stagnation_pressure, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn normal_shock_always_decelerates_to_subsonic() {
        for mach in [1.01, 1.2, 1.6, 2.0, 3.0, 5.0, 10.0] {
            let shock = normal(mach, 1.4);
            assert!(shock.mach < 1.0, "M = {mach} gave M₂ = {}", shock.mach);
            assert!(shock.pressure > 1.0);
            assert!(shock.stagnation_pressure < 1.0);
        }
    }

    #[test]
    fn oblique_shock_at_mach_two() {
        // γ = 1.4, M = 2, β = 45°, δ = 15° (so β − δ = 30°):
        // M₁ₙ² = 2, so P₂/P₁ = 13/6, ρ₂/ρ₁ = 12/7, T₂/T₁ = 91/72,
        // M₂ₙ = √(2.8/5.2), M₂ = M₂ₙ / sin 30°.
        let shock = oblique(2.0, 1.4, 15.0_f64.to_radians(), FRAC_PI_4);
        assert_relative_eq!(shock.pressure, 13.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(shock.temperature, 91.0 / 72.0, epsilon = 1e-12);
        assert_relative_eq!(shock.mach, 2.0 * (2.8f64 / 5.2).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(shock.stagnation_pressure, 0.95458, epsilon = 1e-4);
    }

    #[test]
    fn oblique_reduces_to_the_normal_component() {
        // With zero deflection, the static ratios depend only on M·sin β.
        let beta = 0.9;
        let mach = 2.4;
        let oblique_shock = oblique(mach, 1.4, 0.0, beta);
        let equivalent = normal(mach * beta.sin(), 1.4);

        assert_relative_eq!(oblique_shock.pressure, equivalent.pressure, epsilon = 1e-12);
        assert_relative_eq!(
            oblique_shock.temperature,
            equivalent.temperature,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            oblique_shock.stagnation_pressure,
            equivalent.stagnation_pressure,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            oblique_shock.mach * beta.sin(),
            equivalent.mach,
            epsilon = 1e-12
        );
    }
}
