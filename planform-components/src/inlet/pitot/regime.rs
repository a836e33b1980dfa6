use serde::{Deserialize, Serialize};

/// Flow regime of one operating point.
///
/// Derived fresh on every solve from the freestream Mach number and the
/// mass-flow function carried to the throat; never persisted between calls.
/// The three variants are exhaustive and mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRegime {
    /// Freestream Mach ≤ 1 and the throat passes the captured flow
    /// isentropically.
    SubsonicNoShock,
    /// Freestream Mach ≤ 1 but the captured flow would require a supersonic
    /// throat, so a shock forms in the inlet to satisfy mass conservation.
    SubsonicWithShock,
    /// Freestream Mach > 1; a standing shock always forms at the inlet.
    Supersonic,
}

impl FlowRegime {
    /// Classifies one operating point from its freestream Mach number and the
    /// isentropic mass-flow function carried to the throat station.
    ///
    /// A Mach number of exactly 1.0 classifies on the subsonic side.
    #[must_use]
    pub fn classify(mach: f64, throat_mass_flow_function: f64) -> Self {
        if mach > 1.0 {
            Self::Supersonic
        } else if throat_mass_flow_function > 1.0 {
            Self::SubsonicWithShock
        } else {
            Self::SubsonicNoShock
        }
    }
}
