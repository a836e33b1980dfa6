//! Pitot inlet component.
//!
//! A pitot inlet captures a freestream streamtube, decelerates it through a
//! throat, and delivers it to the engine face. Depending on the operating
//! point, the internal flow is subsonic throughout, chokes and forms a shock
//! inside the inlet, or (above Mach 1) sits behind a standing normal shock at
//! the lip. [`PitotInlet::compute`] classifies each point of a flight-
//! condition batch into its [`FlowRegime`] and solves the exit-plane state;
//! [`PitotInlet::additive_drag`] evaluates the spillage drag of the flow that
//! does not enter the inlet.
//!
//! Flow relations follow the Cantwell AA283 course notes
//! (<https://web.stanford.edu/~cantwell/AA283_Course_Material/AA283_Course_Notes/>);
//! the additive-drag correction is Nikolai's empirical method.

mod drag;
mod flow;
mod regime;
mod types;

pub use regime::FlowRegime;
pub use types::{InletError, InletFlow, StagnationInput};

use ndarray::Array1;
use planform_core::{
    Freestream,
    constraint::{Constrained, StrictlyPositive},
};
use uom::si::{area::square_meter, f64::Area};

/// A pitot inlet, defined by its three station areas.
///
/// The geometry is fixed per instance; each solve is a pure function of the
/// geometry and the borrowed flight-condition batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitotInlet {
    capture: Area,
    throat: Area,
    entrance: Area,
}

impl PitotInlet {
    /// Builds an inlet from its capture (engine-face), throat, and
    /// inlet-entrance areas.
    ///
    /// # Errors
    ///
    /// Returns [`InletError::ThroatExceedsCapture`] if the throat is not the
    /// narrowest internal station.
    pub fn new(
        capture: Constrained<Area, StrictlyPositive>,
        throat: Constrained<Area, StrictlyPositive>,
        entrance: Constrained<Area, StrictlyPositive>,
    ) -> Result<Self, InletError> {
        let capture = capture.into_inner();
        let throat = throat.into_inner();
        let entrance = entrance.into_inner();

        if throat > capture {
            return Err(InletError::ThroatExceedsCapture { throat, capture });
        }

        Ok(Self {
            capture,
            throat,
            entrance,
        })
    }

    /// Engine-face plane area.
    #[must_use]
    pub fn capture_area(&self) -> Area {
        self.capture
    }

    /// Narrowest internal cross-section.
    #[must_use]
    pub fn throat_area(&self) -> Area {
        self.throat
    }

    /// Inlet-entrance plane area (the additive-drag reference station).
    #[must_use]
    pub fn entrance_area(&self) -> Area {
        self.entrance
    }

    /// Solves the exit-plane (engine-face) state for every operating point.
    ///
    /// Writes the captured mass flow rate back into
    /// `freestream.mass_flow_rate`; downstream propulsion sizing reads it
    /// from there. This is the only mutation of the batch.
    ///
    /// # Errors
    ///
    /// Returns [`InletError::StagnationLengthMismatch`] for a per-point
    /// stagnation input of the wrong length, or [`InletError::GasDynamics`]
    /// with the failing point index if a relation's domain is violated
    /// (e.g. a heat capacity ratio at or below one).
    pub fn compute(
        &self,
        freestream: &mut Freestream,
        stagnation: &StagnationInput,
    ) -> Result<InletFlow, InletError> {
        let n = freestream.len();
        let (stagnation_temperature, stagnation_pressure_in) = stagnation.resolve(n)?;

        let capture = self.capture.get::<square_meter>();
        let throat = self.throat.get::<square_meter>();

        let mut stagnation_pressure = Array1::zeros(n);
        let mut mach = Array1::zeros(n);
        let mut static_temperature = Array1::zeros(n);
        let mut mass_flow_rate = Array1::zeros(n);
        let mut regime = Vec::with_capacity(n);

        for index in 0..n {
            let point = flow::exit_point(
                freestream,
                index,
                stagnation_temperature[index],
                stagnation_pressure_in[index],
                capture,
                throat,
            )
            .map_err(|source| InletError::GasDynamics { index, source })?;

            stagnation_pressure[index] = point.stagnation_pressure;
            mach[index] = point.mach;
            static_temperature[index] = point.static_temperature;
            mass_flow_rate[index] = point.mass_flow_rate;
            regime.push(point.regime);
        }

        let stagnation_enthalpy = &freestream.specific_heat * &stagnation_temperature;
        let static_enthalpy = &freestream.specific_heat * &static_temperature;
        // Stagnation enthalpy bounds static enthalpy, so the root is real.
        let velocity =
            (&stagnation_enthalpy - &static_enthalpy).mapv(|excess| (2.0 * excess).sqrt());

        freestream.mass_flow_rate = Some(mass_flow_rate);

        Ok(InletFlow {
            stagnation_temperature,
            stagnation_pressure,
            stagnation_enthalpy,
            mach,
            static_temperature,
            static_enthalpy,
            velocity,
            regime,
        })
    }

    /// Computes the additive (spillage) drag force \[N\] for every operating
    /// point. Positive values are drag.
    ///
    /// The regime classification mirrors [`compute`](Self::compute) but is
    /// referenced to the inlet-entrance station; the batch is read-only here.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`compute`](Self::compute).
    pub fn additive_drag(
        &self,
        freestream: &Freestream,
        stagnation: &StagnationInput,
    ) -> Result<Array1<f64>, InletError> {
        let n = freestream.len();
        let (stagnation_temperature, stagnation_pressure) = stagnation.resolve(n)?;

        let capture = self.capture.get::<square_meter>();
        let throat = self.throat.get::<square_meter>();
        let entrance = self.entrance.get::<square_meter>();

        let mut drag_force = Array1::zeros(n);
        for index in 0..n {
            drag_force[index] = drag::additive_drag_point(
                freestream,
                index,
                stagnation_temperature[index],
                stagnation_pressure[index],
                capture,
                throat,
                entrance,
            )
            .map_err(|source| InletError::GasDynamics { index, source })?;
        }

        Ok(drag_force)
    }
}
