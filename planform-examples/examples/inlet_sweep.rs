//! # Inlet Sweep
//!
//! Sweeps a pitot inlet from static conditions to Mach 2.4 at a fixed
//! stagnation state and prints, for each operating point, the flow regime,
//! the engine-face stagnation-pressure recovery, the engine-face Mach
//! number, the captured mass flow, and the additive (spillage) drag.
//!
//! The freestream static pressure and density at each point are constructed
//! isentropically from the shared stagnation state, the way a mission
//! segment at constant energy altitude would supply them.
//!
//! ## Running the Example
//!
//! To run this example with Cargo:
//!
//! ```sh
//! cargo run --example inlet_sweep
//! ```

use std::error::Error;

use ndarray::Array1;
use planform_components::inlet::pitot::{PitotInlet, StagnationInput};
use planform_core::{Freestream, constraint::StrictlyPositive};
use planform_gas::isentropic;
use uom::si::{area::square_meter, f64::Area};

const GAMMA: f64 = 1.4;
const GAS_CONSTANT: f64 = 287.053;
const SPECIFIC_HEAT: f64 = 1004.7;
const STAGNATION_TEMPERATURE: f64 = 288.15;
const STAGNATION_PRESSURE: f64 = 101_325.0;

fn main() -> Result<(), Box<dyn Error>> {
    let inlet = PitotInlet::new(
        StrictlyPositive::new(Area::new::<square_meter>(1.0))?,
        StrictlyPositive::new(Area::new::<square_meter>(0.8))?,
        StrictlyPositive::new(Area::new::<square_meter>(0.9))?,
    )?;

    let n = 25;
    let mach = Array1::linspace(0.0, 2.4, n);
    let pressure = mach.mapv(|m| STAGNATION_PRESSURE * isentropic::ratios(m, GAMMA).pressure);
    let density = mach.mapv(|m| {
        let ratios = isentropic::ratios(m, GAMMA);
        STAGNATION_PRESSURE * ratios.pressure
            / (GAS_CONSTANT * STAGNATION_TEMPERATURE * ratios.temperature)
    });

    let mut freestream = Freestream::new(
        Array1::from_elem(n, GAMMA),
        Array1::from_elem(n, SPECIFIC_HEAT),
        pressure,
        density,
        Array1::from_elem(n, GAS_CONSTANT),
        mach,
        Array1::from_elem(n, 0.85),
    )?;

    let stagnation = StagnationInput::Uniform {
        temperature: STAGNATION_TEMPERATURE,
        pressure: STAGNATION_PRESSURE,
    };

    let flow = inlet.compute(&mut freestream, &stagnation)?;
    let drag = inlet.additive_drag(&freestream, &stagnation)?;
    let mass_flow = freestream
        .mass_flow_rate
        .as_ref()
        .expect("compute() writes the mass flow back");

    println!(
        "Pitot inlet: capture {:.2} m², throat {:.2} m², entrance {:.2} m²",
        inlet.capture_area().get::<square_meter>(),
        inlet.throat_area().get::<square_meter>(),
        inlet.entrance_area().get::<square_meter>(),
    );
    println!(
        "{:>6}  {:<18}  {:>9}  {:>8}  {:>10}  {:>10}",
        "Mach", "Regime", "Pt2/Pt0", "M_face", "mdot kg/s", "D_add N"
    );

    for index in 0..n {
        println!(
            "{:>6.2}  {:<18}  {:>9.5}  {:>8.4}  {:>10.2}  {:>10.1}",
            freestream.mach[index],
            format!("{:?}", flow.regime[index]),
            flow.stagnation_pressure[index] / STAGNATION_PRESSURE,
            flow.mach[index],
            mass_flow[index],
            drag[index],
        );
    }

    Ok(())
}
