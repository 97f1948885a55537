//! Series evaluation with a streaming architecture.

use crate::atmosphere::{CELSIUS_TO_KELVIN, StandardAtmosphere};
use crate::data::{Command, Parameters, SampleStream};
use crate::refraction::Saemundsson;

// Result types for calculations
#[derive(Debug, Clone, Copy)]
pub enum CalculationResult {
    Refraction {
        elevation: f64,
        correction: f64,
        apparent: f64,
    },
    Pressure {
        altitude: f64,
        temperature: f64,
        pressure: f64,
    },
}

pub fn refraction_model(params: &Parameters) -> Saemundsson {
    Saemundsson {
        temperature: params.temperature,
        pressure: params.pressure,
        min_elevation: params.min_elevation,
        max_elevation: params.max_elevation,
    }
}

pub fn atmosphere_model(params: &Parameters) -> StandardAtmosphere {
    StandardAtmosphere {
        sea_level_temperature: params.sea_level_temperature + CELSIUS_TO_KELVIN,
        sea_level_pressure: params.sea_level_pressure,
        lapse_rate: params.lapse_rate,
    }
}

// Apply the selected calculation lazily to a stream of samples
pub fn calculate_stream(
    samples: SampleStream,
    command: Command,
    params: Parameters,
) -> Box<dyn Iterator<Item = CalculationResult>> {
    match command {
        Command::Refraction => {
            let model = refraction_model(&params);
            Box::new(samples.map(move |elevation| CalculationResult::Refraction {
                elevation,
                correction: model.correction(elevation),
                apparent: model.apparent_elevation(elevation),
            }))
        }
        Command::Pressure => {
            let atmosphere = atmosphere_model(&params);
            Box::new(samples.map(move |altitude| CalculationResult::Pressure {
                altitude,
                temperature: atmosphere.temperature_at(altitude),
                pressure: atmosphere.pressure_at(altitude),
            }))
        }
        Command::Chart => {
            unreachable!("chart rendering does not use the calculation stream")
        }
    }
}
