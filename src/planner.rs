//! Execution planning: validate parsed CLI data and expand it into a runnable job.

use crate::compute;
use crate::data::{Command, Parameters, SampleStream, SeriesSource};
use crate::error::PlannerError;

pub struct ComputePlan {
    pub samples: SampleStream,
    pub command: Command,
    pub params: Parameters,
}

pub fn build_job(
    series: SeriesSource,
    command: Command,
    params: Parameters,
) -> Result<ComputePlan, PlannerError> {
    match command {
        Command::Refraction => {
            if params.min_elevation > params.max_elevation {
                return Err(PlannerError::from(format!(
                    "Empty clip range: min elevation {} exceeds max elevation {}",
                    params.min_elevation, params.max_elevation
                )));
            }
        }
        Command::Pressure => {
            if params.lapse_rate <= 0.0 {
                return Err("Lapse rate must be positive".into());
            }
            // The lapse-rate model is undefined once it predicts 0 K.
            let atmosphere = compute::atmosphere_model(&params);
            let (_, max_altitude) = series.bounds();
            if max_altitude >= atmosphere.ceiling() {
                return Err(PlannerError::from(format!(
                    "Altitude {:.0} m is at or above the {:.0} m model ceiling (0 K)",
                    max_altitude,
                    atmosphere.ceiling()
                )));
            }
        }
        Command::Chart => {
            return Err("Chart rendering does not use the calculation pipeline".into());
        }
    }

    Ok(ComputePlan {
        samples: series.expand(),
        command,
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_altitudes_above_model_ceiling() {
        let series = SeriesSource::Single(50000.0);
        let Err(err) = build_job(series, Command::Pressure, Parameters::default()) else {
            panic!("altitude above the ceiling must be rejected");
        };
        assert!(err.0.contains("ceiling"));
    }

    #[test]
    fn rejects_ranges_whose_last_sample_overshoots_the_ceiling() {
        // The inclusive expansion tolerates a half step past end, so the
        // final sample of this range is 43600 m, above the 43561 m ceiling.
        let series = SeriesSource::Range {
            start: 43000.0,
            end: 43510.0,
            step: 200.0,
        };
        let Err(err) = build_job(series, Command::Pressure, Parameters::default()) else {
            panic!("range overshooting the ceiling must be rejected");
        };
        assert!(err.0.contains("ceiling"));
    }

    #[test]
    fn rejects_empty_clip_range() {
        let params = Parameters {
            min_elevation: 10.0,
            max_elevation: 0.0,
            ..Parameters::default()
        };
        let series = SeriesSource::Single(5.0);
        assert!(build_job(series, Command::Refraction, params).is_err());
    }

    #[test]
    fn accepts_reference_sweeps() {
        let elevations = SeriesSource::Range {
            start: -2.5,
            end: 90.0,
            step: 0.1,
        };
        assert!(build_job(elevations, Command::Refraction, Parameters::default()).is_ok());

        let altitudes = SeriesSource::Range {
            start: 0.0,
            end: 31000.0,
            step: 500.0,
        };
        let plan = build_job(altitudes, Command::Pressure, Parameters::default()).unwrap();
        assert_eq!(plan.samples.count(), 63);
    }
}
