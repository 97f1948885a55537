//! CLI data types: parameters, commands, and series expansion.

use crate::{atmosphere, refraction};
use std::path::PathBuf;
use std::str::FromStr;

/// Input series for a calculation: a single sample or a linear sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesSource {
    Single(f64),
    Range { start: f64, end: f64, step: f64 },
}

pub type SampleStream = Box<dyn Iterator<Item = f64>>;

impl SeriesSource {
    pub fn expand(&self) -> SampleStream {
        match *self {
            SeriesSource::Single(value) => Box::new(std::iter::once(value)),
            SeriesSource::Range { start, end, step } => {
                if step == 0.0 || start == end {
                    Box::new(std::iter::once(start))
                } else {
                    Box::new(std::iter::successors(Some(start), move |&x| {
                        let next = x + step;
                        (next <= end + step * 0.5).then_some(next)
                    }))
                }
            }
        }
    }

    /// Smallest and largest sample the expansion will actually emit. The
    /// half-step end tolerance means the last sample of a range can lie up
    /// to `step / 2` past `end`.
    pub fn bounds(&self) -> (f64, f64) {
        match *self {
            SeriesSource::Single(value) => (value, value),
            SeriesSource::Range { start, end, step } => {
                let last = if step == 0.0 || start == end {
                    start
                } else {
                    start + step * ((end - start) / step + 0.5).floor()
                };
                (start.min(last), start.max(last))
            }
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, SeriesSource::Range { .. })
    }
}

/// Parse a series argument: a plain number or `start:end:step`.
pub fn parse_series(s: &str) -> Result<SeriesSource, String> {
    let Some((start_str, rest)) = s.split_once(':') else {
        return s
            .parse::<f64>()
            .map(SeriesSource::Single)
            .map_err(|_| format!("Invalid series value: {}", s));
    };
    let Some((end_str, step_str)) = rest.split_once(':') else {
        return Err(format!("Range must be start:end:step, got: {}", s));
    };

    let (start, end, step) = (
        start_str
            .parse()
            .map_err(|_| format!("Invalid range start: {}", start_str))?,
        end_str
            .parse()
            .map_err(|_| format!("Invalid range end: {}", end_str))?,
        step_str
            .parse()
            .map_err(|_| format!("Invalid range step: {}", step_str))?,
    );

    if step <= 0.0 {
        return Err("Range step must be positive".to_string());
    }
    if end < start {
        return Err(format!("Range end {} is less than start {}", end, start));
    }

    Ok(SeriesSource::Range { start, end, step })
}

/// Evenly spaced samples over `[start, end]`, endpoints included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: '{}'. Supported formats: text, csv, json",
                s
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Parameters {
    pub format: OutputFormat,
    pub headers: bool,
    pub show_inputs: Option<bool>, // None means auto-decide
    pub perf: bool,
    // refraction command
    pub temperature: f64,   // °C
    pub pressure: f64,      // kPa
    pub min_elevation: f64, // degree
    pub max_elevation: f64, // degree
    // pressure command
    pub sea_level_temperature: f64, // °C
    pub sea_level_pressure: f64,    // kPa
    pub lapse_rate: f64,            // K/m
    // chart command
    pub out_dir: PathBuf,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            format: OutputFormat::Text,
            headers: true,
            show_inputs: None,
            perf: false,
            temperature: refraction::STANDARD_TEMPERATURE,
            pressure: refraction::STANDARD_PRESSURE,
            min_elevation: refraction::DEFAULT_MIN_ELEVATION,
            max_elevation: refraction::DEFAULT_MAX_ELEVATION,
            sea_level_temperature: atmosphere::SEA_LEVEL_TEMPERATURE
                - atmosphere::CELSIUS_TO_KELVIN,
            sea_level_pressure: atmosphere::SEA_LEVEL_PRESSURE,
            lapse_rate: atmosphere::STANDARD_LAPSE_RATE,
            out_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Refraction,
    Pressure,
    Chart,
}
