//! Command-line parsing and validation.

use crate::data::{self, Command, OutputFormat, Parameters, SeriesSource};
use crate::error::CliError;
use std::path::PathBuf;

pub fn parse_cli(args: Vec<String>) -> Result<(Option<SeriesSource>, Command, Parameters), CliError> {
    if args.len() < 2 {
        return Err(CliError::Exit(
            "Usage: refract [OPTIONS] <series> <refraction|pressure|chart>".to_string(),
        ));
    }

    let defaults = Parameters::default();
    let mut params = Parameters::default();
    let mut positional_args = Vec::new();

    // Single pass: separate options from positionals
    for arg in args.iter().skip(1) {
        if let Some(stripped) = arg.strip_prefix("--") {
            let (name, value) = stripped
                .split_once('=')
                .map(|(n, v)| (n, Some(v)))
                .unwrap_or((stripped, None));

            match name {
                "format" => {
                    params.format = required_value("format", value)?
                        .parse::<OutputFormat>()
                        .map_err(CliError::Message)?
                }
                "temperature" => params.temperature = parse_f64("temperature", value)?,
                "pressure" => params.pressure = parse_f64("pressure", value)?,
                "min-elevation" => params.min_elevation = parse_f64("min-elevation", value)?,
                "max-elevation" => params.max_elevation = parse_f64("max-elevation", value)?,
                "sea-level-temperature" => {
                    params.sea_level_temperature = parse_f64("sea-level-temperature", value)?
                }
                "sea-level-pressure" => {
                    params.sea_level_pressure = parse_f64("sea-level-pressure", value)?
                }
                "lapse-rate" => params.lapse_rate = parse_f64("lapse-rate", value)?,
                "out" => {
                    let dir = required_value("out", value)?;
                    if dir.is_empty() {
                        return Err("Option --out requires a directory".into());
                    }
                    params.out_dir = PathBuf::from(dir);
                }
                "headers" => params.headers = true,
                "no-headers" => params.headers = false,
                "show-inputs" => params.show_inputs = Some(true),
                "no-show-inputs" => params.show_inputs = Some(false),
                "perf" => params.perf = true,
                "help" => return Err(CliError::Exit(get_help_text())),
                "version" => return Err(CliError::Exit(get_version_text())),
                _ => return Err(format!("Unknown option: --{}", name).into()),
            }
        } else {
            positional_args.push(arg.clone());
        }
    }

    if positional_args.is_empty() {
        return Err("No command found".into());
    }

    // Handle "help" command
    if positional_args[0] == "help" {
        if positional_args.len() >= 2 {
            return Err(CliError::Exit(get_command_help(&positional_args[1])));
        } else {
            return Err(CliError::Exit(get_help_text()));
        }
    }

    // Find the command
    let command_index = positional_args
        .iter()
        .position(|arg| arg == "refraction" || arg == "pressure" || arg == "chart")
        .ok_or(CliError::Message("No command found".to_string()))?;

    let command = match positional_args[command_index].as_str() {
        "refraction" => Command::Refraction,
        "pressure" => Command::Pressure,
        _ => Command::Chart,
    };

    // Validate command-specific options
    match command {
        Command::Refraction => {
            if params.sea_level_temperature != defaults.sea_level_temperature {
                return Err(
                    "Option --sea-level-temperature not valid for refraction command".into(),
                );
            }
            if params.sea_level_pressure != defaults.sea_level_pressure {
                return Err("Option --sea-level-pressure not valid for refraction command".into());
            }
            if params.lapse_rate != defaults.lapse_rate {
                return Err("Option --lapse-rate not valid for refraction command".into());
            }
            if params.out_dir != defaults.out_dir {
                return Err("Option --out not valid for refraction command".into());
            }
        }
        Command::Pressure => {
            if params.temperature != defaults.temperature {
                return Err("Option --temperature not valid for pressure command".into());
            }
            if params.pressure != defaults.pressure {
                return Err("Option --pressure not valid for pressure command".into());
            }
            if params.min_elevation != defaults.min_elevation {
                return Err("Option --min-elevation not valid for pressure command".into());
            }
            if params.max_elevation != defaults.max_elevation {
                return Err("Option --max-elevation not valid for pressure command".into());
            }
            if params.out_dir != defaults.out_dir {
                return Err("Option --out not valid for pressure command".into());
            }
        }
        Command::Chart => {
            if params.format != defaults.format {
                return Err("Option --format not valid for chart command".into());
            }
            if params.show_inputs.is_some() {
                return Err("Option --show-inputs not valid for chart command".into());
            }
            if params.temperature != defaults.temperature
                || params.pressure != defaults.pressure
                || params.min_elevation != defaults.min_elevation
                || params.max_elevation != defaults.max_elevation
                || params.sea_level_temperature != defaults.sea_level_temperature
                || params.sea_level_pressure != defaults.sea_level_pressure
                || params.lapse_rate != defaults.lapse_rate
            {
                return Err(
                    "Model options not valid for chart command; it renders the reference figures"
                        .into(),
                );
            }
        }
    }

    // Series argument is everything before the command
    let series_args = &positional_args[..command_index];
    let trailing = &positional_args[command_index + 1..];
    if !trailing.is_empty() {
        return Err(format!("Unexpected argument: {}", trailing[0]).into());
    }

    let series = match command {
        Command::Chart => {
            if !series_args.is_empty() {
                return Err("The chart command takes no series argument".into());
            }
            None
        }
        _ => {
            if series_args.is_empty() {
                return Err("Missing series argument (value or start:end:step)".into());
            }
            if series_args.len() > 1 {
                return Err("Too many arguments".into());
            }
            Some(data::parse_series(&series_args[0]).map_err(CliError::Message)?)
        }
    };

    // Auto-decide show_inputs if not explicitly set
    if params.show_inputs.is_none() {
        params.show_inputs = Some(matches!(series, Some(s) if s.is_range()));
    }

    Ok((series, command, params))
}

fn required_value<'a>(flag: &'static str, value: Option<&'a str>) -> Result<&'a str, CliError> {
    value.ok_or_else(|| CliError::Message(format!("Option --{} requires a value", flag)))
}

fn parse_f64(option: &'static str, value: Option<&str>) -> Result<f64, CliError> {
    let v = required_value(option, value)?;
    v.parse::<f64>()
        .map_err(|_| CliError::Message(format!("Invalid {} value: {}", option, v)))
}

fn get_version_text() -> String {
    format!("refract {}", env!("CARGO_PKG_VERSION"))
}

fn get_help_text() -> String {
    format!(
        r#"refract {}
Computes atmospheric refraction corrections and barometric pressure profiles.

Usage: refract [OPTIONS] <series> <COMMAND>

Examples:
  refract 0.0 refraction
  refract -2.5:90:0.1 refraction --format=csv
  refract 0:31000:500 pressure
  refract chart --out=figures

Arguments:
  <series>          Input series: a single value or a start:end:step range
                      0.0          single sample
                      -2.5:90:0.1  sweep from -2.5 to 90 in 0.1 steps
                    Elevation angles in degrees for 'refraction', altitudes
                    in meters for 'pressure'. The 'chart' command takes no
                    series argument.

Options:
  --format=<format>     Output format: text, csv, json. Default: text
  --help                Show this help message and exit.
  --version             Print version information and exit.
  --[no-]headers        Show headers in output (CSV only). Default: true
  --[no-]show-inputs    Show model parameters in output. Auto-enabled for
                        ranges unless --no-show-inputs is used.
  --perf                Show performance statistics.

Commands:
  refraction            Refraction correction of the solar elevation angle
                        (Saemundsson 1986)
  pressure              Barometric pressure profile for a constant
                        lapse-rate atmosphere
  chart                 Render the reference figures to an output directory

Run 'refract help <command>' for command-specific options.
"#,
        env!("CARGO_PKG_VERSION")
    )
}

pub fn get_command_help(command: &str) -> String {
    match command {
        "refraction" => r#"Usage: refract <series> refraction [OPTIONS]

Computes the refraction correction of the true solar elevation angle
according to Saemundsson (1986), scaled for ambient temperature and
pressure. Reports the correction in degrees together with the apparent
elevation (true elevation plus correction). Input angles are clamped
into the clip range before evaluation.

Options:
  --temperature=<celsius>   Ambient temperature in °C. Default: 10
  --pressure=<kPa>          Ambient pressure in kPa. Default: 101
  --min-elevation=<deg>     Lower clip bound. Default: -1
  --max-elevation=<deg>     Upper clip bound. Default: 90

Examples:
  refract 0.0 refraction
  refract -2.5:90:0.1 refraction --temperature=-30 --pressure=70
  refract 0.0 refraction --min-elevation=-20
"#
        .to_string(),
        "pressure" => r#"Usage: refract <series> pressure [OPTIONS]

Evaluates the barometric formula

  p(z) = p0 * ((T0 - tau*z) / T0) ^ (g / (Rd * tau))

for a standard atmosphere with constant lapse rate. Valid below the
altitude where the lapse-rate model reaches 0 K (about 43.6 km with the
default settings).

Options:
  --sea-level-temperature=<celsius>  Sea-level temperature in °C. Default: 10
  --sea-level-pressure=<kPa>         Sea-level pressure in kPa. Default: 101
  --lapse-rate=<K/m>                 Temperature lapse rate. Default: 0.0065

Examples:
  refract 0:31000:500 pressure --format=csv
  refract 11000 pressure
"#
        .to_string(),
        "chart" => r#"Usage: refract chart [OPTIONS]

Renders the two reference figures: refraction correction vs. solar
elevation for four atmospheric conditions (solid: default clipping,
dashed: clipped at -20°), and pressure vs. altitude for the standard
atmosphere. Prints the written file paths.

Options:
  --out=<dir>           Output directory for the figures. Default: .

Examples:
  refract chart
  refract chart --out=figures
"#
        .to_string(),
        _ => format!(
            "Unknown command: {}\n\nRun 'refract --help' for usage.",
            command
        ),
    }
}
