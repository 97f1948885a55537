//! Output formatting for CSV, JSON, and text table formats.

use crate::compute::CalculationResult;
use crate::data::{Command, OutputFormat, Parameters};
use crate::error::OutputError;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

pub fn dispatch_output(
    results: Box<dyn Iterator<Item = CalculationResult>>,
    command: Command,
    params: &Parameters,
) -> Result<usize, OutputError> {
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    write_output(results, command, params, &mut writer)
}

pub fn write_output<W: Write>(
    results: Box<dyn Iterator<Item = CalculationResult>>,
    command: Command,
    params: &Parameters,
    writer: &mut W,
) -> Result<usize, OutputError> {
    let show_inputs = params.show_inputs.unwrap_or(false);
    let mut count = 0usize;

    match params.format {
        OutputFormat::Csv => {
            for (index, result) in results.enumerate() {
                let first = index == 0;
                let chunk = match command {
                    Command::Refraction => {
                        format_csv_refraction(&result, show_inputs, params.headers, first, params)
                    }
                    Command::Pressure => {
                        format_csv_pressure(&result, show_inputs, params.headers, first, params)
                    }
                    Command::Chart => unreachable!("chart output is rendered, not streamed"),
                };
                writer.write_all(chunk.as_bytes())?;
                count += 1;
            }
        }
        OutputFormat::Json => {
            for result in results {
                let json = match command {
                    Command::Refraction => format_json_refraction(&result, show_inputs, params),
                    Command::Pressure => format_json_pressure(&result, show_inputs, params),
                    Command::Chart => unreachable!("chart output is rendered, not streamed"),
                };
                writer.write_all(json.as_bytes())?;
                writer.write_all(b"\n")?;
                count += 1;
            }
        }
        OutputFormat::Text => {
            count = write_text_table(results, command, params, writer)?;
        }
    }

    writer.flush()?;
    Ok(count)
}

fn format_csv_refraction(
    result: &CalculationResult,
    show_inputs: bool,
    headers: bool,
    first: bool,
    params: &Parameters,
) -> String {
    match result {
        CalculationResult::Refraction {
            elevation,
            correction,
            apparent,
        } => {
            let mut output = String::new();

            if first && headers {
                if show_inputs {
                    output.push_str(
                        "temperature,pressure,minElevation,maxElevation,elevation,refraction,apparent\n",
                    );
                } else {
                    output.push_str("elevation,refraction,apparent\n");
                }
            }

            if show_inputs {
                output.push_str(&format!(
                    "{:.1},{:.1},{:.1},{:.1},{:.5},{:.5},{:.5}\n",
                    params.temperature,
                    params.pressure,
                    params.min_elevation,
                    params.max_elevation,
                    elevation,
                    correction,
                    apparent
                ));
            } else {
                output.push_str(&format!(
                    "{:.5},{:.5},{:.5}\n",
                    elevation, correction, apparent
                ));
            }
            output
        }
        _ => String::new(),
    }
}

fn format_csv_pressure(
    result: &CalculationResult,
    show_inputs: bool,
    headers: bool,
    first: bool,
    params: &Parameters,
) -> String {
    match result {
        CalculationResult::Pressure {
            altitude,
            temperature,
            pressure,
        } => {
            let mut output = String::new();

            if first && headers {
                if show_inputs {
                    output.push_str(
                        "seaLevelTemperature,seaLevelPressure,lapseRate,altitude,temperature,pressure\n",
                    );
                } else {
                    output.push_str("altitude,temperature,pressure\n");
                }
            }

            if show_inputs {
                output.push_str(&format!(
                    "{:.1},{:.1},{:.5},{:.1},{:.2},{:.4}\n",
                    params.sea_level_temperature,
                    params.sea_level_pressure,
                    params.lapse_rate,
                    altitude,
                    temperature,
                    pressure
                ));
            } else {
                output.push_str(&format!(
                    "{:.1},{:.2},{:.4}\n",
                    altitude, temperature, pressure
                ));
            }
            output
        }
        _ => String::new(),
    }
}

fn format_json_refraction(
    result: &CalculationResult,
    show_inputs: bool,
    params: &Parameters,
) -> String {
    match result {
        CalculationResult::Refraction {
            elevation,
            correction,
            apparent,
        } => {
            if show_inputs {
                format!(
                    r#"{{"temperature":{},"pressure":{},"minElevation":{},"maxElevation":{},"elevation":{},"refraction":{},"apparent":{}}}"#,
                    params.temperature,
                    params.pressure,
                    params.min_elevation,
                    params.max_elevation,
                    elevation,
                    correction,
                    apparent
                )
            } else {
                format!(
                    r#"{{"elevation":{},"refraction":{},"apparent":{}}}"#,
                    elevation, correction, apparent
                )
            }
        }
        _ => String::new(),
    }
}

fn format_json_pressure(
    result: &CalculationResult,
    show_inputs: bool,
    params: &Parameters,
) -> String {
    match result {
        CalculationResult::Pressure {
            altitude,
            temperature,
            pressure,
        } => {
            if show_inputs {
                format!(
                    r#"{{"seaLevelTemperature":{},"seaLevelPressure":{},"lapseRate":{},"altitude":{},"temperature":{},"pressure":{}}}"#,
                    params.sea_level_temperature,
                    params.sea_level_pressure,
                    params.lapse_rate,
                    altitude,
                    temperature,
                    pressure
                )
            } else {
                format!(
                    r#"{{"altitude":{},"temperature":{},"pressure":{}}}"#,
                    altitude, temperature, pressure
                )
            }
        }
        _ => String::new(),
    }
}

fn column_headers(command: Command) -> Vec<&'static str> {
    match command {
        Command::Refraction => vec!["Elevation [°]", "Refraction [°]", "Apparent [°]"],
        Command::Pressure => vec!["Altitude [m]", "Temperature [K]", "Pressure [kPa]"],
        Command::Chart => vec![],
    }
}

fn condition_summary(command: Command, params: &Parameters) -> String {
    let mut header = String::new();
    match command {
        Command::Refraction => {
            header.push_str(&format!("  Temperature: {:.1}°C\n", params.temperature));
            header.push_str(&format!("  Pressure:    {:.1} kPa\n", params.pressure));
            header.push_str(&format!(
                "  Clip range:  {:.1}° to {:.1}°\n",
                params.min_elevation, params.max_elevation
            ));
        }
        Command::Pressure => {
            header.push_str(&format!(
                "  Sea-level temperature: {:.1}°C\n",
                params.sea_level_temperature
            ));
            header.push_str(&format!(
                "  Sea-level pressure:    {:.1} kPa\n",
                params.sea_level_pressure
            ));
            header.push_str(&format!(
                "  Lapse rate:            {:.5} K/m\n",
                params.lapse_rate
            ));
        }
        Command::Chart => {}
    }
    header.push('\n');
    header
}

fn format_table_row(result: &CalculationResult, widths: &[usize]) -> String {
    let cells = match result {
        CalculationResult::Refraction {
            elevation,
            correction,
            apparent,
        } => vec![
            format!("{:.5}", elevation),
            format!("{:.5}", correction),
            format!("{:.5}", apparent),
        ],
        CalculationResult::Pressure {
            altitude,
            temperature,
            pressure,
        } => vec![
            format!("{:.1}", altitude),
            format!("{:.2}", temperature),
            format!("{:.4}", pressure),
        ],
    };

    let mut output = String::from('│');
    for (cell, width) in cells.iter().zip(widths) {
        output.push_str(&format!(" {:>width$} ", cell, width = width));
        output.push('│');
    }
    output.push('\n');
    output
}

fn write_text_table<W: Write>(
    mut results: Box<dyn Iterator<Item = CalculationResult>>,
    command: Command,
    params: &Parameters,
    writer: &mut W,
) -> Result<usize, OutputError> {
    let Some(first) = results.next() else {
        return Ok(0);
    };

    let headers = column_headers(command);
    // Display width, not byte length: headers carry a ° that str::len overcounts.
    let widths: Vec<usize> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(*h).max(14))
        .collect();

    let mut header = condition_summary(command, params);

    // Top border
    header.push('┌');
    for (i, width) in widths.iter().enumerate() {
        header.push_str(&"─".repeat(width + 2));
        if i < widths.len() - 1 {
            header.push('┬');
        }
    }
    header.push_str("┐\n");

    // Header row
    header.push('│');
    for (h, width) in headers.iter().zip(&widths) {
        let pad = width - UnicodeWidthStr::width(*h);
        header.push_str(&format!(" {}{} ", h, " ".repeat(pad)));
        header.push('│');
    }
    header.push('\n');

    // Separator
    header.push('├');
    for (i, width) in widths.iter().enumerate() {
        header.push_str(&"─".repeat(width + 2));
        if i < widths.len() - 1 {
            header.push('┼');
        }
    }
    header.push_str("┤\n");

    writer.write_all(header.as_bytes())?;

    let mut count = 1usize;
    writer.write_all(format_table_row(&first, &widths).as_bytes())?;
    for result in results {
        writer.write_all(format_table_row(&result, &widths).as_bytes())?;
        count += 1;
    }

    // Bottom border
    let mut footer = String::from('└');
    for (i, width) in widths.iter().enumerate() {
        footer.push_str(&"─".repeat(width + 2));
        if i < widths.len() - 1 {
            footer.push('┴');
        }
    }
    footer.push_str("┘\n");
    writer.write_all(footer.as_bytes())?;

    Ok(count)
}
