//! Chart rendering: the refraction-correction and pressure-profile figures.

use crate::atmosphere::StandardAtmosphere;
use crate::data::{Parameters, linspace};
use crate::refraction::Saemundsson;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

type PlotResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

pub const REFRACTION_CHART: &str = "atmospheric_refraction.svg";
pub const PRESSURE_CHART: &str = "pressure_profile.svg";

/// Condition curves of the refraction figure: temperature [°C],
/// pressure [kPa], stroke color.
const CONDITIONS: &[(f64, f64, RGBColor)] = &[
    (10.0, 101.0, RGBColor(255, 0, 0)),
    (-30.0, 101.0, RGBColor(0, 0, 255)),
    (10.0, 70.0, RGBColor(255, 127, 80)),
    (-30.0, 70.0, RGBColor(100, 149, 237)),
];

/// Clip bound of the dashed comparison curves, showing the formula below
/// its nominal valid range.
const COMPARISON_MIN_ELEVATION: f64 = -20.0;

pub fn render_charts(params: &Parameters) -> PlotResult<Vec<PathBuf>> {
    std::fs::create_dir_all(&params.out_dir)?;

    let refraction_path = params.out_dir.join(REFRACTION_CHART);
    refraction_chart(&refraction_path)?;

    let pressure_path = params.out_dir.join(PRESSURE_CHART);
    pressure_chart(&pressure_path)?;

    Ok(vec![refraction_path, pressure_path])
}

/// Refraction correction vs. true solar elevation for the four reference
/// atmospheric conditions. Solid curves use the default clipping; dashed
/// curves are clipped at −20° instead.
fn refraction_chart(path: &Path) -> PlotResult<()> {
    let elevations = linspace(-2.5, 90.0, 926);

    let root = SVGBackend::new(path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Atmospheric refraction according to Saemundsson (1986)",
            ("sans-serif", 22),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-3.0..45.0, -0.05..0.88)?;
    chart
        .configure_mesh()
        .x_desc("Solar elevation angle [°]")
        .y_desc("Refraction correction [°]")
        .draw()?;

    // Below-horizon band and zero-axis crosshairs; out-of-range vertices
    // are clipped by the plotting area.
    chart.draw_series(std::iter::once(Polygon::new(
        vec![(-5.0, 0.0), (-1.0, 0.0), (-1.0, 3.5), (-5.0, 3.5)],
        RGBColor(128, 128, 128).mix(0.5).filled(),
    )))?;
    chart.draw_series(LineSeries::new(
        vec![(0.0, -0.5), (0.0, 3.5)],
        BLACK.stroke_width(1),
    ))?;
    chart.draw_series(LineSeries::new(
        vec![(-2.5, 0.0), (90.0, 0.0)],
        BLACK.stroke_width(1),
    ))?;

    for &(temperature, pressure, color) in CONDITIONS {
        let comparison = Saemundsson {
            min_elevation: COMPARISON_MIN_ELEVATION,
            ..Saemundsson::with_conditions(temperature, pressure)
        };
        let dashed = comparison.correction_series(&elevations);
        chart.draw_series(DashedLineSeries::new(
            elevations.iter().copied().zip(dashed),
            4,
            3,
            color.stroke_width(2),
        ))?;

        let model = Saemundsson::with_conditions(temperature, pressure);
        let solid = model.correction_series(&elevations);
        chart
            .draw_series(LineSeries::new(
                elevations.iter().copied().zip(solid),
                color.stroke_width(2),
            ))?
            .label(format!(
                "T = {:.1} °C, P = {:.1} kPa",
                temperature, pressure
            ))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(&TRANSPARENT)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Pressure vs. altitude for the constant-lapse-rate standard atmosphere,
/// 0–31 km.
fn pressure_chart(path: &Path) -> PlotResult<()> {
    let atmosphere = StandardAtmosphere::default();
    let altitudes = linspace(0.0, 31000.0, 1000);

    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Pressure profile of the standard atmosphere",
            ("sans-serif", 22),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..105.0, 0.0..31.0)?;
    chart
        .configure_mesh()
        .x_desc("Pressure [kPa]")
        .y_desc("Altitude [km]")
        .draw()?;

    let pressures = atmosphere.pressure_series(&altitudes);
    chart.draw_series(LineSeries::new(
        pressures.into_iter().zip(altitudes.iter().map(|&z| z / 1000.0)),
        BLUE.stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}
