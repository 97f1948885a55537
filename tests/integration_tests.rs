mod common;

use common::*;
use predicates::prelude::*;

#[test]
fn text_output_for_single_elevation() {
    refraction_test("0.0").assert_success_contains_all(&[
        "Temperature: 10.0°C",
        "Pressure:    101.0 kPa",
        "Elevation [°]",
        "0.48306",
        "┌",
        "└",
    ]);
}

#[test]
fn horizon_correction_matches_reference_value() {
    let output = refraction_test_with_format("csv", "0.0").get_output();
    let correction = first_row_field(&output, 1);
    assert!(
        (correction - 0.48306).abs() < 1e-3,
        "correction at the horizon was {}",
        correction
    );
}

#[test]
fn apparent_elevation_is_true_plus_correction() {
    let output = refraction_test_with_format("csv", "10.0").get_output();
    let correction = first_row_field(&output, 1);
    let apparent = first_row_field(&output, 2);
    assert!((apparent - (10.0 + correction)).abs() < 1e-9);
}

#[test]
fn csv_without_headers_has_data_only() {
    let output = refraction_csv_no_headers("45.0").get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("45.00000,"));
}

#[test]
fn range_auto_enables_show_inputs() {
    RefractTest::new()
        .args(["--format=csv", "0:90:30", "refraction"])
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "temperature,pressure,minElevation,maxElevation,elevation,refraction,apparent",
        ))
        .stdout(predicate::function(|s: &str| s.lines().count() == 5));
}

#[test]
fn single_value_leaves_inputs_hidden() {
    let output = refraction_test_with_format("csv", "0.0").get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().next().unwrap(), "elevation,refraction,apparent");
}

#[test]
fn pressure_sweep_covers_reference_profile() {
    let output = pressure_sweep_test("0:31000:1000").get_output();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // 32 samples plus the show-inputs header of the range
    assert_eq!(stdout.lines().count(), 33);
    assert!(stdout.lines().nth(1).unwrap().contains("101.0000"));
}

#[test]
fn pressure_at_cruise_altitude() {
    let output = pressure_sweep_test("11000").get_output();
    let pressure = first_row_field(&output, 2);
    assert!(
        (pressure - 21.86).abs() < 0.05,
        "pressure at 11 km was {}",
        pressure
    );
}

#[test]
fn custom_conditions_scale_the_correction() {
    // Cold low-pressure air bends less: 0.48306 * (70/101) * (283/243)
    let output = cold_low_pressure_test("0.0").get_output();
    let correction = first_row_field(&output, 1);
    assert!(
        (correction - 0.38991).abs() < 1e-3,
        "scaled correction was {}",
        correction
    );
}

#[test]
fn json_output_is_one_object_per_line() {
    refraction_test_with_format("json", "45.0")
        .command()
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"{"elevation":45,"refraction":"#))
        .stdout(predicate::str::ends_with("}\n"));
}

#[test]
fn json_with_inputs_includes_conditions() {
    RefractTest::new()
        .args(["--format=json", "--show-inputs", "1000", "pressure"])
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""seaLevelPressure":101"#))
        .stdout(predicate::str::contains(r#""altitude":1000"#));
}

#[test]
fn clipping_saturates_below_min_elevation() {
    // -5 clamps to the default -1 bound, so both report the same correction
    let below = refraction_test_with_format("csv", "-5.0").get_output();
    let bound = refraction_test_with_format("csv", "-1.0").get_output();
    assert_eq!(first_row_field(&below, 1), first_row_field(&bound, 1));
}

#[test]
fn widened_clip_range_is_honored() {
    // At -2.5° the unclamped correction (~0.674°) exceeds the value at the
    // default -1° clip bound (~0.647°). Further below, the formula turns
    // non-monotonic, so this is where the widened clip shows.
    let wide = RefractTest::new()
        .args(["--format=csv", "-2.5", "refraction", "--min-elevation=-20"])
        .get_output();
    let narrow = refraction_test_with_format("csv", "-2.5").get_output();
    let wide_correction = first_row_field(&wide, 1);
    let narrow_correction = first_row_field(&narrow, 1);
    assert!(
        wide_correction > narrow_correction,
        "expected {} > {}",
        wide_correction,
        narrow_correction
    );
    assert!((wide_correction - 0.674).abs() < 2e-3);
    assert!((narrow_correction - 0.647).abs() < 2e-3);
}

#[test]
fn perf_reports_on_stderr() {
    RefractTest::new()
        .args(["--perf", "--format=csv", "0:90:1", "refraction"])
        .command()
        .assert()
        .success()
        .stderr(predicate::str::contains("records in"));
}
