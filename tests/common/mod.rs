#![allow(dead_code)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Test helper for running refract commands with less boilerplate
pub struct RefractTest {
    cmd: Command,
}

pub fn refract_command() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("refract"))
}

impl RefractTest {
    /// Create a new refract command test
    pub fn new() -> Self {
        Self {
            cmd: refract_command(),
        }
    }

    /// Add arguments to the command
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        self.cmd.args(args);
        self
    }

    /// Add a single argument to the command
    pub fn arg<S: AsRef<std::ffi::OsStr>>(mut self, arg: S) -> Self {
        self.cmd.arg(arg);
        self
    }

    /// Set the working directory
    pub fn current_dir<P: AsRef<std::path::Path>>(mut self, dir: P) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    /// Assert the command succeeds
    pub fn assert_success(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().success()
    }

    /// Assert the command succeeds and contains text in stdout
    pub fn assert_success_contains(mut self, text: &str) -> assert_cmd::assert::Assert {
        self.cmd
            .assert()
            .success()
            .stdout(predicate::str::contains(text))
    }

    /// Assert the command succeeds and contains all texts in stdout
    pub fn assert_success_contains_all(mut self, texts: &[&str]) -> assert_cmd::assert::Assert {
        let mut assertion = self.cmd.assert().success();
        for text in texts {
            assertion = assertion.stdout(predicate::str::contains(*text));
        }
        assertion
    }

    /// Assert the command fails
    pub fn assert_failure(mut self) -> assert_cmd::assert::Assert {
        self.cmd.assert().failure()
    }

    /// Get the raw command for complex assertions (when helpers aren't enough)
    pub fn command(self) -> Command {
        self.cmd
    }

    /// Get command output for inspection
    pub fn get_output(mut self) -> std::process::Output {
        self.cmd.output().unwrap()
    }
}

/// Quick helper for a single-elevation refraction calculation
pub fn refraction_test(elevation: &str) -> RefractTest {
    RefractTest::new().args([elevation, "refraction"])
}

/// Quick helper for refraction with a global format option
pub fn refraction_test_with_format(format: &str, elevation: &str) -> RefractTest {
    RefractTest::new().args([&format!("--format={}", format), elevation, "refraction"])
}

/// Quick helper for the reference elevation sweep
pub fn elevation_sweep_test() -> RefractTest {
    RefractTest::new().args(["--format=csv", "-2.5:90:0.1", "refraction"])
}

/// Quick helper for a pressure profile sweep
pub fn pressure_sweep_test(series: &str) -> RefractTest {
    RefractTest::new().args(["--format=csv", series, "pressure"])
}

/// Quick helper for CSV output without headers
pub fn refraction_csv_no_headers(elevation: &str) -> RefractTest {
    RefractTest::new().args(["--format=csv", "--no-headers", elevation, "refraction"])
}

/// Quick helper for custom atmospheric conditions
pub fn cold_low_pressure_test(elevation: &str) -> RefractTest {
    RefractTest::new().args([
        "--format=csv",
        elevation,
        "refraction",
        "--temperature=-30",
        "--pressure=70",
    ])
}

/// Quick helper for missing arguments test
pub fn missing_args_test() -> RefractTest {
    RefractTest::new().args(["0.0"])
}

/// Parse the last data field of the first CSV data row in stdout
pub fn first_row_field(output: &std::process::Output, field: usize) -> f64 {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let row = stdout
        .lines()
        .nth(1)
        .unwrap_or_else(|| panic!("expected a data row in: {}", stdout));
    row.split(',')
        .nth(field)
        .unwrap_or_else(|| panic!("expected field {} in row: {}", field, row))
        .parse()
        .unwrap()
}
