use assert_cmd::Command;
use predicates::prelude::*;

const CATALOG: &str = "../../configs/bodies";
const SETTINGS: &str = "../../configs/settings.toml";

fn orbit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("orbit").expect("orbit binary");
    cmd.args(["--catalog", CATALOG, "--settings", SETTINGS]);
    cmd
}

fn transfer_cmd() -> Command {
    let mut cmd = Command::cargo_bin("transfer").expect("transfer binary");
    cmd.args(["--catalog", CATALOG, "--settings", SETTINGS]);
    cmd
}

#[test]
fn orbit_prints_summary_for_kerbin() {
    orbit_cmd()
        .args([
            "--body",
            "kerbin",
            "-e",
            "periapsis-altitude=70000",
            "-e",
            "apoapsis-altitude=100000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kerbin: 70 km x 100 km"))
        .stdout(predicate::str::contains("S.Major Axis"));
}

#[test]
fn orbit_radii_flag_switches_apsis_style() {
    orbit_cmd()
        .args([
            "--body",
            "Kerbin",
            "--radii",
            "-e",
            "apoapsis=700000",
            "-e",
            "periapsis=600000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kerbin: 600 km x 700 km"))
        .stdout(predicate::str::contains("29m 12s"));
}

#[test]
fn synchronous_orbit_uses_rotation_period() {
    orbit_cmd()
        .args(["--body", "Kerbin", "--synchronous", "-e", "eccentricity=0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5h 59m 9s"));
}

#[test]
fn element_errors_are_reported() {
    orbit_cmd()
        .args(["--body", "Kerbin", "-e", "apoapsis=700000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("two orbital elements are required"));

    orbit_cmd()
        .args([
            "--body",
            "Kerbin",
            "-e",
            "semi-major-axis=700000",
            "-e",
            "period=3000",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ambiguous"));

    orbit_cmd()
        .args(["--body", "Kerbin", "-e", "apoapsis=7e5", "-e", "ecc=zero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'zero' is not a valid number"));
}

#[test]
fn unknown_body_fails() {
    orbit_cmd()
        .args(["--body", "Earth", "-e", "sma=7e6", "-e", "ecc=0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in catalog"));
}

#[test]
fn orbit_writes_json_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("orbit.json");
    orbit_cmd()
        .args(["--body", "Mun", "-e", "sma=250000", "-e", "ecc=0.1", "--json"])
        .arg(&path)
        .assert()
        .success();
    let text = std::fs::read_to_string(&path).expect("json written");
    assert!(text.contains("\"body\": \"Mun\""));
}

#[test]
fn transfer_between_circular_orbits() {
    transfer_cmd()
        .args([
            "--body",
            "Kerbin",
            "--from",
            "apoapsis=700000",
            "--from",
            "periapsis=700000",
            "--to",
            "apoapsis=800000",
            "--to",
            "periapsis=800000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transfer Delta-V"));
}

#[test]
fn transfer_reports_degenerate_ellipse() {
    transfer_cmd()
        .args([
            "--body",
            "Kerbin",
            "--from",
            "sma=700000",
            "--from",
            "ecc=0",
            "--to",
            "periapsis=650000",
            "--to",
            "apoapsis=1500000",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[error] transfer"));
}
