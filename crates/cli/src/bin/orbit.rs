use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simple_orbit_calculator::config::load_settings;
use simple_orbit_calculator::export::{OrbitReport, write_json};
use simple_orbit_calculator::orbits::ElementKind;
use soc_cli::{build_orbit, load_parent, parse_element, report_orbit_error};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Derive a complete orbit from two orbital elements"
)]
struct Cli {
    /// Parent body name (case-insensitive)
    #[arg(long)]
    body: String,

    /// Known element as KIND=VALUE, given twice (metres, seconds).
    /// Kinds: semi-major-axis, eccentricity, apoapsis, periapsis, orbital-period,
    /// apoapsis-altitude, periapsis-altitude
    #[arg(long = "element", short = 'e', value_parser = parse_element)]
    elements: Vec<(ElementKind, String)>,

    /// Use the body's rotation period as the orbital period
    #[arg(long, default_value_t = false)]
    synchronous: bool,

    /// Body catalog (directory of TOML files or YAML list)
    #[arg(long, default_value = "configs/bodies")]
    catalog: PathBuf,

    /// Calculator settings file
    #[arg(long, default_value = "configs/settings.toml")]
    settings: PathBuf,

    /// Show apsides as radii from the body's centre instead of altitudes
    #[arg(long, default_value_t = false)]
    radii: bool,

    /// Write a JSON report to this path (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let settings = load_settings(&cli.settings)?;
    let parent = load_parent(&cli.catalog, &cli.body)?;

    let orbit = match build_orbit(&parent, &settings, &cli.elements, cli.synchronous) {
        Ok(orbit) => orbit,
        Err(err) => {
            report_orbit_error("orbit", &err);
            return Ok(ExitCode::FAILURE);
        }
    };

    let use_altitude = settings.use_altitude_for_apsides && !cli.radii;
    let report = OrbitReport::new(&orbit, use_altitude);

    println!("=== Orbit ===");
    println!("{}", report.summary);
    for (label, value) in report.lines() {
        println!("{label:<17}: {value}");
    }
    if orbit.is_inside_parent() {
        eprintln!("[warn] periapsis lies below the surface of {}", parent.name);
    }

    if let Some(path) = &cli.json {
        write_json(path, &report)?;
    }

    Ok(ExitCode::SUCCESS)
}
