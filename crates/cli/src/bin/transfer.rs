use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simple_orbit_calculator::common::format;
use simple_orbit_calculator::config::load_settings;
use simple_orbit_calculator::export::{TransferReport, write_json};
use simple_orbit_calculator::impulsive::{TransferError, hohmann_transfer};
use simple_orbit_calculator::orbits::ElementKind;
use soc_cli::{build_orbit, load_parent, parse_element, report_orbit_error};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Hohmann transfer delta-v between two orbits of one body"
)]
struct Cli {
    /// Parent body name (case-insensitive)
    #[arg(long)]
    body: String,

    /// First orbit element as KIND=VALUE, given twice
    #[arg(long = "from", value_parser = parse_element)]
    from: Vec<(ElementKind, String)>,

    /// Second orbit element as KIND=VALUE, given twice
    #[arg(long = "to", value_parser = parse_element)]
    to: Vec<(ElementKind, String)>,

    /// Body catalog (directory of TOML files or YAML list)
    #[arg(long, default_value = "configs/bodies")]
    catalog: PathBuf,

    /// Calculator settings file
    #[arg(long, default_value = "configs/settings.toml")]
    settings: PathBuf,

    /// Write a JSON report to this path (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let settings = load_settings(&cli.settings)?;
    let parent = load_parent(&cli.catalog, &cli.body)?;

    let from = match build_orbit(&parent, &settings, &cli.from, false) {
        Ok(orbit) => orbit,
        Err(err) => {
            report_orbit_error("orbit 1", &err);
            return Ok(ExitCode::FAILURE);
        }
    };
    let to = match build_orbit(&parent, &settings, &cli.to, false) {
        Ok(orbit) => orbit,
        Err(err) => {
            report_orbit_error("orbit 2", &err);
            return Ok(ExitCode::FAILURE);
        }
    };

    let result = match hohmann_transfer(&from, &to) {
        Ok(result) => result,
        Err(TransferError::Orbit(err)) => {
            report_orbit_error("transfer", &err);
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => {
            eprintln!("[error] {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let use_altitude = settings.use_altitude_for_apsides;
    println!("=== Hohmann Transfer ===");
    println!("Orbit 1          : {}", from.summary(use_altitude));
    println!("Orbit 2          : {}", to.summary(use_altitude));
    println!(
        "Transfer Delta-V : {} (burn 1 = {}, burn 2 = {})",
        format::speed(result.dv_total_m_s),
        format::speed(result.dv1_m_s),
        format::speed(result.dv2_m_s)
    );
    println!("Transfer Time    : {}", format::duration(result.tof_seconds));

    if let Some(path) = &cli.json {
        write_json(path, &TransferReport::new(&from, &to, &result, use_altitude))?;
    }

    Ok(ExitCode::SUCCESS)
}
