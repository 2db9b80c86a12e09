//! Export helpers for JSON orbit and transfer reports.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::to_writer_pretty;
use soc_core::format;
use soc_impulsive::HohmannResult;
use soc_orbits::Orbit;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Pretty-print `value` as JSON to `path` (or stdout for `-`).
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let mut writer = writer_for_path(path)?;
    to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()
}

/// Flat, serializable snapshot of an [`Orbit`].
#[derive(Debug, Clone, Serialize)]
pub struct OrbitReport {
    pub body: String,
    pub summary: String,
    pub semi_major_axis_m: f64,
    pub eccentricity: f64,
    pub semi_minor_axis_m: f64,
    pub semi_latus_rectum_m: f64,
    /// Absent for circular orbits, where it is unbounded.
    pub focal_parameter_m: Option<f64>,
    pub linear_eccentricity_m: f64,
    pub apoapsis_m: f64,
    pub periapsis_m: f64,
    pub apoapsis_altitude_m: f64,
    pub periapsis_altitude_m: f64,
    pub orbital_period_s: f64,
    pub apoapsis_speed_m_s: f64,
    pub periapsis_speed_m_s: f64,
    pub mean_orbital_speed_m_s: f64,
    pub specific_orbital_energy_j_kg: f64,
    pub specific_angular_momentum_m2_s: f64,
    pub mean_darkness_time_s: f64,
    pub max_darkness_time_s: f64,
}

impl OrbitReport {
    pub fn new(orbit: &Orbit, use_altitude_for_apsides: bool) -> Self {
        let focal = orbit.focal_parameter();
        Self {
            body: orbit.parent().name.clone(),
            summary: orbit.summary(use_altitude_for_apsides),
            semi_major_axis_m: orbit.semi_major_axis(),
            eccentricity: orbit.eccentricity(),
            semi_minor_axis_m: orbit.semi_minor_axis(),
            semi_latus_rectum_m: orbit.semi_latus_rectum(),
            focal_parameter_m: focal.is_finite().then_some(focal),
            linear_eccentricity_m: orbit.linear_eccentricity(),
            apoapsis_m: orbit.apoapsis(),
            periapsis_m: orbit.periapsis(),
            apoapsis_altitude_m: orbit.apoapsis_altitude(),
            periapsis_altitude_m: orbit.periapsis_altitude(),
            orbital_period_s: orbit.orbital_period(),
            apoapsis_speed_m_s: orbit.apoapsis_speed(),
            periapsis_speed_m_s: orbit.periapsis_speed(),
            mean_orbital_speed_m_s: orbit.mean_orbital_speed(),
            specific_orbital_energy_j_kg: orbit.specific_orbital_energy(),
            specific_angular_momentum_m2_s: orbit.specific_angular_momentum(),
            mean_darkness_time_s: orbit.mean_darkness_time(),
            max_darkness_time_s: orbit.max_darkness_time(),
        }
    }

    /// Human-readable `label: value` lines, in display units.
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Periapsis Alt.", format::distance(self.periapsis_altitude_m)),
            ("Periapsis", format::distance(self.periapsis_m)),
            ("Periapsis Speed", format::speed(self.periapsis_speed_m_s)),
            ("Apoapsis Alt.", format::distance(self.apoapsis_altitude_m)),
            ("Apoapsis", format::distance(self.apoapsis_m)),
            ("Apoapsis Speed", format::speed(self.apoapsis_speed_m_s)),
            ("S.Major Axis", format::distance(self.semi_major_axis_m)),
            ("Eccentricity", format::plain(self.eccentricity)),
            ("Period", format::duration(self.orbital_period_s)),
            ("Mean Orbit Speed", format::speed(self.mean_orbital_speed_m_s)),
            (
                "Specific Energy",
                format::specific_energy(self.specific_orbital_energy_j_kg),
            ),
            ("Mean Darkness", format::duration(self.mean_darkness_time_s)),
            ("Max. Darkness", format::duration(self.max_darkness_time_s)),
        ]
    }
}

/// Serializable transfer between two saved orbits.
#[derive(Debug, Clone, Serialize)]
pub struct TransferReport {
    pub from: OrbitReport,
    pub to: OrbitReport,
    pub dv1_m_s: f64,
    pub dv2_m_s: f64,
    pub dv_total_m_s: f64,
    pub tof_seconds: f64,
}

impl TransferReport {
    pub fn new(
        from: &Orbit,
        to: &Orbit,
        result: &HohmannResult,
        use_altitude_for_apsides: bool,
    ) -> Self {
        Self {
            from: OrbitReport::new(from, use_altitude_for_apsides),
            to: OrbitReport::new(to, use_altitude_for_apsides),
            dv1_m_s: result.dv1_m_s,
            dv2_m_s: result.dv2_m_s,
            dv_total_m_s: result.dv_total_m_s,
            tof_seconds: result.tof_seconds,
        }
    }
}
