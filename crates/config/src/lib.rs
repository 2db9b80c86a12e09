//! Configuration models and loaders for the Simple Orbit Calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use soc_core::ParentBody;
use thiserror::Error;

/// Celestial body parsed from catalog manifests. All quantities are SI.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub gravitational_parameter_m3_s2: f64,
    pub radius_m: f64,
    pub soi_radius_m: f64,
    #[serde(default)]
    pub rotation_period_s: Option<f64>,
    #[serde(default)]
    pub parent: Option<String>,
}

impl BodyConfig {
    /// Runtime parent-body record for orbit construction.
    pub fn to_parent_body(&self) -> ParentBody {
        let body = ParentBody::new(
            self.name.clone(),
            self.gravitational_parameter_m3_s2,
            self.radius_m,
            self.soi_radius_m,
        );
        match self.rotation_period_s {
            Some(period) => body.with_rotation_period(period),
            None => body,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidBody {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if !(self.gravitational_parameter_m3_s2.is_finite()
            && self.gravitational_parameter_m3_s2 > 0.0)
        {
            return Err(invalid("gravitational parameter must be positive"));
        }
        if !(self.radius_m.is_finite() && self.radius_m > 0.0) {
            return Err(invalid("radius must be positive"));
        }
        // The root star has an unbounded sphere of influence.
        if self.soi_radius_m.is_nan() || self.soi_radius_m <= self.radius_m {
            return Err(invalid("sphere of influence must exceed the radius"));
        }
        if let Some(period) = self.rotation_period_s {
            if !(period.is_finite() && period > 0.0) {
                return Err(invalid("rotation period must be positive"));
            }
        }
        Ok(())
    }
}

/// Calculator options. Missing keys fall back to defaults.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Show and accept apsides as altitudes above the surface.
    pub use_altitude_for_apsides: bool,
    /// Reject orbits leaving the parent's sphere of influence.
    pub enforce_sphere_of_influence: bool,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            use_altitude_for_apsides: true,
            enforce_sphere_of_influence: false,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("body '{name}' is invalid: {reason}")]
    InvalidBody { name: String, reason: String },
    #[error("body '{0}' not found in catalog")]
    UnknownBody(String),
}

/// Load body records from a directory of TOML files, a single TOML file, or a
/// YAML list.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    let bodies: Vec<BodyConfig> = load_records(path)?;
    for body in &bodies {
        body.validate()?;
    }
    Ok(bodies)
}

/// Case-insensitive lookup by body name.
pub fn find_body<'a>(bodies: &'a [BodyConfig], name: &str) -> Result<&'a BodyConfig, ConfigError> {
    let upper = name.to_uppercase();
    bodies
        .iter()
        .find(|body| body.name.to_uppercase() == upper)
        .ok_or_else(|| ConfigError::UnknownBody(name.to_string()))
}

/// Load calculator settings from TOML. A missing file yields the defaults.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<CalculatorSettings, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(CalculatorSettings::default());
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
