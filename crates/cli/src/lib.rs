//! Shared argument parsing and reporting for the calculator binaries.

use std::path::Path;
use std::sync::Arc;

use simple_orbit_calculator::config::{self, CalculatorSettings};
use simple_orbit_calculator::orbits::{
    ElementKind, Orbit, OrbitBuilder, OrbitError, ParentBody, ValidationPolicy,
};

/// Parse `kind=value`, e.g. `periapsis-altitude=70000`. The value is kept as text
/// so that number parsing errors surface from the orbit builder.
pub fn parse_element(arg: &str) -> Result<(ElementKind, String), String> {
    let (kind, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=VALUE, got '{arg}'"))?;
    let kind = match kind.trim().to_ascii_lowercase().as_str() {
        "sma" => ElementKind::SemiMajorAxis,
        "ecc" => ElementKind::Eccentricity,
        "period" => ElementKind::OrbitalPeriod,
        name => ElementKind::ALL
            .into_iter()
            .find(|kind| kind.to_string().replace(' ', "-") == name)
            .ok_or_else(|| format!("unknown orbital element '{name}'"))?,
    };
    Ok((kind, value.to_string()))
}

/// Look up `name` in the catalog at `catalog`.
pub fn load_parent(catalog: &Path, name: &str) -> anyhow::Result<Arc<ParentBody>> {
    let bodies = config::load_bodies(catalog)?;
    let body = config::find_body(&bodies, name)?;
    Ok(Arc::new(body.to_parent_body()))
}

/// Build one orbit from text elements against `parent`.
pub fn build_orbit(
    parent: &Arc<ParentBody>,
    settings: &CalculatorSettings,
    elements: &[(ElementKind, String)],
    synchronous: bool,
) -> Result<Orbit, OrbitError> {
    let mut builder = OrbitBuilder::new(Arc::clone(parent)).with_policy(ValidationPolicy {
        enforce_sphere_of_influence: settings.enforce_sphere_of_influence,
    });
    if synchronous {
        builder = builder.set_synchronous_period()?;
    }
    for (kind, text) in elements {
        builder = builder.set_text(*kind, text)?;
    }
    builder.build()
}

/// Print an orbit error: element errors verbatim, anything else generically with
/// the details on a separate line.
pub fn report_orbit_error(context: &str, err: &OrbitError) {
    match err {
        OrbitError::UnexpectedFailure(details) => {
            eprintln!("[error] {context}: something unusual happened");
            eprintln!("[debug] {details}");
        }
        other => eprintln!("[error] {context}: {other}"),
    }
}
