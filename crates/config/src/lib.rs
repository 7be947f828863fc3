//! Configuration models and loaders for the Solar Freight catalogs.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod builtin;

pub use builtin::{builtin_bodies, builtin_vehicles};

/// Heliocentric body entry: J2000 mean elements plus the body's own gravitational parameter.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub mean_longitude_deg: f64,
    pub longitude_of_perihelion_deg: f64,
    pub longitude_of_ascending_node_deg: f64,
    pub mu_km3_s2: f64,
}

/// Vehicle entry parsed from scenario catalogs.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VehicleConfig {
    pub name: String,
    pub dry_mass_kg: f64,
    pub fuel_capacity_kg: f64,
    /// Effective exhaust velocity (km/s).
    pub specific_impulse_km_s: f64,
    pub max_payload_kg: f64,
    #[serde(default)]
    pub fuel_type: Option<String>,
    /// Short lookup keys accepted in place of the full name (e.g. `moonivan`).
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("catalog entry `{name}` is invalid: {reason}")]
    Validation { name: String, reason: String },
}

impl BodyConfig {
    /// Reject element sets the elliptical propagator cannot handle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |reason: &str| {
            Err(ConfigError::Validation {
                name: self.name.clone(),
                reason: reason.to_string(),
            })
        };
        if !(0.0..1.0).contains(&self.eccentricity) {
            return fail("eccentricity must lie in [0, 1)");
        }
        if !(self.semi_major_axis_au > 0.0) {
            return fail("semi-major axis must be positive");
        }
        if !(self.mu_km3_s2 > 0.0) {
            return fail("gravitational parameter must be positive");
        }
        Ok(())
    }
}

impl VehicleConfig {
    /// Reject negative or non-finite mass properties.
    ///
    /// The specific impulse is not checked here; the fuel model reports it per request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let masses = [
            ("dry_mass_kg", self.dry_mass_kg),
            ("fuel_capacity_kg", self.fuel_capacity_kg),
            ("max_payload_kg", self.max_payload_kg),
        ];
        for (field, value) in masses {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Validation {
                    name: self.name.clone(),
                    reason: format!("{field} must be a non-negative number"),
                });
            }
        }
        Ok(())
    }
}

/// Load body configurations from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    let bodies: Vec<BodyConfig> = load_records(path)?;
    for body in &bodies {
        body.validate()?;
    }
    Ok(bodies)
}

/// Load vehicle configurations from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_vehicle_configs<P: AsRef<Path>>(path: P) -> Result<Vec<VehicleConfig>, ConfigError> {
    let vehicles: Vec<VehicleConfig> = load_records(path)?;
    for vehicle in &vehicles {
        vehicle.validate()?;
    }
    Ok(vehicles)
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
