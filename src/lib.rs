//! Solar Freight: interplanetary transfer planning over analytic ephemerides.
//!
//! The library re-exports the workspace crates so front-ends and tests depend on one crate,
//! and adds the catalog loading shared by them.

use std::path::Path;

use thiserror::Error;

pub use solar_config as config;
pub use solar_core as core;
pub use solar_ephem as ephemeris;
pub use solar_export as export;
pub use solar_impulsive as impulsive;
pub use solar_orbits as orbits;
pub use solar_propulsion as propulsion;
pub use solar_transfer as transfer;

use solar_config::ConfigError;
use solar_transfer::{MissionContext, MissionError};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Mission(#[from] MissionError),
}

/// Build a mission context from catalog files, falling back to the built-in tables.
pub fn load_context(
    bodies: Option<&Path>,
    vehicles: Option<&Path>,
) -> Result<MissionContext, CatalogError> {
    let bodies = match bodies {
        Some(path) => config::load_bodies(path)?,
        None => config::builtin_bodies(),
    };
    let vehicles = match vehicles {
        Some(path) => config::load_vehicle_configs(path)?,
        None => config::builtin_vehicles(),
    };
    Ok(MissionContext::from_configs(&bodies, &vehicles)?)
}
