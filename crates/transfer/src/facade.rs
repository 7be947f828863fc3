//! Re-exported APIs for consumers of the transfer crate.

pub use crate::mission::options::{CancelToken, SearchOptions, TofWindow};
pub use crate::mission::{
    CandidateOutcome, MissionContext, MissionError, MissionResult, SearchRequest, SkipReason,
    SolverDiagnostics, SweepReport, TransferCandidate,
};
pub use solar_propulsion::Vehicle;

pub mod vehicle {
    use solar_config::VehicleConfig;
    use solar_propulsion::Vehicle;

    /// Convert a `VehicleConfig` into the runtime `Vehicle` representation.
    pub fn from_config(config: &VehicleConfig) -> Vehicle {
        Vehicle {
            name: config.name.clone(),
            dry_mass_kg: config.dry_mass_kg,
            fuel_capacity_kg: config.fuel_capacity_kg,
            specific_impulse_km_s: config.specific_impulse_km_s,
            max_payload_kg: config.max_payload_kg,
            fuel_type: config.fuel_type.clone(),
        }
    }

    /// Lookup key: lower-case with spaces, underscores and hyphens removed.
    pub fn normalize_key(name: &str) -> String {
        name.chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect()
    }

    /// Immutable vehicle catalog with alias lookup.
    #[derive(Debug, Clone, Default)]
    pub struct VehicleCatalog {
        entries: Vec<(Vehicle, Vec<String>)>,
    }

    impl VehicleCatalog {
        pub fn from_configs(configs: &[VehicleConfig]) -> Self {
            let entries = configs
                .iter()
                .map(|cfg| {
                    let keys = std::iter::once(cfg.name.as_str())
                        .chain(cfg.aliases.iter().map(String::as_str))
                        .map(normalize_key)
                        .collect();
                    (from_config(cfg), keys)
                })
                .collect();
            Self { entries }
        }

        pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
            self.entries.iter().map(|(vehicle, _)| vehicle)
        }

        pub fn len(&self) -> usize {
            self.entries.len()
        }

        pub fn is_empty(&self) -> bool {
            self.entries.is_empty()
        }

        /// Exact name match (case-insensitive) first, then normalized name or alias.
        pub fn find(&self, requested: &str) -> Option<&Vehicle> {
            let trimmed = requested.trim();
            if let Some((vehicle, _)) = self
                .entries
                .iter()
                .find(|(vehicle, _)| vehicle.name.eq_ignore_ascii_case(trimmed))
            {
                return Some(vehicle);
            }
            let key = normalize_key(trimmed);
            self.entries
                .iter()
                .find(|(_, keys)| keys.iter().any(|k| *k == key))
                .map(|(vehicle, _)| vehicle)
        }
    }
}

pub mod body {
    use solar_config::BodyConfig;
    use solar_ephem::{CelestialBody, EphemerisError, OrbitalElements};

    /// Convert a `BodyConfig` into a validated `CelestialBody`.
    pub fn from_config(config: &BodyConfig) -> Result<CelestialBody, EphemerisError> {
        CelestialBody::new(
            config.name.clone(),
            OrbitalElements {
                semi_major_axis_au: config.semi_major_axis_au,
                eccentricity: config.eccentricity,
                inclination_deg: config.inclination_deg,
                mean_longitude_deg: config.mean_longitude_deg,
                longitude_of_perihelion_deg: config.longitude_of_perihelion_deg,
                longitude_of_ascending_node_deg: config.longitude_of_ascending_node_deg,
            },
            config.mu_km3_s2,
        )
    }
}
