//! Mission search: sweep candidate flight durations and pick the extremal feasible transfers.
//!
//! Every candidate runs the same pipeline: propagate both bodies, solve Lambert between the
//! two positions, price the escape and capture burns from the parking orbits, then size the
//! fuel. Candidates are independent, so the sweep fans out over rayon and merges with an
//! order-preserving collect.

pub(crate) mod candidate;
pub mod options;
mod search;

use std::collections::HashMap;

use solar_config::{BodyConfig, ConfigError, VehicleConfig};
use solar_core::constants::PARKING_ORBIT_PERIOD_S;
use solar_core::vector::Vector3;
use solar_ephem::{CelestialBody, Ephemeris, EphemerisError, Epoch};
use solar_impulsive::LambertError;
use solar_orbits::{ManeuverCost, ParkingOrbit};
use solar_propulsion::{PropulsionError, Vehicle};
use thiserror::Error;

use self::options::TofWindow;
use crate::facade::{body, vehicle::VehicleCatalog};

/// Top-level mission search error.
#[derive(Debug, Error)]
pub enum MissionError {
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("unknown vehicle `{0}`")]
    UnknownVehicle(String),
    #[error(transparent)]
    Propulsion(#[from] PropulsionError),
    #[error("invalid time-of-flight window {window}: {reason}")]
    InvalidWindow { window: TofWindow, reason: String },
    #[error("invalid payload of {payload_kg} kg: {reason}")]
    InvalidPayload { payload_kg: f64, reason: String },
    #[error(
        "no feasible trajectory: {evaluated} candidates evaluated, {skipped} skipped, none within the vehicle's fuel capacity"
    )]
    NoFeasibleTrajectory { evaluated: usize, skipped: usize },
    #[error("search cancelled before all candidates were evaluated")]
    Cancelled,
    #[error("catalog error: {0}")]
    Config(#[from] ConfigError),
}

/// Why a candidate duration produced no transfer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SkipReason {
    #[error("lambert: {0}")]
    Lambert(#[from] LambertError),
    #[error("lambert solver stopped after {iterations} iterations with a {residual_s:.1} s residual")]
    Unconverged { iterations: usize, residual_s: f64 },
    #[error("ephemeris: {0}")]
    Ephemeris(#[from] EphemerisError),
    #[error("fuel model: {0}")]
    Propulsion(#[from] PropulsionError),
}

/// One mission query. Names are resolved against the context's catalogs.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub vehicle: String,
    pub payload_kg: f64,
    pub launch: Epoch,
    pub window: TofWindow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverDiagnostics {
    pub lambert_iterations: usize,
    /// Remaining flight-time error of the Lambert estimate (s).
    pub lambert_residual_s: f64,
    pub lambert_converged: bool,
    /// Both Kepler solves behind the endpoint states converged.
    pub ephemeris_converged: bool,
}

/// A fully evaluated flight for one duration.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferCandidate {
    pub launch: Epoch,
    pub arrival: Epoch,
    pub time_of_flight_days: u32,
    /// Transfer velocity minus the origin's heliocentric velocity at launch.
    pub departure_vinf_km_s: Vector3,
    /// Transfer velocity minus the destination's heliocentric velocity at arrival.
    pub arrival_vinf_km_s: Vector3,
    pub maneuver: ManeuverCost,
    pub total_delta_v_km_s: f64,
    pub fuel_kg: f64,
    pub feasible: bool,
    pub diagnostics: SolverDiagnostics,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CandidateOutcome {
    Evaluated(TransferCandidate),
    Skipped {
        time_of_flight_days: u32,
        reason: SkipReason,
    },
}

impl CandidateOutcome {
    pub fn time_of_flight_days(&self) -> u32 {
        match self {
            Self::Evaluated(candidate) => candidate.time_of_flight_days,
            Self::Skipped {
                time_of_flight_days,
                ..
            } => *time_of_flight_days,
        }
    }

    pub fn candidate(&self) -> Option<&TransferCandidate> {
        match self {
            Self::Evaluated(candidate) => Some(candidate),
            Self::Skipped { .. } => None,
        }
    }
}

/// Every outcome of one sweep, in ascending time-of-flight order.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    pub request: SearchRequest,
    pub outcomes: Vec<CandidateOutcome>,
}

impl SweepReport {
    pub fn candidates(&self) -> impl Iterator<Item = &TransferCandidate> {
        self.outcomes.iter().filter_map(CandidateOutcome::candidate)
    }

    pub fn feasible(&self) -> impl Iterator<Item = &TransferCandidate> {
        self.candidates().filter(|candidate| candidate.feasible)
    }

    pub fn evaluated_count(&self) -> usize {
        self.candidates().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.evaluated_count()
    }
}

/// The minimum-fuel and minimum-duration feasible flights of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionResult {
    pub efficient: TransferCandidate,
    pub fastest: TransferCandidate,
    pub report: SweepReport,
}

impl MissionResult {
    /// Select the extrema, or explain why nothing qualified.
    pub fn from_report(report: SweepReport) -> Result<Self, MissionError> {
        let Some((efficient, fastest)) = search::select_extrema(&report)
            .map(|(efficient, fastest)| (efficient.clone(), fastest.clone()))
        else {
            return Err(MissionError::NoFeasibleTrajectory {
                evaluated: report.evaluated_count(),
                skipped: report.skipped_count(),
            });
        };
        Ok(Self {
            efficient,
            fastest,
            report,
        })
    }
}

/// Read-only catalogs and derived parking orbits, built once and shared by every search.
#[derive(Debug, Clone)]
pub struct MissionContext {
    ephemeris: Ephemeris,
    vehicles: VehicleCatalog,
    parking_orbits: HashMap<String, ParkingOrbit>,
}

impl MissionContext {
    pub fn new(bodies: Vec<CelestialBody>, vehicles: VehicleCatalog) -> Self {
        let parking_orbits = bodies
            .iter()
            .map(|body| {
                (
                    body.name.to_ascii_lowercase(),
                    ParkingOrbit::from_period(body.mu_km3_s2, PARKING_ORBIT_PERIOD_S),
                )
            })
            .collect();
        Self {
            ephemeris: Ephemeris::new(bodies),
            vehicles,
            parking_orbits,
        }
    }

    pub fn from_configs(
        bodies: &[BodyConfig],
        vehicles: &[VehicleConfig],
    ) -> Result<Self, MissionError> {
        for config in vehicles {
            config.validate()?;
        }
        let bodies = bodies
            .iter()
            .map(body::from_config)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(bodies, VehicleCatalog::from_configs(vehicles)))
    }

    /// Context over the built-in solar system and vehicle fleet.
    pub fn builtin() -> Result<Self, MissionError> {
        Self::from_configs(
            &solar_config::builtin_bodies(),
            &solar_config::builtin_vehicles(),
        )
    }

    pub fn ephemeris(&self) -> &Ephemeris {
        &self.ephemeris
    }

    pub fn vehicles(&self) -> &VehicleCatalog {
        &self.vehicles
    }

    pub fn vehicle(&self, name: &str) -> Result<&Vehicle, MissionError> {
        self.vehicles
            .find(name)
            .ok_or_else(|| MissionError::UnknownVehicle(name.to_string()))
    }

    /// The 12-hour parking orbit of the named body.
    pub fn parking_orbit(&self, body: &str) -> Result<&ParkingOrbit, MissionError> {
        let body = self.ephemeris.body(body)?;
        self.parking_orbits
            .get(&body.name.to_ascii_lowercase())
            .ok_or_else(|| {
                MissionError::Ephemeris(EphemerisError::UnknownBody {
                    name: body.name.clone(),
                })
            })
    }
}
