//! Analytic heliocentric ephemerides from J2000 mean orbital elements.
//!
//! Bodies are propagated on fixed two-body ellipses about the Sun; there are no
//! perturbations. States are expressed in the heliocentric ecliptic J2000 frame in
//! kilometres and km/s.

use thiserror::Error;

pub mod elements;
pub mod epoch;
pub mod kepler;
pub mod propagate;

pub use elements::{CelestialBody, OrbitalElements};
pub use epoch::Epoch;
pub use kepler::solve_kepler;
pub use propagate::propagate;
pub use solar_core::numeric::Estimate;

/// Heliocentric position and velocity of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
}

/// Errors surfaced while resolving bodies, epochs, or element sets.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("unknown body `{name}`")]
    UnknownBody { name: String },
    #[error("invalid date `{epoch}`")]
    InvalidEpoch { epoch: String },
    #[error("epoch offset of {days} days from {from} is out of range")]
    EpochOutOfRange { from: String, days: f64 },
    #[error("orbital elements for `{name}` are invalid: {reason}")]
    InvalidElements { name: String, reason: String },
}

/// Immutable body store queried by name.
#[derive(Debug, Clone, Default)]
pub struct Ephemeris {
    bodies: Vec<CelestialBody>,
}

impl Ephemeris {
    pub fn new(bodies: Vec<CelestialBody>) -> Self {
        Self { bodies }
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// Look a body up by name, ignoring case and surrounding whitespace.
    pub fn body(&self, name: &str) -> Result<&CelestialBody, EphemerisError> {
        let wanted = name.trim();
        self.bodies
            .iter()
            .find(|body| body.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EphemerisError::UnknownBody {
                name: name.to_string(),
            })
    }

    /// Heliocentric state of the named body at `epoch`.
    pub fn state_vector(
        &self,
        name: &str,
        epoch: &Epoch,
    ) -> Result<Estimate<StateVector>, EphemerisError> {
        Ok(propagate(self.body(name)?, epoch))
    }

    /// States of every catalogued body at one epoch, in catalog order.
    pub fn states_at(&self, epoch: &Epoch) -> Vec<(&CelestialBody, Estimate<StateVector>)> {
        self.bodies
            .iter()
            .map(|body| (body, propagate(body, epoch)))
            .collect()
    }
}
