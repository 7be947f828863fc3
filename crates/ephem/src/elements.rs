//! Keplerian element sets for heliocentric bodies.

use crate::EphemerisError;

/// J2000 mean elements in the units of the published tables (AU and degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    /// Mean longitude L at the reference epoch.
    pub mean_longitude_deg: f64,
    /// Longitude of perihelion ϖ = Ω + ω.
    pub longitude_of_perihelion_deg: f64,
    /// Longitude of the ascending node Ω.
    pub longitude_of_ascending_node_deg: f64,
}

impl OrbitalElements {
    /// Argument of perihelion ω = ϖ − Ω.
    pub fn argument_of_perihelion_deg(&self) -> f64 {
        self.longitude_of_perihelion_deg - self.longitude_of_ascending_node_deg
    }

    /// Mean anomaly at the reference epoch, M₀ = L − ϖ.
    pub fn mean_anomaly_at_epoch_deg(&self) -> f64 {
        self.mean_longitude_deg - self.longitude_of_perihelion_deg
    }
}

/// A named body on a fixed heliocentric ellipse. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    pub elements: OrbitalElements,
    /// The body's own gravitational parameter (km³/s²), used for parking orbits.
    pub mu_km3_s2: f64,
}

impl CelestialBody {
    /// Build a body, enforcing the elliptical-orbit invariant `0 ≤ e < 1`.
    pub fn new(
        name: impl Into<String>,
        elements: OrbitalElements,
        mu_km3_s2: f64,
    ) -> Result<Self, EphemerisError> {
        let name = name.into();
        let reason = if !(0.0..1.0).contains(&elements.eccentricity) {
            Some("eccentricity must lie in [0, 1)")
        } else if !(elements.semi_major_axis_au > 0.0) {
            Some("semi-major axis must be positive")
        } else if !(mu_km3_s2 > 0.0) {
            Some("gravitational parameter must be positive")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(EphemerisError::InvalidElements {
                name,
                reason: reason.to_string(),
            });
        }
        Ok(Self {
            name,
            elements,
            mu_km3_s2,
        })
    }
}
