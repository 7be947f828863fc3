//! Circular parking orbits and patched-conic escape/capture burns.
use solar_core::vector::{self, Vector3};

/// Circular orbit around a body, fixed by the body's μ and the orbital period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParkingOrbit {
    pub mu_km3_s2: f64,
    pub radius_km: f64,
    pub circular_velocity_km_s: f64,
}

impl ParkingOrbit {
    /// Radius from Kepler's third law, `R = (μ (T/2π)²)^(1/3)`.
    pub fn from_period(mu_km3_s2: f64, period_s: f64) -> Self {
        let mean_motion_inv = period_s / std::f64::consts::TAU;
        let radius_km = (mu_km3_s2 * mean_motion_inv * mean_motion_inv).cbrt();
        Self {
            mu_km3_s2,
            radius_km,
            circular_velocity_km_s: (mu_km3_s2 / radius_km).sqrt(),
        }
    }

    /// Burn between this orbit and a hyperbola with excess speed `vinf_km_s`.
    ///
    /// Escape and capture are symmetric, so the same magnitude serves both legs.
    pub fn leg_delta_v(&self, vinf_km_s: f64) -> f64 {
        let hyperbolic_speed =
            (vinf_km_s * vinf_km_s + 2.0 * self.mu_km3_s2 / self.radius_km).sqrt();
        (hyperbolic_speed - self.circular_velocity_km_s).abs()
    }
}

/// Departure and arrival burns of one transfer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManeuverCost {
    pub departure_km_s: f64,
    pub arrival_km_s: f64,
}

impl ManeuverCost {
    pub fn total(&self) -> f64 {
        self.departure_km_s + self.arrival_km_s
    }
}

/// Escape from `origin` with excess velocity `departure_vinf`, capture at `destination` with `arrival_vinf`.
pub fn maneuver_cost(
    departure_vinf: &Vector3,
    arrival_vinf: &Vector3,
    origin: &ParkingOrbit,
    destination: &ParkingOrbit,
) -> ManeuverCost {
    ManeuverCost {
        departure_km_s: origin.leg_delta_v(vector::norm(departure_vinf)),
        arrival_km_s: destination.leg_delta_v(vector::norm(arrival_vinf)),
    }
}
