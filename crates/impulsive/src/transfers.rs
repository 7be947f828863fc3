//! Hohmann baseline between circular, coplanar heliocentric orbits.

use std::f64::consts::PI;

/// Burns and flight time of a Hohmann transfer between circular orbits of radii r1 and r2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HohmannEstimate {
    pub departure_dv_km_s: f64, // signed: negative for an inward (retrograde) burn
    pub arrival_dv_km_s: f64,
    pub total_dv_km_s: f64, // |departure| + |arrival|
    pub time_of_flight_s: f64,
}

impl HohmannEstimate {
    pub fn time_of_flight_days(&self) -> f64 {
        solar_core::time::seconds_to_days(self.time_of_flight_s)
    }
}

/// Half-ellipse transfer tangent to both circles.
///
/// Returns `None` unless both radii and `mu_km3_s2` are positive and finite.
pub fn hohmann(r1_km: f64, r2_km: f64, mu_km3_s2: f64) -> Option<HohmannEstimate> {
    let valid = |x: f64| x.is_finite() && x > 0.0;
    if !(valid(r1_km) && valid(r2_km) && valid(mu_km3_s2)) {
        return None;
    }

    let circular_1 = (mu_km3_s2 / r1_km).sqrt();
    let circular_2 = (mu_km3_s2 / r2_km).sqrt();
    let a_t = 0.5 * (r1_km + r2_km);

    let transfer_1 = (mu_km3_s2 * (2.0 / r1_km - 1.0 / a_t)).sqrt();
    let transfer_2 = (mu_km3_s2 * (2.0 / r2_km - 1.0 / a_t)).sqrt();

    let departure = transfer_1 - circular_1;
    let arrival = circular_2 - transfer_2;
    Some(HohmannEstimate {
        departure_dv_km_s: departure,
        arrival_dv_km_s: arrival,
        total_dv_km_s: departure.abs() + arrival.abs(),
        time_of_flight_s: PI * (a_t.powi(3) / mu_km3_s2).sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_radii_cost_nothing() {
        let estimate = hohmann(1.0e8, 1.0e8, 1.0e11).unwrap();
        assert_eq!(estimate.total_dv_km_s, 0.0);
    }

    #[test]
    fn inward_transfers_burn_retrograde() {
        let estimate = hohmann(2.0e8, 1.0e8, 1.0e11).unwrap();
        assert!(estimate.departure_dv_km_s < 0.0);
        assert!(estimate.arrival_dv_km_s < 0.0);
    }

    #[test]
    fn non_physical_inputs_are_rejected() {
        assert!(hohmann(0.0, 1.0e8, 1.0e11).is_none());
        assert!(hohmann(1.0e8, f64::NAN, 1.0e11).is_none());
    }
}
