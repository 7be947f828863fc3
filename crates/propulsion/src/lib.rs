//! Vehicle mass properties and the rocket-equation fuel model.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PropulsionError {
    #[error("vehicle '{vehicle}' has non-positive specific impulse {isp_km_s} km/s")]
    InvalidSpecificImpulse { vehicle: String, isp_km_s: f64 },
}

/// Single-stage vehicle. Immutable once loaded into a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub name: String,
    pub dry_mass_kg: f64,
    pub fuel_capacity_kg: f64,
    /// Effective exhaust velocity (km/s).
    pub specific_impulse_km_s: f64,
    pub max_payload_kg: f64,
    pub fuel_type: Option<String>,
}

impl Vehicle {
    /// Dry mass plus a full tank.
    pub fn wet_mass_kg(&self) -> f64 {
        self.dry_mass_kg + self.fuel_capacity_kg
    }

    /// The fuel model needs a positive exhaust velocity.
    pub fn validate(&self) -> Result<(), PropulsionError> {
        if self.specific_impulse_km_s > 0.0 {
            Ok(())
        } else {
            Err(PropulsionError::InvalidSpecificImpulse {
                vehicle: self.name.clone(),
                isp_km_s: self.specific_impulse_km_s,
            })
        }
    }
}

/// Fuel needed for a burn and whether the tank holds it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelEstimate {
    pub fuel_kg: f64,
    pub feasible: bool,
}

/// Fuel to impart `delta_v_km_s` to the vehicle carrying `payload_kg`.
///
/// Tsiolkovsky with the final mass `m_f = dry + payload`: the fuel is
/// `m_f · (exp(Δv / Isp) − 1)`. Overflowing exponents yield an infinite, infeasible estimate.
pub fn required_fuel(
    delta_v_km_s: f64,
    vehicle: &Vehicle,
    payload_kg: f64,
) -> Result<FuelEstimate, PropulsionError> {
    vehicle.validate()?;
    let final_mass = vehicle.dry_mass_kg + payload_kg;
    let fuel_kg = final_mass * (delta_v_km_s / vehicle.specific_impulse_km_s).exp_m1();
    Ok(FuelEstimate {
        fuel_kg,
        feasible: fuel_kg <= vehicle.fuel_capacity_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn moonivan() -> Vehicle {
        Vehicle {
            name: "Moonivan".into(),
            dry_mass_kg: 25_000.0,
            fuel_capacity_kg: 400_000.0,
            specific_impulse_km_s: 9.1,
            max_payload_kg: 10_000.0,
            fuel_type: Some("Biofuel".into()),
        }
    }

    #[test]
    fn no_burn_needs_no_fuel() {
        let estimate = required_fuel(0.0, &moonivan(), 5_000.0).unwrap();
        assert_eq!(estimate.fuel_kg, 0.0);
        assert!(estimate.feasible);
    }

    #[test]
    fn one_exhaust_velocity_costs_e_minus_one_final_masses() {
        let estimate = required_fuel(9.1, &moonivan(), 5_000.0).unwrap();
        let expected = 30_000.0 * (std::f64::consts::E - 1.0);
        assert_relative_eq!(estimate.fuel_kg, expected, max_relative = 1e-12);
        assert!(estimate.feasible);
    }

    #[test]
    fn over_capacity_is_infeasible() {
        let estimate = required_fuel(40.0, &moonivan(), 5_000.0).unwrap();
        assert!(estimate.fuel_kg > 400_000.0);
        assert!(!estimate.feasible);

        let overflow = required_fuel(1.0e6, &moonivan(), 0.0).unwrap();
        assert!(overflow.fuel_kg.is_infinite());
        assert!(!overflow.feasible);
    }

    #[test]
    fn fuel_grows_with_delta_v_and_payload() {
        let vehicle = moonivan();
        let low = required_fuel(5.0, &vehicle, 1_000.0).unwrap().fuel_kg;
        assert!(required_fuel(6.0, &vehicle, 1_000.0).unwrap().fuel_kg > low);
        assert!(required_fuel(5.0, &vehicle, 2_000.0).unwrap().fuel_kg > low);
    }

    #[test]
    fn non_positive_isp_is_rejected() {
        let mut vehicle = moonivan();
        vehicle.specific_impulse_km_s = 0.0;
        assert_eq!(
            required_fuel(1.0, &vehicle, 0.0),
            Err(PropulsionError::InvalidSpecificImpulse {
                vehicle: "Moonivan".into(),
                isp_km_s: 0.0
            })
        );
    }
}
