//! Evaluation of a single candidate flight duration.

use log::{debug, warn};
use solar_core::constants::MU_SUN;
use solar_core::time::days_to_seconds;
use solar_core::vector;
use solar_ephem::{CelestialBody, Epoch, propagate};
use solar_impulsive::lambert_solve_with_budget;
use solar_orbits::{ParkingOrbit, maneuver_cost};
use solar_propulsion::{Vehicle, required_fuel};

use super::{CandidateOutcome, SkipReason, SolverDiagnostics, TransferCandidate};

/// Resolved, validated inputs shared by every candidate of one sweep.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Plan<'a> {
    pub origin: &'a CelestialBody,
    pub destination: &'a CelestialBody,
    pub origin_orbit: &'a ParkingOrbit,
    pub destination_orbit: &'a ParkingOrbit,
    pub vehicle: &'a Vehicle,
    pub payload_kg: f64,
    pub launch: Epoch,
    pub accept_unconverged: bool,
    pub lambert_max_iterations: usize,
}

pub(crate) fn evaluate(plan: &Plan<'_>, time_of_flight_days: u32) -> CandidateOutcome {
    match try_evaluate(plan, time_of_flight_days) {
        Ok(candidate) => {
            debug!(
                "tof {} d: dv {:.3} km/s (dep {:.3}, arr {:.3}), fuel {:.0} kg, feasible {}",
                time_of_flight_days,
                candidate.total_delta_v_km_s,
                candidate.maneuver.departure_km_s,
                candidate.maneuver.arrival_km_s,
                candidate.fuel_kg,
                candidate.feasible
            );
            CandidateOutcome::Evaluated(candidate)
        }
        Err(reason) => {
            warn!("tof {time_of_flight_days} d skipped: {reason}");
            CandidateOutcome::Skipped {
                time_of_flight_days,
                reason,
            }
        }
    }
}

fn try_evaluate(
    plan: &Plan<'_>,
    time_of_flight_days: u32,
) -> Result<TransferCandidate, SkipReason> {
    let tof_days = f64::from(time_of_flight_days);
    let arrival = plan.launch.add_days(tof_days)?;

    let departure_state = propagate(plan.origin, &plan.launch);
    let arrival_state = propagate(plan.destination, &arrival);
    let ephemeris_converged = departure_state.converged && arrival_state.converged;
    if !ephemeris_converged {
        warn!(
            "kepler solve for {} or {} did not converge at tof {} d; using best estimate",
            plan.origin.name, plan.destination.name, time_of_flight_days
        );
    }

    let transfer = lambert_solve_with_budget(
        departure_state.value.position_km,
        arrival_state.value.position_km,
        days_to_seconds(tof_days),
        MU_SUN,
        plan.lambert_max_iterations,
    )?;
    if !transfer.converged {
        if !plan.accept_unconverged {
            return Err(SkipReason::Unconverged {
                iterations: transfer.iterations,
                residual_s: transfer.residual,
            });
        }
        warn!(
            "lambert estimate for tof {} d kept unconverged ({:.1} s residual)",
            time_of_flight_days, transfer.residual
        );
    }

    let departure_vinf = vector::sub(
        &transfer.value.v1_km_s,
        &departure_state.value.velocity_km_s,
    );
    let arrival_vinf = vector::sub(
        &transfer.value.v2_km_s,
        &arrival_state.value.velocity_km_s,
    );
    let maneuver = maneuver_cost(
        &departure_vinf,
        &arrival_vinf,
        plan.origin_orbit,
        plan.destination_orbit,
    );
    let total_delta_v_km_s = maneuver.total();
    let fuel = required_fuel(total_delta_v_km_s, plan.vehicle, plan.payload_kg)?;

    Ok(TransferCandidate {
        launch: plan.launch,
        arrival,
        time_of_flight_days,
        departure_vinf_km_s: departure_vinf,
        arrival_vinf_km_s: arrival_vinf,
        maneuver,
        total_delta_v_km_s,
        fuel_kg: fuel.fuel_kg,
        feasible: fuel.feasible,
        diagnostics: SolverDiagnostics {
            lambert_iterations: transfer.iterations,
            lambert_residual_s: transfer.residual,
            lambert_converged: transfer.converged,
            ephemeris_converged,
        },
    })
}
