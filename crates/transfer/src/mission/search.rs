use log::info;
use rayon::prelude::*;

use super::candidate::{self, Plan};
use super::options::SearchOptions;
use super::{
    CandidateOutcome, MissionContext, MissionError, MissionResult, SearchRequest, SweepReport,
    TransferCandidate,
};

impl MissionContext {
    /// Evaluate every duration in the request's window.
    ///
    /// Window, payload and catalog problems fail before any propagation. Individual candidates
    /// never fail the sweep; they come back as `CandidateOutcome::Skipped`.
    pub fn sweep(
        &self,
        request: &SearchRequest,
        options: &SearchOptions,
    ) -> Result<SweepReport, MissionError> {
        let plan = self.plan(request, options)?;
        let durations = request.window.durations();
        info!(
            "searching {} -> {} with {} ({} kg payload) from {}: {} candidates over {}..={} days",
            plan.origin.name,
            plan.destination.name,
            plan.vehicle.name,
            request.payload_kg,
            request.launch,
            durations.len(),
            request.window.min_days,
            request.window.max_days
        );

        let evaluate = |tof_days: u32| -> Result<CandidateOutcome, MissionError> {
            if options.should_stop() {
                return Err(MissionError::Cancelled);
            }
            Ok(candidate::evaluate(&plan, tof_days))
        };
        let outcomes = if options.parallel {
            durations
                .into_par_iter()
                .map(evaluate)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            durations
                .into_iter()
                .map(evaluate)
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(SweepReport {
            request: request.clone(),
            outcomes,
        })
    }

    /// Sweep, then pick the minimum-fuel and minimum-duration feasible flights.
    pub fn search(
        &self,
        request: &SearchRequest,
        options: &SearchOptions,
    ) -> Result<MissionResult, MissionError> {
        let result = MissionResult::from_report(self.sweep(request, options)?)?;
        info!(
            "efficient: {} d with {:.0} kg fuel; fastest: {} d with {:.0} kg fuel",
            result.efficient.time_of_flight_days,
            result.efficient.fuel_kg,
            result.fastest.time_of_flight_days,
            result.fastest.fuel_kg
        );
        Ok(result)
    }

    fn plan(
        &self,
        request: &SearchRequest,
        options: &SearchOptions,
    ) -> Result<Plan<'_>, MissionError> {
        request.window.validate()?;

        let origin = self.ephemeris().body(&request.origin)?;
        let destination = self.ephemeris().body(&request.destination)?;
        let vehicle = self.vehicle(&request.vehicle)?;
        vehicle.validate()?;

        let payload_kg = request.payload_kg;
        let payload_problem = if !(payload_kg.is_finite() && payload_kg >= 0.0) {
            Some("payload must be a non-negative mass".to_string())
        } else if payload_kg > vehicle.max_payload_kg {
            Some(format!(
                "{} carries at most {} kg",
                vehicle.name, vehicle.max_payload_kg
            ))
        } else {
            None
        };
        if let Some(reason) = payload_problem {
            return Err(MissionError::InvalidPayload { payload_kg, reason });
        }

        Ok(Plan {
            origin,
            destination,
            origin_orbit: self.parking_orbit(&origin.name)?,
            destination_orbit: self.parking_orbit(&destination.name)?,
            vehicle,
            payload_kg,
            launch: request.launch,
            accept_unconverged: options.accept_unconverged,
            lambert_max_iterations: options.lambert_max_iterations,
        })
    }
}

/// Minimum fuel (ties to the shorter flight) and minimum duration among feasible candidates.
pub(super) fn select_extrema(
    report: &SweepReport,
) -> Option<(&TransferCandidate, &TransferCandidate)> {
    let efficient = report.feasible().min_by(|a, b| {
        a.fuel_kg
            .total_cmp(&b.fuel_kg)
            .then(a.time_of_flight_days.cmp(&b.time_of_flight_days))
    })?;
    let fastest = report
        .feasible()
        .min_by_key(|candidate| candidate.time_of_flight_days)?;
    Some((efficient, fastest))
}
