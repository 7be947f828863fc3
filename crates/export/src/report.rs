//! The JSON mission report printed by the `mission` binary.

use serde::Serialize;
use solar_transfer::{MissionError, MissionResult, TransferCandidate};

use crate::ExportError;

/// How the total Δv is divided between the launch and arrival entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaVSplit {
    /// The escape and capture burns as computed.
    #[default]
    PerLeg,
    /// Half of the total on each leg.
    Even,
}

/// One flight as presented to the user. Numbers are pre-formatted at fixed precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightParameters {
    #[serde(rename = "Launch date")]
    pub launch_date: String,
    #[serde(rename = "Launch vector")]
    pub launch_vector: String,
    #[serde(rename = "Launch deltaV")]
    pub launch_delta_v: String,
    #[serde(rename = "Fuel")]
    pub fuel: String,
    #[serde(rename = "Arrival date")]
    pub arrival_date: String,
    #[serde(rename = "Arrival vector")]
    pub arrival_vector: String,
    #[serde(rename = "Arrival deltaV")]
    pub arrival_delta_v: String,
    #[serde(rename = "Time of flight")]
    pub time_of_flight: String,
}

impl FlightParameters {
    pub fn from_candidate(candidate: &TransferCandidate, split: DeltaVSplit) -> Self {
        let (launch_dv, arrival_dv) = match split {
            DeltaVSplit::PerLeg => (
                candidate.maneuver.departure_km_s,
                candidate.maneuver.arrival_km_s,
            ),
            DeltaVSplit::Even => {
                let half = candidate.total_delta_v_km_s / 2.0;
                (half, half)
            }
        };
        Self {
            launch_date: candidate.launch.format_compact(),
            launch_vector: format_vector(&candidate.departure_vinf_km_s),
            launch_delta_v: format!("{launch_dv:.3}"),
            fuel: format!("{:.0}", candidate.fuel_kg),
            arrival_date: candidate.arrival.format_compact(),
            arrival_vector: format_vector(&candidate.arrival_vinf_km_s),
            arrival_delta_v: format!("{arrival_dv:.3}"),
            time_of_flight: format!("{} days", candidate.time_of_flight_days),
        }
    }
}

/// Feasible reports carry both flights; infeasible ones carry the reason instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionReport {
    #[serde(rename = "Flight impossible")]
    pub flight_impossible: bool,
    #[serde(
        rename = "Efficient flight parameters",
        skip_serializing_if = "Option::is_none"
    )]
    pub efficient: Option<FlightParameters>,
    #[serde(
        rename = "Soonest arrival flight parameters",
        skip_serializing_if = "Option::is_none"
    )]
    pub soonest: Option<FlightParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl MissionReport {
    pub fn feasible(result: &MissionResult, split: DeltaVSplit) -> Self {
        Self {
            flight_impossible: false,
            efficient: Some(FlightParameters::from_candidate(&result.efficient, split)),
            soonest: Some(FlightParameters::from_candidate(&result.fastest, split)),
            reason: None,
        }
    }

    pub fn impossible(error: &MissionError) -> Self {
        Self {
            flight_impossible: true,
            efficient: None,
            soonest: None,
            reason: Some(error.to_string()),
        }
    }

    pub fn from_outcome(
        outcome: Result<&MissionResult, &MissionError>,
        split: DeltaVSplit,
    ) -> Self {
        match outcome {
            Ok(result) => Self::feasible(result, split),
            Err(error) => Self::impossible(error),
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `x,y,z` at three decimals.
pub fn format_vector(v: &[f64; 3]) -> String {
    format!("{:.3},{:.3},{:.3}", v[0], v[1], v[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_transfer::SolverDiagnostics;
    use solar_transfer::ephem::Epoch;
    use solar_transfer::orbits::ManeuverCost;

    fn candidate() -> TransferCandidate {
        let launch = Epoch::from_ymd(2026, 2, 1).unwrap();
        TransferCandidate {
            launch,
            arrival: launch.add_days(200.0).unwrap(),
            time_of_flight_days: 200,
            departure_vinf_km_s: [1.0, -2.5, 0.00049],
            arrival_vinf_km_s: [0.0, 3.0, -0.1],
            maneuver: ManeuverCost {
                departure_km_s: 1.5,
                arrival_km_s: 2.5,
            },
            total_delta_v_km_s: 4.0,
            fuel_kg: 312_722.4,
            feasible: true,
            diagnostics: SolverDiagnostics {
                lambert_iterations: 4,
                lambert_residual_s: 0.1,
                lambert_converged: true,
                ephemeris_converged: true,
            },
        }
    }

    #[test]
    fn flight_fields_use_fixed_precision() {
        let params = FlightParameters::from_candidate(&candidate(), DeltaVSplit::PerLeg);
        assert_eq!(params.launch_date, "010226");
        assert_eq!(params.arrival_date, "200826");
        assert_eq!(params.launch_vector, "1.000,-2.500,0.000");
        assert_eq!(params.launch_delta_v, "1.500");
        assert_eq!(params.arrival_delta_v, "2.500");
        assert_eq!(params.fuel, "312722");
        assert_eq!(params.time_of_flight, "200 days");
    }

    #[test]
    fn even_split_halves_the_total() {
        let params = FlightParameters::from_candidate(&candidate(), DeltaVSplit::Even);
        assert_eq!(params.launch_delta_v, "2.000");
        assert_eq!(params.arrival_delta_v, "2.000");
    }

    #[test]
    fn impossible_report_carries_the_reason() {
        let error = MissionError::NoFeasibleTrajectory {
            evaluated: 16,
            skipped: 0,
        };
        let json: serde_json::Value =
            serde_json::from_str(&MissionReport::impossible(&error).to_json().unwrap()).unwrap();
        assert_eq!(json["Flight impossible"], true);
        assert!(json["reason"].as_str().unwrap().contains("no feasible trajectory"));
        assert!(json.get("Efficient flight parameters").is_none());
    }
}
