//! CSV dump of every candidate in a sweep, evaluated or skipped.

use std::io::Write;

use serde::Serialize;
use solar_transfer::{CandidateOutcome, SweepReport};

use crate::ExportError;

/// One CSV row. Skipped candidates leave the numeric columns empty and fill `skip_reason`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub tof_days: u32,
    pub launch: String,
    pub arrival: Option<String>,
    pub status: &'static str,
    pub feasible: bool,
    pub vinf_dep_x_km_s: Option<f64>,
    pub vinf_dep_y_km_s: Option<f64>,
    pub vinf_dep_z_km_s: Option<f64>,
    pub vinf_arr_x_km_s: Option<f64>,
    pub vinf_arr_y_km_s: Option<f64>,
    pub vinf_arr_z_km_s: Option<f64>,
    pub dv_dep_km_s: Option<f64>,
    pub dv_arr_km_s: Option<f64>,
    pub dv_total_km_s: Option<f64>,
    pub fuel_kg: Option<f64>,
    pub lambert_iterations: Option<usize>,
    pub lambert_residual_s: Option<f64>,
    pub lambert_converged: Option<bool>,
    pub skip_reason: Option<String>,
}

impl SweepRow {
    pub fn from_outcome(report: &SweepReport, outcome: &CandidateOutcome) -> Self {
        match outcome {
            CandidateOutcome::Evaluated(c) => Self {
                tof_days: c.time_of_flight_days,
                launch: c.launch.to_string(),
                arrival: Some(c.arrival.to_string()),
                status: "evaluated",
                feasible: c.feasible,
                vinf_dep_x_km_s: Some(c.departure_vinf_km_s[0]),
                vinf_dep_y_km_s: Some(c.departure_vinf_km_s[1]),
                vinf_dep_z_km_s: Some(c.departure_vinf_km_s[2]),
                vinf_arr_x_km_s: Some(c.arrival_vinf_km_s[0]),
                vinf_arr_y_km_s: Some(c.arrival_vinf_km_s[1]),
                vinf_arr_z_km_s: Some(c.arrival_vinf_km_s[2]),
                dv_dep_km_s: Some(c.maneuver.departure_km_s),
                dv_arr_km_s: Some(c.maneuver.arrival_km_s),
                dv_total_km_s: Some(c.total_delta_v_km_s),
                fuel_kg: Some(c.fuel_kg),
                lambert_iterations: Some(c.diagnostics.lambert_iterations),
                lambert_residual_s: Some(c.diagnostics.lambert_residual_s),
                lambert_converged: Some(c.diagnostics.lambert_converged),
                skip_reason: None,
            },
            CandidateOutcome::Skipped {
                time_of_flight_days,
                reason,
            } => Self {
                tof_days: *time_of_flight_days,
                launch: report.request.launch.to_string(),
                arrival: report
                    .request
                    .launch
                    .add_days(f64::from(*time_of_flight_days))
                    .ok()
                    .map(|epoch| epoch.to_string()),
                status: "skipped",
                feasible: false,
                vinf_dep_x_km_s: None,
                vinf_dep_y_km_s: None,
                vinf_dep_z_km_s: None,
                vinf_arr_x_km_s: None,
                vinf_arr_y_km_s: None,
                vinf_arr_z_km_s: None,
                dv_dep_km_s: None,
                dv_arr_km_s: None,
                dv_total_km_s: None,
                fuel_kg: None,
                lambert_iterations: None,
                lambert_residual_s: None,
                lambert_converged: None,
                skip_reason: Some(reason.to_string()),
            },
        }
    }
}

/// Write one header plus one row per outcome, in sweep order.
pub fn write_sweep_csv(report: &SweepReport, writer: impl Write) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    for outcome in &report.outcomes {
        csv.serialize(SweepRow::from_outcome(report, outcome))?;
    }
    csv.flush()?;
    Ok(())
}
