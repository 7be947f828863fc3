mod common;

use common::{builtin_context, earth_mars_request};
use solar_freight::export::{DeltaVSplit, MissionReport, write_sweep_csv};
use solar_freight::transfer::{MissionResult, SearchOptions, TofWindow};

#[test]
fn feasible_report_lists_both_flights() {
    let context = builtin_context();
    let result = context
        .search(
            &earth_mars_request(TofWindow::new(100, 400, 20)),
            &SearchOptions::default(),
        )
        .unwrap();
    let report = MissionReport::from_outcome(Ok(&result), DeltaVSplit::PerLeg);
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["Flight impossible"], false);
    assert!(json.get("reason").is_none());

    let efficient = &json["Efficient flight parameters"];
    assert_eq!(efficient["Launch date"], "010226");
    assert_eq!(efficient["Arrival date"], "200826");
    assert_eq!(efficient["Time of flight"], "200 days");
    assert_eq!(efficient["Fuel"], "312722");
    assert_eq!(efficient["Launch vector"].as_str().unwrap().split(',').count(), 3);

    let soonest = &json["Soonest arrival flight parameters"];
    assert_eq!(soonest["Time of flight"], "180 days");
    assert_eq!(soonest["Fuel"], "391367");
}

#[test]
fn infeasible_searches_still_produce_a_report() {
    let context = builtin_context();
    let mut request = earth_mars_request(TofWindow::new(100, 400, 20));
    request.vehicle = "chevrolet".into();
    request.payload_kg = 0.0;
    let report = context.sweep(&request, &SearchOptions::default()).unwrap();
    let outcome = MissionResult::from_report(report);

    let json: serde_json::Value = serde_json::from_str(
        &MissionReport::from_outcome(outcome.as_ref(), DeltaVSplit::PerLeg)
            .to_json()
            .unwrap(),
    )
    .unwrap();
    assert_eq!(json["Flight impossible"], true);
    assert!(json.get("Efficient flight parameters").is_none());
    assert!(json["reason"].as_str().unwrap().contains("16 candidates evaluated"));
}

#[test]
fn sweep_csv_has_one_row_per_duration() {
    let context = builtin_context();
    let report = context
        .sweep(
            &earth_mars_request(TofWindow::default()),
            &SearchOptions::default(),
        )
        .unwrap();
    let mut buffer = Vec::new();
    write_sweep_csv(&report, &mut buffer).unwrap();

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let headers = reader.headers().unwrap().clone();
    let status = headers.iter().position(|h| h == "status").unwrap();
    let tof = headers.iter().position(|h| h == "tof_days").unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();

    assert_eq!(rows.len(), 31);
    assert_eq!(&rows[0][tof], "50");
    assert_eq!(&rows[30][tof], "500");
    // Fifty days is too short for any elliptic transfer to Mars.
    assert_eq!(&rows[0][status], "skipped");
    assert!(rows.iter().any(|row| &row[status] == "evaluated"));
}
