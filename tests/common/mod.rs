//! Shared helpers for the integration tests.

#![allow(dead_code)]

pub mod kepler;

use solar_freight::transfer::{MissionContext, SearchRequest, TofWindow};
use solar_freight::ephemeris::Epoch;

pub fn builtin_context() -> MissionContext {
    MissionContext::builtin().expect("built-in catalogs are valid")
}

/// Earth to Mars aboard the Moonivan with 5 t of payload, launching 2026-02-01.
pub fn earth_mars_request(window: TofWindow) -> SearchRequest {
    SearchRequest {
        origin: "Earth".into(),
        destination: "Mars".into(),
        vehicle: "Moonivan".into(),
        payload_kg: 5_000.0,
        launch: Epoch::from_ymd(2026, 2, 1).expect("valid date"),
        window,
    }
}
