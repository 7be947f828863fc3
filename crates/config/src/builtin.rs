//! Catalog shipped with the planner: J2000 mean elements for the major bodies and the
//! stock vehicle fleet.

use crate::{BodyConfig, VehicleConfig};

// name, a (AU), e, i, L, ϖ, Ω (deg), μ (km³/s²)
const BODIES: &[(&str, [f64; 6], f64)] = &[
    (
        "Mercury",
        [0.38709893, 0.20563069, 7.00487, 252.25084, 77.45645, 48.33167],
        22_032.0,
    ),
    (
        "Venus",
        [0.72333199, 0.00677323, 3.39471, 181.97973, 131.53298, 76.68069],
        324_859.0,
    ),
    (
        "Earth",
        [1.00000011, 0.01671022, 0.00005, 100.46435, 102.94719, 0.0],
        398_600.0,
    ),
    (
        "Mars",
        [1.52366231, 0.09341233, 1.85061, -4.55343, 336.04084, 49.57854],
        42_828.0,
    ),
    (
        "Jupiter",
        [5.20336301, 0.04839266, 1.30530, 34.40438, 14.75385, 100.55615],
        126_686_534.0,
    ),
    (
        "Saturn",
        [9.53707032, 0.05415060, 2.48446, 49.94432, 92.43194, 113.71504],
        37_931_187.0,
    ),
    (
        "Uranus",
        [19.19126393, 0.04716771, 0.76986, 313.23218, 170.96424, 74.22988],
        5_793_940.0,
    ),
    (
        "Neptune",
        [30.06896348, 0.00858587, 1.76917, 304.88003, 44.97135, 131.72169],
        6_836_529.0,
    ),
    (
        "Pluto",
        [39.48168677, 0.24880766, 17.14175, 238.92881, 224.06676, 110.30347],
        871.0,
    ),
    (
        "Ceres",
        [2.767, 0.0758, 10.59, 153.23, 73.06, 80.30],
        63.0,
    ),
];

/// Built-in body catalog, in heliocentric distance order (Ceres last).
pub fn builtin_bodies() -> Vec<BodyConfig> {
    BODIES
        .iter()
        .map(|(name, [a, e, i, l, lp, ln], mu)| BodyConfig {
            name: name.to_string(),
            semi_major_axis_au: *a,
            eccentricity: *e,
            inclination_deg: *i,
            mean_longitude_deg: *l,
            longitude_of_perihelion_deg: *lp,
            longitude_of_ascending_node_deg: *ln,
            mu_km3_s2: *mu,
        })
        .collect()
}

struct StockVehicle {
    name: &'static str,
    alias: &'static str,
    dry_mass_kg: f64,
    fuel_capacity_kg: f64,
    specific_impulse_km_s: f64,
    max_payload_kg: f64,
    fuel_type: &'static str,
}

const VEHICLES: &[StockVehicle] = &[
    StockVehicle {
        name: "Chevrolet Super Sonic",
        alias: "chevrolet",
        dry_mass_kg: 5_000.0,
        fuel_capacity_kg: 20_000.0,
        specific_impulse_km_s: 4.2,
        max_payload_kg: 1_000.0,
        fuel_type: "Leaded gasoline",
    },
    StockVehicle {
        name: "The Planet Hopper",
        alias: "hopper",
        dry_mass_kg: 10_000.0,
        fuel_capacity_kg: 100_000.0,
        specific_impulse_km_s: 6.7,
        max_payload_kg: 4_000.0,
        fuel_type: "Compressed air",
    },
    StockVehicle {
        name: "Moonivan",
        alias: "moonivan",
        dry_mass_kg: 25_000.0,
        fuel_capacity_kg: 400_000.0,
        specific_impulse_km_s: 9.1,
        max_payload_kg: 10_000.0,
        fuel_type: "Biofuel",
    },
    StockVehicle {
        name: "Blue Origin Delivery Ship",
        alias: "blueorigin",
        dry_mass_kg: 69_000.0,
        fuel_capacity_kg: 800_000.0,
        specific_impulse_km_s: 15.2,
        max_payload_kg: 50_000.0,
        fuel_type: "Whale oil",
    },
    StockVehicle {
        name: "Yamaha Space Cycle",
        alias: "yamaha",
        dry_mass_kg: 1_000.0,
        fuel_capacity_kg: 2_500.0,
        specific_impulse_km_s: 100.0,
        max_payload_kg: 100.0,
        fuel_type: "Antimatter",
    },
    StockVehicle {
        name: "Ford F-1500",
        alias: "ford",
        dry_mass_kg: 10_000.0,
        fuel_capacity_kg: 100_000.0,
        specific_impulse_km_s: 18.67,
        max_payload_kg: 8_000.0,
        fuel_type: "Space Diesel",
    },
    StockVehicle {
        name: "Beheamoth",
        alias: "beheamoth",
        dry_mass_kg: 100_000.0,
        fuel_capacity_kg: 1_500_000.0,
        specific_impulse_km_s: 11.1,
        max_payload_kg: 100_000.0,
        fuel_type: "Nuclear propulsion",
    },
];

/// Built-in vehicle fleet.
pub fn builtin_vehicles() -> Vec<VehicleConfig> {
    VEHICLES
        .iter()
        .map(|v| VehicleConfig {
            name: v.name.to_string(),
            dry_mass_kg: v.dry_mass_kg,
            fuel_capacity_kg: v.fuel_capacity_kg,
            specific_impulse_km_s: v.specific_impulse_km_s,
            max_payload_kg: v.max_payload_kg,
            fuel_type: Some(v.fuel_type.to_string()),
            aliases: vec![v.alias.to_string()],
        })
        .collect()
}
