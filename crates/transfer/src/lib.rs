//! Mission planning over analytic ephemerides: candidate sweeps, extrema selection, and the
//! catalog context they run against.

pub mod mission;

pub use facade::*;
pub use solar_ephem as ephem;
pub use solar_impulsive as impulsive;
pub use solar_orbits as orbits;
pub use solar_propulsion as propulsion;

mod facade;
