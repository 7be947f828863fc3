//! Impulsive transfer solvers: the prograde Lambert problem and the Hohmann baseline.

pub mod lambert;
pub mod transfers;

pub use lambert::{
    LAMBERT_MAX_ITERATIONS, LambertError, LambertSolution, solve as lambert_solve,
    solve_with_budget as lambert_solve_with_budget,
};
pub use transfers::{HohmannEstimate, hohmann};
