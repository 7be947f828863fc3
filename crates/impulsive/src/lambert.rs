//! Single-revolution Lambert solver on the Lagrange time equation.
//!
//! For chord `c` and semi-perimeter `s`, the flight time on a conic of semi-major axis `a` is
//!
//! ```text
//! t(a) = sqrt(a³/μ) · [(α − sin α) − (β − sin β)]
//! sin(α/2) = sqrt(s / 2a),  sin(β/2) = sqrt((s − c) / 2a)
//! ```
//!
//! The solver iterates on `x` with `a = (s/2)(1 + x²)` and `α/2 = atan2(1, x)`. Positive `x`
//! covers the principal α branch, negative `x` the `2π − α` branch, and `x = 0` is the
//! minimum-energy ellipse. `t(x)` falls monotonically across the whole line and stays smooth
//! through `x = 0`, where `dt/da` is singular. `β` is negated when the prograde transfer angle
//! exceeds π. Transfers are always prograde about the +z axis (the ecliptic normal).

use solar_core::numeric::Estimate;
use solar_core::vector::{self, Vector3};
use std::f64::consts::{PI, TAU};
use thiserror::Error;

pub const LAMBERT_MAX_ITERATIONS: usize = 30;
/// Accept `a` once the implied flight time is within this many seconds of the target.
pub const LAMBERT_TOLERANCE_S: f64 = 1.0;
/// Transfer angles this close to 0, π or 2π leave the transfer plane undefined.
const DEGENERATE_ANGLE_RAD: f64 = 1e-6;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LambertError {
    #[error("time of flight must be positive (got {0} s)")]
    InvalidTimeOfFlight(f64),
    #[error("position vectors must be non-zero and finite")]
    InvalidPosition,
    #[error("transfer angle {angle_rad:.3e} rad is degenerate (plane undefined)")]
    DegenerateGeometry { angle_rad: f64 },
    #[error("time of flight {tof_s:.0} s is below the parabolic limit {parabolic_s:.0} s")]
    HyperbolicTransfer { tof_s: f64, parabolic_s: f64 },
}

/// Endpoint velocities of the transfer conic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertSolution {
    pub v1_km_s: Vector3,
    pub v2_km_s: Vector3,
    pub semi_major_axis_km: f64,
    /// Prograde transfer angle in `(0, 2π)`.
    pub transfer_angle_rad: f64,
}

/// Solve for the velocities at `r1_km` and `r2_km` on the prograde conic with the given flight time.
///
/// Geometry that cannot be solved at all is an error. Hitting the iteration budget is not:
/// the best estimate comes back with `converged == false` and `residual` holding the
/// remaining flight-time error in seconds.
pub fn solve(
    r1_km: Vector3,
    r2_km: Vector3,
    time_of_flight_s: f64,
    mu_km3_s2: f64,
) -> Result<Estimate<LambertSolution>, LambertError> {
    solve_with_budget(
        r1_km,
        r2_km,
        time_of_flight_s,
        mu_km3_s2,
        LAMBERT_MAX_ITERATIONS,
    )
}

/// [`solve`] with an explicit iteration budget.
pub fn solve_with_budget(
    r1_km: Vector3,
    r2_km: Vector3,
    time_of_flight_s: f64,
    mu_km3_s2: f64,
    max_iterations: usize,
) -> Result<Estimate<LambertSolution>, LambertError> {
    if !(time_of_flight_s.is_finite() && time_of_flight_s > 0.0) {
        return Err(LambertError::InvalidTimeOfFlight(time_of_flight_s));
    }
    let geometry = Geometry::new(&r1_km, &r2_km)?;

    let parabolic_s = geometry.parabolic_time(mu_km3_s2);
    if time_of_flight_s <= parabolic_s {
        return Err(LambertError::HyperbolicTransfer {
            tof_s: time_of_flight_s,
            parabolic_s,
        });
    }

    let mut x = 0.0;
    let mut lower_bound = f64::NEG_INFINITY;
    let mut upper_bound = f64::INFINITY;
    let mut iterations = 0;
    let mut converged = false;

    for iteration in 1..=max_iterations {
        iterations = iteration;
        let point = geometry.evaluate(x, mu_km3_s2);
        let error = point.time_s - time_of_flight_s;
        if error.abs() < LAMBERT_TOLERANCE_S {
            converged = true;
            break;
        }

        if error > 0.0 {
            lower_bound = x;
        } else {
            upper_bound = x;
        }

        let mut next = x - error / point.time_derivative;
        if !(next.is_finite() && next > lower_bound && next < upper_bound) {
            next = match (lower_bound.is_finite(), upper_bound.is_finite()) {
                (true, true) => 0.5 * (lower_bound + upper_bound),
                (true, false) => lower_bound + 1.0 + lower_bound.abs(),
                _ => upper_bound - 1.0 - upper_bound.abs(),
            };
        }
        x = next;
    }

    let point = geometry.evaluate(x, mu_km3_s2);
    let residual = (point.time_s - time_of_flight_s).abs();
    let (v1_km_s, v2_km_s) = geometry.velocities(&r1_km, &r2_km, &point, mu_km3_s2);

    Ok(Estimate {
        value: LambertSolution {
            v1_km_s,
            v2_km_s,
            semi_major_axis_km: point.semi_major_axis,
            transfer_angle_rad: geometry.transfer_angle,
        },
        iterations,
        residual,
        converged,
    })
}

struct Geometry {
    r1: f64,
    r2: f64,
    chord: f64,
    semi_perimeter: f64,
    transfer_angle: f64,
    /// Prograde angle beyond π; flips the sign of β.
    long_way: bool,
}

/// The time equation and its slope at one value of the iteration variable.
struct Point {
    semi_major_axis: f64,
    alpha: f64,
    beta: f64,
    time_s: f64,
    time_derivative: f64,
}

impl Geometry {
    fn new(r1_km: &Vector3, r2_km: &Vector3) -> Result<Self, LambertError> {
        let r1 = vector::norm(r1_km);
        let r2 = vector::norm(r2_km);
        if !(r1.is_finite() && r2.is_finite() && r1 > 0.0 && r2 > 0.0) {
            return Err(LambertError::InvalidPosition);
        }

        let cos_angle = (vector::dot(r1_km, r2_km) / (r1 * r2)).clamp(-1.0, 1.0);
        let short_angle = cos_angle.acos();
        let long_way = vector::cross(r1_km, r2_km)[2] < 0.0;
        let transfer_angle = if long_way {
            TAU - short_angle
        } else {
            short_angle
        };
        if short_angle < DEGENERATE_ANGLE_RAD || PI - short_angle < DEGENERATE_ANGLE_RAD {
            return Err(LambertError::DegenerateGeometry {
                angle_rad: transfer_angle,
            });
        }

        let chord = vector::norm(&vector::sub(r2_km, r1_km));
        Ok(Self {
            r1,
            r2,
            chord,
            semi_perimeter: 0.5 * (r1 + r2 + chord),
            transfer_angle,
            long_way,
        })
    }

    fn beta_sign(&self) -> f64 {
        if self.long_way { -1.0 } else { 1.0 }
    }

    /// Flight time of the parabola through both points; elliptic transfers take longer.
    fn parabolic_time(&self, mu: f64) -> f64 {
        let s = self.semi_perimeter;
        (2.0_f64.sqrt() / (3.0 * mu.sqrt()))
            * (s.powf(1.5) - self.beta_sign() * (s - self.chord).powf(1.5))
    }

    fn evaluate(&self, x: f64, mu: f64) -> Point {
        let a_min = 0.5 * self.semi_perimeter;
        let w = 1.0 + x * x;
        let a = a_min * w;
        // sin(β/2) at the minimum-energy ellipse; always below one for a non-zero chord.
        let q = ((self.semi_perimeter - self.chord) / self.semi_perimeter).sqrt();

        let alpha = 2.0 * 1.0_f64.atan2(x);
        let half_beta = (q / w.sqrt()).asin();
        let beta = self.beta_sign() * 2.0 * half_beta;

        let scale = (a.powi(3) / mu).sqrt();
        let shape = (alpha - alpha.sin()) - (beta - beta.sin());

        let d_alpha = -2.0 / w;
        let d_beta = self.beta_sign() * -2.0 * q * x / (w.powf(1.5) * half_beta.cos());
        let d_scale = 3.0 * scale * x / w;
        let d_shape = (1.0 - alpha.cos()) * d_alpha - (1.0 - beta.cos()) * d_beta;

        Point {
            semi_major_axis: a,
            alpha,
            beta,
            time_s: scale * shape,
            time_derivative: d_scale * shape + scale * d_shape,
        }
    }

    /// Semi-latus rectum of the transfer conic.
    fn semi_latus_rectum(&self, point: &Point) -> f64 {
        let half_sum = 0.5 * (point.alpha + point.beta);
        4.0 * point.semi_major_axis * (self.semi_perimeter - self.r1)
            * (self.semi_perimeter - self.r2)
            / (self.chord * self.chord)
            * half_sum.sin().powi(2)
    }

    fn velocities(
        &self,
        r1_km: &Vector3,
        r2_km: &Vector3,
        point: &Point,
        mu: f64,
    ) -> (Vector3, Vector3) {
        let p = self.semi_latus_rectum(point);
        let (sin_dtheta, cos_dtheta) = self.transfer_angle.sin_cos();
        let f = 1.0 - self.r2 / p * (1.0 - cos_dtheta);
        let g = self.r1 * self.r2 * sin_dtheta / (mu * p).sqrt();
        let g_dot = 1.0 - self.r1 / p * (1.0 - cos_dtheta);

        let v1 = vector::scale(&vector::sub(r2_km, &vector::scale(r1_km, f)), 1.0 / g);
        let v2 = vector::scale(&vector::sub(&vector::scale(r2_km, g_dot), r1_km), 1.0 / g);
        (v1, v2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use solar_core::constants::{AU_KM, MU_SUN};

    /// Seconds per radian of a circular 1 AU orbit.
    fn time_unit() -> f64 {
        (AU_KM.powi(3) / MU_SUN).sqrt()
    }

    #[test]
    fn quarter_circle_recovers_circular_speed() {
        let tof = PI / 2.0 * time_unit();
        let solved = solve([AU_KM, 0.0, 0.0], [0.0, AU_KM, 0.0], tof, MU_SUN).unwrap();
        assert!(solved.converged);
        assert!(solved.residual < LAMBERT_TOLERANCE_S);
        let circular = (MU_SUN / AU_KM).sqrt();
        assert_relative_eq!(solved.value.v1_km_s[1], circular, max_relative = 1e-4);
        assert!(solved.value.v1_km_s[0].abs() < 1e-3 * circular);
        assert_relative_eq!(solved.value.semi_major_axis_km, AU_KM, max_relative = 1e-4);
        assert_relative_eq!(solved.value.transfer_angle_rad, PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn clockwise_geometry_takes_the_long_way() {
        let tof = 4.0 * time_unit();
        let solved = solve([AU_KM, 0.0, 0.0], [0.0, -AU_KM, 0.0], tof, MU_SUN).unwrap();
        assert_relative_eq!(solved.value.transfer_angle_rad, 1.5 * PI, epsilon = 1e-12);
        // Prograde about +z: departs with positive y velocity.
        assert!(solved.value.v1_km_s[1] > 0.0);
    }

    #[test]
    fn minimum_energy_times_converge() {
        let r1 = [AU_KM, 0.0, 0.0];
        let r2 = [-0.5 * AU_KM, 1.3 * AU_KM, 0.0];
        let geometry = Geometry::new(&r1, &r2).unwrap();
        let minimum_energy = geometry.evaluate(0.0, MU_SUN);
        assert_relative_eq!(minimum_energy.alpha, PI, epsilon = 1e-15);

        for offset_s in [-100.0, 0.0, 100.0] {
            let solved = solve(r1, r2, minimum_energy.time_s + offset_s, MU_SUN).unwrap();
            assert!(solved.converged, "offset {offset_s} s: residual {}", solved.residual);
            assert!(solved.iterations <= 3);
            assert_relative_eq!(
                solved.value.semi_major_axis_km,
                minimum_energy.semi_major_axis,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn exhausted_budget_is_flagged() {
        let tof = PI / 2.0 * time_unit();
        let solved =
            solve_with_budget([AU_KM, 0.0, 0.0], [0.0, AU_KM, 0.0], tof, MU_SUN, 1).unwrap();
        assert!(!solved.converged);
        assert_eq!(solved.iterations, 1);
        assert!(solved.residual.is_finite());
        assert!(solved.residual >= LAMBERT_TOLERANCE_S);
        assert!(solved.value.v1_km_s.iter().all(|v| v.is_finite()));
        assert!(solved.converged().is_none());
    }

    #[test]
    fn antipodal_and_collinear_transfers_are_rejected() {
        let tof = 2.0 * time_unit();
        let antipodal = solve([AU_KM, 0.0, 0.0], [-1.5 * AU_KM, 0.0, 0.0], tof, MU_SUN);
        assert!(matches!(antipodal, Err(LambertError::DegenerateGeometry { .. })));
        let radial = solve([AU_KM, 0.0, 0.0], [2.0 * AU_KM, 0.0, 0.0], tof, MU_SUN);
        assert!(matches!(radial, Err(LambertError::DegenerateGeometry { .. })));
    }

    #[test]
    fn too_fast_transfers_are_hyperbolic() {
        let tof = 0.1 * time_unit();
        let result = solve([AU_KM, 0.0, 0.0], [0.0, AU_KM, 0.0], tof, MU_SUN);
        assert!(matches!(result, Err(LambertError::HyperbolicTransfer { .. })));
    }

    #[test]
    fn non_positive_time_is_rejected() {
        assert_eq!(
            solve([AU_KM, 0.0, 0.0], [0.0, AU_KM, 0.0], 0.0, MU_SUN),
            Err(LambertError::InvalidTimeOfFlight(0.0))
        );
        assert!(solve([0.0; 3], [0.0, AU_KM, 0.0], 1.0e6, MU_SUN).is_err());
    }
}
