//! Newton solver for Kepler's equation `E − e·sin E = M`.

use solar_core::numeric::Estimate;

/// Stop once a Newton correction falls below this many radians.
pub const KEPLER_TOLERANCE_RAD: f64 = 1e-8;
pub const KEPLER_MAX_ITERATIONS: usize = 20;

/// Eccentric anomaly for mean anomaly `mean_anomaly` (rad) on an ellipse of eccentricity `e`.
///
/// Starts from `E₀ = M`. On an exhausted budget the last iterate is returned unconverged;
/// `residual` is the magnitude of the final correction.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> Estimate<f64> {
    let mut anomaly = mean_anomaly;
    let mut correction = f64::INFINITY;
    for iteration in 1..=KEPLER_MAX_ITERATIONS {
        correction = (anomaly - eccentricity * anomaly.sin() - mean_anomaly)
            / (1.0 - eccentricity * anomaly.cos());
        anomaly -= correction;
        if correction.abs() < KEPLER_TOLERANCE_RAD {
            return Estimate {
                value: anomaly,
                iterations: iteration,
                residual: correction.abs(),
                converged: true,
            };
        }
    }
    Estimate {
        value: anomaly,
        iterations: KEPLER_MAX_ITERATIONS,
        residual: correction.abs(),
        converged: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn circular_orbit_converges_immediately() {
        let solved = solve_kepler(1.234, 0.0);
        assert!(solved.converged);
        assert_eq!(solved.iterations, 1);
        assert_eq!(solved.value, 1.234);
    }

    #[test]
    fn satisfies_keplers_equation() {
        for &e in &[0.0167, 0.0934, 0.2056, 0.2488] {
            for k in 0..12 {
                let m = k as f64 * 0.5;
                let solved = solve_kepler(m, e);
                assert!(solved.converged, "e={e}, M={m}");
                let ea = solved.value;
                assert_abs_diff_eq!(ea - e * ea.sin(), m, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn exhausted_budget_is_flagged() {
        // Newton from E₀ = M oscillates for near-parabolic ellipses close to periapsis.
        let solved = solve_kepler(0.01, 0.999);
        assert!(!solved.converged);
        assert_eq!(solved.iterations, KEPLER_MAX_ITERATIONS);
        assert!(solved.residual >= KEPLER_TOLERANCE_RAD);
        assert!(solved.converged().is_none());
    }
}
