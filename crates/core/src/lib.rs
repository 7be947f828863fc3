//! Core units, constants, and shared primitives for the Solar Freight workspace.

/// Physical constants in kilometre/second units unless stated otherwise.
pub mod constants {
    /// Heliocentric gravitational parameter (km³/s²).
    pub const MU_SUN: f64 = 1.327_124_400_18e11;
    /// Kilometres per astronomical unit.
    pub const AU_KM: f64 = 149_597_870.7;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Period of the circular parking orbit used for departure and capture burns (12 hours).
    pub const PARKING_ORBIT_PERIOD_S: f64 = 43_200.0;
}

/// Angle and distance conversion helpers.
pub mod units {
    use super::constants::AU_KM;

    /// Convert astronomical units to kilometres.
    #[inline]
    pub fn au_to_km(v: f64) -> f64 {
        v * AU_KM
    }

    /// Wrap an angle into `[0, 2π)`.
    #[inline]
    pub fn wrap_two_pi(angle_rad: f64) -> f64 {
        angle_rad.rem_euclid(std::f64::consts::TAU)
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_DAY;

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * SECONDS_PER_DAY
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector in kilometres or km/s depending on context.
    pub type Vector3 = [f64; 3];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Cross product `a × b`.
    #[inline]
    pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }
}

/// Tagged results for the bounded iterative solvers (Kepler, Lambert).
pub mod numeric {
    /// Outcome of a fixed-budget iterative solve.
    ///
    /// The solvers never fail on an exhausted budget; they hand back their best
    /// estimate with `converged == false` and let the caller decide whether to trust it.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Estimate<T> {
        pub value: T,
        /// Iterations actually performed.
        pub iterations: usize,
        /// Magnitude of the last residual, in the solver's own units.
        pub residual: f64,
        pub converged: bool,
    }

    impl<T> Estimate<T> {
        /// Returns the value only when the solver met its tolerance.
        pub fn converged(self) -> Option<T> {
            if self.converged {
                Some(self.value)
            } else {
                None
            }
        }

        /// Transform the estimated value while keeping the convergence diagnostics.
        pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Estimate<U> {
            Estimate {
                value: f(self.value),
                iterations: self.iterations,
                residual: self.residual,
                converged: self.converged,
            }
        }
    }
}
