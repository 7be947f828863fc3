//! Two-body propagation of mean elements to a heliocentric ecliptic state vector.

use solar_core::constants::{MU_SUN, SECONDS_PER_DAY};
use solar_core::numeric::Estimate;
use solar_core::units::{au_to_km, wrap_two_pi};

use crate::elements::CelestialBody;
use crate::epoch::Epoch;
use crate::kepler::solve_kepler;
use crate::StateVector;

/// Heliocentric state of `body` at `epoch`.
///
/// The convergence diagnostics of the underlying Kepler solve ride along with the state.
pub fn propagate(body: &CelestialBody, epoch: &Epoch) -> Estimate<StateVector> {
    let el = &body.elements;
    let a = au_to_km(el.semi_major_axis_au);
    let e = el.eccentricity;
    let inclination = el.inclination_deg.to_radians();
    let node = el.longitude_of_ascending_node_deg.to_radians();
    let arg_perihelion = el.argument_of_perihelion_deg().to_radians();

    // rad/day
    let mean_motion = (MU_SUN / a.powi(3)).sqrt() * SECONDS_PER_DAY;
    let mean_anomaly = wrap_two_pi(
        el.mean_anomaly_at_epoch_deg().to_radians() + mean_motion * epoch.days_since_j2000(),
    );

    let kepler = solve_kepler(mean_anomaly, e);
    let (sin_e, cos_e) = kepler.value.sin_cos();
    let semi_minor_ratio = (1.0 - e * e).sqrt();

    let x_orb = a * (cos_e - e);
    let y_orb = a * semi_minor_ratio * sin_e;
    let radius = x_orb.hypot(y_orb);
    let speed_scale = (MU_SUN * a).sqrt() / radius;
    let vx_orb = -speed_scale * sin_e;
    let vy_orb = speed_scale * semi_minor_ratio * cos_e;

    let rotation = perifocal_to_ecliptic(arg_perihelion, inclination, node);
    kepler.map(|_| StateVector {
        position_km: rotate(&rotation, x_orb, y_orb),
        velocity_km_s: rotate(&rotation, vx_orb, vy_orb),
    })
}

/// First two columns of R₃(−Ω)·R₁(−i)·R₃(−ω); the perifocal z component is always zero.
fn perifocal_to_ecliptic(w: f64, i: f64, node: f64) -> [[f64; 2]; 3] {
    let (sin_w, cos_w) = w.sin_cos();
    let (sin_i, cos_i) = i.sin_cos();
    let (sin_n, cos_n) = node.sin_cos();
    [
        [
            cos_n * cos_w - sin_n * sin_w * cos_i,
            -cos_n * sin_w - sin_n * cos_w * cos_i,
        ],
        [
            sin_n * cos_w + cos_n * sin_w * cos_i,
            -sin_n * sin_w + cos_n * cos_w * cos_i,
        ],
        [sin_w * sin_i, cos_w * sin_i],
    ]
}

fn rotate(m: &[[f64; 2]; 3], x: f64, y: f64) -> [f64; 3] {
    [
        m[0][0] * x + m[0][1] * y,
        m[1][0] * x + m[1][1] * y,
        m[2][0] * x + m[2][1] * y,
    ]
}
