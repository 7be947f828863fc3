//! Two-body propagator for bound orbits, used to check Lambert solutions independently.
//!
//! Universal-variable formulation with Stumpff functions; elliptic orbits only.

pub fn kepler_propagate(r0: &[f64; 3], v0: &[f64; 3], dt: f64, mu: f64) -> ([f64; 3], [f64; 3]) {
    let r0_mag = dot(r0, r0).sqrt();
    let rdotv = dot(r0, v0);
    let sqrt_mu = mu.sqrt();
    // 1/a from the vis-viva energy
    let alpha = 2.0 / r0_mag - dot(v0, v0) / mu;

    // chi = sqrt(a)·ΔE and |ΔE − ΔM| ≤ 2, which brackets the root for bound orbits.
    let mean_motion_dt = sqrt_mu * dt * alpha.powf(1.5);
    let mut lower = 0.0;
    let mut upper = (mean_motion_dt + 2.0) / alpha.sqrt();
    let mut chi = sqrt_mu * dt * alpha;
    let tol = 1e-14 * dt.abs().max(1.0);
    for _ in 0..200 {
        let (c2, c3, r) = radius_at(chi, alpha, r0_mag, rdotv, sqrt_mu);
        let psi = alpha * chi * chi;
        let residual = r0_mag * chi * (1.0 - psi * c3)
            + rdotv / sqrt_mu * chi * chi * c2
            + chi.powi(3) * c3
            - sqrt_mu * dt;
        if residual > 0.0 {
            upper = chi;
        } else {
            lower = chi;
        }
        let mut next = chi - residual / r;
        if !(next > lower && next < upper) {
            next = 0.5 * (lower + upper);
        }
        let delta = next - chi;
        chi = next;
        if delta.abs() < tol || upper - lower < tol {
            break;
        }
    }

    let (c2, c3, r) = radius_at(chi, alpha, r0_mag, rdotv, sqrt_mu);
    let chi2 = chi * chi;
    let psi = alpha * chi2;
    let f = 1.0 - chi2 / r0_mag * c2;
    let g = dt - chi2 * chi / sqrt_mu * c3;
    let f_dot = sqrt_mu / (r * r0_mag) * chi * (psi * c3 - 1.0);
    let g_dot = 1.0 - chi2 / r * c2;

    let combine = |a: f64, b: f64| {
        [
            a * r0[0] + b * v0[0],
            a * r0[1] + b * v0[1],
            a * r0[2] + b * v0[2],
        ]
    };
    (combine(f, g), combine(f_dot, g_dot))
}

fn radius_at(chi: f64, alpha: f64, r0_mag: f64, rdotv: f64, sqrt_mu: f64) -> (f64, f64, f64) {
    let psi = alpha * chi * chi;
    let (c2, c3) = stumpff(psi);
    let r = chi * chi * c2 + rdotv / sqrt_mu * chi * (1.0 - psi * c3) + r0_mag * (1.0 - psi * c2);
    (c2, c3, r)
}

fn stumpff(psi: f64) -> (f64, f64) {
    if psi > 1e-6 {
        let s = psi.sqrt();
        ((1.0 - s.cos()) / psi, (s - s.sin()) / (psi * s))
    } else {
        (
            0.5 - psi / 24.0 + psi * psi / 720.0,
            1.0 / 6.0 - psi / 120.0 + psi * psi / 5040.0,
        )
    }
}

fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
