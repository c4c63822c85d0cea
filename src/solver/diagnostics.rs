use glam::DVec2;

use crate::solver::particle::ParticlePool;
use crate::state::{idx_inner, GridFields, DX, DY, N};

/// Central-difference divergence du/dx + dv/dy on interior cells; borders are zero.
///
/// Reported only. Nothing projects the velocity field onto its divergence-free part.
pub fn compute_divergence(velocity: &[DVec2], out: &mut [f64]) {
    out.iter_mut().for_each(|d| *d = 0.0);
    for y in 1..(N - 1) {
        for x in 1..(N - 1) {
            let dudx = (velocity[idx_inner(x + 1, y)].x - velocity[idx_inner(x - 1, y)].x) / (2.0 * DX);
            let dvdy = (velocity[idx_inner(x, y + 1)].y - velocity[idx_inner(x, y - 1)].y) / (2.0 * DY);
            out[idx_inner(x, y)] = dudx + dvdy;
        }
    }
}

/// Largest |divergence| over the interior.
pub fn max_abs_divergence(velocity: &[DVec2]) -> f64 {
    let mut div = vec![0.0; N * N];
    compute_divergence(velocity, &mut div);
    div.iter().fold(0.0_f64, |m, d| m.max(d.abs()))
}

/// Grid-averaged kinetic energy: KE = 0.5 * <u² + v²>.
pub fn compute_kinetic_energy(velocity: &[DVec2]) -> f64 {
    if velocity.is_empty() {
        return 0.0;
    }
    0.5 * velocity.iter().map(|v| v.length_squared()).sum::<f64>() / velocity.len() as f64
}

/// Total water Σ (qv + qc) over the grid.
pub fn total_water(fields: &GridFields) -> f64 {
    fields.vapor.iter().zip(&fields.cloud).map(|(qv, qc)| qv + qc).sum()
}

/// Number of NaN/infinite values across all grid fields and particle state.
pub fn count_non_finite(fields: &GridFields, particles: &ParticlePool) -> usize {
    let scalars = fields
        .temperature
        .iter()
        .chain(&fields.vapor)
        .chain(&fields.cloud)
        .chain(fields.pressure.as_slice())
        .filter(|v| !v.is_finite())
        .count();
    let vectors = fields.velocity.iter().filter(|v| !v.is_finite()).count();
    let tracers = particles
        .iter()
        .filter(|p| !(p.position.is_finite() && p.velocity.is_finite() && p.force.is_finite()))
        .count();
    scalars + vectors + tracers
}
