use glam::DVec2;

use crate::constants::{REFERENCE_VIRTUAL_THETA, VIRTUAL_TEMPERATURE_COEFF};

/// Virtual potential temperature: θv = θ (1 + 0.61 qv).
#[inline]
pub fn virtual_temperature(theta: f64, vapor: f64) -> f64 {
    theta * (1.0 + VIRTUAL_TEMPERATURE_COEFF * vapor)
}

/// Vertical buoyant acceleration from virtual-temperature contrast and cloud loading:
/// b = -epsilon * g * (θv / θv0 - qc).
#[inline]
pub fn buoyancy(theta: f64, vapor: f64, cloud: f64, buoyancy_epsilon: f64, gravity: f64) -> f64 {
    let theta_v = virtual_temperature(theta, vapor);
    -buoyancy_epsilon * gravity * (theta_v / REFERENCE_VIRTUAL_THETA - cloud)
}

/// Apply buoyancy to the vertical velocity of every cell, borders included.
/// vy += dt * b
pub(super) fn apply_buoyancy(
    velocity: &mut [DVec2],
    temperature: &[f64],
    vapor: &[f64],
    cloud: &[f64],
    buoyancy_epsilon: f64,
    gravity: f64,
    dt: f64,
) {
    for (i, v) in velocity.iter_mut().enumerate() {
        v.y += dt * buoyancy(temperature[i], vapor[i], cloud[i], buoyancy_epsilon, gravity);
    }
}
