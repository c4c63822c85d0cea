use crate::constants::{
    KAPPA, LATENT_HEAT, SPECIFIC_HEAT_CP, SURFACE_PRESSURE, TETENS_A, TETENS_B, TETENS_C,
    TETENS_FREEZING,
};
use crate::state::PressureField;

/// (P0 / P)^kappa, the factor separating potential from actual temperature.
#[inline]
pub fn exner_ratio(pressure: f64) -> f64 {
    (SURFACE_PRESSURE / pressure).powf(KAPPA)
}

/// Actual temperature from potential temperature: T = θ / (P0/P)^kappa.
#[inline]
pub fn actual_temperature(theta: f64, pressure: f64) -> f64 {
    theta / exner_ratio(pressure)
}

/// Saturation vapor mixing ratio (Tetens form).
/// Singular at T = 29.65 K; not guarded.
#[inline]
pub fn saturation_mixing_ratio(temperature: f64, pressure: f64) -> f64 {
    (TETENS_A / pressure) * (TETENS_B * (temperature - TETENS_FREEZING) / (temperature - TETENS_C)).exp()
}

/// Amount moved from cloud water into vapor for one cell: min(q_vs - qv, qc).
/// Negative values condense vapor into cloud.
#[inline]
pub fn exchange_amount(theta: f64, vapor: f64, cloud: f64, pressure: f64) -> f64 {
    let q_vs = saturation_mixing_ratio(actual_temperature(theta, pressure), pressure);
    (q_vs - vapor).min(cloud)
}

/// Vapor/cloud exchange with latent-heat feedback into potential temperature.
///
/// Mutates `temperature` as a side effect, so it must run after advection and
/// before boundary enforcement.
pub(super) fn condense(temperature: &mut [f64], vapor: &mut [f64], cloud: &mut [f64], pressure: &PressureField) {
    for i in 0..temperature.len() {
        let p = pressure[i];
        let ratio = exner_ratio(p);
        let dq = exchange_amount(temperature[i], vapor[i], cloud[i], p);
        vapor[i] += dq;
        cloud[i] -= dq;
        temperature[i] += LATENT_HEAT / (SPECIFIC_HEAT_CP * (1.0 / ratio)) * -dq;
    }
}
