use glam::DVec2;
use rand::Rng;

use crate::constants::{AMBIENT_THETA, SURFACE_THETA, SURFACE_THETA_JITTER, SURFACE_VAPOR, SURFACE_VAPOR_JITTER};
use crate::state::{idx_inner, GridFields, N};

/// Scalar field type for boundary condition dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Temperature,
    Vapor,
    Cloud,
}

/// Uniform draw in [-amplitude, amplitude).
#[inline]
fn jitter<R: Rng + ?Sized>(rng: &mut R, amplitude: f64) -> f64 {
    (rng.gen::<f64>() * 2.0 - 1.0) * amplitude
}

/// Velocity walls.
///   - bottom: no-slip (zero)
///   - top: free-slip (copy row below, vertical component zeroed)
///   - left/right: vertical component zeroed
pub fn set_velocity_bnd(velocity: &mut [DVec2]) {
    for x in 0..N {
        velocity[idx_inner(x, 0)] = DVec2::ZERO;
        let below = velocity[idx_inner(x, N - 2)];
        velocity[idx_inner(x, N - 1)] = DVec2::new(below.x, 0.0);
    }
    for y in 0..N {
        velocity[idx_inner(0, y)].y = 0.0;
        velocity[idx_inner(N - 1, y)].y = 0.0;
    }
}

/// Scalar walls, dispatched on field type.
///   - `Temperature`: sides and top held at ambient; bottom heated with fresh noise
///   - `Vapor`: top dry; left column copied from the right column; bottom moist with fresh noise
///   - `Cloud`: zero on all four edges
pub fn set_bnd<R: Rng + ?Sized>(field_type: FieldType, x: &mut [f64], rng: &mut R) {
    match field_type {
        FieldType::Temperature => {
            for j in 0..N {
                x[idx_inner(0, j)] = AMBIENT_THETA;
                x[idx_inner(N - 1, j)] = AMBIENT_THETA;
            }
            for i in 0..N {
                x[idx_inner(i, N - 1)] = AMBIENT_THETA;
            }
            for i in 0..N {
                x[idx_inner(i, 0)] = SURFACE_THETA + jitter(rng, SURFACE_THETA_JITTER);
            }
        }
        FieldType::Vapor => {
            for i in 0..N {
                x[idx_inner(i, N - 1)] = 0.0;
            }
            // One-way link: nothing writes the right column from the left
            for j in 0..N {
                x[idx_inner(0, j)] = x[idx_inner(N - 1, j)];
            }
            for i in 0..N {
                x[idx_inner(i, 0)] = SURFACE_VAPOR + jitter(rng, SURFACE_VAPOR_JITTER);
            }
        }
        FieldType::Cloud => {
            for k in 0..N {
                x[idx_inner(k, 0)] = 0.0;
                x[idx_inner(k, N - 1)] = 0.0;
                x[idx_inner(0, k)] = 0.0;
                x[idx_inner(N - 1, k)] = 0.0;
            }
        }
    }
}

/// Re-apply every field's boundary conditions. Runs once per tick after microphysics.
pub fn enforce_boundaries<R: Rng + ?Sized>(fields: &mut GridFields, rng: &mut R) {
    set_velocity_bnd(&mut fields.velocity);
    set_bnd(FieldType::Temperature, &mut fields.temperature, rng);
    set_bnd(FieldType::Vapor, &mut fields.vapor, rng);
    set_bnd(FieldType::Cloud, &mut fields.cloud, rng);
}
