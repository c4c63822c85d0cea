mod boundary;
mod core;
pub mod diagnostics;
mod microphysics;
mod params;
pub mod particle;
mod thermal;
mod vorticity;

// Re-export public API
pub use boundary::{enforce_boundaries, set_bnd, set_velocity_bnd, FieldType};
pub use self::core::advect;
pub use microphysics::{actual_temperature, exchange_amount, saturation_mixing_ratio};
pub use params::{ParamRange, SolverParams};
pub use thermal::{buoyancy, virtual_temperature};
pub use vorticity::{compute_vorticity, confinement_force};

use crate::state::SimState;
use particle::Particle;
use self::core::{advect_scalar, advect_velocity};
use microphysics::condense;
use thermal::apply_buoyancy;
use vorticity::vorticity_confinement;

/// Full simulation tick. Each stage consumes the output of the one before it:
/// advect velocity -> advect scalars -> vorticity confinement -> buoyancy ->
/// microphysics -> boundary conditions -> particles.
///
/// `dt` is accepted as-is; there is no stability limit. Returns the number of
/// particle wall contacts this tick.
pub fn fluid_step(state: &mut SimState, params: &SolverParams, dt: f64) -> usize {
    fluid_step_with(state, params, dt, |_, _| {})
}

/// [`fluid_step`] with a hook observing each particle right after wall
/// collision resolution, before it integrates.
pub fn fluid_step_with<F>(state: &mut SimState, params: &SolverParams, dt: f64, on_resolved: F) -> usize
where
    F: FnMut(usize, &Particle),
{
    let fields = &mut state.fields;

    // Self-advect velocity from its pre-step copy
    advect_velocity(&mut fields.velocity, &mut state.velocity0, dt);

    // Scalars all ride the freshly advected velocity
    advect_scalar(&mut fields.temperature, &mut state.scratch, &fields.velocity, dt);
    advect_scalar(&mut fields.vapor, &mut state.scratch, &fields.velocity, dt);
    advect_scalar(&mut fields.cloud, &mut state.scratch, &fields.velocity, dt);

    vorticity_confinement(
        &mut fields.velocity,
        &mut state.vorticity,
        &mut state.vorticity_abs,
        params.vorticity_epsilon,
        dt,
    );

    apply_buoyancy(
        &mut fields.velocity,
        &fields.temperature,
        &fields.vapor,
        &fields.cloud,
        params.buoyancy_epsilon,
        params.gravity,
        dt,
    );

    condense(&mut fields.temperature, &mut fields.vapor, &mut fields.cloud, &fields.pressure);

    enforce_boundaries(fields, &mut state.rng);

    let contacts = state.particles.update_with(&fields.velocity, params.gravity, dt, on_resolved);
    log::trace!("fluid_step dt={dt:.4} wall_contacts={contacts}");
    contacts
}
