use glam::Mat4;

use crate::config::Config;
use crate::renderer::{self, QuadSink, RenderConfig};
use crate::solver::particle::ParticlePool;
use crate::solver::{self, SolverParams};
use crate::state::{GridFields, SimState, N};

/// Tick-rate text for a frame of `dt` seconds.
pub fn format_fps(dt: f64) -> String {
    format!("{:.1} FPS", 1.0 / dt)
}

/// The simulator as seen by a frame loop: owns the state and the live
/// tunables, steps once per frame and hands particles to a renderer.
pub struct Simulation {
    state: SimState,
    params: SolverParams,
    frames_per_second: String,
    ticks: u64,
}

impl Simulation {
    pub fn new(num_particles: usize, params: SolverParams, seed: u64) -> Self {
        let state = SimState::new(num_particles, params.gravity, seed);
        log::info!(
            "simulation: {N}x{N} grid, {} particles, seed {seed}, {:?}",
            state.particles.len(),
            params
        );
        Self {
            state,
            params,
            frames_per_second: format_fps(0.0),
            ticks: 0,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.particles, cfg.physics.clone(), cfg.run.seed)
    }

    /// Advance one frame. Returns the number of particle wall contacts.
    pub fn tick(&mut self, dt: f64) -> usize {
        self.frames_per_second = format_fps(dt);
        let contacts = solver::fluid_step(&mut self.state, &self.params, dt);
        self.ticks += 1;
        log::debug!("tick {} {} wall_contacts={contacts}", self.ticks, self.frames_per_second);
        contacts
    }

    /// Draw the ground bar and every particle through `sink`.
    pub fn render<S: QuadSink + ?Sized>(&self, view_proj: &Mat4, cfg: &RenderConfig, sink: &mut S) {
        renderer::render_scene(&self.state.particles, view_proj, cfg, sink);
    }

    pub fn frames_per_second(&self) -> &str {
        &self.frames_per_second
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Direct handle for a settings panel; writes apply from the next tick.
    pub fn params_mut(&mut self) -> &mut SolverParams {
        &mut self.params
    }

    pub fn gravity(&self) -> f64 {
        self.params.gravity
    }

    /// Affects particles and buoyancy only; the pressure field stays as built.
    pub fn set_gravity(&mut self, gravity: f64) {
        self.params.gravity = gravity;
    }

    pub fn vorticity_epsilon(&self) -> f64 {
        self.params.vorticity_epsilon
    }

    pub fn set_vorticity_epsilon(&mut self, epsilon: f64) {
        self.params.vorticity_epsilon = epsilon;
    }

    pub fn buoyancy_epsilon(&self) -> f64 {
        self.params.buoyancy_epsilon
    }

    pub fn set_buoyancy_epsilon(&mut self, epsilon: f64) {
        self.params.buoyancy_epsilon = epsilon;
    }

    pub fn fields(&self) -> &GridFields {
        &self.state.fields
    }

    pub fn particles(&self) -> &ParticlePool {
        &self.state.particles
    }
}
