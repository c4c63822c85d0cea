use glam::DVec2;
use rand::Rng;

use crate::constants::{AMBIENT_THETA, SURFACE_THETA, SURFACE_VAPOR, WALL_RESTITUTION};
use crate::state::cell_index;

/// A tracer particle in domain-normalized coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Per-tick force accumulator, cleared after integration.
    pub force: DVec2,
    // Carried thermodynamic state. Seeded at construction, never coupled to the grid.
    pub temperature: f64,
    pub vapor: f64,
    pub cloud: f64,
}

impl Particle {
    pub fn at_rest(position: DVec2) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
            force: DVec2::ZERO,
            temperature: 0.0,
            vapor: 0.0,
            cloud: 0.0,
        }
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            position: DVec2::new(rng.gen::<f64>(), rng.gen::<f64>()),
            velocity: DVec2::ZERO,
            force: DVec2::ZERO,
            temperature: AMBIENT_THETA + rng.gen::<f64>() * (SURFACE_THETA - AMBIENT_THETA),
            vapor: rng.gen::<f64>() * SURFACE_VAPOR,
            cloud: rng.gen::<f64>() * 1e-3,
        }
    }

    /// Grid velocity at the particle's approximate previous position
    /// (`position - velocity * dt`), nearest cell, clamped to the grid.
    pub fn sample_grid_velocity(&self, velocity: &[DVec2], dt: f64) -> DVec2 {
        velocity[cell_index(self.position - self.velocity * dt)]
    }

    /// Clamp into the unit square, bouncing the velocity of each offending axis.
    /// Returns true when any wall was hit.
    pub fn resolve_wall_collisions(&mut self) -> bool {
        let mut hit = false;
        for axis in 0..2 {
            let p = self.position[axis];
            if p < 0.0 || p > 1.0 {
                self.position[axis] = p.clamp(0.0, 1.0);
                self.velocity[axis] *= WALL_RESTITUTION;
                hit = true;
            }
        }
        hit
    }

    /// velocity += force * dt + sampled; position += velocity * dt; force cleared.
    pub fn integrate(&mut self, sampled: DVec2, dt: f64) {
        self.velocity += self.force * dt + sampled;
        self.position += self.velocity * dt;
        self.force = DVec2::ZERO;
    }
}

/// Fixed-capacity tracer pool. Nothing is added or removed after construction.
#[derive(Clone, Debug)]
pub struct ParticlePool {
    particles: Vec<Particle>,
}

impl ParticlePool {
    pub fn new<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count).map(|_| Particle::random(rng)).collect();
        Self { particles }
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Advance every particle one tick. Returns the number of wall contacts.
    pub fn update(&mut self, velocity: &[DVec2], gravity: f64, dt: f64) -> usize {
        self.update_with(velocity, gravity, dt, |_, _| {})
    }

    /// Like [`update`](Self::update), calling `on_resolved` for each particle right
    /// after collision resolution and before integration.
    ///
    /// Collision is checked against the position left by the previous tick, so a
    /// particle can sit outside [0, 1]^2 for one tick after integrating.
    pub fn update_with<F>(&mut self, velocity: &[DVec2], gravity: f64, dt: f64, mut on_resolved: F) -> usize
    where
        F: FnMut(usize, &Particle),
    {
        let mut contacts = 0;
        for (i, p) in self.particles.iter_mut().enumerate() {
            let sampled = p.sample_grid_velocity(velocity, dt);
            p.force.y += gravity;
            if p.resolve_wall_collisions() {
                contacts += 1;
            }
            on_resolved(i, p);
            p.integrate(sampled, dt);
        }
        contacts
    }
}
