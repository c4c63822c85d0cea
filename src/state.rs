use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::constants::{
    AMBIENT_THETA, DOMAIN_HEIGHT, GAS_CONSTANT_DRY_AIR, HYDROSTATIC_LAPSE, INITIAL_UPDRAFT,
    INITIAL_WIND_JITTER, SURFACE_PRESSURE, SURFACE_THETA, SURFACE_THETA_JITTER, SURFACE_VAPOR,
};
use crate::solver::particle::ParticlePool;

/// Cells per axis. The grid spans the unit square.
pub const N: usize = 100;
/// Cell spacing along x (columns).
pub const DX: f64 = 1.0 / N as f64;
/// Cell spacing along y (rows).
pub const DY: f64 = 1.0 / N as f64;

/// Convert 2D coordinates to 1D row-major index, clamping both axes into the grid.
pub fn idx(x: i32, y: i32) -> usize {
    let x = x.clamp(0, N as i32 - 1) as usize;
    let y = y.clamp(0, N as i32 - 1) as usize;
    y * N + x
}

/// Fast index for cells already known to be in bounds.
#[inline(always)]
pub const fn idx_inner(x: usize, y: usize) -> usize {
    y * N + x
}

/// Map a continuous domain coordinate to a cell along one axis, clamped to [0, N-1].
/// NaN lands in cell 0.
#[inline]
pub fn cell_coord(c: f64) -> usize {
    ((c * N as f64).floor().max(0.0) as usize).min(N - 1)
}

/// Cell index containing a continuous domain position.
#[inline]
pub fn cell_index(p: DVec2) -> usize {
    idx_inner(cell_coord(p.x), cell_coord(p.y))
}

/// Continuous position of a cell centre.
#[inline]
pub fn cell_center(x: usize, y: usize) -> DVec2 {
    DVec2::new((x as f64 + 0.5) * DX, (y as f64 + 0.5) * DY)
}

/// Row height normalized so the floor is 0 and the ceiling is 1.
#[inline]
pub fn y_norm(y: usize) -> f64 {
    y as f64 / (N - 1) as f64
}

/// Hydrostatic pressure, computed once from the initial temperature profile.
/// Read-only after construction.
#[derive(Clone, Debug)]
pub struct PressureField(Vec<f64>);

impl PressureField {
    /// P = P0 * (1 - y_norm * H / T)^(-g / (R * 10))
    pub fn hydrostatic(temperature: &[f64], gravity: f64) -> Self {
        let exponent = -gravity / (GAS_CONSTANT_DRY_AIR * HYDROSTATIC_LAPSE);
        let mut p = vec![0.0; N * N];
        for y in 0..N {
            let h = y_norm(y) * DOMAIN_HEIGHT;
            for x in 0..N {
                let ii = idx_inner(x, y);
                p[ii] = SURFACE_PRESSURE * (1.0 - h / temperature[ii]).powf(exponent);
            }
        }
        Self(p)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn at(&self, x: usize, y: usize) -> f64 {
        self.0[idx_inner(x, y)]
    }
}

impl std::ops::Index<usize> for PressureField {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

/// The five discretized fields, each a contiguous row-major N*N array.
#[derive(Clone, Debug)]
pub struct GridFields {
    pub velocity: Vec<DVec2>,
    /// Potential temperature θ (K).
    pub temperature: Vec<f64>,
    /// Water-vapor mixing ratio qv.
    pub vapor: Vec<f64>,
    /// Cloud-water mixing ratio qc.
    pub cloud: Vec<f64>,
    pub pressure: PressureField,
}

impl GridFields {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, gravity: f64) -> Self {
        let size = N * N;
        let mut velocity = vec![DVec2::ZERO; size];
        let mut temperature = vec![0.0; size];
        let mut vapor = vec![0.0; size];
        let cloud = vec![0.0; size];

        // Warm moist floor, cold dry ceiling; only the floor row is perturbed.
        for y in 0..N {
            let h = y_norm(y);
            for x in 0..N {
                let ii = idx_inner(x, y);
                let mut theta = SURFACE_THETA - (SURFACE_THETA - AMBIENT_THETA) * h;
                if y == 0 {
                    theta += (rng.gen::<f64>() * 2.0 - 1.0) * SURFACE_THETA_JITTER;
                }
                temperature[ii] = theta;
                vapor[ii] = SURFACE_VAPOR * (1.0 - h);
            }
        }

        // Small horizontal noise to break symmetry, plus a uniform updraft seed
        for v in velocity.iter_mut() {
            let u = (rng.gen::<f64>() - 0.5) * INITIAL_WIND_JITTER;
            *v = DVec2::new(u, INITIAL_UPDRAFT);
        }

        let pressure = PressureField::hydrostatic(&temperature, gravity);

        Self {
            velocity,
            temperature,
            vapor,
            cloud,
            pressure,
        }
    }

    /// Spatially uniform fields over the standard hydrostatic pressure profile.
    #[cfg(test)]
    pub(crate) fn uniform(velocity: DVec2, theta: f64, vapor: f64, cloud: f64) -> Self {
        let temperature = vec![theta; N * N];
        let pressure = PressureField::hydrostatic(&temperature, crate::solver::SolverParams::default().gravity);
        Self {
            velocity: vec![velocity; N * N],
            temperature,
            vapor: vec![vapor; N * N],
            cloud: vec![cloud; N * N],
            pressure,
        }
    }
}

/// Everything the per-tick pipeline mutates: fields, scratch buffers, tracers and the RNG.
pub struct SimState {
    pub fields: GridFields,
    /// Pre-advection copy of velocity (source of the self-advection pass).
    pub velocity0: Vec<DVec2>,
    /// Pre-advection copy of the scalar currently being advected.
    pub scratch: Vec<f64>,
    /// Scratch buffer for vorticity values.
    pub vorticity: Vec<f64>,
    /// Scratch buffer for |vorticity| used by confinement.
    pub vorticity_abs: Vec<f64>,
    pub rng: ChaCha8Rng,
    pub particles: ParticlePool,
}

impl SimState {
    pub fn new(num_particles: usize, gravity: f64, seed: u64) -> Self {
        Self::with_rng(num_particles, gravity, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn with_rng(num_particles: usize, gravity: f64, mut rng: ChaCha8Rng) -> Self {
        let size = N * N;
        let fields = GridFields::new(&mut rng, gravity);
        let particles = ParticlePool::new(num_particles, &mut rng);

        Self {
            fields,
            velocity0: vec![DVec2::ZERO; size],
            scratch: vec![0.0; size],
            vorticity: vec![0.0; size],
            vorticity_abs: vec![0.0; size],
            rng,
            particles,
        }
    }
}
