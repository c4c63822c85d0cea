//! Physical constants for the moist-convection model.
//!
//! Temperatures are in kelvin, pressures in pascal, mixing ratios in kg/kg.

// =============================================================================
// THERMODYNAMICS
// =============================================================================

/// Reference surface pressure P0 (Pa).
pub const SURFACE_PRESSURE: f64 = 100_000.0;

/// Specific gas constant of dry air (J/(kg·K)).
pub const GAS_CONSTANT_DRY_AIR: f64 = 287.0;

/// Lapse divisor in the hydrostatic exponent `-g / (R * 10)`.
pub const HYDROSTATIC_LAPSE: f64 = 10.0;

/// Height scale applied to the normalized row coordinate in the hydrostatic profile.
pub const DOMAIN_HEIGHT: f64 = 10.0;

/// Poisson exponent R/cp used by the Exner conversion.
pub const KAPPA: f64 = 0.286;

/// Latent heat of vaporization (J/kg).
pub const LATENT_HEAT: f64 = 2_501_000.0;

/// Specific heat of dry air at constant pressure (J/(kg·K)).
pub const SPECIFIC_HEAT_CP: f64 = 1005.0;

/// Reference virtual potential temperature for buoyancy (K).
pub const REFERENCE_VIRTUAL_THETA: f64 = 295.0;

/// Vapor loading coefficient in θv = θ(1 + 0.61 qv).
pub const VIRTUAL_TEMPERATURE_COEFF: f64 = 0.61;

// Tetens-type saturation mixing ratio: q_vs = (A / P) * exp(B (T - 273.15) / (T - C))
pub const TETENS_A: f64 = 380.16;
pub const TETENS_B: f64 = 17.67;
pub const TETENS_FREEZING: f64 = 273.15;
pub const TETENS_C: f64 = 29.65;

// =============================================================================
// BOUNDARY AND INITIAL PROFILES
// =============================================================================

/// Potential temperature held at the ceiling and side walls (K).
pub const AMBIENT_THETA: f64 = 250.0;

/// Mean potential temperature of the heated floor (K).
pub const SURFACE_THETA: f64 = 300.0;

/// Half-width of the uniform floor temperature perturbation (K).
pub const SURFACE_THETA_JITTER: f64 = 2.5;

/// Mean vapor mixing ratio at the moist floor.
pub const SURFACE_VAPOR: f64 = 0.02;

/// Half-width of the uniform floor vapor perturbation.
pub const SURFACE_VAPOR_JITTER: f64 = 0.0025;

/// Peak-to-peak amplitude of the random horizontal wind seed.
pub const INITIAL_WIND_JITTER: f64 = 0.01;

/// Uniform vertical velocity seed.
pub const INITIAL_UPDRAFT: f64 = 0.001;

// =============================================================================
// PARTICLES
// =============================================================================

/// Velocity multiplier applied on a wall hit (inelastic bounce).
pub const WALL_RESTITUTION: f64 = -0.3;

/// Default tracer pool capacity.
pub const DEFAULT_PARTICLES: usize = 1000;
