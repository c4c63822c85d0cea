//! Cloud-forming atmospheric convection on a 100x100 grid, with a pool of
//! tracer particles riding the flow.

pub mod config;
pub mod constants;
pub mod physics;
pub mod renderer;
pub mod solver;
pub mod state;

pub use physics::Simulation;
