mod color;

// Re-export public API
pub use color::{height_to_rgba, map_to_rgba, rgba_to_vec4};

use glam::{Mat4, Vec3, Vec4};

use crate::solver::particle::{Particle, ParticlePool};

pub const GROUND_COLOR: Vec4 = Vec4::new(0.3, 0.3, 0.3, 1.0);

/// Draw seam to a graphics backend. Each call is one unit quad placed by
/// `transform` and projected by `view_proj`.
pub trait QuadSink {
    fn draw_quad(&mut self, view_proj: &Mat4, transform: &Mat4, color: Vec4);
}

/// Scene layout in world units.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Horizontal extent of the ground bar, usually the viewport width.
    pub ground_width: f32,
    pub ground_thickness: f32,
    pub particle_scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ground_width: 1280.0,
            ground_thickness: 0.1,
            particle_scale: 0.1,
        }
    }
}

/// Flat grey bar along y = 0.
pub fn ground_transform(cfg: &RenderConfig) -> Mat4 {
    Mat4::from_translation(Vec3::ZERO) * Mat4::from_scale(Vec3::new(cfg.ground_width, cfg.ground_thickness, 1.0))
}

pub fn particle_transform(p: &Particle, cfg: &RenderConfig) -> Mat4 {
    Mat4::from_translation(Vec3::new(p.position.x as f32, p.position.y as f32, 0.0))
        * Mat4::from_scale(Vec3::new(cfg.particle_scale, cfg.particle_scale, 1.0))
}

pub fn particle_color(p: &Particle) -> Vec4 {
    rgba_to_vec4(height_to_rgba(p.position.y))
}

/// Emit the ground bar, then one quad per particle in pool order.
pub fn render_scene<S: QuadSink + ?Sized>(particles: &ParticlePool, view_proj: &Mat4, cfg: &RenderConfig, sink: &mut S) {
    sink.draw_quad(view_proj, &ground_transform(cfg), GROUND_COLOR);
    for p in particles.iter() {
        sink.draw_quad(view_proj, &particle_transform(p, cfg), particle_color(p));
    }
}

/// One recorded draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub transform: Mat4,
    pub color: Vec4,
}

/// Sink that records quads for a backend to replay later.
#[derive(Clone, Debug, Default)]
pub struct QuadList {
    pub view_proj: Mat4,
    pub quads: Vec<Quad>,
}

impl QuadSink for QuadList {
    fn draw_quad(&mut self, view_proj: &Mat4, transform: &Mat4, color: Vec4) {
        self.view_proj = *view_proj;
        self.quads.push(Quad { transform: *transform, color });
    }
}
