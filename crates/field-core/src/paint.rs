//! Frame painting, independent of the drawing backend.

use crate::constants::GLOW_RADIUS_FACTOR;
use crate::field::ParticleField;
use crate::palette::{GradientStops, Palette, VisualMode};
use glam::Vec2;

/// Drawing backend for one surface.
pub trait Painter {
    /// Wipe the whole surface.
    fn clear(&mut self, bounds: Vec2);
    /// Straight segment with a two-stop gradient running `from` -> `to`.
    fn stroke_link(&mut self, from: Vec2, to: Vec2, stops: &GradientStops, width: f32);
    /// Filled disc of `radius`, shaded by a radial gradient that reaches its
    /// last stop at `glow_radius`.
    fn fill_glow(&mut self, center: Vec2, radius: f32, glow_radius: f32, stops: &GradientStops);
}

/// What one frame drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSummary {
    pub links: usize,
    pub particles: usize,
}

/// Clear, draw all links, then all particles on top.
pub fn paint<P: Painter + ?Sized>(
    field: &ParticleField,
    mode: VisualMode,
    painter: &mut P,
) -> FrameSummary {
    let palette = Palette::for_mode(mode);
    let particles = field.particles();
    painter.clear(field.bounds());

    let mut links = 0;
    for link in field.links() {
        let stops = palette.link_stops(link.opacity);
        painter.stroke_link(
            particles[link.from].position,
            particles[link.to].position,
            &stops,
            link.width,
        );
        links += 1;
    }

    for p in particles {
        let stops = palette.glow_stops(p.brightness);
        painter.fill_glow(p.position, p.size, p.size * GLOW_RADIUS_FACTOR, &stops);
    }

    FrameSummary {
        links,
        particles: particles.len(),
    }
}
