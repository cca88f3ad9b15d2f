use crate::config::{sanitize_extent, FieldConfig};
use crate::constants::{LINK_BASE_OPACITY, LINK_BASE_WIDTH};
use crate::particle::Particle;
use crate::pointer::PointerState;
use glam::Vec2;
use rand::prelude::*;

/// A proximity link between two particles, ready to be stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub distance: f32,
    /// Brightness of the brighter endpoint.
    pub brightness: f32,
    pub opacity: f32,
    pub width: f32,
}

/// The particle set for one surface.
///
/// Particles are regenerated wholesale on every [`ParticleField::resize`];
/// between resizes the count never changes.
pub struct ParticleField {
    config: FieldConfig,
    bounds: Vec2,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    /// An empty field; call [`ParticleField::resize`] once the surface size is
    /// known.
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            config,
            bounds: Vec2::ZERO,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(sanitize_extent(width), sanitize_extent(height));
        let count = self.config.particle_count(self.bounds.x, self.bounds.y);
        let drift = self.config.drift_speed;
        let bounds = self.bounds;
        let rng = &mut self.rng;
        self.particles = (0..count)
            .map(|_| Particle::spawn(&mut *rng, bounds, drift))
            .collect();
        log::debug!(
            "[field] resized to {:.0}x{:.0} -> {} particles",
            bounds.x,
            bounds.y,
            count
        );
    }

    /// Advance every particle by one frame.
    pub fn update(&mut self, pointer: &PointerState) {
        let target = pointer.target();
        let radius = self.config.attraction_radius;
        let force = self.config.pointer_force();
        for p in &mut self.particles {
            p.step(self.bounds, target, radius, force);
        }
    }

    /// Every unordered pair closer than the link distance. Recomputed on each
    /// call; O(n²) in the particle count.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let reach = self.config.link_distance;
        let glow = self.config.link_glow;
        let particles = &self.particles;
        particles.iter().enumerate().flat_map(move |(i, a)| {
            particles[i + 1..]
                .iter()
                .enumerate()
                .filter_map(move |(k, b)| {
                    let distance = a.position.distance(b.position);
                    if distance >= reach {
                        return None;
                    }
                    let brightness = a.brightness.max(b.brightness);
                    Some(Link {
                        from: i,
                        to: i + 1 + k,
                        distance,
                        brightness,
                        opacity: link_opacity(distance, reach, brightness, glow),
                        width: LINK_BASE_WIDTH + brightness,
                    })
                })
        })
    }
}

/// Opacity of a link of length `distance`: fades out with distance and
/// brightens with the brighter endpoint. Zero at and beyond `reach`.
#[inline]
pub fn link_opacity(distance: f32, reach: f32, brightness: f32, glow: f32) -> f32 {
    if reach <= 0.0 || distance >= reach {
        return 0.0;
    }
    (1.0 - distance / reach) * (LINK_BASE_OPACITY + brightness * glow)
}
