use crate::constants::*;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub base_size: f32,
    pub size: f32,
    pub brightness: f32,
    pub target_brightness: f32,
}

impl Particle {
    /// A dark particle at rest size.
    pub fn new(position: Vec2, velocity: Vec2, base_size: f32) -> Self {
        Self {
            position,
            velocity,
            base_size,
            size: base_size,
            brightness: 0.0,
            target_brightness: 0.0,
        }
    }

    /// Random position inside `bounds`, random size, and a slow drift in a
    /// random direction bounded by `drift` per axis.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, drift: f32) -> Self {
        let position = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * drift,
            (rng.gen::<f32>() - 0.5) * 2.0 * drift,
        );
        let base_size = BASE_SIZE_MIN + rng.gen::<f32>() * (BASE_SIZE_MAX - BASE_SIZE_MIN);
        Self::new(position, velocity, base_size)
    }

    /// One full simulation step. `pointer` is `None` while the pointer is
    /// outside the surface.
    pub fn step(
        &mut self,
        bounds: Vec2,
        pointer: Option<Vec2>,
        attraction_radius: f32,
        force_scale: f32,
    ) {
        self.advance();
        self.reflect(bounds);
        self.attract(pointer, attraction_radius, force_scale);
        self.ease_brightness();
        self.damp_speed();
        self.refresh_size();
    }

    #[inline]
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Bounce off the surface edges, losing a little energy.
    pub fn reflect(&mut self, bounds: Vec2) {
        if self.position.x < 0.0 || self.position.x > bounds.x {
            self.velocity.x *= WALL_RESTITUTION;
            self.position.x = self.position.x.clamp(0.0, bounds.x);
        }
        if self.position.y < 0.0 || self.position.y > bounds.y {
            self.velocity.y *= WALL_RESTITUTION;
            self.position.y = self.position.y.clamp(0.0, bounds.y);
        }
    }

    /// Pull toward the pointer and set the brightness target from proximity.
    /// A negative `force_scale` pushes away instead.
    pub fn attract(&mut self, pointer: Option<Vec2>, radius: f32, force_scale: f32) {
        let Some(target) = pointer else {
            self.target_brightness = 0.0;
            return;
        };
        let delta = target - self.position;
        let strength = influence(delta.length(), radius);
        if strength > 0.0 {
            self.target_brightness = strength;
            // Coincident with the pointer: no direction, no impulse.
            self.velocity += delta.normalize_or_zero() * (strength * force_scale);
        } else {
            self.target_brightness = 0.0;
        }
    }

    #[inline]
    pub fn ease_brightness(&mut self) {
        self.brightness += (self.target_brightness - self.brightness) * BRIGHTNESS_EASE;
    }

    /// Geometric slow-down while above the speed ceiling. Not a clamp.
    #[inline]
    pub fn damp_speed(&mut self) {
        if self.speed() > SPEED_CEILING {
            self.velocity *= SPEED_DAMPING;
        }
    }

    #[inline]
    pub fn refresh_size(&mut self) {
        self.size = self.base_size * (1.0 + self.brightness * SIZE_GLOW_GAIN);
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Normalized attraction strength: 1 on the pointer, 0 at and beyond `radius`.
#[inline]
pub fn influence(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / radius).max(0.0)
}
