//! Per-call-site tuning for a particle field.
//!
//! Both backgrounds on the page run the same simulation; they differ only in
//! density, reach and how strongly the pointer pulls. Each is a `FieldConfig`
//! preset, optionally adjusted by key/value overrides read from the host
//! element.

use crate::constants::MAX_PARTICLES_CEILING;
use crate::error::FieldError;
use std::str::FromStr;

/// Where a field takes its surface size and pointer events from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Size from the canvas' own box; pointer events on the canvas only.
    Element,
    /// Size from the whole document; pointer events from the window.
    Document,
}

impl FromStr for Anchor {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "element" => Ok(Anchor::Element),
            "document" => Ok(Anchor::Document),
            other => Err(FieldError::InvalidValue {
                key: "anchor".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Which way the pointer pushes nearby particles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerResponse {
    #[default]
    Attract,
    Repel,
}

impl FromStr for PointerResponse {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "attract" => Ok(PointerResponse::Attract),
            "repel" => Ok(PointerResponse::Repel),
            other => Err(FieldError::InvalidValue {
                key: "pointer-response".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub max_particles: usize,
    /// Surface area (square CSS pixels) that earns one particle.
    pub area_per_particle: f32,
    pub link_distance: f32,
    pub attraction_radius: f32,
    pub force_scale: f32,
    /// Half-width of the symmetric initial velocity range.
    pub drift_speed: f32,
    /// Weight of endpoint brightness inside link opacity.
    pub link_glow: f32,
    pub anchor: Anchor,
    pub pointer_response: PointerResponse,
}

impl FieldConfig {
    /// Dense field behind the landing section.
    pub const HERO: FieldConfig = FieldConfig {
        max_particles: 60,
        area_per_particle: 8000.0,
        link_distance: 120.0,
        attraction_radius: 150.0,
        force_scale: 0.15,
        drift_speed: 0.2,
        link_glow: 0.35,
        anchor: Anchor::Element,
        pointer_response: PointerResponse::Attract,
    };

    /// Sparse full-page field.
    pub const BACKGROUND: FieldConfig = FieldConfig {
        max_particles: 80,
        area_per_particle: 25000.0,
        link_distance: 150.0,
        attraction_radius: 200.0,
        force_scale: 0.2,
        drift_speed: 0.15,
        link_glow: 0.30,
        anchor: Anchor::Document,
        pointer_response: PointerResponse::Attract,
    };

    /// Full-page field that scatters away from the pointer instead of
    /// gathering around it.
    pub const SCATTER: FieldConfig = FieldConfig {
        max_particles: 80,
        area_per_particle: 8000.0,
        link_distance: 150.0,
        attraction_radius: 120.0,
        force_scale: 0.2,
        drift_speed: 0.6,
        link_glow: 0.30,
        anchor: Anchor::Document,
        pointer_response: PointerResponse::Repel,
    };

    pub fn preset(name: &str) -> Result<Self, FieldError> {
        match name.trim() {
            "hero" => Ok(Self::HERO),
            "background" => Ok(Self::BACKGROUND),
            "scatter" => Ok(Self::SCATTER),
            other => Err(FieldError::UnknownPreset(other.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.max_particles > MAX_PARTICLES_CEILING {
            return Err(FieldError::OutOfRange {
                key: "max-particles",
                expected: "at most 400",
            });
        }
        if !(self.area_per_particle.is_finite() && self.area_per_particle > 0.0) {
            return Err(FieldError::OutOfRange {
                key: "area-per-particle",
                expected: "a positive number",
            });
        }
        if !(self.link_distance.is_finite() && self.link_distance > 0.0) {
            return Err(FieldError::OutOfRange {
                key: "link-distance",
                expected: "a positive number",
            });
        }
        if !(self.attraction_radius.is_finite() && self.attraction_radius > 0.0) {
            return Err(FieldError::OutOfRange {
                key: "attraction-radius",
                expected: "a positive number",
            });
        }
        let non_negative = [
            ("force-scale", self.force_scale),
            ("drift-speed", self.drift_speed),
            ("link-glow", self.link_glow),
        ];
        for (key, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(FieldError::OutOfRange {
                    key,
                    expected: "a non-negative number",
                });
            }
        }
        Ok(())
    }

    /// Apply one kebab-case override. The config is not re-validated here;
    /// see [`FieldConfig::with_overrides`].
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), FieldError> {
        match key {
            "max-particles" => self.max_particles = parse_value(key, value)?,
            "area-per-particle" => self.area_per_particle = parse_value(key, value)?,
            "link-distance" => self.link_distance = parse_value(key, value)?,
            "attraction-radius" => self.attraction_radius = parse_value(key, value)?,
            "force-scale" => self.force_scale = parse_value(key, value)?,
            "drift-speed" => self.drift_speed = parse_value(key, value)?,
            "link-glow" => self.link_glow = parse_value(key, value)?,
            "anchor" => self.anchor = value.parse()?,
            "pointer-response" => self.pointer_response = value.parse()?,
            other => return Err(FieldError::UnknownSetting(other.to_string())),
        }
        Ok(())
    }

    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in overrides {
            self.apply_override(key, value)?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Signed per-frame impulse scale: positive pulls toward the pointer,
    /// negative pushes away.
    #[inline]
    pub fn pointer_force(&self) -> f32 {
        match self.pointer_response {
            PointerResponse::Attract => self.force_scale,
            PointerResponse::Repel => -self.force_scale,
        }
    }

    /// `min(max_particles, floor(width * height / area_per_particle))`.
    ///
    /// Degenerate surfaces (zero, negative or non-finite extents) get no
    /// particles.
    pub fn particle_count(&self, width: f32, height: f32) -> usize {
        if self.area_per_particle.is_nan() || self.area_per_particle <= 0.0 {
            return 0;
        }
        let w = sanitize_extent(width) as f64;
        let h = sanitize_extent(height) as f64;
        let uncapped = (w * h / self.area_per_particle as f64).floor();
        if uncapped >= self.max_particles as f64 {
            self.max_particles
        } else {
            uncapped as usize
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::HERO
    }
}

/// Clamp a surface extent to a usable, non-negative value.
#[inline]
pub fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, FieldError> {
    value.trim().parse().map_err(|_| FieldError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
