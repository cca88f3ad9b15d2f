//! Colour schemes for the two visual modes.

use crate::error::FieldError;
use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::str::FromStr;

/// Externally selected colour scheme. The field never changes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualMode {
    #[default]
    Dark,
    Light,
}

impl VisualMode {
    #[inline]
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            VisualMode::Dark
        } else {
            VisualMode::Light
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            VisualMode::Dark => "dark",
            VisualMode::Light => "light",
        }
    }
}

impl FromStr for VisualMode {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(VisualMode::Dark),
            "light" => Ok(VisualMode::Light),
            other => Err(FieldError::UnknownMode(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = if self.a.is_finite() {
            self.a.clamp(0.0, 1.0)
        } else {
            0.0
        };
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

/// Gradient stops; every gradient here has at most three.
pub type GradientStops = SmallVec<[ColorStop; 3]>;

/// Alpha as `base + brightness * gain`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct AlphaRamp {
    base: f32,
    gain: f32,
}

impl AlphaRamp {
    #[inline]
    fn at(self, brightness: f32) -> f32 {
        self.base + brightness * self.gain
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub primary: Rgba,
    pub secondary: Rgba,
    /// Multiplier on link opacity; light backgrounds need stronger lines.
    pub link_gain: f32,
    core: AlphaRamp,
    halo: AlphaRamp,
}

const DARK: Palette = Palette {
    primary: Rgba::rgb(142, 45, 226),
    secondary: Rgba::rgb(0, 201, 255),
    link_gain: 1.0,
    core: AlphaRamp { base: 0.4, gain: 0.6 },
    halo: AlphaRamp { base: 0.2, gain: 0.4 },
};

const LIGHT: Palette = Palette {
    primary: Rgba::rgb(209, 196, 233),
    secondary: Rgba::rgb(129, 212, 250),
    link_gain: 1.5,
    core: AlphaRamp { base: 0.6, gain: 0.4 },
    halo: AlphaRamp { base: 0.4, gain: 0.3 },
};

impl Palette {
    pub fn for_mode(mode: VisualMode) -> &'static Palette {
        match mode {
            VisualMode::Dark => &DARK,
            VisualMode::Light => &LIGHT,
        }
    }

    /// Effective link alpha for a raw link opacity.
    #[inline]
    pub fn link_alpha(&self, opacity: f32) -> f32 {
        opacity * self.link_gain
    }

    /// Linear gradient along a link, primary at the `from` end.
    pub fn link_stops(&self, opacity: f32) -> GradientStops {
        let a = self.link_alpha(opacity);
        smallvec![
            ColorStop {
                offset: 0.0,
                color: self.primary.with_alpha(a),
            },
            ColorStop {
                offset: 1.0,
                color: self.secondary.with_alpha(a),
            },
        ]
    }

    /// Radial glow for a particle, fading to transparent at the outer edge.
    pub fn glow_stops(&self, brightness: f32) -> GradientStops {
        smallvec![
            ColorStop {
                offset: 0.0,
                color: self.primary.with_alpha(self.core.at(brightness)),
            },
            ColorStop {
                offset: 0.5,
                color: self.secondary.with_alpha(self.halo.at(brightness)),
            },
            ColorStop {
                offset: 1.0,
                color: self.secondary.with_alpha(0.0),
            },
        ]
    }
}
