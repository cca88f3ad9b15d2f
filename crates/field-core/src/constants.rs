// Physics and paint tuning shared by every field preset.
//
// Per-preset knobs (counts, radii, force) live in `FieldConfig`; the values
// here are the same for both call sites.

// Motion
pub const WALL_RESTITUTION: f32 = -0.9; // velocity multiplier on wall contact
pub const SPEED_CEILING: f32 = 2.0; // damping kicks in above this speed
pub const SPEED_DAMPING: f32 = 0.95; // per-frame multiplier while above the ceiling

// Brightness
pub const BRIGHTNESS_EASE: f32 = 0.1; // fraction of the gap closed per frame
pub const SIZE_GLOW_GAIN: f32 = 0.5; // full brightness grows a particle by 50%

// Spawn
pub const BASE_SIZE_MIN: f32 = 1.0;
pub const BASE_SIZE_MAX: f32 = 3.0;

// Density: the link pass is O(n²). 400 particles is ~80k pair checks, which
// stays inside a few milliseconds of a 16.6 ms frame.
pub const MAX_PARTICLES_CEILING: usize = 400;

// Links
pub const LINK_BASE_OPACITY: f32 = 0.15;
pub const LINK_BASE_WIDTH: f32 = 0.5;

// Glow gradient reaches transparent at this multiple of the particle size
pub const GLOW_RADIUS_FACTOR: f32 = 2.0;
