/// Host page wiring and loop tuning for the web front-end.
///
/// Simulation constants live in `field_core::constants`; these only concern
/// how the fields are attached to the page.
// Canvases mounted automatically at start-up, with their default preset
pub const AUTO_MOUNTS: [(&str, &str); 2] =
    [("hero-canvas", "hero"), ("neural-canvas", "background")];

// Canvas attributes
pub const PRESET_ATTRIBUTE: &str = "data-field-preset";
pub const OVERRIDE_ATTRIBUTE_PREFIX: &str = "data-field-";

// Class on the document element that selects the dark palette
pub const DARK_CLASS: &str = "dark";

// Frame statistics
pub const STATS_INTERVAL_FRAMES: u32 = 600; // ~10 s at 60 Hz
pub const FRAME_BUDGET_MS: u64 = 4; // share of a 16.6 ms frame a background may use
