use glam::Vec2;

// Default tuning for the cursor follower and page effects.

// Timing
pub const FRAME_DT: f32 = 1.0 / 60.0; // one nominal display frame (seconds)
pub const MAX_CATCHUP_FRAMES: f32 = 4.0; // frames integrated at most per advance

// Starting point before the first pointer sample (off screen)
pub const OFFSCREEN_START: Vec2 = Vec2::new(-100.0, -100.0);

// Core dot spring
pub const CORE_SPRING_STRENGTH: f32 = 0.2;
pub const CORE_DAMPING: f32 = 0.7;

// Glow halo spring, chasing the core dot
pub const GLOW_SPRING_STRENGTH: f32 = 0.11;
pub const GLOW_DAMPING: f32 = 0.76;

// Trail halo exponential smoothing, chasing the glow halo
pub const TRAIL_FACTOR: f32 = 0.06;

// Motion-direction bias for the outer layers
pub const LEAD_OFFSET: f32 = 8.0; // px
pub const GLOW_OFFSET_SCALE: f32 = 1.0;
pub const TRAIL_OFFSET_SCALE: f32 = 2.0;

// Visual sizing, indexed [core, glow, trail]
pub const BASE_DIAMETERS: [f32; 3] = [6.0, 40.0, 64.0]; // px

// Per-state scale, indexed [layer][idle, hovering, pressing]
pub const STATE_SCALES: [[f32; 3]; 3] = [
    [1.0, 1.5, 0.6], // core
    [1.0, 1.8, 0.8], // glow
    [1.0, 1.4, 0.9], // trail
];

// Glow intensity per state [idle, hovering, pressing]
pub const GLOW_INTENSITY: [f32; 3] = [0.35, 0.7, 0.5];

// Interactive element markers
pub const INTERACTIVE_TAGS: [&str; 2] = ["A", "BUTTON"];
pub const INTERACTIVE_CLASSES: [&str; 2] = ["magnetic", "cursor-pointer"];

// Magnetic elements
pub const MAGNETIC_STRENGTH: f32 = 0.3;
pub const MAGNETIC_EASE: f32 = 0.15;
pub const MAGNETIC_SETTLE_PX: f32 = 0.1; // stop animating below this per-axis gap
pub const MAGNETIC_CONTENT_FACTOR: f32 = 0.3; // inner content follows at this fraction

// Scroll spy
pub const SCROLL_SPY_OFFSET: f32 = 100.0; // px added to scroll position to place the marker line
pub const SCROLL_SPY_TOP_THRESHOLD: f32 = 200.0; // marker line below this falls back to the first section

// Override keys carry this prefix when read from host attributes
pub const OVERRIDE_PREFIX: &str = "cursor-";
