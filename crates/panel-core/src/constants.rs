//! Tuning constants for both panel screens.
//!
//! Initial values, walk magnitudes, thresholds and per-tick chances live here
//! so the update code reads as behavior rather than magic numbers. Threshold
//! groups carry `const` assertions so a bad edit fails to compile.

// =============================================================================
// Cadence
// =============================================================================

/// Tactical screen data update period.
pub const TACTICAL_TICK_MS: u64 = 1000;
/// Analysis screen data update period.
pub const ANALYSIS_TICK_MS: u64 = 800;
/// System clock refresh period (both screens).
pub const CLOCK_TICK_MS: u64 = 1000;
/// Most ticks a single interval may fire per advance; older backlog is dropped.
pub const MAX_CATCH_UP: u32 = 5;

// =============================================================================
// Tactical gauges
// =============================================================================

pub const SYNC_RATIO_INITIAL: f64 = 88.7;
pub const SYNC_RATIO_WALK: f64 = 0.5;

pub const PLUG_DEPTH_INITIAL: f64 = 145.8;
pub const PLUG_DEPTH_WALK: f64 = 0.2;

pub const AT_FIELD_INITIAL: f64 = 95.0;
pub const AT_FIELD_WALK: f64 = 1.0;
pub const AT_FIELD_BIAS: f64 = 0.4; // skews the field slowly downward

pub const TARGET_DISTANCE_INITIAL: f64 = 1200.0;
pub const TARGET_APPROACH_MAX: f64 = 15.0; // metres closed per tick at most

// =============================================================================
// Power
// =============================================================================

pub const BATTERY_FULL: f64 = 100.0;
pub const BATTERY_RECHARGE_PER_TICK: f64 = 0.1;
pub const INTERNAL_POWER_TICKS: u32 = 5 * 60;
pub const INTERNAL_POWER_CHANCE: f64 = 0.01;

// =============================================================================
// Events
// =============================================================================

pub const DAMAGE_CHANCE: f64 = 0.02;
pub const COMM_CH1_CHANCE: f64 = 0.10;
pub const COMM_CH2_CHANCE: f64 = 0.08;

pub const DAMAGE_PARTS: [&str; 4] = ["LEFT ARM", "RIGHT LEG", "HEAD UNIT", "CHEST PLATE"];

pub const COMM_CH1_SPEAKER: &str = "MISATO K.";
pub const COMM_CH1_LINES: [&str; 5] = [
    "Analyzing pattern...",
    "Hold position.",
    "Roger.",
    "Energy levels?",
    "Watch out!",
];
pub const COMM_CH2_SPEAKER: &str = "RITSUKO A.";
pub const COMM_CH2_LINES: [&str; 5] = [
    "Data inconclusive.",
    "Running diagnostics.",
    "Cross-referencing MAGI.",
    "Possible interference.",
    "Confirmed.",
];

/// Most recent log entries kept on screen.
pub const LOG_CAPACITY: usize = 50;

// =============================================================================
// Thresholds
// =============================================================================

pub const SYNC_CRITICAL_BELOW: f64 = 40.0;
pub const SYNC_WARNING_BELOW: f64 = 70.0;
const _: () = assert!(SYNC_CRITICAL_BELOW < SYNC_WARNING_BELOW);

pub const AT_FIELD_FLUCTUATING_BELOW: f64 = 50.0;
const _: () = assert!(AT_FIELD_FLUCTUATING_BELOW > 0.0);

pub const BATTERY_CRITICAL_BELOW: f64 = 20.0;
pub const BATTERY_LOW_BELOW: f64 = 50.0;
const _: () = assert!(BATTERY_CRITICAL_BELOW < BATTERY_LOW_BELOW);

/// Internal timer turns red under this many seconds.
pub const TIMER_RED_BELOW: u32 = 60;

pub const DENSITY_CONDENSING_FROM: f64 = 30.0;
pub const DENSITY_COLLAPSE_FROM: f64 = 80.0;
const _: () = assert!(DENSITY_CONDENSING_FROM < DENSITY_COLLAPSE_FROM);

pub const PATTERN_BLUE_FROM: f64 = 75.0;

// =============================================================================
// Analysis screen
// =============================================================================

pub const SPHERE_DIAMETER_INITIAL: f64 = 680.0;
pub const SPHERE_DIAMETER_MIN: f64 = 600.0;
pub const SPHERE_DIAMETER_MAX: f64 = 760.0;
pub const SPHERE_DIAMETER_WALK: f64 = 0.6;

pub const SHADOW_DENSITY_INITIAL: f64 = 72.0;
pub const SHADOW_DENSITY_WALK: f64 = 1.2;

pub const PATTERN_CONFIDENCE_INITIAL: f64 = 82.0;
pub const PATTERN_CONFIDENCE_WALK: f64 = 3.0;

/// Seconds; counted from accrued data-tick time, not from tick count.
pub const MISSION_COUNTDOWN_SECS: u32 = 10 * 60;

pub const CASPER_CYCLE_CHANCE: f64 = 0.25;

// =============================================================================
// Wave canvas
// =============================================================================

pub const WAVE_LINE_WIDTH: f64 = 1.5;
pub const WAVE_TIME_STEP: f64 = 0.5;
pub const GLITCH_CHANCE: f64 = 0.03;
pub const GLITCH_MAX_SHIFT: f64 = 2.0;
pub const GLITCH_BLEND_ALPHA: f64 = 0.1;
pub const GLITCH_BAR_COUNT: usize = 3;
pub const GLITCH_BAR_ALPHA: f64 = 0.3;
pub const GLITCH_BAR_MIN_CHANNEL: f64 = 155.0;

// =============================================================================
// Sphere scene
// =============================================================================

pub const SPHERE_RADIUS: f32 = 1.0;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 24;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 16;
pub const SPHERE_ROT_X_PER_FRAME: f32 = 0.003;
pub const SPHERE_ROT_Y_PER_FRAME: f32 = 0.005;
pub const CAMERA_Z: f32 = 3.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
