// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};

// ====================
// Field Model
// ====================
/// Perpendicular kick added per tick to a charged particle inside a magnet region.
pub const FIELD_STRENGTH: f32 = 0.05;
/// Fringe kick strength relative to the in-region field strength.
pub const FRINGE_BOOST: f32 = 1.2;
/// Ticks over which the fringe effect decays linearly to zero after exit.
pub const FRINGE_SPAN: u32 = 100;

// ====================
// Detector Geometry
// ====================
/// Ring radii of the reference detector, innermost first.
pub const DEFAULT_LAYER_RADII: [f32; 5] = [60.0, 100.0, 140.0, 180.0, 220.0];
/// Half-width of the radial band around a ring that counts as a crossing.
/// A particle whose per-tick displacement exceeds this band can pass a ring
/// without registering; that tunneling is accepted behavior.
pub const CROSSING_TOLERANCE: f32 = 5.0;
/// Half-extent of the square play area; particles beyond it are retired.
pub const PLAY_AREA_HALF: f32 = 250.0;

// ====================
// Emission
// ====================
/// World units a particle travels per tick.
pub const BASE_SPEED: f32 = 2.0;

// ====================
// Visual Effects
// ====================
/// Draw/gap length for dashed photon trails, in trail arc length.
pub const DASH_LENGTH: f32 = 8.0;
pub const SPARK_COUNT: usize = 20;
pub const SPARK_RADIUS_MIN: f32 = 10.0;
pub const SPARK_RADIUS_MAX: f32 = 30.0;

// ====================
// App Loop
// ====================
/// Pacing of the headless simulation loop, one tick per interval.
pub const TICK_INTERVAL_MS: u64 = 16;

/// Runtime parameters carried by a session. Defaults mirror the constants
/// above; init_config.toml may override the emission and play-area values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    pub base_speed: f32,
    pub field_strength: f32,
    pub fringe_boost: f32,
    pub fringe_span: u32,
    pub crossing_tolerance: f32,
    pub half_width: f32,
    pub half_height: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED,
            field_strength: FIELD_STRENGTH,
            fringe_boost: FRINGE_BOOST,
            fringe_span: FRINGE_SPAN,
            crossing_tolerance: CROSSING_TOLERANCE,
            half_width: PLAY_AREA_HALF,
            half_height: PLAY_AREA_HALF,
        }
    }
}
