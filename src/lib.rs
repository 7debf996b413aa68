//! Moto Dash - a side-scrolling obstacle-run arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, terrain, spawning, collisions)
//!
//! Rendering, asset loading, fonts and raw input translation live in external
//! front-ends: they consume the read-only [`sim::Snapshot`] after each tick
//! and feed abstract [`sim::Action`]s back into the session.

pub mod sim;

pub use sim::{Action, GameSession, Mode, Snapshot};

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz reference rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Track dimensions (single/duo layout)
    pub const TRACK_WIDTH: f32 = 1200.0;
    pub const TRACK_HEIGHT: f32 = 800.0;
    /// Ground band height, measured up from the bottom edge
    pub const GROUND_OFFSET: f32 = 140.0;

    /// Vehicle physics - per-tick semantics at the 60 Hz reference rate
    pub const GRAVITY: f32 = 0.8;
    pub const JUMP_IMPULSE: f32 = -18.0;
    pub const VEHICLE_WIDTH: f32 = 60.0;
    pub const VEHICLE_HEIGHT: f32 = 40.0;
    /// Rider positions along the track
    pub const PLAYER_ONE_X: f32 = 100.0;
    pub const PLAYER_TWO_X: f32 = 220.0;

    /// Obstacles and slopes scroll left at this many track units per tick
    pub const SCROLL_SPEED: f32 = 6.0;

    /// Slope segment footprint
    pub const SLOPE_WIDTH: f32 = 150.0;
    pub const SLOPE_HEIGHT: f32 = 80.0;

    /// Score trickle per survived tick
    pub const SCORE_PER_TICK: f32 = 0.2;
}

/// Track geometry shared by every component that places entities.
///
/// Passed by value instead of living in statics so front-ends can run the
/// classic and duo layouts side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Horizontal playfield extent
    pub width: f32,
    /// Vertical playfield extent
    pub height: f32,
    /// Ground band height, measured up from the bottom edge
    pub ground_offset: f32,
}

impl Track {
    /// The 1200x800 layout used by the single and duo modes
    pub fn duo() -> Self {
        Self {
            width: consts::TRACK_WIDTH,
            height: consts::TRACK_HEIGHT,
            ground_offset: consts::GROUND_OFFSET,
        }
    }

    /// The earlier 800x400 layout with the shallow ground band
    pub fn classic() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            ground_offset: 70.0,
        }
    }

    /// Vertical coordinate of flat ground (screen coords, y grows downward)
    #[inline]
    pub fn baseline(&self) -> f32 {
        self.height - self.ground_offset
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::duo()
    }
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
