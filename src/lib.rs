//! Void Runner - a side-scrolling checkpoint platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, platform collisions, scrolling, checkpoints)
//! - `renderer`: Vertex generation for every entity type
//! - `settings`: Data-driven preferences

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Downward acceleration (units/frame²)
    pub const GRAVITY: f32 = 0.5;
    /// Vertical velocity applied on jump (negative = up)
    pub const JUMP_FORCE: f32 = -14.0;
    /// Horizontal speed of the player and of world scrolling (units/frame)
    pub const GAME_SPEED: f32 = 5.0;

    /// Viewport height at and above which sizes are used unscaled
    pub const BASE_HEIGHT: f32 = 800.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_FLOOR_OFFSET: f32 = 80.0;

    /// Platform width is not scaled; height is
    pub const PLATFORM_WIDTH: f32 = 230.0;
    pub const PLATFORM_HEIGHT: f32 = 25.0;
    /// Vertical tolerance band for side collisions (avoids corner snagging)
    pub const SIDE_TOLERANCE: f32 = 5.0;

    pub const CHECKPOINT_WIDTH: f32 = 45.0;
    pub const CHECKPOINT_HEIGHT: f32 = 75.0;
    pub const CHECKPOINT_SCORE: u64 = 1000;

    pub const FRAGMENT_SIZE: f32 = 22.0;
    pub const FRAGMENT_SCORE: u64 = 100;
    /// Fragment spawn height above its platform (base + random extra)
    pub const FRAGMENT_LIFT: f32 = 30.0;
    pub const FRAGMENT_LIFT_JITTER: f32 = 20.0;

    /// Fraction of viewport width on either side that triggers world scroll
    pub const SCROLL_BUFFER_FRACTION: f32 = 0.4;
    /// Parallax factor for planets
    pub const PLANET_PARALLAX: f32 = 0.1;

    /// Frame rate the host is expected to drive `tick` at
    pub const FRAMES_PER_SECOND: u32 = 60;
}

/// Host viewport in pixels. Callers guarantee positive dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Scale a gameplay size to this viewport (see [`proportional_size`])
    #[inline]
    pub fn scale(&self, size: f32) -> f32 {
        proportional_size(size, self.height)
    }
}

/// Proportional sizing against the baseline height.
///
/// Sizes pass through unchanged on tall viewports and shrink (rounded up) on
/// short ones, so the layout keeps its proportions.
#[inline]
pub fn proportional_size(size: f32, viewport_height: f32) -> f32 {
    if viewport_height < consts::BASE_HEIGHT {
        (size * viewport_height / consts::BASE_HEIGHT).ceil()
    } else {
        size
    }
}

/// Convert a millisecond delay into whole frames at the nominal frame rate.
/// Saturates at `u32::MAX` frames.
#[inline]
pub fn ms_to_frames(ms: u32) -> u32 {
    let frames = (u64::from(ms) * u64::from(consts::FRAMES_PER_SECOND)).div_ceil(1000);
    u32::try_from(frames).unwrap_or(u32::MAX)
}
