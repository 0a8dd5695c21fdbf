//! Level layout from declarative definitions
//!
//! A level is described by platform offsets and checkpoint anchors. Building
//! turns those into positioned entities for the current viewport. The whole
//! level is rebuilt whenever the viewport changes rather than rescaled.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::{Checkpoint, DataFragment, Platform};
use crate::Viewport;
use crate::consts::*;

/// A platform: absolute x and height of its top above the floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformDef {
    pub x: f32,
    pub y_offset: f32,
}

/// A checkpoint anchored over a platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckpointDef {
    pub platform_index: usize,
    /// Horizontal offset from the platform's center
    pub x_offset: f32,
    /// Gap between the platform top and the checkpoint's base
    pub height_above_platform: f32,
    pub id: u32,
}

/// Declarative level description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub platforms: Vec<PlatformDef>,
    pub checkpoints: Vec<CheckpointDef>,
}

/// Problems with a level description
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    #[error("level has no platforms")]
    NoPlatforms,
    #[error("checkpoint {id} refers to platform {index}, but the level has {count} platforms")]
    PlatformIndexOutOfRange { id: u32, index: usize, count: usize },
    #[error("checkpoint ids must run 1..=N without gaps: expected {expected}, found {found}")]
    NonSequentialIds { expected: u32, found: u32 },
}

const DEFAULT_PLATFORMS: [(f32, f32); 18] = [
    (250.0, 180.0),
    (500.0, 220.0),
    (750.0, 260.0),
    (1000.0, 300.0),
    (1250.0, 340.0),
    (1480.0, 300.0),
    (1700.0, 360.0),
    (2000.0, 320.0),
    (2300.0, 350.0),
    (2600.0, 380.0),
    (2900.0, 420.0),
    (3200.0, 460.0),
    (3500.0, 500.0),
    (3800.0, 540.0),
    (4100.0, 520.0),
    (4400.0, 560.0),
    (4700.0, 580.0),
    (5000.0, 600.0),
];

impl Default for LevelDef {
    fn default() -> Self {
        let platforms = DEFAULT_PLATFORMS
            .iter()
            .map(|&(x, y_offset)| PlatformDef { x, y_offset })
            .collect();
        let checkpoints = [(6, 1), (13, 2), (17, 3)]
            .iter()
            .map(|&(platform_index, id)| CheckpointDef {
                platform_index,
                x_offset: 0.0,
                height_above_platform: 85.0,
                id,
            })
            .collect();
        Self {
            platforms,
            checkpoints,
        }
    }
}

impl LevelDef {
    /// Check that every checkpoint anchors to a real platform and that ids
    /// form the sequence 1..=N
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.platforms.is_empty() {
            return Err(LevelError::NoPlatforms);
        }

        for def in &self.checkpoints {
            if def.platform_index >= self.platforms.len() {
                return Err(LevelError::PlatformIndexOutOfRange {
                    id: def.id,
                    index: def.platform_index,
                    count: self.platforms.len(),
                });
            }
        }

        let mut ids: Vec<u32> = self.checkpoints.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        for (expected, found) in (1u32..).zip(ids) {
            if found != expected {
                return Err(LevelError::NonSequentialIds { expected, found });
            }
        }

        Ok(())
    }
}

/// Entities produced by [`build_level`]
#[derive(Debug, Clone)]
pub struct BuiltLevel {
    pub platforms: Vec<Platform>,
    /// Sorted by id
    pub checkpoints: Vec<Checkpoint>,
    pub fragments: Vec<DataFragment>,
}

/// Place every entity for the given viewport.
///
/// Fragment scatter draws from `rng`, so the same seed always yields the same
/// layout. Expects a validated definition; checkpoints pointing at missing
/// platforms are skipped.
pub fn build_level(def: &LevelDef, viewport: &Viewport, rng: &mut Pcg32) -> BuiltLevel {
    let platforms: Vec<Platform> = def
        .platforms
        .iter()
        .map(|p| {
            Platform::new(
                Vec2::new(p.x, viewport.height - viewport.scale(p.y_offset)),
                viewport,
            )
        })
        .collect();

    let cp_width = viewport.scale(CHECKPOINT_WIDTH);
    let cp_height = viewport.scale(CHECKPOINT_HEIGHT);
    let mut checkpoints: Vec<Checkpoint> = def
        .checkpoints
        .iter()
        .filter_map(|cp| {
            let Some(platform) = platforms.get(cp.platform_index) else {
                log::warn!(
                    "Checkpoint {} skipped: no platform {}",
                    cp.id,
                    cp.platform_index
                );
                return None;
            };
            let x = platform.pos.x + platform.width / 2.0 - cp_width / 2.0 + cp.x_offset;
            let y = platform.pos.y - viewport.scale(cp.height_above_platform) - cp_height;
            Some(Checkpoint::new(cp.id, Vec2::new(x, y), viewport))
        })
        .collect();
    checkpoints.sort_by_key(|c| c.id);

    let lift = viewport.scale(FRAGMENT_LIFT);
    let jitter = viewport.scale(FRAGMENT_LIFT_JITTER);
    let mut fragments = Vec::new();
    // The starting platform never carries fragments
    for platform in platforms.iter().skip(1) {
        let count = if rng.random_bool(0.6) { 1 } else { 2 };
        for _ in 0..count {
            let x = platform.pos.x
                + platform.width * 0.2
                + rng.random::<f32>() * platform.width * 0.6;
            let y = platform.pos.y - lift - rng.random::<f32>() * jitter;
            let rotation = rng.random::<f32>() * std::f32::consts::TAU;
            fragments.push(DataFragment::new(Vec2::new(x, y), rotation, viewport));
        }
    }

    log::debug!(
        "Built level: {} platforms, {} checkpoints, {} fragments",
        platforms.len(),
        checkpoints.len(),
        fragments.len()
    );

    BuiltLevel {
        platforms,
        checkpoints,
        fragments,
    }
}
