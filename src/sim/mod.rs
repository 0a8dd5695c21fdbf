//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical frame per tick
//! - Seeded RNG only
//! - Stable iteration order (platforms in level order, checkpoints by id)
//! - No rendering or platform dependencies

pub mod backdrop;
pub mod collision;
pub mod event;
pub mod input;
pub mod level;
pub mod particles;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use backdrop::{Backdrop, Planet, Star};
pub use collision::{Contact, resolve_platform, resolve_platforms};
pub use event::{EffectColor, EventLog, GameEvent, HostSink};
pub use input::Key;
pub use level::{BuiltLevel, CheckpointDef, LevelDef, LevelError, PlatformDef, build_level};
pub use particles::Particle;
pub use player::Player;
pub use rect::Aabb;
pub use state::{Checkpoint, DataFragment, Direction, GameState, Message, Platform, Session};
pub use tick::{apply_scroll, tick};
