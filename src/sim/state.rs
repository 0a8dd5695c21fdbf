//! Game state and core simulation types
//!
//! Entities are plain data. Behavior that touches more than one entity lives
//! in the tick; drawing lives in the renderer.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::backdrop::Backdrop;
use super::event::{EffectColor, GameEvent, HostSink};
use super::level::{LevelDef, LevelError, build_level};
use super::particles::Particle;
use super::player::Player;
use super::rect::Aabb;
use crate::consts::*;
use crate::settings::Settings;
use crate::{Viewport, ms_to_frames};

/// Facing of the player, used for the visor cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

/// A solid platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn new(pos: Vec2, viewport: &Viewport) -> Self {
        Self {
            pos,
            width: PLATFORM_WIDTH,
            height: viewport.scale(PLATFORM_HEIGHT),
        }
    }

    #[inline]
    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(self.width, self.height))
    }
}

/// An ordered checkpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub claimed: bool,
    /// Glow pulse phase in [0, 1], cosmetic
    #[serde(default)]
    pub pulse: f32,
    #[serde(default = "default_pulse_dir")]
    pub pulse_dir: f32,
}

fn default_pulse_dir() -> f32 {
    1.0
}

impl Checkpoint {
    pub fn new(id: u32, pos: Vec2, viewport: &Viewport) -> Self {
        Self {
            id,
            pos,
            size: Vec2::new(
                viewport.scale(CHECKPOINT_WIDTH),
                viewport.scale(CHECKPOINT_HEIGHT),
            ),
            claimed: false,
            pulse: 0.0,
            pulse_dir: 1.0,
        }
    }

    #[inline]
    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Mark as claimed. Returns false if it already was.
    pub fn claim(&mut self) -> bool {
        if self.claimed {
            return false;
        }
        self.claimed = true;
        true
    }

    /// Advance the glow pulse, bouncing between 0 and 1
    pub fn animate(&mut self) {
        self.pulse += 0.05 * self.pulse_dir;
        if !(0.0..=1.0).contains(&self.pulse) {
            self.pulse_dir = -self.pulse_dir;
        }
    }
}

/// A collectible data fragment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataFragment {
    pub pos: Vec2,
    pub size: f32,
    pub collected: bool,
    /// Spin angle (radians), cosmetic
    pub rotation: f32,
}

impl DataFragment {
    pub fn new(pos: Vec2, rotation: f32, viewport: &Viewport) -> Self {
        Self {
            pos,
            size: viewport.scale(FRAGMENT_SIZE),
            collected: false,
            rotation,
        }
    }

    #[inline]
    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.size))
    }

    /// Mark as collected. Returns false if it already was.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }
}

/// Message currently shown by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    /// Frames until auto-hide; `None` means it stays up
    pub frames_left: Option<u32>,
}

/// Mutable per-session state shared by input handling and the tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub score: u64,
    pub paused: bool,
    /// Movement input is accepted while true; closes for good once the final
    /// checkpoint is claimed
    pub gate_active: bool,
    pub left_held: bool,
    pub right_held: bool,
    pub message: Option<Message>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            score: 0,
            paused: false,
            gate_active: true,
            left_held: false,
            right_held: false,
            message: None,
        }
    }
}

fn cosmetic_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed for level layout (fragment scatter, backdrop)
    pub seed: u64,
    pub viewport: Viewport,
    pub settings: Settings,
    pub level: LevelDef,
    pub player: Player,
    /// Platforms in level order; collision resolution depends on this order
    pub platforms: Vec<Platform>,
    /// Checkpoints sorted by id
    pub checkpoints: Vec<Checkpoint>,
    pub fragments: Vec<DataFragment>,
    pub backdrop: Backdrop,
    pub session: Session,
    /// Simulation frame counter
    pub time_ticks: u64,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,
    /// Events waiting for the host
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Runtime randomness for cosmetics only
    #[serde(skip, default = "cosmetic_rng")]
    pub(crate) fx_rng: Pcg32,
}

impl GameState {
    /// New game on the built-in level
    pub fn new(viewport: Viewport, settings: Settings) -> Result<Self, LevelError> {
        Self::with_level(LevelDef::default(), viewport, settings)
    }

    /// New game on a custom level
    pub fn with_level(
        level: LevelDef,
        viewport: Viewport,
        settings: Settings,
    ) -> Result<Self, LevelError> {
        level.validate()?;

        let seed = settings.level_seed;
        let mut state = Self {
            seed,
            viewport,
            player: Player::spawn(&viewport),
            platforms: Vec::new(),
            checkpoints: Vec::new(),
            fragments: Vec::new(),
            backdrop: Backdrop::default(),
            session: Session::default(),
            time_ticks: 0,
            particles: Vec::new(),
            events: Vec::new(),
            fx_rng: Pcg32::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15),
            settings,
            level,
        };
        state.rebuild_level();
        state.backdrop = Backdrop::generate(
            &state.viewport,
            state.settings.star_count(),
            &mut state.layout_rng(),
        );
        state.emit(GameEvent::ScoreChanged(0));
        Ok(state)
    }

    fn layout_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }

    /// Rebuild platforms, checkpoints and fragments from the level definition
    pub(crate) fn rebuild_level(&mut self) {
        let mut rng = self.layout_rng();
        let built = build_level(&self.level, &self.viewport, &mut rng);
        self.platforms = built.platforms;
        self.checkpoints = built.checkpoints;
        self.fragments = built.fragments;
        self.backdrop.anchor_planets(&self.viewport);
    }

    /// Reset everything for a fresh run on the same level
    pub fn restart(&mut self) {
        log::info!("Restarting level");
        self.player = Player::spawn(&self.viewport);
        self.session = Session::default();
        self.particles.clear();
        self.time_ticks = 0;
        self.rebuild_level();
        self.emit(GameEvent::HideMessage);
        self.emit(GameEvent::ScoreChanged(0));
    }

    /// Adapt to a new viewport.
    ///
    /// The level is rebuilt from its definition. The player's distance from
    /// the floor, the current scroll offset and claimed/collected flags carry
    /// over.
    pub fn resize(&mut self, viewport: Viewport) {
        let old = self.viewport;
        log::info!(
            "Resize {}x{} -> {}x{}",
            old.width,
            old.height,
            viewport.width,
            viewport.height
        );

        let scroll = self.scroll_offset();
        let claimed: Vec<bool> = self.checkpoints.iter().map(|c| c.claimed).collect();
        let collected: Vec<bool> = self.fragments.iter().map(|f| f.collected).collect();

        let floor_gap = old.height - self.player.rect().bottom();
        self.viewport = viewport;
        self.player.pos.y = (viewport.height - floor_gap - self.player.height)
            .min(viewport.height - self.player.height)
            .max(0.0);

        self.rebuild_level();
        self.shift_world(scroll, 0.0);

        for (cp, was) in self.checkpoints.iter_mut().zip(claimed) {
            cp.claimed = was;
        }
        for (frag, was) in self.fragments.iter_mut().zip(collected) {
            frag.collected = was;
        }
        self.backdrop.rescatter_stars(&viewport, &mut self.fx_rng);
    }

    /// How far the world has been scrolled, recovered from the first platform
    pub fn scroll_offset(&self) -> f32 {
        match (self.platforms.first(), self.level.platforms.first()) {
            (Some(platform), Some(def)) => platform.pos.x - def.x,
            _ => 0.0,
        }
    }

    /// Translate every world entity horizontally; backdrop bodies move by
    /// their parallax factor. `star_jitter` is the max extra distance a
    /// wrapped star re-enters off-screen.
    pub(crate) fn shift_world(&mut self, dx: f32, star_jitter: f32) {
        for platform in &mut self.platforms {
            platform.pos.x += dx;
        }
        for checkpoint in &mut self.checkpoints {
            checkpoint.pos.x += dx;
        }
        for fragment in &mut self.fragments {
            fragment.pos.x += dx;
        }
        self.backdrop
            .scroll(dx, self.viewport.width, star_jitter, &mut self.fx_rng);
    }

    /// Highest claimed checkpoint id, 0 if none
    pub fn last_claimed_id(&self) -> u32 {
        self.checkpoints
            .iter()
            .filter(|c| c.claimed)
            .map(|c| c.id)
            .max()
            .unwrap_or(0)
    }

    pub fn all_claimed(&self) -> bool {
        self.checkpoints.iter().all(|c| c.claimed)
    }

    pub fn score(&self) -> u64 {
        self.session.score
    }

    pub fn is_paused(&self) -> bool {
        self.session.paused
    }

    pub fn gate_active(&self) -> bool {
        self.session.gate_active
    }

    /// Whether the host should keep scheduling frames
    pub fn wants_frames(&self) -> bool {
        !self.session.paused
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub(crate) fn add_score(&mut self, points: u64) {
        self.session.score += points;
        self.emit(GameEvent::ScoreChanged(self.session.score));
    }

    /// Queue a visual effect and spawn its particle burst
    pub(crate) fn effect(&mut self, pos: Vec2, color: EffectColor) {
        self.emit(GameEvent::Effect { pos, color });
        let cap = self.settings.max_particles();
        super::particles::burst(&mut self.particles, pos, color, cap, &mut self.fx_rng);
    }

    /// Show a message, replacing whatever is up (and its timer)
    pub(crate) fn show_message(&mut self, text: String, hide_after_ms: Option<u32>) {
        self.session.message = Some(Message {
            text: text.clone(),
            frames_left: hide_after_ms.map(ms_to_frames),
        });
        self.emit(GameEvent::ShowMessage {
            text,
            hide_after_ms,
        });
    }

    /// Count down the transient message, hiding it when its time is up
    pub(crate) fn update_message(&mut self) {
        let expired = match self.session.message.as_mut() {
            Some(Message {
                frames_left: Some(frames),
                ..
            }) => {
                *frames = frames.saturating_sub(1);
                *frames == 0
            }
            _ => false,
        };
        if expired {
            self.session.message = None;
            self.emit(GameEvent::HideMessage);
        }
    }

    /// Drain queued events into the host, in emission order. Hosts are
    /// expected to call this every frame; nothing else empties the queue.
    pub fn flush_events(&mut self, sink: &mut impl HostSink) {
        for event in self.events.drain(..) {
            sink.dispatch(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(Viewport::new(1280.0, 800.0), Settings::default()).unwrap()
    }

    #[test]
    fn test_checkpoint_claim_once() {
        let vp = Viewport::new(1280.0, 800.0);
        let mut cp = Checkpoint::new(1, Vec2::ZERO, &vp);
        assert!(cp.claim());
        assert!(!cp.claim());
        assert!(cp.claimed);
    }

    #[test]
    fn test_fragment_collect_once() {
        let vp = Viewport::new(1280.0, 800.0);
        let mut frag = DataFragment::new(Vec2::ZERO, 0.0, &vp);
        assert!(frag.collect());
        assert!(!frag.collect());
    }

    #[test]
    fn test_checkpoint_pulse_stays_near_unit_range() {
        let vp = Viewport::new(1280.0, 800.0);
        let mut cp = Checkpoint::new(1, Vec2::ZERO, &vp);
        for _ in 0..200 {
            cp.animate();
            assert!(cp.pulse > -0.1 && cp.pulse < 1.1);
        }
    }

    #[test]
    fn test_new_state_defaults() {
        let state = state();
        assert_eq!(state.score(), 0);
        assert!(state.gate_active());
        assert!(!state.is_paused());
        assert!(state.wants_frames());
        assert_eq!(state.last_claimed_id(), 0);
        assert_eq!(state.platforms.len(), 18);
        assert_eq!(state.checkpoints.len(), 3);
        assert_eq!(state.scroll_offset(), 0.0);
    }

    #[test]
    fn test_transient_message_hides_after_delay() {
        let mut state = state();
        state.events.clear();
        state.show_message("hello".to_string(), Some(100)); // 6 frames
        for _ in 0..5 {
            state.update_message();
        }
        assert!(state.session.message.is_some());
        state.update_message();
        assert!(state.session.message.is_none());
        assert_eq!(state.events.last(), Some(&GameEvent::HideMessage));
    }

    #[test]
    fn test_newer_message_supersedes_timer() {
        let mut state = state();
        state.show_message("first".to_string(), Some(100));
        for _ in 0..5 {
            state.update_message();
        }
        state.show_message("second".to_string(), None);
        for _ in 0..50 {
            state.update_message();
        }
        let message = state.session.message.as_ref().unwrap();
        assert_eq!(message.text, "second");
    }

    #[test]
    fn test_resize_preserves_floor_gap_and_flags() {
        let mut state = state();
        state.player.pos.y = 800.0 - 200.0 - state.player.height;
        state.shift_world(-50.0, 0.0);
        state.checkpoints[0].claimed = true;
        state.fragments[0].collected = true;

        state.resize(Viewport::new(1280.0, 1000.0));

        assert_eq!(state.player.rect().bottom(), 1000.0 - 200.0);
        assert_eq!(state.scroll_offset(), -50.0);
        assert!(state.checkpoints[0].claimed);
        assert!(state.fragments[0].collected);
    }

    #[test]
    fn test_resize_clamps_player_into_viewport() {
        let mut state = state();
        // 700 above the floor cannot fit in a 400-high viewport
        state.player.pos.y = 800.0 - 700.0 - state.player.height;
        state.resize(Viewport::new(1280.0, 400.0));
        assert_eq!(state.player.pos.y, 0.0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = state();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.platforms.len(), state.platforms.len());
        assert!(back.particles.is_empty());
    }
}
