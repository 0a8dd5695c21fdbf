//! Events emitted by the simulation for the presentation layer
//!
//! The core never touches the host directly. It queues events while ticking
//! and the host drains them through a [`HostSink`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Color tag for a visual effect burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectColor {
    /// Jump dust at the player's feet
    Cyan,
    /// Checkpoint claim
    Gold,
    /// Data fragment pickup
    Violet,
}

impl EffectColor {
    /// CSS-style hex string for hosts that draw with web colors
    pub fn as_hex(&self) -> &'static str {
        match self {
            EffectColor::Cyan => "#00e5ff",
            EffectColor::Gold => "#FFD700",
            EffectColor::Violet => "#9d4edd",
        }
    }

    pub fn rgba(&self) -> [f32; 4] {
        match self {
            EffectColor::Cyan => [0.0, 0.9, 1.0, 1.0],
            EffectColor::Gold => [1.0, 0.84, 0.0, 1.0],
            EffectColor::Violet => [0.62, 0.31, 0.87, 1.0],
        }
    }
}

/// Something the host should react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Show a message; `None` keeps it up until replaced
    ShowMessage {
        text: String,
        hide_after_ms: Option<u32>,
    },
    /// A transient message timed out
    HideMessage,
    ScoreChanged(u64),
    Effect { pos: Vec2, color: EffectColor },
    PauseChanged(bool),
}

/// Host-side consumer of game events.
///
/// Events queue on the [`GameState`](super::GameState) until the host drains
/// them with `flush_events`. The queue is not capped, so a host should flush
/// once per frame (or clear `events`) even if it ignores them.
pub trait HostSink {
    fn show_message(&mut self, text: &str, hide_after_ms: Option<u32>);
    fn hide_message(&mut self);
    fn score_changed(&mut self, score: u64);
    fn effect(&mut self, pos: Vec2, color: EffectColor);

    fn paused_changed(&mut self, _paused: bool) {}

    /// Route one event to the matching method
    fn dispatch(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ShowMessage {
                text,
                hide_after_ms,
            } => self.show_message(text, *hide_after_ms),
            GameEvent::HideMessage => self.hide_message(),
            GameEvent::ScoreChanged(score) => self.score_changed(*score),
            GameEvent::Effect { pos, color } => self.effect(*pos, *color),
            GameEvent::PauseChanged(paused) => self.paused_changed(*paused),
        }
    }
}

/// Sink that records every event, handy for hosts that batch and for tests
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl HostSink for EventLog {
    fn show_message(&mut self, text: &str, hide_after_ms: Option<u32>) {
        self.events.push(GameEvent::ShowMessage {
            text: text.to_string(),
            hide_after_ms,
        });
    }

    fn hide_message(&mut self) {
        self.events.push(GameEvent::HideMessage);
    }

    fn score_changed(&mut self, score: u64) {
        self.events.push(GameEvent::ScoreChanged(score));
    }

    fn effect(&mut self, pos: Vec2, color: EffectColor) {
        self.events.push(GameEvent::Effect { pos, color });
    }

    fn paused_changed(&mut self, paused: bool) {
        self.events.push(GameEvent::PauseChanged(paused));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Key};
    use crate::{Settings, Viewport};

    #[test]
    fn test_flush_preserves_order_and_drains() {
        let mut state = GameState::new(Viewport::new(1280.0, 800.0), Settings::default()).unwrap();
        let mut log = EventLog::default();

        state.key_down(Key::Jump);
        state.key_down(Key::Pause);
        state.flush_events(&mut log);

        assert_eq!(log.events[0], GameEvent::ScoreChanged(0));
        assert!(matches!(
            log.events[1],
            GameEvent::Effect {
                color: EffectColor::Cyan,
                ..
            }
        ));
        assert_eq!(log.events[2], GameEvent::PauseChanged(true));
        assert_eq!(log.events.len(), 3);
        assert!(state.events.is_empty());

        state.flush_events(&mut log);
        assert_eq!(log.events.len(), 3);
    }

    #[test]
    fn test_default_pause_handler_is_optional() {
        struct ScoreOnly(u64);
        impl HostSink for ScoreOnly {
            fn show_message(&mut self, _text: &str, _hide_after_ms: Option<u32>) {}
            fn hide_message(&mut self) {}
            fn score_changed(&mut self, score: u64) {
                self.0 = score;
            }
            fn effect(&mut self, _pos: Vec2, _color: EffectColor) {}
        }

        let mut sink = ScoreOnly(0);
        sink.dispatch(&GameEvent::PauseChanged(true));
        sink.dispatch(&GameEvent::ScoreChanged(1100));
        assert_eq!(sink.0, 1100);
    }

    #[test]
    fn test_effect_hex_colors() {
        assert_eq!(EffectColor::Gold.as_hex(), "#FFD700");
        assert_eq!(EffectColor::Violet.rgba()[3], 1.0);
    }
}
