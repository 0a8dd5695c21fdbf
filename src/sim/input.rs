//! Logical input keys and their handlers
//!
//! The host maps its raw key events to [`Key`] and forwards them here.
//! Input that makes no sense right now (moving while paused, anything after
//! the mission is complete) is dropped silently.

use serde::{Deserialize, Serialize};

use super::event::{EffectColor, GameEvent};
use super::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Jump,
    Pause,
}

impl Key {
    /// Map a host key name (as in DOM `KeyboardEvent.key`) to a logical key
    pub fn from_host(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "arrowleft" | "a" => Some(Key::Left),
            "arrowright" | "d" => Some(Key::Right),
            "arrowup" | "w" | " " | "space" => Some(Key::Jump),
            "escape" | "p" => Some(Key::Pause),
            _ => None,
        }
    }
}

impl GameState {
    pub fn key_down(&mut self, key: Key) {
        if key == Key::Pause {
            self.toggle_pause();
            return;
        }
        if !self.accepts_movement() {
            return;
        }
        match key {
            Key::Left => self.session.left_held = true,
            Key::Right => self.session.right_held = true,
            Key::Jump => self.jump(),
            Key::Pause => {}
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.session.left_held = false,
            Key::Right => self.session.right_held = false,
            Key::Jump | Key::Pause => {}
        }
    }

    /// Whether movement and jump input are honored right now
    fn accepts_movement(&self) -> bool {
        !self.session.paused && self.session.gate_active
    }

    /// Jump if standing, with a dust burst at the player's feet. Ignored while
    /// paused or after the mission is complete.
    pub fn jump(&mut self) {
        if self.accepts_movement() && self.player.jump() {
            let feet = self.player.feet();
            self.effect(feet, EffectColor::Cyan);
        }
    }

    pub fn toggle_pause(&mut self) {
        self.session.paused = !self.session.paused;
        log::info!(
            "Game {}",
            if self.session.paused { "paused" } else { "resumed" }
        );
        self.emit(GameEvent::PauseChanged(self.session.paused));
    }
}
