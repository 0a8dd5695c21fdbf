//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation by exactly one frame. Steps run
//! in a fixed order because each one reads positions written by the last:
//! integrate, collide, scroll, checkpoints, fragments, cosmetics.

use super::collision::resolve_platforms;
use super::event::EffectColor;
use super::particles;
use super::state::GameState;
use crate::consts::*;

/// How far (at most) a wrapped star re-enters beyond the screen edge
const STAR_REENTRY_JITTER: f32 = 50.0;

const MISSION_COMPLETE: &str = "You've completed the mission!";

/// Advance the game state by one frame. Does nothing while paused.
pub fn tick(state: &mut GameState) {
    if state.session.paused {
        return;
    }

    state.time_ticks += 1;
    let floor = state.viewport.height;

    state.player.integrate(floor);
    resolve_platforms(&mut state.player, &state.platforms, floor);

    let scrolled = apply_scroll(state);
    claim_checkpoint(state);
    collect_fragments(state);

    animate(state, scrolled);
}

impl GameState {
    /// Advance one frame (see [`tick`])
    pub fn tick(&mut self) {
        tick(self);
    }
}

/// Soft camera: move the player inside the dead-zone band, past it move the
/// world instead. Sets the player's horizontal velocity for the next frame
/// and returns the world shift applied this frame.
pub fn apply_scroll(state: &mut GameState) -> f32 {
    let width = state.viewport.width;
    let buffer = width * SCROLL_BUFFER_FRACTION;
    let gate = state.session.gate_active;
    let player = &mut state.player;

    let mut dx = 0.0;
    if state.session.right_held && gate {
        if player.pos.x < width - buffer - player.width {
            player.vel.x = GAME_SPEED;
        } else {
            player.vel.x = 0.0;
            dx = -GAME_SPEED;
        }
    } else if state.session.left_held && gate {
        if player.pos.x > buffer {
            player.vel.x = -GAME_SPEED;
        } else {
            player.vel.x = 0.0;
            dx = GAME_SPEED;
        }
    } else {
        player.vel.x = 0.0;
    }

    if dx != 0.0 {
        state.shift_world(dx, STAR_REENTRY_JITTER);
    }
    dx
}

/// Claim the next checkpoint in order if the player is touching it
fn claim_checkpoint(state: &mut GameState) {
    if !state.session.gate_active {
        return;
    }

    let next_id = state.last_claimed_id() + 1;
    let body = state.player.rect();
    let Some(checkpoint) = state
        .checkpoints
        .iter_mut()
        .find(|c| !c.claimed && c.id == next_id && c.rect().intersects(&body))
    else {
        return;
    };
    if !checkpoint.claim() {
        return;
    }
    let id = checkpoint.id;
    let center = checkpoint.rect().center();

    state.effect(center, EffectColor::Gold);
    state.add_score(CHECKPOINT_SCORE);
    log::info!("Checkpoint {} claimed, score {}", id, state.session.score);

    if state.all_claimed() {
        state.session.gate_active = false;
        state.session.left_held = false;
        state.session.right_held = false;
        state.player.vel.x = 0.0;
        log::info!("Mission complete with score {}", state.session.score);
        state.show_message(MISSION_COMPLETE.to_string(), None);
    } else {
        let delay = state.settings.message_hide_ms;
        state.show_message(format!("Checkpoint {id} activated! Keep going!"), Some(delay));
    }
}

/// Collect every fragment the player overlaps
fn collect_fragments(state: &mut GameState) {
    let body = state.player.rect();
    let picked: Vec<_> = state
        .fragments
        .iter_mut()
        .filter(|f| !f.collected && f.rect().intersects(&body))
        .filter_map(|f| f.collect().then(|| f.rect().center()))
        .collect();

    for center in picked {
        state.add_score(FRAGMENT_SCORE);
        state.effect(center, EffectColor::Violet);
    }
}

/// Purely visual updates plus the message timer
fn animate(state: &mut GameState, scrolled: f32) {
    particles::update(&mut state.particles);

    for fragment in state.fragments.iter_mut().filter(|f| !f.collected) {
        fragment.rotation += 0.025;
    }
    for checkpoint in &mut state.checkpoints {
        checkpoint.animate();
    }
    if scrolled == 0.0 && !state.settings.reduced_motion {
        state.backdrop.drift(state.viewport.width);
    }

    state.update_message();
}
