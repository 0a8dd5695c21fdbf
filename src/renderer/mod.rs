//! Rendering module
//!
//! Turns game state into a screen-space triangle list. Entities carry no
//! drawing code; [`draw`] matches on the entity kind instead, so the
//! simulation has no rendering dependency.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::sim::{Checkpoint, DataFragment, Direction, GameState, Particle, Platform, Player};

/// Anything in the world that can be drawn
#[derive(Debug, Clone, Copy)]
pub enum Drawable<'a> {
    Platform(&'a Platform),
    Checkpoint(&'a Checkpoint),
    Pickup(&'a DataFragment),
    Player(&'a Player),
}

/// Append the vertices for one entity
pub fn draw(item: Drawable<'_>, out: &mut Vec<Vertex>) {
    match item {
        Drawable::Platform(platform) => draw_platform(platform, out),
        Drawable::Checkpoint(checkpoint) => draw_checkpoint(checkpoint, out),
        Drawable::Pickup(fragment) => draw_fragment(fragment, out),
        Drawable::Player(player) => draw_player(player, out),
    }
}

fn draw_platform(platform: &Platform, out: &mut Vec<Vertex>) {
    let size = Vec2::new(platform.width, platform.height);
    shapes::rect(out, platform.pos, size, colors::PLATFORM);
    // Thin center stripe, inset from both ends
    let stripe_pos = platform.pos + Vec2::new(20.0, platform.height / 2.0 - 1.25);
    let stripe_size = Vec2::new((platform.width - 40.0).max(0.0), 2.5);
    shapes::rect(out, stripe_pos, stripe_size, colors::PLATFORM_STRIPE);
}

fn draw_checkpoint(checkpoint: &Checkpoint, out: &mut Vec<Vertex>) {
    let (body, ring) = if checkpoint.claimed {
        (colors::CHECKPOINT_CLAIMED, colors::CHECKPOINT_RING_CLAIMED)
    } else {
        (colors::CHECKPOINT, colors::CHECKPOINT_RING)
    };
    shapes::peak(out, checkpoint.pos, checkpoint.size, body);

    let radius = checkpoint.size.x / 4.0 * (1.0 + checkpoint.pulse.clamp(0.0, 1.0) * 0.3);
    for i in 1..=3 {
        let center = Vec2::new(
            checkpoint.pos.x + checkpoint.size.x / 2.0,
            checkpoint.pos.y + checkpoint.size.y / 4.0 * i as f32,
        );
        shapes::ring(out, center, radius - 1.25, radius + 1.25, ring, 16);
    }
}

fn draw_fragment(fragment: &DataFragment, out: &mut Vec<Vertex>) {
    if fragment.collected {
        return;
    }
    let center = fragment.rect().center();
    shapes::diamond(out, center, fragment.size / 2.0, fragment.rotation, colors::FRAGMENT);
    shapes::diamond(
        out,
        center,
        fragment.size / 4.0,
        fragment.rotation,
        colors::FRAGMENT_CORE,
    );
}

fn draw_player(player: &Player, out: &mut Vec<Vertex>) {
    shapes::rect(
        out,
        player.pos,
        Vec2::new(player.width, player.height),
        colors::PLAYER,
    );

    // Visor sits toward the facing side
    let visor_size = Vec2::new(player.width * 0.6, player.height * 0.15);
    let slack = player.width - visor_size.x;
    let visor_x = match player.last_direction {
        Direction::Right => player.pos.x + slack * 0.75,
        Direction::Left => player.pos.x + slack * 0.25,
    };
    let visor_pos = Vec2::new(visor_x, player.pos.y + player.height * 0.2);
    shapes::rect(out, visor_pos, visor_size, colors::VISOR);
}

fn draw_particle(particle: &Particle, out: &mut Vec<Vertex>) {
    let mut color = particle.color.rgba();
    color[3] = particle.alpha();
    shapes::circle(out, particle.pos, particle.size, color, 8);
}

/// Whether a horizontal span is at least partly on screen
fn on_screen(left: f32, right: f32, width: f32) -> bool {
    right >= 0.0 && left <= width
}

/// Draw the whole frame back to front
pub fn draw_scene(state: &GameState) -> Vec<Vertex> {
    let width = state.viewport.width;
    let mut out = Vec::new();

    shapes::gradient_rect(
        &mut out,
        Vec2::ZERO,
        Vec2::new(width, state.viewport.height),
        colors::BACKGROUND_TOP,
        colors::BACKGROUND_BOTTOM,
    );
    for planet in &state.backdrop.planets {
        shapes::circle(&mut out, planet.pos, planet.radius, planet.color, 32);
    }
    for star in state.backdrop.stars.iter().filter(|s| s.radius > 0.0) {
        shapes::circle(&mut out, star.pos, star.radius, colors::STAR, 6);
    }

    for platform in &state.platforms {
        let r = platform.rect();
        if on_screen(r.left(), r.right(), width) {
            draw(Drawable::Platform(platform), &mut out);
        }
    }
    for checkpoint in &state.checkpoints {
        let r = checkpoint.rect();
        if on_screen(r.left(), r.right(), width) {
            draw(Drawable::Checkpoint(checkpoint), &mut out);
        }
    }
    for fragment in &state.fragments {
        let r = fragment.rect();
        if on_screen(r.left(), r.right(), width) {
            draw(Drawable::Pickup(fragment), &mut out);
        }
    }
    for particle in &state.particles {
        draw_particle(particle, &mut out);
    }
    draw(Drawable::Player(&state.player), &mut out);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Settings, Viewport};

    fn state() -> GameState {
        GameState::new(Viewport::new(1280.0, 800.0), Settings::default()).unwrap()
    }

    #[test]
    fn test_collected_fragment_draws_nothing() {
        let state = state();
        let mut fragment = state.fragments[0].clone();
        let mut out = Vec::new();
        draw(Drawable::Pickup(&fragment), &mut out);
        assert_eq!(out.len(), 12);

        fragment.collected = true;
        out.clear();
        draw(Drawable::Pickup(&fragment), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_visor_follows_direction() {
        let state = state();
        let mut player = state.player.clone();
        let mut right = Vec::new();
        draw(Drawable::Player(&player), &mut right);
        player.last_direction = Direction::Left;
        let mut left = Vec::new();
        draw(Drawable::Player(&player), &mut left);
        // Body identical, visor shifted left
        assert_eq!(right[..6], left[..6]);
        assert!(left[6].position[0] < right[6].position[0]);
    }

    #[test]
    fn test_scene_culls_offscreen_platforms() {
        let state = state();
        let visible = state
            .platforms
            .iter()
            .filter(|p| on_screen(p.rect().left(), p.rect().right(), 1280.0))
            .count();
        assert!(visible < state.platforms.len());

        let scene = draw_scene(&state);
        let mut expected = Vec::new();
        for platform in state.platforms.iter().take(visible) {
            draw(Drawable::Platform(platform), &mut expected);
        }
        // Every visible platform shows up in the scene, in order
        assert!(
            scene
                .windows(expected.len())
                .any(|window| window == expected.as_slice())
        );
    }

    #[test]
    fn test_claimed_checkpoint_greyed() {
        let state = state();
        let mut checkpoint = state.checkpoints[0].clone();
        checkpoint.claimed = true;
        let mut out = Vec::new();
        draw(Drawable::Checkpoint(&checkpoint), &mut out);
        assert_eq!(out[0].color, colors::CHECKPOINT_CLAIMED);
    }
}
