//! Particle bursts for visual effects (not gameplay-affecting)

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::event::EffectColor;

/// Particles spawned per effect
pub const BURST_SIZE: usize = 10;
/// Particle lifetime in frames
pub const PARTICLE_LIFE: u32 = 40;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: EffectColor,
    /// Frames remaining
    pub life: u32,
}

impl Particle {
    /// Remaining life in [0, 1], used for fading
    pub fn alpha(&self) -> f32 {
        self.life as f32 / PARTICLE_LIFE as f32
    }
}

/// Spawn a burst at `pos`, never exceeding `cap` live particles
pub fn burst(
    particles: &mut Vec<Particle>,
    pos: Vec2,
    color: EffectColor,
    cap: usize,
    rng: &mut Pcg32,
) {
    let room = cap.saturating_sub(particles.len()).min(BURST_SIZE);
    for _ in 0..room {
        particles.push(Particle {
            pos,
            vel: Vec2::new(
                (rng.random::<f32>() - 0.5) * 5.0,
                (rng.random::<f32>() - 0.5) * 5.0,
            ),
            size: rng.random::<f32>() * 3.0 + 2.0,
            color,
            life: PARTICLE_LIFE,
        });
    }
}

/// Move and age particles, dropping expired ones
pub fn update(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life = particle.life.saturating_sub(1);
    }
    particles.retain(|p| p.life > 0);
}
