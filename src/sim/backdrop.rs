//! Decorative background bodies
//!
//! Stars and planets never interact with the player. They follow world
//! scrolling at a reduced parallax factor to fake depth.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Viewport;
use crate::consts::PLANET_PARALLAX;

/// Extra parallax every star gets on top of its own speed
const STAR_PARALLAX_BASE: f32 = 0.05;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    /// Drift speed, also the star's parallax factor
    pub speed: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    pub pos: Vec2,
    pub radius: f32,
    pub color: [f32; 4],
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Backdrop {
    pub stars: Vec<Star>,
    pub planets: Vec<Planet>,
}

impl Backdrop {
    pub fn generate(viewport: &Viewport, star_count: usize, rng: &mut Pcg32) -> Self {
        let stars = (0..star_count).map(|_| random_star(viewport, rng)).collect();
        let planets = vec![
            Planet {
                pos: Vec2::ZERO,
                radius: 60.0,
                color: [0.54, 0.17, 0.89, 1.0],
            },
            Planet {
                pos: Vec2::ZERO,
                radius: 40.0,
                color: [0.29, 0.0, 0.51, 1.0],
            },
        ];
        let mut backdrop = Self { stars, planets };
        backdrop.anchor_planets(viewport);
        backdrop
    }

    /// Put planets back at their home spots for this viewport
    pub fn anchor_planets(&mut self, viewport: &Viewport) {
        const HOMES: [(f32, f32); 2] = [(0.8, 0.3), (0.2, 0.7)];
        for (planet, (fx, fy)) in self.planets.iter_mut().zip(HOMES) {
            planet.pos = Vec2::new(viewport.width * fx, viewport.height * fy);
        }
    }

    /// Scatter stars across a new viewport
    pub fn rescatter_stars(&mut self, viewport: &Viewport, rng: &mut Pcg32) {
        for star in &mut self.stars {
            star.pos = Vec2::new(
                rng.random::<f32>() * viewport.width,
                rng.random::<f32>() * viewport.height,
            );
        }
    }

    /// Follow a world shift of `dx`. Stars leaving one edge re-enter at the
    /// other, up to `jitter` further out.
    pub fn scroll(&mut self, dx: f32, width: f32, jitter: f32, rng: &mut Pcg32) {
        if dx == 0.0 {
            return;
        }
        for planet in &mut self.planets {
            planet.pos.x += dx * PLANET_PARALLAX;
        }
        for star in &mut self.stars {
            star.pos.x += dx * (star.speed + STAR_PARALLAX_BASE);
            if star.pos.x < -star.radius {
                star.pos.x = width + star.radius + rng.random::<f32>() * jitter;
            } else if star.pos.x > width + star.radius {
                star.pos.x = -star.radius - rng.random::<f32>() * jitter;
            }
        }
    }

    /// Idle leftward drift when the world is not scrolling
    pub fn drift(&mut self, width: f32) {
        for star in &mut self.stars {
            star.pos.x -= star.speed * 0.5;
            if star.pos.x < -star.radius {
                star.pos.x = width + star.radius;
            }
        }
    }
}

fn random_star(viewport: &Viewport, rng: &mut Pcg32) -> Star {
    Star {
        pos: Vec2::new(
            rng.random::<f32>() * viewport.width,
            rng.random::<f32>() * viewport.height,
        ),
        radius: rng.random::<f32>() * 1.5,
        speed: rng.random::<f32>() * 0.2,
    }
}
