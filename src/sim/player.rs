//! Player body: position, velocity and gravity integration

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Aabb;
use super::state::Direction;
use crate::Viewport;
use crate::consts::*;

/// The player-controlled sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub jumping: bool,
    pub on_platform: bool,
    pub last_direction: Direction,
}

impl Player {
    /// Fresh player at the start position, standing
    pub fn spawn(viewport: &Viewport) -> Self {
        Self {
            pos: Vec2::new(
                viewport.scale(PLAYER_START_X),
                viewport.height - viewport.scale(PLAYER_START_FLOOR_OFFSET),
            ),
            vel: Vec2::ZERO,
            width: viewport.scale(PLAYER_SIZE),
            height: viewport.scale(PLAYER_SIZE),
            jumping: false,
            on_platform: true,
            last_direction: Direction::Right,
        }
    }

    #[inline]
    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(self.width, self.height))
    }

    /// Bottom-center point, where jump dust comes from
    #[inline]
    pub fn feet(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.width / 2.0, self.pos.y + self.height)
    }

    /// Advance one frame: apply velocity, then gravity or the floor clamp,
    /// then the ceiling rebound. `floor` is the world floor's y.
    pub fn integrate(&mut self, floor: f32) {
        self.pos += self.vel;

        if self.vel.x > 0.0 {
            self.last_direction = Direction::Right;
        } else if self.vel.x < 0.0 {
            self.last_direction = Direction::Left;
        }

        if self.pos.y + self.height + self.vel.y < floor {
            self.vel.y += GRAVITY;
            self.on_platform = false;
        } else {
            self.vel.y = 0.0;
            self.pos.y = floor - self.height;
            self.jumping = false;
            self.on_platform = true;
        }

        // Rebound off the top of the screen instead of sticking to it
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = GRAVITY;
        }
    }

    /// Launch upward if standing. Returns whether the jump happened.
    pub fn jump(&mut self) -> bool {
        if !self.on_platform {
            return false;
        }
        self.vel.y = JUMP_FORCE;
        self.jumping = true;
        self.on_platform = false;
        true
    }
}
