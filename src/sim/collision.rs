//! Player versus platform collision resolution
//!
//! Platforms are checked one at a time in level order with no spatial index.
//! Each platform can apply at most one correction (landing, ceiling bump or
//! side push) and later platforms overwrite earlier ones on the same axis.

use super::player::Player;
use super::state::Platform;
use crate::consts::{GRAVITY, SIDE_TOLERANCE};

/// Which correction a platform applied this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Landed,
    Bumped,
    PushedLeft,
    PushedRight,
}

/// Resolve the player against a single platform
pub fn resolve_platform(player: &mut Player, platform: &Platform) -> Option<Contact> {
    let body = player.rect();
    let solid = platform.rect();

    if !body.overlaps_x(&solid) {
        return None;
    }

    let vel = player.vel;

    // Landing: falling onto the top edge this frame
    if vel.y >= 0.0 && body.bottom() <= solid.top() && body.bottom() + vel.y >= solid.top() {
        player.vel.y = 0.0;
        player.pos.y = solid.top() - player.height;
        player.jumping = false;
        player.on_platform = true;
        return Some(Contact::Landed);
    }

    // Ceiling bump: rising into the bottom edge this frame
    if vel.y < 0.0 && body.top() >= solid.bottom() && body.top() + vel.y <= solid.bottom() {
        player.vel.y = GRAVITY;
        player.pos.y = solid.bottom();
        return Some(Contact::Bumped);
    }

    // Side push: vertically inside the body, moving into an edge
    if body.bottom() > solid.top() + SIDE_TOLERANCE && body.top() < solid.bottom() - SIDE_TOLERANCE
    {
        if vel.x > 0.0 && body.right() - vel.x <= solid.left() {
            player.pos.x = solid.left() - player.width;
            player.vel.x = 0.0;
            return Some(Contact::PushedLeft);
        }
        if vel.x < 0.0 && body.left() - vel.x >= solid.right() {
            player.pos.x = solid.right();
            player.vel.x = 0.0;
            return Some(Contact::PushedRight);
        }
    }

    None
}

/// Resolve the player against every platform in order.
///
/// Returns true if the player landed on any platform. When nothing was
/// landed on and the player is above the floor, `on_platform` is cleared so
/// walking off a ledge starts a fall.
pub fn resolve_platforms(player: &mut Player, platforms: &[Platform], floor: f32) -> bool {
    let mut landed = false;
    for platform in platforms {
        if resolve_platform(player, platform) == Some(Contact::Landed) {
            landed = true;
        }
    }

    if !landed && player.rect().bottom() < floor {
        player.on_platform = false;
    }

    landed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Viewport;
    use glam::Vec2;

    const FLOOR: f32 = 800.0;

    fn viewport() -> Viewport {
        Viewport::new(1280.0, FLOOR)
    }

    fn platform(x: f32, y: f32) -> Platform {
        Platform::new(Vec2::new(x, y), &viewport())
    }

    fn player_at(x: f32, y: f32, vel: Vec2) -> Player {
        let mut p = Player::spawn(&viewport());
        p.pos = Vec2::new(x, y);
        p.vel = vel;
        p.on_platform = false;
        p
    }

    #[test]
    fn test_landing_snaps_to_top() {
        // Platform spans y 500..525; player bottom at 498 falling at 8
        let plat = platform(100.0, 500.0);
        let mut p = player_at(150.0, 498.0 - 40.0, Vec2::new(0.0, 8.0));
        p.jumping = true;

        let landed = resolve_platforms(&mut p, &[plat], FLOOR);

        assert!(landed);
        assert_eq!(p.rect().bottom(), 500.0);
        assert_eq!(p.vel.y, 0.0);
        assert!(p.on_platform);
        assert!(!p.jumping);
    }

    #[test]
    fn test_no_landing_when_not_reaching_top() {
        let plat = platform(100.0, 500.0);
        let mut p = player_at(150.0, 400.0, Vec2::new(0.0, 2.0));
        assert_eq!(resolve_platform(&mut p, &plat), None);
        assert_eq!(p.pos.y, 400.0);
    }

    #[test]
    fn test_no_collision_without_horizontal_overlap() {
        let plat = platform(100.0, 500.0);
        // Right edge exactly on the platform's left edge
        let mut p = player_at(60.0, 458.0, Vec2::new(0.0, 8.0));
        assert_eq!(resolve_platform(&mut p, &plat), None);
    }

    #[test]
    fn test_ceiling_bump_rebounds() {
        let plat = platform(100.0, 500.0);
        // Top at 530, rising at 10 -> would cross 525
        let mut p = player_at(150.0, 530.0, Vec2::new(0.0, -10.0));
        assert_eq!(resolve_platform(&mut p, &plat), Some(Contact::Bumped));
        assert_eq!(p.pos.y, 525.0);
        assert_eq!(p.vel.y, GRAVITY);
    }

    #[test]
    fn test_side_push_from_left() {
        let plat = platform(100.0, 500.0);
        // Moved 5 right this frame and now 3 into the platform's left edge
        let mut p = player_at(63.0, 495.0, Vec2::new(5.0, 0.0));
        assert_eq!(resolve_platform(&mut p, &plat), Some(Contact::PushedLeft));
        assert_eq!(p.pos.x, 60.0);
        assert_eq!(p.vel.x, 0.0);
    }

    #[test]
    fn test_side_push_from_right() {
        let plat = platform(100.0, 500.0);
        let mut p = player_at(327.0, 495.0, Vec2::new(-5.0, 0.0));
        assert_eq!(resolve_platform(&mut p, &plat), Some(Contact::PushedRight));
        assert_eq!(p.pos.x, 330.0);
        assert_eq!(p.vel.x, 0.0);
    }

    #[test]
    fn test_side_tolerance_skips_corner() {
        let plat = platform(100.0, 500.0);
        // Bottom only 3 below the top edge: inside the tolerance band
        let mut p = player_at(63.0, 463.0, Vec2::new(5.0, 0.0));
        assert_eq!(resolve_platform(&mut p, &plat), None);
        assert_eq!(p.pos.x, 63.0);
    }

    #[test]
    fn test_walking_off_ledge_clears_on_platform() {
        let plat = platform(100.0, 500.0);
        let mut p = player_at(400.0, 460.0, Vec2::ZERO);
        p.on_platform = true;
        assert!(!resolve_platforms(&mut p, &[plat], FLOOR));
        assert!(!p.on_platform);
    }

    #[test]
    fn test_on_floor_keeps_on_platform() {
        let mut p = player_at(400.0, FLOOR - 40.0, Vec2::ZERO);
        p.on_platform = true;
        resolve_platforms(&mut p, &[], FLOOR);
        assert!(p.on_platform);
    }

    #[test]
    fn test_resolution_depends_on_platform_order() {
        // Two stacked platforms both reachable this frame: whichever comes
        // first in list order takes the landing
        let upper = platform(100.0, 500.0);
        let lower = platform(100.0, 505.0);

        let mut p = player_at(150.0, 458.0, Vec2::new(0.0, 10.0));
        resolve_platforms(&mut p, &[upper.clone(), lower.clone()], FLOOR);
        assert_eq!(p.rect().bottom(), 500.0);

        let mut p = player_at(150.0, 458.0, Vec2::new(0.0, 10.0));
        resolve_platforms(&mut p, &[lower, upper], FLOOR);
        assert_eq!(p.rect().bottom(), 505.0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_crossing_top_edge_lands(
                x in 70.0f32..320.0,
                vy in 0.5f32..20.0,
                frac in 0.0f32..0.9,
            ) {
                let plat = platform(100.0, 500.0);
                let mut p = player_at(x, 460.0 - frac * vy, Vec2::new(0.0, vy));
                prop_assert_eq!(resolve_platform(&mut p, &plat), Some(Contact::Landed));
                prop_assert_eq!(p.rect().bottom(), 500.0);
                prop_assert_eq!(p.vel.y, 0.0);
                prop_assert!(p.on_platform);
            }

            #[test]
            fn prop_rising_never_lands(x in 70.0f32..320.0, vy in -20.0f32..-0.1, y in 400.0f32..460.0) {
                let plat = platform(100.0, 500.0);
                let mut p = player_at(x, y, Vec2::new(0.0, vy));
                prop_assert_ne!(resolve_platform(&mut p, &plat), Some(Contact::Landed));
            }
        }
    }
}
