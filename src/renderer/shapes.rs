//! Shape generation for 2D primitives
//!
//! Every shape is emitted as a plain triangle list in screen space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

fn triangle(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));
}

/// Axis-aligned filled rectangle (two triangles)
pub fn rect(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    let tl = pos;
    let tr = pos + Vec2::new(size.x, 0.0);
    let bl = pos + Vec2::new(0.0, size.y);
    let br = pos + size;
    triangle(out, tl, tr, bl, color);
    triangle(out, bl, tr, br, color);
}

/// Rectangle with a vertical color gradient
pub fn gradient_rect(
    out: &mut Vec<Vertex>,
    pos: Vec2,
    size: Vec2,
    top: [f32; 4],
    bottom: [f32; 4],
) {
    let tl = Vertex::new(pos.x, pos.y, top);
    let tr = Vertex::new(pos.x + size.x, pos.y, top);
    let bl = Vertex::new(pos.x, pos.y + size.y, bottom);
    let br = Vertex::new(pos.x + size.x, pos.y + size.y, bottom);
    out.extend_from_slice(&[tl, tr, bl, bl, tr, br]);
}

/// Upward-pointing filled triangle inside the given box
pub fn peak(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    triangle(
        out,
        Vec2::new(pos.x + size.x / 2.0, pos.y),
        pos + size,
        Vec2::new(pos.x, pos.y + size.y),
        color,
    );
}

/// Diamond (square rotated 45 degrees plus `rotation`) around a center
pub fn diamond(out: &mut Vec<Vertex>, center: Vec2, half: f32, rotation: f32, color: [f32; 4]) {
    let corner = |angle: f32| center + Vec2::from_angle(angle + rotation) * half;
    let top = corner(-PI / 2.0);
    let right = corner(0.0);
    let bottom = corner(PI / 2.0);
    let left = corner(PI);
    triangle(out, top, right, bottom, color);
    triangle(out, top, bottom, left, color);
}

/// Filled circle
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    out.reserve((segments * 3) as usize);
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        triangle(
            out,
            center,
            center + Vec2::from_angle(theta1) * radius,
            center + Vec2::from_angle(theta2) * radius,
            color,
        );
    }
}

/// Ring (hollow circle)
pub fn ring(
    out: &mut Vec<Vertex>,
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) {
    out.reserve((segments * 6) as usize);
    for i in 0..segments {
        let dir1 = Vec2::from_angle((i as f32 / segments as f32) * 2.0 * PI);
        let dir2 = Vec2::from_angle(((i + 1) as f32 / segments as f32) * 2.0 * PI);

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        triangle(out, inner1, outer1, inner2, color);
        triangle(out, inner2, outer1, outer2, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_vertex_count_and_bounds() {
        let mut out = Vec::new();
        rect(&mut out, Vec2::new(10.0, 20.0), Vec2::new(5.0, 8.0), [1.0; 4]);
        assert_eq!(out.len(), 6);
        for v in &out {
            assert!((10.0..=15.0).contains(&v.position[0]));
            assert!((20.0..=28.0).contains(&v.position[1]));
        }
    }

    #[test]
    fn test_circle_segments() {
        let mut out = Vec::new();
        circle(&mut out, Vec2::ZERO, 3.0, [1.0; 4], 12);
        assert_eq!(out.len(), 36);
    }

    #[test]
    fn test_diamond_corners_at_radius() {
        let mut out = Vec::new();
        diamond(&mut out, Vec2::new(5.0, 5.0), 2.0, 0.3, [1.0; 4]);
        assert_eq!(out.len(), 6);
        for v in &out {
            let d = Vec2::from(v.position) - Vec2::new(5.0, 5.0);
            assert!((d.length() - 2.0).abs() < 1e-4);
        }
    }
}
