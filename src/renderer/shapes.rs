//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Aabb;

/// Filled axis-aligned rectangle from its top-left corner and size
pub fn quad(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    push_quad(&mut vertices, pos, size, color);
    vertices
}

/// Append a filled rectangle as two triangles
pub fn push_quad(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    let max = pos + size;
    out.push(Vertex::new(pos.x, pos.y, color));
    out.push(Vertex::new(max.x, pos.y, color));
    out.push(Vertex::new(pos.x, max.y, color));

    out.push(Vertex::new(pos.x, max.y, color));
    out.push(Vertex::new(max.x, pos.y, color));
    out.push(Vertex::new(max.x, max.y, color));
}

pub fn push_rect(out: &mut Vec<Vertex>, rect: &Aabb, color: [f32; 4]) {
    push_quad(out, rect.pos, rect.size, color);
}

/// Line segment as a thin quad `width` pixels across
pub fn push_line(out: &mut Vec<Vertex>, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let b1 = from - perp;
    let a2 = to + perp;
    let b2 = to - perp;

    out.push(Vertex::new(a1.x, a1.y, color));
    out.push(Vertex::new(b1.x, b1.y, color));
    out.push(Vertex::new(a2.x, a2.y, color));

    out.push(Vertex::new(a2.x, a2.y, color));
    out.push(Vertex::new(b1.x, b1.y, color));
    out.push(Vertex::new(b2.x, b2.y, color));
}
