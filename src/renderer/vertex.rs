//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Convert 8-bit RGBA to a float color
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> [f32; 4] {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::rgba;

    pub const BACKGROUND: [f32; 4] = rgba(0, 0, 0, 255);
    pub const PLAYER: [f32; 4] = rgba(0, 0, 255, 255);
    pub const OBSTACLE: [f32; 4] = rgba(255, 0, 0, 255);
    pub const LOGO: [f32; 4] = rgba(255, 255, 255, 255);
    pub const FOG: [f32; 4] = rgba(255, 255, 255, 100);
    pub const RAIN: [f32; 4] = rgba(0, 0, 255, 150);
    pub const SKY: [f32; 4] = rgba(135, 206, 235, 255);
    pub const GROUND: [f32; 4] = rgba(120, 80, 40, 255);
    pub const TEXT: [f32; 4] = rgba(255, 255, 255, 255);
    pub const HIGHLIGHT: [f32; 4] = rgba(255, 255, 0, 255);
}
