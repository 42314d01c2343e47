//! Per-frame draw lists
//!
//! Each builder returns a triangle list in window pixel coordinates, drawn
//! back to front. Alpha is meant to be blended.

use glam::Vec2;

use super::shapes::{push_line, push_quad, push_rect};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::runner::GROUND_Y;
use crate::sim::{BounceState, GameState, RunnerState, WeatherKind};

const SCREEN: Vec2 = Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT);
const RAIN_LINE_WIDTH: f32 = 1.0;
const LOGO_SIZE: f32 = 50.0;

/// Logo square at the bottom center of the playfield
pub fn logo_pos() -> Vec2 {
    Vec2::new(WINDOW_WIDTH / 2.0 - LOGO_SIZE / 2.0, WINDOW_HEIGHT - 80.0)
}

/// Background, logo, player, obstacles, then the weather layer
pub fn build_dodge_frame(state: &GameState) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(6 * (state.obstacles.len() + state.weather.rain_drops.len() + 4));

    push_quad(&mut out, Vec2::ZERO, SCREEN, colors::BACKGROUND);
    push_quad(&mut out, logo_pos(), Vec2::splat(LOGO_SIZE), colors::LOGO);
    push_rect(&mut out, &state.player.bounds(), colors::PLAYER);
    for obstacle in &state.obstacles {
        push_rect(&mut out, &obstacle.bounds(), colors::OBSTACLE);
    }

    match state.weather.kind {
        WeatherKind::Fog => push_quad(&mut out, Vec2::ZERO, SCREEN, colors::FOG),
        WeatherKind::Rain => {
            for drop in &state.weather.rain_drops {
                let end = drop.pos + Vec2::new(0.0, drop.length);
                push_line(&mut out, drop.pos, end, RAIN_LINE_WIDTH, colors::RAIN);
            }
        }
        WeatherKind::Clear => {}
    }

    out
}

/// Sky, ground strip, runner, hurdles
pub fn build_runner_frame(state: &RunnerState) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(6 * (state.hurdles.len() + 3));
    push_quad(&mut out, Vec2::ZERO, SCREEN, colors::SKY);
    push_quad(
        &mut out,
        Vec2::new(0.0, GROUND_Y),
        Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT - GROUND_Y),
        colors::GROUND,
    );
    push_rect(&mut out, &state.runner.bounds(), colors::PLAYER);
    for hurdle in &state.hurdles {
        push_rect(&mut out, &hurdle.bounds(), colors::OBSTACLE);
    }
    out
}

pub fn build_bounce_frame(state: &BounceState) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(12);
    push_quad(&mut out, Vec2::ZERO, SCREEN, colors::BACKGROUND);
    push_rect(&mut out, &state.bounds(), colors::OBSTACLE);
    out
}
