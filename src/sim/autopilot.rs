//! Idle/demo steering
//!
//! Sidesteps the closest obstacle heading at the player; otherwise drifts
//! back toward the middle of the screen where there is room to dodge.

use glam::Vec2;

use super::rect::clamp_to_window;
use super::state::GameState;
use crate::centered;

/// Obstacles farther than this (centre to centre) are ignored
const DANGER_RADIUS: f32 = 160.0;
/// How far ahead of the player the dodge target is placed
const DODGE_REACH: f32 = 120.0;

/// Pick a steering target for this tick
pub fn choose_target(state: &GameState) -> Vec2 {
    let player = state.player.bounds();
    let me = player.center();

    let threat = state
        .obstacles
        .iter()
        .filter_map(|o| {
            let c = o.bounds().center();
            let to_me = me - c;
            let dist = to_me.length();
            let approaching = o.vel.dot(to_me) > 0.0;
            (approaching && dist < DANGER_RADIUS).then_some((dist, c, o.vel))
        })
        .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    match threat {
        Some((_, obstacle_center, vel)) => {
            // Step sideways out of the obstacle's lane
            let lane = vel.normalize_or_zero();
            let mut side = lane.perp();
            if side.dot(me - obstacle_center) < 0.0 {
                side = -side;
            }
            let wanted = clamp_to_window(player.pos + side * DODGE_REACH, player.size);
            // Pinned against a wall: go the other way
            if wanted.distance(player.pos) < 1.0 {
                clamp_to_window(player.pos - side * DODGE_REACH, player.size)
            } else {
                wanted
            }
        }
        None => centered(player.size),
    }
}
