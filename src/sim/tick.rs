//! Per-frame simulation tick
//!
//! One call advances a dodge session by one frame.

use glam::Vec2;

use super::autopilot;
use super::rect::is_off_screen;
use super::spawn::spawn_obstacle;
use super::state::{GameEvent, GameMode, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// New steering target (top-left corner), from mouse motion
    pub target: Option<Vec2>,
    /// Flash toward the target (F)
    pub flash: bool,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - the autopilot steers
    pub idle_mode: bool,
}

/// Advance the session by one frame of `dt_ms`
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: u64) {
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.elapsed_ms += dt_ms;
    let now = state.elapsed_ms;

    if input.idle_mode {
        state.player.target = autopilot::choose_target(state);
    } else if let Some(target) = input.target {
        state.player.target = target;
    }

    if input.flash && state.flash_ready() {
        let distance = state.tuning.flash_distance;
        if let Some((from, to)) = state.player.flash_toward_target(distance) {
            state.last_flash_ms = Some(now);
            state.push_event(GameEvent::Flashed { from, to });
        }
    }

    // Weather from the previous frame decides this frame's speed
    let speed = state.tuning.player_speed * state.weather.player_speed_factor(&state.tuning);
    state.player.move_toward_target(speed);

    if let Some(kind) = state
        .weather
        .update(now, state.mode, &state.tuning, &mut state.rng)
    {
        log::info!("Weather changed to {} at {}ms", kind.as_str(), now);
        state.push_event(GameEvent::WeatherChanged(kind));
    }

    match state.mode {
        GameMode::Classic => {
            state.spawn_interval_ms = state.tuning.classic_spawn_interval(now);
        }
        GameMode::SurvivalRush => {
            if now >= state.tuning.survival_duration_ms {
                state.update_score();
                state.phase = GamePhase::GameOver;
                log::info!("Survival Rush ended. Final score: {}", state.score);
                state.push_event(GameEvent::SurvivalComplete { score: state.score });
                return;
            }
        }
    }

    if now.saturating_sub(state.last_spawn_ms) > state.spawn_interval_ms {
        if state.mode == GameMode::Classic {
            state.obstacle_speed = state.tuning.classic_obstacle_speed(now);
        }
        let obstacle = spawn_obstacle(&mut state.rng, state.obstacle_speed);
        log::debug!(
            "Spawned obstacle at ({}, {}) speed {}",
            obstacle.pos.x,
            obstacle.pos.y,
            state.obstacle_speed
        );
        state.obstacles.push(obstacle);
        state.last_spawn_ms = now;
        state.push_event(GameEvent::ObstacleSpawned);
    }

    let player_box = state.player.bounds();
    let mut hit = false;
    state.obstacles.retain_mut(|obstacle| {
        obstacle.advance();
        if is_off_screen(obstacle.pos, obstacle.size) {
            return false;
        }
        if obstacle.bounds().overlaps(&player_box) {
            hit = true;
        }
        true
    });

    state.update_score();

    if hit {
        state.phase = GamePhase::GameOver;
        log::info!("Collision detected. Final score: {}", state.score);
        state.push_event(GameEvent::Collision { score: state.score });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::spawn::{SpawnEdge, obstacle_at_edge};
    use crate::sim::state::Obstacle;
    use crate::sim::weather::WeatherKind;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    const DT: u64 = FRAME_DELAY_MS as u64;

    fn classic(seed: u64) -> GameState {
        GameState::new(GameMode::Classic, seed, Tuning::default())
    }

    /// Tuning where nothing spawns on its own
    fn quiet_tuning() -> Tuning {
        Tuning {
            spawn_interval_ms: u64::MAX / 2,
            spawn_interval_min_ms: u64::MAX / 2,
            survival_spawn_interval_ms: u64::MAX / 2,
            classic_weather_interval_ms: u64::MAX / 2,
            survival_weather_interval_ms: u64::MAX / 2,
            ..Tuning::default()
        }
    }

    #[test]
    fn test_tick_advances_clock_and_score() {
        let mut state = GameState::new(GameMode::Classic, 1, quiet_tuning());
        for _ in 0..125 {
            tick(&mut state, &TickInput::default(), 16);
        }
        assert_eq!(state.elapsed_ms, 2_000);
        assert_eq!(state.score, 20);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_tick_pause() {
        let mut state = classic(1);
        tick(&mut state, &TickInput::default(), DT);
        let elapsed = state.elapsed_ms;

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, DT);
        assert_eq!(state.phase, GamePhase::Paused);

        // Paused: time stands still
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.elapsed_ms, elapsed);

        // Unpause ticks normally
        tick(&mut state, &pause, DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.elapsed_ms, elapsed + DT);
    }

    #[test]
    fn test_spawns_on_interval() {
        let mut state = classic(3);
        // 500ms interval, strictly greater-than: first spawn at 512 with 16ms frames
        for _ in 0..31 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert_eq!(state.elapsed_ms, 496);
        assert!(state.obstacles.is_empty());
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.obstacles.len(), 1);
        assert!(state.drain_events().contains(&GameEvent::ObstacleSpawned));
        assert_eq!(state.last_spawn_ms, 512);
    }

    #[test]
    fn test_classic_obstacle_speed_ramps() {
        let mut state = classic(4);
        state.elapsed_ms = 20_000;
        state.last_spawn_ms = 19_000;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.obstacle_speed, 4.0);
        assert_eq!(state.obstacles[0].vel.length(), 4.0);
    }

    #[test]
    fn test_survival_speed_is_constant() {
        let mut state = GameState::new(GameMode::SurvivalRush, 4, Tuning::default());
        state.elapsed_ms = 40_000;
        state.last_spawn_ms = 39_000;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.obstacle_speed, 3.0);
        assert_eq!(state.spawn_interval_ms, 200);
    }

    #[test]
    fn test_classic_spawn_interval_shrinks() {
        let mut state = GameState::new(GameMode::Classic, 1, Tuning::default());
        state.elapsed_ms = 60_000 - DT;
        state.last_spawn_ms = state.elapsed_ms;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.spawn_interval_ms, 400);
    }

    #[test]
    fn test_off_screen_obstacles_removed() {
        let mut state = GameState::new(GameMode::Classic, 1, quiet_tuning());
        // About to leave through the left edge
        state
            .obstacles
            .push(Obstacle::new(Vec2::new(-29.0, 10.0), Vec2::new(-3.0, 0.0)));
        // Still crossing
        state
            .obstacles
            .push(Obstacle::new(Vec2::new(100.0, 10.0), Vec2::new(-3.0, 0.0)));
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos, Vec2::new(97.0, 10.0));
    }

    #[test]
    fn test_collision_ends_game() {
        let mut state = GameState::new(GameMode::Classic, 1, quiet_tuning());
        state.elapsed_ms = 5_000;
        let p = state.player.pos;
        state
            .obstacles
            .push(Obstacle::new(p + Vec2::new(-31.0, 10.0), Vec2::new(3.0, 0.0)));
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::Collision { score: 50 }));

        // Over: further ticks do nothing
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.elapsed_ms, 5_000 + DT);
    }

    #[test]
    fn test_survival_rush_times_out() {
        let mut state = GameState::new(GameMode::SurvivalRush, 1, quiet_tuning());
        state.elapsed_ms = 60_000 - DT;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::SurvivalComplete { score: 600 }]
        );
    }

    #[test]
    fn test_flash_respects_cooldown() {
        let mut state = GameState::new(GameMode::Classic, 1, quiet_tuning());
        let flash = TickInput {
            target: Some(Vec2::new(375.0, 0.0)),
            flash: true,
            ..Default::default()
        };
        tick(&mut state, &flash, DT);
        // 200 px flash plus one 5 px steering step
        assert!((state.player.pos.y - 70.0).abs() < 1e-3);
        assert_eq!(state.last_flash_ms, Some(DT));

        let target_down = TickInput {
            target: Some(Vec2::new(375.0, 550.0)),
            flash: true,
            ..Default::default()
        };
        let y = state.player.pos.y;
        tick(&mut state, &target_down, DT);
        // Cooling down: only the normal step
        assert!((state.player.pos.y - (y + 5.0)).abs() < 1e-3);

        state.elapsed_ms = DT + 15_000;
        let y = state.player.pos.y;
        tick(&mut state, &target_down, DT);
        assert!((state.player.pos.y - (y + 205.0)).abs() < 1e-3);
    }

    #[test]
    fn test_rain_slows_player() {
        let mut state = GameState::new(GameMode::Classic, 1, quiet_tuning());
        state.weather.kind = WeatherKind::Rain;
        state.weather.duration_ms = u64::MAX;
        let x = state.player.pos.x;
        let input = TickInput {
            target: Some(Vec2::new(700.0, state.player.pos.y)),
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert!((state.player.pos.x - (x + 4.0)).abs() < 1e-4);
    }

    #[test]
    fn test_new_obstacle_from_edge_crosses_screen() {
        let mut state = GameState::new(GameMode::Classic, 1, quiet_tuning());
        state.player.pos = Vec2::new(0.0, 0.0);
        state.player.target = state.player.pos;
        state
            .obstacles
            .push(obstacle_at_edge(SpawnEdge::Right, 500.0, 10.0));
        // x = 800 - 10k; still on screen at exactly -30
        for _ in 0..83 {
            tick(&mut state, &TickInput::default(), DT);
            assert_eq!(state.obstacles.len(), 1);
        }
        assert_eq!(state.obstacles[0].pos.x, -30.0);
        tick(&mut state, &TickInput::default(), DT);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut a = classic(99_999);
        let mut b = classic(99_999);
        let inputs = [
            TickInput {
                target: Some(Vec2::new(100.0, 100.0)),
                ..Default::default()
            },
            TickInput {
                flash: true,
                ..Default::default()
            },
            TickInput::default(),
        ];
        for i in 0..3_000 {
            let input = &inputs[i % inputs.len()];
            tick(&mut a, input, DT);
            tick(&mut b, input, DT);
        }
        assert_eq!(a.elapsed_ms, b.elapsed_ms);
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.player, b.player);
        assert_eq!(a.phase, b.phase);
    }

    proptest! {
        #[test]
        fn player_stays_on_screen_and_obstacles_pruned(
            seed in any::<u64>(),
            targets in prop::collection::vec((-500.0f32..1300.0, -500.0f32..1100.0, any::<bool>()), 1..200),
        ) {
            let mut state = classic(seed);
            for (x, y, flash) in targets {
                let input = TickInput {
                    target: Some(Vec2::new(x, y)),
                    flash,
                    idle_mode: false,
                    pause: false,
                };
                tick(&mut state, &input, DT);
                let p = state.player.pos;
                prop_assert!(p.x >= 0.0 && p.x <= WINDOW_WIDTH - PLAYER_WIDTH);
                prop_assert!(p.y >= 0.0 && p.y <= WINDOW_HEIGHT - PLAYER_HEIGHT);
                for o in &state.obstacles {
                    prop_assert!(!is_off_screen(o.pos, o.size));
                }
                if state.is_over() {
                    break;
                }
            }
        }
    }
}
