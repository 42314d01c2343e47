//! Screen flow: menu, play, game over
//!
//! The host feeds `HostEvent`s in, calls `update` once per frame, and draws
//! whatever `frame` returns. Saving, loading and high scores are handled
//! here so the simulation stays free of IO.

use glam::Vec2;

use crate::audio::{AudioManager, Cue, SoundEffect};
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::highscores::HighScores;
use crate::persistence::{load_from_path, save_to_path};
use crate::platform::{HostEvent, Key};
use crate::renderer::shapes::quad;
use crate::renderer::{Vertex, build_dodge_frame, colors};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameMode, GameState, RunnerInput, TickInput, tick};
use crate::ui::{self, TextLine};

/// Main menu entries, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    PlayClassic,
    SurvivalRush,
    LoadGame,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::PlayClassic,
        MenuItem::SurvivalRush,
        MenuItem::LoadGame,
        MenuItem::Exit,
    ];

    /// Out-of-range indices wrap
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::PlayClassic => "Play (Classic)",
            MenuItem::SurvivalRush => "Survival Rush",
            MenuItem::LoadGame => "Load Game",
            MenuItem::Exit => "Exit",
        }
    }
}

/// Key mapping for the hurdle runner: Space jumps, P pauses, R restarts
pub fn runner_input(events: impl IntoIterator<Item = HostEvent>) -> RunnerInput {
    let mut input = RunnerInput::default();
    for event in events {
        match event {
            HostEvent::Key(Key::Space) => input.jump = true,
            HostEvent::Key(Key::P) => input.pause = !input.pause,
            HostEvent::Key(Key::R) => input.restart = true,
            _ => {}
        }
    }
    input
}

#[derive(Debug)]
pub enum Screen {
    Menu { selection: usize },
    Playing(Box<GameState>),
    GameOver { score: u64, mode: GameMode },
}

/// Everything the host needs to draw one frame
#[derive(Debug, Default)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    pub text: Vec<TextLine>,
}

impl Frame {
    /// Vertex data as raw bytes, ready for a vertex buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

pub struct App {
    screen: Screen,
    settings: Settings,
    high_scores: HighScores,
    audio: AudioManager,
    /// Input gathered since the last update
    pending: TickInput,
    autopilot: bool,
    running: bool,
}

impl App {
    /// Start at the menu with high scores read from the data directory
    pub fn new(settings: Settings) -> Self {
        let high_scores = HighScores::load(&settings.data_dir, &settings.highscore_files);
        let audio = AudioManager::from_settings(&settings);
        Self {
            screen: Screen::Menu { selection: 0 },
            settings,
            high_scores,
            audio,
            pending: TickInput::default(),
            autopilot: false,
            running: true,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn game(&self) -> Option<&GameState> {
        match &self.screen {
            Screen::Playing(state) => Some(&**state),
            _ => None,
        }
    }

    pub fn game_mut(&mut self) -> Option<&mut GameState> {
        match &mut self.screen {
            Screen::Playing(state) => Some(&mut **state),
            _ => None,
        }
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Let the built-in dodger steer instead of the mouse
    pub fn set_autopilot(&mut self, on: bool) {
        self.autopilot = on;
    }

    /// Audio cues queued since the last call
    pub fn drain_audio(&mut self) -> Vec<Cue> {
        self.audio.drain()
    }

    pub fn handle_event(&mut self, event: HostEvent) {
        if event == HostEvent::Quit {
            log::info!("Quit requested");
            self.running = false;
            return;
        }

        match &mut self.screen {
            Screen::Menu { selection } => {
                let count = MenuItem::ALL.len();
                match event {
                    HostEvent::Key(Key::Up) => *selection = (*selection + count - 1) % count,
                    HostEvent::Key(Key::Down) => *selection = (*selection + 1) % count,
                    HostEvent::Key(Key::Enter) => {
                        let item = MenuItem::from_index(*selection);
                        self.select(item);
                    }
                    HostEvent::Key(Key::Escape) => self.running = false,
                    _ => {}
                }
            }
            Screen::Playing(state) => match event {
                HostEvent::MouseMotion { x, y } => {
                    self.pending.target = Some(Vec2::new(x, y) - state.player.size / 2.0);
                }
                HostEvent::Key(Key::F) => self.pending.flash = true,
                HostEvent::Key(Key::P) => self.pending.pause = !self.pending.pause,
                HostEvent::Key(Key::S) => self.save_and_exit(),
                _ => {}
            },
            Screen::GameOver { .. } => {
                if event == HostEvent::Key(Key::Enter) {
                    self.screen = Screen::Menu { selection: 0 };
                }
            }
        }
    }

    /// Pick a menu entry as if Enter was pressed on it
    pub fn select(&mut self, item: MenuItem) {
        match item {
            MenuItem::PlayClassic => self.start(GameMode::Classic),
            MenuItem::SurvivalRush => self.start(GameMode::SurvivalRush),
            MenuItem::LoadGame => self.load_game(),
            MenuItem::Exit => {
                log::info!("Exit selected");
                self.running = false;
            }
        }
    }

    fn next_seed(&self) -> u64 {
        self.settings.seed.unwrap_or_else(rand::random)
    }

    /// Begin a fresh session in `mode`
    pub fn start(&mut self, mode: GameMode) {
        let seed = self.next_seed();
        log::info!("Starting {} session (seed {})", mode.as_str(), seed);
        let state = GameState::new(mode, seed, self.settings.tuning.clone());
        self.enter_play(state);
    }

    /// Resume from the save file, if there is one
    pub fn load_game(&mut self) {
        let path = self.settings.save_path();
        match load_from_path(&path) {
            Ok(Some(save)) => {
                let seed = self.next_seed();
                let state = GameState::from_save(&save, seed, self.settings.tuning.clone());
                log::info!("Resuming saved game at {}ms", state.elapsed_ms);
                self.enter_play(state);
            }
            Ok(None) => log::info!("No saved game found at {}", path.display()),
            Err(e) => log::warn!("Could not load {}: {}", path.display(), e),
        }
    }

    fn enter_play(&mut self, state: GameState) {
        self.pending = TickInput::default();
        self.screen = Screen::Playing(Box::new(state));
        self.audio.play(SoundEffect::MusicStart);
    }

    fn save_and_exit(&mut self) {
        let Screen::Playing(state) = &self.screen else {
            return;
        };
        if !state.mode.can_save() {
            return;
        }
        let path = self.settings.save_path();
        if let Err(e) = save_to_path(&path, &state.snapshot()) {
            log::warn!("Could not save game to {}: {}", path.display(), e);
        }
        self.audio.play(SoundEffect::MusicStop);
        self.screen = Screen::Menu { selection: 0 };
    }

    /// Advance one frame
    pub fn update(&mut self, dt_ms: u64) {
        let Screen::Playing(state) = &mut self.screen else {
            return;
        };

        let mut input = std::mem::take(&mut self.pending);
        input.idle_mode = self.autopilot;
        tick(state, &input, dt_ms);

        let mut finished = None;
        for event in state.drain_events() {
            match event {
                GameEvent::Collision { score } => {
                    self.audio.play(SoundEffect::Hit);
                    finished = Some(score);
                }
                GameEvent::SurvivalComplete { score } => finished = Some(score),
                _ => {}
            }
        }

        if let Some(score) = finished {
            let mode = state.mode;
            self.audio.play(SoundEffect::MusicStop);
            self.record_score(mode, score);
            self.screen = Screen::GameOver { score, mode };
        }
    }

    fn record_score(&mut self, mode: GameMode, score: u64) {
        if !self.high_scores.record(mode, score) {
            return;
        }
        if let Err(e) = self
            .high_scores
            .save(&self.settings.data_dir, &self.settings.highscore_files)
        {
            log::warn!("Could not save high scores: {}", e);
        }
    }

    /// Geometry and text for the current screen
    pub fn frame(&self) -> Frame {
        let background = || {
            quad(
                Vec2::ZERO,
                Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                colors::BACKGROUND,
            )
        };
        match &self.screen {
            Screen::Menu { selection } => Frame {
                vertices: background(),
                text: ui::menu_lines(*selection, &self.high_scores),
            },
            Screen::Playing(state) => Frame {
                vertices: build_dodge_frame(state),
                text: ui::hud_lines(state),
            },
            Screen::GameOver { score, .. } => Frame {
                vertices: background(),
                text: ui::game_over_lines(*score),
            },
        }
    }
}
