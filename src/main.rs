//! Dodge Arcade entry point
//!
//! Runs the games headless: the built-in autopilot plays, frames are built
//! and paced like a windowed host would, and results land in the data
//! directory (high scores, save file).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use dodge::Settings;
use dodge::app::{App, MenuItem, Screen, runner_input};
use dodge::platform::{FrameClock, HostEvent, Key};
use dodge::renderer::{build_bounce_frame, build_runner_frame};
use dodge::settings::SETTINGS_FILE;
use dodge::sim::runner::{RUNNER_WIDTH, RUNNER_X};
use dodge::sim::{BounceState, GameMode, RunnerPhase, RunnerState, tick_bounce, tick_runner};

#[derive(Parser)]
#[command(name = "dodge")]
#[command(about = "Dodge the obstacles, jump the hurdles")]
struct Cli {
    /// Settings file (defaults to dodge.json in the data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Classic,
    Survival,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Classic => GameMode::Classic,
            ModeArg::Survival => GameMode::SurvivalRush,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play a dodge session with the autopilot steering
    Play {
        #[arg(long, value_enum, default_value = "classic")]
        mode: ModeArg,
        /// Stop after this many frames (default: until the run ends)
        #[arg(long)]
        frames: Option<u64>,
        /// Fixed RNG seed
        #[arg(long)]
        seed: Option<u64>,
        /// Directory for saves and high scores
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Run as fast as possible instead of ~60 fps
        #[arg(long)]
        no_sleep: bool,
        /// Resume the saved Classic game
        #[arg(long)]
        load: bool,
        /// Save the session when the frame limit is reached (Classic only)
        #[arg(long)]
        save_on_exit: bool,
    },
    /// Side-scrolling hurdle runner
    Runner {
        #[arg(long, default_value_t = 1200)]
        frames: u64,
        #[arg(long)]
        no_sleep: bool,
    },
    /// Bouncing box demo
    Bounce {
        #[arg(long, default_value_t = 600)]
        frames: u64,
        #[arg(long)]
        no_sleep: bool,
    },
    /// Write the current settings (defaults merged with any existing file)
    InitConfig,
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Dodge Arcade starting...");

    let cli = Cli::parse();
    match cli.command {
        Commands::Play {
            mode,
            frames,
            seed,
            data_dir,
            no_sleep,
            load,
            save_on_exit,
        } => {
            let mut settings = load_settings(cli.config, data_dir.as_ref())?;
            if let Some(dir) = data_dir {
                settings.data_dir = dir;
            }
            if seed.is_some() {
                settings.seed = seed;
            }
            play(settings, mode.into(), frames, !no_sleep, load, save_on_exit)
        }
        Commands::Runner { frames, no_sleep } => {
            let settings = load_settings(cli.config, None)?;
            run_runner(&settings, frames, !no_sleep);
            Ok(())
        }
        Commands::Bounce { frames, no_sleep } => {
            let settings = load_settings(cli.config, None)?;
            run_bounce(&settings, frames, !no_sleep);
            Ok(())
        }
        Commands::InitConfig => {
            let path = cli.config.unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));
            let settings = load_settings(Some(path.clone()), None)?;
            settings
                .save(&path)
                .with_context(|| format!("Failed to write settings to {}", path.display()))?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

fn load_settings(config: Option<PathBuf>, data_dir: Option<&PathBuf>) -> Result<Settings> {
    let path = config.unwrap_or_else(|| match data_dir {
        Some(dir) => dir.join(SETTINGS_FILE),
        None => PathBuf::from(SETTINGS_FILE),
    });
    Settings::load(&path)
        .with_context(|| format!("Failed to load settings from {}", path.display()))
}

fn play(
    settings: Settings,
    mode: GameMode,
    frames: Option<u64>,
    sleep: bool,
    load: bool,
    save_on_exit: bool,
) -> Result<()> {
    std::fs::create_dir_all(&settings.data_dir).with_context(|| {
        format!("Failed to create data directory {}", settings.data_dir.display())
    })?;

    let mut clock = FrameClock::new(settings.frame_delay_ms, sleep);
    let mut app = App::new(settings);
    app.set_autopilot(true);

    if load {
        app.select(MenuItem::LoadGame);
        if app.game().is_none() {
            anyhow::bail!("No saved game to load");
        }
    } else {
        app.start(mode);
    }

    let mut frame_count = 0u64;
    while app.is_running() && frames.is_none_or(|limit| frame_count < limit) {
        app.update(clock.frame_ms());

        let frame = app.frame();
        for cue in app.drain_audio() {
            log::debug!("Audio cue {:?} at volume {:.2}", cue.effect, cue.volume);
        }
        log::trace!(
            "Frame {}: {} vertex bytes, {} text lines",
            frame_count,
            frame.vertex_bytes().len(),
            frame.text.len()
        );

        if let Screen::GameOver { score, mode } = app.screen() {
            println!("Game over ({}): score {}", mode.as_str(), score);
            break;
        }

        frame_count += 1;
        clock.pace();
    }

    if let Some(game) = app.game() {
        let (mode, score) = (game.mode, game.score);
        println!(
            "Stopped after {frame_count} frames ({}): score {}",
            mode.as_str(),
            score
        );
        if save_on_exit && mode.can_save() {
            app.handle_event(HostEvent::Key(Key::S));
        }
    }

    let high = app.high_scores();
    println!(
        "High scores - Classic: {}, Survival Rush: {}",
        high.classic, high.survival_rush
    );
    log::info!("Ran {} frames in {}ms", frame_count, clock.elapsed_ms());
    Ok(())
}

/// Jump when the next hurdle is this close to the runner's front edge
const JUMP_TRIGGER: f32 = 60.0;

fn run_runner(settings: &Settings, frames: u64, sleep: bool) {
    let mut clock = FrameClock::new(settings.frame_delay_ms, sleep);
    let mut state = RunnerState::new();
    let mut best = 0;

    for frame in 0..frames {
        let mut events = Vec::new();
        if state.phase == RunnerPhase::GameOver {
            log::info!("Run over at frame {} with score {}", frame, state.score);
            best = best.max(state.score);
            events.push(HostEvent::Key(Key::R));
        } else {
            let front = RUNNER_X + RUNNER_WIDTH;
            let hurdle_close = state.hurdles.iter().any(|h| {
                let gap = h.x - front;
                gap > 0.0 && gap <= JUMP_TRIGGER
            });
            if hurdle_close && !state.runner.airborne {
                events.push(HostEvent::Key(Key::Space));
            }
        }

        tick_runner(&mut state, &runner_input(events));
        log::trace!("Frame {}: {} vertices", frame, build_runner_frame(&state).len());
        clock.pace();
    }

    best = best.max(state.score);
    println!("Runner best score: {best}");
}

fn run_bounce(settings: &Settings, frames: u64, sleep: bool) {
    let mut clock = FrameClock::new(settings.frame_delay_ms, sleep);
    let mut state = BounceState::default();
    for frame in 0..frames {
        tick_bounce(&mut state);
        log::trace!("Frame {}: {} vertices", frame, build_bounce_frame(&state).len());
        clock.pace();
    }
    println!("Box at x = {} moving {}", state.x, state.speed);
}
