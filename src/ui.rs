//! On-screen text
//!
//! Screens are described as positioned lines of text; the host's font
//! backend decides how they look.

use crate::HighScores;
use crate::app::MenuItem;
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::renderer::colors;
use crate::sim::{FlashStatus, GameMode, GameState};

/// Left margin for left-aligned lines
pub const TEXT_X: f32 = 10.0;

/// Horizontal placement of a line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Align {
    Left,
    /// Centered on this x coordinate
    Center(f32),
}

/// One line of text to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Top of the line in window pixels
    pub y: f32,
    pub align: Align,
    pub color: [f32; 4],
}

impl TextLine {
    fn left(text: impl Into<String>, y: f32) -> Self {
        Self {
            text: text.into(),
            y,
            align: Align::Left,
            color: colors::TEXT,
        }
    }

    fn centered(text: impl Into<String>, y: f32) -> Self {
        Self {
            text: text.into(),
            y,
            align: Align::Center(WINDOW_WIDTH / 2.0),
            color: colors::TEXT,
        }
    }
}

/// Text shown during play
pub fn hud_lines(state: &GameState) -> Vec<TextLine> {
    let mut lines = vec![TextLine::left(format!("Score: {}", state.score), 10.0)];

    match state.time_left_secs() {
        Some(secs) => lines.push(TextLine::left(format!("Time Left: {secs}s"), 40.0)),
        None => lines.push(TextLine::left("Press S to save game", 40.0)),
    }

    lines.push(TextLine::left(
        format!("Weather: {}", state.weather.kind.as_str()),
        70.0,
    ));

    let flash_y = WINDOW_HEIGHT - 110.0;
    match state.flash_status() {
        FlashStatus::Cooling { secs_remaining } => {
            lines.push(TextLine::centered(format!("{secs_remaining}s"), flash_y))
        }
        FlashStatus::Ready => lines.push(TextLine::centered("Ready", flash_y)),
        FlashStatus::Hidden => {}
    }

    lines
}

/// Title, high score for the highlighted mode, and the menu entries
pub fn menu_lines(selection: usize, high_scores: &HighScores) -> Vec<TextLine> {
    let mode = match MenuItem::from_index(selection) {
        MenuItem::SurvivalRush => GameMode::SurvivalRush,
        _ => GameMode::Classic,
    };

    let mut lines = vec![
        TextLine::left("Dodge Game", 100.0),
        TextLine::left(
            format!("High Score ({}): {}", mode.as_str(), high_scores.get(mode)),
            150.0,
        ),
    ];

    for (i, item) in MenuItem::ALL.iter().enumerate() {
        let mut line = TextLine::left(item.label(), 250.0 + 50.0 * i as f32);
        if i == selection {
            line.color = colors::HIGHLIGHT;
        }
        lines.push(line);
    }
    lines
}

pub fn game_over_lines(score: u64) -> Vec<TextLine> {
    let mid = WINDOW_HEIGHT / 2.0;
    vec![
        TextLine::left("Game Over!", mid - 50.0),
        TextLine::left(format!("Score: {score}"), mid),
        TextLine::left("Press Enter to return to menu", mid + 50.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;

    fn texts(lines: &[TextLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_classic_hud() {
        let mut state = GameState::new(GameMode::Classic, 1, Tuning::default());
        state.score = 70;
        let lines = hud_lines(&state);
        assert_eq!(
            texts(&lines),
            vec!["Score: 70", "Press S to save game", "Weather: Clear", "Ready"]
        );
        assert_eq!(lines[3].align, Align::Center(400.0));
        assert_eq!(lines[3].y, 490.0);
    }

    #[test]
    fn test_survival_hud_shows_time_and_cooldown() {
        let mut state = GameState::new(GameMode::SurvivalRush, 1, Tuning::default());
        state.elapsed_ms = 20_000;
        state.last_flash_ms = Some(17_000);
        let lines = hud_lines(&state);
        assert_eq!(texts(&lines)[1], "Time Left: 40s");
        assert_eq!(texts(&lines)[3], "12s");
    }

    #[test]
    fn test_flash_text_hidden_after_ready_window() {
        let mut state = GameState::new(GameMode::Classic, 1, Tuning::default());
        state.last_flash_ms = Some(0);
        state.elapsed_ms = 40_000;
        assert_eq!(hud_lines(&state).len(), 3);
    }

    #[test]
    fn test_menu_highlight_and_high_score() {
        let scores = HighScores {
            classic: 120,
            survival_rush: 300,
        };
        let lines = menu_lines(1, &scores);
        assert_eq!(lines[1].text, "High Score (Survival Rush): 300");
        let highlighted: Vec<_> = lines
            .iter()
            .filter(|l| l.color == colors::HIGHLIGHT)
            .collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].text, "Survival Rush");

        let lines = menu_lines(3, &scores);
        assert_eq!(lines[1].text, "High Score (Classic): 120");
        assert_eq!(lines[5].text, "Exit");
        assert_eq!(lines[5].color, colors::HIGHLIGHT);
        assert_eq!(lines[0].color, colors::TEXT);
    }

    #[test]
    fn test_game_over_lines() {
        let lines = game_over_lines(450);
        assert_eq!(
            texts(&lines),
            vec!["Game Over!", "Score: 450", "Press Enter to return to menu"]
        );
    }
}
