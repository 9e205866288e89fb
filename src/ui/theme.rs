use crate::config::ThemeMode;
use crate::stopwatch::StopwatchState;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Colors for one theme mode. Styles are derived from these on demand.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg: Color,
    pub surface: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub running: Color,
    pub paused: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                bg: Color::Reset,
                surface: Color::Rgb(30, 34, 42),
                text: Color::White,
                dim: Color::DarkGray,
                accent: Color::Rgb(80, 200, 190),
                running: Color::Green,
                paused: Color::Yellow,
            },
            ThemeMode::Light => Self {
                bg: Color::Rgb(245, 245, 240),
                surface: Color::Rgb(225, 228, 232),
                text: Color::Black,
                dim: Color::Gray,
                accent: Color::Rgb(0, 120, 130),
                running: Color::Rgb(0, 130, 60),
                paused: Color::Rgb(180, 110, 0),
            },
        }
    }

    pub fn screen(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn title_bar(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn border_type(&self) -> BorderType {
        BorderType::Rounded
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn readout(&self, state: StopwatchState) -> Style {
        let fg = match state {
            StopwatchState::Stopped => self.text,
            StopwatchState::Running => self.running,
            StopwatchState::Paused => self.paused,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    pub fn dialog(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }
}
