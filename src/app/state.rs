use crate::config::AppConfig;
#[cfg(test)]
use crate::stopwatch::clock::Clock;
use crate::stopwatch::{Stopwatch, StopwatchState};
use ratatui::layout::Rect;
#[cfg(test)]
use std::sync::Arc;

/// Everything the screen owns for one session.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub stopwatch: Stopwatch,
    pub show_info: bool,
    pub should_quit: bool,
    pub dirty: bool,
    /// Last known terminal area, used for mouse hit-testing.
    pub viewport: Rect,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let stopwatch = Stopwatch::new(config.display.format);
        Self::with_stopwatch(config, stopwatch)
    }

    #[cfg(test)]
    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        let stopwatch = Stopwatch::with_clock(clock, config.display.format);
        Self::with_stopwatch(config, stopwatch)
    }

    fn with_stopwatch(config: AppConfig, stopwatch: Stopwatch) -> Self {
        Self {
            config,
            stopwatch,
            show_info: false,
            should_quit: false,
            dirty: true,
            viewport: Rect::default(),
            status_message: None,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match self.stopwatch.state() {
            StopwatchState::Stopped => "Ready".to_string(),
            StopwatchState::Running => "Running".to_string(),
            StopwatchState::Paused => "Paused".to_string(),
        }
    }
}
