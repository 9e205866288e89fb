use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How elapsed time is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// `HH:MM:SS`
    #[default]
    Seconds,
    /// `HH:MM:SS.cc`
    Centiseconds,
}

impl TimeFormat {
    pub fn render(self, elapsed: Duration) -> String {
        let total_secs = elapsed.as_secs();
        let hours = total_secs / 3600;
        let mins = (total_secs % 3600) / 60;
        let secs = total_secs % 60;

        match self {
            TimeFormat::Seconds => format!("{:02}:{:02}:{:02}", hours, mins, secs),
            TimeFormat::Centiseconds => {
                let centis = elapsed.subsec_millis() / 10;
                format!("{:02}:{:02}:{:02}.{:02}", hours, mins, secs, centis)
            }
        }
    }
}
