//! Stopwatch timing: elapsed-time accounting across start/pause cycles.

pub mod clock;
pub mod format;

use clock::{Clock, SystemClock};
use format::TimeFormat;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchState {
    Stopped,
    Running,
    Paused,
}

impl fmt::Display for StopwatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopwatchState::Stopped => "stopped",
            StopwatchState::Running => "running",
            StopwatchState::Paused => "paused",
        };
        f.write_str(s)
    }
}

/// Accumulates running time across start/pause cycles.
///
/// `elapsed` only grows while running; time spent paused is never counted.
/// The formatted string is re-sampled on every transition and on
/// [`Stopwatch::refresh`], which the tick loop calls while running.
pub struct Stopwatch {
    clock: Arc<dyn Clock>,
    format: TimeFormat,
    state: StopwatchState,
    started_at: Option<Instant>,
    elapsed: Duration,
    formatted: String,
}

impl Stopwatch {
    pub fn new(format: TimeFormat) -> Self {
        Self::with_clock(Arc::new(SystemClock), format)
    }

    pub fn with_clock(clock: Arc<dyn Clock>, format: TimeFormat) -> Self {
        Self {
            clock,
            format,
            state: StopwatchState::Stopped,
            started_at: None,
            elapsed: Duration::ZERO,
            formatted: format.render(Duration::ZERO),
        }
    }

    pub fn state(&self) -> StopwatchState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == StopwatchState::Running
    }

    /// Start or resume. Returns `true` if the state changed.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.started_at = Some(self.clock.now());
        self.state = StopwatchState::Running;
        self.refresh();
        true
    }

    /// Bank the current run into `elapsed`. Returns `true` if the state changed.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if let Some(started) = self.started_at.take() {
            self.elapsed += self.clock.now().saturating_duration_since(started);
        }
        self.state = StopwatchState::Paused;
        self.refresh();
        true
    }

    pub fn reset(&mut self) {
        self.started_at = None;
        self.elapsed = Duration::ZERO;
        self.state = StopwatchState::Stopped;
        self.refresh();
    }

    /// Start when idle, pause when running.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Total running time, including the current run if any.
    pub fn elapsed(&self) -> Duration {
        let current = self
            .started_at
            .map(|s| self.clock.now().saturating_duration_since(s))
            .unwrap_or_default();
        self.elapsed + current
    }

    /// Re-sample the clock into the display string.
    pub fn refresh(&mut self) {
        self.formatted = self.format.render(self.elapsed());
    }

    pub fn formatted_time(&self) -> &str {
        &self.formatted
    }
}

impl fmt::Debug for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stopwatch")
            .field("state", &self.state)
            .field("elapsed", &self.elapsed)
            .field("formatted", &self.formatted)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::clock::MockClock;
    use super::*;
    use pretty_assertions::assert_eq;

    fn fixture(format: TimeFormat) -> (Arc<MockClock>, Stopwatch) {
        let clock = Arc::new(MockClock::new());
        let sw = Stopwatch::with_clock(clock.clone(), format);
        (clock, sw)
    }

    #[test]
    fn test_start_pause_resume_reset_scenario() {
        let (clock, mut sw) = fixture(TimeFormat::Seconds);

        sw.start();
        clock.advance(Duration::from_secs(5));
        sw.pause();
        assert_eq!(sw.elapsed(), Duration::from_secs(5));
        assert_eq!(sw.formatted_time(), "00:00:05");

        sw.start();
        clock.advance(Duration::from_secs(3));
        sw.pause();
        assert_eq!(sw.elapsed(), Duration::from_secs(8));
        assert_eq!(sw.formatted_time(), "00:00:08");

        sw.reset();
        assert_eq!(sw.elapsed(), Duration::ZERO);
        assert_eq!(sw.state(), StopwatchState::Stopped);
        assert_eq!(sw.formatted_time(), "00:00:00");
    }

    #[test]
    fn test_paused_time_is_not_counted() {
        let (clock, mut sw) = fixture(TimeFormat::Seconds);

        sw.start();
        clock.advance(Duration::from_secs(2));
        sw.pause();
        clock.advance(Duration::from_secs(60));
        assert_eq!(sw.elapsed(), Duration::from_secs(2));

        sw.start();
        clock.advance(Duration::from_secs(1));
        assert_eq!(sw.elapsed(), Duration::from_secs(3));
    }

    #[test]
    fn test_start_is_idempotent() {
        let (clock, mut sw) = fixture(TimeFormat::Seconds);

        assert!(sw.start());
        clock.advance(Duration::from_secs(4));
        // A second start must not move the start epoch forward
        assert!(!sw.start());
        clock.advance(Duration::from_secs(1));
        sw.pause();
        assert_eq!(sw.elapsed(), Duration::from_secs(5));
    }

    #[test]
    fn test_pause_without_start_is_noop() {
        let (clock, mut sw) = fixture(TimeFormat::Seconds);

        clock.advance(Duration::from_secs(10));
        assert!(!sw.pause());
        assert_eq!(sw.elapsed(), Duration::ZERO);
        assert_eq!(sw.state(), StopwatchState::Stopped);

        sw.start();
        clock.advance(Duration::from_secs(1));
        sw.pause();
        assert!(!sw.pause());
        assert_eq!(sw.elapsed(), Duration::from_secs(1));
        assert_eq!(sw.state(), StopwatchState::Paused);
    }

    #[test]
    fn test_reset_from_every_state() {
        let (clock, mut sw) = fixture(TimeFormat::Seconds);

        sw.reset();
        assert_eq!(sw.state(), StopwatchState::Stopped);

        sw.start();
        clock.advance(Duration::from_secs(7));
        sw.reset();
        assert_eq!(sw.state(), StopwatchState::Stopped);
        assert_eq!(sw.elapsed(), Duration::ZERO);
        // The abandoned run must not leak into later readings
        clock.advance(Duration::from_secs(7));
        assert_eq!(sw.elapsed(), Duration::ZERO);

        sw.start();
        clock.advance(Duration::from_secs(2));
        sw.pause();
        sw.reset();
        assert_eq!(sw.state(), StopwatchState::Stopped);
        assert_eq!(sw.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_elapsed_never_decreases_except_on_reset() {
        let (clock, mut sw) = fixture(TimeFormat::Seconds);
        // s = start, p = pause, r = reset, a = advance 250ms
        let script = "sapaasaaprsaapaaasaaaaprpps";
        let mut last = Duration::ZERO;

        for op in script.chars() {
            match op {
                's' => {
                    sw.start();
                }
                'p' => {
                    sw.pause();
                }
                'r' => {
                    sw.reset();
                    last = Duration::ZERO;
                }
                'a' => clock.advance(Duration::from_millis(250)),
                _ => unreachable!(),
            }
            let now = sw.elapsed();
            assert!(now >= last, "elapsed went backwards after '{}'", op);
            last = now;
        }
    }

    #[test]
    fn test_formatted_time_is_static_until_refreshed() {
        let (clock, mut sw) = fixture(TimeFormat::Seconds);

        sw.start();
        clock.advance(Duration::from_secs(2));
        assert_eq!(sw.formatted_time(), "00:00:00");
        sw.refresh();
        assert_eq!(sw.formatted_time(), "00:00:02");

        sw.pause();
        clock.advance(Duration::from_secs(30));
        sw.refresh();
        assert_eq!(sw.formatted_time(), "00:00:02");
    }

    #[test]
    fn test_toggle() {
        let (clock, mut sw) = fixture(TimeFormat::Centiseconds);

        assert!(sw.toggle());
        assert_eq!(sw.state(), StopwatchState::Running);
        clock.advance(Duration::from_millis(1230));
        assert!(sw.toggle());
        assert_eq!(sw.state(), StopwatchState::Paused);
        assert_eq!(sw.formatted_time(), "00:00:01.23");
    }
}
