//! Periodic display refresh.
//!
//! A [`Ticker`] owns at most one background task that feeds
//! [`AppEvent::Tick`] into the app channel. It is started when the stopwatch
//! starts running and cancelled on pause or reset.

use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub struct Ticker {
    interval: Duration,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            handle: None,
        }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Spawn the tick task, replacing any task already running.
    pub fn start(&mut self, tx: mpsc::UnboundedSender<AppEvent>) {
        self.cancel();
        let period = self.interval;
        tracing::debug!(interval_ms = period.as_millis() as u64, "ticker started");
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(AppEvent::Tick).is_err() {
                    break;
                }
            }
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("ticker cancelled");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticker_emits_until_cancelled() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::new(Duration::from_millis(100));
        assert!(!ticker.is_active());

        ticker.start(tx.clone());
        drop(tx);
        assert!(ticker.is_active());

        for _ in 0..3 {
            let event = rx.recv().await;
            assert!(matches!(event, Some(AppEvent::Tick)));
        }

        ticker.cancel();
        assert!(!ticker.is_active());

        // Once the aborted task drops its sender the channel closes
        let drained = tokio::time::timeout(Duration::from_secs(5), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_previous_task() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::new(Duration::from_millis(50));

        ticker.start(tx.clone());
        ticker.start(tx.clone());
        drop(tx);
        assert!(ticker.is_active());

        drop(ticker);
        let drained = tokio::time::timeout(Duration::from_secs(5), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(drained.is_ok());
    }

    #[test]
    fn test_cancel_when_idle_is_noop() {
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.cancel();
        assert!(!ticker.is_active());
    }
}
