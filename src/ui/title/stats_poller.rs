//! Periodic refresh of the title screen statistics.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::stats::{StatsSource, TitleStats};
use crate::task::RepeatingTask;

/// Result of one refresh, as seen by the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsEvent {
    Updated(TitleStats),
    Failed(String),
}

/// A finished fetch tagged with the poller generation that issued it
struct Delivery {
    generation: u64,
    event: StatsEvent,
}

/// Owns the single repeating stats timer of a title screen.
///
/// Fetches run on the tokio runtime. Their results are queued and only
/// applied when the UI thread calls [`StatsPoller::poll`]. Results from a
/// timer that has since been stopped are discarded.
pub struct StatsPoller {
    source: Arc<dyn StatsSource>,
    interval: Duration,
    timer: Option<RepeatingTask>,
    generation: u64,
    tx: mpsc::UnboundedSender<Delivery>,
    rx: mpsc::UnboundedReceiver<Delivery>,
}

impl StatsPoller {
    pub fn new(source: Arc<dyn StatsSource>, interval: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            interval,
            timer: None,
            generation: 0,
            tx,
            rx,
        }
    }

    /// Whether a refresh timer is active
    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Fetch now and then every interval, replacing any running timer
    pub fn start(&mut self) {
        self.stop();

        let generation = self.generation;
        let source = self.source.clone();
        let tx = self.tx.clone();

        self.timer = Some(RepeatingTask::spawn(self.interval, move || {
            let fetch = source.fetch();
            let tx = tx.clone();
            async move {
                let event = match fetch.await {
                    Ok(stats) => StatsEvent::Updated(stats),
                    Err(e) => StatsEvent::Failed(e.to_string()),
                };
                // Receiver only goes away with the poller itself
                let _ = tx.send(Delivery { generation, event });
            }
        }));
        tracing::debug!("Started title stats timer (every {:?})", self.interval);
    }

    /// Cancel the timer; safe to call when none is running
    pub fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.stop();
            tracing::debug!("Stopped title stats timer");
        }
        self.generation += 1;
    }

    /// Drain finished fetches without blocking
    pub fn poll(&mut self) -> Vec<StatsEvent> {
        let mut events = Vec::new();
        while let Ok(delivery) = self.rx.try_recv() {
            if delivery.generation != self.generation {
                tracing::trace!("Dropping stats result from stopped timer");
                continue;
            }
            events.push(delivery.event);
        }
        events
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::stats::StatsError;
    use futures::future::BoxFuture;
    use reqwest::StatusCode;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays a fixed script of responses, repeating the last one
    pub struct FakeStats {
        script: Mutex<Vec<Result<TitleStats, StatusCode>>>,
        pub calls: AtomicUsize,
    }

    impl FakeStats {
        pub fn new(script: Vec<Result<TitleStats, StatusCode>>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script),
                calls: AtomicUsize::new(0),
            })
        }

        pub fn ok(player_count: u64, battle_count: u64) -> Arc<Self> {
            Self::new(vec![Ok(TitleStats {
                player_count,
                battle_count,
            })])
        }
    }

    impl StatsSource for FakeStats {
        fn fetch(&self) -> BoxFuture<'static, Result<TitleStats, StatsError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut script = self.script.lock().unwrap();
            let next = if script.len() > 1 {
                script.remove(0)
            } else {
                script[0].clone()
            };
            Box::pin(async move { next.map_err(StatsError::Status) })
        }
    }

    /// Poll until at least one event arrives or a second passes
    pub async fn wait_for_events(poller: &mut StatsPoller) -> Vec<StatsEvent> {
        for _ in 0..200 {
            let events = poller.poll();
            if !events.is_empty() {
                return events;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        Vec::new()
    }

    #[tokio::test]
    async fn test_start_fetches_immediately() {
        let fake = FakeStats::ok(42, 7);
        let mut poller = StatsPoller::new(fake.clone(), Duration::from_secs(60));
        assert!(!poller.is_running());

        poller.start();
        assert!(poller.is_running());

        let events = wait_for_events(&mut poller).await;
        assert_eq!(
            events,
            vec![StatsEvent::Updated(TitleStats {
                player_count: 42,
                battle_count: 7
            })]
        );
        assert_eq!(fake.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_is_reported_once() {
        let fake = FakeStats::new(vec![Err(StatusCode::SERVICE_UNAVAILABLE)]);
        let mut poller = StatsPoller::new(fake, Duration::from_secs(60));
        poller.start();

        let events = wait_for_events(&mut poller).await;
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], StatsEvent::Failed(msg) if msg.contains("503")));
    }

    #[tokio::test]
    async fn test_stop_without_start() {
        let mut poller = StatsPoller::new(FakeStats::ok(1, 1), Duration::from_secs(60));
        poller.stop();
        poller.stop();
        assert!(!poller.is_running());
        assert!(poller.poll().is_empty());
    }

    #[tokio::test]
    async fn test_restart_keeps_single_timer() {
        let fake = FakeStats::ok(5, 5);
        let mut poller = StatsPoller::new(fake.clone(), Duration::from_secs(60));

        poller.start();
        poller.start();
        assert!(poller.is_running());

        let events = wait_for_events(&mut poller).await;
        tokio::time::sleep(Duration::from_millis(30)).await;
        let late = poller.poll();

        // The first timer was aborted before its first tick ran
        assert_eq!(events.len() + late.len(), 1);
        assert_eq!(fake.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_results_after_stop_are_discarded() {
        let fake = FakeStats::ok(9, 9);
        let mut poller = StatsPoller::new(fake.clone(), Duration::from_secs(60));
        poller.start();

        // Let the immediate fetch land in the queue, then stop before polling
        for _ in 0..200 {
            if fake.calls.load(Ordering::SeqCst) > 0 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
        poller.stop();

        assert!(!poller.is_running());
        assert!(poller.poll().is_empty());
    }

    #[tokio::test]
    async fn test_repeats_on_interval() {
        let fake = FakeStats::new(vec![
            Ok(TitleStats {
                player_count: 1,
                battle_count: 0,
            }),
            Ok(TitleStats {
                player_count: 2,
                battle_count: 0,
            }),
        ]);
        let mut poller = StatsPoller::new(fake.clone(), Duration::from_millis(20));
        poller.start();

        tokio::time::sleep(Duration::from_millis(70)).await;
        let events = poller.poll();
        poller.stop();

        assert!(events.len() >= 2);
        assert_eq!(
            events[0],
            StatsEvent::Updated(TitleStats {
                player_count: 1,
                battle_count: 0
            })
        );
        assert!(events[1..].iter().all(|e| matches!(e, StatsEvent::Updated(s) if s.player_count == 2)));
    }
}
