//! Timed events shown on the title screen.
//!
//! Events are configured as time windows. The title screen asks the
//! [`EventManager`] once, at setup, whether one of them is running.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A time-bounded promotional event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedEvent {
    /// Display name
    pub name: String,
    /// Texture key of the event banner, if it has one
    #[serde(default)]
    pub banner_key: Option<String>,
    /// Inclusive start
    pub start: DateTime<Utc>,
    /// Exclusive end
    pub end: DateTime<Utc>,
}

impl TimedEvent {
    /// Whether `now` falls inside the event window
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now < self.end
    }

    /// Time left until the event ends, clamped at zero
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.end - now).max(Duration::zero())
    }
}

/// Source of the currently running event
#[derive(Debug, Clone, Default)]
pub struct EventManager {
    events: Vec<TimedEvent>,
}

impl EventManager {
    pub fn new(events: Vec<TimedEvent>) -> Self {
        Self { events }
    }

    /// First event whose window contains `now`
    pub fn active_event(&self, now: DateTime<Utc>) -> Option<&TimedEvent> {
        self.events.iter().find(|e| e.is_active(now))
    }
}

/// Format a countdown as "{d}d {h}h {m}m {s}s". Zero units are kept.
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    format!("{}d {}h {}m {}s", days, hours, minutes, seconds)
}
