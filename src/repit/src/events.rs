use chrono::NaiveDate;
use repit_types::Exercise;
use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEventKind {
    RepsChanged,
    GoalChanged,
    PolicyChanged,
}

/// Notification that something changed on a given day. Carries no data
/// beyond the key; consumers re-query what they care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEvent {
    pub kind: LogEventKind,
    pub exercise: Option<Exercise>,
    pub date: NaiveDate,
}

/// On-change boundary for display surfaces: queries stay pull-based,
/// and this bus only says when a fresh pull is worth it.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<LogEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LogEvent> {
        self.tx.subscribe()
    }

    /// Publishing with no subscribers is a no-op, not an error.
    pub fn publish(&self, event: LogEvent) {
        let _ = self.tx.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
