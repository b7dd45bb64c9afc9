//! Short-lived user notifications.

use std::time::{Duration, Instant};

use tracing::info;

/// Android's short toast length.
pub const SHORT_TOAST: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

/// Holds at most one visible toast; showing a new one replaces it.
#[derive(Debug, Clone)]
pub struct Notifications {
    current: Option<Toast>,
    duration: Duration,
}

impl Notifications {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        info!(%message, "notification");
        self.current = Some(Toast {
            message,
            shown_at: now,
        });
    }

    /// Message visible at `now`, if any.
    pub fn active(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|toast| now.saturating_duration_since(toast.shown_at) < self.duration)
            .map(|toast| toast.message.as_str())
    }

    /// Forget an expired toast.
    pub fn prune(&mut self, now: Instant) {
        if self.active(now).is_none() {
            self.current = None;
        }
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(SHORT_TOAST)
    }
}
