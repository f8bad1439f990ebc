use std::time::{Duration, Instant};

use shared::domain::Severity;
use tracing::{error, info, warn};

pub type NotificationId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
}

/// Transient, self-dismissing notifications.
///
/// Entries leave the center exactly once: either through [`dismiss`] or when
/// [`expire`] observes that their lifetime has elapsed.
///
/// [`dismiss`]: NotificationCenter::dismiss
/// [`expire`]: NotificationCenter::expire
#[derive(Debug)]
pub struct NotificationCenter {
    lifetime: Duration,
    next_id: NotificationId,
    active: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            next_id: 1,
            active: Vec::new(),
        }
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.push_at(message, severity, Instant::now())
    }

    pub fn push_at(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: Instant,
    ) -> NotificationId {
        let message = message.into();
        match severity {
            Severity::Danger => error!(severity = severity.label(), "{message}"),
            Severity::Warning => warn!(severity = severity.label(), "{message}"),
            Severity::Info | Severity::Success => info!(severity = severity.label(), "{message}"),
        }

        let id = self.next_id;
        self.next_id += 1;
        self.active.push(Notification {
            id,
            message,
            severity,
            created_at: now,
        });
        id
    }

    /// Active notifications in creation order.
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id != id);
        before != self.active.len()
    }

    /// Drops every notification whose lifetime has elapsed; returns how many.
    pub fn expire(&mut self, now: Instant) -> usize {
        let lifetime = self.lifetime;
        let before = self.active.len();
        self.active
            .retain(|n| now.saturating_duration_since(n.created_at) < lifetime);
        before - self.active.len()
    }

    /// Time until the oldest notification expires, for repaint scheduling.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.active
            .iter()
            .map(|n| {
                self.lifetime
                    .saturating_sub(now.saturating_duration_since(n.created_at))
            })
            .min()
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.active)
    }
}

#[cfg(test)]
#[path = "tests/notifications_tests.rs"]
mod tests;
