//! Transient toast notifications.
//!
//! Toasts stack in arrival order and disappear once their lifetime has
//! elapsed. Expiry is driven by timer ticks, so every operation takes the
//! current time explicitly as milliseconds since the Unix epoch.

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

/// One visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub expires_at_ms: i64,
}

/// Upper bound on simultaneously visible toasts. Older ones are dropped first.
const MAX_VISIBLE: usize = 4;

/// Ordered stack of toasts with a fixed lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
    lifetime_ms: i64,
}

impl Toasts {
    #[must_use]
    pub const fn new(lifetime_ms: i64) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            lifetime_ms,
        }
    }

    /// Current time in the unit toasts are measured in.
    #[must_use]
    pub fn now_ms() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    /// Adds a toast and returns its id.
    ///
    /// An identical message that is still visible is refreshed instead of
    /// duplicated.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>, now_ms: i64) -> u64 {
        let message = message.into();
        let expires_at_ms = now_ms.saturating_add(self.lifetime_ms);

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|t| t.level == level && t.message == message)
        {
            existing.expires_at_ms = expires_at_ms;
            return existing.id;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            level,
            message,
            expires_at_ms,
        });

        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }

        id
    }

    /// Removes expired toasts. Returns `true` if anything was removed.
    pub fn expire(&mut self, now_ms: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.expires_at_ms > now_ms);
        before != self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.items.iter()
    }

    /// Returns the most recent toast, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&Toast> {
        self.items.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_lifetime() {
        let mut toasts = Toasts::new(4_000);
        toasts.push(ToastLevel::Error, "boom", 1_000);

        assert!(!toasts.expire(4_999));
        assert_eq!(toasts.len(), 1);
        assert!(toasts.expire(5_000));
        assert!(toasts.is_empty());
    }

    #[test]
    fn unbounded_lifetime_never_expires() {
        let mut toasts = Toasts::new(i64::MAX);
        let now = Toasts::now_ms();
        toasts.push(ToastLevel::Error, "Request failed with status 503", now);

        assert_eq!(toasts.latest().map(|t| t.expires_at_ms), Some(i64::MAX));
        assert!(!toasts.expire(now + 100));
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn repeated_message_refreshes_instead_of_stacking() {
        let mut toasts = Toasts::new(1_000);
        let first = toasts.push(ToastLevel::Error, "boom", 0);
        let second = toasts.push(ToastLevel::Error, "boom", 800);

        assert_eq!(first, second);
        assert_eq!(toasts.len(), 1);
        assert!(!toasts.expire(1_500));
    }

    #[test]
    fn oldest_toasts_are_dropped_past_the_cap() {
        let mut toasts = Toasts::new(1_000);
        for i in 0..6 {
            toasts.push(ToastLevel::Info, format!("toast {i}"), 0);
        }

        assert_eq!(toasts.len(), MAX_VISIBLE);
        assert_eq!(toasts.iter().next().map(|t| t.message.as_str()), Some("toast 2"));
        assert_eq!(toasts.latest().map(|t| t.message.as_str()), Some("toast 5"));
    }
}
