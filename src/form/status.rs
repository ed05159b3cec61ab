use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Transient message shown in the status area. Banners expire a fixed delay
/// after being posted, whatever the user does in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub kind: StatusKind,
    pub text: String,
    pub posted_at: Instant,
}

impl StatusBanner {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self::posted_at(kind, text, Instant::now())
    }

    pub fn posted_at(kind: StatusKind, text: impl Into<String>, posted_at: Instant) -> Self {
        Self {
            kind,
            text: text.into(),
            posted_at,
        }
    }

    pub fn is_expired(&self, now: Instant, delay: Duration) -> bool {
        now.saturating_duration_since(self.posted_at) >= delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_expires_after_delay() {
        let start = Instant::now();
        let banner = StatusBanner::posted_at(StatusKind::Success, "saved", start);
        let delay = Duration::from_secs(3);
        assert!(!banner.is_expired(start, delay));
        assert!(!banner.is_expired(start + Duration::from_millis(2999), delay));
        assert!(banner.is_expired(start + delay, delay));
    }
}
