//! Recency window for the "Just released!" flag.

use chrono::{DateTime, Duration, Utc};

/// Default window length in days.
pub const DEFAULT_RECENCY_DAYS: i64 = 30;

/// Trailing window after release during which a shoe counts as new.
///
/// The window is a fixed duration, not a calendar month. The boundary is
/// exclusive: a shoe released exactly `duration` before `now` is no longer
/// new. Release dates in the future are always inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow {
    duration: Duration,
}

impl RecencyWindow {
    /// Create a window of the given length.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Create a window of `days` days.
    ///
    /// Returns `None` when `days` does not fit in a [`Duration`].
    pub fn try_days(days: i64) -> Option<Self> {
        Duration::try_days(days).map(Self::new)
    }

    /// Window length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether `release_date` is recent relative to `now`.
    pub fn is_new(&self, release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(release_date) < self.duration
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::new(Duration::days(DEFAULT_RECENCY_DAYS))
    }
}

/// Check a release date against the default 30-day window.
pub fn is_new_shoe(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    RecencyWindow::default().is_new(release_date, now)
}
