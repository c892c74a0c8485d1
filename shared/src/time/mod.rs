//! Injectable time source for domain code that needs the current UTC instant.
//!
//! Domain types never read the system clock directly; they take a
//! [`DateTimeProvider`] so production code runs against
//! [`SystemDateTimeProvider`] while tests drive time deterministically with
//! [`FixedDateTimeProvider`].

use chrono::{DateTime, Utc};

/// Trait for obtaining the current UTC instant
pub trait DateTimeProvider: Send + Sync {
    /// Returns the current instant in UTC
    fn utc_now(&self) -> DateTime<Utc>;
}

/// Production time source backed by the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateTimeProvider;

impl DateTimeProvider for SystemDateTimeProvider {
    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic time source that always reports the same instant
///
/// Intended for tests that need exact temporal assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDateTimeProvider {
    now: DateTime<Utc>,
}

impl FixedDateTimeProvider {
    /// Creates a provider pinned to the given instant
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Returns a provider pinned to the given offset from this one's instant
    pub fn offset(&self, delta: chrono::Duration) -> Self {
        Self {
            now: self.now + delta,
        }
    }
}

impl DateTimeProvider for FixedDateTimeProvider {
    fn utc_now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_system_provider_tracks_wall_clock() {
        let provider = SystemDateTimeProvider;
        let before = Utc::now();
        let reported = provider.utc_now();
        let after = Utc::now();

        assert!(reported >= before);
        assert!(reported <= after);
    }

    #[test]
    fn test_fixed_provider_is_stable() {
        let instant = Utc::now();
        let provider = FixedDateTimeProvider::new(instant);

        assert_eq!(provider.utc_now(), instant);
        assert_eq!(provider.utc_now(), provider.utc_now());
    }

    #[test]
    fn test_fixed_provider_offset() {
        let instant = Utc::now();
        let provider = FixedDateTimeProvider::new(instant);
        let later = provider.offset(Duration::minutes(10));

        assert_eq!(later.utc_now(), instant + Duration::minutes(10));
        // The base provider is unaffected
        assert_eq!(provider.utc_now(), instant);
    }
}
