// Time Provider Port (for testability)

/// Time provider interface (allows pinning timestamps in tests)
pub trait TimeProvider: Send + Sync {
    /// Current UTC time as an ISO-8601 string
    fn now_iso(&self) -> String;
}

/// System clock (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_iso(&self) -> String {
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Fixed clock returning one pinned timestamp (tests)
pub struct FixedTimeProvider(pub String);

impl TimeProvider for FixedTimeProvider {
    fn now_iso(&self) -> String {
        self.0.clone()
    }
}
