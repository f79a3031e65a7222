// Port Layer - Interfaces for external dependencies

pub mod activity_repository;
pub mod dashboard;
pub mod group_repository;
pub mod session_repository;
pub mod time_provider;
pub mod word_repository;

// Re-exports
pub use activity_repository::StudyActivityRepository;
pub use dashboard::DashboardReader;
pub use group_repository::GroupRepository;
pub use session_repository::StudySessionRepository;
pub use time_provider::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
pub use word_repository::WordRepository;
