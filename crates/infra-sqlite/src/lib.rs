// Tango Infrastructure - SQLite Adapter
// Implements the core repository and dashboard ports over sqlx

mod activity_repository;
mod connection;
mod dashboard;
mod error_map;
mod group_repository;
mod migration;
mod session_repository;
mod word_repository;

pub use activity_repository::SqliteStudyActivityRepository;
pub use connection::create_pool;
pub use dashboard::SqliteDashboard;
pub use group_repository::SqliteGroupRepository;
pub use migration::run_migrations;
pub use session_repository::SqliteStudySessionRepository;
pub use word_repository::SqliteWordRepository;

// Note: sqlx::Error conversion is wrapped in error_map::map_sqlx_error
// (cannot implement From<sqlx::Error> for AppError here - orphan rules)
