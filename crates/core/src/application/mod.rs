// Application Layer - Thin services between callers and stores
//
// Each service validates caller-supplied fields where the entity requires
// it, then delegates to its port. Stores assume valid input.

pub mod activities;
pub mod dashboard;
pub mod groups;
pub mod sessions;
pub mod words;

// Re-exports
pub use activities::StudyActivityService;
pub use dashboard::DashboardService;
pub use groups::GroupService;
pub use sessions::StudySessionService;
pub use words::WordService;
