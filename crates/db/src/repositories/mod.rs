//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod mission_repo;
pub mod quest_repo;
pub mod student_repo;

pub use mission_repo::MissionRepo;
pub use quest_repo::QuestRepo;
pub use student_repo::StudentRepo;
