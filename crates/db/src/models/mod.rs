//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!
//! JSON field names follow the public wire contract (`QuestID`, `QuestTitle`,
//! ...) while columns stay snake_case.

pub mod mission;
pub mod quest;
pub mod student;
