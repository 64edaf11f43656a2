//! Response bodies shared by the entity handlers.
//!
//! Creates answer with only the new identifier under its entity key
//! (`{"QuestID": 1}`); updates and deletes answer with a short
//! acknowledgment message.

use serde::Serialize;
use task_tracker_core::types::DbId;

/// `{ "message": "..." }` acknowledgment for updates and deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestCreated {
    #[serde(rename = "QuestID")]
    pub quest_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct StudentCreated {
    #[serde(rename = "StudentID")]
    pub student_id: DbId,
}

#[derive(Debug, Serialize)]
pub struct MissionCreated {
    #[serde(rename = "MissionID")]
    pub mission_id: DbId,
}
