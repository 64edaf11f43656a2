pub mod mission;
pub mod quest;
pub mod student;
