use serde::{Deserialize, Serialize};

/// Workflow state of a task. Ordered as a simple forward workflow
/// (Before Start → Ongoing → Completed) but any transition is allowed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    #[serde(rename = "Before Start")]
    BeforeStart,
    #[serde(rename = "Ongoing")]
    Ongoing,
    #[serde(rename = "Completed")]
    Completed,
}

impl Status {
    pub fn st_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "before start" | "before-start" | "before" => Some(Self::BeforeStart),
            "ongoing" => Some(Self::Ongoing),
            "completed" | "done" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn st_as_str(&self) -> &'static str {
        match self {
            Status::BeforeStart => "Before Start",
            Status::Ongoing => "Ongoing",
            Status::Completed => "Completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Status::Completed)
    }
}
