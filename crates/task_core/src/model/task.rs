use crate::error::TaskError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub status: Status,
    pub created_at: String,
    pub updated_at: String,
}

/// Lifecycle label for a task. A flat set, not a workflow: any value is
/// reachable from any other via an explicit mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Parse a user-supplied status token. Accepts the hyphenated
    /// `in-progress` spelling on input; the canonical token is always the
    /// underscore form.
    pub fn parse(raw: &str) -> Result<Self, TaskError> {
        match raw.trim() {
            "todo" => Ok(Self::Todo),
            "in_progress" | "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(TaskError::validation(format!(
                "unknown status '{other}' (expected todo, in_progress or done)"
            ))),
        }
    }
}
