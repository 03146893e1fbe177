//! Task wire types exchanged with the task-creation collaborator.

use chrono::NaiveDate;
#[cfg(feature = "schema-generation")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Record;

/// A task-creation request built by the button on activation.
///
/// The due date is a calendar date with no time component; `serde`
/// serializes it as `YYYY-MM-DD`, the form the host persistence API
/// expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema-generation", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Task name, composed as `"Follow up: <record name>"`.
    pub name: String,

    /// Assignee ids. The host task model assigns a list even when a
    /// single user is the assignee.
    pub assigned_to_users: Vec<String>,

    /// The record the task is linked to.
    pub record: Record,

    /// Calendar due date (no time-of-day, no timezone).
    pub due_date: NaiveDate,
}

impl NewTask {
    /// Create a request assigned to a single user.
    pub fn assigned_to(
        name: impl Into<String>,
        user_id: impl Into<String>,
        record: Record,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            assigned_to_users: vec![user_id.into()],
            record,
            due_date,
        }
    }
}

/// Handle to a task the collaborator persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema-generation", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreatedTask {
    /// Host-assigned task id, opaque to this component.
    pub id: String,

    /// Task name as the host stored it. Displayed name always comes from
    /// the locally composed request, not from this echo.
    pub name: String,
}

impl CreatedTask {
    /// Create a handle from host id and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Path to the task's detail view in the host application.
    ///
    /// # Example
    ///
    /// ```rust
    /// use followup::types::CreatedTask;
    ///
    /// let task = CreatedTask::new("7781", "Follow up: Widget X");
    /// assert_eq!(task.detail_path(), "/tasks/7781");
    /// ```
    pub fn detail_path(&self) -> String {
        format!("/tasks/{}", self.id)
    }
}
