//! Mock host collaborators for development and testing.
//!
//! These implementations return configurable, scripted results so the
//! activation flow can be exercised without a live host platform.
//! **Never use in production.**
//!
//! # Example
//!
//! ```rust
//! use followup::host::{HostContext, MockHost};
//! use followup::types::User;
//!
//! let host = MockHost::new()
//!     .with_user(User::new("usr-1"))
//!     .with_document_title("Widget X | Product");
//! assert!(host.current_user().is_some());
//! ```

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};

use super::{HostContext, TaskCreator};
use crate::error::{Error, Result};
use crate::types::{CreatedTask, NewTask, User};

/// Mock [`HostContext`] with mutable state.
///
/// The user and document title can be changed after construction, so tests
/// can model a host whose ambient state moves between activations (for
/// example: no signed-in user on the first attempt, one on retry).
#[derive(Debug, Default)]
pub struct MockHost {
    user: RwLock<Option<User>>,
    document_title: RwLock<Option<String>>,
    bare_page_title: Option<String>,
}

impl MockHost {
    /// Create a mock host with no user and no document title.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current user.
    pub fn with_user(self, user: User) -> Self {
        *self.user.write() = Some(user);
        self
    }

    /// Set the document title.
    pub fn with_document_title(self, title: impl Into<String>) -> Self {
        *self.document_title.write() = Some(title.into());
        self
    }

    /// Set the host's bare default window title.
    pub fn with_bare_page_title(mut self, title: impl Into<String>) -> Self {
        self.bare_page_title = Some(title.into());
        self
    }

    /// Replace the current user after construction.
    pub fn set_user(&self, user: Option<User>) {
        *self.user.write() = user;
    }

    /// Replace the document title after construction.
    pub fn set_document_title(&self, title: Option<String>) {
        *self.document_title.write() = title;
    }
}

impl HostContext for MockHost {
    fn current_user(&self) -> Option<User> {
        self.user.read().clone()
    }

    fn document_title(&self) -> Option<String> {
        self.document_title.read().clone()
    }

    fn bare_page_title(&self) -> Option<String> {
        self.bare_page_title.clone()
    }
}

/// One scripted response for [`MockTaskCreator`].
#[derive(Debug, Clone)]
enum Scripted {
    /// Succeed with an explicit id and echoed name.
    Success { id: String, name: Option<String> },
    /// Fail with the given message.
    Failure(String),
}

/// Mock [`TaskCreator`] with scripted responses and a call log.
///
/// With no script queued, every call succeeds with a generated id
/// (`task-1`, `task-2`, ...) and echoes the requested name. Scripted
/// responses are consumed in order, then the default behavior resumes:
/// so `with_failure("boom")` fails the first call and lets a retry
/// succeed.
#[derive(Debug, Default)]
pub struct MockTaskCreator {
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<NewTask>>,
    next_id: Mutex<u64>,
}

impl MockTaskCreator {
    /// Create a creator that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a failure with the given message.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.script
            .lock()
            .push_back(Scripted::Failure(message.into()));
        self
    }

    /// Queue a success with an explicit id, echoing the requested name.
    pub fn with_task_id(self, id: impl Into<String>) -> Self {
        self.script.lock().push_back(Scripted::Success {
            id: id.into(),
            name: None,
        });
        self
    }

    /// Queue a success whose echoed name differs from the request, as a
    /// host that normalizes task names would.
    pub fn with_echoed_name(self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.script.lock().push_back(Scripted::Success {
            id: id.into(),
            name: Some(name.into()),
        });
        self
    }

    /// Requests received so far, in order.
    pub fn calls(&self) -> Vec<NewTask> {
        self.calls.lock().clone()
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl TaskCreator for MockTaskCreator {
    async fn create_task(&self, task: NewTask) -> Result<CreatedTask> {
        self.calls.lock().push(task.clone());

        let scripted = self.script.lock().pop_front();
        match scripted {
            Some(Scripted::Failure(message)) => Err(Error::task_creation(message)),
            Some(Scripted::Success { id, name }) => {
                Ok(CreatedTask::new(id, name.unwrap_or(task.name)))
            },
            None => {
                let mut next_id = self.next_id.lock();
                *next_id += 1;
                Ok(CreatedTask::new(format!("task-{}", *next_id), task.name))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::types::Record;

    fn request(name: &str) -> NewTask {
        NewTask::assigned_to(
            name,
            "usr-1",
            Record::new(),
            NaiveDate::from_ymd_opt(2025, 9, 17).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_default_behavior_succeeds_with_generated_ids() {
        let creator = MockTaskCreator::new();
        let first = creator.create_task(request("a")).await.unwrap();
        let second = creator.create_task(request("b")).await.unwrap();
        assert_eq!(first.id, "task-1");
        assert_eq!(second.id, "task-2");
        assert_eq!(creator.call_count(), 2);
    }

    #[tokio::test]
    async fn test_scripted_failure_is_consumed_once() {
        let creator = MockTaskCreator::new().with_failure("quota exceeded");
        let err = creator.create_task(request("a")).await.unwrap_err();
        assert_eq!(err.user_message(), "quota exceeded");
        assert!(creator.create_task(request("a")).await.is_ok());
    }

    #[tokio::test]
    async fn test_echoed_name_override() {
        let creator = MockTaskCreator::new().with_echoed_name("9", "NORMALIZED");
        let created = creator.create_task(request("Follow up: X")).await.unwrap();
        assert_eq!(created.name, "NORMALIZED");
    }

    #[test]
    fn test_mock_host_state_is_mutable() {
        let host = MockHost::new();
        assert!(host.current_user().is_none());
        host.set_user(Some(User::new("usr-9")));
        assert_eq!(host.current_user().unwrap().id, "usr-9");
    }
}
