//! The follow-up button component.
//!
//! A four-state UI element rendered against a host record. On activation it
//! resolves the acting user and a display name for the record, composes a
//! task named `"Follow up: <record name>"` due the next calendar day, and
//! submits it to the host's task-creation collaborator.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use followup::button::FollowUpButton;
//! use followup::host::{MockHost, MockTaskCreator};
//! use followup::types::{Record, User};
//!
//! # async fn example() {
//! let host = Arc::new(MockHost::new().with_user(User::new("usr-1")));
//! let tasks = Arc::new(MockTaskCreator::new());
//! let button = FollowUpButton::new(
//!     Record::new().with_name("Widget X"),
//!     host,
//!     tasks,
//! );
//!
//! button.activate().await;
//! let view = button.view();
//! assert_eq!(view.label, "Follow-up created");
//! # }
//! ```

pub mod name;
pub mod view;

pub use name::{resolve_record_name, FALLBACK_NAME};
pub use view::{render, ButtonKind, ButtonView, PanelView, TaskLink};

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::host::{Clock, HostContext, SystemClock, TaskCreator};
use crate::types::{CreatedTask, NewTask, Record};

/// Prefix of every composed task name.
pub const TASK_NAME_PREFIX: &str = "Follow up: ";

/// Display state of one button instance.
///
/// Transitions: `Idle -> Loading -> {Success | Error}`; from `Error` a
/// retry re-enters `Loading`. The enum carries at most one created-task
/// reference or one error message, so success and error displays are
/// mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonState {
    /// No activation yet, or host just mounted the view.
    Idle,
    /// A task-creation call is in flight; new activations are no-ops.
    Loading,
    /// The task was created; holds the handle used for display.
    Success(CreatedTask),
    /// The flow failed; holds the message shown in the error panel.
    Error(String),
}

impl ButtonState {
    /// Whether a task-creation call is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// A stateful follow-up button bound to one host record.
///
/// Each instance owns its state independently; nothing is shared across
/// instances. All host collaborators are injected at construction time, so
/// tests can substitute fakes without touching process-wide state.
pub struct FollowUpButton {
    record: Record,
    host: Arc<dyn HostContext>,
    tasks: Arc<dyn TaskCreator>,
    clock: Arc<dyn Clock>,
    state: Mutex<ButtonState>,
}

impl FollowUpButton {
    /// Create a button for a record with the given host collaborators.
    pub fn new(record: Record, host: Arc<dyn HostContext>, tasks: Arc<dyn TaskCreator>) -> Self {
        Self {
            record,
            host,
            tasks,
            clock: Arc::new(SystemClock),
            state: Mutex::new(ButtonState::Idle),
        }
    }

    /// Replace the clock used for due-date computation.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Snapshot of the current display state.
    pub fn state(&self) -> ButtonState {
        self.state.lock().clone()
    }

    /// Render the current state into a view description.
    pub fn view(&self) -> ButtonView {
        view::render(&self.state())
    }

    /// Run the activation flow: resolve user and record name, compose the
    /// task, submit it, and settle into `Success` or `Error`.
    ///
    /// A call while a previous activation is still in flight is a no-op;
    /// the guard is a check-and-set under the state lock, so two
    /// overlapped calls on a shared instance submit exactly one task.
    /// Every failure ends in the `Error` state; nothing propagates to
    /// the host.
    pub async fn activate(&self) {
        {
            let mut state = self.state.lock();
            if state.is_loading() {
                return;
            }
            // Entering Loading discards any prior error or task reference.
            *state = ButtonState::Loading;
        }

        let next = match self.create_follow_up().await {
            Ok(task) => ButtonState::Success(task),
            Err(err) => {
                error!(error = %err, "failed to create follow-up task");
                ButtonState::Error(err.user_message())
            },
        };
        *self.state.lock() = next;
    }

    /// Retry after a failure.
    ///
    /// Re-runs the full resolution-and-submission flow from user lookup;
    /// it never replays a previously composed request.
    pub async fn retry(&self) {
        self.activate().await;
    }

    async fn create_follow_up(&self) -> Result<CreatedTask> {
        let user = self.host.current_user().ok_or(Error::MissingUser)?;

        let record_name = name::resolve_record_name(&self.record, self.host.as_ref());
        let task_name = format!("{TASK_NAME_PREFIX}{record_name}");
        let due_date = self
            .clock
            .today()
            .succ_opt()
            .ok_or_else(|| Error::internal("due date out of calendar range"))?;

        debug!(task = %task_name, due = %due_date, "creating follow-up task");

        let request = NewTask::assigned_to(&task_name, user.id, self.record.clone(), due_date);
        let created = self.tasks.create_task(request).await?;

        // Display always uses the locally composed name; a host that
        // normalizes names only contributes the id.
        Ok(CreatedTask::new(created.id, task_name))
    }
}

impl fmt::Debug for FollowUpButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FollowUpButton")
            .field("record", &self.record)
            .field("state", &*self.state.lock())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::host::{FixedClock, MockHost, MockTaskCreator};
    use crate::types::User;

    fn fixed_clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(NaiveDate::from_ymd_opt(2025, 9, 16).unwrap()))
    }

    fn button_with(
        record: Record,
        host: Arc<MockHost>,
        tasks: Arc<MockTaskCreator>,
    ) -> FollowUpButton {
        FollowUpButton::new(record, host, tasks).with_clock(fixed_clock())
    }

    #[tokio::test]
    async fn test_successful_activation_reaches_success() {
        let host = Arc::new(MockHost::new().with_user(User::new("usr-1")));
        let tasks = Arc::new(MockTaskCreator::new());
        let button = button_with(Record::new().with_name("Widget X"), host, tasks.clone());

        assert_eq!(button.state(), ButtonState::Idle);
        button.activate().await;

        match button.state() {
            ButtonState::Success(task) => assert_eq!(task.name, "Follow up: Widget X"),
            other => panic!("expected success, got {other:?}"),
        }
        assert_eq!(tasks.call_count(), 1);
    }

    #[tokio::test]
    async fn test_request_carries_assignee_and_next_day_due_date() {
        let host = Arc::new(MockHost::new().with_user(User::new("usr-6001234")));
        let tasks = Arc::new(MockTaskCreator::new());
        let button = button_with(Record::new().with_name("Widget X"), host, tasks.clone());

        button.activate().await;

        let calls = tasks.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].assigned_to_users, vec!["usr-6001234".to_string()]);
        assert_eq!(calls[0].due_date.to_string(), "2025-09-17");
        assert_eq!(calls[0].name, "Follow up: Widget X");
    }

    #[tokio::test]
    async fn test_missing_user_aborts_before_building_a_task() {
        let host = Arc::new(MockHost::new());
        let tasks = Arc::new(MockTaskCreator::new());
        let button = button_with(Record::new().with_name("Widget X"), host, tasks.clone());

        button.activate().await;

        assert_eq!(
            button.state(),
            ButtonState::Error("Unable to get current user".to_string())
        );
        assert_eq!(tasks.call_count(), 0);
    }

    #[tokio::test]
    async fn test_collaborator_failure_message_is_shown_verbatim() {
        let host = Arc::new(MockHost::new().with_user(User::new("usr-1")));
        let tasks = Arc::new(MockTaskCreator::new().with_failure("quota exceeded"));
        let button = button_with(Record::new().with_name("X"), host, tasks);

        button.activate().await;

        assert_eq!(button.state(), ButtonState::Error("quota exceeded".to_string()));
    }

    #[tokio::test]
    async fn test_display_name_ignores_collaborator_echo() {
        let host = Arc::new(MockHost::new().with_user(User::new("usr-1")));
        let tasks = Arc::new(MockTaskCreator::new().with_echoed_name("7781", "FOLLOW UP: WIDGET"));
        let button = button_with(Record::new().with_name("Widget X"), host, tasks);

        button.activate().await;

        match button.state() {
            ButtonState::Success(task) => {
                assert_eq!(task.id, "7781");
                assert_eq!(task.name, "Follow up: Widget X");
            },
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_retry_clears_the_error_and_can_succeed() {
        let host = Arc::new(MockHost::new().with_user(User::new("usr-1")));
        let tasks = Arc::new(MockTaskCreator::new().with_failure("transient outage"));
        let button = button_with(Record::new().with_name("X"), host, tasks.clone());

        button.activate().await;
        assert_eq!(button.state(), ButtonState::Error("transient outage".to_string()));

        button.retry().await;
        assert!(matches!(button.state(), ButtonState::Success(_)));
        assert_eq!(tasks.call_count(), 2);
    }

    #[tokio::test]
    async fn test_retry_re_resolves_the_user_from_the_host() {
        let host = Arc::new(MockHost::new());
        let tasks = Arc::new(MockTaskCreator::new());
        let button = button_with(Record::new().with_name("X"), host.clone(), tasks.clone());

        button.activate().await;
        assert_eq!(tasks.call_count(), 0);

        // The host gains an identity between attempts; retry must observe it.
        host.set_user(Some(User::new("usr-late")));
        button.retry().await;

        assert!(matches!(button.state(), ButtonState::Success(_)));
        assert_eq!(tasks.calls()[0].assigned_to_users, vec!["usr-late".to_string()]);
    }
}
