//! Host boundary traits.
//!
//! The host platform owns user identity, record data, the page the view is
//! rendered into, and task persistence. Each of those is modeled as a trait
//! the embedding host implements, so the component never reads ambient
//! global state and tests can substitute fakes without touching
//! process-wide state.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::types::{CreatedTask, NewTask, User};

pub mod mock;

pub use mock::{MockHost, MockTaskCreator};

/// Ambient host state, made explicit.
///
/// Implementations must be cheap to query; the component reads them on
/// every activation rather than caching, so a retry always observes the
/// host's current state.
pub trait HostContext: Send + Sync {
    /// The acting user, or `None` when the host has no current identity.
    ///
    /// Absence is a fatal precondition for the action: activation fails
    /// with [`Error::MissingUser`](crate::Error::MissingUser) before any
    /// task is built.
    fn current_user(&self) -> Option<User>;

    /// The current page or document title, if the rendering surface has
    /// one. Used only as a last-resort name source.
    fn document_title(&self) -> Option<String>;

    /// The host application's bare default window title (its branding
    /// string with no record name in it).
    ///
    /// A document title equal to this value is treated as carrying no
    /// record name. Returns `None` when the host has no such fixed title,
    /// in which case any non-empty document title is used.
    fn bare_page_title(&self) -> Option<String> {
        None
    }
}

/// The task-creation collaborator, the sole persistence boundary.
///
/// Accepts a fully composed request and returns, asynchronously, either a
/// handle to the created task or a failure whose message is shown to the
/// user verbatim. The call runs to completion or failure; the component
/// offers no cancellation and enforces no local timeout.
#[async_trait]
pub trait TaskCreator: Send + Sync {
    /// Persist a new task in the host system.
    async fn create_task(&self, task: NewTask) -> Result<CreatedTask>;
}

/// Wall-clock source for due-date computation.
///
/// Abstracted so tests can pin the calendar date; production hosts use
/// [`SystemClock`].
pub trait Clock: Send + Sync {
    /// Today's date in the host's local calendar.
    fn today(&self) -> NaiveDate;
}

/// [`Clock`] backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// [`Clock`] pinned to a fixed date, for tests and reproducible demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(
    /// The pinned calendar date.
    pub NaiveDate,
);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
