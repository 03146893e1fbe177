//! # followup
//!
//! A follow-up task button extension for product-management host
//! platforms, with typed host bindings.
//!
//! The crate implements a single UI component: clicking it creates a
//! follow-up task assigned to the current user, due the next day, linked
//! to the record the button is rendered against. Everything the host owns
//! (user identity, record data, task persistence, the rendering surface)
//! is expressed as a trait the embedding host implements, so the component
//! never reads ambient global state and the whole flow is testable with
//! fakes.
//!
//! ## Quick start
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
//!
//! let button = FollowUpButton::new(
//!     Record::new().with_name("Widget X"),
//!     host,
//!     tasks.clone(),
//! );
//!
//! button.activate().await;
//!
//! let view = button.view();
//! assert_eq!(view.label, "Follow-up created");
//! assert_eq!(tasks.calls()[0].name, "Follow up: Widget X");
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`button`]: the component itself, covering the state machine, name
//!   resolution, and pure rendering.
//! - [`host`]: boundary traits (`HostContext`, `TaskCreator`, `Clock`)
//!   plus mock implementations for development and testing.
//! - [`types`]: the data model shared with the host (record, user, task
//!   wire types).
//! - [`extension`]: the named extension-point registry hosts mount views
//!   through.
//! - [`error`]: the crate error type; every failure ends in the button's
//!   error display state, never an uncaught error in the host.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod button;
pub mod error;
pub mod extension;
pub mod host;
pub mod types;

pub use button::{ButtonState, ButtonView, FollowUpButton};
pub use error::{Error, Result};
pub use extension::{ExtensionRegistry, FOLLOW_UP_BUTTON_VIEW};
pub use types::{CreatedTask, NewTask, Record, User};
