//! Data model shared with the host platform.
//!
//! All host-facing types serialize with `camelCase` field names to match
//! the host's wire shape. With the `schema-generation` feature enabled they
//! also derive `schemars::JsonSchema`.

pub mod record;
pub mod task;
pub mod user;

pub use record::{NameGetter, Record, RecordAttributes};
pub use task::{CreatedTask, NewTask};
pub use user::User;
