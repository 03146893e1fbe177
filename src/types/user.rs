//! The acting user identity supplied by the host.

#[cfg(feature = "schema-generation")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The current user as reported by the host platform.
///
/// The lifecycle of this identity is fully owned by the host; the component
/// only reads the id to assign the created task.
///
/// # Example
///
/// ```rust
/// use followup::types::User;
///
/// let user = User::new("usr-6001234").with_name("Dana Product");
/// assert_eq!(user.id, "usr-6001234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema-generation", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Host-assigned identifier, opaque to this component.
    pub id: String,

    /// Optional display name; not used by the activation flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    /// Create a user from a host identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
