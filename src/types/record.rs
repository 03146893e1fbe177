//! The host record a follow-up task is linked to.
//!
//! Host platforms hand records to extension views with no schema guarantee:
//! depending on the call site the human-readable name may live in structured
//! attributes, a flat field, a title, or only be reachable through a
//! host-provided getter. [`Record`] makes each known source an explicit
//! optional field so the resolution order stays a visible, testable contract
//! instead of dynamic property probing.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "schema-generation")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Host-invoked callback returning a record name, standing in for a
/// callable `getName()` on the host object.
pub type NameGetter = Arc<dyn Fn() -> Option<String> + Send + Sync>;

/// Structured attributes block some hosts nest the record name under.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema-generation", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecordAttributes {
    /// Record name inside the structured attributes block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A record (feature, idea, requirement, ...) passed in by the host.
///
/// All fields are optional; the component tolerates any subset being
/// missing. Unknown fields in host JSON are ignored on deserialization.
///
/// # Example
///
/// ```rust
/// use followup::types::Record;
///
/// let record = Record::new()
///     .with_reference_num("FEAT-42")
///     .with_title("Widget X");
/// assert_eq!(record.title.as_deref(), Some("Widget X"));
/// ```
#[derive(Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema-generation", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Structured attributes block (`attributes.name`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<RecordAttributes>,

    /// Flat name field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Title field used by some record kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Display name used by some record kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Subject field used by request-like record kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Host-assigned reference number (for example `FEAT-42`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_num: Option<String>,

    /// Optional host-supplied name getter; never serialized.
    #[serde(skip)]
    #[cfg_attr(feature = "schema-generation", schemars(skip))]
    name_getter: Option<NameGetter>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the structured attributes name.
    pub fn with_attribute_name(mut self, name: impl Into<String>) -> Self {
        self.attributes = Some(RecordAttributes {
            name: Some(name.into()),
        });
        self
    }

    /// Set the flat name field.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the title field.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the display name field.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set the subject field.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the reference number.
    pub fn with_reference_num(mut self, reference_num: impl Into<String>) -> Self {
        self.reference_num = Some(reference_num.into());
        self
    }

    /// Attach a host-supplied name getter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use followup::types::Record;
    ///
    /// let record = Record::new().with_name_getter(|| Some("Widget X".to_string()));
    /// assert_eq!(record.getter_name().as_deref(), Some("Widget X"));
    /// ```
    pub fn with_name_getter<F>(mut self, getter: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.name_getter = Some(Arc::new(getter));
        self
    }

    /// Name from the structured attributes block, if present.
    pub fn attribute_name(&self) -> Option<String> {
        self.attributes.as_ref().and_then(|a| a.name.clone())
    }

    /// Name produced by the host-supplied getter, if one is attached.
    pub fn getter_name(&self) -> Option<String> {
        self.name_getter.as_ref().and_then(|getter| getter())
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("attributes", &self.attributes)
            .field("name", &self.name)
            .field("title", &self.title)
            .field("display_name", &self.display_name)
            .field("subject", &self.subject)
            .field("reference_num", &self.reference_num)
            .field("name_getter", &self.name_getter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
