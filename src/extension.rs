//! Host extension-point registration.
//!
//! Host platforms mount extension views by name, passing `{record, fields}`
//! props and an `{identifier, settings}` environment at render time. The
//! [`ExtensionRegistry`] maps extension-point names to view factories;
//! [`register_follow_up_button`] wires the follow-up button under its
//! extension point, consuming only the `record` prop.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::button::FollowUpButton;
use crate::error::{Error, Result};
use crate::host::{HostContext, TaskCreator};
use crate::types::Record;

/// Extension-point name the follow-up button is registered under.
pub const FOLLOW_UP_BUTTON_VIEW: &str = "followUpButton";

/// Props the host passes to an extension view at render time.
///
/// Unknown props are tolerated; the follow-up button consumes only
/// `record`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewProps {
    /// The record the view is rendered against.
    pub record: Option<Record>,

    /// Field names the host chose to expose; unused by this component.
    pub fields: Vec<String>,
}

impl ViewProps {
    /// Props carrying just a record.
    pub fn for_record(record: Record) -> Self {
        Self {
            record: Some(record),
            ..Self::default()
        }
    }
}

/// Environment the host passes alongside the props.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewEnvironment {
    /// Identifier of the installed extension.
    pub identifier: String,

    /// Extension settings as configured in the host; unused by this
    /// component.
    pub settings: serde_json::Value,
}

type ViewFactory = Box<dyn Fn(ViewProps, ViewEnvironment) -> FollowUpButton + Send + Sync>;

/// Registry of extension views keyed by extension-point name.
#[derive(Default)]
pub struct ExtensionRegistry {
    views: HashMap<String, ViewFactory>,
}

impl ExtensionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view factory under an extension-point name.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the name is already registered.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<()>
    where
        F: Fn(ViewProps, ViewEnvironment) -> FollowUpButton + Send + Sync + 'static,
    {
        let name = name.into();
        if self.views.contains_key(&name) {
            return Err(Error::validation(format!(
                "view '{name}' is already registered"
            )));
        }
        self.views.insert(name, Box::new(factory));
        Ok(())
    }

    /// Instantiate the view registered under `name` with host-supplied
    /// props and environment.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no view is registered under `name`.
    pub fn mount(
        &self,
        name: &str,
        props: ViewProps,
        env: ViewEnvironment,
    ) -> Result<FollowUpButton> {
        let factory = self
            .views
            .get(name)
            .ok_or_else(|| Error::not_found(format!("no view registered for '{name}'")))?;
        Ok(factory(props, env))
    }

    /// Names of all registered extension points.
    pub fn registered_views(&self) -> Vec<&str> {
        self.views.keys().map(String::as_str).collect()
    }
}

impl std::fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionRegistry")
            .field("views", &self.registered_views())
            .finish()
    }
}

/// Register the follow-up button under [`FOLLOW_UP_BUTTON_VIEW`].
///
/// The factory consumes only the `record` prop; a missing record mounts
/// the button against an empty record, which resolves to the literal
/// fallback name.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use followup::extension::{
///     register_follow_up_button, ExtensionRegistry, ViewEnvironment, ViewProps,
///     FOLLOW_UP_BUTTON_VIEW,
/// };
/// use followup::host::{MockHost, MockTaskCreator};
/// use followup::types::Record;
///
/// let mut registry = ExtensionRegistry::new();
/// register_follow_up_button(
///     &mut registry,
///     Arc::new(MockHost::new()),
///     Arc::new(MockTaskCreator::new()),
/// )
/// .unwrap();
///
/// let button = registry
///     .mount(
///         FOLLOW_UP_BUTTON_VIEW,
///         ViewProps::for_record(Record::new().with_name("Widget X")),
///         ViewEnvironment::default(),
///     )
///     .unwrap();
/// ```
pub fn register_follow_up_button(
    registry: &mut ExtensionRegistry,
    host: Arc<dyn HostContext>,
    tasks: Arc<dyn TaskCreator>,
) -> Result<()> {
    registry.register(FOLLOW_UP_BUTTON_VIEW, move |props, _env| {
        FollowUpButton::new(props.record.unwrap_or_default(), host.clone(), tasks.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MockHost, MockTaskCreator};

    fn registered() -> ExtensionRegistry {
        let mut registry = ExtensionRegistry::new();
        register_follow_up_button(
            &mut registry,
            Arc::new(MockHost::new()),
            Arc::new(MockTaskCreator::new()),
        )
        .unwrap();
        registry
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = registered();
        let result = register_follow_up_button(
            &mut registry,
            Arc::new(MockHost::new()),
            Arc::new(MockTaskCreator::new()),
        );
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_mount_unknown_view_fails() {
        let registry = registered();
        let result = registry.mount(
            "statusBadge",
            ViewProps::default(),
            ViewEnvironment::default(),
        );
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_mount_consumes_only_the_record_prop() {
        let registry = registered();
        let props: ViewProps = serde_json::from_str(
            r#"{
                "record": {"name": "Widget X"},
                "fields": ["name", "status"]
            }"#,
        )
        .unwrap();
        let env: ViewEnvironment = serde_json::from_str(
            r#"{"identifier": "acme.follow-up", "settings": {"color": "blue"}}"#,
        )
        .unwrap();

        let button = registry.mount(FOLLOW_UP_BUTTON_VIEW, props, env).unwrap();
        let debug = format!("{button:?}");
        assert!(debug.contains("Widget X"));
    }

    #[test]
    fn test_mount_without_record_uses_empty_record() {
        let registry = registered();
        let button = registry
            .mount(
                FOLLOW_UP_BUTTON_VIEW,
                ViewProps::default(),
                ViewEnvironment::default(),
            )
            .unwrap();
        assert!(matches!(
            button.state(),
            crate::button::ButtonState::Idle
        ));
    }
}
