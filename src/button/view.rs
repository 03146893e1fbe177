//! Pure rendering of the button state.
//!
//! [`render`] is a side-effect-free function from [`ButtonState`] to a
//! serializable view description the host rendering engine can draw. The
//! component never touches the host DOM or styling system directly.

#[cfg(feature = "schema-generation")]
use schemars::JsonSchema;
use serde::Serialize;

use super::ButtonState;

/// Control label while idle.
pub const LABEL_IDLE: &str = "Follow-up";
/// Control label while the task-creation call is in flight.
pub const LABEL_LOADING: &str = "Creating...";
/// Control label after a successful creation.
pub const LABEL_SUCCESS: &str = "Follow-up created";
/// Control label after a failure.
pub const LABEL_ERROR: &str = "Retry";

/// Visual treatment of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema-generation", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum ButtonKind {
    /// Neutral treatment (idle and loading).
    Secondary,
    /// Positive treatment after success.
    Success,
    /// Negative treatment after failure.
    Danger,
}

/// Outbound hyperlink in the success panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema-generation", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TaskLink {
    /// Path to the created task's detail view (`/tasks/{id}`).
    pub href: String,

    /// The link opens in a new browsing context.
    pub open_in_new_context: bool,
}

/// Confirmation or error panel below the control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema-generation", derive(JsonSchema))]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PanelView {
    /// Confirmation panel showing the created task and a link-out.
    Success {
        /// The locally composed task name.
        task_name: String,
        /// Link to the task's detail view.
        link: TaskLink,
    },
    /// Error panel with the captured message and a retry affordance.
    Error {
        /// Human-readable failure message.
        message: String,
        /// Label for the secondary retry action.
        retry_label: String,
    },
}

/// Complete view description for one button instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema-generation", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ButtonView {
    /// Control label.
    pub label: String,

    /// Visual treatment.
    pub kind: ButtonKind,

    /// Whether new activations are ignored.
    pub disabled: bool,

    /// Whether a progress spinner is shown inside the control.
    pub spinner: bool,

    /// Whether the control is visually de-emphasized.
    pub dimmed: bool,

    /// Optional panel below the control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<PanelView>,
}

/// Render a state snapshot into a view description.
pub fn render(state: &ButtonState) -> ButtonView {
    match state {
        ButtonState::Idle => ButtonView {
            label: LABEL_IDLE.to_string(),
            kind: ButtonKind::Secondary,
            disabled: false,
            spinner: false,
            dimmed: false,
            panel: None,
        },
        ButtonState::Loading => ButtonView {
            label: LABEL_LOADING.to_string(),
            kind: ButtonKind::Secondary,
            disabled: true,
            spinner: true,
            dimmed: true,
            panel: None,
        },
        ButtonState::Success(task) => ButtonView {
            label: LABEL_SUCCESS.to_string(),
            kind: ButtonKind::Success,
            disabled: false,
            spinner: false,
            dimmed: false,
            panel: Some(PanelView::Success {
                task_name: task.name.clone(),
                link: TaskLink {
                    href: task.detail_path(),
                    open_in_new_context: true,
                },
            }),
        },
        ButtonState::Error(message) => ButtonView {
            label: LABEL_ERROR.to_string(),
            kind: ButtonKind::Danger,
            disabled: false,
            spinner: false,
            dimmed: false,
            panel: Some(PanelView::Error {
                message: message.clone(),
                retry_label: LABEL_ERROR.to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::CreatedTask;

    #[test]
    fn test_idle_renders_actionable_control() {
        let view = render(&ButtonState::Idle);
        assert_eq!(view.label, "Follow-up");
        assert_eq!(view.kind, ButtonKind::Secondary);
        assert!(!view.disabled);
        assert!(view.panel.is_none());
    }

    #[test]
    fn test_loading_renders_disabled_dimmed_control() {
        let view = render(&ButtonState::Loading);
        assert_eq!(view.label, "Creating...");
        assert!(view.disabled);
        assert!(view.spinner);
        assert!(view.dimmed);
    }

    #[test]
    fn test_success_renders_confirmation_panel_with_link() {
        let task = CreatedTask::new("7781", "Follow up: Widget X");
        let view = render(&ButtonState::Success(task));
        assert_eq!(view.label, "Follow-up created");
        assert_eq!(view.kind, ButtonKind::Success);
        assert_eq!(
            view.panel,
            Some(PanelView::Success {
                task_name: "Follow up: Widget X".to_string(),
                link: TaskLink {
                    href: "/tasks/7781".to_string(),
                    open_in_new_context: true,
                },
            })
        );
    }

    #[test]
    fn test_error_renders_message_and_retry() {
        let view = render(&ButtonState::Error("quota exceeded".to_string()));
        assert_eq!(view.label, "Retry");
        assert_eq!(view.kind, ButtonKind::Danger);
        assert_eq!(
            view.panel,
            Some(PanelView::Error {
                message: "quota exceeded".to_string(),
                retry_label: "Retry".to_string(),
            })
        );
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = render(&ButtonState::Success(CreatedTask::new("1", "Follow up: X")));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "success");
        assert_eq!(json["panel"]["type"], "success");
        assert_eq!(json["panel"]["link"]["openInNewContext"], true);
    }
}
