//! List controller: derives the render model consumed by the presentation
//! layer from the fetched list, the injected context and controller state.
//!
//! Row order comes entirely from the sort collaborator in
//! [`ListContext::sort`]; nothing here re-sorts or groups.

use cmlist_core::{ContactMethod, ContactMethodId};

use crate::catalog::{compute_actions, inline_reactivate, status_icon, Action, StatusIcon};
use crate::dialog::{ActiveDialog, DialogKind};
use crate::message::Message;
use crate::state::{AppState, ListContext};
use crate::test_send::TestSendState;

pub const LIST_TITLE: &str = "Contact Methods";
pub const EMPTY_MESSAGE: &str = "No contact methods";
pub const ERROR_DIALOG_TITLE: &str = "An error occurred";
pub const ERROR_DIALOG_DISMISS: &str = "Okay";

/// Top-level render model
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// First fetch in flight, nothing to show yet
    Loading,
    /// Fetch failed; nothing else is rendered
    Error { message: String },
    Ready(ReadyView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadyView {
    pub title: &'static str,
    pub rows: Vec<RowDescriptor>,
    /// Shown instead of rows when the list is empty
    pub empty_message: Option<&'static str>,
    /// A refetch is running behind the visible rows
    pub refreshing: bool,
    pub test_send_pending: bool,
    pub modal: Option<ModalDescriptor>,
    pub error_dialog: Option<ErrorDialogDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowDescriptor {
    pub id: ContactMethodId,
    pub title: String,
    pub subtitle: String,
    pub icon: Option<StatusIcon>,
    /// Effect of the inline reactivate button, when shown
    pub inline_reactivate: Option<Message>,
    /// Action menu entries; `None` hides the menu control (read-only)
    pub actions: Option<Vec<Action>>,
}

/// The open modal workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ModalDescriptor {
    pub kind: DialogKind,
    pub contact_method_id: ContactMethodId,
    pub title: &'static str,
    /// Close signal handed to the dialog collaborator
    pub on_close: Message,
}

/// The test-send error dialog
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDialogDescriptor {
    pub title: &'static str,
    pub body: String,
    pub dismiss_label: &'static str,
    pub on_dismiss: Message,
}

/// `"{name} ({type})"`, suffixed with `" - Disabled"` for disabled methods
pub fn row_title(cm: &ContactMethod) -> String {
    let mut title = format!("{} ({})", cm.name, cm.kind);
    if cm.disabled {
        title.push_str(" - Disabled");
    }
    title
}

/// Row descriptor for one contact method
pub fn row(cm: &ContactMethod, ctx: &ListContext) -> RowDescriptor {
    RowDescriptor {
        id: cm.id.clone(),
        title: row_title(cm),
        subtitle: cm.formatted_value.clone(),
        icon: status_icon(cm, ctx.read_only),
        inline_reactivate: inline_reactivate(cm, ctx.read_only, ctx.breakpoint),
        actions: (!ctx.read_only).then(|| compute_actions(cm, ctx.read_only)),
    }
}

/// Rows in the order produced by the sort collaborator
pub fn rows(methods: &[ContactMethod], ctx: &ListContext) -> Vec<RowDescriptor> {
    (ctx.sort)(methods).iter().map(|cm| row(cm, ctx)).collect()
}

/// Modal descriptor for the open dialog, if any
pub fn modal(dialog: &ActiveDialog) -> Option<ModalDescriptor> {
    // The union already encodes verify > edit > delete precedence: only one
    // can be set.
    let (kind, id) = dialog.current()?;
    Some(ModalDescriptor {
        kind,
        contact_method_id: id.clone(),
        title: kind.title(),
        on_close: Message::CloseDialog { kind },
    })
}

/// Error dialog descriptor, driven solely by test-send state
pub fn error_dialog(test_send: &TestSendState) -> Option<ErrorDialogDescriptor> {
    test_send
        .error_dialog_visible
        .then(|| ErrorDialogDescriptor {
            title: ERROR_DIALOG_TITLE,
            body: test_send.error_message().to_string(),
            dismiss_label: ERROR_DIALOG_DISMISS,
            on_dismiss: Message::DismissTestSendError,
        })
}

/// Build the render model for the current state
pub fn render_model(state: &AppState) -> ListView {
    if state.query.is_initial_load() {
        return ListView::Loading;
    }
    if let Some(message) = &state.query.error {
        return ListView::Error {
            message: message.clone(),
        };
    }

    let methods = state.query.data.as_deref().unwrap_or_default();
    let rows = rows(methods, &state.context);
    let empty_message = rows.is_empty().then_some(EMPTY_MESSAGE);

    ListView::Ready(ReadyView {
        title: LIST_TITLE,
        rows,
        empty_message,
        refreshing: state.query.loading,
        test_send_pending: state.test_send.pending(),
        modal: modal(&state.dialog),
        error_dialog: error_dialog(&state.test_send),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ActionKind;
    use crate::test_utils::{disabled_cm, email_cm, loaded_state, sms_cm};
    use cmlist_core::Breakpoint;

    fn ready(view: ListView) -> ReadyView {
        match view {
            ListView::Ready(ready) => ready,
            other => panic!("expected ready view, got {other:?}"),
        }
    }

    fn action_kinds(row: &RowDescriptor) -> Vec<ActionKind> {
        row.actions
            .as_ref()
            .map(|a| a.iter().map(|a| a.kind).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_loading_without_data() {
        let mut state = AppState::new("u1");
        state.query.loading = true;
        assert_eq!(render_model(&state), ListView::Loading);
    }

    #[test]
    fn test_loading_with_prior_data_keeps_rows() {
        let mut state = loaded_state(vec![email_cm("1", "Work")]);
        state.query.loading = true;

        let view = ready(render_model(&state));
        assert_eq!(view.rows.len(), 1);
        assert!(view.refreshing);
    }

    #[test]
    fn test_fetch_error_renders_placeholder_only() {
        let mut state = loaded_state(vec![email_cm("1", "Work")]);
        state.query.error = Some("boom".to_string());
        state.dialog.open(DialogKind::Edit, ContactMethodId::from("1"));

        assert_eq!(
            render_model(&state),
            ListView::Error {
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_empty_list_message() {
        let state = loaded_state(vec![]);
        let view = ready(render_model(&state));
        assert!(view.rows.is_empty());
        assert_eq!(view.empty_message, Some("No contact methods"));
        assert_eq!(view.title, "Contact Methods");
    }

    #[test]
    fn test_enabled_row_scenario() {
        let state = loaded_state(vec![email_cm("1", "Work")]);
        let view = ready(render_model(&state));
        let row = &view.rows[0];

        assert_eq!(row.title, "Work (email)");
        assert_eq!(row.subtitle, "1@example.com");
        assert!(row.icon.is_none());
        assert!(row.inline_reactivate.is_none());
        assert!(action_kinds(row).contains(&ActionKind::SendTest));
    }

    #[test]
    fn test_disabled_row_scenario_at_lg() {
        let mut state = loaded_state(vec![disabled_cm("2", "Home")]);
        state.context.breakpoint = Breakpoint::Lg;

        let view = ready(render_model(&state));
        let row = &view.rows[0];

        assert_eq!(row.title, "Home (sms) - Disabled");
        assert_eq!(row.subtitle, "+1 555-555-0100");
        assert_eq!(
            row.inline_reactivate,
            Some(Message::open_dialog(DialogKind::Verify, "2"))
        );
        let kinds = action_kinds(row);
        assert!(kinds.contains(&ActionKind::Reactivate));
        assert!(!kinds.contains(&ActionKind::SendTest));
        assert!(row.icon.as_ref().is_some_and(StatusIcon::is_interactive));
    }

    #[test]
    fn test_disabled_row_below_md_has_no_inline_button() {
        let mut state = loaded_state(vec![disabled_cm("2", "Home")]);
        state.context.breakpoint = Breakpoint::Sm;

        let view = ready(render_model(&state));
        assert!(view.rows[0].inline_reactivate.is_none());
        assert!(action_kinds(&view.rows[0]).contains(&ActionKind::Reactivate));
    }

    #[test]
    fn test_read_only_rows_hide_menu_and_use_static_icon() {
        let mut state = loaded_state(vec![disabled_cm("2", "Home"), email_cm("1", "Work")]);
        state.context.read_only = true;
        state.context.breakpoint = Breakpoint::Xl;

        let view = ready(render_model(&state));
        for row in &view.rows {
            assert!(row.actions.is_none());
            assert!(row.inline_reactivate.is_none());
        }
        let disabled = view
            .rows
            .iter()
            .find(|r| r.id == ContactMethodId::from("2"))
            .unwrap();
        assert_eq!(disabled.icon, Some(StatusIcon::Warning));
    }

    #[test]
    fn test_rows_follow_sort_order() {
        let state = loaded_state(vec![email_cm("1", "Work"), sms_cm("2", "Home")]);
        let view = ready(render_model(&state));
        let ids: Vec<_> = view.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_modal_descriptor_from_dialog() {
        let mut state = loaded_state(vec![email_cm("1", "Work")]);
        state.dialog.open(DialogKind::Delete, ContactMethodId::from("1"));

        let modal = ready(render_model(&state)).modal.unwrap();
        assert_eq!(modal.kind, DialogKind::Delete);
        assert_eq!(modal.contact_method_id, ContactMethodId::from("1"));
        assert_eq!(modal.title, "Delete Contact Method");
        assert_eq!(
            modal.on_close,
            Message::CloseDialog {
                kind: DialogKind::Delete
            }
        );
    }

    #[test]
    fn test_error_dialog_shows_message_alongside_modal() {
        let mut state = loaded_state(vec![email_cm("1", "Work")]);
        state.dialog.open(DialogKind::Edit, ContactMethodId::from("1"));
        state.test_send.begin(ContactMethodId::from("1"));
        state
            .test_send
            .fail(ContactMethodId::from("1"), "network timeout");

        let view = ready(render_model(&state));
        let dialog = view.error_dialog.unwrap();
        assert_eq!(dialog.title, "An error occurred");
        assert_eq!(dialog.body, "network timeout");
        assert_eq!(dialog.on_dismiss, Message::DismissTestSendError);
        assert!(view.modal.is_some());
    }

    #[test]
    fn test_pending_flag_exposed() {
        let mut state = loaded_state(vec![email_cm("1", "Work")]);
        state.test_send.begin(ContactMethodId::from("1"));
        assert!(ready(render_model(&state)).test_send_pending);
    }
}
