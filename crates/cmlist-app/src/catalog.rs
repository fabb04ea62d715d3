//! Action catalog: which actions a contact method row offers.
//!
//! Pure functions of the contact method, the viewer's permission level and
//! (for the inline button) the breakpoint. Effects are expressed as
//! [`Message`]s for the update loop to apply.

use cmlist_core::{Breakpoint, ContactMethod};

use crate::dialog::DialogKind;
use crate::message::Message;

/// Tooltip of the disabled-state warning icon
pub const DISABLED_WARNING: &str = "Contact method disabled";

/// Accessible label of the reactivate controls
pub const REACTIVATE_LABEL: &str = "Reactivate contact method";

/// Minimum breakpoint at which the inline reactivate button is shown
pub const INLINE_REACTIVATE_MIN: Breakpoint = Breakpoint::Md;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Edit,
    Delete,
    SendTest,
    Reactivate,
}

impl ActionKind {
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Edit => "Edit",
            ActionKind::Delete => "Delete",
            ActionKind::SendTest => "Send Test",
            ActionKind::Reactivate => "Reactivate",
        }
    }
}

/// One entry of a row's action menu
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub kind: ActionKind,
    pub label: &'static str,
    pub message: Message,
}

impl Action {
    fn new(kind: ActionKind, message: Message) -> Self {
        Self {
            kind,
            label: kind.label(),
            message,
        }
    }
}

/// Leading status icon of a row
#[derive(Debug, Clone, PartialEq)]
pub enum StatusIcon {
    /// Static warning, no click target
    Warning,
    /// Warning control that opens the verify dialog when activated
    ReactivateControl { on_activate: Message },
}

impl StatusIcon {
    pub fn tooltip(&self) -> &'static str {
        DISABLED_WARNING
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, StatusIcon::ReactivateControl { .. })
    }

    pub fn on_activate(&self) -> Option<&Message> {
        match self {
            StatusIcon::Warning => None,
            StatusIcon::ReactivateControl { on_activate } => Some(on_activate),
        }
    }
}

/// Ordered action menu entries for a contact method.
///
/// Read-only viewers get nothing; callers also hide the menu control.
/// Otherwise `Edit`, `Delete`, then exactly one of `Send Test` (enabled
/// methods) or `Reactivate` (disabled methods).
pub fn compute_actions(cm: &ContactMethod, read_only: bool) -> Vec<Action> {
    if read_only {
        return Vec::new();
    }

    let mut actions = vec![
        Action::new(
            ActionKind::Edit,
            Message::open_dialog(DialogKind::Edit, cm.id.clone()),
        ),
        Action::new(
            ActionKind::Delete,
            Message::open_dialog(DialogKind::Delete, cm.id.clone()),
        ),
    ];

    if cm.disabled {
        actions.push(Action::new(
            ActionKind::Reactivate,
            Message::open_dialog(DialogKind::Verify, cm.id.clone()),
        ));
    } else {
        actions.push(Action::new(
            ActionKind::SendTest,
            Message::send_test(cm.id.clone()),
        ));
    }

    actions
}

/// Find the action of `kind` offered for a contact method
pub fn find_action(cm: &ContactMethod, read_only: bool, kind: ActionKind) -> Option<Action> {
    compute_actions(cm, read_only)
        .into_iter()
        .find(|a| a.kind == kind)
}

/// Status icon for a contact method, independent of the action list
pub fn status_icon(cm: &ContactMethod, read_only: bool) -> Option<StatusIcon> {
    if !cm.disabled {
        return None;
    }
    if read_only {
        return Some(StatusIcon::Warning);
    }
    Some(StatusIcon::ReactivateControl {
        on_activate: Message::open_dialog(DialogKind::Verify, cm.id.clone()),
    })
}

/// Whether the standalone reactivate button is shown next to the menu
pub fn show_inline_reactivate(cm: &ContactMethod, read_only: bool, breakpoint: Breakpoint) -> bool {
    cm.disabled && !read_only && breakpoint.is_at_least(INLINE_REACTIVATE_MIN)
}

/// Effect of the inline reactivate button, when it is shown
pub fn inline_reactivate(
    cm: &ContactMethod,
    read_only: bool,
    breakpoint: Breakpoint,
) -> Option<Message> {
    show_inline_reactivate(cm, read_only, breakpoint)
        .then(|| Message::open_dialog(DialogKind::Verify, cm.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmlist_core::ContactMethodType;

    fn cm(id: &str, disabled: bool) -> ContactMethod {
        ContactMethod::new(id, "Work", ContactMethodType::Email, "a@example.com").disabled(disabled)
    }

    fn kinds(actions: &[Action]) -> Vec<ActionKind> {
        actions.iter().map(|a| a.kind).collect()
    }

    #[test]
    fn test_enabled_editable_actions() {
        let actions = compute_actions(&cm("1", false), false);
        assert_eq!(
            kinds(&actions),
            vec![ActionKind::Edit, ActionKind::Delete, ActionKind::SendTest]
        );
        let labels: Vec<_> = actions.iter().map(|a| a.label).collect();
        assert_eq!(labels, vec!["Edit", "Delete", "Send Test"]);
    }

    #[test]
    fn test_disabled_editable_actions() {
        let actions = compute_actions(&cm("2", true), false);
        assert_eq!(
            kinds(&actions),
            vec![ActionKind::Edit, ActionKind::Delete, ActionKind::Reactivate]
        );
    }

    #[test]
    fn test_read_only_has_no_actions() {
        assert!(compute_actions(&cm("1", false), true).is_empty());
        assert!(compute_actions(&cm("2", true), true).is_empty());
    }

    #[test]
    fn test_exactly_one_of_send_test_or_reactivate() {
        for disabled in [false, true] {
            let actions = compute_actions(&cm("1", disabled), false);
            let count = actions
                .iter()
                .filter(|a| matches!(a.kind, ActionKind::SendTest | ActionKind::Reactivate))
                .count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn test_action_effects_target_row_id() {
        let actions = compute_actions(&cm("7", false), false);
        assert_eq!(actions[0].message, Message::open_dialog(DialogKind::Edit, "7"));
        assert_eq!(
            actions[1].message,
            Message::open_dialog(DialogKind::Delete, "7")
        );
        assert_eq!(actions[2].message, Message::send_test("7"));

        let actions = compute_actions(&cm("8", true), false);
        assert_eq!(
            actions[2].message,
            Message::open_dialog(DialogKind::Verify, "8")
        );
    }

    #[test]
    fn test_status_icon_rules() {
        assert_eq!(status_icon(&cm("1", false), false), None);
        assert_eq!(status_icon(&cm("1", false), true), None);
        assert_eq!(status_icon(&cm("1", true), true), Some(StatusIcon::Warning));

        let icon = status_icon(&cm("1", true), false).unwrap();
        assert!(icon.is_interactive());
        assert_eq!(
            icon.on_activate(),
            Some(&Message::open_dialog(DialogKind::Verify, "1"))
        );
        assert_eq!(icon.tooltip(), "Contact method disabled");
    }

    #[test]
    fn test_inline_reactivate_truth_table() {
        let all = [
            Breakpoint::Xs,
            Breakpoint::Sm,
            Breakpoint::Md,
            Breakpoint::Lg,
            Breakpoint::Xl,
        ];
        for disabled in [false, true] {
            for read_only in [false, true] {
                for bp in all {
                    let expected = disabled && !read_only && bp >= Breakpoint::Md;
                    assert_eq!(
                        show_inline_reactivate(&cm("1", disabled), read_only, bp),
                        expected,
                        "disabled={disabled} read_only={read_only} bp={bp}"
                    );
                    assert_eq!(
                        inline_reactivate(&cm("1", disabled), read_only, bp).is_some(),
                        expected
                    );
                }
            }
        }
    }

    #[test]
    fn test_find_action() {
        assert!(find_action(&cm("1", false), false, ActionKind::SendTest).is_some());
        assert!(find_action(&cm("1", true), false, ActionKind::SendTest).is_none());
        assert!(find_action(&cm("1", false), true, ActionKind::Edit).is_none());
    }
}
