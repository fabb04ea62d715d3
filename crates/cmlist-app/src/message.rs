//! Message types for the application (TEA pattern)

use crate::dialog::DialogKind;
use crate::input_key::InputKey;
use cmlist_core::{Breakpoint, ContactMethod, ContactMethodId};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the list (unmounts the controller)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Query Messages
    // ─────────────────────────────────────────────────────────
    /// Fetch (or refetch) the user's contact methods
    Refresh,
    /// Fetch completed; replaces the list wholesale
    ContactMethodsLoaded { methods: Vec<ContactMethod> },
    /// Fetch failed
    ContactMethodsFetchFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Injected Context
    // ─────────────────────────────────────────────────────────
    /// Viewport width class changed
    BreakpointChanged(Breakpoint),

    // ─────────────────────────────────────────────────────────
    // Dialog Messages
    // ─────────────────────────────────────────────────────────
    /// Open a modal workflow targeting a contact method
    OpenDialog {
        kind: DialogKind,
        id: ContactMethodId,
    },
    /// Close signal from the dialog collaborator (close, cancel or completion)
    CloseDialog { kind: DialogKind },

    // ─────────────────────────────────────────────────────────
    // Test-Send Messages
    // ─────────────────────────────────────────────────────────
    /// Send a test notification to a contact method
    SendTest { id: ContactMethodId },
    /// Backend accepted the test notification
    TestSendCompleted { id: ContactMethodId },
    /// Backend rejected the test notification
    TestSendFailed { id: ContactMethodId, error: String },
    /// User dismissed the test-send error dialog
    DismissTestSendError,

    // ─────────────────────────────────────────────────────────
    // List Navigation
    // ─────────────────────────────────────────────────────────
    /// Move the row selection down
    SelectNext,
    /// Move the row selection up
    SelectPrevious,
    /// Jump to the first row
    SelectFirst,
    /// Jump to the last row
    SelectLast,
    /// Activate the status icon of the selected row (disabled rows only)
    ActivateStatusIcon,

    // ─────────────────────────────────────────────────────────
    // Action Menu
    // ─────────────────────────────────────────────────────────
    /// Open the action menu for the selected row
    OpenActionMenu,
    /// Close the action menu without choosing
    CloseActionMenu,
    /// Highlight the next menu entry
    ActionMenuNext,
    /// Highlight the previous menu entry
    ActionMenuPrevious,
    /// Run the highlighted menu entry
    ActionMenuConfirm,
}

impl Message {
    /// Convenience constructor for [`Message::OpenDialog`]
    pub fn open_dialog(kind: DialogKind, id: impl Into<ContactMethodId>) -> Self {
        Message::OpenDialog {
            kind,
            id: id.into(),
        }
    }

    /// Convenience constructor for [`Message::SendTest`]
    pub fn send_test(id: impl Into<ContactMethodId>) -> Self {
        Message::SendTest { id: id.into() }
    }
}
