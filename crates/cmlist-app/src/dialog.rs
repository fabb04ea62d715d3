//! Dialog selector state.
//!
//! A single slot holding the one modal workflow (verify, edit or delete) that
//! is currently open, keyed by the contact method it targets. Holding all
//! three workflows in one union makes simultaneous opens unrepresentable.
//!
//! Each workflow can still be inspected as its own `Closed` / `Open(id)`
//! slot through [`ActiveDialog::target`].

use std::fmt;

use serde::Serialize;
use tracing::debug;

use cmlist_core::ContactMethodId;

/// The modal workflows a row can open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    /// Re-validate a disabled contact method ("Reactivate")
    Verify,
    Edit,
    Delete,
}

impl DialogKind {
    /// All kinds, in modal precedence order
    pub const ALL: [DialogKind; 3] = [DialogKind::Verify, DialogKind::Edit, DialogKind::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            DialogKind::Verify => "verify",
            DialogKind::Edit => "edit",
            DialogKind::Delete => "delete",
        }
    }

    /// Title shown on the dialog frame
    pub fn title(&self) -> &'static str {
        match self {
            DialogKind::Verify => "Verify Contact Method",
            DialogKind::Edit => "Edit Contact Method",
            DialogKind::Delete => "Delete Contact Method",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "verify" | "reactivate" => Some(DialogKind::Verify),
            "edit" => Some(DialogKind::Edit),
            "delete" => Some(DialogKind::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The modal workflow currently open, if any
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Verify(ContactMethodId),
    Edit(ContactMethodId),
    Delete(ContactMethodId),
}

impl ActiveDialog {
    /// Open `kind` for `id`.
    ///
    /// Replaces whatever was open before in one assignment: re-opening the
    /// same kind for another id retargets it, and opening a different kind
    /// supersedes the previous workflow.
    pub fn open(&mut self, kind: DialogKind, id: ContactMethodId) {
        if let Some((prev_kind, prev_id)) = self.current() {
            debug!(
                "Dialog {} for {} replaced by {} for {}",
                prev_kind, prev_id, kind, id
            );
        }
        *self = match kind {
            DialogKind::Verify => ActiveDialog::Verify(id),
            DialogKind::Edit => ActiveDialog::Edit(id),
            DialogKind::Delete => ActiveDialog::Delete(id),
        };
    }

    /// Close the `kind` slot. Returns false if that slot was not open.
    pub fn close(&mut self, kind: DialogKind) -> bool {
        if self.kind() == Some(kind) {
            *self = ActiveDialog::None;
            true
        } else {
            debug!("Ignoring close for {} dialog, not open", kind);
            false
        }
    }

    /// Close whatever is open
    pub fn close_all(&mut self) {
        *self = ActiveDialog::None;
    }

    /// Target of the `kind` slot, `None` when that slot is closed
    pub fn target(&self, kind: DialogKind) -> Option<&ContactMethodId> {
        match (self, kind) {
            (ActiveDialog::Verify(id), DialogKind::Verify)
            | (ActiveDialog::Edit(id), DialogKind::Edit)
            | (ActiveDialog::Delete(id), DialogKind::Delete) => Some(id),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<DialogKind> {
        match self {
            ActiveDialog::None => None,
            ActiveDialog::Verify(_) => Some(DialogKind::Verify),
            ActiveDialog::Edit(_) => Some(DialogKind::Edit),
            ActiveDialog::Delete(_) => Some(DialogKind::Delete),
        }
    }

    pub fn id(&self) -> Option<&ContactMethodId> {
        match self {
            ActiveDialog::None => None,
            ActiveDialog::Verify(id) | ActiveDialog::Edit(id) | ActiveDialog::Delete(id) => {
                Some(id)
            }
        }
    }

    pub fn current(&self) -> Option<(DialogKind, &ContactMethodId)> {
        Some((self.kind()?, self.id()?))
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ActiveDialog::None)
    }

    /// Number of open slots (never more than one)
    pub fn open_slot_count(&self) -> usize {
        DialogKind::ALL
            .iter()
            .filter(|kind| self.target(**kind).is_some())
            .count()
    }
}
