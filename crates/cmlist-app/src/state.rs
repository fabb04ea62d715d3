//! Application state (Model in TEA pattern)

use tracing::info;

use cmlist_core::{sort_contact_methods, Breakpoint, ContactMethod, ContactMethodId, UserId};

use crate::config::Settings;
use crate::dialog::ActiveDialog;
use crate::test_send::TestSendState;

/// Sort collaborator: pure, deterministic reordering of contact methods
pub type SortFn = fn(&[ContactMethod]) -> Vec<ContactMethod>;

/// Read-only context injected into the controller
#[derive(Debug, Clone, Copy)]
pub struct ListContext {
    /// Viewer may not mutate contact methods
    pub read_only: bool,
    /// Current viewport width class
    pub breakpoint: Breakpoint,
    pub sort: SortFn,
}

impl Default for ListContext {
    fn default() -> Self {
        Self {
            read_only: false,
            breakpoint: Breakpoint::default(),
            sort: sort_contact_methods,
        }
    }
}

/// Inbound query status as seen by the controller
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    pub loading: bool,
    /// Last successfully fetched list (kept across refetches)
    pub data: Option<Vec<ContactMethod>>,
    pub error: Option<String>,
    /// Number of fetches that completed successfully
    pub fetch_count: u64,
}

impl QueryState {
    /// Loading with nothing to show yet
    pub fn is_initial_load(&self) -> bool {
        self.loading && self.data.is_none()
    }

    pub fn contains(&self, id: &ContactMethodId) -> bool {
        self.data
            .as_ref()
            .is_some_and(|methods| methods.iter().any(|m| &m.id == id))
    }
}

/// Open action menu for one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMenuState {
    pub id: ContactMethodId,
    pub highlighted: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub user_id: UserId,
    pub context: ListContext,
    pub query: QueryState,
    pub dialog: ActiveDialog,
    pub test_send: TestSendState,
    /// Index into the sorted rows
    pub selected: usize,
    pub action_menu: Option<ActionMenuState>,
    pub phase: Phase,
}

impl AppState {
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self::with_context(user_id, ListContext::default())
    }

    pub fn with_context(user_id: impl Into<UserId>, context: ListContext) -> Self {
        Self {
            user_id: user_id.into(),
            context,
            query: QueryState::default(),
            dialog: ActiveDialog::default(),
            test_send: TestSendState::default(),
            selected: 0,
            action_menu: None,
            phase: Phase::default(),
        }
    }

    pub fn with_settings(user_id: impl Into<UserId>, settings: &Settings) -> Self {
        let context = ListContext {
            read_only: settings.behavior.read_only,
            breakpoint: settings.ui.breakpoint.unwrap_or_default(),
            ..ListContext::default()
        };
        Self::with_context(user_id, context)
    }

    pub fn should_quit(&self) -> bool {
        self.phase == Phase::Quitting
    }

    /// Rows in display order, as returned by the sort collaborator
    pub fn sorted_contact_methods(&self) -> Vec<ContactMethod> {
        self.query
            .data
            .as_deref()
            .map(|methods| (self.context.sort)(methods))
            .unwrap_or_default()
    }

    /// Contact method under the cursor
    pub fn selected_contact_method(&self) -> Option<ContactMethod> {
        self.sorted_contact_methods().into_iter().nth(self.selected)
    }

    pub fn contact_method(&self, id: &ContactMethodId) -> Option<&ContactMethod> {
        self.query.data.as_ref()?.iter().find(|m| &m.id == id)
    }

    pub fn row_count(&self) -> usize {
        self.query.data.as_ref().map(Vec::len).unwrap_or(0)
    }

    pub fn clamp_selection(&mut self) {
        let count = self.row_count();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    /// Drop the ephemeral controller state: dialogs, test-send, menu.
    pub fn unmount(&mut self) {
        info!("Unmounting contact method list for {}", self.user_id);
        self.dialog.close_all();
        self.test_send.reset();
        self.action_menu = None;
    }
}
