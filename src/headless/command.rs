//! Stdin commands accepted in headless mode
//!
//! ```text
//! refresh | r
//! open <verify|edit|delete> <id>
//! close [verify|edit|delete]
//! test <id>
//! dismiss
//! breakpoint <xs|sm|md|lg|xl>
//! quit | q
//! ```

use cmlist_app::{AppState, DialogKind, Message};
use cmlist_core::{Breakpoint, ContactMethodId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessCommand {
    Refresh,
    Open { kind: DialogKind, id: ContactMethodId },
    /// Close the named dialog, or whichever is open
    Close(Option<DialogKind>),
    Test(ContactMethodId),
    Dismiss,
    Breakpoint(Breakpoint),
    Quit,
    /// Unparseable line, reported back as an error event
    Invalid(String),
}

impl HeadlessCommand {
    /// Parse one stdin line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next()?;
        let args: Vec<&str> = words.collect();

        let command = match (verb, args.as_slice()) {
            ("r" | "refresh", []) => Self::Refresh,
            ("q" | "quit", []) => Self::Quit,
            ("dismiss", []) => Self::Dismiss,
            ("test", [id]) => Self::Test(ContactMethodId::from(*id)),
            ("open", [kind, id]) => match DialogKind::parse(kind) {
                Some(kind) => Self::Open {
                    kind,
                    id: ContactMethodId::from(*id),
                },
                None => Self::Invalid(format!("Unknown dialog: {kind}")),
            },
            ("close", []) => Self::Close(None),
            ("close", [kind]) => match DialogKind::parse(kind) {
                Some(kind) => Self::Close(Some(kind)),
                None => Self::Invalid(format!("Unknown dialog: {kind}")),
            },
            ("breakpoint", [bp]) => match Breakpoint::parse(bp) {
                Some(bp) => Self::Breakpoint(bp),
                None => Self::Invalid(format!("Unknown breakpoint: {bp}")),
            },
            _ => Self::Invalid(format!("Unknown command: {}", line.trim())),
        };
        Some(command)
    }

    /// The message this command sends, given the current state.
    ///
    /// `close` with no kind targets the open dialog and is a no-op when
    /// nothing is open.
    pub fn into_message(self, state: &AppState) -> Option<Message> {
        match self {
            Self::Refresh => Some(Message::Refresh),
            Self::Open { kind, id } => Some(Message::open_dialog(kind, id)),
            Self::Close(Some(kind)) => Some(Message::CloseDialog { kind }),
            Self::Close(None) => state.dialog.kind().map(|kind| Message::CloseDialog { kind }),
            Self::Test(id) => Some(Message::send_test(id)),
            Self::Dismiss => Some(Message::DismissTestSendError),
            Self::Breakpoint(bp) => Some(Message::BreakpointChanged(bp)),
            Self::Quit => Some(Message::Quit),
            Self::Invalid(_) => None,
        }
    }
}
