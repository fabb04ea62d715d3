//! Placeholder frame for the open modal workflow
//!
//! The verify, edit and delete workflows own their content. This frame
//! names the workflow and its target and forwards the close signal.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use cmlist_app::view_model::ModalDescriptor;
use cmlist_core::ContactMethod;

use super::modal_overlay;
use crate::theme::styles;

pub struct DialogFrame<'a> {
    modal: &'a ModalDescriptor,
    target: Option<&'a ContactMethod>,
}

impl<'a> DialogFrame<'a> {
    pub fn new(modal: &'a ModalDescriptor) -> Self {
        Self {
            modal,
            target: None,
        }
    }

    /// Contact method the workflow operates on, when still in the list
    pub fn target(mut self, target: Option<&'a ContactMethod>) -> Self {
        self.target = target;
        self
    }
}

impl Widget for DialogFrame<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = modal_overlay::open_popup(buf, area, 50, 8);
        let block = styles::modal_block(self.modal.title);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Target name
            Constraint::Length(1), // Target value
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hint
            Constraint::Min(0),
        ])
        .split(inner);

        let (name, value) = match self.target {
            Some(cm) => (cm.name.as_str(), cm.formatted_value.as_str()),
            None => (self.modal.contact_method_id.as_str(), ""),
        };

        Paragraph::new(name)
            .style(styles::text_primary())
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
        Paragraph::new(value)
            .style(styles::text_secondary())
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        let hint = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("Enter/Esc", styles::keybinding()),
            Span::styled("] Close", styles::text_muted()),
        ]);
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
    }
}
