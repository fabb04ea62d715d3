//! Test-send error dialog

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use cmlist_app::view_model::ErrorDialogDescriptor;

use super::modal_overlay;
use crate::theme::styles;

const DIALOG_WIDTH: u16 = 50;

pub struct ErrorDialog<'a> {
    descriptor: &'a ErrorDialogDescriptor,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(descriptor: &'a ErrorDialogDescriptor) -> Self {
        Self { descriptor }
    }

    /// Body lines after wrapping to the dialog's inner width
    fn body_height(&self) -> u16 {
        let inner_width = usize::from(DIALOG_WIDTH.saturating_sub(4)).max(1);
        let lines = self
            .descriptor
            .body
            .lines()
            .map(|line| unicode_width::UnicodeWidthStr::width(line).div_ceil(inner_width).max(1))
            .sum::<usize>()
            .max(1);
        u16::try_from(lines).unwrap_or(u16::MAX)
    }
}

impl Widget for ErrorDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body_height = self.body_height();
        // Border + spacer + body + spacer + button + border
        let height = body_height.saturating_add(5);
        let popup = modal_overlay::open_popup(buf, area, DIALOG_WIDTH, height);

        let block = styles::error_block(self.descriptor.title);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(body_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        Paragraph::new(self.descriptor.body.as_str())
            .style(styles::text_primary())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        Paragraph::new(format!("[ {} ]", self.descriptor.dismiss_label))
            .style(styles::focused_selected())
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use cmlist_app::view_model::error_dialog;
    use cmlist_app::TestSendState;
    use cmlist_core::ContactMethodId;

    fn failed(message: &str) -> ErrorDialogDescriptor {
        let mut state = TestSendState::new();
        state.begin(ContactMethodId::from("1"));
        state.fail(ContactMethodId::from("1"), message);
        error_dialog(&state).unwrap()
    }

    #[test]
    fn test_error_dialog_renders_title_body_and_button() {
        let descriptor = failed("Failed to send");
        let mut term = TestTerminal::new();

        term.render_widget(ErrorDialog::new(&descriptor), term.area());

        assert!(term.buffer_contains("An error occurred"));
        assert!(term.buffer_contains("Failed to send"));
        assert!(term.buffer_contains("[ Okay ]"));
    }

    #[test]
    fn test_long_body_wraps() {
        let descriptor = failed(&"timeout ".repeat(20));
        let dialog = ErrorDialog::new(&descriptor);

        assert!(dialog.body_height() > 1);
    }
}
