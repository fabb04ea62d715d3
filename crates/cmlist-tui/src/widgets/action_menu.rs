//! Action menu popup for the selected row

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use cmlist_app::Action;

use super::modal_overlay;
use crate::theme::styles;

const MENU_WIDTH: u16 = 24;

pub struct ActionMenu<'a> {
    actions: &'a [Action],
    highlighted: usize,
}

impl<'a> ActionMenu<'a> {
    pub fn new(actions: &'a [Action], highlighted: usize) -> Self {
        Self {
            actions,
            highlighted,
        }
    }
}

impl Widget for ActionMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = u16::try_from(self.actions.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let popup = modal_overlay::open_popup(buf, area, MENU_WIDTH, height);

        let block = styles::modal_block("Actions");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = self
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| {
                if i == self.highlighted {
                    Line::from(Span::styled(
                        format!("› {}", action.label),
                        styles::focused_selected(),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("  {}", action.label),
                        styles::text_primary(),
                    ))
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use cmlist_app::catalog::compute_actions;
    use cmlist_app::test_utils::{disabled_cm, email_cm};

    #[test]
    fn test_menu_lists_actions_in_order() {
        let actions = compute_actions(&email_cm("1", "Work"), false);
        let mut term = TestTerminal::new();

        term.render_widget(ActionMenu::new(&actions, 0), term.area());

        assert!(term.buffer_contains("Actions"));
        assert!(term.buffer_contains("› Edit"));
        assert!(term.buffer_contains("Delete"));
        assert!(term.buffer_contains("Send Test"));
        assert!(!term.buffer_contains("Reactivate"));
    }

    #[test]
    fn test_menu_highlights_entry() {
        let actions = compute_actions(&disabled_cm("2", "Home"), false);
        let mut term = TestTerminal::new();

        term.render_widget(ActionMenu::new(&actions, 2), term.area());

        assert!(term.buffer_contains("› Reactivate"));
        assert!(!term.buffer_contains("› Edit"));
    }
}
