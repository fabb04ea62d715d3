//! Contact method list widget
//!
//! Renders the rows of a [`ReadyView`] as two-line items: status icon and
//! title on top, formatted value below. The trailing controls (inline
//! reactivate button, action menu marker) are right-aligned on the title
//! line.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget};
use unicode_width::UnicodeWidthStr;

use cmlist_app::catalog::StatusIcon;
use cmlist_app::{ReadyView, RowDescriptor};

use crate::theme::styles;

const WARNING_GLYPH: &str = "⚠";
const MENU_MARKER: &str = "⋮";
const INLINE_REACTIVATE: &str = "[Reactivate]";

pub struct ContactList<'a> {
    view: &'a ReadyView,
    selected: usize,
    focused: bool,
}

impl<'a> ContactList<'a> {
    pub fn new(view: &'a ReadyView, selected: usize) -> Self {
        Self {
            view,
            selected,
            focused: true,
        }
    }

    /// Unfocused while an overlay has key focus
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ContactList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(format!(" {} ", self.view.title));
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(message) = self.view.empty_message {
            Paragraph::new(message)
                .style(styles::text_muted())
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let width = usize::from(inner.width);
        let items: Vec<ListItem> = self
            .view
            .rows
            .iter()
            .map(|row| row_item(row, width))
            .collect();

        let list = List::new(items).highlight_style(if self.focused {
            styles::focused_selected()
        } else {
            styles::border_active()
        });
        let mut state = ListState::default().with_selected(Some(self.selected));
        StatefulWidget::render(list, inner, buf, &mut state);
    }
}

fn icon_span(icon: Option<&StatusIcon>) -> Span<'static> {
    match icon {
        None => Span::raw("  "),
        Some(StatusIcon::Warning) => {
            Span::styled(format!("{WARNING_GLYPH} "), styles::status_yellow())
        }
        Some(StatusIcon::ReactivateControl { .. }) => {
            Span::styled(format!("{WARNING_GLYPH} "), styles::warning_control())
        }
    }
}

fn row_item(row: &RowDescriptor, width: usize) -> ListItem<'static> {
    let icon = icon_span(row.icon.as_ref());

    let mut trailing: Vec<Span<'static>> = Vec::new();
    if row.inline_reactivate.is_some() {
        trailing.push(Span::styled(INLINE_REACTIVATE, styles::status_green()));
    }
    if row.actions.is_some() {
        if !trailing.is_empty() {
            trailing.push(Span::raw(" "));
        }
        trailing.push(Span::styled(MENU_MARKER, styles::text_secondary()));
    }
    let trailing_width: usize = trailing.iter().map(|s| s.content.width()).sum();

    let title_room = width
        .saturating_sub(icon.content.width())
        .saturating_sub(trailing_width)
        .saturating_sub(1);
    let title = truncate(&row.title, title_room);
    let padding = width
        .saturating_sub(icon.content.width())
        .saturating_sub(title.width())
        .saturating_sub(trailing_width);

    let mut top = vec![icon, Span::styled(title, styles::text_primary())];
    top.push(Span::raw(" ".repeat(padding)));
    top.extend(trailing);

    let bottom = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            truncate(&row.subtitle, width.saturating_sub(2)),
            styles::text_muted(),
        ),
    ]);

    ListItem::new(Text::from(vec![Line::from(top), bottom])).style(Style::default())
}

/// Cut `s` to at most `max` display columns, marking the cut with `…`
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use cmlist_app::render_model;
    use cmlist_app::test_utils::{disabled_cm, email_cm, loaded_state};
    use cmlist_app::ListView;
    use cmlist_core::Breakpoint;

    fn ready(view: ListView) -> ReadyView {
        match view {
            ListView::Ready(ready) => ready,
            other => panic!("expected ready view, got {other:?}"),
        }
    }

    #[test]
    fn test_rows_render_title_and_subtitle() {
        let state = loaded_state(vec![email_cm("1", "Work")]);
        let view = ready(render_model(&state));
        let mut term = TestTerminal::new();

        term.render_widget(ContactList::new(&view, 0), term.area());

        assert!(term.buffer_contains("Contact Methods"));
        assert!(term.buffer_contains("Work (email)"));
        assert!(term.buffer_contains("1@example.com"));
        assert!(term.buffer_contains(MENU_MARKER));
    }

    #[test]
    fn test_disabled_row_shows_warning_and_inline_reactivate_at_md() {
        let mut state = loaded_state(vec![disabled_cm("2", "Home")]);
        state.context.breakpoint = Breakpoint::Md;
        let view = ready(render_model(&state));
        let mut term = TestTerminal::new();

        term.render_widget(ContactList::new(&view, 0), term.area());

        assert!(term.buffer_contains("Home (sms) - Disabled"));
        assert!(term.buffer_contains(WARNING_GLYPH));
        assert!(term.buffer_contains(INLINE_REACTIVATE));
    }

    #[test]
    fn test_inline_reactivate_hidden_below_md() {
        let mut state = loaded_state(vec![disabled_cm("2", "Home")]);
        state.context.breakpoint = Breakpoint::Sm;
        let view = ready(render_model(&state));
        let mut term = TestTerminal::new();

        term.render_widget(ContactList::new(&view, 0), term.area());

        assert!(term.buffer_contains(WARNING_GLYPH));
        assert!(!term.buffer_contains(INLINE_REACTIVATE));
    }

    #[test]
    fn test_read_only_hides_menu_marker() {
        let mut state = loaded_state(vec![disabled_cm("2", "Home")]);
        state.context.read_only = true;
        state.context.breakpoint = Breakpoint::Xl;
        let view = ready(render_model(&state));
        let mut term = TestTerminal::new();

        term.render_widget(ContactList::new(&view, 0), term.area());

        assert!(term.buffer_contains(WARNING_GLYPH));
        assert!(!term.buffer_contains(MENU_MARKER));
        assert!(!term.buffer_contains(INLINE_REACTIVATE));
    }

    #[test]
    fn test_empty_list_message() {
        let state = loaded_state(vec![]);
        let view = ready(render_model(&state));
        let mut term = TestTerminal::new();

        term.render_widget(ContactList::new(&view, 0), term.area());

        assert!(term.buffer_contains("No contact methods"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long title", 6), "a lon…");
        assert_eq!(truncate("anything", 0), "");
        assert!(truncate("日本語のタイトル", 7).width() <= 7);
    }
}
