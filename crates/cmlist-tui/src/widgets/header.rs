//! Header bar: list title, owning user and activity indicators

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use cmlist_core::{Breakpoint, UserId};

use crate::theme::styles;

pub struct Header<'a> {
    title: &'a str,
    user_id: &'a UserId,
    breakpoint: Breakpoint,
    read_only: bool,
    refreshing: bool,
    test_send_pending: bool,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, user_id: &'a UserId, breakpoint: Breakpoint) -> Self {
        Self {
            title,
            user_id,
            breakpoint,
            read_only: false,
            refreshing: false,
            test_send_pending: false,
        }
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn refreshing(mut self, refreshing: bool) -> Self {
        self.refreshing = refreshing;
        self
    }

    pub fn test_send_pending(mut self, pending: bool) -> Self {
        self.test_send_pending = pending;
        self
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![
            Span::styled(self.title, styles::accent_bold()),
            Span::styled("  user ", styles::text_muted()),
            Span::styled(self.user_id.as_str(), styles::text_primary()),
            Span::styled(format!("  [{}]", self.breakpoint), styles::text_muted()),
        ];
        if self.read_only {
            spans.push(Span::styled("  read-only", styles::status_yellow()));
        }
        if self.refreshing {
            spans.push(Span::styled("  ↻ refreshing", styles::accent()));
        }
        if self.test_send_pending {
            spans.push(Span::styled("  ✉ sending test…", styles::accent()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
