//! Key hint bar for the focused layer

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

/// Layer that currently receives keys, topmost first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    ErrorDialog,
    Dialog,
    ActionMenu,
    List,
}

pub struct StatusBar {
    focus: Focus,
    read_only: bool,
}

impl StatusBar {
    pub fn new(focus: Focus, read_only: bool) -> Self {
        Self { focus, read_only }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.focus {
            Focus::ErrorDialog => vec![("Enter", "okay")],
            Focus::Dialog => vec![("Enter/Esc", "close")],
            Focus::ActionMenu => vec![("j/k", "move"), ("Enter", "run"), ("Esc", "close")],
            Focus::List if self.read_only => vec![("j/k", "move"), ("r", "refresh"), ("q", "quit")],
            Focus::List => vec![
                ("j/k", "move"),
                ("Enter", "menu"),
                ("t", "test"),
                ("e", "edit"),
                ("d", "delete"),
                ("v", "reactivate"),
                ("r", "refresh"),
                ("q", "quit"),
            ],
        }
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (key, label)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {label}"), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
