//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header (title, user, breakpoint, activity)
    pub header: Rect,

    /// Contact method rows
    pub list: Rect,

    /// Key hints
    pub status: Rect,
}

/// Split the screen into header, list and a one-line status bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (bordered, one inner row)
        Constraint::Min(3),    // List
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        list: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.list.y, 3);
        assert_eq!(layout.list.height, 20); // 24 - 3 - 1
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.status.height, 1);
    }

    #[test]
    fn test_create_layout_small_terminal() {
        let layout = create(Rect::new(0, 0, 40, 7));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.list.height, 3);
        assert_eq!(layout.status.height, 1);
    }
}
