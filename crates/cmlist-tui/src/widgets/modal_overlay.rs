//! Shared modal overlay helpers: centering, shadow and clearing.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area, clamped to the area.
///
/// ```
/// use ratatui::layout::Rect;
/// use cmlist_tui::widgets::modal_overlay::centered_rect;
///
/// let modal = centered_rect(40, 10, Rect::new(0, 0, 80, 24));
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Draw a 1-cell shadow along the right and bottom edges of `modal_rect`.
/// Cells outside the buffer are skipped.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);
    let right_x = modal_rect.right();
    let bottom_y = modal_rect.bottom();

    let right_edge = (modal_rect.y.saturating_add(1)..=bottom_y).map(|y| (right_x, y));
    let bottom_edge = (modal_rect.x.saturating_add(1)..right_x).map(|x| (x, bottom_y));

    for pos in right_edge.chain(bottom_edge) {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Carve out a centered popup: shadow, then a cleared rect. Returns the
/// popup rect for the caller to draw into.
pub fn open_popup(buf: &mut Buffer, area: Rect, width: u16, height: u16) -> Rect {
    let popup = centered_rect(width, height, area);
    render_shadow(buf, popup);
    Clear.render(popup, buf);
    popup
}
