//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use cmlist_app::view_model::LIST_TITLE;
use cmlist_app::{render_model, AppState, ListView, ReadyView};

use super::{layout, widgets};
use crate::theme::{palette, styles};
use crate::widgets::Focus;

/// Layer that receives keys, mirroring the key handler's focus order
pub fn focus(state: &AppState) -> Focus {
    if state.test_send.error_dialog_visible {
        Focus::ErrorDialog
    } else if state.dialog.is_open() {
        Focus::Dialog
    } else if state.action_menu.is_some() {
        Focus::ActionMenu
    } else {
        Focus::List
    }
}

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let model = render_model(state);

    let header = widgets::Header::new(LIST_TITLE, &state.user_id, state.context.breakpoint)
        .read_only(state.context.read_only)
        .refreshing(state.query.loading && !matches!(model, ListView::Loading))
        .test_send_pending(state.test_send.pending());
    frame.render_widget(header, areas.header);

    let focus = focus(state);
    match &model {
        ListView::Loading => render_placeholder(
            frame,
            areas.list,
            "Loading contact methods…",
            styles::text_muted(),
        ),
        ListView::Error { message } => render_placeholder(
            frame,
            areas.list,
            &format!("Error: {message}\n\nPress r to retry"),
            styles::status_red(),
        ),
        ListView::Ready(ready) => render_ready(frame, areas.list, state, ready, focus),
    }

    frame.render_widget(
        widgets::StatusBar::new(focus, state.context.read_only),
        areas.status,
    );
}

fn render_ready(frame: &mut Frame, area: Rect, state: &AppState, view: &ReadyView, focus: Focus) {
    frame.render_widget(
        widgets::ContactList::new(view, state.selected).focused(focus == Focus::List),
        area,
    );

    if let Some(menu) = &state.action_menu {
        let actions = view
            .rows
            .iter()
            .find(|row| row.id == menu.id)
            .and_then(|row| row.actions.as_deref());
        if let Some(actions) = actions {
            frame.render_widget(widgets::ActionMenu::new(actions, menu.highlighted), area);
        }
    }

    // The modal and the error dialog are independent; the error dialog
    // stacks on top when both are up.
    if let Some(modal) = &view.modal {
        let target = state.contact_method(&modal.contact_method_id);
        frame.render_widget(widgets::DialogFrame::new(modal).target(target), frame.area());
    }

    if let Some(error) = &view.error_dialog {
        frame.render_widget(widgets::ErrorDialog::new(error), frame.area());
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let block = styles::glass_block(true).title(format!(" {LIST_TITLE} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Vertically center a short message
    let top = inner.height.saturating_sub(3) / 2;
    let text_area = Rect::new(inner.x, inner.y + top, inner.width, inner.height - top);
    frame.render_widget(
        Paragraph::new(text.to_string())
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        text_area,
    );
}
