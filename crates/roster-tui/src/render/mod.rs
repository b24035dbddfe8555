//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use roster_app::{AppState, UiMode};

use crate::layout;
use crate::theme::palette;
use crate::widgets::{self, spinner_glyph};

/// Render the complete UI (View function in TEA).
///
/// Pure: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let list = &state.list;
    let visible = state.visible_records();

    frame.render_widget(widgets::RoleTabs::new(list.selected_role), areas.header);

    frame.render_widget(
        widgets::SearchInput::new(&list.search_text).active(state.ui_mode == UiMode::SearchInput),
        areas.search,
    );

    frame.render_widget(
        widgets::CustomerList::new(&visible)
            .selected(state.selected_index)
            .show_email(state.show_email)
            .loading(list.is_busy())
            .focused(state.ui_mode == UiMode::List),
        areas.list,
    );

    frame.render_widget(
        widgets::StatusBar::new(list, visible.len(), state.ui_mode)
            .spinner_frame(state.spinner_frame),
        areas.status,
    );

    if let Some(detail) = state.detail.as_ref().filter(|_| state.ui_mode == UiMode::Detail) {
        frame.render_widget(
            widgets::DetailPopup::new(detail).spinner(spinner_glyph(state.spinner_frame)),
            area,
        );
    }
}
