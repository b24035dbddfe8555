//! Search input prompt widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// One-row search prompt: `/query_` while editing, a hint when idle and empty
pub struct SearchInput<'a> {
    text: &'a str,
    active: bool,
}

impl<'a> SearchInput<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            active: false,
        }
    }

    /// Render with an edit cursor
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = if !self.active && self.text.is_empty() {
            Line::from(Span::styled(" Press / to search by name", styles::text_muted()))
        } else {
            let mut spans = vec![
                Span::raw(" "),
                Span::styled("/", styles::keybinding()),
                Span::styled(self.text, styles::text_primary()),
            ];
            if self.active {
                spans.push(Span::styled("_", styles::accent()));
            }
            Line::from(spans)
        };

        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_idle_empty_search_shows_hint() {
        let mut term = TestTerminal::new();
        term.render_widget(SearchInput::new(""), Rect::new(0, 0, 80, 1));
        assert!(term.buffer_contains("Press / to search"));
    }

    #[test]
    fn test_active_search_shows_text_and_cursor() {
        let mut term = TestTerminal::new();
        term.render_widget(SearchInput::new("dav").active(true), Rect::new(0, 0, 80, 1));
        assert!(term.buffer_contains("/dav_"));
    }

    #[test]
    fn test_inactive_search_keeps_text_without_cursor() {
        let mut term = TestTerminal::new();
        term.render_widget(SearchInput::new("dav"), Rect::new(0, 0, 80, 1));
        assert!(term.buffer_contains("/dav"));
        assert!(!term.buffer_contains("/dav_"));
    }
}
