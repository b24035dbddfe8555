//! Bottom status line
//!
//! Shows, in priority order: the refresh/loading indicator, the fetch error,
//! or the record counts. A retry after a failure shows the spinner until it
//! settles. Key hints are right-aligned unless an error is shown.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use roster_app::{ListState, UiMode};

use crate::theme::styles;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub struct StatusBar<'a> {
    list: &'a ListState,
    visible: usize,
    mode: UiMode,
    spinner_frame: usize,
}

impl<'a> StatusBar<'a> {
    pub fn new(list: &'a ListState, visible: usize, mode: UiMode) -> Self {
        Self {
            list,
            visible,
            mode,
            spinner_frame: 0,
        }
    }

    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    fn shows_error(&self) -> bool {
        self.list.error.is_some() && !self.list.is_busy()
    }

    fn status_line(&self) -> Line<'static> {
        let spinner = spinner_glyph(self.spinner_frame);
        if self.list.is_refreshing {
            return Line::from(Span::styled(
                format!(" {} Refreshing…", spinner),
                styles::status_yellow(),
            ));
        }
        if self.list.is_loading {
            return Line::from(Span::styled(
                format!(" {} Loading…", spinner),
                styles::status_yellow(),
            ));
        }
        if let Some(error) = &self.list.error {
            return Line::from(Span::styled(format!(" {}", error), styles::status_red()));
        }

        let mut spans = vec![Span::styled(
            format!(" {} of {} shown", self.visible, self.list.records.len()),
            styles::text_secondary(),
        )];
        if self.list.cursor.is_some() {
            spans.push(Span::styled("  more available", styles::text_muted()));
        }
        Line::from(spans)
    }

    fn hints(&self) -> Line<'static> {
        let pairs: &[(&str, &str)] = match self.mode {
            UiMode::List => &[
                ("Tab", "role"),
                ("/", "search"),
                ("r", "refresh"),
                ("n", "next"),
                ("q", "quit"),
            ],
            UiMode::SearchInput => &[("Enter", "done"), ("^U", "clear")],
            UiMode::Detail => &[("Esc", "close")],
        };

        let mut spans = Vec::new();
        for (key, action) in pairs {
            spans.push(Span::styled(key.to_string(), styles::keybinding()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Errors get the whole row
        if self.shows_error() {
            Paragraph::new(self.status_line()).render(area, buf);
            return;
        }

        let hints = self.hints();
        let hints_width = (hints.width() as u16).min(area.width);
        let status_width = area.width.saturating_sub(hints_width);

        Paragraph::new(self.status_line())
            .render(Rect::new(area.x, area.y, status_width, area.height), buf);
        Paragraph::new(hints).alignment(Alignment::Right).render(
            Rect::new(area.x + status_width, area.y, hints_width, area.height),
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use roster_backend::test_utils::david_and_lynn;
    use roster_core::Cursor;

    fn render(bar: StatusBar) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 1);
        let area = term.area();
        term.render_widget(bar, area);
        term
    }

    #[test]
    fn test_counts_when_idle() {
        let mut list = ListState::new();
        list.records = david_and_lynn().items;
        list.cursor = Some(Cursor::new("next"));

        let term = render(StatusBar::new(&list, 1, UiMode::List));

        assert!(term.buffer_contains("1 of 2 shown"));
        assert!(term.buffer_contains("more available"));
        assert!(term.buffer_contains("refresh"));
    }

    #[test]
    fn test_loading_and_refreshing_indicators() {
        let mut list = ListState::new();
        list.is_loading = true;
        assert!(render(StatusBar::new(&list, 0, UiMode::List)).buffer_contains("Loading"));

        list.is_refreshing = true;
        assert!(render(StatusBar::new(&list, 0, UiMode::List)).buffer_contains("Refreshing"));
    }

    #[test]
    fn test_error_shown_once_settled() {
        let mut list = ListState::new();
        list.error = Some("Error fetching customers: Network Error".into());

        let term = render(StatusBar::new(&list, 0, UiMode::List));

        assert!(term.buffer_contains("Error fetching customers: Network Error"));
        assert!(!term.buffer_contains("refresh"));
    }

    #[test]
    fn test_retry_after_failure_shows_refresh_indicator() {
        let mut list = ListState::new();
        list.error = Some("Error fetching customers: Network Error".into());
        list.is_refreshing = true;

        let term = render(StatusBar::new(&list, 0, UiMode::List));

        assert!(term.buffer_contains("Refreshing"));
        assert!(!term.buffer_contains("Network Error"));
        assert!(term.buffer_contains("refresh"));
    }

    #[test]
    fn test_spinner_glyph_wraps() {
        assert_eq!(spinner_glyph(0), spinner_glyph(SPINNER_FRAMES.len()));
    }
}
