//! Customer list widget
//!
//! One row per visible record: initial avatar, name, capitalized role and
//! optionally the email. Empty and loading states get a centered message.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use roster_core::{truncate_name, CustomerRecord};

use crate::theme::styles;

/// Widest the name column gets before truncation
const NAME_COLUMN_MAX: usize = 28;

pub struct CustomerList<'a> {
    records: &'a [&'a CustomerRecord],
    selected: usize,
    show_email: bool,
    loading: bool,
    focused: bool,
}

impl<'a> CustomerList<'a> {
    pub fn new(records: &'a [&'a CustomerRecord]) -> Self {
        Self {
            records,
            selected: 0,
            show_email: true,
            loading: false,
            focused: true,
        }
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    pub fn show_email(mut self, show: bool) -> Self {
        self.show_email = show;
        self
    }

    /// An initial fetch is outstanding
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn name_column_width(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.display_name().width())
            .max()
            .unwrap_or(0)
            .min(NAME_COLUMN_MAX)
    }

    fn row(&self, record: &CustomerRecord, name_width: usize) -> ListItem<'static> {
        let avatar = match record.initial() {
            Some(c) => format!(" {} ", c.to_uppercase()),
            None => " ? ".to_string(),
        };

        let name = truncate_name(record.display_name(), name_width);
        let padding = name_width.saturating_sub(name.width());

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(avatar, styles::avatar()),
            Span::raw(" "),
            Span::styled(name, styles::text_primary()),
            Span::raw(" ".repeat(padding + 2)),
            Span::styled(record.role.label(), styles::text_secondary()),
        ];

        if self.show_email {
            if let Some(email) = record.email.as_deref().filter(|e| !e.is_empty()) {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(email.to_string(), styles::text_muted()));
            }
        }

        ListItem::new(Line::from(spans))
    }

    fn render_message(message: &str, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let y = area.y + area.height / 2;
        Paragraph::new(Span::styled(message.to_string(), styles::text_muted()))
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, y, area.width, 1), buf);
    }
}

impl Widget for CustomerList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.records.is_empty() {
            let message = if self.loading {
                "Loading customers…"
            } else {
                "No customers to show"
            };
            Self::render_message(message, inner, buf);
            return;
        }

        let name_width = self.name_column_width();
        let items: Vec<ListItem> = self
            .records
            .iter()
            .map(|r| self.row(r, name_width))
            .collect();

        let mut state = ListState::default().with_selected(Some(self.selected));
        let list = List::new(items).highlight_style(styles::focused_selected());
        StatefulWidget::render(list, inner, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use roster_backend::test_utils::{test_nameless_record, test_record};

    #[test]
    fn test_rows_show_avatar_name_and_role() {
        let david = test_record("1", "David Miler", "ADMIN");
        let records = vec![&david];

        let mut term = TestTerminal::new();
        term.render_widget(CustomerList::new(&records), Rect::new(0, 0, 80, 10));

        assert!(term.buffer_contains(" D "));
        assert!(term.buffer_contains("David Miler"));
        assert!(term.buffer_contains("Admin"));
    }

    #[test]
    fn test_email_column_toggle() {
        let lynn = test_record("2", "Lynn Warr", "MANAGER").with_email("lynn@example.com");
        let records = vec![&lynn];

        let mut term = TestTerminal::new();
        term.render_widget(CustomerList::new(&records), Rect::new(0, 0, 80, 10));
        assert!(term.buffer_contains("lynn@example.com"));

        let mut term = TestTerminal::new();
        term.render_widget(
            CustomerList::new(&records).show_email(false),
            Rect::new(0, 0, 80, 10),
        );
        assert!(!term.buffer_contains("lynn@example.com"));
    }

    #[test]
    fn test_nameless_record_gets_placeholder_avatar() {
        let nameless = test_nameless_record("5", "ADMIN");
        let records = vec![&nameless];

        let mut term = TestTerminal::new();
        term.render_widget(CustomerList::new(&records), Rect::new(0, 0, 80, 10));

        assert!(term.buffer_contains(" ? "));
    }

    #[test]
    fn test_empty_states() {
        let records: Vec<&CustomerRecord> = Vec::new();

        let mut term = TestTerminal::new();
        term.render_widget(
            CustomerList::new(&records).loading(true),
            Rect::new(0, 0, 80, 10),
        );
        assert!(term.buffer_contains("Loading customers"));

        let mut term = TestTerminal::new();
        term.render_widget(CustomerList::new(&records), Rect::new(0, 0, 80, 10));
        assert!(term.buffer_contains("No customers to show"));
    }

    #[test]
    fn test_long_names_are_truncated() {
        let long = test_record("1", "Bartholomew Montgomery-Fitzwilliam III", "ADMIN");
        let records = vec![&long];

        let mut term = TestTerminal::new();
        term.render_widget(CustomerList::new(&records), Rect::new(0, 0, 80, 10));

        assert!(term.buffer_contains("…"));
        assert!(!term.buffer_contains("III"));
    }
}
