//! Customer detail popup

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use roster_app::DetailState;

use super::modal_overlay::centered_rect;
use crate::theme::styles;

const POPUP_WIDTH: u16 = 56;
const POPUP_HEIGHT: u16 = 10;

pub struct DetailPopup<'a> {
    detail: &'a DetailState,
    spinner: &'a str,
}

impl<'a> DetailPopup<'a> {
    pub fn new(detail: &'a DetailState) -> Self {
        Self {
            detail,
            spinner: "",
        }
    }

    /// Spinner glyph shown while the record is being refreshed
    pub fn spinner(mut self, spinner: &'a str) -> Self {
        self.spinner = spinner;
        self
    }

    fn field(label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{:<7}", label), styles::text_muted()),
            Span::styled(value, styles::text_primary()),
        ])
    }
}

impl Widget for DetailPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(POPUP_WIDTH, POPUP_HEIGHT, area);
        Clear.render(popup, buf);

        let block = styles::modal_block(" Customer ");
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = Vec::new();
        match &self.detail.record {
            Some(record) => {
                lines.push(Self::field("Name", record.display_name().to_string()));
                lines.push(Self::field(
                    "Email",
                    record.email.clone().unwrap_or_else(|| "-".to_string()),
                ));
                lines.push(Self::field("Role", record.role.label()));
                lines.push(Self::field("ID", record.id.to_string()));
            }
            None => lines.push(Self::field("ID", self.detail.id.to_string())),
        }

        lines.push(Line::default());
        if let Some(error) = &self.detail.error {
            lines.push(Line::from(Span::styled(error.clone(), styles::status_red())));
        } else if self.detail.loading {
            lines.push(Line::from(Span::styled(
                format!("{} Refreshing…", self.spinner),
                styles::status_yellow(),
            )));
        }
        lines.push(Line::from(vec![
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" close", styles::text_muted()),
        ]));

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use roster_backend::test_utils::test_record;
    use roster_core::CustomerId;

    #[test]
    fn test_detail_shows_record_fields() {
        let record = test_record("7", "Lynn Warr", "MANAGER").with_email("lynn@example.com");
        let mut detail = DetailState::new(CustomerId::new("7"), Some(record));
        detail.loading = false;

        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(DetailPopup::new(&detail), area);

        assert!(term.buffer_contains("Customer"));
        assert!(term.buffer_contains("Lynn Warr"));
        assert!(term.buffer_contains("lynn@example.com"));
        assert!(term.buffer_contains("Manager"));
        assert!(!term.buffer_contains("Refreshing"));
    }

    #[test]
    fn test_detail_loading_and_error_states() {
        let detail = DetailState::new(CustomerId::new("9"), None);
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(DetailPopup::new(&detail).spinner("⠋"), area);
        assert!(term.buffer_contains("Refreshing"));

        let mut failed = detail.clone();
        failed.loading = false;
        failed.error = Some("Error fetching customer: offline".into());
        let mut term = TestTerminal::new();
        term.render_widget(DetailPopup::new(&failed), area);
        assert!(term.buffer_contains("offline"));
    }
}
