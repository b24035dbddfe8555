//! Header with title and role filter tabs

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

use roster_core::{RoleTab, ROLE_TABS};

use crate::theme::styles;

const TITLE: &str = " Customers ";

/// Bordered header showing the title and one tab per role
pub struct RoleTabs {
    selected: RoleTab,
}

impl RoleTabs {
    pub fn new(selected: RoleTab) -> Self {
        Self { selected }
    }

    fn titles() -> Vec<Line<'static>> {
        ROLE_TABS
            .iter()
            .map(|tab| Line::from(format!(" {} {} ", tab.index() + 1, tab.label())))
            .collect()
    }
}

impl Widget for RoleTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let [title_area, tabs_area] =
            Layout::horizontal([Constraint::Length(TITLE.len() as u16), Constraint::Min(0)])
                .areas(inner);

        Paragraph::new(Span::styled(TITLE, styles::accent_bold())).render(title_area, buf);

        Tabs::new(Self::titles())
            .select(self.selected.index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider(Span::styled("│", styles::text_muted()))
            .render(tabs_area, buf);
    }
}
