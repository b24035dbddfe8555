//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and role tabs (bordered)
    pub header: Rect,

    /// One-row search prompt
    pub search: Rect,

    /// Customer rows (bordered)
    pub list: Rect,

    /// Loading/refresh indicator, error text and key hints
    pub status: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (title + tabs inside border)
        Constraint::Length(1), // Search
        Constraint::Min(3),    // List
        Constraint::Length(1), // Status
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        search: chunks[1],
        list: chunks[2],
        status: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.search.y, 3);
        assert_eq!(layout.list.y, 4);
        assert_eq!(layout.list.height, 19); // 24 - 3 - 1 - 1
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_create_layout_tiny_terminal() {
        let layout = create(Rect::new(0, 0, 40, 8));
        assert_eq!(layout.list.height, 3);
        assert_eq!(layout.status.height, 1);
    }
}
