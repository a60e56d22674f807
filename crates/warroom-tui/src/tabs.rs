//! Panel tabs.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Top-level panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Tactical,
    Threats,
    Intel,
    Polls,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Tactical, Tab::Threats, Tab::Intel, Tab::Polls];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Tab::Tactical => "TACTICAL",
            Tab::Threats => "THREATS",
            Tab::Intel => "INTEL",
            Tab::Polls => "POLLS",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    /// Tab at `index`, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Label as drawn in the tab bar.
    fn label(self) -> String {
        format!(" {} {} ", self.index() + 1, self.title())
    }
}

/// Gap between tab labels.
const GAP: u16 = 1;

/// Column ranges of each tab label, starting at `area.x`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn tab_spans(area: Rect) -> Vec<(Tab, u16, u16)> {
    let mut x = area.x;
    Tab::ALL
        .iter()
        .map(|&tab| {
            let width = tab.label().chars().count() as u16;
            let span = (tab, x, x + width);
            x += width + GAP;
            span
        })
        .collect()
}

/// Tab under a cell of the tab bar.
#[must_use]
pub fn tab_at(area: Rect, column: u16, row: u16) -> Option<Tab> {
    if row < area.y || row >= area.bottom() {
        return None;
    }
    tab_spans(area)
        .into_iter()
        .find(|&(_, start, end)| column >= start && column < end && column < area.right())
        .map(|(tab, _, _)| tab)
}

/// Render the tab bar with `active` highlighted.
pub fn render_tabs(frame: &mut Frame, area: Rect, active: Tab) {
    let theme = ColorTheme::default();
    let mut spans = Vec::with_capacity(Tab::ALL.len() * 2);
    for tab in Tab::ALL {
        let style = if tab == active {
            theme.highlight_style()
        } else {
            Style::default().fg(theme.primary)
        };
        spans.push(Span::styled(tab.label(), style));
        spans.push(Span::raw(" ".repeat(GAP as usize)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Tab::Tactical.next(), Tab::Threats);
        assert_eq!(Tab::Polls.next(), Tab::Tactical);
        assert_eq!(Tab::Tactical.prev(), Tab::Polls);
        assert_eq!(Tab::Intel.prev(), Tab::Threats);
    }

    #[test]
    fn from_index() {
        assert_eq!(Tab::from_index(0), Some(Tab::Tactical));
        assert_eq!(Tab::from_index(3), Some(Tab::Polls));
        assert_eq!(Tab::from_index(4), None);
    }

    #[test]
    fn spans_are_contiguous() {
        let spans = tab_spans(Rect::new(2, 0, 80, 1));
        assert_eq!(spans[0].1, 2);
        // " 1 TACTICAL " is 12 wide
        assert_eq!(spans[0].2, 14);
        assert_eq!(spans[1].1, 15);
    }

    #[test]
    fn tab_at_hits_labels() {
        let area = Rect::new(0, 3, 80, 1);
        assert_eq!(tab_at(area, 0, 3), Some(Tab::Tactical));
        assert_eq!(tab_at(area, 16, 3), Some(Tab::Threats));
        // The gap between labels
        assert_eq!(tab_at(area, 12, 3), None);
        assert_eq!(tab_at(area, 0, 4), None);
        assert_eq!(tab_at(area, 79, 3), None);
    }

    #[test]
    fn render_highlights_active() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_tabs(frame, area, Tab::Threats);
            })
            .unwrap();
        let content: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 0)].symbol().to_string())
            .collect();
        assert!(content.contains("1 TACTICAL"));
        assert!(content.contains("4 POLLS"));
        assert_eq!(buf.buffer[(16, 0)].bg, ColorTheme::default().primary);
        assert_ne!(buf.buffer[(2, 0)].bg, ColorTheme::default().primary);
    }
}
