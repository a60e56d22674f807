//! Intel feed: priority briefings and breaking developments.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use warroom_core::model::{Briefing, BreakingItem};

use crate::styles::{badge_style, tone_color, ColorTheme};

/// Scroll state for the briefing list, counted in briefings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedScroll {
    /// Index of the first visible briefing.
    pub offset: usize,
}

impl FeedScroll {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll up by one item.
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Scroll down by one item.
    pub fn scroll_down(&mut self, total: usize) {
        self.offset = (self.offset + 1).min(total.saturating_sub(1));
    }

    /// Page up.
    pub fn page_up(&mut self, page_size: usize) {
        self.offset = self.offset.saturating_sub(page_size);
    }

    /// Page down.
    pub fn page_down(&mut self, page_size: usize, total: usize) {
        self.offset = (self.offset + page_size).min(total.saturating_sub(1));
    }

    /// Jump to top.
    pub fn home(&mut self) {
        self.offset = 0;
    }

    /// Jump to the last item.
    pub fn end(&mut self, total: usize) {
        self.offset = total.saturating_sub(1);
    }
}

fn briefing_lines(briefing: &Briefing) -> [Line<'_>; 3] {
    let color = tone_color(briefing.tone);
    [
        Line::styled(
            format!("▌{}", briefing.priority),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::styled(briefing.text.as_str(), ColorTheme::default().text_style()),
        Line::default(),
    ]
}

fn breaking_lines(item: &BreakingItem) -> [Line<'_>; 3] {
    let theme = ColorTheme::default();
    [
        Line::from(vec![
            Span::styled(format!(" {} ", item.stage), badge_style(item.tone)),
            Span::styled(format!(" {}", item.time), theme.muted_style()),
        ]),
        Line::styled(item.text.as_str(), theme.text_style()),
        Line::default(),
    ]
}

/// Render the briefings and breaking columns.
pub fn render_feed(
    frame: &mut Frame,
    area: Rect,
    briefings: &[Briefing],
    breaking: &[BreakingItem],
    scroll: &FeedScroll,
) {
    let theme = ColorTheme::default();
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);

    let position = if briefings.is_empty() {
        String::new()
    } else {
        format!("{}/{} ", (scroll.offset + 1).min(briefings.len()), briefings.len())
    };
    let brief_block = Block::default()
        .borders(Borders::ALL)
        .title(Line::styled(" INTELLIGENCE BRIEFINGS ", theme.title_style()))
        .title_bottom(Line::styled(position, theme.muted_style()).right_aligned())
        .border_style(theme.border_style());
    let lines: Vec<Line<'_>> = briefings
        .iter()
        .skip(scroll.offset)
        .flat_map(briefing_lines)
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .block(brief_block)
            .wrap(Wrap { trim: true }),
        left,
    );

    let news_block = Block::default()
        .borders(Borders::ALL)
        .title(Line::styled(" BREAKING ", theme.title_style()))
        .border_style(theme.border_style());
    let lines: Vec<Line<'_>> = breaking.iter().flat_map(breaking_lines).collect();
    frame.render_widget(
        Paragraph::new(lines)
            .block(news_block)
            .wrap(Wrap { trim: true }),
        right,
    );
}
