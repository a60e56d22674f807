//! HUD bottom bar with link status, host metrics and key hints.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::messages::SystemMetrics;
use crate::styles::ColorTheme;

/// Render the bottom bar.
///
/// CPU and MEM come from the latest host sample; NET is the dataset's
/// uplink figure.
pub fn render_footer(frame: &mut Frame, area: Rect, metrics: SystemMetrics, net_percent: u8) {
    let theme = ColorTheme::default();
    let text_style = Style::default().fg(theme.primary);

    let links = Line::from(vec![Span::styled(
        " SATCOM: ACTIVE   SIGINT: ONLINE   HUMINT: OPERATIONAL",
        text_style,
    )]);
    let figures = Line::from(vec![Span::styled(
        format!(
            "CPU: {:.0}%   MEM: {:.0}%   NET: {net_percent}% ",
            metrics.cpu_percent, metrics.memory_percent
        ),
        text_style,
    )]);
    let key = Style::default().fg(Color::Yellow);
    let hints = Line::from(vec![
        Span::styled(" q", key),
        Span::raw(": quit | "),
        Span::styled("1-4", key),
        Span::raw(": tabs | "),
        Span::styled("←/→", key),
        Span::raw(": focus | "),
        Span::styled("enter", key),
        Span::raw(": open/vote | "),
        Span::styled("esc", key),
        Span::raw(": close"),
    ]);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status_row = Rect { height: inner.height.min(1), ..inner };
    frame.render_widget(Paragraph::new(links), status_row);
    frame.render_widget(Paragraph::new(figures).alignment(Alignment::Right), status_row);

    if inner.height > 1 {
        let hint_row = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        frame.render_widget(Paragraph::new(hints).style(theme.muted_style()), hint_row);
    }
}
