//! HUD top bar.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use warroom_core::{Clock, HudStatus};

use crate::styles::{tone_color, ColorTheme};

/// Render the top bar: defense grid, threat count and alert level on the
/// left, system status and local time on the right.
pub fn render_header(frame: &mut Frame, area: Rect, hud: &HudStatus, clock: &Clock) {
    let theme = ColorTheme::default();
    let status_color = tone_color(hud.system_status.tone());

    let left = Line::from(vec![
        Span::styled(" DEFENSE GRID ", theme.title_style()),
        Span::styled("●", Style::default().fg(status_color)),
        Span::styled(
            format!("   THREATS: {}", hud.active_threats),
            Style::default().fg(theme.primary),
        ),
        Span::styled(
            format!("   ALERT LVL: {}", hud.threat_level),
            Style::default().fg(theme.primary),
        ),
    ]);

    let right = Line::from(vec![
        Span::styled(
            hud.system_status.label().to_uppercase(),
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {}   {} ", clock.time_label(), clock.date_label()),
            Style::default().fg(theme.primary),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(left), inner);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), inner);
}
