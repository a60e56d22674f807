//! Global status and recent developments panels on the tactical tab.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;
use warroom_core::model::Development;
use warroom_core::HudStatus;

use crate::styles::{badge_style, tone_color, ColorTheme};

/// DEFCON reading for an alert level. Level 5 is the most severe alert,
/// DEFCON 1 the most severe readiness.
#[must_use]
pub fn defcon(alert_level: u8) -> u8 {
    6 - alert_level.clamp(1, 5)
}

/// Render the global status panel.
pub fn render_global_status(frame: &mut Frame, area: Rect, hud: &HudStatus) {
    let theme = ColorTheme::default();
    let status_tone = hud.system_status.tone();
    let lines = vec![
        Line::from(vec![
            Span::styled("DEFCON        ", theme.muted_style()),
            Span::styled(
                defcon(hud.threat_level).to_string(),
                theme.title_style().fg(theme.accent),
            ),
        ]),
        Line::from(vec![
            Span::styled("ACTIVE THREATS", theme.muted_style()),
            Span::styled(format!(" {}", hud.active_threats), theme.text_style()),
        ]),
        Line::from(vec![
            Span::styled("SYSTEM        ", theme.muted_style()),
            Span::styled(
                hud.system_status.label().to_uppercase(),
                theme
                    .text_style()
                    .fg(tone_color(status_tone))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::styled(" GLOBAL STATUS ", theme.title_style()))
        .border_style(theme.border_style());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the recent developments list.
pub fn render_developments(frame: &mut Frame, area: Rect, developments: &[Development]) {
    let theme = ColorTheme::default();
    let items: Vec<ListItem<'_>> = developments
        .iter()
        .map(|d| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", d.time), theme.muted_style()),
                Span::styled(
                    format!(" {:<8} ", d.severity.label().to_uppercase()),
                    badge_style(d.severity.tone()),
                ),
                Span::styled(format!(" {}", d.event), theme.text_style()),
            ]))
        })
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::styled(" RECENT DEVELOPMENTS ", theme.title_style()))
        .border_style(theme.border_style());
    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use warroom_core::Dataset;

    fn rows(width: u16, height: u16, draw: impl Fn(&mut Frame, Rect)) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area);
            })
            .unwrap();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn defcon_inverts_alert_level() {
        assert_eq!(defcon(1), 5);
        assert_eq!(defcon(3), 3);
        assert_eq!(defcon(5), 1);
        assert_eq!(defcon(0), 5);
        assert_eq!(defcon(9), 1);
    }

    #[test]
    fn global_status_rows() {
        let data = Dataset::builtin();
        let rows = rows(40, 5, |frame, area| render_global_status(frame, area, &data.hud));
        assert!(rows[0].contains("GLOBAL STATUS"));
        assert!(rows[1].contains("DEFCON") && rows[1].contains('3'));
        assert!(rows[2].contains("ACTIVE THREATS 7"));
        assert!(rows[3].contains("OPERATIONAL"));
    }

    #[test]
    fn developments_list() {
        let data = Dataset::builtin();
        let rows = rows(110, 8, |frame, area| {
            render_developments(frame, area, &data.developments);
        });
        assert!(rows[0].contains("RECENT DEVELOPMENTS"));
        assert!(rows[1].contains("14:30"));
        assert!(rows[1].contains("CRITICAL"));
        assert!(rows[1].contains("Cyber attack"));
        assert!(rows[5].contains("06:00"));
    }
}
