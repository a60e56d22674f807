//! Conflict detail dialog.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use warroom_core::intel::{assessment, intel_for};
use warroom_core::ConflictZone;

use crate::styles::{badge_style, severity_style, tone_color, ColorTheme};

/// Percent of the body the dialog covers on each axis.
const WIDTH_PERCENT: u16 = 70;
const HEIGHT_PERCENT: u16 = 80;

/// Rect of `percent_x` x `percent_y` centred in `r`.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Where the dialog sits inside `area`.
#[must_use]
pub fn dialog_rect(area: Rect) -> Rect {
    centered_rect(WIDTH_PERCENT, HEIGHT_PERCENT, area)
}

fn field<'a>(label: &'a str, value: Span<'a>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<12}"), ColorTheme::default().muted_style()),
        value,
    ])
}

fn heading(text: &str) -> Line<'_> {
    Line::styled(text, ColorTheme::default().title_style())
}

/// Text of the dialog body for `zone`.
#[must_use]
pub fn dialog_lines(zone: &ConflictZone) -> Vec<Line<'_>> {
    let theme = ColorTheme::default();
    let mut lines = vec![
        field("LOCATION", Span::styled(zone.location.as_str(), theme.text_style())),
        field(
            "STATUS",
            Span::styled(
                format!(" {} ", zone.status.label().to_uppercase()),
                badge_style(zone.status.tone()),
            ),
        ),
        field(
            "THREAT",
            Span::styled(
                format!(" {} ", zone.severity.label().to_uppercase()),
                badge_style(zone.severity.tone()),
            ),
        ),
        field("UPDATED", Span::styled(zone.last_update.as_str(), theme.text_style())),
        field(
            "CASUALTIES",
            Span::styled(zone.casualties.as_str(), severity_style(zone.severity)),
        ),
        Line::default(),
        heading("KEY DEVELOPMENTS"),
    ];
    lines.extend(zone.key_developments.iter().map(|d| {
        Line::from(vec![
            Span::styled(" ▸ ", Style::default().fg(theme.accent)),
            Span::styled(d.as_str(), theme.text_style()),
        ])
    }));

    lines.push(Line::default());
    lines.push(heading("INVOLVED PARTIES"));
    lines.push(Line::styled(
        format!(" {}", zone.involved_parties.join(" · ")),
        theme.text_style(),
    ));

    lines.push(Line::default());
    lines.push(heading("INTELLIGENCE"));
    lines.extend(
        intel_for(&zone.id)
            .iter()
            .map(|line| Line::styled(format!(" {line}"), theme.text_style())),
    );
    lines.push(Line::default());
    lines.push(Line::styled(
        assessment(zone),
        Style::default()
            .fg(tone_color(zone.status.tone()))
            .add_modifier(Modifier::BOLD),
    ));
    lines
}

/// Render the dialog for `zone` over `area`.
pub fn render_dialog(frame: &mut Frame, area: Rect, zone: &ConflictZone) {
    let theme = ColorTheme::default();
    let popup = dialog_rect(area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(tone_color(zone.severity.tone())))
        .title(Line::styled(
            format!(" ⚠ {} ", zone.name),
            severity_style(zone.severity).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::styled(" [esc] close ", theme.muted_style()));

    let paragraph = Paragraph::new(dialog_lines(zone))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup);
}
