//! Threat indicator cards.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};
use ratatui::Frame;
use warroom_core::{Blink, Severity, ThreatCard};

use crate::styles::{badge_style, tone_color, ColorTheme};

/// Cards per row.
const COLUMNS: usize = 2;

/// Glyph per threat level.
fn level_icon(level: Severity) -> &'static str {
    match level {
        Severity::Low => "⛨",
        Severity::Medium | Severity::High => "⚠",
        Severity::Critical => "☠",
    }
}

/// Whether a card should render in its dim phase.
///
/// Only critical cards blink.
#[must_use]
pub fn is_dimmed(card: &ThreatCard, blink: Blink) -> bool {
    card.level == Severity::Critical && blink.is_dim()
}

/// Render a single card.
pub fn render_card(frame: &mut Frame, area: Rect, card: &ThreatCard, blink: Blink) {
    let tone = card.level.tone();
    let mut accent = Style::default().fg(tone_color(tone));
    if is_dimmed(card, blink) {
        accent = accent.add_modifier(Modifier::DIM);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(accent)
        .title(Line::from(vec![
            Span::styled(format!(" {} ", level_icon(card.level)), accent),
            Span::styled(
                format!(" {} ", card.level.label().to_uppercase()),
                badge_style(tone),
            ),
            Span::raw(" "),
        ]));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [text_area, gauge_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
    let text = vec![
        Line::styled(card.location.clone(), accent.add_modifier(Modifier::BOLD)),
        Line::styled(card.kind.clone(), ColorTheme::default().text_style()),
    ];
    frame.render_widget(Paragraph::new(text), text_area);

    let gauge = Gauge::default()
        .gauge_style(accent)
        .label(format!("CONFIDENCE {}%", card.confidence))
        .percent(u16::from(card.confidence.min(100)));
    frame.render_widget(gauge, gauge_area);
}

/// Render all cards in a grid.
#[allow(clippy::cast_possible_truncation)]
pub fn render_threats(frame: &mut Frame, area: Rect, cards: &[ThreatCard], blink: Blink) {
    let theme = ColorTheme::default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::styled(" THREAT ASSESSMENT ", theme.title_style()))
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if cards.is_empty() {
        frame.render_widget(
            Paragraph::new("NO ACTIVE THREATS").style(theme.muted_style()),
            inner,
        );
        return;
    }

    let rows = cards.len().div_ceil(COLUMNS);
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(inner);
    for (row_area, chunk) in row_areas.iter().zip(cards.chunks(COLUMNS)) {
        let cols = Layout::horizontal(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(*row_area);
        for (card_area, card) in cols.iter().zip(chunk) {
            render_card(frame, *card_area, card, blink);
        }
    }
}
