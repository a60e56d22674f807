//! Daily poll panel: options before voting, result gauges after.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;
use warroom_core::{format_number, Poll, PollState};

use crate::styles::ColorTheme;

/// Rows above the first option: question, blank, total.
const HEADER_ROWS: u16 = 3;
/// Rows per option.
const OPTION_ROWS: u16 = 2;

/// Drawable area of the poll inside its border.
#[must_use]
pub fn poll_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Rect of option `index` inside `inner`, if it fits.
#[must_use]
pub fn option_rect(inner: Rect, index: usize) -> Option<Rect> {
    let offset = OPTION_ROWS.checked_mul(u16::try_from(index).ok()?)?;
    let y = inner.y.checked_add(HEADER_ROWS)?.checked_add(offset)?;
    if y.checked_add(OPTION_ROWS)? > inner.bottom() {
        return None;
    }
    Some(Rect::new(inner.x, y, inner.width, OPTION_ROWS))
}

/// Index of the option under a cell.
#[must_use]
pub fn option_at(inner: Rect, options: usize, column: u16, row: u16) -> Option<usize> {
    // Rects only move down, so the first one that does not fit ends the scan.
    (0..options)
        .map_while(|i| option_rect(inner, i))
        .position(|r| column >= r.x && column < r.right() && row >= r.y && row < r.bottom())
}

/// Render the poll panel.
///
/// `cursor` is the keyboard-highlighted option while no vote is in.
pub fn render_poll(frame: &mut Frame, area: Rect, poll: &Poll, state: &PollState, cursor: usize) {
    let theme = ColorTheme::default();
    let title = if state.is_submitted() {
        " DAILY POLL ✓ VOTED "
    } else {
        " DAILY POLL "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::styled(title, theme.title_style()))
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let header = vec![
        Line::styled(poll.question.clone(), theme.text_style().add_modifier(Modifier::BOLD)),
        Line::default(),
        Line::styled(
            format!("{} RESPONSES", format_number(poll.total_votes())),
            theme.muted_style(),
        ),
    ];
    let header_area = Rect {
        height: inner.height.min(HEADER_ROWS),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(header).wrap(Wrap { trim: true }),
        header_area,
    );

    for (i, (option, percent)) in poll.breakdown().into_iter().enumerate() {
        let Some(rect) = option_rect(inner, i) else {
            break;
        };
        let mine = state.is_selected(&option.id);
        let label = format!(
            "{} {}{}",
            option.flag,
            option.text,
            if mine { "  ◀ YOUR VOTE" } else { "" }
        );

        if state.is_submitted() {
            let label_row = Rect { height: 1, ..rect };
            let style = if mine {
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
            } else {
                theme.text_style()
            };
            frame.render_widget(Paragraph::new(Line::styled(label, style)), label_row);

            let gauge_row = Rect {
                y: rect.y + 1,
                height: 1,
                ..rect
            };
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(if mine { theme.primary } else { Color::Gray }))
                .label(format!("{percent}% ({})", format_number(option.votes)))
                .percent(u16::from(percent));
            frame.render_widget(gauge, gauge_row);
        } else {
            let (marker, style) = if i == cursor {
                ("▶ ", theme.highlight_style())
            } else {
                ("  ", theme.text_style())
            };
            let line = Line::from(vec![Span::styled(marker, style), Span::styled(label, style)]);
            frame.render_widget(Paragraph::new(line), Rect { height: 1, ..rect });
        }
    }
}
