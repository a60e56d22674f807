//! HUD overlay: corner brackets, crosshair and the moving scan line.
//!
//! The overlay is drawn last and only restyles or fills blank cells, so the
//! panels underneath stay readable.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;
use warroom_core::ScanLine;

use crate::styles::ColorTheme;

const CORNERS: [&str; 4] = ["┏", "┓", "┗", "┛"];

/// Draw the overlay over `area`.
pub fn render_hud_overlay(frame: &mut Frame, area: Rect, scan_line: ScanLine) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let theme = ColorTheme::default();
    let bracket = Style::default()
        .fg(theme.primary)
        .add_modifier(Modifier::BOLD);
    let buf = frame.buffer_mut();

    let (left, top) = (area.x, area.y);
    let (right, bottom) = (area.right() - 1, area.bottom() - 1);
    for (symbol, (x, y)) in CORNERS
        .iter()
        .zip([(left, top), (right, top), (left, bottom), (right, bottom)])
    {
        buf[(x, y)].set_symbol(symbol).set_style(bracket);
    }

    // Crosshair only on empty cells.
    let (cx, cy) = (area.x + area.width / 2, area.y + area.height / 2);
    if buf[(cx, cy)].symbol() == " " {
        buf[(cx, cy)]
            .set_symbol("┼")
            .set_style(Style::default().fg(theme.muted));
    }

    let row = area.y + scan_line.row(area.height);
    buf.set_style(
        Rect::new(area.x, row, area.width, 1),
        Style::default().bg(theme.scan_line),
    );
}
