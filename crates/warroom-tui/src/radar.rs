//! Radar panel: range rings, the rotating sweep, threat blips and conflict
//! markers.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;
use warroom_core::constants::{RADAR_RANGE, SWEEP_TRAIL_DEGREES};
use warroom_core::{severity_tone, ConflictZone, RadarOffset, Sweep, ThreatBlip, ZoneRegistry};

use crate::styles::{severity_style, tone_color, ColorTheme};

/// Side of the radar's logical square.
const SIZE: f64 = RADAR_RANGE * 2.0;
const CONFLICT_MARKER: &str = "◆";
/// Trail segments drawn behind the sweep line.
const TRAIL_STEPS: u16 = 5;

/// Everything the radar panel draws.
pub struct RadarView<'a> {
    pub blips: &'a [ThreatBlip],
    pub zones: &'a ZoneRegistry,
    pub sweep: Sweep,
}

/// Drawable area of the radar inside its border.
#[must_use]
pub fn radar_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Canvas point for an offset; the canvas y axis points up.
fn canvas_point(offset: RadarOffset) -> (f64, f64) {
    let (x, y) = offset.project(SIZE);
    (x, SIZE - y)
}

/// Cell where the canvas prints the label for `offset` inside `inner`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn offset_cell(inner: Rect, offset: RadarOffset) -> (u16, u16) {
    let (x, y) = canvas_point(offset);
    let span_x = f64::from(inner.width.saturating_sub(1));
    let span_y = f64::from(inner.height.saturating_sub(1));
    let col = (x * span_x / SIZE) as u16;
    let row = ((SIZE - y) * span_y / SIZE) as u16;
    (inner.x + col, inner.y + row)
}

/// Conflict marker under a cell, with one cell of slack each way.
#[must_use]
pub fn zone_at<'a>(
    inner: Rect,
    zones: &'a ZoneRegistry,
    column: u16,
    row: u16,
) -> Option<&'a ConflictZone> {
    zones.zones().iter().find(|zone| {
        let (x, y) = offset_cell(inner, zone.radar_offset());
        x.abs_diff(column) <= 1 && y.abs_diff(row) <= 1
    })
}

/// End of a sweep-direction ray of length `radius` from the centre.
fn ray(degrees: f64, radius: f64) -> (f64, f64) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    // Bearings grow clockwise with y down, so flip y for the canvas.
    (SIZE / 2.0 + cos * radius, SIZE / 2.0 - sin * radius)
}

/// Render the radar panel.
pub fn render_radar(frame: &mut Frame, area: Rect, view: &RadarView<'_>) {
    let theme = ColorTheme::default();
    let title = format!(" RADAR {:03}° ", view.sweep.degrees());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::styled(title, theme.title_style()))
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let sweep = view.sweep;
    let blips: Vec<(f64, f64, Span<'static>)> = view
        .blips
        .iter()
        .map(|blip| {
            let (x, y) = canvas_point(blip.offset);
            let lit = sweep.has_passed_within(blip.offset.bearing(), SWEEP_TRAIL_DEGREES);
            let mut style = Style::default().fg(tone_color(severity_tone(&blip.threat_level)));
            style = if lit {
                style.add_modifier(Modifier::BOLD)
            } else {
                style.add_modifier(Modifier::DIM)
            };
            (x, y, Span::styled(blip.kind.glyph(), style))
        })
        .collect();
    let markers: Vec<(f64, f64, Span<'static>)> = view
        .zones
        .zones()
        .iter()
        .map(|zone| {
            let (x, y) = canvas_point(zone.radar_offset());
            let style = severity_style(zone.severity).add_modifier(Modifier::BOLD);
            (x, y, Span::styled(CONFLICT_MARKER, style))
        })
        .collect();

    let ring = theme.border;
    let beam = theme.primary;
    let centre = SIZE / 2.0;
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, SIZE])
        .y_bounds([0.0, SIZE])
        .paint(move |ctx| {
            for i in 1..=4 {
                ctx.draw(&Circle {
                    x: centre,
                    y: centre,
                    radius: RADAR_RANGE * f64::from(i) / 4.0,
                    color: ring,
                });
            }
            ctx.draw(&CanvasLine::new(centre, 0.0, centre, SIZE, ring));
            ctx.draw(&CanvasLine::new(0.0, centre, SIZE, centre, ring));

            let heading = f64::from(sweep.degrees());
            let trail_step = SWEEP_TRAIL_DEGREES / f64::from(TRAIL_STEPS);
            for step in 1..=TRAIL_STEPS {
                let (x, y) = ray(heading - trail_step * f64::from(step), RADAR_RANGE);
                ctx.draw(&CanvasLine::new(centre, centre, x, y, Color::Rgb(0x11, 0x66, 0x11)));
            }
            let (x, y) = ray(heading, RADAR_RANGE);
            ctx.draw(&CanvasLine::new(centre, centre, x, y, beam));

            ctx.layer();
            for (x, y, glyph) in blips.iter().chain(markers.iter()) {
                ctx.print(*x, *y, glyph.clone());
            }
        });
    frame.render_widget(canvas, inner);
}
