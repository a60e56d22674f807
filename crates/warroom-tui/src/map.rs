//! World map panel: conflict markers, country regions and the pointer readout.
//!
//! The canvas spans longitude `[-180, 180]` and latitude `[-85, 85]`, the
//! same frame `pointer_to_geo` reports in, so a marker at `(x, y)` percent
//! is printed at `pointer_to_geo(x / 100, y / 100)`.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Rectangle};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;
use warroom_core::constants::{LATITUDE_TOP, LONGITUDE_SPAN};
use warroom_core::geo::fraction_along;
use warroom_core::{
    pointer_to_geo, ConflictZone, CountryRegion, Dms, GeoPoint, MapPosition, ZoneRegistry,
};

use crate::styles::{severity_style, ColorTheme};

const MARKER: &str = "◉";

/// Everything the map panel draws.
pub struct MapView<'a> {
    pub zones: &'a ZoneRegistry,
    pub regions: &'a [CountryRegion],
    /// Index of the keyboard-focused marker.
    pub focused: Option<usize>,
    /// Last pointer position over the map.
    pub pointer: Option<GeoPoint>,
}

/// Drawable area of the map inside its border.
#[must_use]
pub fn map_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Fraction of `rect` under a terminal cell, on both axes.
#[must_use]
pub fn fraction_in(rect: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
    let fx = fraction_along(rect.x, rect.width, column)?;
    let fy = fraction_along(rect.y, rect.height, row)?;
    Some((fx, fy))
}

/// Cell where the canvas prints a marker for `pos` inside `inner`.
///
/// Mirrors the canvas label placement, which truncates.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn marker_cell(inner: Rect, pos: MapPosition) -> (u16, u16) {
    let geo = pointer_to_geo(pos.x / 100.0, pos.y / 100.0);
    let span_x = f64::from(inner.width.saturating_sub(1));
    let span_y = f64::from(inner.height.saturating_sub(1));
    let lat_span = LATITUDE_TOP * 2.0;
    let col = ((geo.lon + LONGITUDE_SPAN / 2.0) * span_x / LONGITUDE_SPAN) as u16;
    let row = ((LATITUDE_TOP - geo.lat) * span_y / lat_span) as u16;
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
        let (x, y) = marker_cell(inner, zone.position);
        x.abs_diff(column) <= 1 && y.abs_diff(row) <= 1
    })
}

/// Country region under a cell.
#[must_use]
pub fn region_at<'a>(
    inner: Rect,
    regions: &'a [CountryRegion],
    column: u16,
    row: u16,
) -> Option<&'a CountryRegion> {
    let (fx, fy) = fraction_in(inner, column, row)?;
    let pos = MapPosition::from_fraction(fx, fy);
    regions.iter().find(|region| region.contains(pos))
}

/// Pointer readout shown under the map.
#[must_use]
pub fn readout(pointer: Option<GeoPoint>) -> String {
    match pointer {
        Some(geo) => format!(
            " LAT {} LON {} ",
            Dms::latitude(geo.lat),
            Dms::longitude(geo.lon)
        ),
        None => " LAT --°--'--\" LON --°--'--\" ".to_string(),
    }
}

/// Render the map panel.
pub fn render_map(frame: &mut Frame, area: Rect, view: &MapView<'_>) {
    let theme = ColorTheme::default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::styled(" GLOBAL THREAT MAP ", theme.title_style()))
        .title_bottom(Line::styled(readout(view.pointer), theme.title_style()))
        .border_style(theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let regions: Vec<(f64, f64, f64, f64)> = view
        .regions
        .iter()
        .map(|r| {
            let top_left = pointer_to_geo(r.x0 / 100.0, r.y0 / 100.0);
            let bottom_right = pointer_to_geo(r.x1 / 100.0, r.y1 / 100.0);
            (
                top_left.lon,
                bottom_right.lat,
                bottom_right.lon - top_left.lon,
                top_left.lat - bottom_right.lat,
            )
        })
        .collect();

    let markers: Vec<(f64, f64, Span<'static>)> = view
        .zones
        .zones()
        .iter()
        .enumerate()
        .map(|(i, zone)| {
            let geo = pointer_to_geo(zone.position.x / 100.0, zone.position.y / 100.0);
            let style = if view.focused == Some(i) {
                theme.highlight_style()
            } else {
                severity_style(zone.severity).add_modifier(Modifier::BOLD)
            };
            let label = format!("{MARKER} {}", zone.name.to_uppercase());
            (geo.lon, geo.lat, Span::styled(label, style))
        })
        .collect();

    let land = theme.border;
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-LONGITUDE_SPAN / 2.0, LONGITUDE_SPAN / 2.0])
        .y_bounds([-LATITUDE_TOP, LATITUDE_TOP])
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: land,
                resolution: MapResolution::Low,
            });
            for &(x, y, width, height) in &regions {
                ctx.draw(&Rectangle {
                    x,
                    y,
                    width,
                    height,
                    color: Color::DarkGray,
                });
            }
            ctx.layer();
            for (x, y, label) in &markers {
                ctx.print(*x, *y, label.clone());
            }
        });
    frame.render_widget(canvas, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use warroom_core::Dataset;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 102,
        height: 32,
    };

    fn render(view: &MapView<'_>) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(AREA.width, AREA.height);
        let mut terminal = Terminal::new(backend).unwrap();
        let completed = terminal
            .draw(|frame| render_map(frame, AREA, view))
            .unwrap();
        completed.buffer.clone()
    }

    fn row_text(buf: &ratatui::buffer::Buffer, row: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, row)].symbol().to_string())
            .collect()
    }

    #[test]
    fn fraction_in_covers_edges() {
        let rect = Rect::new(10, 5, 11, 3);
        assert_eq!(fraction_in(rect, 10, 5), Some((0.0, 0.0)));
        assert_eq!(fraction_in(rect, 20, 7), Some((1.0, 1.0)));
        assert_eq!(fraction_in(rect, 15, 6), Some((0.5, 0.5)));
        assert_eq!(fraction_in(rect, 9, 6), None);
        assert_eq!(fraction_in(rect, 15, 8), None);
    }

    #[test]
    fn marker_cell_scales_linearly() {
        let inner = Rect::new(1, 1, 101, 51);
        assert_eq!(marker_cell(inner, MapPosition::new(0.0, 0.0)), (1, 1));
        assert_eq!(marker_cell(inner, MapPosition::new(100.0, 100.0)), (101, 51));
        let (x, y) = marker_cell(inner, MapPosition::new(50.0, 50.0));
        assert!(x.abs_diff(51) <= 1);
        assert!(y.abs_diff(26) <= 1);
    }

    #[test]
    fn zone_at_finds_marker_with_slack() {
        let data = Dataset::builtin();
        let inner = map_inner(AREA);
        let zone = data.zones.by_id("ukraine-russia").unwrap();
        let (x, y) = marker_cell(inner, zone.position);

        assert_eq!(zone_at(inner, &data.zones, x, y).map(|z| z.id.as_str()), Some("ukraine-russia"));
        assert_eq!(
            zone_at(inner, &data.zones, x + 1, y).map(|z| z.id.as_str()),
            Some("ukraine-russia")
        );
        assert!(zone_at(inner, &data.zones, inner.x, inner.bottom() - 1).is_none());
    }

    #[test]
    fn region_at_resolves_country() {
        let data = Dataset::builtin();
        let inner = map_inner(AREA);
        let brazil = data.regions.iter().find(|r| r.key == "brazil").unwrap();
        let centre = MapPosition::new((brazil.x0 + brazil.x1) / 2.0, (brazil.y0 + brazil.y1) / 2.0);
        let (x, y) = marker_cell(inner, centre);
        assert_eq!(region_at(inner, &data.regions, x, y).map(|r| r.key.as_str()), Some("brazil"));
        assert!(region_at(inner, &data.regions, 0, 0).is_none());
    }

    #[test]
    fn readout_formats_dms() {
        let geo = pointer_to_geo(0.5, 0.5);
        assert_eq!(readout(Some(geo)), " LAT 0°00'00\"N LON 0°00'00\"E ");
        assert!(readout(None).contains("--"));
    }

    #[test]
    fn render_shows_title_and_markers() {
        let data = Dataset::builtin();
        let view = MapView {
            zones: &data.zones,
            regions: &data.regions,
            focused: None,
            pointer: None,
        };
        let buf = render(&view);
        assert!(row_text(&buf, 0).contains("GLOBAL THREAT MAP"));

        let inner = map_inner(AREA);
        for zone in data.zones.zones() {
            let (x, y) = marker_cell(inner, zone.position);
            assert_eq!(buf[(x, y)].symbol(), MARKER, "marker for {}", zone.id);
        }
    }

    #[test]
    fn render_shows_pointer_readout() {
        let data = Dataset::builtin();
        let view = MapView {
            zones: &data.zones,
            regions: &data.regions,
            focused: Some(0),
            pointer: Some(pointer_to_geo(0.0, 0.0)),
        };
        let buf = render(&view);
        let bottom = row_text(&buf, AREA.height - 1);
        assert!(bottom.contains("LAT 85°00'00\"N"));
        assert!(bottom.contains("LON 180°00'00\"W"));
    }

    #[test]
    fn render_focused_marker_is_highlighted() {
        let data = Dataset::builtin();
        let view = MapView {
            zones: &data.zones,
            regions: &data.regions,
            focused: Some(1),
            pointer: None,
        };
        let buf = render(&view);
        let zone = &data.zones.zones()[1];
        let (x, y) = marker_cell(map_inner(AREA), zone.position);
        assert_eq!(buf[(x, y)].bg, ColorTheme::default().primary);
    }

    #[test]
    fn render_tiny_area() {
        let data = Dataset::builtin();
        let view = MapView {
            zones: &data.zones,
            regions: &data.regions,
            focused: None,
            pointer: None,
        };
        let backend = TestBackend::new(2, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_map(frame, area, &view);
            })
            .unwrap();
    }
}
