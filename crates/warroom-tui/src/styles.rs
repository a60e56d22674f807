//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};
use warroom_core::{Severity, Status, Tone};

/// Terminal color for a palette tone.
#[must_use]
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Red => Color::Rgb(0xff, 0x44, 0x44),
        Tone::Orange => Color::Rgb(0xff, 0x88, 0x00),
        Tone::Yellow => Color::Rgb(0xff, 0xff, 0x44),
        Tone::Green => Color::Rgb(0x44, 0xff, 0x44),
        Tone::Blue => Color::Rgb(0x60, 0xa5, 0xfa),
        Tone::Purple => Color::Rgb(0xc0, 0x84, 0xfc),
        Tone::Cyan => Color::Rgb(0x22, 0xd3, 0xee),
        Tone::Gray => Color::Rgb(0x9c, 0xa3, 0xaf),
    }
}

/// Foreground style for a severity.
#[must_use]
pub fn severity_style(severity: Severity) -> Style {
    Style::default().fg(tone_color(severity.tone()))
}

/// Foreground style for a status.
#[must_use]
pub fn status_style(status: Status) -> Style {
    Style::default().fg(tone_color(status.tone()))
}

/// Inverted badge, e.g. `[CRITICAL]` on its tone.
#[must_use]
pub fn badge_style(tone: Tone) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(tone_color(tone))
        .add_modifier(Modifier::BOLD)
}

/// Color theme for the HUD.
pub struct ColorTheme {
    pub primary: Color,
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub scan_line: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x44, 0xff, 0x44),
            accent: Color::Rgb(0xff, 0x88, 0x00),
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Rgb(0x22, 0x88, 0x22),
            scan_line: Color::Rgb(0x00, 0x33, 0x00),
        }
    }
}

impl ColorTheme {
    /// Get the style for panel titles.
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for panel borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get the style for highlighted items (focused marker, active tab).
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_colors_match_hex_values() {
        for tone in [
            Tone::Red,
            Tone::Orange,
            Tone::Yellow,
            Tone::Green,
            Tone::Blue,
            Tone::Purple,
            Tone::Cyan,
            Tone::Gray,
        ] {
            let Color::Rgb(r, g, b) = tone_color(tone) else {
                panic!("expected rgb for {tone:?}");
            };
            assert_eq!(format!("#{r:02x}{g:02x}{b:02x}"), tone.hex());
        }
    }

    #[test]
    fn severity_styles_follow_tones() {
        assert_eq!(
            severity_style(Severity::Critical).fg,
            Some(tone_color(Tone::Red))
        );
        assert_eq!(severity_style(Severity::Low).fg, Some(tone_color(Tone::Green)));
    }

    #[test]
    fn status_styles_follow_tones() {
        assert_eq!(
            status_style(Status::DeEscalating).fg,
            Some(tone_color(Tone::Green))
        );
    }

    #[test]
    fn badge_is_inverted() {
        let style = badge_style(Tone::Orange);
        assert_eq!(style.fg, Some(Color::Black));
        assert_eq!(style.bg, Some(tone_color(Tone::Orange)));
    }

    #[test]
    fn theme_default() {
        let theme = ColorTheme::default();
        assert_eq!(theme.text_style().fg, Some(Color::White));
        assert_eq!(theme.muted_style().fg, Some(Color::DarkGray));
        assert!(theme.title_style().add_modifier.contains(Modifier::BOLD));
    }
}
