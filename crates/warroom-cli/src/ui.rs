//! UI helpers for CLI display.

use console::{style, Color, Style};
use warroom_core::Tone;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Console style for a palette tone.
#[must_use]
pub fn tone_style(tone: Tone) -> Style {
    let color = match tone {
        Tone::Red => Color::Red,
        Tone::Orange => Color::Color256(208),
        Tone::Yellow => Color::Yellow,
        Tone::Green => Color::Green,
        Tone::Blue => Color::Blue,
        Tone::Purple => Color::Magenta,
        Tone::Cyan => Color::Cyan,
        Tone::Gray => Color::Color256(245),
    };
    Style::new().fg(color)
}

/// `text` in `tone`, or unchanged when `color` is off.
#[must_use]
pub fn paint(text: &str, tone: Tone, color: bool) -> String {
    if color {
        tone_style(tone).force_styling(true).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().green());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
