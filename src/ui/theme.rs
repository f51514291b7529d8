//! Shared colors and text styles.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Cyan;
pub const POSITIVE: Color = Color::Green;
pub const NEGATIVE: Color = Color::Red;
pub const MUTED: Color = Color::DarkGray;
pub const SECTION_BG: Color = Color::Rgb(30, 30, 38);
pub const FOCUS_BG: Color = Color::Rgb(40, 40, 60);
pub const SELECT_BG: Color = Color::Rgb(28, 48, 60);

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn secondary() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn column_header() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
}

pub fn pct_style(pct: f64) -> Style {
    if pct >= 0.0 {
        Style::default().fg(POSITIVE)
    } else {
        Style::default().fg(NEGATIVE)
    }
}

pub fn error_banner() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn title() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}
