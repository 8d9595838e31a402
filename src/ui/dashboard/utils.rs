//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Channel;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Get a ratatui color for an activity channel
pub fn get_channel_color(channel: Channel) -> Color {
    match channel {
        Channel::Expenses => Color::Cyan,
        Channel::Ml => Color::Magenta,
    }
}

/// Bordered block for a text input, highlighted while it has focus.
pub fn input_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
}

/// Input text with a cursor marker when focused.
pub fn input_text(value: &str, focused: bool) -> String {
    if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    }
}

/// Spinner frame for an animation tick
pub fn spinner(tick: usize) -> &'static str {
    SPINNER_FRAMES[(tick / 2) % SPINNER_FRAMES.len()]
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        // MM-DD and HH:MM
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compacts_full_timestamp() {
        assert_eq!(format_compact_timestamp("2024-07-04 13:45:09"), "07-04 13:45");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn focused_input_shows_cursor() {
        assert_eq!(input_text("12", true), "12_");
        assert_eq!(input_text("12", false), "12");
    }

    #[test]
    fn spinner_cycles() {
        assert_eq!(spinner(0), spinner(8));
        assert_ne!(spinner(0), spinner(2));
    }
}
