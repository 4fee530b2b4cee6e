//! Color definitions for bases and transcript lines

use ratatui::style::Color;

/// Get the display color for a nucleotide
pub fn get_base_color(base: char) -> Color {
    match base.to_ascii_uppercase() {
        'A' => Color::Green,
        'T' => Color::Red,
        'U' => Color::LightRed,
        'C' => Color::Blue,
        'G' => Color::Yellow,
        _ => Color::DarkGray,
    }
}

/// Color for a sequence classification label
pub fn get_classification_color(label: &str) -> Color {
    match label {
        "GC-Rich" => Color::Yellow,
        "AT-Rich" => Color::Green,
        _ => Color::White,
    }
}
