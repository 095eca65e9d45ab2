//! Color palette for the kotonote TUI
//!
//! One consistent color language across tabs: green for success, red for
//! errors, yellow for warnings, cyan for focus/selection, gray for
//! de-emphasis.

use kotonote_core::ColorScheme;
use ratatui::style::Color;

/// Scheme-aware palette handed to every render path
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub muted: Color,
    pub focus: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    pub fn new(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self {
                fg: Color::White,
                muted: Color::DarkGray,
                focus: Color::Cyan,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
            },
            ColorScheme::Light => Self {
                fg: Color::Black,
                muted: Color::Gray,
                focus: Color::Rgb(0, 128, 128),
                success: Color::Rgb(0, 128, 0),
                warning: Color::Rgb(180, 120, 0),
                error: Color::Rgb(200, 0, 0),
            },
        }
    }
}
