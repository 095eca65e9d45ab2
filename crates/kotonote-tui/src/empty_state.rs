//! Empty-notebook hint rendering

use crate::theme::Palette;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Builds the hint shown when a tab has nothing to display
pub struct EmptyState {
    title: String,
    actions: Vec<(&'static str, &'static str)>, // (key, description)
}

impl EmptyState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            actions: Vec::new(),
        }
    }

    pub fn action(mut self, key: &'static str, description: &'static str) -> Self {
        self.actions.push((key, description));
        self
    }

    pub fn build(self, palette: &Palette) -> Paragraph<'static> {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.title,
                Style::default().fg(palette.warning),
            )),
            Line::from(""),
        ];

        for (key, desc) in self.actions {
            lines.push(Line::from(vec![
                Span::styled("  [", Style::default().fg(palette.muted)),
                Span::styled(key, Style::default().fg(palette.success)),
                Span::styled("] ", Style::default().fg(palette.muted)),
                Span::styled(desc, Style::default().fg(palette.fg)),
            ]));
        }

        Paragraph::new(lines).alignment(Alignment::Center)
    }
}
