//! Single-line labeled text input

use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Bordered one-line input with a label and placeholder
#[derive(Debug, Clone)]
pub struct InputField {
    label: String,
    placeholder: String,
    value: String,
}

impl InputField {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            value: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, palette: &Palette) {
        let (text, style) = if self.value.is_empty() {
            (self.placeholder.as_str(), Style::default().fg(palette.muted))
        } else {
            (self.value.as_str(), Style::default().fg(palette.fg))
        };

        let border_color = if focused { palette.focus } else { palette.muted };

        let mut spans = vec![Span::styled(text, style)];
        if focused {
            spans.push(Span::styled(
                "_",
                Style::default()
                    .fg(palette.focus)
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(Span::styled(
                    format!(" {} ", self.label),
                    Style::default()
                        .fg(palette.fg)
                        .add_modifier(Modifier::BOLD),
                )),
        );

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing() {
        let mut field = InputField::new("Sentence", "Type here...");
        assert!(field.is_empty());

        for c in "日本語".chars() {
            field.push_char(c);
        }
        assert_eq!(field.value(), "日本語");

        field.backspace();
        assert_eq!(field.value(), "日本");

        field.clear();
        assert!(field.is_empty());
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut field = InputField::new("Sentence", "");
        field.push_char(' ');
        field.push_char(' ');
        assert!(field.is_empty());
    }
}
