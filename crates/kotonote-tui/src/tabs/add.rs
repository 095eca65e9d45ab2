//! Add tab - the sentence entry form
//!
//! Two stacked fields, Up/Down to move between them, Enter submits.
//! The form clears on a successful save and keeps its content when the
//! store rejects the write, so nothing typed is lost.

use crate::components::InputField;
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Field {
    #[default]
    Source,
    Target,
}

/// Outcome of a key press inside the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddKeyResult {
    /// Key was not for the form; let global handling see it
    Ignored,
    /// Key edited the form
    Consumed,
    /// Enter on a filled form; caller performs the save
    Submit,
}

/// Add tab state
#[derive(Debug, Clone)]
pub struct AddTab {
    source: InputField,
    target: InputField,
    focus: Field,
}

impl Default for AddTab {
    fn default() -> Self {
        Self::new()
    }
}

impl AddTab {
    pub fn new() -> Self {
        Self {
            source: InputField::new("Sentence", "ここに文章を入力..."),
            target: InputField::new("Meaning", "뜻을 입력하세요..."),
            focus: Field::Source,
        }
    }

    pub fn source_value(&self) -> &str {
        self.source.value()
    }

    pub fn target_value(&self) -> &str {
        self.target.value()
    }

    /// Clear both fields and return focus to the top (after a save)
    pub fn clear(&mut self) {
        self.source.clear();
        self.target.clear();
        self.focus = Field::Source;
    }

    /// Handle key input for this tab
    pub fn handle_key(&mut self, key: crossterm::event::KeyCode) -> AddKeyResult {
        use crossterm::event::KeyCode;

        match key {
            KeyCode::Char(c) => {
                self.focused_field_mut().push_char(c);
                AddKeyResult::Consumed
            }
            KeyCode::Backspace => {
                self.focused_field_mut().backspace();
                AddKeyResult::Consumed
            }
            KeyCode::Up => {
                self.focus = Field::Source;
                AddKeyResult::Consumed
            }
            KeyCode::Down => {
                self.focus = Field::Target;
                AddKeyResult::Consumed
            }
            KeyCode::Esc => {
                self.clear();
                AddKeyResult::Consumed
            }
            KeyCode::Enter => {
                // Enter on the top field moves on instead of submitting a
                // half-finished pair
                if self.focus == Field::Source && self.target.is_empty() {
                    self.focus = Field::Target;
                    AddKeyResult::Consumed
                } else {
                    AddKeyResult::Submit
                }
            }
            _ => AddKeyResult::Ignored,
        }
    }

    fn focused_field_mut(&mut self) -> &mut InputField {
        match self.focus {
            Field::Source => &mut self.source,
            Field::Target => &mut self.target,
        }
    }

    /// Render the form
    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // heading
                Constraint::Length(3), // source field
                Constraint::Length(3), // target field
                Constraint::Length(1), // spacing
                Constraint::Min(1),    // hint
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Record a new sentence",
                Style::default().fg(palette.fg),
            ))),
            chunks[0],
        );

        self.source
            .render(frame, chunks[1], self.focus == Field::Source, palette);
        self.target
            .render(frame, chunks[2], self.focus == Field::Target, palette);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "↑/↓ switch field · Enter save · Esc clear",
                Style::default().fg(palette.muted),
            ))),
            chunks[4],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut tab = AddTab::new();

        for c in "水".chars() {
            tab.handle_key(KeyCode::Char(c));
        }
        tab.handle_key(KeyCode::Down);
        for c in "물".chars() {
            tab.handle_key(KeyCode::Char(c));
        }

        assert_eq!(tab.source_value(), "水");
        assert_eq!(tab.target_value(), "물");
    }

    #[test]
    fn test_enter_on_empty_target_moves_focus() {
        let mut tab = AddTab::new();
        tab.handle_key(KeyCode::Char('あ'));

        assert_eq!(tab.handle_key(KeyCode::Enter), AddKeyResult::Consumed);
        // Now on the target field; a filled form submits
        tab.handle_key(KeyCode::Char('아'));
        assert_eq!(tab.handle_key(KeyCode::Enter), AddKeyResult::Submit);
    }

    #[test]
    fn test_esc_clears_form() {
        let mut tab = AddTab::new();
        tab.handle_key(KeyCode::Char('x'));
        tab.handle_key(KeyCode::Down);
        tab.handle_key(KeyCode::Char('y'));

        tab.handle_key(KeyCode::Esc);
        assert_eq!(tab.source_value(), "");
        assert_eq!(tab.target_value(), "");
    }

    #[test]
    fn test_tab_key_falls_through() {
        let mut tab = AddTab::new();
        assert_eq!(tab.handle_key(KeyCode::Tab), AddKeyResult::Ignored);
    }
}
