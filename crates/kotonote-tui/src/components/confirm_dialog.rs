//! Confirmation dialog component

use crate::theme::Palette;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Confirmation dialog result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    Yes,
    No,
}

/// Modal y/n dialog; deletes default to No
#[derive(Debug, Clone, Default)]
pub struct ConfirmDialog {
    visible: bool,
    title: String,
    message: String,
}

impl ConfirmDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.title = title.into();
        self.message = message.into();
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Handle key input, returns Some(result) if a choice was made
    pub fn handle_key(&mut self, key: KeyCode) -> Option<ConfirmResult> {
        if !self.visible {
            return None;
        }

        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.hide();
                Some(ConfirmResult::Yes)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Enter => {
                self.hide();
                Some(ConfirmResult::No)
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        if !self.visible {
            return;
        }

        let dialog_width = (area.width as f32 * 0.5).max(40.0) as u16;
        let dialog_height = 8;
        let dialog_x = area.width.saturating_sub(dialog_width) / 2;
        let dialog_y = area.height.saturating_sub(dialog_height) / 2;

        let dialog_area = Rect {
            x: area.x + dialog_x,
            y: area.y + dialog_y,
            width: dialog_width.min(area.width),
            height: dialog_height.min(area.height),
        };

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.warning))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(palette.warning)
                    .add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(2), Constraint::Length(2)])
            .split(inner);

        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message.clone(),
                Style::default().fg(palette.fg),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[0]);

        let buttons = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    "[y] ",
                    Style::default()
                        .fg(palette.error)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("delete", Style::default().fg(palette.fg)),
                Span::raw("   "),
                Span::styled(
                    "[n/Esc] ",
                    Style::default()
                        .fg(palette.muted)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("keep", Style::default().fg(palette.muted)),
            ]),
            Line::from(Span::styled(
                "(Enter = keep)",
                Style::default().fg(palette.muted),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(buttons, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_dialog_ignores_keys() {
        let mut dialog = ConfirmDialog::new();
        assert_eq!(dialog.handle_key(KeyCode::Char('y')), None);
    }

    #[test]
    fn test_yes_confirms_and_hides() {
        let mut dialog = ConfirmDialog::new();
        dialog.show("Delete", "Really?");

        assert_eq!(dialog.handle_key(KeyCode::Char('y')), Some(ConfirmResult::Yes));
        assert!(!dialog.is_visible());
    }

    #[test]
    fn test_enter_defaults_to_no() {
        let mut dialog = ConfirmDialog::new();
        dialog.show("Delete", "Really?");

        assert_eq!(dialog.handle_key(KeyCode::Enter), Some(ConfirmResult::No));
        assert!(!dialog.is_visible());
    }
}
