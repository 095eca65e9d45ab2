//! Quiz tab - random sentence drill
//!
//! Two states: no question yet, or a question on screen. Drawing a new
//! question replaces the current one; revealing the answer is a display
//! flag, not a state change.

use crate::empty_state::EmptyState;
use crate::theme::Palette;
use kotonote_core::Entry;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Quiz state machine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuizState {
    #[default]
    NoQuestion,
    QuestionShown {
        question: String,
        answer: String,
        revealed: bool,
    },
}

/// What the Ui should do after a key press in this tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Ignored,
    Consumed,
    /// Draw a new random question from the session
    Draw,
}

/// Quiz tab state
#[derive(Debug, Default)]
pub struct QuizTab {
    state: QuizState,
}

impl QuizTab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key input for this tab
    pub fn handle_key(&mut self, key: crossterm::event::KeyCode) -> QuizAction {
        use crossterm::event::KeyCode;

        match key {
            KeyCode::Char('n') | KeyCode::Enter => QuizAction::Draw,
            KeyCode::Char(' ') => {
                if let QuizState::QuestionShown { revealed, .. } = &mut self.state {
                    *revealed = !*revealed;
                    QuizAction::Consumed
                } else {
                    QuizAction::Ignored
                }
            }
            _ => QuizAction::Ignored,
        }
    }

    /// Install a freshly drawn question, replacing any current one
    pub fn show_question(&mut self, entry: &Entry) {
        self.state = QuizState::QuestionShown {
            question: entry.record.source_text.clone(),
            answer: entry.record.target_text.clone(),
            revealed: false,
        };
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Render the quiz tab
    pub fn render(&self, frame: &mut Frame, area: Rect, notebook_len: usize, palette: &Palette) {
        if notebook_len == 0 {
            let hint = EmptyState::new("Nothing to quiz yet")
                .action("Tab", "add some sentences first")
                .build(palette);
            frame.render_widget(hint, area);
            return;
        }

        match &self.state {
            QuizState::NoQuestion => {
                let hint = EmptyState::new("Ready when you are")
                    .action("n", "draw a random sentence")
                    .build(palette);
                frame.render_widget(hint, area);
            }
            QuizState::QuestionShown {
                question,
                answer,
                revealed,
            } => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(2),
                        Constraint::Length(2), // question
                        Constraint::Length(1),
                        Constraint::Length(2), // answer
                        Constraint::Min(1),    // hint
                    ])
                    .split(area);

                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        question.clone(),
                        Style::default()
                            .fg(palette.fg)
                            .add_modifier(Modifier::BOLD),
                    )))
                    .alignment(Alignment::Center),
                    chunks[1],
                );

                let answer_line = if *revealed {
                    Line::from(Span::styled(
                        answer.clone(),
                        Style::default().fg(palette.success),
                    ))
                } else {
                    Line::from(Span::styled(
                        "···  press Space to reveal  ···",
                        Style::default().fg(palette.muted),
                    ))
                };
                frame.render_widget(
                    Paragraph::new(answer_line).alignment(Alignment::Center),
                    chunks[3],
                );

                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        "n next question · Space reveal/hide",
                        Style::default().fg(palette.muted),
                    )))
                    .alignment(Alignment::Center),
                    chunks[4],
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use kotonote_core::{RecordSeq, SentenceRecord};

    fn entry(jp: &str, kr: &str) -> Entry {
        Entry {
            seq: RecordSeq::new(1),
            record: SentenceRecord::new(jp, kr),
        }
    }

    #[test]
    fn test_starts_without_question() {
        let tab = QuizTab::new();
        assert_eq!(*tab.state(), QuizState::NoQuestion);
    }

    #[test]
    fn test_draw_requested_on_n_and_enter() {
        let mut tab = QuizTab::new();
        assert_eq!(tab.handle_key(KeyCode::Char('n')), QuizAction::Draw);
        assert_eq!(tab.handle_key(KeyCode::Enter), QuizAction::Draw);
    }

    #[test]
    fn test_new_draw_replaces_question_and_hides_answer() {
        let mut tab = QuizTab::new();

        tab.show_question(&entry("一", "일"));
        tab.handle_key(KeyCode::Char(' '));
        assert!(matches!(
            tab.state(),
            QuizState::QuestionShown { revealed: true, .. }
        ));

        // Redraw: prior pair replaced, answer hidden again
        tab.show_question(&entry("二", "이"));
        match tab.state() {
            QuizState::QuestionShown {
                question, revealed, ..
            } => {
                assert_eq!(question, "二");
                assert!(!revealed);
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn test_reveal_toggles() {
        let mut tab = QuizTab::new();
        tab.show_question(&entry("一", "일"));

        tab.handle_key(KeyCode::Char(' '));
        tab.handle_key(KeyCode::Char(' '));
        assert!(matches!(
            tab.state(),
            QuizState::QuestionShown { revealed: false, .. }
        ));
    }

    #[test]
    fn test_space_without_question_ignored() {
        let mut tab = QuizTab::new();
        assert_eq!(tab.handle_key(KeyCode::Char(' ')), QuizAction::Ignored);
    }
}
