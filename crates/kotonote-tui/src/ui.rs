//! TUI rendering and per-tab dispatch

use crate::app::{App, Tab};
use crate::components::{Toast, ToastManager};
use crate::tabs::{AddKeyResult, AddTab, NotebookAction, NotebookTab, QuizAction, QuizTab};
use crate::theme::Palette;
use kotonote_core::{CoreError, RecordSeq};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};
use tracing::warn;

/// Main UI renderer, owning per-tab state
pub struct Ui {
    add: AddTab,
    notebook: NotebookTab,
    quiz: QuizTab,
    toasts: ToastManager,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    pub fn new() -> Self {
        Self {
            add: AddTab::new(),
            notebook: NotebookTab::new(),
            quiz: QuizTab::new(),
            toasts: ToastManager::new(),
        }
    }

    /// Route a key to the active tab.
    /// Returns true if the key was consumed (global keys then stay out).
    pub async fn handle_key(&mut self, key: crossterm::event::KeyCode, app: &mut App) -> bool {
        match app.active_tab {
            Tab::Add => match self.add.handle_key(key) {
                AddKeyResult::Ignored => false,
                AddKeyResult::Consumed => true,
                AddKeyResult::Submit => {
                    self.submit_add(app).await;
                    true
                }
            },
            Tab::Notebook => {
                let action = self.notebook.handle_key(key, app.session.cached());
                match action {
                    NotebookAction::Ignored => false,
                    NotebookAction::Consumed => true,
                    NotebookAction::Delete(seq) => {
                        self.delete(app, seq).await;
                        true
                    }
                    NotebookAction::Yank(text) => {
                        self.yank(text);
                        true
                    }
                }
            }
            Tab::Quiz => match self.quiz.handle_key(key) {
                QuizAction::Ignored => false,
                QuizAction::Consumed => true,
                QuizAction::Draw => {
                    match app.session.pick_random(&mut rand::rng()) {
                        Some(entry) => self.quiz.show_question(entry),
                        None => self
                            .toasts
                            .push(Toast::info("The notebook is empty, nothing to quiz")),
                    }
                    true
                }
            },
        }
    }

    async fn submit_add(&mut self, app: &mut App) {
        let source = self.add.source_value().to_string();
        let target = self.add.target_value().to_string();

        match app.session.add(&source, &target).await {
            Ok(_) => {
                self.add.clear();
                self.toasts.push(Toast::success("Saved to the notebook"));
            }
            Err(e @ CoreError::EmptyField { .. }) => {
                self.toasts.push(Toast::warning(e.to_string()));
            }
            Err(e) => {
                warn!(error = %e, "Save failed");
                self.toasts.push(Toast::error(format!("Save failed: {e}")));
            }
        }
    }

    async fn delete(&mut self, app: &mut App, seq: RecordSeq) {
        match app.session.remove_by_seq(seq).await {
            Ok(record) => {
                self.toasts
                    .push(Toast::success(format!("Deleted \"{}\"", record.source_text)));
            }
            Err(e @ (CoreError::RecordGone | CoreError::PositionMismatch { .. })) => {
                // Stale selection; the list on screen was already newer
                self.toasts.push(Toast::warning(e.to_string()));
            }
            Err(e) => {
                warn!(error = %e, "Delete failed");
                self.toasts.push(Toast::error(format!("Delete failed: {e}")));
            }
        }
    }

    fn yank(&mut self, text: String) {
        let copied = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
        match copied {
            Ok(()) => self.toasts.push(Toast::info("Copied to clipboard")),
            Err(e) => self.toasts.push(Toast::error(format!("Clipboard: {e}"))),
        }
    }

    /// Render the full UI
    pub fn render(&mut self, frame: &mut Frame, app: &mut App) {
        let palette = Palette::new(app.color_scheme);
        let size = frame.area();

        let degraded = app.session.degraded_state().reason().map(str::to_string);
        let banner_height = if degraded.is_some() { 1 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),             // header
                Constraint::Length(1),             // tab bar
                Constraint::Length(banner_height), // degraded banner
                Constraint::Min(1),                // body
                Constraint::Length(1),             // footer
            ])
            .split(size);

        self.render_header(frame, chunks[0], app, &palette);
        self.render_tab_bar(frame, chunks[1], app, &palette);

        if let Some(reason) = degraded {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("⚠ store unavailable, showing an empty notebook: {reason}"),
                    Style::default().fg(palette.warning),
                ))),
                chunks[2],
            );
        }

        let body = chunks[3].inner(Margin {
            horizontal: 1,
            vertical: 0,
        });
        match app.active_tab {
            Tab::Add => self.add.render(frame, body, &palette),
            Tab::Notebook => self.notebook.render(frame, body, app.session.cached(), &palette),
            Tab::Quiz => self.quiz.render(frame, body, app.session.len(), &palette),
        }

        self.render_footer(frame, chunks[4], app, &palette);

        // Toasts float above everything
        self.toasts.render(frame, size);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
        let line = Line::from(vec![
            Span::styled(
                " kotonote ",
                Style::default()
                    .fg(palette.focus)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("日本語 sentence notes", Style::default().fg(palette.fg)),
            Span::raw("   "),
            Span::styled(app.session.store_label(), Style::default().fg(palette.muted)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
        let titles: Vec<Line> = Tab::all()
            .iter()
            .map(|tab| {
                Line::from(vec![
                    Span::styled(
                        format!("{}:", tab.shortcut()),
                        Style::default().fg(palette.muted),
                    ),
                    Span::styled(tab.name(), Style::default().fg(palette.fg)),
                ])
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(app.active_tab.index())
            .highlight_style(
                Style::default()
                    .fg(palette.focus)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
        let quit_hint = if app.active_tab == Tab::Add {
            "Tab switch · F5 reload"
        } else {
            "Tab switch · F5 reload · q quit"
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                quit_hint,
                Style::default().fg(palette.muted),
            ))),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use kotonote_core::{ColorScheme, JsonFileStore, NotebookSession};
    use tempfile::tempdir;

    async fn app_with_pairs(dir: &std::path::Path, pairs: &[(&str, &str)]) -> App {
        let mut session =
            NotebookSession::new(Box::new(JsonFileStore::new(dir.join("sentences.json"))));
        for (jp, kr) in pairs {
            session.add(jp, kr).await.unwrap();
        }
        App::new(session, ColorScheme::Dark)
    }

    async fn type_text(ui: &mut Ui, app: &mut App, text: &str) {
        for c in text.chars() {
            ui.handle_key(KeyCode::Char(c), app).await;
        }
    }

    #[tokio::test]
    async fn test_form_submit_appends_and_clears() {
        let dir = tempdir().unwrap();
        let mut app = app_with_pairs(dir.path(), &[]).await;
        let mut ui = Ui::new();

        type_text(&mut ui, &mut app, "水をください").await;
        ui.handle_key(KeyCode::Down, &mut app).await;
        type_text(&mut ui, &mut app, "물 주세요").await;
        ui.handle_key(KeyCode::Enter, &mut app).await;

        assert_eq!(app.session.len(), 1);
        assert_eq!(app.session.cached()[0].record.source_text, "水をください");
        // Form cleared for the next pair
        assert_eq!(ui.add.source_value(), "");
        assert_eq!(ui.add.target_value(), "");
    }

    #[tokio::test]
    async fn test_empty_submit_changes_nothing() {
        let dir = tempdir().unwrap();
        let mut app = app_with_pairs(dir.path(), &[]).await;
        let mut ui = Ui::new();

        // First Enter moves focus to the empty target, second submits
        ui.handle_key(KeyCode::Enter, &mut app).await;
        ui.handle_key(KeyCode::Enter, &mut app).await;

        assert_eq!(app.session.len(), 0);
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_selected_row() {
        let dir = tempdir().unwrap();
        let mut app = app_with_pairs(dir.path(), &[("一", "일"), ("二", "이")]).await;
        let mut ui = Ui::new();
        app.active_tab = Tab::Notebook;

        ui.handle_key(KeyCode::Char('d'), &mut app).await;
        ui.handle_key(KeyCode::Char('y'), &mut app).await;

        assert_eq!(app.session.len(), 1);
        assert_eq!(app.session.cached()[0].record.source_text, "二");
    }

    #[tokio::test]
    async fn test_cancelled_delete_keeps_row() {
        let dir = tempdir().unwrap();
        let mut app = app_with_pairs(dir.path(), &[("一", "일")]).await;
        let mut ui = Ui::new();
        app.active_tab = Tab::Notebook;

        ui.handle_key(KeyCode::Char('d'), &mut app).await;
        ui.handle_key(KeyCode::Esc, &mut app).await;

        assert_eq!(app.session.len(), 1);
    }

    #[tokio::test]
    async fn test_quiz_draw_shows_a_real_pair() {
        let dir = tempdir().unwrap();
        let mut app = app_with_pairs(dir.path(), &[("一", "일")]).await;
        let mut ui = Ui::new();
        app.active_tab = Tab::Quiz;

        ui.handle_key(KeyCode::Char('n'), &mut app).await;

        match ui.quiz.state() {
            crate::tabs::quiz::QuizState::QuestionShown {
                question, answer, ..
            } => {
                assert_eq!(question, "一");
                assert_eq!(answer, "일");
            }
            other => panic!("expected a question, got {other:?}"),
        }
    }
}
