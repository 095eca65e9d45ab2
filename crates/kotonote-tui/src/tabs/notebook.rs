//! Notebook tab - the full sentence list with per-row deletion

use crate::components::{ConfirmDialog, ConfirmResult};
use crate::empty_state::EmptyState;
use crate::theme::Palette;
use kotonote_core::{Entry, RecordSeq};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// What the Ui should do after a key press in this tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotebookAction {
    /// Key was not for this tab
    Ignored,
    /// Key handled, nothing further to do
    Consumed,
    /// User confirmed deletion of this record
    Delete(RecordSeq),
    /// Copy this text to the clipboard
    Yank(String),
}

/// Notebook tab state
pub struct NotebookTab {
    /// Selected row
    state: ListState,
    /// Record awaiting delete confirmation
    pending_delete: Option<RecordSeq>,
    confirm: ConfirmDialog,
}

impl Default for NotebookTab {
    fn default() -> Self {
        Self::new()
    }
}

impl NotebookTab {
    pub fn new() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self {
            state,
            pending_delete: None,
            confirm: ConfirmDialog::new(),
        }
    }

    /// Handle key input for this tab
    pub fn handle_key(
        &mut self,
        key: crossterm::event::KeyCode,
        entries: &[Entry],
    ) -> NotebookAction {
        use crossterm::event::KeyCode;

        // The dialog is modal: while open it sees every key
        if self.confirm.is_visible() {
            return match self.confirm.handle_key(key) {
                Some(ConfirmResult::Yes) => match self.pending_delete.take() {
                    Some(seq) => NotebookAction::Delete(seq),
                    None => NotebookAction::Consumed,
                },
                Some(ConfirmResult::No) => {
                    self.pending_delete = None;
                    NotebookAction::Consumed
                }
                None => NotebookAction::Consumed,
            };
        }

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1, entries.len());
                NotebookAction::Consumed
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1, entries.len());
                NotebookAction::Consumed
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(entry) = self.selected_entry(entries) {
                    self.pending_delete = Some(entry.seq);
                    self.confirm.show(
                        "Delete sentence",
                        format!("Delete \"{}\"?", truncate(&entry.record.source_text, 30)),
                    );
                }
                NotebookAction::Consumed
            }
            KeyCode::Char('y') => match self.selected_entry(entries) {
                Some(entry) => NotebookAction::Yank(format!(
                    "{} — {}",
                    entry.record.source_text, entry.record.target_text
                )),
                None => NotebookAction::Consumed,
            },
            _ => NotebookAction::Ignored,
        }
    }

    /// The entry the cursor sits on, if any
    pub fn selected_entry<'a>(&self, entries: &'a [Entry]) -> Option<&'a Entry> {
        entries.get(self.state.selected()?)
    }

    fn move_selection(&mut self, delta: i32, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.state.selected().unwrap_or(0) as i32;
        let new_idx = (current + delta).clamp(0, len as i32 - 1) as usize;
        self.state.select(Some(new_idx));
    }

    /// Render the notebook list
    pub fn render(&mut self, frame: &mut Frame, area: Rect, entries: &[Entry], palette: &Palette) {
        if entries.is_empty() {
            let hint = EmptyState::new("The notebook is empty")
                .action("Tab", "go to the Add tab and record a sentence")
                .build(palette);
            frame.render_widget(hint, area);
            return;
        }

        // Selection can go stale after a delete
        if let Some(sel) = self.state.selected() {
            if sel >= entries.len() {
                self.state.select(Some(entries.len() - 1));
            }
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let width = entries.len().to_string().len();
        let items: Vec<ListItem> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>width$}  ", i + 1),
                        Style::default().fg(palette.muted),
                    ),
                    Span::styled(
                        entry.record.source_text.clone(),
                        Style::default().fg(palette.fg),
                    ),
                    Span::styled("  ·  ", Style::default().fg(palette.muted)),
                    Span::styled(
                        entry.record.target_text.clone(),
                        Style::default().fg(palette.success),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.muted))
                    .title(Span::styled(
                        format!(" Sentences ({}) ", entries.len()),
                        Style::default()
                            .fg(palette.fg)
                            .add_modifier(Modifier::BOLD),
                    )),
            )
            .highlight_style(
                Style::default()
                    .fg(palette.focus)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );

        frame.render_stateful_widget(list, chunks[0], &mut self.state);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "j/k move · d delete · y copy",
                Style::default().fg(palette.muted),
            ))),
            chunks[1],
        );

        self.confirm.render(frame, area, palette);
    }
}

fn truncate(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        // Char-based so multi-byte text never splits mid-character
        s.chars().take(max - 1).collect::<String>() + "…"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use kotonote_core::SentenceRecord;

    fn entries(pairs: &[(&str, &str)]) -> Vec<Entry> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, (jp, kr))| Entry {
                seq: RecordSeq::new(i as u64 + 1),
                record: SentenceRecord::new(*jp, *kr),
            })
            .collect()
    }

    #[test]
    fn test_selection_clamps_at_ends() {
        let mut tab = NotebookTab::new();
        let list = entries(&[("一", "일"), ("二", "이")]);

        tab.handle_key(KeyCode::Up, &list);
        assert_eq!(tab.state.selected(), Some(0));

        tab.handle_key(KeyCode::Down, &list);
        tab.handle_key(KeyCode::Down, &list);
        tab.handle_key(KeyCode::Down, &list);
        assert_eq!(tab.state.selected(), Some(1));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut tab = NotebookTab::new();
        let list = entries(&[("一", "일")]);

        assert_eq!(tab.handle_key(KeyCode::Char('d'), &list), NotebookAction::Consumed);

        // 'n' cancels; nothing to delete
        assert_eq!(tab.handle_key(KeyCode::Char('n'), &list), NotebookAction::Consumed);

        tab.handle_key(KeyCode::Char('d'), &list);
        let action = tab.handle_key(KeyCode::Char('y'), &list);
        assert_eq!(action, NotebookAction::Delete(RecordSeq::new(1)));
    }

    #[test]
    fn test_delete_targets_selected_row_identity() {
        let mut tab = NotebookTab::new();
        let list = entries(&[("一", "일"), ("二", "이"), ("三", "삼")]);

        tab.handle_key(KeyCode::Down, &list);
        tab.handle_key(KeyCode::Char('d'), &list);
        let action = tab.handle_key(KeyCode::Char('y'), &list);

        assert_eq!(action, NotebookAction::Delete(RecordSeq::new(2)));
    }

    #[test]
    fn test_delete_on_empty_list_is_noop() {
        let mut tab = NotebookTab::new();
        assert_eq!(tab.handle_key(KeyCode::Char('d'), &[]), NotebookAction::Consumed);
        assert!(!tab.confirm.is_visible());
    }

    #[test]
    fn test_yank_formats_pair() {
        let mut tab = NotebookTab::new();
        let list = entries(&[("ありがとう", "감사합니다")]);

        let action = tab.handle_key(KeyCode::Char('y'), &list);
        assert_eq!(
            action,
            NotebookAction::Yank("ありがとう — 감사합니다".to_string())
        );
    }

    #[test]
    fn test_modal_dialog_swallows_navigation() {
        let mut tab = NotebookTab::new();
        let list = entries(&[("一", "일"), ("二", "이")]);

        tab.handle_key(KeyCode::Char('d'), &list);
        assert_eq!(tab.handle_key(KeyCode::Char('j'), &list), NotebookAction::Consumed);
        assert_eq!(tab.state.selected(), Some(0));
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("こんにちは", 10), "こんにちは");
        assert_eq!(truncate("こんにちは世界です", 5), "こんにち…");
    }
}
