//! TUI application state

use kotonote_core::{ColorScheme, NotebookSession};

/// Active tab in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Add,
    Notebook,
    Quiz,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Add, Tab::Notebook, Tab::Quiz]
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Add => 0,
            Tab::Notebook => 1,
            Tab::Quiz => 2,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Tab::Add,
            1 => Tab::Notebook,
            2 => Tab::Quiz,
            _ => Tab::Add,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Add => "Add",
            Tab::Notebook => "Notebook",
            Tab::Quiz => "Quiz",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Add => '1',
            Tab::Notebook => '2',
            Tab::Quiz => '3',
        }
    }
}

/// TUI application state
pub struct App {
    /// The one notebook session for this run, exclusively owned here
    pub session: NotebookSession,

    /// Currently active tab
    pub active_tab: Tab,

    /// Color scheme from config
    pub color_scheme: ColorScheme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Set by F5; the run loop repopulates the cache and clears it
    pub needs_refresh: bool,
}

impl App {
    pub fn new(session: NotebookSession, color_scheme: ColorScheme) -> Self {
        Self {
            session,
            active_tab: Tab::default(),
            color_scheme,
            should_quit: false,
            needs_refresh: false,
        }
    }

    /// Handle global keys not consumed by the active tab.
    /// Returns true if the key was handled.
    pub fn handle_key(&mut self, key: crossterm::event::KeyCode) -> bool {
        use crossterm::event::KeyCode;

        // Text entry owns printable keys while the Add tab is active;
        // only navigation keys act globally there.
        let typing = self.active_tab == Tab::Add;

        match key {
            KeyCode::Char('q') if !typing => {
                self.should_quit = true;
                true
            }
            KeyCode::F(5) => {
                self.needs_refresh = true;
                true
            }
            KeyCode::Tab => {
                self.next_tab();
                true
            }
            KeyCode::BackTab => {
                self.prev_tab();
                true
            }
            KeyCode::Char(c) if !typing && ('1'..='3').contains(&c) => {
                let idx = (c as usize) - ('1' as usize);
                self.active_tab = Tab::from_index(idx);
                true
            }
            _ => false,
        }
    }

    fn next_tab(&mut self) {
        let idx = self.active_tab.index();
        self.active_tab = Tab::from_index((idx + 1) % Tab::all().len());
    }

    fn prev_tab(&mut self) {
        let idx = self.active_tab.index();
        self.active_tab = Tab::from_index((idx + Tab::all().len() - 1) % Tab::all().len());
    }
}
