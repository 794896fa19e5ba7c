//! Application state and main loop

use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};

use crate::data::{Task, TaskStore, now_timestamp};
use crate::event;
use crate::ui::{
    EditorAction, EditorMode, TaskEditor, TaskListState, TextInput, THEMES, Theme, render_layout,
};

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
    /// Add/edit modal is open
    Editing,
}

/// Application state
pub struct App {
    /// Path to the task database
    db_path: PathBuf,
    /// All loaded tasks, in stored (insertion) order
    tasks: Vec<Task>,
    /// List widget state
    list_state: TaskListState,
    /// Current theme index
    theme_idx: usize,
    /// Current input mode
    input_mode: InputMode,
    /// Text input for search
    search_input: TextInput,
    /// Add/edit modal state
    editor: TaskEditor,
    /// Show help overlay
    show_help: bool,
    /// Hide completed tasks
    hide_completed: bool,
    /// Should the app quit
    should_quit: bool,
    /// List area for mouse handling
    list_area: Rect,
}

impl App {
    /// Create a new app instance, creating the database if needed
    pub fn new(db_path: PathBuf) -> Result<Self> {
        let store = TaskStore::open(&db_path)?;
        let tasks = store.list()?;

        Ok(Self {
            db_path,
            tasks,
            list_state: TaskListState::new(),
            theme_idx: 0,
            input_mode: InputMode::Normal,
            search_input: TextInput::new(),
            editor: TaskEditor::new(),
            show_help: false,
            hide_completed: false,
            should_quit: false,
            list_area: Rect::default(),
        })
    }

    /// Get the current theme
    fn theme(&self) -> &Theme {
        &THEMES[self.theme_idx]
    }

    /// Open a fresh store connection for one gesture
    fn store(&self) -> Result<TaskStore> {
        TaskStore::open(&self.db_path)
    }

    /// Reload tasks from the database
    fn refresh(&mut self) -> Result<()> {
        self.tasks = self.store()?.list()?;
        self.list_state.clamp(self.visible_tasks().len());
        Ok(())
    }

    /// Tasks as displayed: latest first, honoring filter and hide-completed
    fn visible_tasks(&self) -> Vec<&Task> {
        let filter = if self.search_input.is_empty() {
            None
        } else {
            Some(self.search_input.text().to_lowercase())
        };

        self.tasks
            .iter()
            .rev()
            .filter(|t| !(self.hide_completed && t.completed))
            .filter(|t| {
                filter
                    .as_ref()
                    .map(|f| t.description.to_lowercase().contains(f))
                    .unwrap_or(true)
            })
            .collect()
    }

    /// The task currently under the selection, cloned out of the list
    fn selected_task(&self) -> Option<Task> {
        let idx = self.list_state.selected()?;
        self.visible_tasks().get(idx).map(|t| (*t).clone())
    }

    /// Log a failed gesture and carry on; the operation is abandoned
    fn log_err(what: &str, result: Result<()>) {
        if let Err(err) = result {
            eprintln!("taskpad: {what} failed: {err:#}");
        }
    }

    /// Handle a key event
    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Help overlay takes precedence
        if self.show_help {
            self.show_help = false;
            return;
        }

        // Input mode handling (search or add/edit modal)
        match self.input_mode {
            InputMode::Search => {
                match key.code {
                    KeyCode::Esc => {
                        self.input_mode = InputMode::Normal;
                        self.search_input.clear();
                    }
                    KeyCode::Enter => {
                        // Keep the filter text in search_input
                        self.input_mode = InputMode::Normal;
                    }
                    _ => {
                        let old_len = self.search_input.text().len();
                        self.search_input.handle_key(key);
                        // Reset selection when the filter changes
                        if self.search_input.text().len() != old_len {
                            self.list_state.first();
                        }
                    }
                }
                return;
            }
            InputMode::Editing => {
                match self.editor.handle_key(key) {
                    EditorAction::Submit => {
                        Self::log_err("save task", self.submit_editor());
                        self.input_mode = InputMode::Normal;
                        self.editor.close();
                    }
                    EditorAction::Cancelled => {
                        self.input_mode = InputMode::Normal;
                    }
                    EditorAction::None => {}
                }
                return;
            }
            InputMode::Normal => {}
        }

        // Normal mode
        match key.code {
            // Quit
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => {
                self.list_state.previous(self.visible_tasks().len());
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list_state.next(self.visible_tasks().len());
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.list_state.first();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.list_state.last(self.visible_tasks().len());
            }

            // Toggle completed
            KeyCode::Char(' ') | KeyCode::Enter => {
                Self::log_err("toggle task", self.toggle_selected());
            }

            // Add new task
            KeyCode::Char('a') => {
                self.input_mode = InputMode::Editing;
                self.editor.open_add();
            }

            // Edit selected task
            KeyCode::Char('e') => {
                if let Some(task) = self.selected_task() {
                    self.input_mode = InputMode::Editing;
                    self.editor.open_edit(task.id, &task.description);
                }
            }

            // Delete selected task
            KeyCode::Char('d') => {
                Self::log_err("delete task", self.delete_selected());
            }

            // Toggle completed visibility
            KeyCode::Char('c') => {
                self.hide_completed = !self.hide_completed;
                self.list_state.clamp(self.visible_tasks().len());
            }

            // Search
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Search;
                self.search_input.clear();
            }

            // Clear filter
            KeyCode::Esc => {
                self.search_input.clear();
                self.list_state.clamp(self.visible_tasks().len());
            }

            // Theme
            KeyCode::Char('t') => {
                self.theme_idx = (self.theme_idx + 1) % THEMES.len();
            }

            // Refresh
            KeyCode::Char('r') => {
                Self::log_err("refresh", self.refresh());
            }

            // Help
            KeyCode::Char('?') => {
                self.show_help = true;
            }

            _ => {}
        }
    }

    /// Handle a mouse event
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let x = mouse.column;
                let y = mouse.row;

                if self.list_area.contains((x, y).into()) {
                    // +1 for the border
                    let inner_y = y.saturating_sub(self.list_area.y + 1);
                    let idx = inner_y as usize;
                    if idx < self.visible_tasks().len() {
                        self.list_state.select(Some(idx));
                    }
                }
            }
            MouseEventKind::ScrollUp => {
                self.list_state.previous(self.visible_tasks().len());
            }
            MouseEventKind::ScrollDown => {
                self.list_state.next(self.visible_tasks().len());
            }
            _ => {}
        }
    }

    /// Write the editor's contents to the store (insert or update)
    fn submit_editor(&mut self) -> Result<()> {
        let Some(description) = self.editor.description().map(str::to_string) else {
            return Ok(());
        };

        match self.editor.mode {
            EditorMode::Add => {
                self.store()?
                    .insert(&description, &now_timestamp(), false)?;
                self.refresh()?;
                // The newest task renders at the top
                self.list_state.first();
            }
            EditorMode::Edit(id) => {
                let completed = self
                    .tasks
                    .iter()
                    .find(|t| t.id == id)
                    .map(|t| t.completed)
                    .unwrap_or(false);
                self.store()?.update(id, &description, completed)?;
                self.refresh()?;
            }
        }

        Ok(())
    }

    /// Flip the completed flag of the selected task
    fn toggle_selected(&mut self) -> Result<()> {
        if let Some(task) = self.selected_task() {
            self.store()?
                .update(task.id, &task.description, !task.completed)?;
            self.refresh()?;
        }
        Ok(())
    }

    /// Delete the selected task from store and view
    fn delete_selected(&mut self) -> Result<()> {
        if let Some(task) = self.selected_task() {
            self.store()?.delete(task.id)?;
            self.refresh()?;
        }
        Ok(())
    }
}

/// Setup the terminal
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    // Check if we have a TTY
    if !io::stdout().is_terminal() {
        anyhow::bail!("taskpad requires a terminal (TTY) to run. Cannot run in a pipe.");
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the application
pub async fn run(db_path: PathBuf) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let mut app = App::new(db_path)?;

    let result = run_loop(&mut terminal, &mut app).await;

    restore_terminal(&mut terminal)?;

    result
}

async fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        // Get values before drawing to avoid borrow issues
        let theme = app.theme().clone();
        let input_mode = app.input_mode;
        let search_text = app.search_input.text().to_string();
        let search_cursor = app.search_input.cursor_byte();
        let show_help = app.show_help;
        let hide_completed = app.hide_completed;
        let visible: Vec<Task> = app.visible_tasks().into_iter().cloned().collect();
        let visible_refs: Vec<&Task> = visible.iter().collect();

        // Draw
        terminal.draw(|frame| {
            let list_area = render_layout(
                frame,
                &visible_refs,
                &mut app.list_state,
                &theme,
                input_mode,
                &search_text,
                search_cursor,
                show_help,
                hide_completed,
                &app.editor,
            );
            // Store the area for mouse handling
            app.list_area = list_area;
        })?;

        // Handle events
        if let Some(event) = event::poll_event(tick_rate)? {
            match event {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
