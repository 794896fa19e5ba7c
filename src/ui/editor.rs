//! Task editor modal - one input field, used for both add and edit
//!
//! Layout:
//! ╭─New Task───────────────────────────────────────────────────╮
//! │ Buy milk█                                                  │
//! ╰─────────────────────Enter: save | Esc: cancel──────────────╯

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::Theme;
use crate::ui::input::TextInput;

/// What the editor is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Creating a new task
    #[default]
    Add,
    /// Rewriting the description of an existing task
    Edit(i64),
}

/// Action to take after handling a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    Submit,
    Cancelled,
}

/// State for the add/edit task modal
#[derive(Debug, Clone, Default)]
pub struct TaskEditor {
    /// Description input
    input: TextInput,
    /// Whether we are adding or editing (and which id)
    pub mode: EditorMode,
    /// Whether the modal is open
    pub open: bool,
}

impl TaskEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open for creating a new task
    pub fn open_add(&mut self) {
        self.open = true;
        self.mode = EditorMode::Add;
        self.input.clear();
    }

    /// Open prefilled for editing an existing task
    pub fn open_edit(&mut self, id: i64, description: &str) {
        self.open = true;
        self.mode = EditorMode::Edit(id);
        self.input = TextInput::with_text(description);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.input.clear();
    }

    /// The trimmed description, if non-empty
    pub fn description(&self) -> Option<&str> {
        let text = self.input.text().trim();
        if text.is_empty() { None } else { Some(text) }
    }

    /// Handle a key event.
    ///
    /// Enter with empty input is swallowed: the modal stays open and the
    /// gesture is abandoned, matching the empty-input validation rule.
    pub fn handle_key(&mut self, key: KeyEvent) -> EditorAction {
        match key.code {
            KeyCode::Esc => {
                self.close();
                EditorAction::Cancelled
            }
            KeyCode::Enter => {
                if self.description().is_some() {
                    EditorAction::Submit
                } else {
                    EditorAction::None
                }
            }
            _ => {
                self.input.handle_key(key);
                EditorAction::None
            }
        }
    }
}

/// Render the task editor modal
pub fn render_editor(frame: &mut Frame, area: Rect, theme: &Theme, editor: &TaskEditor) {
    let width = (area.width.saturating_sub(4)).min(60);
    let height = 3;
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    let modal_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, modal_area);

    let title = match editor.mode {
        EditorMode::Add => " New Task ",
        EditorMode::Edit(_) => " Edit Task ",
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(theme.active_border))
        .title(title)
        .title_style(Style::default().fg(theme.fg).add_modifier(Modifier::BOLD))
        .title_bottom(
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(theme.accent)),
                Span::styled(": save | ", Style::default().fg(theme.muted)),
                Span::styled("Esc", Style::default().fg(theme.accent)),
                Span::styled(": cancel", Style::default().fg(theme.muted)),
            ])
            .right_aligned(),
        );

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    // Input text with a block cursor covering the char at the cursor
    let text = editor.input.text();
    let cursor = editor.input.cursor_byte();
    let (before, after) = text.split_at(cursor.min(text.len()));
    let rest: String = after.chars().skip(1).collect();

    let mut spans = vec![
        Span::styled(before.to_string(), Style::default().fg(theme.fg)),
        Span::styled("\u{2588}", Style::default().fg(theme.accent)),
    ];
    if !rest.is_empty() {
        spans.push(Span::styled(rest, Style::default().fg(theme.fg)));
    }

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg));
    frame.render_widget(para, inner);
}
