//! Task list widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

use crate::data::Task;
use crate::ui::Theme;

/// Selection state for the task list
#[derive(Debug, Default)]
pub struct TaskListState {
    list_state: ListState,
}

impl TaskListState {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.list_state.select(Some(0));
        state
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.list_state.select(index);
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn first(&mut self) {
        self.list_state.select(Some(0));
    }

    pub fn last(&mut self, len: usize) {
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    /// Keep the selection inside a shrunk list (after delete or filter).
    pub fn clamp(&mut self, len: usize) {
        match self.list_state.selected() {
            Some(_) if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None if len > 0 => self.list_state.select(Some(0)),
            _ => {}
        }
    }
}

/// A list widget for displaying tasks, latest first
pub struct TaskList<'a> {
    tasks: &'a [&'a Task],
    theme: &'a Theme,
    title: String,
}

impl<'a> TaskList<'a> {
    pub fn new(tasks: &'a [&'a Task], theme: &'a Theme) -> Self {
        Self {
            tasks,
            theme,
            title: " Tasks ".to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    fn render_task(&self, task: &Task) -> ListItem<'static> {
        let text_color = self.theme.task_color(task.completed);
        let mut text_style = Style::default().fg(text_color);
        if task.completed {
            text_style = text_style.add_modifier(Modifier::CROSSED_OUT);
        }

        let line = Line::from(vec![
            Span::styled(
                format!("{} ", task.checkbox()),
                Style::default().fg(text_color),
            ),
            Span::styled(task.description.clone(), text_style),
            Span::styled(
                format!("  {}", task.created),
                Style::default().fg(self.theme.muted),
            ),
        ]);

        ListItem::new(line)
    }
}

impl StatefulWidget for TaskList<'_> {
    type State = TaskListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let items: Vec<ListItem<'static>> =
            self.tasks.iter().map(|t| self.render_task(t)).collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(self.theme.border))
            .title(self.title.clone())
            .title_style(
                Style::default()
                    .fg(self.theme.fg)
                    .add_modifier(Modifier::BOLD),
            );

        // Only set background for highlight - preserve span foreground colors
        let highlight_style = Style::default().bg(self.theme.selection_bg);

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight_style);

        StatefulWidget::render(list, area, buf, &mut state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut state = TaskListState::new();
        assert_eq!(state.selected(), Some(0));

        state.next(3);
        assert_eq!(state.selected(), Some(1));
        state.next(3);
        state.next(3);
        assert_eq!(state.selected(), Some(0));

        state.previous(3);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_navigation_empty_list() {
        let mut state = TaskListState::new();
        state.next(0);
        state.previous(0);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = TaskListState::new();
        state.select(Some(4));

        state.clamp(3);
        assert_eq!(state.selected(), Some(2));

        state.clamp(0);
        assert_eq!(state.selected(), None);

        state.clamp(2);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_first_last() {
        let mut state = TaskListState::new();
        state.last(5);
        assert_eq!(state.selected(), Some(4));
        state.first();
        assert_eq!(state.selected(), Some(0));
    }
}
