//! Main layout for taskpad

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::InputMode;
use crate::data::Task;
use crate::ui::Theme;
use crate::ui::editor::{TaskEditor, render_editor};
use crate::ui::list::{TaskList, TaskListState};

/// Render the main application layout.
/// Returns the list area for mouse handling.
#[allow(clippy::too_many_arguments)]
pub fn render_layout(
    frame: &mut ratatui::Frame,
    tasks: &[&Task],
    list_state: &mut TaskListState,
    theme: &Theme,
    input_mode: InputMode,
    search_text: &str,
    search_cursor: usize,
    show_help: bool,
    hide_completed: bool,
    editor: &TaskEditor,
) -> Rect {
    let area = frame.area();

    // Main vertical layout: list + footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Task list
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let list_area = chunks[0];

    let open = tasks.iter().filter(|t| !t.completed).count();
    let title = format!(" Tasks ({} open) ", open);
    let list = TaskList::new(tasks, theme).title(title);
    frame.render_stateful_widget(list, list_area, list_state);

    render_footer(
        frame,
        chunks[1],
        theme,
        input_mode,
        search_text,
        search_cursor,
        hide_completed,
    );

    if show_help {
        render_help_overlay(frame, area, theme);
    }

    if input_mode == InputMode::Editing {
        render_editor(frame, area, theme, editor);
    }

    list_area
}

fn render_footer(
    frame: &mut ratatui::Frame,
    area: Rect,
    theme: &Theme,
    input_mode: InputMode,
    search_text: &str,
    search_cursor: usize,
    hide_completed: bool,
) {
    // Lazygit-style footer: "Key: desc | Key: desc | ..."
    let completed_label = if hide_completed {
        "show done"
    } else {
        "hide done"
    };
    let keys: Vec<(&str, &str)> = match input_mode {
        InputMode::Search => vec![("Esc", "cancel"), ("Enter", "confirm")],
        InputMode::Editing => vec![("Esc", "cancel"), ("Enter", "save")],
        InputMode::Normal => vec![
            ("j/k", "nav"),
            ("Space", "toggle"),
            ("a", "add"),
            ("e", "edit"),
            ("d", "delete"),
            ("c", completed_label),
            ("/", "filter"),
            ("?", "help"),
            ("q", "quit"),
        ],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(theme.border)));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.muted),
        ));
    }

    // Show input text if in search mode
    if input_mode == InputMode::Search {
        spans.push(Span::styled("  |  ", Style::default().fg(theme.border)));
        spans.push(Span::styled("/", Style::default().fg(theme.accent)));

        let (before, after) = search_text.split_at(search_cursor.min(search_text.len()));
        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(theme.fg),
        ));
        spans.push(Span::styled(
            "\u{2588}".to_string(), // Block cursor
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::styled(
            after.to_string(),
            Style::default().fg(theme.fg),
        ));
    } else if input_mode == InputMode::Normal && !search_text.is_empty() {
        // Show active filter
        spans.push(Span::styled("  |  ", Style::default().fg(theme.border)));
        spans.push(Span::styled(
            format!("filter: {}", search_text),
            Style::default().fg(theme.fg),
        ));
    }

    // Version info (right-aligned if there's room)
    let left_width = Line::from(spans.clone()).width() as u16;
    let version_text = format!("taskpad {}", env!("CARGO_PKG_VERSION"));
    let version_width = version_text.len() as u16;

    if left_width + version_width + 5 <= area.width {
        let padding_width = area.width.saturating_sub(left_width + version_width);
        spans.push(Span::raw(" ".repeat(padding_width as usize)));
        spans.push(Span::styled(version_text, Style::default().fg(theme.muted)));
    }

    let footer = Paragraph::new(Line::from(spans));
    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut ratatui::Frame, area: Rect, theme: &Theme) {
    // Center a help box
    let help_width = 46.min(area.width.saturating_sub(4));
    let help_height = 17.min(area.height.saturating_sub(4));
    let x = (area.width - help_width) / 2;
    let y = (area.height - help_height) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(Clear, help_area);

    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(key, Style::default().fg(theme.accent)),
            Span::raw(desc),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::raw(""),
        entry("j/k          ", "Move up/down"),
        entry("g/G          ", "First/last task"),
        entry("Space/Enter  ", "Toggle completed"),
        entry("a            ", "Add new task"),
        entry("e            ", "Edit selected task"),
        entry("d            ", "Delete selected task"),
        entry("c            ", "Show/hide completed"),
        entry("/            ", "Filter tasks"),
        entry("r            ", "Refresh from database"),
        entry("t            ", "Cycle theme"),
        entry("q            ", "Quit"),
        Line::raw(""),
        Line::from(vec![Span::styled(
            "Mouse: click to select, wheel to scroll",
            Style::default().fg(theme.muted),
        )]),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(theme.muted),
        )]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help ")
                .title_style(Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)),
        )
        .style(Style::default().bg(theme.bg));

    frame.render_widget(help, help_area);
}
