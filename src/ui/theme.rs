//! Color themes for taskpad
//!
//! Neutral, lazygit-style palettes: simple glyphs, green accents for
//! completed tasks, terminal-default background in the default theme.

use ratatui::style::Color;

/// A color theme for the application
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name
    pub name: &'static str,
    /// Background color
    pub bg: Color,
    /// Primary foreground color
    pub fg: Color,
    /// Muted/secondary text color (timestamps, hints)
    pub muted: Color,
    /// Accent/highlight color (keys, cursor)
    pub accent: Color,
    /// Border color
    pub border: Color,
    /// Border color for the active modal
    pub active_border: Color,
    /// Selection/highlight background
    pub selection_bg: Color,
    /// Pending task text
    pub pending: Color,
    /// Completed task text (struck through)
    pub done: Color,
}

/// Default theme - neutral, uses the terminal's own background
pub const DEFAULT: Theme = Theme {
    name: "Default",
    bg: Color::Reset,
    fg: Color::White,
    muted: Color::Gray,
    accent: Color::Cyan,
    border: Color::DarkGray,
    active_border: Color::Green,
    selection_bg: Color::DarkGray,
    pending: Color::White,
    done: Color::Green,
};

/// Tokyo Night theme
pub const TOKYO_NIGHT: Theme = Theme {
    name: "Tokyo Night",
    bg: Color::Rgb(26, 27, 38),
    fg: Color::Rgb(169, 177, 214),
    muted: Color::Rgb(86, 95, 137),
    accent: Color::Rgb(122, 162, 247),
    border: Color::Rgb(59, 66, 97),
    active_border: Color::Rgb(158, 206, 106),
    selection_bg: Color::Rgb(41, 46, 66),
    pending: Color::Rgb(192, 202, 245),
    done: Color::Rgb(158, 206, 106),
};

/// Dracula theme
pub const DRACULA: Theme = Theme {
    name: "Dracula",
    bg: Color::Rgb(40, 42, 54),
    fg: Color::Rgb(248, 248, 242),
    muted: Color::Rgb(98, 114, 164),
    accent: Color::Rgb(189, 147, 249),
    border: Color::Rgb(68, 71, 90),
    active_border: Color::Rgb(80, 250, 123),
    selection_bg: Color::Rgb(68, 71, 90),
    pending: Color::Rgb(248, 248, 242),
    done: Color::Rgb(80, 250, 123),
};

/// All available themes (Default first)
pub const THEMES: &[Theme] = &[DEFAULT, TOKYO_NIGHT, DRACULA];

impl Theme {
    /// Text color for a task row given its completion state
    pub fn task_color(&self, completed: bool) -> Color {
        if completed { self.done } else { self.pending }
    }
}
