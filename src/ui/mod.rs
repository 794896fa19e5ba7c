//! UI components for taskpad

mod editor;
mod input;
pub mod layout;
pub mod list;
mod theme;

pub use editor::{EditorAction, EditorMode, TaskEditor};
pub use input::TextInput;
pub use layout::render_layout;
pub use list::TaskListState;
pub use theme::{THEMES, Theme};
