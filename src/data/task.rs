//! Task data structures

use serde::{Deserialize, Serialize};

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Row id, assigned by the store on insert
    pub id: i64,
    /// What needs doing
    pub description: String,
    /// Free-form timestamp text, set when the task was created
    pub created: String,
    /// Whether the task is done
    pub completed: bool,
}

impl Task {
    /// Checkbox glyph for list rows
    pub fn checkbox(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }
}

/// Timestamp text for newly created tasks.
///
/// Matches the format the database has always held ("Jan 01, 2024 10:00",
/// 12-hour clock), so old and new rows render alike.
pub fn now_timestamp() -> String {
    chrono::Local::now().format("%b %d, %Y %I:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_glyphs() {
        let mut task = Task {
            id: 1,
            description: "Buy milk".into(),
            created: "Jan 01, 2024 10:00".into(),
            completed: false,
        };
        assert_eq!(task.checkbox(), "[ ]");
        task.completed = true;
        assert_eq!(task.checkbox(), "[x]");
    }

    #[test]
    fn test_timestamp_shape() {
        // "Jan 01, 2024 10:00" - month name, day, year, clock
        let ts = now_timestamp();
        assert!(ts.contains(','));
        assert!(ts.contains(':'));
    }
}
