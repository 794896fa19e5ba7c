//! SQLite-backed task store

use anyhow::{Context, Result};
use rusqlite::{Connection, params};
use std::path::Path;

use super::Task;

/// The persistence layer: one table, four statements.
///
/// A store is opened fresh for every user gesture and dropped after, so
/// each operation gets its own connection and commits immediately. There
/// is no pooling and no transaction spans more than one statement.
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    /// Open (or create) the task database and ensure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .with_context(|| format!("Failed to open database: {:?}", path.as_ref()))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY,
                description TEXT NOT NULL,
                created TEXT NOT NULL,
                completed BOOLEAN NOT NULL
            )",
            [],
        )
        .context("Failed to create tasks table")?;

        Ok(Self { conn })
    }

    /// Load all tasks in stored (insertion) order.
    pub fn list(&self) -> Result<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, description, created, completed FROM tasks")?;

        let tasks = stmt
            .query_map([], |row| {
                Ok(Task {
                    id: row.get(0)?,
                    description: row.get(1)?,
                    created: row.get(2)?,
                    completed: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    /// Insert a task and return its freshly assigned id.
    pub fn insert(&self, description: &str, created: &str, completed: bool) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO tasks (description, created, completed) VALUES (?1, ?2, ?3)",
                params![description, created, completed],
            )
            .context("Failed to insert task")?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Overwrite a task's description and completed flag.
    ///
    /// The id and created timestamp are never touched. No-op if the id
    /// does not exist.
    pub fn update(&self, id: i64, description: &str, completed: bool) -> Result<()> {
        self.conn
            .execute(
                "UPDATE tasks SET description = ?1, completed = ?2 WHERE id = ?3",
                params![description, completed, id],
            )
            .context("Failed to update task")?;

        Ok(())
    }

    /// Remove a task. No-op if the id does not exist.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])
            .context("Failed to delete task")?;

        Ok(())
    }

    /// Get a single task by id.
    pub fn get(&self, id: i64) -> Result<Option<Task>> {
        let tasks = self.list()?;
        Ok(tasks.into_iter().find(|t| t.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, TaskStore) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = TaskStore::open(dir.path().join("todo.db")).expect("Failed to open store");
        (dir, store)
    }

    #[test]
    fn test_open_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todo.db");

        let store = TaskStore::open(&path).unwrap();
        store.insert("Buy milk", "Jan 01, 2024 10:00", false).unwrap();
        drop(store);

        // Reopening must not recreate the table or lose rows
        let store = TaskStore::open(&path).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_insert_round_trip() {
        let (_dir, store) = temp_store();

        let id = store.insert("Buy milk", "Jan 01, 2024 10:00", false).unwrap();
        assert_eq!(id, 1);

        let tasks = store.list().unwrap();
        assert_eq!(
            tasks,
            vec![Task {
                id: 1,
                description: "Buy milk".into(),
                created: "Jan 01, 2024 10:00".into(),
                completed: false,
            }]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let (_dir, store) = temp_store();

        let a = store.insert("one", "Jan 01, 2024 10:00", false).unwrap();
        let b = store.insert("two", "Jan 01, 2024 10:01", false).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_update_preserves_id_and_created() {
        let (_dir, store) = temp_store();

        let id = store.insert("Buy milk", "Jan 01, 2024 10:00", false).unwrap();
        store.update(id, "Buy milk", true).unwrap();

        let task = store.get(id).unwrap().expect("task should exist");
        assert_eq!(task.id, id);
        assert_eq!(task.created, "Jan 01, 2024 10:00");
        assert!(task.completed);
    }

    #[test]
    fn test_toggle_affects_one_row() {
        let (_dir, store) = temp_store();

        let a = store.insert("one", "Jan 01, 2024 10:00", false).unwrap();
        let b = store.insert("two", "Jan 01, 2024 10:01", false).unwrap();

        store.update(a, "one", true).unwrap();

        assert!(store.get(a).unwrap().unwrap().completed);
        assert!(!store.get(b).unwrap().unwrap().completed);
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let (_dir, store) = temp_store();

        let id = store.insert("keep me", "Jan 01, 2024 10:00", false).unwrap();

        store.delete(999).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
        assert!(store.get(id).unwrap().is_some());
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let (_dir, store) = temp_store();

        store.update(999, "ghost", true).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_full_lifecycle() {
        let (_dir, store) = temp_store();

        let id = store.insert("Buy milk", "Jan 01, 2024 10:00", false).unwrap();
        assert_eq!(id, 1);

        let tasks = store.list().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "Buy milk");
        assert!(!tasks[0].completed);

        store.update(id, "Buy milk", true).unwrap();
        let tasks = store.list().unwrap();
        assert_eq!(tasks[0].created, "Jan 01, 2024 10:00");
        assert!(tasks[0].completed);

        store.delete(id).unwrap();
        assert!(store.list().unwrap().is_empty());
    }
}
