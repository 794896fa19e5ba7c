//! Data layer for taskpad
//!
//! This module holds the task model and the SQLite store behind it.

mod sqlite;
mod task;

pub use sqlite::TaskStore;
pub use task::{Task, now_timestamp};
