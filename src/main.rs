//! taskpad - a terminal to-do list
//!
//! A scrollable list of tasks stored in a local SQLite database. Add,
//! edit, delete, and check off tasks with single keystrokes.

mod app;
mod data;
mod event;
mod ui;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// A terminal to-do list backed by SQLite
#[derive(Parser, Debug)]
#[command(name = "taskpad", version, about, long_about = None)]
struct Args {
    /// Path to the task database (created if missing)
    #[arg(short, long, default_value = "todo.db")]
    db: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    app::run(args.db).await
}
