//! # Tasq - a simple personal task manager
//!
//! A command-line utility for keeping a personal task list in a local
//! SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Add, edit, delete, and list tasks
//! - **Status Tracking**: Tasks move between To Do, In Progress, and Done
//! - **Local Storage**: A single SQLite file in the platform data directory
//! - **Configuration**: Optional override of the database location
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasq::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
