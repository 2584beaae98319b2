//! Database layer for the tasq application.
//!
//! A small persistence layer built on SQLite. `db` owns connection
//! setup, `migrations` keeps the schema current, and `tasks` is the
//! store the command layer talks to.

/// Core database connection and initialization.
pub mod db;

/// Versioned schema migrations, applied at connection setup.
pub mod migrations;

/// CRUD operations over the `tasks` table.
pub mod tasks;
