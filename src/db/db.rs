use crate::db::migrations;
use crate::libs::error::TaskError;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "tasq.db";

/// Core database handle. Opens the SQLite file at the given path and
/// brings the schema up to date before handing out the connection. The
/// connection is released when the handle is dropped.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new(path: &Path) -> Result<Db, TaskError> {
        let mut conn = Connection::open(path)?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
